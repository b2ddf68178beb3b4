use anyhow::Result;
use helptrace_types::Dataset;

use crate::args::OutputFormat;
use crate::presentation::presenters::present_session_detail;
use crate::presentation::views::ActiveSessionView;

pub fn handle(dataset: &Dataset, format: OutputFormat, color: bool) -> Result<()> {
    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&dataset.active_session)?);
        return Ok(());
    }

    let vm = dataset.active_session.as_ref().map(present_session_detail);
    print!("{}", ActiveSessionView::new(vm.as_ref(), color));
    Ok(())
}
