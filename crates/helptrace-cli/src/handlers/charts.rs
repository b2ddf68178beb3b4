use anyhow::Result;
use helptrace_types::Dataset;

use crate::args::OutputFormat;
use crate::presentation::presenters::present_charts;
use crate::presentation::views::ChartsView;

pub fn handle(dataset: &Dataset, format: OutputFormat, color: bool) -> Result<()> {
    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&dataset.charts)?);
        return Ok(());
    }

    let vm = present_charts(&dataset.charts);
    print!("{}", ChartsView::new(&vm, color));
    Ok(())
}
