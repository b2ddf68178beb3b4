use anyhow::Result;
use helptrace_types::Dataset;

use crate::args::OutputFormat;
use crate::presentation::presenters::present_stats;
use crate::presentation::views::StatsView;

pub fn handle(dataset: &Dataset, format: OutputFormat, color: bool) -> Result<()> {
    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&dataset.stats)?);
        return Ok(());
    }

    let vm = present_stats(&dataset.stats);
    print!("{}", StatsView::new(&vm, color));
    Ok(())
}
