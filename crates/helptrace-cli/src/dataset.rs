use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use std::path::{Path, PathBuf};

use helptrace_engine::validate_dataset;
use helptrace_types::Dataset;

use crate::config::Config;
use crate::demo;

/// Where a dataset came from, for the occasional hint line.
pub enum DatasetSource {
    File(PathBuf),
    BuiltinDemo,
}

/// Resolve and load the dataset: explicit --data first, then the configured
/// default, then the built-in demo dataset.
///
/// Validation issues are warnings on stderr, never fatal: the dashboard
/// still renders and the data source can be fixed afterwards.
pub fn load(explicit: Option<&Path>, config: &Config, color: bool) -> Result<(Dataset, DatasetSource)> {
    let path = explicit
        .map(Path::to_path_buf)
        .or_else(|| config.data_file.clone());

    let (dataset, source) = match path {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read dataset: {}", path.display()))?;
            let dataset = Dataset::from_json_str(&content)
                .with_context(|| format!("failed to parse dataset: {}", path.display()))?;
            (dataset, DatasetSource::File(path))
        }
        None => (demo::demo_dataset(), DatasetSource::BuiltinDemo),
    };

    for issue in validate_dataset(&dataset) {
        if color {
            eprintln!("{} {}", "warning:".yellow().bold(), issue);
        } else {
            eprintln!("warning: {}", issue);
        }
    }

    Ok((dataset, source))
}
