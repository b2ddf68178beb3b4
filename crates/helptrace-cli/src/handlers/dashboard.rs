use anyhow::Result;
use helptrace_types::Dataset;

use crate::config::{Config, ThemePreference};
use crate::presentation::theme::Theme;
use crate::presentation::tui;

pub fn handle(dataset: Dataset, config: &Config) -> Result<()> {
    let theme = match config.theme {
        ThemePreference::Dark => Theme::Dark,
        ThemePreference::Light => Theme::Light,
    };
    tui::run(dataset, theme)
}
