// NOTE: Command Organization Rationale
//
// Why a `session` namespace instead of flat commands?
// - list/show/export all operate on the session history and share options
// - Namespacing keeps --help scannable as surfaces grow
// - Top-level commands (stats, active, charts, dashboard) each render one
//   dashboard panel and take no shared session options

mod commands;
mod enums;

pub use commands::*;
pub use enums::*;

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "helptrace")]
#[command(about = "Render helpdesk session analytics in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Dataset JSON file. Falls back to the configured default, then to the
    /// built-in demo dataset.
    #[arg(long, global = true)]
    pub data: Option<PathBuf>,

    // Not `global`: `session export` defines its own `--format` with a
    // different value type, and clap panics if a global arg shares an id
    // with a subcommand arg of another type.
    #[arg(long, default_value = "plain")]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
