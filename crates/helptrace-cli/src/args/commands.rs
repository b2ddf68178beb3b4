use super::enums::{DetailSection, ExportFormat};
use clap::Subcommand;
use std::path::PathBuf;

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Show the dashboard stat cards")]
    Stats,

    #[command(about = "Show the active session panel")]
    Active,

    #[command(about = "Render the weekly volume and issue-category charts")]
    Charts,

    #[command(about = "Manage and view session history")]
    Session {
        #[command(subcommand)]
        command: SessionCommand,
    },

    #[command(about = "Open the interactive dashboard")]
    Dashboard,
}

#[derive(Subcommand)]
pub enum SessionCommand {
    #[command(about = "List session history with search and filtering")]
    List {
        #[arg(long, help = "Free-text search over id, summary, and transcripts")]
        query: Option<String>,

        #[arg(long, default_value = "50")]
        limit: usize,

        #[arg(long, help = "Only sessions that escalated into a ticket")]
        tickets_only: bool,
    },

    #[command(about = "Show one session's transcript and AI summary")]
    Show {
        #[arg(help = "Session id, or an unambiguous prefix of one")]
        session_id: String,

        #[arg(long, default_value = "all")]
        section: DetailSection,
    },

    #[command(about = "Export session history rows")]
    Export {
        #[arg(long, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, help = "Output path (defaults to stdout)")]
        output: Option<PathBuf>,
    },
}
