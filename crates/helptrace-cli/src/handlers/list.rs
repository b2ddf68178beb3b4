use anyhow::Result;
use chrono::Utc;
use helptrace_engine::filter_sessions;
use helptrace_types::{Dataset, Session};

use crate::args::OutputFormat;
use crate::presentation::presenters::present_session_list;
use crate::presentation::views::SessionListView;

pub fn handle(
    dataset: &Dataset,
    query: Option<&str>,
    limit: usize,
    tickets_only: bool,
    format: OutputFormat,
    color: bool,
) -> Result<()> {
    let mut sessions: Vec<&Session> = filter_sessions(&dataset.history, query.unwrap_or(""));
    if tickets_only {
        sessions.retain(|session| session.ticket_raised);
    }
    sessions.truncate(limit);

    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&sessions)?);
        return Ok(());
    }

    let vm = present_session_list(&sessions, query, dataset.history.len(), Utc::now());
    print!("{}", SessionListView::new(&vm, color));
    Ok(())
}
