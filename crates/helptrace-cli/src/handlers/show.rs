use anyhow::Result;
use helptrace_types::{Dataset, Session};

use crate::args::{DetailSection, OutputFormat};
use crate::presentation::presenters::present_session_detail;
use crate::presentation::views::SessionDetailView;

pub fn handle(
    dataset: &Dataset,
    session_id: &str,
    section: DetailSection,
    format: OutputFormat,
    color: bool,
) -> Result<()> {
    let session = resolve_session(dataset, session_id)?;

    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(session)?);
        return Ok(());
    }

    let vm = present_session_detail(session);
    let (transcript, summary) = match section {
        DetailSection::Transcript => (true, false),
        DetailSection::Summary => (false, true),
        DetailSection::All => (true, true),
    };
    print!("{}", SessionDetailView::new(&vm, transcript, summary, color));
    Ok(())
}

/// Find a session by exact id, or by an unambiguous prefix. Searches the
/// history and the active session.
fn resolve_session<'a>(dataset: &'a Dataset, session_id: &str) -> Result<&'a Session> {
    let all: Vec<&Session> = dataset
        .history
        .iter()
        .chain(dataset.active_session.as_ref())
        .collect();

    if let Some(session) = all.iter().copied().find(|s| s.session_id == session_id) {
        return Ok(session);
    }

    let matches: Vec<&Session> = all
        .iter()
        .copied()
        .filter(|s| s.session_id.starts_with(session_id))
        .collect();

    match matches.as_slice() {
        [] => anyhow::bail!("Session not found: {}", session_id),
        [session] => Ok(*session),
        _ => anyhow::bail!(
            "Session id prefix '{}' is ambiguous ({} matches)",
            session_id,
            matches.len()
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use helptrace_types::{ChartData, DashboardStats};

    fn session(id: &str) -> Session {
        Session {
            session_id: id.to_string(),
            started_at: 0,
            ended_at: Some(60_000),
            ticket_raised: false,
            transcripts: vec![],
            summary: None,
        }
    }

    fn dataset() -> Dataset {
        Dataset {
            active_session: Some(session("session-200")),
            history: vec![session("session-121"), session("session-122")],
            stats: DashboardStats {
                total_sessions: 3,
                tickets_raised: 0,
                resolved_sessions: 3,
                avg_duration: 1.0,
            },
            charts: ChartData {
                sessions_over_time: vec![],
                issue_categories: vec![],
            },
        }
    }

    #[test]
    fn resolves_exact_id() {
        let ds = dataset();
        assert_eq!(
            resolve_session(&ds, "session-121").unwrap().session_id,
            "session-121"
        );
    }

    #[test]
    fn resolves_unambiguous_prefix_including_active() {
        let ds = dataset();
        assert_eq!(
            resolve_session(&ds, "session-2").unwrap().session_id,
            "session-200"
        );
    }

    #[test]
    fn rejects_ambiguous_prefix() {
        let ds = dataset();
        assert!(resolve_session(&ds, "session-12").is_err());
    }

    #[test]
    fn rejects_unknown_id() {
        let ds = dataset();
        assert!(resolve_session(&ds, "session-999").is_err());
    }
}
