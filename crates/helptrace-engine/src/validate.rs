use std::collections::HashSet;
use std::fmt;

use helptrace_types::{Dataset, Session};
use serde::Serialize;

/// A dataset consistency problem found at the provisioning boundary.
///
/// Issues are diagnostic, not fatal: the dashboard still renders, and the
/// CLI surfaces them as warnings so the data source can be fixed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ValidationIssue {
    /// `ended_at` precedes `started_at`.
    EndedBeforeStarted { session_id: String },
    /// The same session id appears more than once.
    DuplicateSessionId { session_id: String },
    /// Stats claim more tickets than sessions.
    TicketsExceedTotal { tickets: u64, total: u64 },
    /// A session with no messages at all (advisory).
    EmptyTranscript { session_id: String },
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationIssue::EndedBeforeStarted { session_id } => {
                write!(f, "session {} ends before it starts", session_id)
            }
            ValidationIssue::DuplicateSessionId { session_id } => {
                write!(f, "duplicate session id: {}", session_id)
            }
            ValidationIssue::TicketsExceedTotal { tickets, total } => {
                write!(f, "stats report {} tickets for {} sessions", tickets, total)
            }
            ValidationIssue::EmptyTranscript { session_id } => {
                write!(f, "session {} has an empty transcript", session_id)
            }
        }
    }
}

/// Check a dataset against the input contract.
///
/// Covers the invariants the engine itself assumes: `ended_at >= started_at`,
/// unique session ids across history and the active session, and
/// `tickets_raised <= total_sessions`.
pub fn validate_dataset(dataset: &Dataset) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();
    let mut seen_ids: HashSet<&str> = HashSet::new();

    let all_sessions = dataset
        .history
        .iter()
        .chain(dataset.active_session.as_ref());

    for session in all_sessions {
        check_session(session, &mut seen_ids, &mut issues);
    }

    if dataset.stats.tickets_raised > dataset.stats.total_sessions {
        issues.push(ValidationIssue::TicketsExceedTotal {
            tickets: dataset.stats.tickets_raised,
            total: dataset.stats.total_sessions,
        });
    }

    issues
}

fn check_session<'a>(
    session: &'a Session,
    seen_ids: &mut HashSet<&'a str>,
    issues: &mut Vec<ValidationIssue>,
) {
    if !seen_ids.insert(&session.session_id) {
        issues.push(ValidationIssue::DuplicateSessionId {
            session_id: session.session_id.clone(),
        });
    }

    if let Some(ended_at) = session.ended_at {
        if ended_at < session.started_at {
            issues.push(ValidationIssue::EndedBeforeStarted {
                session_id: session.session_id.clone(),
            });
        }
    }

    if session.transcripts.is_empty() {
        issues.push(ValidationIssue::EmptyTranscript {
            session_id: session.session_id.clone(),
        });
    }
}
