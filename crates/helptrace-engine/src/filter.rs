use helptrace_types::Session;

/// Free-text session search.
///
/// Returns the order-preserving subsequence of `sessions` matching `query`.
/// A trimmed-empty query matches everything. Matching is case-insensitive
/// substring containment against the session id, the summary issue and
/// category (when a summary is attached), and every transcript message —
/// no tokenizing, no ranking.
pub fn filter_sessions<'a>(sessions: &'a [Session], query: &str) -> Vec<&'a Session> {
    if query.trim().is_empty() {
        return sessions.iter().collect();
    }

    let needle = query.to_lowercase();
    sessions
        .iter()
        .filter(|session| matches_query(session, &needle))
        .collect()
}

/// Whether a single session matches an already-lowercased query.
///
/// Exposed separately so interactive views can filter incrementally without
/// re-normalizing the query per session.
pub fn matches_query(session: &Session, needle: &str) -> bool {
    if session.session_id.to_lowercase().contains(needle) {
        return true;
    }

    if let Some(summary) = &session.summary {
        if summary.issue.to_lowercase().contains(needle)
            || summary.category.to_lowercase().contains(needle)
        {
            return true;
        }
    }

    session
        .transcripts
        .iter()
        .any(|message| message.text.to_lowercase().contains(needle))
}

#[cfg(test)]
mod tests {
    use super::*;
    use helptrace_types::{SessionSummary, Speaker, TranscriptMessage};

    fn session(id: &str, category: Option<&str>, issue: Option<&str>, texts: &[&str]) -> Session {
        let summary = category.map(|cat| SessionSummary {
            issue: issue.unwrap_or("").to_string(),
            category: cat.to_string(),
            resolution: "Resolved".to_string(),
            escalation_required: false,
        });
        Session {
            session_id: id.to_string(),
            started_at: 0,
            ended_at: Some(60_000),
            ticket_raised: false,
            transcripts: texts
                .iter()
                .enumerate()
                .map(|(i, text)| TranscriptMessage {
                    speaker: if i % 2 == 0 {
                        Speaker::User
                    } else {
                        Speaker::Agent
                    },
                    text: text.to_string(),
                    timestamp: i as i64 * 1_000,
                })
                .collect(),
            summary,
        }
    }

    fn history() -> Vec<Session> {
        vec![
            session(
                "session-122",
                Some("Password"),
                Some("Password reset request"),
                &["How do I reset my password?"],
            ),
            session(
                "session-121",
                Some("Software"),
                Some("Outlook crashing"),
                &["My Outlook keeps crashing."],
            ),
            session(
                "session-120",
                None,
                None,
                &["Can you help me set up my VPN?"],
            ),
        ]
    }

    fn ids(matches: &[&Session]) -> Vec<String> {
        matches.iter().map(|s| s.session_id.clone()).collect()
    }

    #[test]
    fn empty_query_returns_everything_in_order() {
        let sessions = history();
        for query in ["", "   ", "\t\n"] {
            let result = filter_sessions(&sessions, query);
            assert_eq!(
                ids(&result),
                vec!["session-122", "session-121", "session-120"]
            );
        }
    }

    #[test]
    fn matches_by_id_issue_category_and_transcript() {
        let sessions = history();
        assert_eq!(ids(&filter_sessions(&sessions, "session-121")), ["session-121"]);
        assert_eq!(ids(&filter_sessions(&sessions, "outlook")), ["session-121"]);
        assert_eq!(ids(&filter_sessions(&sessions, "software")), ["session-121"]);
        assert_eq!(ids(&filter_sessions(&sessions, "vpn")), ["session-120"]);
    }

    #[test]
    fn query_is_case_insensitive() {
        let sessions = history();
        let upper = ids(&filter_sessions(&sessions, "PASSWORD"));
        let lower = ids(&filter_sessions(&sessions, "password"));
        assert_eq!(upper, lower);
        assert_eq!(upper, vec!["session-122"]);
    }

    #[test]
    fn summary_fields_only_match_when_summary_present() {
        let sessions = history();
        // session-120 has no summary; it still matches through its transcript
        // but never through a summary field.
        assert!(ids(&filter_sessions(&sessions, "network")).is_empty());
        assert_eq!(ids(&filter_sessions(&sessions, "set up")), ["session-120"]);
    }

    #[test]
    fn no_match_yields_empty_result() {
        let sessions = history();
        assert!(filter_sessions(&sessions, "printer on fire").is_empty());
    }

    #[test]
    fn filter_is_idempotent() {
        let sessions = history();
        let once = filter_sessions(&sessions, "session");
        let cloned: Vec<Session> = once.iter().map(|s| (*s).clone()).collect();
        let twice = filter_sessions(&cloned, "session");
        assert_eq!(ids(&once), ids(&twice));
    }

    #[test]
    fn preserves_input_order() {
        let sessions = history();
        // "session" matches all three; the result must be the input order.
        let result = filter_sessions(&sessions, "session");
        assert_eq!(
            ids(&result),
            vec!["session-122", "session-121", "session-120"]
        );
    }
}
