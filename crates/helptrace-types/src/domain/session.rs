use serde::{Deserialize, Serialize};

/// Epoch timestamp in milliseconds, as supplied by the provisioning layer.
pub type EpochMillis = i64;

/// Who produced a transcript message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Speaker {
    User,
    Agent,
}

impl Speaker {
    /// Display label for transcript rendering.
    pub fn label(&self) -> &'static str {
        match self {
            Speaker::User => "User",
            Speaker::Agent => "AI Agent",
        }
    }
}

/// Single message within a session transcript.
///
/// Messages are immutable once created; the enclosing vector's insertion
/// order is the conversation order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranscriptMessage {
    pub speaker: Speaker,
    pub text: String,
    /// When the message was sent (epoch millis).
    pub timestamp: EpochMillis,
}

/// AI-generated analysis attached to a session once it completes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSummary {
    /// One-line description of the reported problem.
    pub issue: String,
    /// Issue category (Network, Software, Password, Hardware, Access, ...).
    pub category: String,
    /// Current resolution status text.
    pub resolution: String,
    /// Whether the agent recommended escalating to a human.
    pub escalation_required: bool,
}

// ==========================================
// Session (one end-to-end support interaction)
// ==========================================

/// One end-to-end support interaction between a user and the automated agent.
///
/// Invariants (enforced at the provisioning boundary, not here):
/// - `ended_at`, when present, is >= `started_at`
/// - `session_id` is unique within any dataset
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    /// Unique session identifier (e.g. "session-121").
    pub session_id: String,
    /// When the session started (epoch millis).
    pub started_at: EpochMillis,
    /// When the session ended, if it has. Absent means the session is ongoing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ended_at: Option<EpochMillis>,
    /// Whether the session escalated into a ticket.
    pub ticket_raised: bool,
    /// Ordered exchange of messages within the session.
    pub transcripts: Vec<TranscriptMessage>,
    /// AI summary, attached once an analysis completes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<SessionSummary>,
}

impl Session {
    /// A session without an end timestamp is still in progress.
    pub fn is_ongoing(&self) -> bool {
        self.ended_at.is_none()
    }

    /// Resolution status derived from the ticket flag.
    pub fn status(&self) -> SessionStatus {
        if self.ticket_raised {
            SessionStatus::TicketRaised
        } else {
            SessionStatus::Resolved
        }
    }

    /// Issue category from the summary, if one is attached.
    pub fn category(&self) -> Option<&str> {
        self.summary.as_ref().map(|s| s.category.as_str())
    }
}

/// Outcome badge for a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionStatus {
    /// Escalated: a ticket was raised for human follow-up.
    TicketRaised,
    /// Closed by the agent without escalation.
    Resolved,
}

impl SessionStatus {
    pub fn label(&self) -> &'static str {
        match self {
            SessionStatus::TicketRaised => "Ticket",
            SessionStatus::Resolved => "Resolved",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_session() -> Session {
        Session {
            session_id: "session-1".to_string(),
            started_at: 1_000,
            ended_at: Some(61_000),
            ticket_raised: false,
            transcripts: vec![TranscriptMessage {
                speaker: Speaker::User,
                text: "Hello".to_string(),
                timestamp: 1_000,
            }],
            summary: None,
        }
    }

    #[test]
    fn status_follows_ticket_flag() {
        let mut session = sample_session();
        assert_eq!(session.status(), SessionStatus::Resolved);
        session.ticket_raised = true;
        assert_eq!(session.status(), SessionStatus::TicketRaised);
    }

    #[test]
    fn ongoing_when_end_missing() {
        let mut session = sample_session();
        assert!(!session.is_ongoing());
        session.ended_at = None;
        assert!(session.is_ongoing());
    }

    #[test]
    fn deserializes_camel_case_shape() {
        let json = r#"{
            "sessionId": "session-121",
            "startedAt": 100,
            "endedAt": 600100,
            "ticketRaised": true,
            "transcripts": [
                { "speaker": "user", "text": "My Outlook keeps crashing.", "timestamp": 100 }
            ],
            "summary": {
                "issue": "Outlook application crashing after Windows update",
                "category": "Software",
                "resolution": "Ticket raised for IT team review",
                "escalationRequired": true
            }
        }"#;

        let session: Session = serde_json::from_str(json).unwrap();
        assert_eq!(session.session_id, "session-121");
        assert_eq!(session.transcripts[0].speaker, Speaker::User);
        assert!(session.summary.unwrap().escalation_required);
    }

    #[test]
    fn optional_fields_default_to_none() {
        let json = r#"{
            "sessionId": "session-9",
            "startedAt": 100,
            "ticketRaised": false,
            "transcripts": []
        }"#;

        let session: Session = serde_json::from_str(json).unwrap();
        assert!(session.is_ongoing());
        assert!(session.summary.is_none());
    }
}
