//! Fixtures for sample dataset generation.
//!
//! Provides:
//! - A fluent `SessionBuilder` for constructing sessions in tests
//! - A shared sample dataset (sessions 119-123 with stats and chart series)
//!   used by engine and CLI tests

use helptrace_types::{
    ChartColor, ChartData, DashboardStats, Dataset, IssueCategorySlice, Session, SessionSummary,
    SessionVolumePoint, Speaker, TranscriptMessage,
};

/// Fixed "now" for deterministic fixtures: 2024-01-15T14:03:00Z.
pub const FIXTURE_NOW_MS: i64 = 1_705_327_380_000;

const DAY_MS: i64 = 86_400_000;

/// Fluent builder for test sessions.
#[derive(Debug, Clone)]
pub struct SessionBuilder {
    session: Session,
}

impl SessionBuilder {
    pub fn new(session_id: &str) -> Self {
        Self {
            session: Session {
                session_id: session_id.to_string(),
                started_at: 0,
                ended_at: None,
                ticket_raised: false,
                transcripts: Vec::new(),
                summary: None,
            },
        }
    }

    pub fn started_at(mut self, ts: i64) -> Self {
        self.session.started_at = ts;
        self
    }

    pub fn ended_at(mut self, ts: i64) -> Self {
        self.session.ended_at = Some(ts);
        self
    }

    pub fn ticket_raised(mut self) -> Self {
        self.session.ticket_raised = true;
        self
    }

    pub fn user_says(mut self, text: &str, ts: i64) -> Self {
        self.session.transcripts.push(TranscriptMessage {
            speaker: Speaker::User,
            text: text.to_string(),
            timestamp: ts,
        });
        self
    }

    pub fn agent_says(mut self, text: &str, ts: i64) -> Self {
        self.session.transcripts.push(TranscriptMessage {
            speaker: Speaker::Agent,
            text: text.to_string(),
            timestamp: ts,
        });
        self
    }

    pub fn summary(
        mut self,
        issue: &str,
        category: &str,
        resolution: &str,
        escalation_required: bool,
    ) -> Self {
        self.session.summary = Some(SessionSummary {
            issue: issue.to_string(),
            category: category.to_string(),
            resolution: resolution.to_string(),
            escalation_required,
        });
        self
    }

    pub fn build(self) -> Session {
        self.session
    }
}

/// The in-progress WiFi troubleshooting session.
pub fn sample_active_session() -> Session {
    let start = FIXTURE_NOW_MS - 300_000;
    SessionBuilder::new("session-123")
        .started_at(start)
        .ticket_raised()
        .user_says(
            "Hi, my WiFi is not working since this morning. I've tried restarting the router but it still doesn't connect.",
            FIXTURE_NOW_MS - 280_000,
        )
        .agent_says(
            "I understand how frustrating that can be. Let me help you troubleshoot this. First, can you tell me if other devices can connect to the same WiFi network?",
            FIXTURE_NOW_MS - 270_000,
        )
        .user_says(
            "Actually, my phone connects fine. It's just my laptop that won't connect.",
            FIXTURE_NOW_MS - 250_000,
        )
        .agent_says(
            "Let's try resetting the network adapter. Open Command Prompt as administrator and type: netsh winsock reset. Then restart your laptop.",
            FIXTURE_NOW_MS - 170_000,
        )
        .summary(
            "Laptop unable to connect to WiFi network while other devices work fine",
            "Network",
            "In Progress - Network adapter reset recommended",
            true,
        )
        .build()
}

/// The four completed sample sessions, newest first.
pub fn sample_history() -> Vec<Session> {
    vec![
        SessionBuilder::new("session-122")
            .started_at(FIXTURE_NOW_MS - DAY_MS)
            .ended_at(FIXTURE_NOW_MS - DAY_MS + 200_000)
            .user_says("How do I reset my password?", FIXTURE_NOW_MS - DAY_MS)
            .agent_says(
                "I can help you with that. Please go to the login page and click 'Forgot Password'. You'll receive a reset link via email.",
                FIXTURE_NOW_MS - DAY_MS + 50_000,
            )
            .user_says("Got it, thanks!", FIXTURE_NOW_MS - DAY_MS + 100_000)
            .summary(
                "Password reset request",
                "Password",
                "Resolved - User guided to self-service password reset",
                false,
            )
            .build(),
        SessionBuilder::new("session-121")
            .started_at(FIXTURE_NOW_MS - 2 * DAY_MS)
            .ended_at(FIXTURE_NOW_MS - 2 * DAY_MS + 300_000)
            .ticket_raised()
            .user_says(
                "My Outlook keeps crashing whenever I open it.",
                FIXTURE_NOW_MS - 2 * DAY_MS,
            )
            .agent_says(
                "I'm sorry to hear that. Let's troubleshoot this together. When did this issue start?",
                FIXTURE_NOW_MS - 2 * DAY_MS + 50_000,
            )
            .user_says(
                "Since yesterday after the Windows update.",
                FIXTURE_NOW_MS - 2 * DAY_MS + 100_000,
            )
            .summary(
                "Outlook application crashing after Windows update",
                "Software",
                "Ticket raised for IT team review",
                true,
            )
            .build(),
        SessionBuilder::new("session-120")
            .started_at(FIXTURE_NOW_MS - 3 * DAY_MS)
            .ended_at(FIXTURE_NOW_MS - 3 * DAY_MS + 200_000)
            .user_says("Can you help me set up my VPN?", FIXTURE_NOW_MS - 3 * DAY_MS)
            .agent_says(
                "Of course! I'll walk you through the VPN setup process step by step.",
                FIXTURE_NOW_MS - 3 * DAY_MS + 50_000,
            )
            .summary(
                "VPN setup assistance",
                "Network",
                "Resolved - VPN configured successfully",
                false,
            )
            .build(),
        SessionBuilder::new("session-119")
            .started_at(FIXTURE_NOW_MS - 4 * DAY_MS)
            .ended_at(FIXTURE_NOW_MS - 4 * DAY_MS + 200_000)
            .ticket_raised()
            .user_says(
                "I need access to the finance shared drive.",
                FIXTURE_NOW_MS - 4 * DAY_MS,
            )
            .agent_says(
                "I can help with that. Access requests require manager approval. I'll create a ticket for you.",
                FIXTURE_NOW_MS - 4 * DAY_MS + 50_000,
            )
            .summary(
                "Shared drive access request",
                "Access",
                "Ticket raised - Pending manager approval",
                true,
            )
            .build(),
    ]
}

/// Full sample dataset: active session, history, stats, and both charts.
pub fn sample_dataset() -> Dataset {
    Dataset {
        active_session: Some(sample_active_session()),
        history: sample_history(),
        stats: DashboardStats {
            total_sessions: 156,
            tickets_raised: 42,
            resolved_sessions: 114,
            avg_duration: 8.5,
        },
        charts: sample_charts(),
    }
}

pub fn sample_charts() -> ChartData {
    let week = [
        ("Mon", 24, 8),
        ("Tue", 18, 5),
        ("Wed", 32, 12),
        ("Thu", 28, 9),
        ("Fri", 22, 6),
        ("Sat", 8, 1),
        ("Sun", 6, 1),
    ];
    let categories = [
        ("Network", 35, ChartColor::Blue),
        ("Software", 28, ChartColor::Green),
        ("Password", 22, ChartColor::Amber),
        ("Hardware", 10, ChartColor::Rose),
        ("Access", 5, ChartColor::Violet),
    ];

    ChartData {
        sessions_over_time: week
            .iter()
            .map(|(date, sessions, tickets)| SessionVolumePoint {
                date: date.to_string(),
                sessions: *sessions,
                tickets: *tickets,
            })
            .collect(),
        issue_categories: categories
            .iter()
            .map(|(name, value, color)| IssueCategorySlice {
                name: name.to_string(),
                value: *value,
                color: *color,
            })
            .collect(),
    }
}
