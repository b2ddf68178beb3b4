//! Built-in demo dataset, used when no dataset file is configured.
//!
//! Timestamps are anchored to the current time so relative displays
//! ("yesterday", "2 days ago") stay meaningful.

use chrono::Utc;
use helptrace_types::{
    ChartColor, ChartData, DashboardStats, Dataset, IssueCategorySlice, Session, SessionSummary,
    SessionVolumePoint, Speaker, TranscriptMessage,
};

const DAY_MS: i64 = 86_400_000;

fn message(speaker: Speaker, text: &str, timestamp: i64) -> TranscriptMessage {
    TranscriptMessage {
        speaker,
        text: text.to_string(),
        timestamp,
    }
}

fn summary(issue: &str, category: &str, resolution: &str, escalation: bool) -> SessionSummary {
    SessionSummary {
        issue: issue.to_string(),
        category: category.to_string(),
        resolution: resolution.to_string(),
        escalation_required: escalation,
    }
}

pub fn demo_dataset() -> Dataset {
    let now = Utc::now().timestamp_millis();

    let active_session = Session {
        session_id: "session-123".to_string(),
        started_at: now - 300_000,
        ended_at: None,
        ticket_raised: true,
        transcripts: vec![
            message(
                Speaker::User,
                "Hi, my WiFi is not working since this morning. I've tried restarting the router but it still doesn't connect.",
                now - 280_000,
            ),
            message(
                Speaker::Agent,
                "I understand how frustrating that can be. Let me help you troubleshoot this. First, can you tell me if other devices can connect to the same WiFi network?",
                now - 270_000,
            ),
            message(
                Speaker::User,
                "Actually, my phone connects fine. It's just my laptop that won't connect.",
                now - 250_000,
            ),
            message(
                Speaker::Agent,
                "That's helpful information. This suggests the issue is with your laptop's network adapter rather than the router. Please click on the WiFi icon in your taskbar, select 'Forget' on your network, then try reconnecting.",
                now - 240_000,
            ),
            message(
                Speaker::User,
                "It's still not working. It says 'Can't connect to this network'.",
                now - 180_000,
            ),
            message(
                Speaker::Agent,
                "I see. Let's try resetting the network adapter. Open Command Prompt as administrator and type: netsh winsock reset. Then restart your laptop.",
                now - 170_000,
            ),
        ],
        summary: Some(summary(
            "Laptop unable to connect to WiFi network while other devices work fine",
            "Network",
            "In Progress - Network adapter reset recommended",
            true,
        )),
    };

    let history = vec![
        Session {
            session_id: "session-122".to_string(),
            started_at: now - DAY_MS,
            ended_at: Some(now - DAY_MS + 200_000),
            ticket_raised: false,
            transcripts: vec![
                message(Speaker::User, "How do I reset my password?", now - DAY_MS),
                message(
                    Speaker::Agent,
                    "I can help you with that. Please go to the login page and click 'Forgot Password'. You'll receive a reset link via email.",
                    now - DAY_MS + 50_000,
                ),
                message(Speaker::User, "Got it, thanks!", now - DAY_MS + 100_000),
            ],
            summary: Some(summary(
                "Password reset request",
                "Password",
                "Resolved - User guided to self-service password reset",
                false,
            )),
        },
        Session {
            session_id: "session-121".to_string(),
            started_at: now - 2 * DAY_MS,
            ended_at: Some(now - 2 * DAY_MS + 300_000),
            ticket_raised: true,
            transcripts: vec![
                message(
                    Speaker::User,
                    "My Outlook keeps crashing whenever I open it.",
                    now - 2 * DAY_MS,
                ),
                message(
                    Speaker::Agent,
                    "I'm sorry to hear that. Let's troubleshoot this together. When did this issue start?",
                    now - 2 * DAY_MS + 50_000,
                ),
                message(
                    Speaker::User,
                    "Since yesterday after the Windows update.",
                    now - 2 * DAY_MS + 100_000,
                ),
            ],
            summary: Some(summary(
                "Outlook application crashing after Windows update",
                "Software",
                "Ticket raised for IT team review",
                true,
            )),
        },
        Session {
            session_id: "session-120".to_string(),
            started_at: now - 3 * DAY_MS,
            ended_at: Some(now - 3 * DAY_MS + 200_000),
            ticket_raised: false,
            transcripts: vec![
                message(Speaker::User, "Can you help me set up my VPN?", now - 3 * DAY_MS),
                message(
                    Speaker::Agent,
                    "Of course! I'll walk you through the VPN setup process step by step.",
                    now - 3 * DAY_MS + 50_000,
                ),
            ],
            summary: Some(summary(
                "VPN setup assistance",
                "Network",
                "Resolved - VPN configured successfully",
                false,
            )),
        },
        Session {
            session_id: "session-119".to_string(),
            started_at: now - 4 * DAY_MS,
            ended_at: Some(now - 4 * DAY_MS + 200_000),
            ticket_raised: true,
            transcripts: vec![
                message(
                    Speaker::User,
                    "I need access to the finance shared drive.",
                    now - 4 * DAY_MS,
                ),
                message(
                    Speaker::Agent,
                    "I can help with that. Access requests require manager approval. I'll create a ticket for you.",
                    now - 4 * DAY_MS + 50_000,
                ),
            ],
            summary: Some(summary(
                "Shared drive access request",
                "Access",
                "Ticket raised - Pending manager approval",
                true,
            )),
        },
    ];

    Dataset {
        active_session: Some(active_session),
        history,
        stats: DashboardStats {
            total_sessions: 156,
            tickets_raised: 42,
            resolved_sessions: 114,
            avg_duration: 8.5,
        },
        charts: ChartData {
            sessions_over_time: [
                ("Mon", 24, 8),
                ("Tue", 18, 5),
                ("Wed", 32, 12),
                ("Thu", 28, 9),
                ("Fri", 22, 6),
                ("Sat", 8, 1),
                ("Sun", 6, 1),
            ]
            .iter()
            .map(|(date, sessions, tickets)| SessionVolumePoint {
                date: date.to_string(),
                sessions: *sessions,
                tickets: *tickets,
            })
            .collect(),
            issue_categories: [
                ("Network", 35, ChartColor::Blue),
                ("Software", 28, ChartColor::Green),
                ("Password", 22, ChartColor::Amber),
                ("Hardware", 10, ChartColor::Rose),
                ("Access", 5, ChartColor::Violet),
            ]
            .iter()
            .map(|(name, value, color)| IssueCategorySlice {
                name: name.to_string(),
                value: *value,
                color: *color,
            })
            .collect(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use helptrace_engine::validate_dataset;

    #[test]
    fn demo_dataset_is_internally_consistent() {
        let dataset = demo_dataset();
        assert!(validate_dataset(&dataset).is_empty());
        assert_eq!(dataset.history.len(), 4);
        assert!(dataset.active_session.unwrap().is_ongoing());
    }
}
