use serde::{Deserialize, Serialize};

use crate::domain::{ChartData, DashboardStats, Session};
use crate::error::Result;

/// Full input contract from the data-provisioning boundary.
///
/// Everything the dashboard renders arrives in one document: the session
/// history, an optional in-progress session, and the precomputed stats and
/// chart series. The core logic makes no assumption about where the document
/// originates beyond it being available synchronously.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    /// Session currently in progress, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active_session: Option<Session>,
    /// Completed sessions, newest first as supplied.
    pub history: Vec<Session>,
    pub stats: DashboardStats,
    pub charts: ChartData,
}

impl Dataset {
    /// Parse a dataset from its JSON representation.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize back to pretty-printed JSON.
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ChartColor, IssueCategorySlice, SessionVolumePoint};

    #[test]
    fn round_trips_through_json() {
        let dataset = Dataset {
            active_session: None,
            history: vec![],
            stats: DashboardStats {
                total_sessions: 3,
                tickets_raised: 1,
                resolved_sessions: 2,
                avg_duration: 4.0,
            },
            charts: ChartData {
                sessions_over_time: vec![SessionVolumePoint {
                    date: "Mon".to_string(),
                    sessions: 3,
                    tickets: 1,
                }],
                issue_categories: vec![IssueCategorySlice {
                    name: "Network".to_string(),
                    value: 2,
                    color: ChartColor::Blue,
                }],
            },
        };

        let json = dataset.to_json_string().unwrap();
        let back = Dataset::from_json_str(&json).unwrap();
        assert_eq!(back, dataset);
    }

    #[test]
    fn active_session_is_optional() {
        let json = r#"{
            "history": [],
            "stats": { "totalSessions": 0, "ticketsRaised": 0, "resolvedSessions": 0, "avgDuration": 0.0 },
            "charts": { "sessionsOverTime": [], "issueCategories": [] }
        }"#;
        let dataset = Dataset::from_json_str(json).unwrap();
        assert!(dataset.active_session.is_none());
    }
}
