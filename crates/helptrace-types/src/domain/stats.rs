use serde::{Deserialize, Serialize};

/// Precomputed aggregate figures for the stat cards.
///
/// All fields arrive from the provisioning layer; nothing here is derived
/// from the session history. By convention `resolved_sessions` equals
/// `total_sessions - tickets_raised`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_sessions: u64,
    pub tickets_raised: u64,
    pub resolved_sessions: u64,
    /// Average session duration in minutes.
    pub avg_duration: f64,
}

/// One bucket of the sessions-over-time series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionVolumePoint {
    /// Bucket label ("Mon", "Tue", ...).
    pub date: String,
    pub sessions: u64,
    pub tickets: u64,
}

/// One slice of the issue-category breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueCategorySlice {
    pub name: String,
    pub value: u64,
    /// Display color token, resolved to a terminal style by the presentation layer.
    pub color: ChartColor,
}

/// Closed set of chart color tokens.
///
/// The category palette cycles through these five slots; the mapping to
/// concrete terminal colors lives in the CLI's theme table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartColor {
    Blue,
    Green,
    Amber,
    Rose,
    Violet,
}

impl ChartColor {
    /// The palette in slot order, used when assigning colors to categories.
    pub const PALETTE: [ChartColor; 5] = [
        ChartColor::Blue,
        ChartColor::Green,
        ChartColor::Amber,
        ChartColor::Rose,
        ChartColor::Violet,
    ];
}

/// Pre-aggregated chart series. No derivation logic owns these; they are
/// rendered as supplied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartData {
    /// Ordered time buckets (typically one per weekday).
    pub sessions_over_time: Vec<SessionVolumePoint>,
    pub issue_categories: Vec<IssueCategorySlice>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chart_color_round_trips_lowercase() {
        let json = serde_json::to_string(&ChartColor::Amber).unwrap();
        assert_eq!(json, "\"amber\"");
        let back: ChartColor = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ChartColor::Amber);
    }

    #[test]
    fn stats_use_camel_case_fields() {
        let stats = DashboardStats {
            total_sessions: 156,
            tickets_raised: 42,
            resolved_sessions: 114,
            avg_duration: 8.5,
        };
        let value = serde_json::to_value(&stats).unwrap();
        assert_eq!(value["totalSessions"], 156);
        assert_eq!(value["avgDuration"], 8.5);
    }
}
