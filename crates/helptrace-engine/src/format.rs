use std::fmt;

use chrono::{DateTime, Utc};
use helptrace_types::{EpochMillis, Session};

/// Display form of a session duration.
///
/// An ongoing session has no numeric duration; the sentinel keeps callers
/// from ever treating "still running" as a number of minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DurationDisplay {
    Ongoing,
    Minutes(i64),
}

impl fmt::Display for DurationDisplay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DurationDisplay::Ongoing => write!(f, "Ongoing"),
            DurationDisplay::Minutes(minutes) => write!(f, "{} min", minutes),
        }
    }
}

/// Session duration in whole minutes: `round((ended_at - started_at) / 60000)`,
/// half away from zero. `Ongoing` when the session has no end timestamp.
pub fn session_duration(session: &Session) -> DurationDisplay {
    match session.ended_at {
        None => DurationDisplay::Ongoing,
        Some(ended_at) => DurationDisplay::Minutes(round_to_minutes(session.started_at, ended_at)),
    }
}

fn round_to_minutes(started_at: EpochMillis, ended_at: EpochMillis) -> i64 {
    ((ended_at - started_at) as f64 / 60_000.0).round() as i64
}

/// Format epoch millis as a short clock time ("14:03", UTC).
pub fn format_clock_time(ts: EpochMillis) -> String {
    match DateTime::<Utc>::from_timestamp_millis(ts) {
        Some(dt) => dt.format("%H:%M").to_string(),
        None => "--:--".to_string(),
    }
}

/// Format epoch millis as a short date with time ("Aug 29, 14:03", UTC).
pub fn format_date(ts: EpochMillis) -> String {
    match DateTime::<Utc>::from_timestamp_millis(ts) {
        Some(dt) => dt.format("%b %d, %H:%M").to_string(),
        None => "(invalid timestamp)".to_string(),
    }
}

/// Format epoch millis as relative time ("2 hours ago", "yesterday").
pub fn format_relative_time(ts: EpochMillis, now: DateTime<Utc>) -> String {
    let Some(parsed) = DateTime::<Utc>::from_timestamp_millis(ts) else {
        return "(invalid timestamp)".to_string();
    };

    let duration = now.signed_duration_since(parsed);

    let seconds = duration.num_seconds();
    let minutes = duration.num_minutes();
    let hours = duration.num_hours();
    let days = duration.num_days();

    if seconds < 60 {
        "just now".to_string()
    } else if minutes < 60 {
        format!("{} min ago", minutes)
    } else if hours < 24 {
        format!("{} hours ago", hours)
    } else if days == 1 {
        "yesterday".to_string()
    } else if days < 7 {
        format!("{} days ago", days)
    } else if days < 30 {
        format!("{} weeks ago", days / 7)
    } else if days < 365 {
        format!("{} months ago", days / 30)
    } else {
        format!("{} years ago", days / 365)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use helptrace_types::Session;

    fn session(started_at: EpochMillis, ended_at: Option<EpochMillis>) -> Session {
        Session {
            session_id: "session-1".to_string(),
            started_at,
            ended_at,
            ticket_raised: false,
            transcripts: vec![],
            summary: None,
        }
    }

    #[test]
    fn ongoing_session_has_no_numeric_duration() {
        assert_eq!(session_duration(&session(1_000, None)), DurationDisplay::Ongoing);
        insta::assert_snapshot!(session_duration(&session(1_000, None)).to_string(), @"Ongoing");
    }

    #[test]
    fn duration_rounds_to_nearest_minute() {
        // 500000 ms = 8.33 minutes, rounds down to 8
        assert_eq!(
            session_duration(&session(0, Some(500_000))),
            DurationDisplay::Minutes(8)
        );
        // 90000 ms = 1.5 minutes, half rounds up
        assert_eq!(
            session_duration(&session(0, Some(90_000))),
            DurationDisplay::Minutes(2)
        );
        insta::assert_snapshot!(session_duration(&session(0, Some(500_000))).to_string(), @"8 min");
    }

    #[test]
    fn zero_length_session_is_zero_minutes() {
        assert_eq!(
            session_duration(&session(5_000, Some(5_000))),
            DurationDisplay::Minutes(0)
        );
    }

    #[test]
    fn clock_and_date_formats_are_utc() {
        // 2024-01-15T14:03:00Z
        let ts = 1_705_327_380_000;
        insta::assert_snapshot!(format_clock_time(ts), @"14:03");
        insta::assert_snapshot!(format_date(ts), @"Jan 15, 14:03");
    }

    #[test]
    fn relative_time_ladder() {
        let now = DateTime::<Utc>::from_timestamp_millis(1_705_327_380_000).unwrap();
        let ms = |delta: i64| 1_705_327_380_000 - delta;

        assert_eq!(format_relative_time(ms(30_000), now), "just now");
        assert_eq!(format_relative_time(ms(5 * 60_000), now), "5 min ago");
        assert_eq!(format_relative_time(ms(3 * 3_600_000), now), "3 hours ago");
        assert_eq!(format_relative_time(ms(86_400_000), now), "yesterday");
        assert_eq!(format_relative_time(ms(3 * 86_400_000), now), "3 days ago");
    }
}
