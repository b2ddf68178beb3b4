use chrono::{DateTime, Utc};

use helptrace_engine::format::{format_clock_time, format_date, format_relative_time};
use helptrace_engine::{escalation_rate_pct, session_duration};
use helptrace_types::{ChartData, DashboardStats, Session};

use super::formatters::normalize_and_clean;
use super::view_models::{
    CategorySliceViewModel, ChartsViewModel, SessionDetailViewModel, SessionListViewModel,
    SessionRowViewModel, StatCardViewModel, StatsViewModel, SummaryViewModel,
    TranscriptLineViewModel, VolumeBarViewModel,
};

const ISSUE_SNIPPET_LENGTH: usize = 50;

/// Build the four stat cards from precomputed dashboard stats.
///
/// The escalation rate is the one derived figure; everything else is
/// displayed as supplied.
pub fn present_stats(stats: &DashboardStats) -> StatsViewModel {
    let rate = escalation_rate_pct(stats.tickets_raised, stats.total_sessions);

    StatsViewModel {
        cards: vec![
            StatCardViewModel {
                title: "Total Sessions",
                value: stats.total_sessions.to_string(),
                description: "All time".to_string(),
                highlight: false,
            },
            StatCardViewModel {
                title: "Tickets Raised",
                value: stats.tickets_raised.to_string(),
                description: format!("{}% escalation rate", rate),
                highlight: false,
            },
            StatCardViewModel {
                title: "Resolved",
                value: stats.resolved_sessions.to_string(),
                description: "Without tickets".to_string(),
                highlight: true,
            },
            StatCardViewModel {
                title: "Avg Duration",
                value: format!("{} min", stats.avg_duration),
                description: "Per session".to_string(),
                highlight: false,
            },
        ],
    }
}

pub fn present_session_row(session: &Session, now: DateTime<Utc>) -> SessionRowViewModel {
    SessionRowViewModel {
        id: session.session_id.clone(),
        started: format_relative_time(session.started_at, now),
        duration: session_duration(session).to_string(),
        status: session.status(),
        category: session.category().map(str::to_string),
        issue: session
            .summary
            .as_ref()
            .map(|s| normalize_and_clean(&s.issue, ISSUE_SNIPPET_LENGTH))
            .unwrap_or_else(|| "No summary available".to_string()),
    }
}

pub fn present_session_list(
    sessions: &[&Session],
    query: Option<&str>,
    total_unfiltered: usize,
    now: DateTime<Utc>,
) -> SessionListViewModel {
    SessionListViewModel {
        rows: sessions
            .iter()
            .map(|session| present_session_row(session, now))
            .collect(),
        query: query.map(str::to_string),
        total_unfiltered,
    }
}

pub fn present_session_detail(session: &Session) -> SessionDetailViewModel {
    SessionDetailViewModel {
        id: session.session_id.clone(),
        status: session.status(),
        started: format_date(session.started_at),
        duration: session_duration(session).to_string(),
        transcript: session
            .transcripts
            .iter()
            .map(|message| TranscriptLineViewModel {
                speaker_label: message.speaker.label(),
                is_user: message.speaker == helptrace_types::Speaker::User,
                clock_time: format_clock_time(message.timestamp),
                text: message.text.clone(),
            })
            .collect(),
        summary: session.summary.as_ref().map(|summary| SummaryViewModel {
            issue: summary.issue.clone(),
            category: summary.category.clone(),
            resolution: summary.resolution.clone(),
            escalation_required: summary.escalation_required,
        }),
    }
}

pub fn present_charts(charts: &ChartData) -> ChartsViewModel {
    let max_sessions = charts
        .sessions_over_time
        .iter()
        .map(|point| point.sessions)
        .max()
        .unwrap_or(0);

    let category_total: u64 = charts.issue_categories.iter().map(|c| c.value).sum();

    ChartsViewModel {
        volume: charts
            .sessions_over_time
            .iter()
            .map(|point| VolumeBarViewModel {
                label: point.date.clone(),
                sessions: point.sessions,
                tickets: point.tickets,
            })
            .collect(),
        max_sessions,
        categories: charts
            .issue_categories
            .iter()
            .map(|slice| CategorySliceViewModel {
                name: slice.name.clone(),
                value: slice.value,
                share_pct: escalation_rate_pct(slice.value, category_total),
                color: slice.color,
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use helptrace_types::{ChartColor, IssueCategorySlice, SessionVolumePoint};

    #[test]
    fn stats_cards_include_guarded_escalation_rate() {
        let stats = DashboardStats {
            total_sessions: 156,
            tickets_raised: 42,
            resolved_sessions: 114,
            avg_duration: 8.5,
        };
        let vm = present_stats(&stats);
        assert_eq!(vm.cards[1].description, "27% escalation rate");

        let empty = DashboardStats {
            total_sessions: 0,
            tickets_raised: 0,
            resolved_sessions: 0,
            avg_duration: 0.0,
        };
        let vm = present_stats(&empty);
        assert_eq!(vm.cards[1].description, "0% escalation rate");
    }

    #[test]
    fn category_shares_sum_from_slice_values() {
        let charts = ChartData {
            sessions_over_time: vec![SessionVolumePoint {
                date: "Mon".to_string(),
                sessions: 10,
                tickets: 2,
            }],
            issue_categories: vec![
                IssueCategorySlice {
                    name: "Network".to_string(),
                    value: 3,
                    color: ChartColor::Blue,
                },
                IssueCategorySlice {
                    name: "Software".to_string(),
                    value: 1,
                    color: ChartColor::Green,
                },
            ],
        };
        let vm = present_charts(&charts);
        assert_eq!(vm.categories[0].share_pct, 75);
        assert_eq!(vm.categories[1].share_pct, 25);
        assert_eq!(vm.max_sessions, 10);
    }
}
