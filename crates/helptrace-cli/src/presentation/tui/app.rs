use ratatui::widgets::ListState;

use helptrace_engine::matches_query;
use helptrace_types::{Dataset, Session};

use crate::presentation::theme::Theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ActiveTab {
    Overview,
    Sessions,
}

impl ActiveTab {
    pub fn toggled(self) -> Self {
        match self {
            ActiveTab::Overview => ActiveTab::Sessions,
            ActiveTab::Sessions => ActiveTab::Overview,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum DetailTab {
    Transcript,
    Summary,
}

/// All dashboard state lives here; nothing hangs off component-local
/// variables. The draw pass reads this, the key handler mutates it.
pub(crate) struct AppState {
    pub dataset: Dataset,
    pub theme: Theme,
    pub tab: ActiveTab,
    pub search_query: String,
    pub search_mode: bool,
    pub selected: usize,
    pub list_state: ListState,
    pub detail: Option<DetailTab>,
}

impl AppState {
    pub fn new(dataset: Dataset, theme: Theme) -> Self {
        Self {
            dataset,
            theme,
            tab: ActiveTab::Overview,
            search_query: String::new(),
            search_mode: false,
            selected: 0,
            list_state: ListState::default(),
            detail: None,
        }
    }

    /// History rows matching the current search query, in dataset order.
    pub fn filtered(&self) -> Vec<&Session> {
        let query = self.search_query.trim();
        if query.is_empty() {
            return self.dataset.history.iter().collect();
        }
        let needle = query.to_lowercase();
        self.dataset
            .history
            .iter()
            .filter(|session| matches_query(session, &needle))
            .collect()
    }

    pub fn selected_session(&self) -> Option<&Session> {
        self.filtered().get(self.selected).copied()
    }

    pub fn select_next(&mut self) {
        let count = self.filtered().len();
        if count > 0 && self.selected + 1 < count {
            self.selected += 1;
        }
    }

    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Keep the selection inside the filtered list after edits to the query.
    pub fn clamp_selection(&mut self) {
        let count = self.filtered().len();
        if count == 0 {
            self.selected = 0;
        } else if self.selected >= count {
            self.selected = count - 1;
        }
    }

    pub fn open_detail(&mut self) {
        if self.selected_session().is_some() {
            self.detail = Some(DetailTab::Transcript);
        }
    }

    pub fn close_detail(&mut self) {
        self.detail = None;
    }

    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use helptrace_types::{ChartData, DashboardStats, SessionSummary};

    fn session(id: &str, category: &str) -> Session {
        Session {
            session_id: id.to_string(),
            started_at: 0,
            ended_at: Some(300_000),
            ticket_raised: false,
            transcripts: vec![],
            summary: Some(SessionSummary {
                issue: format!("{} issue", category),
                category: category.to_string(),
                resolution: "Resolved".to_string(),
                escalation_required: false,
            }),
        }
    }

    fn state() -> AppState {
        let dataset = Dataset {
            active_session: None,
            history: vec![
                session("session-1", "Network"),
                session("session-2", "Software"),
                session("session-3", "Network"),
            ],
            stats: DashboardStats {
                total_sessions: 3,
                tickets_raised: 0,
                resolved_sessions: 3,
                avg_duration: 5.0,
            },
            charts: ChartData {
                sessions_over_time: vec![],
                issue_categories: vec![],
            },
        };
        AppState::new(dataset, Theme::Dark)
    }

    #[test]
    fn filtered_preserves_order_and_narrows() {
        let mut app = state();
        assert_eq!(app.filtered().len(), 3);

        app.search_query = "network".to_string();
        let ids: Vec<&str> = app
            .filtered()
            .iter()
            .map(|s| s.session_id.as_str())
            .collect();
        assert_eq!(ids, ["session-1", "session-3"]);
    }

    #[test]
    fn selection_clamps_when_query_narrows() {
        let mut app = state();
        app.selected = 2;
        app.search_query = "software".to_string();
        app.clamp_selection();
        assert_eq!(app.selected, 0);
        assert_eq!(app.selected_session().unwrap().session_id, "session-2");
    }

    #[test]
    fn select_next_stops_at_last_row() {
        let mut app = state();
        app.select_next();
        app.select_next();
        app.select_next();
        assert_eq!(app.selected, 2);
        app.select_previous();
        assert_eq!(app.selected, 1);
    }

    #[test]
    fn detail_opens_only_with_a_selection() {
        let mut app = state();
        app.search_query = "no such thing".to_string();
        app.clamp_selection();
        app.open_detail();
        assert!(app.detail.is_none());

        app.search_query.clear();
        app.open_detail();
        assert_eq!(app.detail, Some(DetailTab::Transcript));
    }
}
