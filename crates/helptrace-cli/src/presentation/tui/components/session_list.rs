use chrono::Utc;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};

use super::Component;
use crate::presentation::presenters::present_session_row;
use crate::presentation::tui::app::AppState;

/// Search input box above the session table.
pub(crate) struct SearchBoxComponent;

impl Component for SearchBoxComponent {
    fn render(&self, f: &mut Frame, area: Rect, state: &mut AppState) {
        let theme = state.theme;

        let border_color = if state.search_mode {
            theme.accent()
        } else {
            theme.muted()
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color))
            .title(Span::styled(
                " Search (/) ",
                Style::default().fg(border_color),
            ));

        let content = if state.search_query.is_empty() && !state.search_mode {
            Line::from(Span::styled(
                "Search sessions by id, issue, category, or transcript...",
                Style::default().fg(theme.muted()),
            ))
        } else {
            let cursor = if state.search_mode { "█" } else { "" };
            Line::from(vec![
                Span::styled(
                    state.search_query.clone(),
                    Style::default().fg(theme.foreground()),
                ),
                Span::styled(cursor, Style::default().fg(theme.accent())),
            ])
        };

        f.render_widget(Paragraph::new(content).block(block), area);
    }
}

pub(crate) struct SessionListComponent;

impl Component for SessionListComponent {
    fn render(&self, f: &mut Frame, area: Rect, state: &mut AppState) {
        let theme = state.theme;
        let now = Utc::now();

        let filtered = state.filtered();
        let total = state.dataset.history.len();
        let matched = filtered.len();

        let items: Vec<ListItem> = filtered
            .iter()
            .map(|session| {
                let row = present_session_row(session, now);
                let status_style = Style::default().fg(theme.status_color(row.status));
                ListItem::new(Line::from(vec![
                    Span::styled(
                        format!("{:<14}", row.id),
                        Style::default().fg(theme.foreground()),
                    ),
                    Span::styled(format!("{:<14}", row.started), Style::default().fg(theme.muted())),
                    Span::styled(format!("{:<10}", row.duration), Style::default().fg(theme.muted())),
                    Span::styled(format!("{:<10}", row.status.label()), status_style),
                    Span::styled(
                        row.category.unwrap_or_default(),
                        Style::default().fg(theme.muted()),
                    ),
                    Span::raw("  "),
                    Span::styled(row.issue, Style::default().fg(theme.foreground())),
                ]))
            })
            .collect();

        let title = if state.search_query.trim().is_empty() {
            format!(" Sessions ({}) ", total)
        } else {
            format!(" Sessions ({} of {}) ", matched, total)
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.muted()))
            .title(Span::styled(
                title,
                Style::default()
                    .fg(theme.foreground())
                    .add_modifier(Modifier::BOLD),
            ));

        if items.is_empty() {
            let empty = Paragraph::new(Line::from(Span::styled(
                "No sessions match the current search",
                Style::default().fg(theme.muted()),
            )))
            .block(block);
            f.render_widget(empty, area);
            return;
        }

        let list = List::new(items)
            .block(block)
            .highlight_style(
                Style::default()
                    .bg(theme.muted())
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol(">> ");

        state.list_state.select(Some(state.selected));
        f.render_stateful_widget(list, area, &mut state.list_state);
    }
}
