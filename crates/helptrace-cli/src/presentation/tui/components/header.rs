use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::Component;
use crate::presentation::tui::app::{ActiveTab, AppState};

pub(crate) struct HeaderComponent;

impl Component for HeaderComponent {
    fn render(&self, f: &mut Frame, area: Rect, state: &mut AppState) {
        let theme = state.theme;

        let title = Line::from(vec![
            Span::styled(
                "━━ ",
                Style::default()
                    .fg(theme.accent())
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                "IT Helpdesk",
                Style::default()
                    .fg(theme.accent())
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(" AI Agent Dashboard", Style::default().fg(theme.muted())),
            Span::styled(
                " ━━",
                Style::default()
                    .fg(theme.accent())
                    .add_modifier(Modifier::BOLD),
            ),
        ]);

        let tab_span = |label: &'static str, active: bool| {
            if active {
                Span::styled(
                    label,
                    Style::default()
                        .fg(theme.foreground())
                        .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
                )
            } else {
                Span::styled(label, Style::default().fg(theme.muted()))
            }
        };

        let tabs = Line::from(vec![
            tab_span("Overview", state.tab == ActiveTab::Overview),
            Span::raw("  "),
            tab_span("Sessions", state.tab == ActiveTab::Sessions),
        ]);

        let layout = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
            .split(area);

        f.render_widget(Paragraph::new(title), layout[0]);
        f.render_widget(
            Paragraph::new(tabs).alignment(Alignment::Right),
            layout[1],
        );
    }
}
