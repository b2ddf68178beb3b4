use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::Component;
use crate::presentation::presenters::present_stats;
use crate::presentation::tui::app::AppState;

pub(crate) struct StatsCardsComponent;

impl Component for StatsCardsComponent {
    fn render(&self, f: &mut Frame, area: Rect, state: &mut AppState) {
        let theme = state.theme;
        let vm = present_stats(&state.dataset.stats);

        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![Constraint::Ratio(1, vm.cards.len() as u32); vm.cards.len()])
            .split(area);

        for (card, chunk) in vm.cards.iter().zip(chunks.iter()) {
            let value_color = if card.highlight {
                theme.accent()
            } else {
                theme.foreground()
            };

            let block = Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.muted()))
                .title(Span::styled(
                    format!(" {} ", card.title),
                    Style::default().fg(theme.muted()),
                ));

            let body = vec![
                Line::from(Span::styled(
                    card.value.clone(),
                    Style::default()
                        .fg(value_color)
                        .add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(
                    card.description.clone(),
                    Style::default().fg(theme.muted()),
                )),
            ];

            f.render_widget(Paragraph::new(body).block(block), *chunk);
        }
    }
}
