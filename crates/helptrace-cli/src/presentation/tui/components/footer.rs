use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::Component;
use crate::presentation::tui::app::{ActiveTab, AppState};

pub(crate) struct FooterComponent;

impl Component for FooterComponent {
    fn render(&self, f: &mut Frame, area: Rect, state: &mut AppState) {
        let theme = state.theme;

        let hints = if state.search_mode {
            "type to search • Enter keep • Esc clear"
        } else {
            match state.tab {
                ActiveTab::Overview => "Tab sessions • t theme • q quit",
                ActiveTab::Sessions if state.detail.is_some() => {
                    "1/2 transcript/summary • j/k move • Esc close • q quit"
                }
                ActiveTab::Sessions => {
                    "/ search • j/k move • Enter open • Tab overview • t theme • q quit"
                }
            }
        };

        let paragraph = Paragraph::new(Line::from(Span::styled(
            hints,
            Style::default().fg(theme.muted()),
        )))
        .block(
            Block::default()
                .borders(Borders::TOP)
                .border_style(Style::default().fg(theme.muted())),
        );

        f.render_widget(paragraph, area);
    }
}
