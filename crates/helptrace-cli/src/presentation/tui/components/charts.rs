use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph},
};

use super::Component;
use crate::presentation::presenters::present_charts;
use crate::presentation::tui::app::AppState;

const CATEGORY_BAR_WIDTH: u64 = 20;

/// Weekly session volume, one bar group per day: sessions next to tickets.
pub(crate) struct VolumeChartComponent;

impl Component for VolumeChartComponent {
    fn render(&self, f: &mut Frame, area: Rect, state: &mut AppState) {
        let theme = state.theme;
        let vm = present_charts(&state.dataset.charts);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.muted()))
            .title(Span::styled(
                " Session Volume (7 days) ",
                Style::default()
                    .fg(theme.foreground())
                    .add_modifier(Modifier::BOLD),
            ));

        let mut chart = BarChart::default()
            .block(block)
            .bar_width(3)
            .bar_gap(0)
            .group_gap(2);

        for point in &vm.volume {
            let bars = [
                Bar::default()
                    .value(point.sessions)
                    .style(Style::default().fg(theme.accent())),
                Bar::default()
                    .value(point.tickets)
                    .style(Style::default().fg(theme.status_color(
                        helptrace_types::SessionStatus::TicketRaised,
                    ))),
            ];
            chart = chart.data(
                BarGroup::default()
                    .label(Line::from(point.label.clone()))
                    .bars(&bars),
            );
        }

        f.render_widget(chart, area);
    }
}

/// Issue-category breakdown as horizontal bars with share percentages.
pub(crate) struct CategoriesComponent;

impl Component for CategoriesComponent {
    fn render(&self, f: &mut Frame, area: Rect, state: &mut AppState) {
        let theme = state.theme;
        let vm = present_charts(&state.dataset.charts);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.muted()))
            .title(Span::styled(
                " Issues by Category ",
                Style::default()
                    .fg(theme.foreground())
                    .add_modifier(Modifier::BOLD),
            ));

        let max_value = vm.categories.iter().map(|c| c.value).max().unwrap_or(0);

        let mut lines = Vec::new();
        for slice in &vm.categories {
            let filled = if max_value == 0 {
                0
            } else {
                (slice.value * CATEGORY_BAR_WIDTH).div_ceil(max_value)
            } as usize;

            lines.push(Line::from(vec![
                Span::styled(
                    format!("{:<10}", slice.name),
                    Style::default().fg(theme.foreground()),
                ),
                Span::styled(
                    "█".repeat(filled),
                    Style::default().fg(theme.chart_color(slice.color)),
                ),
                Span::styled(
                    format!(" {} ({}%)", slice.value, slice.share_pct),
                    Style::default().fg(theme.muted()),
                ),
            ]));
        }

        if lines.is_empty() {
            lines.push(Line::from(Span::styled(
                "No category data",
                Style::default().fg(theme.muted()),
            )));
        }

        f.render_widget(Paragraph::new(lines).block(block), area);
    }
}
