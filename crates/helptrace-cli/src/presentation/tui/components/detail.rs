use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use super::Component;
use crate::presentation::presenters::present_session_detail;
use crate::presentation::tui::app::{AppState, DetailTab};

/// Side panel for the selected session: transcript or AI summary, switched
/// with 1/2.
pub(crate) struct DetailComponent;

impl Component for DetailComponent {
    fn render(&self, f: &mut Frame, area: Rect, state: &mut AppState) {
        let theme = state.theme;
        let Some(tab) = state.detail else {
            return;
        };
        let Some(session) = state.selected_session() else {
            return;
        };
        let vm = present_session_detail(session);

        let tab_span = |label: &'static str, active: bool| {
            if active {
                Span::styled(
                    label,
                    Style::default()
                        .fg(theme.accent())
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                Span::styled(label, Style::default().fg(theme.muted()))
            }
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.accent()))
            .title(Line::from(vec![
                Span::styled(
                    format!(" {} ", vm.id),
                    Style::default()
                        .fg(theme.foreground())
                        .add_modifier(Modifier::BOLD),
                ),
                tab_span("[1] Transcript", tab == DetailTab::Transcript),
                Span::raw(" "),
                tab_span("[2] Summary", tab == DetailTab::Summary),
                Span::raw(" "),
            ]));

        let mut lines = vec![
            Line::from(vec![
                Span::styled(
                    format!("{:<10}", vm.status.label()),
                    Style::default().fg(theme.status_color(vm.status)),
                ),
                Span::styled(
                    format!("{}  {}", vm.started, vm.duration),
                    Style::default().fg(theme.muted()),
                ),
            ]),
            Line::from(""),
        ];

        match tab {
            DetailTab::Transcript => render_transcript(&vm, &mut lines, state),
            DetailTab::Summary => render_summary(&vm, &mut lines, state),
        }

        let paragraph = Paragraph::new(lines).block(block).wrap(Wrap { trim: false });
        f.render_widget(paragraph, area);
    }
}

fn render_transcript(
    vm: &crate::presentation::view_models::SessionDetailViewModel,
    lines: &mut Vec<Line<'static>>,
    state: &AppState,
) {
    let theme = state.theme;

    if vm.transcript.is_empty() {
        lines.push(Line::from(Span::styled(
            "No transcript recorded",
            Style::default().fg(theme.muted()),
        )));
        return;
    }

    for message in &vm.transcript {
        let speaker_color = if message.is_user {
            theme.foreground()
        } else {
            theme.accent()
        };
        lines.push(Line::from(vec![
            Span::styled(
                format!("{} ", message.speaker_label),
                Style::default()
                    .fg(speaker_color)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                message.clock_time.clone(),
                Style::default().fg(theme.muted()),
            ),
        ]));
        lines.push(Line::from(Span::styled(
            message.text.clone(),
            Style::default().fg(theme.foreground()),
        )));
        lines.push(Line::from(""));
    }
}

fn render_summary(
    vm: &crate::presentation::view_models::SessionDetailViewModel,
    lines: &mut Vec<Line<'static>>,
    state: &AppState,
) {
    let theme = state.theme;

    let Some(summary) = &vm.summary else {
        lines.push(Line::from(Span::styled(
            "No AI summary available",
            Style::default().fg(theme.muted()),
        )));
        return;
    };

    let field = |label: &'static str, value: String| {
        Line::from(vec![
            Span::styled(format!("{:<12}", label), Style::default().fg(theme.muted())),
            Span::styled(value, Style::default().fg(theme.foreground())),
        ])
    };

    lines.push(field("Issue", summary.issue.clone()));
    lines.push(field("Category", summary.category.clone()));
    lines.push(field("Resolution", summary.resolution.clone()));
    lines.push(Line::from(vec![
        Span::styled(
            format!("{:<12}", "Escalation"),
            Style::default().fg(theme.muted()),
        ),
        if summary.escalation_required {
            Span::styled(
                "Required",
                Style::default()
                    .fg(theme.status_color(helptrace_types::SessionStatus::TicketRaised))
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            Span::styled("Not required", Style::default().fg(theme.foreground()))
        },
    ]));
}
