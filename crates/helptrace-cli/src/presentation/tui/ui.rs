use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
};

use super::app::{ActiveTab, AppState};
use super::components::{
    CategoriesComponent, Component, DetailComponent, FooterComponent, HeaderComponent,
    SessionListComponent, SearchBoxComponent, StatsCardsComponent, VolumeChartComponent,
};

pub(crate) fn draw(f: &mut Frame, state: &mut AppState) {
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(2),
        ])
        .split(f.area());

    HeaderComponent.render(f, main_chunks[0], state);

    match state.tab {
        ActiveTab::Overview => draw_overview(f, main_chunks[1], state),
        ActiveTab::Sessions => draw_sessions(f, main_chunks[1], state),
    }

    FooterComponent.render(f, main_chunks[2], state);
}

fn draw_overview(f: &mut Frame, area: Rect, state: &mut AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(6), Constraint::Min(0)])
        .split(area);

    StatsCardsComponent.render(f, chunks[0], state);

    let chart_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(chunks[1]);

    VolumeChartComponent.render(f, chart_chunks[0], state);
    CategoriesComponent.render(f, chart_chunks[1], state);
}

fn draw_sessions(f: &mut Frame, area: Rect, state: &mut AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    SearchBoxComponent.render(f, chunks[0], state);

    if state.detail.is_some() {
        let split = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
            .split(chunks[1]);
        SessionListComponent.render(f, split[0], state);
        DetailComponent.render(f, split[1], state);
    } else {
        SessionListComponent.render(f, chunks[1], state);
    }
}
