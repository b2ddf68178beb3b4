use ratatui::{Frame, layout::Rect};

use super::app::AppState;

pub(crate) trait Component {
    fn render(&self, f: &mut Frame, area: Rect, state: &mut AppState);
}

pub(crate) mod charts;
pub(crate) mod detail;
pub(crate) mod footer;
pub(crate) mod header;
pub(crate) mod session_list;
pub(crate) mod stats_cards;

pub(crate) use charts::{CategoriesComponent, VolumeChartComponent};
pub(crate) use detail::DetailComponent;
pub(crate) use footer::FooterComponent;
pub(crate) use header::HeaderComponent;
pub(crate) use session_list::{SearchBoxComponent, SessionListComponent};
pub(crate) use stats_cards::StatsCardsComponent;
