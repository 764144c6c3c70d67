use ratatui::{layout::Rect, Frame};

use crate::app::AppState;

pub(crate) trait Component {
    fn render(&self, f: &mut Frame, area: Rect, state: &mut AppState);
}

pub(crate) mod chart;
pub(crate) mod filters;
pub(crate) mod footer;
pub(crate) mod table;

pub(crate) use chart::ChartComponent;
pub(crate) use filters::FiltersComponent;
pub(crate) use footer::FooterComponent;
pub(crate) use table::TableComponent;
