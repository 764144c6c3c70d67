use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

use super::components::{
    ChartComponent, Component, FiltersComponent, FooterComponent, TableComponent,
};
use crate::app::AppState;

pub(crate) fn draw(f: &mut Frame, state: &mut AppState) {
    // The chart area only exists while a customer is selected.
    let constraints = if state.selected.is_some() {
        vec![
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(14),
            Constraint::Length(1),
        ]
    } else {
        vec![
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(1),
        ]
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(f.area());

    FiltersComponent.render(f, chunks[0], state);
    TableComponent.render(f, chunks[1], state);

    if state.selected.is_some() {
        ChartComponent.render(f, chunks[2], state);
        FooterComponent.render(f, chunks[3], state);
    } else {
        FooterComponent.render(f, chunks[2], state);
    }
}
