use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::Component;
use crate::app::{AppState, Focus};

pub(crate) struct FiltersComponent;

impl Component for FiltersComponent {
    fn render(&self, f: &mut Frame, area: Rect, state: &mut AppState) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(area);

        render_input(
            f,
            chunks[0],
            " Customer Name ",
            &state.name_filter,
            state.focus == Focus::NameFilter,
        );
        render_input(
            f,
            chunks[1],
            " Transaction Amount ",
            &state.amount_filter,
            state.focus == Focus::AmountFilter,
        );
    }
}

fn render_input(f: &mut Frame, area: Rect, title: &str, value: &str, focused: bool) {
    let border_style = if focused {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    // A trailing block marks the insertion point in the focused input.
    let text = if focused {
        format!("{}█", value)
    } else {
        value.to_string()
    };

    let input = Paragraph::new(text).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(title.to_string()),
    );
    f.render_widget(input, area);
}
