use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Row, Table},
    Frame,
};

use super::Component;
use crate::app::{AppState, Focus};
use crate::utils::helpers::{format_amount, truncate_text};

pub(crate) struct TableComponent;

impl Component for TableComponent {
    fn render(&self, f: &mut Frame, area: Rect, state: &mut AppState) {
        let border_style = if state.focus == Focus::Table {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let header = Row::new(vec!["Customer ID", "Customer Name", "Transaction Amount"])
            .style(
                Style::default()
                    .fg(Color::LightCyan)
                    .add_modifier(Modifier::BOLD),
            )
            .bottom_margin(1);

        let rows = state.rows.iter().map(|row| {
            Row::new(vec![
                row.id.to_string(),
                truncate_text(&row.name, 40),
                format_amount(row.total_amount),
            ])
        });

        let table = Table::new(
            rows,
            [
                Constraint::Length(14),
                Constraint::Min(20),
                Constraint::Length(20),
            ],
        )
        .header(header)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style)
                .title(format!(" Customers ({}) ", state.rows.len())),
        )
        .row_highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol(">> ");

        f.render_stateful_widget(table, area, &mut state.table_state);
    }
}
