use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Bar, BarChart, BarGroup, Block, Borders},
    Frame,
};

use super::Component;
use crate::app::{chart_points, AppState};
use crate::utils::helpers::format_amount;

pub(crate) struct ChartComponent;

impl Component for ChartComponent {
    fn render(&self, f: &mut Frame, area: Rect, state: &mut AppState) {
        let Some(customer) = &state.selected else {
            return;
        };

        let points = chart_points(&state.transactions, customer.id);

        // Bar heights are unsigned; negative amounts clamp to an empty bar
        // while the printed value keeps the sign.
        let bars: Vec<Bar> = points
            .iter()
            .map(|(date, amount)| {
                Bar::default()
                    .label(Line::from(date.format("%m-%d").to_string()))
                    .value(amount.max(0.0).round() as u64)
                    .text_value(format_amount(*amount))
            })
            .collect();

        let chart = BarChart::default()
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::DarkGray))
                    .title(format!(" Transactions for {} ", customer.name))
                    .title_style(
                        Style::default()
                            .fg(Color::LightCyan)
                            .add_modifier(Modifier::BOLD),
                    ),
            )
            .data(BarGroup::default().bars(&bars))
            .bar_width(7)
            .bar_gap(2)
            .bar_style(Style::default().fg(Color::Cyan))
            .value_style(Style::default().fg(Color::Black).bg(Color::Cyan));

        f.render_widget(chart, area);
    }
}
