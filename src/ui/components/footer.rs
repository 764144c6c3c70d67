use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::Paragraph,
    Frame,
};

use super::Component;
use crate::app::{AppState, Focus};

pub(crate) struct FooterComponent;

impl Component for FooterComponent {
    fn render(&self, f: &mut Frame, area: Rect, state: &mut AppState) {
        let hints = match state.focus {
            Focus::NameFilter | Focus::AmountFilter => {
                "Tab: next field │ type to filter │ Esc: quit"
            }
            Focus::Table => "Tab: next field │ ↑/↓: move │ Enter: select │ q/Esc: quit",
        };

        let footer = Paragraph::new(hints).style(Style::default().fg(Color::DarkGray));
        f.render_widget(footer, area);
    }
}
