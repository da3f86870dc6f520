use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Style,
    text::Line,
    widgets::{Paragraph, Widget},
};

use crate::model::GameState;
use crate::ui::theme::Theme;

/// Clock and score readouts.
pub struct Header<'a> {
    state: &'a GameState,
    theme: &'a Theme,
}

impl<'a> Header<'a> {
    pub fn new(state: &'a GameState, theme: &'a Theme) -> Self {
        Self { state, theme }
    }
}

impl Widget for Header<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let lines = vec![
            Line::from(format!("Time Left: {}", self.state.time_left)),
            Line::from(format!("Score: {}", self.state.score)),
        ];

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .style(Style::default().fg(self.theme.fg).bg(self.theme.bg))
            .render(area, buf);
    }
}
