use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Widget},
};

use crate::model::Round;
use crate::ui::theme::Theme;

/// The color block the player is asked to name. White until the first
/// round is dealt.
pub struct Swatch<'a> {
    round: Option<&'a Round>,
    theme: &'a Theme,
}

impl<'a> Swatch<'a> {
    pub fn new(round: Option<&'a Round>, theme: &'a Theme) -> Self {
        Self { round, theme }
    }
}

impl Widget for Swatch<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let fill = self
            .round
            .map(|round| round.target.color)
            .unwrap_or(Color::White);

        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.theme.fg))
            .style(Style::default().bg(fill))
            .render(area, buf);
    }
}
