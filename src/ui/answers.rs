use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::model::{Round, OPTION_COUNT};
use crate::ui::theme::Theme;

/// The four answer buttons, keyed 1-4. Blank and inert until a game runs.
pub struct AnswerButtons<'a> {
    round: Option<&'a Round>,
    enabled: bool,
    theme: &'a Theme,
}

impl<'a> AnswerButtons<'a> {
    pub fn new(round: Option<&'a Round>, enabled: bool, theme: &'a Theme) -> Self {
        Self {
            round,
            enabled,
            theme,
        }
    }
}

impl Widget for AnswerButtons<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut button_style = Style::default()
            .bg(self.theme.button_bg)
            .fg(self.theme.button_fg);
        if !self.enabled {
            button_style = button_style.add_modifier(Modifier::DIM);
        }

        let mut lines = Vec::with_capacity(OPTION_COUNT * 2);
        for i in 0..OPTION_COUNT {
            let label = self
                .round
                .map(|round| round.slots[i].label)
                .unwrap_or("");
            lines.push(Line::from(Span::styled(
                format!(" {}. {:<12}", i + 1, label),
                button_style,
            )));
            lines.push(Line::from(""));
        }

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .style(Style::default().bg(self.theme.bg))
            .render(area, buf);
    }
}
