use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Clear, List, ListItem, ListState, StatefulWidget, Widget},
};

use crate::ui::theme::{Theme, ThemeKind};

/// Navigation state for the theme picker overlay.
pub struct ThemeMenu {
    pub open: bool,
    pub list: ListState,
}

impl ThemeMenu {
    pub fn new() -> Self {
        Self {
            open: false,
            list: ListState::default(),
        }
    }

    /// Open with the cursor on the active theme.
    pub fn open_at(&mut self, current: ThemeKind) {
        let index = ThemeKind::ALL.iter().position(|&kind| kind == current);
        self.list.select(index.or(Some(0)));
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn move_cursor(&mut self, delta: i32) {
        let len = ThemeKind::ALL.len() as i32;
        let current = self.list.selected().unwrap_or(0) as i32;
        let new = (current + delta).rem_euclid(len) as usize;
        self.list.select(Some(new));
    }

    pub fn selected(&self) -> Option<ThemeKind> {
        self.list
            .selected()
            .and_then(|i| ThemeKind::ALL.get(i).copied())
    }
}

impl Default for ThemeMenu {
    fn default() -> Self {
        Self::new()
    }
}

/// The picker overlay itself, drawn over the play area.
pub struct ThemeMenuPopup<'a> {
    theme: &'a Theme,
}

impl<'a> ThemeMenuPopup<'a> {
    pub fn new(theme: &'a Theme) -> Self {
        Self { theme }
    }
}

impl StatefulWidget for ThemeMenuPopup<'_> {
    type State = ListState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        Clear.render(area, buf);

        let items: Vec<ListItem> = ThemeKind::ALL
            .iter()
            .map(|kind| ListItem::new(Line::from(kind.name())))
            .collect();

        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title("Theme")
                    .border_style(Style::default().fg(self.theme.button_fg)),
            )
            .style(
                Style::default()
                    .bg(self.theme.button_bg)
                    .fg(self.theme.button_fg),
            )
            .highlight_style(Style::default().add_modifier(Modifier::BOLD))
            .highlight_symbol("> ");

        StatefulWidget::render(list, area, buf, state);
    }
}
