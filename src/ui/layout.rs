use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::game::GameController;
use crate::model::{Feedback, Phase};
use crate::ui::answers::AnswerButtons;
use crate::ui::header::Header;
use crate::ui::menu::{ThemeMenu, ThemeMenuPopup};
use crate::ui::swatch::Swatch;
use crate::ui::theme::Theme;

// Play area, centered in the terminal.
const PLAY_WIDTH: u16 = 50;
const PLAY_HEIGHT: u16 = 23;

const MENU_WIDTH: u16 = 24;
const MENU_HEIGHT: u16 = 5;

pub fn draw(frame: &mut Frame, controller: &GameController, menu: &mut ThemeMenu) {
    let theme = controller.theme().theme();
    let state = controller.state();

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(frame.area());

    // Theme background behind everything
    frame.render_widget(
        Block::default().style(Style::default().bg(theme.bg)),
        main_chunks[0],
    );

    let play = centered_rect(PLAY_WIDTH, PLAY_HEIGHT, main_chunks[0]);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // time + score
            Constraint::Length(5), // swatch
            Constraint::Length(2), // feedback glyph
            Constraint::Length(8), // answer buttons
            Constraint::Length(3), // start button
        ])
        .split(play);

    frame.render_widget(Header::new(state, &theme), chunks[0]);

    let swatch_area = centered_rect(24, chunks[1].height, chunks[1]);
    frame.render_widget(Swatch::new(state.round.as_ref(), &theme), swatch_area);

    let feedback = Paragraph::new(feedback_line(state.feedback, &theme))
        .alignment(Alignment::Center)
        .style(Style::default().bg(theme.bg));
    frame.render_widget(feedback, chunks[2]);

    frame.render_widget(
        AnswerButtons::new(state.round.as_ref(), state.phase == Phase::Playing, &theme),
        chunks[3],
    );

    frame.render_widget(start_button(state.phase, &theme), chunks[4]);

    let status = Paragraph::new(status_line(state.phase))
        .style(
            Style::default()
                .fg(theme.fg)
                .bg(theme.bg)
                .add_modifier(Modifier::DIM),
        );
    frame.render_widget(status, main_chunks[1]);

    if menu.open {
        let popup = centered_rect(MENU_WIDTH, MENU_HEIGHT, main_chunks[0]);
        frame.render_stateful_widget(ThemeMenuPopup::new(&theme), popup, &mut menu.list);
    }
}

fn feedback_line(feedback: Feedback, theme: &Theme) -> Line<'static> {
    match feedback {
        Feedback::None => Line::from(Span::raw("")),
        Feedback::Correct => Line::from(Span::styled(
            "✓",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )),
        Feedback::Wrong => Line::from(Span::styled(
            "✗",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        Feedback::GameOver(score) => Line::from(Span::styled(
            format!("Game Over! Score: {}", score),
            Style::default().fg(theme.fg).add_modifier(Modifier::BOLD),
        )),
    }
}

fn start_button(phase: Phase, theme: &Theme) -> Paragraph<'static> {
    let mut style = Style::default().bg(theme.start_bg).fg(theme.start_fg);
    if phase == Phase::Playing {
        style = style.add_modifier(Modifier::DIM);
    }

    Paragraph::new("Start Game")
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL))
        .style(style)
}

fn status_line(phase: Phase) -> String {
    match phase {
        Phase::Idle => "q:quit  s:start  t:theme".to_string(),
        Phase::Playing => "q:quit  1-4:answer  t:theme".to_string(),
    }
}

/// Center a `width` x `height` box inside `area`, clamped to fit.
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}
