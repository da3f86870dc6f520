use std::io;
use std::time::{Duration, Instant};

use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle,
    },
};
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::error::Result;
use crate::game::GameController;
use crate::ui::{self, ThemeKind, ThemeMenu};

const IDLE_POLL: Duration = Duration::from_millis(250);

pub fn run(start_theme: ThemeKind) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(
        stdout,
        EnterAlternateScreen,
        SetTitle("Color Prediction Game")
    )?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut controller = GameController::new(start_theme);
    let mut menu = ThemeMenu::new();
    let mut rng = rand::thread_rng();
    let mut dirty = true;

    // Main loop
    loop {
        if controller.advance(Instant::now()) {
            dirty = true;
        }

        // Only redraw when state has changed
        if dirty {
            terminal.draw(|f| ui::draw(f, &controller, &mut menu))?;
            dirty = false;
        }

        let timeout = poll_timeout(controller.next_deadline(), Instant::now());

        // Poll for keyboard input until the next timer is due
        if event::poll(timeout)? {
            match event::read()? {
                Event::Resize(_, _) => dirty = true,
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    dirty = true;

                    // The theme picker captures input while open
                    if menu.open {
                        match key.code {
                            KeyCode::Esc | KeyCode::Char('t') => menu.close(),
                            KeyCode::Up => menu.move_cursor(-1),
                            KeyCode::Down => menu.move_cursor(1),
                            KeyCode::Enter => {
                                if let Some(kind) = menu.selected() {
                                    controller.apply_theme(kind);
                                }
                                menu.close();
                            }
                            _ => {}
                        }
                        continue;
                    }

                    match key.code {
                        KeyCode::Char('q') | KeyCode::Esc => break,
                        KeyCode::Char('t') => menu.open_at(controller.theme()),
                        KeyCode::Char('s') | KeyCode::Enter => {
                            controller.start_game(&mut rng, Instant::now());
                        }
                        KeyCode::Char(c @ '1'..='4') => {
                            let slot = (c as u8 - b'1') as usize;
                            controller.answer(slot, &mut rng, Instant::now());
                        }
                        _ => {}
                    }
                }
                _ => {}
            }
        }
    }

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    Ok(())
}

/// Sleep until the next timer deadline, capped so resizes stay responsive.
fn poll_timeout(next_deadline: Option<Instant>, now: Instant) -> Duration {
    match next_deadline {
        Some(deadline) => deadline.saturating_duration_since(now).min(IDLE_POLL),
        None => IDLE_POLL,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_poll_timeout_without_timers_is_idle_poll() {
        let now = Instant::now();
        assert_eq!(poll_timeout(None, now), IDLE_POLL);
    }

    #[test]
    fn test_poll_timeout_tracks_near_deadline() {
        let now = Instant::now();
        let deadline = now + Duration::from_millis(100);
        assert_eq!(poll_timeout(Some(deadline), now), Duration::from_millis(100));
    }

    #[test]
    fn test_poll_timeout_is_zero_for_overdue_deadline() {
        let now = Instant::now();
        let deadline = now - Duration::from_millis(50);
        assert_eq!(poll_timeout(Some(deadline), now), Duration::ZERO);
    }

    #[test]
    fn test_poll_timeout_caps_far_deadline() {
        let now = Instant::now();
        let deadline = now + Duration::from_secs(30);
        assert_eq!(poll_timeout(Some(deadline), now), IDLE_POLL);
    }
}
