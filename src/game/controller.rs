use std::time::{Duration, Instant};

use rand::Rng;

use crate::game::timer::{TimerKind, TimerQueue};
use crate::model::{Feedback, GameState, Phase, Round, GAME_SECONDS};
use crate::ui::ThemeKind;

const TICK_INTERVAL: Duration = Duration::from_millis(1000);
const FEEDBACK_DURATION: Duration = Duration::from_millis(1000);

/// Owns the game state and the pending timers. Every mutation goes through
/// here: key handlers call `start_game`/`answer`/`apply_theme`, the event
/// loop calls `advance` to fire due timers.
pub struct GameController {
    state: GameState,
    theme: ThemeKind,
    timers: TimerQueue,
}

impl GameController {
    pub fn new(theme: ThemeKind) -> Self {
        Self {
            state: GameState::new(),
            theme,
            timers: TimerQueue::new(),
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn theme(&self) -> ThemeKind {
        self.theme
    }

    /// Themes are legal in any phase and never touch game state.
    pub fn apply_theme(&mut self, theme: ThemeKind) {
        self.theme = theme;
    }

    /// Reset score and clock, deal the first round and arm the countdown.
    /// Ignored while a game is already running.
    pub fn start_game(&mut self, rng: &mut impl Rng, now: Instant) {
        if self.state.phase == Phase::Playing {
            return;
        }
        self.state.generation += 1;
        self.state.score = 0;
        self.state.time_left = GAME_SECONDS;
        self.state.phase = Phase::Playing;
        self.state.feedback = Feedback::None;
        self.state.round = Some(Round::generate(rng));
        self.timers.schedule(
            TimerKind::CountdownTick,
            self.state.generation,
            now + TICK_INTERVAL,
        );
    }

    /// Score the option at `slot` against the current round, then deal the
    /// next one. The ✓/✗ indicator stays up for a second without blocking
    /// further answers.
    pub fn answer(&mut self, slot: usize, rng: &mut impl Rng, now: Instant) {
        if self.state.phase != Phase::Playing {
            return;
        }
        let Some(round) = &self.state.round else {
            return;
        };
        if slot >= round.slots.len() {
            return;
        }

        if round.is_correct(slot) {
            self.state.score += 1;
            self.state.feedback = Feedback::Correct;
        } else {
            self.state.score -= 1;
            self.state.feedback = Feedback::Wrong;
        }
        self.timers.schedule(
            TimerKind::ClearFeedback,
            self.state.generation,
            now + FEEDBACK_DURATION,
        );
        self.state.round = Some(Round::generate(rng));
    }

    /// Fire every due timer. Entries scheduled under an earlier game are
    /// dropped unfired. Returns whether anything changed.
    pub fn advance(&mut self, now: Instant) -> bool {
        let mut changed = false;
        for entry in self.timers.pop_due(now) {
            if entry.generation != self.state.generation {
                continue;
            }
            changed = true;
            match entry.kind {
                TimerKind::CountdownTick => self.tick(now),
                TimerKind::ClearFeedback => self.clear_feedback(),
            }
        }
        changed
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.timers.next_deadline()
    }

    fn tick(&mut self, now: Instant) {
        if self.state.time_left > 0 {
            self.state.time_left -= 1;
            self.timers.schedule(
                TimerKind::CountdownTick,
                self.state.generation,
                now + TICK_INTERVAL,
            );
        } else {
            self.end_game();
        }
    }

    fn clear_feedback(&mut self) {
        if matches!(self.state.feedback, Feedback::Correct | Feedback::Wrong) {
            self.state.feedback = Feedback::None;
        }
    }

    fn end_game(&mut self) {
        self.state.phase = Phase::Idle;
        self.state.feedback = Feedback::GameOver(self.state.score);
    }
}
