use rand::seq::SliceRandom;
use rand::Rng;

use super::palette::{ColorEntry, PALETTE};

pub const OPTION_COUNT: usize = 4;

/// One on-screen answer option. Each slot carries its own label and color
/// so the action bound to it can never drift from what is displayed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnswerSlot {
    pub label: &'static str,
    pub color: ratatui::style::Color,
}

impl AnswerSlot {
    fn from_entry(entry: &ColorEntry) -> Self {
        Self {
            label: entry.name,
            color: entry.value,
        }
    }
}

/// One swatch-plus-options question.
#[derive(Debug, Clone, PartialEq)]
pub struct Round {
    pub target: AnswerSlot,
    pub slots: [AnswerSlot; OPTION_COUNT],
}

impl Round {
    /// Pick a target color, sample three distinct distractors and shuffle
    /// the four into display order.
    pub fn generate(rng: &mut impl Rng) -> Self {
        let target = &PALETTE[rng.gen_range(0..PALETTE.len())];

        let others: Vec<&ColorEntry> = PALETTE
            .iter()
            .filter(|entry| entry.name != target.name)
            .collect();

        let mut slots: Vec<AnswerSlot> = std::iter::once(target)
            .chain(others.choose_multiple(rng, OPTION_COUNT - 1).copied())
            .map(AnswerSlot::from_entry)
            .collect();
        slots.shuffle(rng);

        Self {
            target: AnswerSlot::from_entry(target),
            slots: [slots[0], slots[1], slots[2], slots[3]],
        }
    }

    /// Whether the option at `slot` names the target color. Out-of-range
    /// slots are never correct.
    pub fn is_correct(&self, slot: usize) -> bool {
        self.slots
            .get(slot)
            .is_some_and(|s| s.label == self.target.label)
    }
}
