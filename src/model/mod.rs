mod palette;
mod round;
mod state;

pub use round::{Round, OPTION_COUNT};
pub use state::{Feedback, GameState, Phase, GAME_SECONDS};
