//! Guessing games
//!
//! A game hides every sub-word of a random seed word behind a scrambled
//! display of its letters. [`GameRegistry`] owns all live games and is the
//! entry point for creating them and submitting guesses.

mod config;
mod id;
mod registry;
mod state;
mod view;

pub use config::{DEFAULT_WORD_LENGTH, GameConfig, MIN_WORD_LENGTH};
pub use id::GameId;
pub use registry::GameRegistry;
pub use state::{GamePhase, GameState, GuessVerdict, SubWord};
pub use view::{CREATED_MESSAGE, CreatedReport, GameView, GuessReport};
