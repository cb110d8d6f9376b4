//! Serializable projections of game state
//!
//! These are what a presentation layer renders or sends over the wire.

use super::id::GameId;
use super::state::GuessVerdict;
use serde::Serialize;

/// Result message for a freshly created game
pub const CREATED_MESSAGE: &str = "Created new game.";

/// Snapshot of a game as seen by the player
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameView {
    pub id: GameId,
    pub original_word: String,
    pub scramble_word: String,
    pub total_words: usize,
    pub remaining_words: usize,
    pub guessed_words: Vec<String>,
}

/// Response to a game creation request
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreatedReport {
    pub result: &'static str,
    #[serde(flatten)]
    pub game: GameView,
}

impl From<GameView> for CreatedReport {
    fn from(game: GameView) -> Self {
        Self {
            result: CREATED_MESSAGE,
            game,
        }
    }
}

/// Response to a guess
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GuessReport {
    #[serde(skip)]
    pub verdict: GuessVerdict,
    pub result: &'static str,
    pub correct: bool,
    /// The word as submitted, before normalization
    pub guess_word: String,
    #[serde(flatten)]
    pub game: GameView,
}

impl GuessReport {
    #[must_use]
    pub fn new(verdict: GuessVerdict, guess_word: impl Into<String>, game: GameView) -> Self {
        Self {
            verdict,
            result: verdict.message(),
            correct: verdict.is_correct(),
            guess_word: guess_word.into(),
            game,
        }
    }
}
