//! Error types for the jumble engine

use std::path::PathBuf;

use thiserror::Error;

/// Failures reported by dictionary loading and the game registry
///
/// A wrong guess is not an error; it is reported through
/// [`GuessVerdict`](crate::game::GuessVerdict).
#[derive(Debug, Error)]
pub enum JumbleError {
    /// Requested seed word length is below the playable minimum.
    #[error("Invalid length=[{0}], expect greater than or equals 3")]
    InvalidLength(usize),

    /// Sub-word minimum length must be a positive integer.
    #[error("Invalid minLength=[{0}], expect positive integer")]
    InvalidMinLength(usize),

    /// Sub-word minimum length cannot exceed the seed word length.
    #[error("Expect minLength=[{min_length}] not greater than length=[{length}]")]
    MinLengthExceedsLength {
        /// Requested minimum sub-word length.
        min_length: usize,
        /// Requested seed word length.
        length: usize,
    },

    /// Blank or malformed game identifier.
    #[error("Invalid Game ID.")]
    InvalidGameId(String),

    /// Well-formed identifier with no registered game.
    #[error("Game board/state not found.")]
    GameNotFound(String),

    /// The corpus has no word of the requested length.
    #[error("Cannot find valid word of length {0} to create game state")]
    NoWordAvailable(usize),

    /// Every word of the requested length hides no sub-word of `min_length`.
    #[error("No word of length {length} hides a word of {min_length} letters or more")]
    NoPlayableWord {
        /// Requested seed word length.
        length: usize,
        /// Requested minimum sub-word length.
        min_length: usize,
    },

    /// The word list could not be read.
    #[error("I/O error reading word list {path}: {source}")]
    CorpusUnavailable {
        /// Path of the word list.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },
}

impl JumbleError {
    /// Caller supplied a value that failed validation
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::InvalidLength(_)
                | Self::InvalidMinLength(_)
                | Self::MinLengthExceedsLength { .. }
                | Self::InvalidGameId(_)
        )
    }

    /// Identifier was well-formed but unknown
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::GameNotFound(_))
    }
}

/// Result alias for jumble operations
pub type Result<T> = std::result::Result<T, JumbleError>;
