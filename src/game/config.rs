//! Game creation settings

use crate::engine::DEFAULT_MIN_LENGTH;
use crate::error::{JumbleError, Result};

/// Shortest seed word a game may be built from
pub const MIN_WORD_LENGTH: usize = 3;

/// Seed word length used for a default game
pub const DEFAULT_WORD_LENGTH: usize = 6;

/// Settings applied when the registry creates and plays games
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Seed word length
    pub length: usize,
    /// Shortest sub-word that counts as an answer
    pub min_length: usize,
    /// Shuffle the board again before every guess is checked
    pub rescramble_on_guess: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            length: DEFAULT_WORD_LENGTH,
            min_length: DEFAULT_MIN_LENGTH,
            rescramble_on_guess: false,
        }
    }
}

impl GameConfig {
    /// Validate a requested seed length and optional sub-word minimum
    ///
    /// Other fields keep their defaults.
    ///
    /// # Errors
    ///
    /// Fails when `length` is below [`MIN_WORD_LENGTH`], when `min_length` is
    /// zero, or when `min_length` exceeds `length`.
    pub fn for_length(length: usize, min_length: Option<usize>) -> Result<Self> {
        let config = Self {
            length,
            min_length: min_length.unwrap_or(DEFAULT_MIN_LENGTH),
            ..Self::default()
        };
        config.validate()?;
        Ok(config)
    }

    /// Check the length constraints
    ///
    /// # Errors
    ///
    /// See [`GameConfig::for_length`].
    pub const fn validate(&self) -> Result<()> {
        if self.min_length == 0 {
            return Err(JumbleError::InvalidMinLength(self.min_length));
        }
        if self.length < MIN_WORD_LENGTH {
            return Err(JumbleError::InvalidLength(self.length));
        }
        if self.min_length > self.length {
            return Err(JumbleError::MinLengthExceedsLength {
                min_length: self.min_length,
                length: self.length,
            });
        }
        Ok(())
    }
}
