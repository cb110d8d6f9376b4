//! Opaque game identifiers

use crate::error::{JumbleError, Result};
use serde::Serialize;
use std::fmt;
use uuid::Uuid;

/// Identifier of one game session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct GameId(Uuid);

impl GameId {
    /// Fresh random identifier
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse an identifier supplied by a caller
    ///
    /// # Errors
    ///
    /// Returns [`JumbleError::InvalidGameId`] when `raw` is blank or not a UUID.
    ///
    /// # Examples
    /// ```
    /// use jumble::game::GameId;
    ///
    /// assert!(GameId::parse("51eb70da-7e19-46eb-b45e-ab25e9b6c444").is_ok());
    /// assert!(GameId::parse("  ").is_err());
    /// ```
    pub fn parse(raw: &str) -> Result<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(JumbleError::InvalidGameId(raw.to_string()));
        }
        Uuid::parse_str(trimmed)
            .map(Self)
            .map_err(|_| JumbleError::InvalidGameId(raw.to_string()))
    }
}

impl Default for GameId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for GameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
