//! Puzzle engines
//!
//! Stateless algorithms that run over a shared [`Dictionary`](crate::dictionary::Dictionary):
//! sub-word enumeration and letter scrambling.

mod matcher;
mod scramble;

pub use matcher::{DEFAULT_MIN_LENGTH, SubwordMatcher};
pub use scramble::{DEFAULT_RETRIES, Scrambler};
