//! Core domain types for jumble puzzles
//!
//! Pure letter arithmetic with no I/O and no shared state. Everything here is
//! cheap to construct and safe to use from any thread.

mod letters;

pub use letters::LetterBag;
