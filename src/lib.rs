//! Jumble
//!
//! A word puzzle engine: dictionary queries, letter scrambling, and guessing
//! games where the player recovers every word hidden inside a scrambled seed.
//!
//! # Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//! use jumble::dictionary::Dictionary;
//! use jumble::game::{GameConfig, GameRegistry};
//!
//! let registry = GameRegistry::new(Arc::new(Dictionary::embedded()), GameConfig::default());
//! let game = registry.create_default().unwrap();
//! println!("Unscramble: {}", game.scramble());
//!
//! let report = registry.guess(&game.id().to_string(), "owl").unwrap();
//! println!("{} ({} left)", report.result, report.game.remaining_words);
//! ```

// Core domain types
pub mod core;

// Word corpus and query indices
pub mod dictionary;

// Sub-word matching and scrambling
pub mod engine;

// Error types
pub mod error;

// Game state and session registry
pub mod game;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

pub use error::{JumbleError, Result};
