//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_answers, print_census_result, print_game_board, print_guess_report, print_query_answer,
};
