//! Command implementations

pub mod census;
pub mod query;
pub mod simple;

pub use census::{CensusResult, run_census};
pub use query::{Query, QueryAnswer, run_query};
pub use simple::run_simple;
