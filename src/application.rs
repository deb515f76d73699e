//! Application layer module
//!
//! Use cases that drive the collector for a configured search.

pub mod search_use_cases;

pub use search_use_cases::{SearchOutcome, SearchUseCases};
