//! CLI command implementations.

mod display;

pub mod search;
pub mod summary;
