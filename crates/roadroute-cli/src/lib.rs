//! roadroute CLI library.
//!
//! This crate provides command-line interface utilities for the roadroute
//! planner, including argument parsing helpers, terminal styling and output
//! formatting.

pub mod input;
pub mod output;
pub mod terminal;
