//! Command line interface module
//!
//! Argument parsing, validation, and the runner that drives one search
//! invocation end to end.

pub mod args;
pub mod runner;

pub use args::Args;
pub use runner::Runner;
