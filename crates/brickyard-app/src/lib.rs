//! brickyard command-line runner.
//!
//! Wires the demo game to a headless backend and exposes the result as a
//! process exit status.

pub mod cli;
pub mod runner;

pub use cli::Cli;
pub use runner::{run, RunReport};

#[cfg(test)]
mod tests;
