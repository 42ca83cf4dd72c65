//! Core types and definitions for brickyard.
//!
//! This crate defines the vocabulary shared across all other crates:
//! components, value types, input events, enums, and constants.
//! It has no dependency on the engine or any backend.

pub mod components;
pub mod constants;
pub mod enums;
pub mod events;
pub mod types;

#[cfg(test)]
mod tests;
