//! Wordlist generation engine for Seedforge.
//!
//! This crate expands the built-in category word lists into deterministic,
//! sorted wordlist files of fixed-length seed candidates for an external
//! seed-search tool.

pub mod engine;
pub mod errors;
pub mod expand;
pub mod model;
pub mod output;
pub mod tables;

pub use engine::{GenerationEngine, GenerationResult};
pub use errors::GenerationError;
pub use model::{CategoryReport, GenerateOptions, GenerationReport};
pub use tables::ExpansionTables;
