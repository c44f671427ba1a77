//! Core contracts and domain data for Seedforge.
//!
//! This crate defines the seed alphabet, the built-in word list categories,
//! and the shared error type used by the generation engine and the CLI.

pub mod alphabet;
pub mod category;
pub mod error;
pub mod words;

pub use alphabet::{Alphabet, SEED_CHARS};
pub use category::{builtin_categories, Category};
pub use error::{Error, Result};

/// Exact length of every emitted seed string.
pub const SEED_LENGTH: usize = 8;
