//! Trigram (second-order Markov) text generation library.
//!
//! This crate provides a small word-level Markov chain toolkit including:
//! - Chain construction from a whitespace-tokenized corpus (sequential or parallel)
//! - Capitalized start-prefix selection
//! - Bounded random walks with an explicit end-of-text policy
//! - Display helpers (tokenizing, line wrapping)
//!
//! Randomness is always injected by the caller, so every operation is
//! deterministic given its inputs and its random source.

/// Error type shared by the whole crate.
pub mod error;

/// Chain model, prefixes, generation settings and the random-walk generator.
pub mod model;

/// Tokenizing and line wrapping.
pub mod text;

/// I/O utilities (corpus loading).
///
/// Not exposed
pub(crate) mod io;

pub use error::{Error, Result};
