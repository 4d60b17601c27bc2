//! Top-level module for the trigram Markov chain.
//!
//! This module provides:
//! - Two-word lookup keys (`Prefix`)
//! - Observed continuations and the end-of-text marker (`Continuation`, `Continuations`)
//! - The prefix-to-continuations mapping (`Chain`)
//! - Validated generation settings (`GenerationInput`)
//! - Start selection and the random walk (`Generator`)

/// Two-word window used as a lookup key.
pub mod prefix;

/// Continuation lists attached to each prefix.
///
/// Stores every observed next word (duplicates included) and supports
/// uniform random sampling.
pub mod continuations;

/// Prefix-to-continuations mapping.
///
/// Supports sequential and parallel construction, and merging.
pub mod chain;

/// Generation settings: word count, wrap width and end-of-text policy.
pub mod generation_input;

/// Start-prefix selection and bounded random walks over a `Chain`.
pub mod generator;
