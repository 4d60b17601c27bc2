use std::io;

use thiserror::Error;

/// Errors produced while configuring a run, loading a corpus or seeding a walk.
///
/// # Variants
/// - `Config`: a generation setting is out of range (ex. `nums <= 0`).
///   Always detected before any corpus is read.
/// - `Io`: the corpus could not be read. The underlying error is kept as-is.
/// - `NoStartPrefix`: the chain has no prefix starting with a capitalized word,
///   so no walk can be seeded.
///
/// Early termination of a walk is not an error and has no variant here.
#[derive(Debug, Error)]
pub enum Error {
	#[error("invalid configuration: {0}")]
	Config(String),

	#[error(transparent)]
	Io(#[from] io::Error),

	#[error("no valid starting word found (no prefix begins with a capitalized word)")]
	NoStartPrefix,
}

pub type Result<T> = std::result::Result<T, Error>;
