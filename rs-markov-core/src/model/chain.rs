use std::collections::HashMap;
use std::collections::hash_map;
use std::path::Path;
use std::thread;

use super::continuations::{Continuation, Continuations};
use super::prefix::Prefix;
use crate::error::Result;
use crate::io::read_corpus;

/// Below this many tokens, `build_parallel` learns on the calling thread.
const PARALLEL_THRESHOLD: usize = 1 << 16;

/// Number of chunks created per CPU core by `build_parallel`.
const CHUNKS_PER_CPU: usize = 8;

/// A word-level, second-order Markov chain.
///
/// The `Chain` maps every two-word window seen while scanning a corpus to
/// the list of words that followed it.
///
/// # Responsibilities
/// - Learn every consecutive trigram `(w[i-2], w[i-1]) -> w[i]` of a token sequence
/// - Record the terminal entries marking where the learned text ends
/// - Merge partial chains learned on separate threads
///
/// # Invariants
/// - Every token contributes exactly one observation, under the window that preceded it
/// - The final window and `(last_word, None)` each hold one `Continuation::End`
/// - Once built, a chain is never mutated by generation
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Chain {
	/// Mapping from a two-word window to everything observed after it
	entries: HashMap<Prefix, Continuations>,
}

impl Chain {
	/// Builds a chain from the tokens of a UTF-8 text file.
	///
	/// The file is split on whitespace and learned with [`Chain::build_parallel`].
	///
	/// # Errors
	/// Returns [`Error::Io`](crate::Error::Io) if the file cannot be read.
	pub fn from_file<P: AsRef<Path>>(filepath: P) -> Result<Self> {
		let tokens = read_corpus(&filepath)?;
		log::debug!("read {} tokens from {}", tokens.len(), filepath.as_ref().display());
		Ok(Self::build_parallel(&tokens))
	}

	/// Builds a chain by scanning `tokens` once, on the calling thread.
	///
	/// Accepts any input. An empty sequence yields a single `(None, None)`
	/// entry holding two end markers.
	pub fn build(tokens: &[String]) -> Self {
		let mut chain = Self::default();
		chain.learn(Prefix::start(), tokens);
		chain.close(Prefix::window_before(tokens, tokens.len()));
		log::debug!("learned {} prefixes from {} tokens", chain.len(), tokens.len());
		chain
	}

	/// Builds the same chain as [`Chain::build`], splitting the work across threads.
	///
	/// # Behavior
	/// - Splits `tokens` into `num_cpus * 8` chunks.
	/// - Each thread learns its chunk starting from the window formed by the two
	///   tokens preceding the chunk, so no trigram spanning a chunk boundary is lost.
	/// - Partial chains are merged in chunk order, which keeps every continuation
	///   list in source order.
	/// - Terminal entries are recorded once, after the merge.
	///
	/// Inputs smaller than an internal threshold are learned sequentially.
	pub fn build_parallel(tokens: &[String]) -> Self {
		if tokens.len() < PARALLEL_THRESHOLD {
			return Self::build(tokens);
		}
		Self::build_in_chunks(tokens, num_cpus::get() * CHUNKS_PER_CPU)
	}

	fn build_in_chunks(tokens: &[String], chunks: usize) -> Self {
		let chunk_size = tokens.len().div_ceil(chunks.max(1)).max(1);

		let partials: Vec<Chain> = thread::scope(|scope| {
			let handles: Vec<_> = tokens
				.chunks(chunk_size)
				.enumerate()
				.map(|(i, chunk)| {
					let window = Prefix::window_before(tokens, i * chunk_size);
					scope.spawn(move || {
						let mut partial = Chain::default();
						partial.learn(window, chunk);
						partial
					})
				})
				.collect();

			handles
				.into_iter()
				.map(|handle| handle.join().unwrap_or_else(|panic| std::panic::resume_unwind(panic)))
				.collect()
		});

		let mut chain = Self::default();
		for partial in partials {
			chain.merge(partial);
		}
		chain.close(Prefix::window_before(tokens, tokens.len()));
		log::debug!(
			"learned {} prefixes from {} tokens in {} chunks",
			chain.len(),
			tokens.len(),
			tokens.len().div_ceil(chunk_size)
		);
		chain
	}

	/// Records every token under the window preceding it, starting from `window`.
	///
	/// Returns the window after the last token.
	fn learn(&mut self, mut window: Prefix, tokens: &[String]) -> Prefix {
		for token in tokens {
			self.entries
				.entry(window.clone())
				.or_default()
				.push(Continuation::Word(token.clone()));
			window.shift(token);
		}
		window
	}

	/// Records the two terminal entries for a scan that ended on `window`.
	fn close(&mut self, window: Prefix) {
		let tail = Prefix::new(window.second().map(str::to_owned), None);
		self.entries.entry(window).or_default().push(Continuation::End);
		self.entries.entry(tail).or_default().push(Continuation::End);
	}

	/// Merges another chain into this one.
	///
	/// Continuation lists of shared prefixes are concatenated (`self` first);
	/// prefixes only present in `other` are moved in.
	pub fn merge(&mut self, other: Self) {
		for (prefix, continuations) in other.entries {
			match self.entries.entry(prefix) {
				hash_map::Entry::Occupied(mut existing) => existing.get_mut().merge(continuations),
				hash_map::Entry::Vacant(slot) => {
					slot.insert(continuations);
				}
			}
		}
	}

	/// Returns the continuations observed after `prefix`, if any.
	pub fn get(&self, prefix: &Prefix) -> Option<&Continuations> {
		self.entries.get(prefix)
	}

	/// Iterates over all known prefixes, in no particular order.
	pub fn prefixes(&self) -> impl Iterator<Item=&Prefix> {
		self.entries.keys()
	}

	/// Number of distinct prefixes.
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}
}
