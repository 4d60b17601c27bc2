use rand::Rng;

use super::chain::Chain;
use super::continuations::Continuation;
use super::generation_input::{EndPolicy, GenerationInput};
use super::prefix::Prefix;
use crate::error::{Error, Result};

/// Returns `true` if `word` looks like the start of a sentence.
///
/// Only the first Unicode code point is inspected, with
/// [`char::is_uppercase`]. The check is locale-naive: no title-case or
/// language-specific capitalization rules are applied, and a word starting
/// with punctuation or a digit never qualifies.
pub fn is_likely_sentence_start(word: &str) -> bool {
	word.chars().next().is_some_and(char::is_uppercase)
}

/// Random walk generator over a [`Chain`].
///
/// # Responsibilities
/// - Pick a capitalized starting prefix
/// - Walk the chain for a bounded number of steps, sampling continuations uniformly
///
/// The random source is owned by the generator and supplied by the caller,
/// so a seeded source gives reproducible output.
#[derive(Debug)]
pub struct Generator<'a, R> {
	chain: &'a Chain,
	rng: R,
}

impl<'a, R: Rng> Generator<'a, R> {
	pub fn new(chain: &'a Chain, rng: R) -> Self {
		Self { chain, rng }
	}

	/// Chooses the prefix used to seed a walk.
	///
	/// # Behavior
	/// - Keeps prefixes whose first word satisfies [`is_likely_sentence_start`].
	/// - Sorts them, so the choice only depends on the random source and not
	///   on hash-map iteration order.
	/// - Picks one uniformly at random.
	///
	/// # Errors
	/// Returns [`Error::NoStartPrefix`] if no prefix qualifies.
	pub fn choose_start(&mut self) -> Result<Prefix> {
		let mut candidates: Vec<&Prefix> = self
			.chain
			.prefixes()
			.filter(|prefix| prefix.first().is_some_and(is_likely_sentence_start))
			.collect();

		if candidates.is_empty() {
			return Err(Error::NoStartPrefix);
		}
		candidates.sort_unstable();

		let index = self.rng.random_range(0..candidates.len());
		log::debug!("chose start prefix {:?} among {} candidates", candidates[index], candidates.len());
		Ok(candidates[index].clone())
	}

	/// Walks the chain from `start` for at most `input.nums()` steps.
	///
	/// The output begins with the non-empty words of `start`, followed by at
	/// most `input.nums()` generated words.
	///
	/// # Behavior
	/// At each step, the continuations of the current window are looked up.
	/// - Unknown window or empty list: the walk stops.
	/// - A word: it is emitted and the window slides forward.
	/// - The end marker: handled according to `input.end_policy`.
	///
	/// Stopping early is a normal outcome, not an error.
	pub fn walk(&mut self, start: &Prefix, input: &GenerationInput) -> Vec<String> {
		let mut output: Vec<String> = start.present_words().map(str::to_owned).collect();
		let mut window = start.clone();

		for step in 0..input.nums() {
			let next = match self.chain.get(&window).and_then(|c| c.choose(&mut self.rng)) {
				Some(next) => next,
				None => {
					log::debug!("walk stopped after {step} steps: no continuation for {window:?}");
					break;
				}
			};

			match next {
				Continuation::Word(word) => {
					window.shift(word);
					output.push(word.clone());
				}
				Continuation::End => match input.end_policy {
					EndPolicy::Stop => {
						log::debug!("walk stopped after {step} steps: end of learned text");
						break;
					}
					EndPolicy::Skip => continue,
				},
			}
		}

		output
	}

	/// Chooses a start prefix and walks from it.
	///
	/// # Errors
	/// Returns [`Error::NoStartPrefix`] if the chain has no capitalized prefix.
	/// No walk is attempted in that case.
	pub fn generate(&mut self, input: &GenerationInput) -> Result<Vec<String>> {
		let start = self.choose_start()?;
		Ok(self.walk(&start, input))
	}
}
