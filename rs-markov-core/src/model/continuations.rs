use rand::Rng;

/// One observed successor of a prefix.
///
/// `End` is the learned end-of-text marker recorded by the terminal entries
/// of a chain. It is distinct from every real token, including `""`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Continuation {
	Word(String),
	End,
}

impl Continuation {
	/// Returns the word, or `None` for the end marker.
	pub fn as_word(&self) -> Option<&str> {
		match self {
			Continuation::Word(word) => Some(word),
			Continuation::End => None,
		}
	}
}

/// All successors observed after a given prefix.
///
/// Conceptually, this is the set of outgoing edges of a node in the Markov
/// chain. Instead of counting occurrences, every observation is kept in
/// insertion order, so a word seen three times is three times as likely to
/// be sampled.
///
/// ## Invariants
/// - Insertion order is preserved
/// - Duplicates are kept (they encode frequency)
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Continuations {
	observed: Vec<Continuation>,
}

impl Continuations {
	/// Records one more observation.
	pub fn push(&mut self, next: Continuation) {
		self.observed.push(next);
	}

	/// Picks one observation uniformly at random.
	///
	/// Returns `None` if nothing was observed.
	pub fn choose<R: Rng>(&self, rng: &mut R) -> Option<&Continuation> {
		if self.observed.is_empty() {
			return None;
		}
		self.observed.get(rng.random_range(0..self.observed.len()))
	}

	/// Appends all observations of `other` after the ones already stored.
	///
	/// Used to combine partial chains learned in parallel.
	pub fn merge(&mut self, other: Self) {
		self.observed.extend(other.observed);
	}

	pub fn len(&self) -> usize {
		self.observed.len()
	}

	pub fn is_empty(&self) -> bool {
		self.observed.is_empty()
	}

	pub fn iter(&self) -> impl Iterator<Item=&Continuation> {
		self.observed.iter()
	}
}

impl FromIterator<Continuation> for Continuations {
	fn from_iter<I: IntoIterator<Item=Continuation>>(iter: I) -> Self {
		Self { observed: iter.into_iter().collect() }
	}
}
