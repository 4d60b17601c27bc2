/// A two-word window used as a key into a [`Chain`](super::chain::Chain).
///
/// Each slot is optional: `None` means "no word here", which happens at the
/// start of the text (before the first two words) and in the terminal
/// `(last_word, None)` entry. A real token can never be confused with an
/// empty slot.
///
/// Prefixes are ordered (slot by slot, `None` first) so that candidate
/// lists can be sorted into a stable order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Prefix {
	first: Option<String>,
	second: Option<String>,
}

impl Prefix {
	/// Creates a prefix from two optional words.
	pub fn new(first: Option<String>, second: Option<String>) -> Self {
		Self { first, second }
	}

	/// Creates a prefix made of two real words.
	pub fn words(first: &str, second: &str) -> Self {
		Self::new(Some(first.to_owned()), Some(second.to_owned()))
	}

	/// The window before any word has been seen: `(None, None)`.
	pub fn start() -> Self {
		Self::default()
	}

	/// Returns the window formed by the two tokens preceding `index`.
	///
	/// Positions before the beginning of `tokens` are empty slots, so
	/// `window_before(tokens, 0)` is [`Prefix::start`] and
	/// `window_before(tokens, tokens.len())` is the final window of a scan.
	pub fn window_before(tokens: &[String], index: usize) -> Self {
		let slot = |back: usize| index.checked_sub(back).and_then(|i| tokens.get(i)).cloned();
		Self::new(slot(2), slot(1))
	}

	pub fn first(&self) -> Option<&str> {
		self.first.as_deref()
	}

	pub fn second(&self) -> Option<&str> {
		self.second.as_deref()
	}

	/// Slides the window by one word: `(a, b)` becomes `(b, word)`.
	pub fn shift(&mut self, word: &str) {
		self.first = self.second.take();
		self.second = Some(word.to_owned());
	}

	/// Returns the non-empty slots, in order.
	pub fn present_words(&self) -> impl Iterator<Item=&str> {
		self.first().into_iter().chain(self.second())
	}
}
