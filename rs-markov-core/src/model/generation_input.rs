use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Default number of words generated after the seed.
pub const DEFAULT_NUMS: usize = 50;

/// Default display width used when wrapping generated text.
pub const DEFAULT_WIDTH: usize = 90;

/// What a walk does when it draws the learned end-of-text marker.
///
/// # Variants
/// - `Stop`: the walk ends there. Output is whatever was generated so far.
/// - `Skip`: the draw is ignored. Nothing is emitted, the window does not
///   move, and the iteration still counts against the word budget. Repeated
///   draws of the marker can exhaust the budget without producing output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EndPolicy {
	#[default]
	Stop,
	Skip,
}

impl FromStr for EndPolicy {
	type Err = String;

	fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
		match s.to_lowercase().as_str() {
			"stop" => Ok(EndPolicy::Stop),
			"skip" => Ok(EndPolicy::Skip),
			_ => Err(format!("Invalid end policy: {s}. Valid options: stop, skip")),
		}
	}
}

impl fmt::Display for EndPolicy {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			EndPolicy::Stop => f.write_str("stop"),
			EndPolicy::Skip => f.write_str("skip"),
		}
	}
}

/// Input parameters for a generation run.
///
/// # Responsibilities
/// - Hold the word budget (`nums`), the wrap width and the end policy
/// - Reject out-of-range values at the point they are set, before any corpus is read
///
/// # Invariants
/// - `nums >= 1`
/// - `width >= 1`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GenerationInput {
	/// Maximum number of words generated after the seed words.
	nums: usize,

	/// Maximum line width, in characters, for wrapped output.
	width: usize,

	/// Behavior of the walk on the end-of-text marker.
	pub end_policy: EndPolicy,
}

impl Default for GenerationInput {
	fn default() -> Self {
		Self { nums: DEFAULT_NUMS, width: DEFAULT_WIDTH, end_policy: EndPolicy::default() }
	}
}

impl GenerationInput {
	/// Creates an input with the given word budget and default width and policy.
	///
	/// # Errors
	/// Returns [`Error::Config`] if `nums` is not strictly positive.
	pub fn new(nums: i64) -> Result<Self> {
		let mut input = Self::default();
		input.set_nums(nums)?;
		Ok(input)
	}

	pub fn nums(&self) -> usize {
		self.nums
	}

	pub fn width(&self) -> usize {
		self.width
	}

	/// Sets the number of words to generate after the seed.
	///
	/// # Errors
	/// Returns [`Error::Config`] if the value is zero or negative.
	pub fn set_nums(&mut self, nums: i64) -> Result<()> {
		if nums <= 0 {
			return Err(Error::Config(format!("number of words must be greater than 0, got {nums}")));
		}
		self.nums = usize::try_from(nums)
			.map_err(|_| Error::Config(format!("number of words is too large: {nums}")))?;
		Ok(())
	}

	/// Sets the wrap width.
	///
	/// # Errors
	/// Returns [`Error::Config`] if the width is zero.
	pub fn set_width(&mut self, width: usize) -> Result<()> {
		if width == 0 {
			return Err(Error::Config("line width must be greater than 0".to_owned()));
		}
		self.width = width;
		Ok(())
	}
}
