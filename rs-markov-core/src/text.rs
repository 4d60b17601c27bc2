/// Splits text into tokens on runs of whitespace.
///
/// No other normalization is applied: case and punctuation are preserved.
pub fn tokenize(text: &str) -> Vec<String> {
	text.split_whitespace().map(str::to_owned).collect()
}

/// Wraps text into lines of at most `width` characters, breaking only
/// between words.
///
/// Words are separated by single spaces inside a line. A single word longer
/// than `width` cannot be broken and is placed alone on its own line.
/// Width is counted in `char`s, not bytes.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
	let mut lines = Vec::new();
	let mut line = String::new();
	let mut line_len = 0;

	for word in text.split_whitespace() {
		let word_len = word.chars().count();

		if line_len > 0 && line_len + 1 + word_len > width {
			lines.push(std::mem::take(&mut line));
			line_len = 0;
		}

		if line_len > 0 {
			line.push(' ');
			line_len += 1;
		}
		line.push_str(word);
		line_len += word_len;
	}

	if !line.is_empty() {
		lines.push(line);
	}

	lines
}
