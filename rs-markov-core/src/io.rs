use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use crate::text::tokenize;

/// Reads a UTF-8 text file and returns its whitespace-separated tokens.
///
/// - Reads the entire file into memory
/// - Splits on runs of whitespace (space, tab, newline)
/// - Punctuation stays attached to its word
pub(crate) fn read_corpus<P: AsRef<Path>>(filename: P) -> io::Result<Vec<String>> {
	let mut contents = String::new();
	File::open(filename)?.read_to_string(&mut contents)?;
	Ok(tokenize(&contents))
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::io::Write;

	#[test]
	fn reads_tokens_from_file() {
		let mut file = tempfile::NamedTempFile::new().unwrap();
		write!(file, "The cat,\tsat\n\non  the mat.").unwrap();

		let tokens = read_corpus(file.path()).unwrap();
		assert_eq!(tokens, vec!["The", "cat,", "sat", "on", "the", "mat."]);
	}

	#[test]
	fn missing_file_is_not_found() {
		let dir = tempfile::tempdir().unwrap();
		let err = read_corpus(dir.path().join("missing.txt")).unwrap_err();
		assert_eq!(err.kind(), io::ErrorKind::NotFound);
	}

	#[test]
	fn invalid_utf8_is_rejected() {
		let mut file = tempfile::NamedTempFile::new().unwrap();
		file.write_all(&[0x48, 0xff, 0xfe, 0x20]).unwrap();

		let err = read_corpus(file.path()).unwrap_err();
		assert_eq!(err.kind(), io::ErrorKind::InvalidData);
	}
}
