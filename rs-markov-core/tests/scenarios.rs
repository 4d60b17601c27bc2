use std::collections::HashMap;
use std::io::Write;

use rand::SeedableRng;
use rand::rngs::StdRng;

use rs_markov_core::Error;
use rs_markov_core::model::chain::Chain;
use rs_markov_core::model::continuations::Continuation;
use rs_markov_core::model::generation_input::{EndPolicy, GenerationInput};
use rs_markov_core::model::generator::Generator;
use rs_markov_core::model::prefix::Prefix;
use rs_markov_core::text::{tokenize, wrap};

fn word(w: &str) -> Option<String> {
	Some(w.to_owned())
}

fn continuations(chain: &Chain, prefix: &Prefix) -> Vec<Continuation> {
	chain.get(prefix).map(|c| c.iter().cloned().collect()).unwrap_or_default()
}

#[test]
fn hello_world_chain() {
	let chain = Chain::build(&tokenize("Hello world Hello there"));
	let w = |s: &str| Continuation::Word(s.to_owned());

	assert_eq!(chain.len(), 6);
	assert_eq!(continuations(&chain, &Prefix::start()), vec![w("Hello")]);
	assert_eq!(continuations(&chain, &Prefix::new(None, word("Hello"))), vec![w("world")]);
	assert_eq!(continuations(&chain, &Prefix::words("Hello", "world")), vec![w("Hello")]);
	assert_eq!(continuations(&chain, &Prefix::words("world", "Hello")), vec![w("there")]);
	assert_eq!(continuations(&chain, &Prefix::words("Hello", "there")), vec![Continuation::End]);
	assert_eq!(continuations(&chain, &Prefix::new(word("there"), None)), vec![Continuation::End]);
}

#[test]
fn every_window_lists_its_followers() {
	let tokens = tokenize(
		"It was the best of times, it was the worst of times, it was the age of wisdom, \
		 it was the age of foolishness, it was the epoch of belief",
	);
	let chain = Chain::build(&tokens);

	let mut expected: HashMap<Prefix, Vec<String>> = HashMap::new();
	for (i, token) in tokens.iter().enumerate() {
		expected.entry(Prefix::window_before(&tokens, i)).or_default().push(token.clone());
	}

	for (prefix, followers) in expected {
		let mut observed: Vec<String> = chain
			.get(&prefix)
			.unwrap()
			.iter()
			.filter_map(|c| c.as_word().map(str::to_owned))
			.collect();
		let mut followers = followers;
		observed.sort();
		followers.sort();
		assert_eq!(observed, followers, "window {prefix:?}");
	}
}

#[test]
fn building_twice_is_identical() {
	let tokens = tokenize("Sing, O goddess, the anger of Achilles son of Peleus, that brought countless ills");
	assert_eq!(Chain::build(&tokens), Chain::build(&tokens));
	assert_eq!(Chain::build_parallel(&tokens), Chain::build(&tokens));
}

#[test]
fn never_more_than_nums_words() {
	let chain = Chain::build(&tokenize(
		"The rain in Spain falls. The rain in Spain stays. In Spain the rain falls mainly. The plain.",
	));
	for seed in 0..20 {
		for nums in [1, 2, 5, 30] {
			for end_policy in [EndPolicy::Stop, EndPolicy::Skip] {
				let mut input = GenerationInput::new(nums).unwrap();
				input.end_policy = end_policy;
				let mut generator = Generator::new(&chain, StdRng::seed_from_u64(seed));
				let start = generator.choose_start().unwrap();
				let seeded = start.present_words().count();
				let words = generator.walk(&start, &input);
				assert!(words.len() <= seeded + nums as usize);
				assert!(words.iter().all(|w| !w.is_empty()));
			}
		}
	}
}

#[test]
fn lower_case_corpus_cannot_start() {
	let chain = Chain::build(&tokenize("no capital letters appear anywhere in here"));
	let mut generator = Generator::new(&chain, StdRng::seed_from_u64(11));
	assert!(matches!(generator.generate(&GenerationInput::default()), Err(Error::NoStartPrefix)));
}

#[test]
fn zero_nums_is_a_config_error() {
	assert!(matches!(GenerationInput::new(0), Err(Error::Config(_))));
}

#[test]
fn single_word_corpus() {
	let chain = Chain::build(&tokenize("Alone"));
	for end_policy in [EndPolicy::Stop, EndPolicy::Skip] {
		let mut input = GenerationInput::new(5).unwrap();
		input.end_policy = end_policy;
		let mut generator = Generator::new(&chain, StdRng::seed_from_u64(8));

		assert_eq!(generator.choose_start().unwrap(), Prefix::new(word("Alone"), None));
		let words = generator.generate(&input).unwrap();
		assert!(words.len() <= 3);
		assert_eq!(words, vec!["Alone"]);
	}
}

#[test]
fn long_output_wraps_at_ninety() {
	let text = "Generated words keep flowing across the page until the line is too long to \
		fit in a single row of the terminal, at which point wrapping must kick in cleanly.";
	assert!(text.len() > 90);

	let lines = wrap(text, GenerationInput::default().width());
	assert!(lines.len() > 1);
	assert!(lines.iter().all(|line| line.chars().count() <= 90));
	assert_eq!(lines.join(" "), tokenize(text).join(" "));
}

#[test]
fn chain_from_file() {
	let mut file = tempfile::NamedTempFile::new().unwrap();
	writeln!(file, "Hello world\nHello\tthere").unwrap();

	let chain = Chain::from_file(file.path()).unwrap();
	assert_eq!(chain, Chain::build(&tokenize("Hello world Hello there")));
}

#[test]
fn missing_file_surfaces_io_error() {
	let dir = tempfile::tempdir().unwrap();
	let err = Chain::from_file(dir.path().join("nope.txt")).unwrap_err();
	match err {
		Error::Io(e) => assert_eq!(e.kind(), std::io::ErrorKind::NotFound),
		other => panic!("unexpected error: {other}"),
	}
}
