//! Command-line front end: learns a trigram chain from a text file and prints
//! a wrapped random walk through it.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;

use rs_markov_core::model::chain::Chain;
use rs_markov_core::model::generation_input::{DEFAULT_NUMS, DEFAULT_WIDTH, EndPolicy, GenerationInput};
use rs_markov_core::model::generator::Generator;
use rs_markov_core::text::wrap;
use rs_markov_core::Result;

/// Generate text from a trigram Markov chain learned on a corpus
#[derive(Parser, Debug)]
#[command(name = "rs-markov")]
#[command(version)]
struct Cli {
	/// Path to the .txt file containing paragraphs to learn from
	#[arg(long)]
	path: PathBuf,

	/// Number of words to generate after the two starting words
	#[arg(long, default_value_t = DEFAULT_NUMS as i64, allow_negative_numbers = true)]
	nums: i64,

	/// Maximum line width of the printed text
	#[arg(long, default_value_t = DEFAULT_WIDTH)]
	width: usize,

	/// What to do when the walk reaches the end of the learned text (stop, skip)
	#[arg(long, default_value_t = EndPolicy::Stop)]
	on_end: EndPolicy,

	/// Seed for the random source (drawn from OS entropy when omitted)
	#[arg(long)]
	seed: Option<u64>,
}

impl Cli {
	/// Validates flags into a `GenerationInput`. Performs no I/O.
	fn generation_input(&self) -> Result<GenerationInput> {
		let mut input = GenerationInput::new(self.nums)?;
		input.set_width(self.width)?;
		input.end_policy = self.on_end;
		Ok(input)
	}

	fn rng(&self) -> StdRng {
		match self.seed {
			Some(seed) => StdRng::seed_from_u64(seed),
			None => StdRng::from_os_rng(),
		}
	}
}

/// Runs the whole pipeline and returns the wrapped lines to print.
///
/// Settings are validated before the corpus is opened.
fn run(cli: &Cli) -> Result<Vec<String>> {
	let input = cli.generation_input()?;

	let chain = Chain::from_file(&cli.path)?;
	log::info!("learned {} prefixes from {}", chain.len(), cli.path.display());

	let mut generator = Generator::new(&chain, cli.rng());
	let words = generator.generate(&input)?;
	log::info!("generated {} words", words.len());

	Ok(wrap(&words.join(" "), input.width()))
}

fn main() -> ExitCode {
	env_logger::init();
	let cli = Cli::parse();

	match run(&cli) {
		Ok(lines) => {
			for line in lines {
				println!("{line}");
			}
			ExitCode::SUCCESS
		}
		Err(e) => {
			log::error!("{e}");
			eprintln!("error: {e}");
			ExitCode::FAILURE
		}
	}
}
