//! Spellfix CLI
//!
//! Historic~ test words: `teh`, `aand`, `speling`

use clap::Parser;
use rand::{rngs::StdRng, SeedableRng};
use spellfix::{typo, Dictionary, Misspelling, Verdict};
use std::{
	io::{stdin, stdout, Write},
	path::PathBuf,
};

/// Words corrupted by `typos` when none are given
const TYPO_WORDS: [&str; 5] = ["example", "word", "test", "spell", "checker"];

/// Command line arguments
#[derive(clap::Parser)]
struct Args {
	/// Word list, whitespace separated
	#[arg(long, short, default_value = "words.txt")]
	dict: PathBuf,

	/// What to do, checks a document by default
	#[command(subcommand)]
	command: Option<Command>,
}

/// Subcommands of the CLI
#[derive(clap::Subcommand)]
enum Command {
	/// Report misspelled words of a document, asks for one if none is given
	Check {
		/// Document to check
		file: Option<PathBuf>,
	},

	/// Suggest corrections for words
	Suggest {
		/// Words to check
		words: Vec<String>,

		/// Keep reading words from stdin
		#[arg(long, short)]
		interactive: bool,
	},

	/// Misspell known-good words, then try to correct them
	Typos {
		/// Words to misspell, a default set otherwise
		words: Vec<String>,

		/// Seed for reproducible typos
		#[arg(long)]
		seed: Option<u64>,
	},
}

/// Entrypoint
fn main() -> Result<(), Box<dyn std::error::Error>> {
	pretty_env_logger::init();

	let args = Args::parse();

	let dict = Dictionary::file(&args.dict)?;

	match args.command.unwrap_or(Command::Check { file: None }) {
		Command::Check { file } => {
			let Some(file) = file.map_or_else(select_file, |f| Ok(Some(f)))? else {
				println!("No file was selected.");
				return Ok(());
			};
			log::info!("Selected file: {}", file.display());

			for misspelling in spellfix::check_file(&file, &dict)? {
				println!("{misspelling}");
			}
		}

		Command::Suggest { words, interactive } => {
			words.iter().for_each(|word| check_and_print(&dict, word));

			if interactive {
				loop {
					print!("suggest word(s) ❯ ");
					stdout().flush()?;

					let mut input = String::new();
					if let 0 = stdin().read_line(&mut input)? {
						break;
					};

					input.split_whitespace().for_each(|word| {
						check_and_print(&dict, word);
					});
				}
			} else if words.is_empty() {
				return Err("no word provided".into());
			}
		}

		Command::Typos { words, seed } => {
			let mut rng = seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);

			let words = if words.is_empty() {
				TYPO_WORDS.iter().map(ToString::to_string).collect()
			} else {
				words
			};

			for word in &words {
				let misspelled = typo::misspell(word, &mut rng);
				println!("Original: {word}, Misspelled: {misspelled}");
				// a corruption can leave the word as is, its corrections are listed anyway
				println!("Corrections for {}", Misspelling::of(&misspelled, &dict));
			}
		}
	}

	Ok(())
}

/// Asks for the document to check, an empty answer means no selection
fn select_file() -> std::io::Result<Option<PathBuf>> {
	print!("select file for input ❯ ");
	stdout().flush()?;

	let mut input = String::new();
	stdin().read_line(&mut input)?;

	let input = input.trim();
	Ok((!input.is_empty()).then(|| PathBuf::from(input)))
}

/// Prints whether `word` is known, or its suggestions
fn check_and_print(dict: &Dictionary, word: &str) {
	let verdict = Verdict::of(word, dict);
	if let Verdict::Correct(_) = verdict {
		log::info!("Word `{word}` was found in the dictionary");
	}
	println!("{verdict}");
}
