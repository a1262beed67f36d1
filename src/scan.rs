//! Spellchecking of whole documents
//!
//! Documents are cut on every run of non ASCII letters, each token is
//! lowercased, and every unknown token is reported once with its suggestions.

use crate::Dictionary;
use regex::Regex;
use std::{
	collections::{BTreeSet, HashSet},
	fmt, fs, io,
	path::Path,
	sync::LazyLock,
};

/// Anything that is not an ASCII letter separates two tokens
static DELIMITER: LazyLock<Regex> =
	LazyLock::new(|| Regex::new("[^a-zA-Z]+").expect("delimiter should be a valid regex"));

/// Informs why a document could not be checked
#[derive(Debug, thiserror::Error)]
pub enum CheckError {
	/// Could not read the document
	#[error(transparent)]
	Io(#[from] io::Error),
}

/// An unknown word of a document with what it could have been
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Misspelling {
	/// Lowercased token as found in the document
	pub word: String,
	/// Sorted corrections, may be empty
	pub suggestions: BTreeSet<String>,
}

impl Misspelling {
	/// Suggestions for `word`, computed even if the dictionary knows it
	#[must_use]
	pub fn of(word: &str, dictionary: &Dictionary) -> Self {
		Self {
			word: word.to_lowercase(),
			suggestions: dictionary.suggest(word),
		}
	}
}

impl fmt::Display for Misspelling {
	/// Must look like
	/// `teh: [tea, the]` or `xyz: (no suggestions)`
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}: ", self.word)?;

		if self.suggestions.is_empty() {
			return write!(f, "(no suggestions)");
		}

		write!(f, "[")?;
		for (i, suggestion) in self.suggestions.iter().enumerate() {
			if i > 0 {
				write!(f, ", ")?;
			}
			write!(f, "{suggestion}")?;
		}
		write!(f, "]")
	}
}

/// Outcome of checking a single word
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
	/// The dictionary knows the lowercased word
	Correct(String),
	/// Unknown word with its suggestions
	Misspelled(Misspelling),
}

impl Verdict {
	/// Checks `word` alone, outside of any document
	#[must_use]
	pub fn of(word: &str, dictionary: &Dictionary) -> Self {
		if dictionary.lookup(word) {
			Self::Correct(word.to_lowercase())
		} else {
			Self::Misspelled(Misspelling::of(word, dictionary))
		}
	}
}

impl fmt::Display for Verdict {
	/// `the: correct`, or the [`Misspelling`] line
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Correct(word) => write!(f, "{word}: correct"),
			Self::Misspelled(misspelling) => write!(f, "{misspelling}"),
		}
	}
}

/// Lowercased tokens of a document, in order
pub fn tokenize(document: &str) -> impl Iterator<Item = String> + '_ {
	DELIMITER
		.split(document)
		.filter(|token| !token.is_empty())
		.map(str::to_lowercase)
}

/// Reports the misspelled words of `document` in order of first occurrence
pub fn check_spelling<'a>(document: &'a str, dictionary: &'a Dictionary) -> Misspellings<'a> {
	Misspellings {
		tokens: Box::new(tokenize(document)),
		dictionary,
		seen: HashSet::new(),
	}
}

/// Reads the document at `path` and collects its misspellings
///
/// # Errors
///
/// Will error if the document cannot be read
pub fn check_file(path: &Path, dictionary: &Dictionary) -> Result<Vec<Misspelling>, CheckError> {
	let document = fs::read_to_string(path)?;
	log::debug!("checking `{}` ({} bytes)", path.display(), document.len());
	Ok(check_spelling(&document, dictionary).collect())
}

/// Iterator over the misspellings of a document, see [`check_spelling`]
pub struct Misspellings<'a> {
	/// Remaining tokens
	tokens: Box<dyn Iterator<Item = String> + 'a>,
	/// Reference words
	dictionary: &'a Dictionary,
	/// Tokens already reported during this pass
	seen: HashSet<String>,
}

impl Iterator for Misspellings<'_> {
	type Item = Misspelling;

	fn next(&mut self) -> Option<Self::Item> {
		loop {
			let word = self.tokens.next()?;

			if self.dictionary.contains(&word) || self.seen.contains(&word) {
				continue;
			}

			log::trace!("`{word}` is not in the dictionary");
			let suggestions = self.dictionary.suggest(&word);
			self.seen.insert(word.clone());

			return Some(Misspelling { word, suggestions });
		}
	}
}
