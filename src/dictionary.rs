//! High level interface to query a word list
//!
//! Entrypoint methods are
//! - [`Dictionary::lookup`]: looks though the dictionary to check if a word is valid
//! - [`Dictionary::suggest`]: finds every word one edit away to provide quick correction

use crate::dic::WordList;
use std::{collections::HashSet, io, path::Path};

/// Set of known-valid lowercase words
///
/// Built once and never mutated afterwards, share it by reference.
#[derive(Debug, Default, Clone)]
pub struct Dictionary {
	/// Lowercased words of the source list
	pub(crate) words: HashSet<String>,
}

/// Ways initializing a [`Dictionary`] could go wrong
#[derive(Debug, thiserror::Error)]
pub enum InitializeError {
	/// Could not parse the word list
	#[error("Could not parse file: {0}")]
	Parser(String),

	/// Could not correctly open given file
	#[error(transparent)]
	Io(#[from] io::Error),
}

/// Constructors
impl Dictionary {
	/// Builds a dictionary from the content of a word list.
	///
	/// Every whitespace-separated token is lowercased and kept as is, duplicates
	/// included.
	///
	/// # Errors
	///
	/// Will error if the provided list cannot be parsed.
	pub fn from_slice(content: &str) -> Result<Self, InitializeError> {
		let list = WordList::new(content)?;
		Ok(Self::from_list(list))
	}

	/// Reads the word list at `path`, see [`Dictionary::from_slice`].
	///
	/// # Errors
	///
	/// Will error if the list is not able to be parsed. It will fail too if
	/// the function failed to read the given path.
	pub fn file(path: &Path) -> Result<Self, InitializeError> {
		let list = WordList::file(path)?;
		let dict = Self::from_list(list);
		log::info!("Dictionary loaded from `{}`. Size: {}", path.display(), dict.len());
		Ok(dict)
	}

	/// Lowercases and deduplicates the words of a parsed list
	fn from_list(list: WordList) -> Self {
		let read = list.words.len();
		let dict = list.words.into_iter().collect::<Self>();
		log::debug!("{read} tokens read, {} unique words", dict.len());
		dict
	}
}

impl Dictionary {
	/// Number of unique words
	#[must_use]
	pub fn len(&self) -> usize {
		self.words.len()
	}

	/// Whether the dictionary has no word at all
	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.words.is_empty()
	}

	/// Iterates over every word, in no particular order
	pub fn iter(&self) -> impl Iterator<Item = &str> {
		self.words.iter().map(String::as_str)
	}
}

impl<S: AsRef<str>> FromIterator<S> for Dictionary {
	fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
		let words = iter
			.into_iter()
			.map(|w| w.as_ref().to_lowercase())
			.filter(|w| !w.is_empty())
			.collect();
		Self { words }
	}
}
