//! Logic of the [`Dictionary`] to suggest words
//!
//! A suggestion is any dictionary entry reachable from the misspelled word by
//! exactly one [`Edit`]. Edits are never chained: each one is applied to the
//! original word.

use crate::Dictionary;
use std::{collections::BTreeSet, fmt, iter, ops::RangeInclusive};

/// Letters tried by substitutions and insertions
const ALPHABET: RangeInclusive<char> = 'a'..='z';

/// Single edit operations used to produce candidates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Edit {
	/// Remove one character
	Deletion,
	/// Replace one character by a letter
	Substitution,
	/// Insert a letter anywhere, end of word included
	Insertion,
	/// Swap two adjacent characters
	Transposition,
	/// Cut the word in two dictionary words, joined with a space
	Split,
}

impl Edit {
	/// Every edit, in the order they are tried
	pub const ALL: [Self; 5] = [
		Self::Deletion,
		Self::Substitution,
		Self::Insertion,
		Self::Transposition,
		Self::Split,
	];

	/// Produce every candidate of this edit, valid or not
	fn candidates(self, word: &[char]) -> Box<dyn Iterator<Item = Candidate> + '_> {
		match self {
			Self::Deletion => Box::new(deletions(word).map(Candidate::Word)),
			Self::Substitution => Box::new(substitutions(word).map(Candidate::Word)),
			Self::Insertion => Box::new(insertions(word).map(Candidate::Word)),
			Self::Transposition => Box::new(transpositions(word).map(Candidate::Word)),
			Self::Split => Box::new(splits(word)),
		}
	}
}

impl fmt::Display for Edit {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let name = match self {
			Self::Deletion => "deletion",
			Self::Substitution => "substitution",
			Self::Insertion => "insertion",
			Self::Transposition => "transposition",
			Self::Split => "split",
		};
		f.write_str(name)
	}
}

/// Edited form of a word, still to be checked against the dictionary
#[derive(Debug, Clone, PartialEq, Eq)]
enum Candidate {
	/// A single word
	Word(String),
	/// Two parts that must both be known words
	Split(String, String),
}

impl Candidate {
	/// Returns the suggestion if the dictionary knows every part of it
	fn validate(self, dict: &Dictionary) -> Option<String> {
		match self {
			Self::Word(word) => dict.contains(&word).then_some(word),
			Self::Split(left, right) => {
				(dict.contains(&left) && dict.contains(&right)).then(|| format!("{left} {right}"))
			}
		}
	}
}

/// Methods for suggesting words based on the dictionary
impl Dictionary {
	/// Every known word one edit away from `word`, sorted and deduplicated.
	///
	/// `word` is lowercased first. An empty set means there is no suggestion,
	/// this is not an error.
	#[must_use]
	pub fn suggest(&self, word: &str) -> BTreeSet<String> {
		let chars = word.to_lowercase().chars().collect::<Vec<_>>();

		let mut suggestions = BTreeSet::new();
		for edit in Edit::ALL {
			for suggestion in edit
				.candidates(&chars)
				.filter_map(|candidate| candidate.validate(self))
			{
				log::trace!("{edit} of `{word}` gives `{suggestion}`");
				suggestions.insert(suggestion);
			}
		}

		log::debug!("{} suggestion(s) for `{word}`", suggestions.len());
		suggestions
	}
}

/// Same as [`Dictionary::suggest`]
#[must_use]
pub fn corrections(word: &str, dictionary: &Dictionary) -> BTreeSet<String> {
	dictionary.suggest(word)
}

fn deletions(word: &[char]) -> impl Iterator<Item = String> + '_ {
	(0..word.len()).map(move |i| word[..i].iter().chain(&word[i + 1..]).collect())
}

// the untouched word is produced too, when the letter is the original one
fn substitutions(word: &[char]) -> impl Iterator<Item = String> + '_ {
	(0..word.len()).flat_map(move |i| {
		ALPHABET.map(move |letter| {
			word[..i]
				.iter()
				.copied()
				.chain(iter::once(letter))
				.chain(word[i + 1..].iter().copied())
				.collect()
		})
	})
}

fn insertions(word: &[char]) -> impl Iterator<Item = String> + '_ {
	(0..=word.len()).flat_map(move |i| {
		ALPHABET.map(move |letter| {
			word[..i]
				.iter()
				.copied()
				.chain(iter::once(letter))
				.chain(word[i..].iter().copied())
				.collect()
		})
	})
}

fn transpositions(word: &[char]) -> impl Iterator<Item = String> + '_ {
	(0..word.len().saturating_sub(1)).map(move |i| {
		let mut swapped = word.to_vec();
		swapped.swap(i, i + 1);
		swapped.into_iter().collect()
	})
}

fn splits(word: &[char]) -> impl Iterator<Item = Candidate> + '_ {
	(1..word.len()).map(move |i| {
		Candidate::Split(word[..i].iter().collect(), word[i..].iter().collect())
	})
}
