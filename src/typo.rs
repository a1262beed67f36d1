//! Synthetic typos, to build misspelled inputs from known-good words
//!
//! The random source is always passed in, seed it to get reproducible typos.

use rand::Rng;
use std::fmt;

/// Keys commonly hit instead of the intended one
const SIMILAR_KEYS: [char; 8] = ['e', 'i', 'r', 't', 'o', 'p', 'a', 's'];

/// Ways a word gets corrupted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Corruption {
	/// Insert a random letter anywhere
	Insert,
	/// Drop one character
	Delete,
	/// Swap two adjacent characters
	Swap,
	/// Replace a character by a commonly mistyped key
	SimilarKey,
	/// Swap a character with one of its neighbours, like a typing slip
	TypingSlip,
}

impl Corruption {
	/// Every corruption, picked uniformly by [`misspell`]
	pub const ALL: [Self; 5] = [
		Self::Insert,
		Self::Delete,
		Self::Swap,
		Self::SimilarKey,
		Self::TypingSlip,
	];

	/// Picks a corruption uniformly
	pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
		Self::ALL[rng.random_range(0..Self::ALL.len())]
	}

	/// Corrupts `word`, words too short for this corruption are returned unchanged
	pub fn apply<R: Rng + ?Sized>(self, word: &str, rng: &mut R) -> String {
		let mut chars = word.chars().collect::<Vec<_>>();
		let len = chars.len();

		match self {
			Self::Insert => {
				let position = rng.random_range(0..=len);
				let letter = char::from(b'a' + rng.random_range(0..26u8));
				chars.insert(position, letter);
			}
			Self::Delete => {
				if len < 2 {
					return word.to_owned();
				}
				chars.remove(rng.random_range(0..len));
			}
			Self::Swap => {
				if len < 2 {
					return word.to_owned();
				}
				let position = rng.random_range(0..len - 1);
				chars.swap(position, position + 1);
			}
			Self::SimilarKey => {
				if len == 0 {
					return word.to_owned();
				}
				let position = rng.random_range(0..len);
				chars[position] = SIMILAR_KEYS[rng.random_range(0..SIMILAR_KEYS.len())];
			}
			Self::TypingSlip => {
				if len < 2 {
					return word.to_owned();
				}
				let position = rng.random_range(0..len - 1);
				// the last pair is never slipped forward
				if rng.random_bool(0.5) && position > 0 {
					chars.swap(position - 1, position);
				} else if position + 2 < len {
					chars.swap(position, position + 1);
				}
			}
		}

		chars.into_iter().collect()
	}
}

impl fmt::Display for Corruption {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let name = match self {
			Self::Insert => "insert",
			Self::Delete => "delete",
			Self::Swap => "swap",
			Self::SimilarKey => "similar key",
			Self::TypingSlip => "typing slip",
		};
		f.write_str(name)
	}
}

/// Corrupts `word` with a random [`Corruption`]
pub fn misspell<R: Rng + ?Sized>(word: &str, rng: &mut R) -> String {
	let corruption = Corruption::random(rng);
	let misspelled = corruption.apply(word, rng);
	log::trace!("{corruption} turned `{word}` into `{misspelled}`");
	misspelled
}
