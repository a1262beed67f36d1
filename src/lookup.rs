//! Logic of the [`Dictionary`] to validate a word

use crate::Dictionary;

/// Methods for querying the dictionary
impl Dictionary {
	/// Exact membership, `word` must already be lowercase
	#[must_use]
	pub fn contains(&self, word: &str) -> bool {
		self.words.contains(word)
	}

	/// Whether `word` is a known word, ignoring its case
	#[must_use]
	pub fn lookup(&self, word: &str) -> bool {
		self.contains(&word.to_lowercase())
	}
}

#[cfg(test)]
mod tests {
	use crate::Dictionary;

	#[test]
	fn lookup_ignores_case() {
		let dict = ["nasa", "hello"].into_iter().collect::<Dictionary>();

		assert!(dict.lookup("NASA"));
		assert!(dict.lookup("Hello"));
		assert!(!dict.lookup("world"));
	}

	#[test]
	fn contains_is_exact() {
		let dict = ["hello"].into_iter().collect::<Dictionary>();

		assert!(dict.contains("hello"));
		assert!(!dict.contains("Hello"));
		assert!(!dict.contains(""));
	}
}
