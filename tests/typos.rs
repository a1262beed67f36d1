mod utils;

use rand::{rngs::StdRng, SeedableRng};
use spellfix::{
	typo::{misspell, Corruption},
	Misspelling, Verdict,
};

const WORDS: &str = "example word test spell checker";

#[test]
fn one_typo_is_one_edit_away() -> Result<(), Box<dyn std::error::Error>> {
	let dict = utils::dictionary(WORDS)?;

	for seed in 0..100 {
		let mut rng = StdRng::seed_from_u64(seed);
		for word in dict.iter() {
			for corruption in Corruption::ALL {
				let typo = corruption.apply(word, &mut rng);
				let suggestions = dict.suggest(&typo);
				assert!(
					suggestions.contains(word),
					"{corruption} gave `{typo}` from `{word}`, suggestions: {suggestions:?}"
				);
			}
		}
	}
	Ok(())
}

#[test]
fn seeded_typos_are_reproducible() {
	let typos = |seed| {
		let mut rng = StdRng::seed_from_u64(seed);
		WORDS
			.split_whitespace()
			.map(|w| misspell(w, &mut rng))
			.collect::<Vec<_>>()
	};

	assert_eq!(typos(42), typos(42));
}

#[test]
fn unchanged_typo_still_lists_corrections() -> Result<(), Box<dyn std::error::Error>> {
	let dict = utils::dictionary("ab abs")?;
	let mut rng = StdRng::seed_from_u64(0);

	// a slip on the last pair of a two letter word never moves
	let typo = Corruption::TypingSlip.apply("ab", &mut rng);
	assert_eq!(typo, "ab");

	assert_eq!(Misspelling::of(&typo, &dict).to_string(), "ab: [ab, abs]");
	assert_eq!(Verdict::of(&typo, &dict).to_string(), "ab: correct");
	Ok(())
}
