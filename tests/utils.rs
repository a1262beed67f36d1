use spellfix::Dictionary;

#[derive(Debug, thiserror::Error)]
#[error("{0} word(s) got unexpected suggestions")]
struct SuggestionErrors(usize);

pub(crate) fn dictionary(words: &str) -> Result<Dictionary, Box<dyn std::error::Error>> {
	let _ = pretty_env_logger::try_init();
	Ok(Dictionary::from_slice(words)?)
}

/// Checks that every `wrong` word is unknown and gets exactly the expected suggestions
pub(crate) fn test_suggestions(
	words: &str,
	good: &[&str],
	wrong: &[(&str, &[&str])],
) -> Result<(), Box<dyn std::error::Error>> {
	let dict = dictionary(words)?;

	let mut errors = 0;

	errors += good
		.iter()
		.filter(|w| {
			if dict.lookup(w) {
				log::info!("{w} is indeed fine");
				false
			} else {
				log::error!("{w} is supposed to be fine but is wrong");
				true
			}
		})
		.count();

	errors += wrong
		.iter()
		.filter(|(w, expected)| {
			if dict.lookup(w) {
				log::error!("{w} is supposed to be wrong but is fine");
				return true;
			}

			let suggestions = dict.suggest(w);
			if suggestions.iter().eq(expected.iter()) {
				log::info!("{w} suggests {suggestions:?}");
				false
			} else {
				log::error!("{w} suggests {suggestions:?}, expected {expected:?}");
				true
			}
		})
		.count();

	if errors == 0 {
		Ok(())
	} else {
		Err(Box::new(SuggestionErrors(errors)))
	}
}
