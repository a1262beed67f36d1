//! Parser for plain word lists
//!
//! A word list is any text where words are separated by whitespace. The
//! conventional layout is one word per line, but tabs and spaces are fine too.

use crate::dictionary::InitializeError;
use nom::{
	bytes::complete::{is_not, take_while},
	multi::many0,
	IResult, Parser,
};
use nom_supreme::ParserExt;
use std::{fs::File, io::Read, path::Path};

/// Characters separating two words of the list, ASCII whitespace and the
/// information separators included
const SEPARATORS: &str = " \t\n\x0B\x0C\r\x1C\x1D\x1E\x1F";

/// Words of a list, as they appear in the source
#[derive(Debug, Default)]
pub(crate) struct WordList {
	/// Every token, duplicates included
	pub(crate) words: Vec<String>,
}

impl WordList {
	/// Parses the content of a list
	pub(crate) fn new(content: &str) -> Result<Self, InitializeError> {
		WordListParser.parse(content)
	}

	/// Reads and parses the list at `path`
	pub(crate) fn file(path: &Path) -> Result<Self, InitializeError> {
		let mut file = File::open(path)?;
		let mut buffer = String::new();
		file.read_to_string(&mut buffer)?;
		Self::new(&buffer)
	}
}

/// Splits a list into its tokens
struct WordListParser;

impl WordListParser {
	/// Parses a whole list, trailing separators included
	fn parse(self, i: &str) -> Result<WordList, InitializeError> {
		let parser_err = |e: nom::Err<nom::error::Error<_>>| InitializeError::Parser(e.to_string());

		let (_, words) = many0(Self::parse_word)
			.terminated(separators0)
			.all_consuming()
			.parse(i)
			.map_err(parser_err)?;

		Ok(WordList {
			words: words.into_iter().map(ToOwned::to_owned).collect(),
		})
	}

	/// Parses one word and the separators before it
	fn parse_word(i: &str) -> IResult<&str, &str> {
		separators0.precedes(is_not(SEPARATORS)).parse(i)
	}
}

/// Zero or more separators
fn separators0(i: &str) -> IResult<&str, &str> {
	take_while(|c: char| SEPARATORS.contains(c))(i)
}
