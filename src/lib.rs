//! spellfix
//!
//! Checks words against a word list and suggests every known word a single
//! edit away.

mod dic;
mod dictionary;
mod lookup;
pub mod scan;
mod suggest;
pub mod typo;

pub use dictionary::{Dictionary, InitializeError};
pub use scan::{check_file, check_spelling, CheckError, Misspelling, Verdict};
pub use suggest::{corrections, Edit};
