//! Spell checking and correction suggestions.
//!
//! - [`speller`] -- the membership oracle ([`Speller`]) and the dictionary
//!   enumerator ([`Dictionary`]), plus the [`WordList`] that provides both
//! - [`suggestion`] -- one-edit candidate generation
//! - [`rank`] -- ordering words by edit distance
//! - [`engine`] -- [`SpellCheckEngine`], which ties the pieces together

pub mod engine;
pub mod rank;
pub mod speller;
pub mod suggestion;

pub use engine::{EngineOptions, Misspelling, SpellCheckEngine, SpellError};
pub use rank::{RankedWord, rank_by_distance};
pub use speller::wordlist::{DictionaryError, WordList};
pub use speller::{Dictionary, Speller};
pub use suggestion::{CandidateSet, one_edit_candidates};
