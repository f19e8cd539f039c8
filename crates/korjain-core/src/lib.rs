//! Shared types for the korjain spelling corrector.
//!
//! - [`alphabet`] -- the ordered character set used for candidate generation
//! - [`character`] -- character helpers and free-text tokenizing

pub mod alphabet;
pub mod character;

pub use alphabet::Alphabet;

/// Error type for word and alphabet validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoreError {
    #[error("alphabet must contain at least one character")]
    EmptyAlphabet,
    #[error("character {0:?} appears more than once in the alphabet")]
    DuplicateCharacter(char),
    #[error("character {character:?} at position {position} is not in the alphabet")]
    CharacterNotInAlphabet { character: char, position: usize },
}
