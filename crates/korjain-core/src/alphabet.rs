// Alphabet: the ordered character set used for substitutions and insertions
// during candidate generation.

use std::fmt;
use std::str::FromStr;

use hashbrown::HashSet;

use crate::CoreError;

/// Lowercase Latin letters, the default alphabet.
pub const LATIN_LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";

/// An ordered, duplicate-free, non-empty set of characters.
///
/// Order matters only for the order in which candidates are produced; the
/// resulting candidate sets are unordered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    chars: Vec<char>,
    members: HashSet<char>,
}

impl Alphabet {
    /// Build an alphabet from the given characters, keeping their order.
    pub fn new<I: IntoIterator<Item = char>>(chars: I) -> Result<Self, CoreError> {
        let mut ordered = Vec::new();
        let mut members = HashSet::new();
        for c in chars {
            if !members.insert(c) {
                return Err(CoreError::DuplicateCharacter(c));
            }
            ordered.push(c);
        }
        if ordered.is_empty() {
            return Err(CoreError::EmptyAlphabet);
        }
        Ok(Self {
            chars: ordered,
            members,
        })
    }

    pub fn contains(&self, c: char) -> bool {
        self.members.contains(&c)
    }

    /// The characters in alphabet order.
    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    pub fn iter(&self) -> impl Iterator<Item = char> + '_ {
        self.chars.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Always `false`; construction rejects empty alphabets.
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Check that every character of `word` belongs to the alphabet.
    ///
    /// Reports the first offending character and its character position.
    pub fn validate(&self, word: &[char]) -> Result<(), CoreError> {
        match word.iter().position(|c| !self.contains(*c)) {
            Some(position) => Err(CoreError::CharacterNotInAlphabet {
                character: word[position],
                position,
            }),
            None => Ok(()),
        }
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self {
            chars: LATIN_LOWERCASE.chars().collect(),
            members: LATIN_LOWERCASE.chars().collect(),
        }
    }
}

impl FromStr for Alphabet {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s.chars())
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in &self.chars {
            write!(f, "{c}")?;
        }
        Ok(())
    }
}
