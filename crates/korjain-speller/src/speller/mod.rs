// Spell checking collaborators: the membership oracle and the dictionary
// enumerator.

pub mod wordlist;

use hashbrown::HashSet;

/// Membership oracle: answers whether a word is known.
///
/// The word is passed as a `char` slice, already lowercased by the caller.
/// Implementations are typically backed by a trie or a hash set; the
/// engine treats them as opaque.
pub trait Speller {
    /// Returns `true` if `word` is a known word.
    fn spell(&self, word: &[char]) -> bool;
}

/// Dictionary enumerator: the source of words to rank by distance.
///
/// Iteration order is the tie-break order when ranking, so it should be
/// stable across calls.
pub trait Dictionary {
    fn words(&self) -> Box<dyn Iterator<Item = &str> + '_>;
}

impl Speller for HashSet<String> {
    fn spell(&self, word: &[char]) -> bool {
        let s: String = word.iter().collect();
        self.contains(&s)
    }
}

impl Dictionary for Vec<String> {
    fn words(&self) -> Box<dyn Iterator<Item = &str> + '_> {
        Box::new(self.iter().map(String::as_str))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use korjain_core::character::chars;

    #[test]
    fn hash_set_is_a_speller() {
        let known: HashSet<String> = ["cat", "dog"].iter().map(|s| s.to_string()).collect();
        assert!(known.spell(&chars("cat")));
        assert!(!known.spell(&chars("cta")));
        assert!(!known.spell(&[]));
    }

    #[test]
    fn vec_is_a_dictionary_in_order() {
        let words = vec!["b".to_string(), "a".to_string(), "c".to_string()];
        let listed: Vec<&str> = words.words().collect();
        assert_eq!(listed, vec!["b", "a", "c"]);
    }
}
