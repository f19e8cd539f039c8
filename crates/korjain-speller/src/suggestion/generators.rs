// Candidate generators: each applies one class of elementary edit to the
// source word at every position.

use korjain_core::{Alphabet, CoreError};
use log::trace;

use super::candidates::CandidateSet;

// ---------------------------------------------------------------------------
// Trait
// ---------------------------------------------------------------------------

/// Trait for candidate generators.
///
/// A generator writes every word it can reach from `word` with one edit of
/// its kind into `candidates`. Characters used for substitutions and
/// insertions come from `alphabet`.
pub trait CandidateGenerator {
    fn generate(&self, word: &[char], alphabet: &Alphabet, candidates: &mut CandidateSet);
}

// ---------------------------------------------------------------------------
// Deletion
// ---------------------------------------------------------------------------

/// Remove one character at each position.
///
/// At most `len(word)` candidates.
pub struct Deletion;

impl CandidateGenerator for Deletion {
    fn generate(&self, word: &[char], _alphabet: &Alphabet, candidates: &mut CandidateSet) {
        let mut buffer = Vec::with_capacity(word.len());
        for i in 0..word.len() {
            buffer.clear();
            buffer.extend_from_slice(&word[..i]);
            buffer.extend_from_slice(&word[i + 1..]);
            candidates.insert(&buffer);
        }
    }
}

// ---------------------------------------------------------------------------
// Transposition
// ---------------------------------------------------------------------------

/// Swap each pair of adjacent characters.
///
/// At most `len(word) - 1` candidates; swapping two equal characters
/// reproduces the source word and is dropped by the set.
pub struct Transposition;

impl CandidateGenerator for Transposition {
    fn generate(&self, word: &[char], _alphabet: &Alphabet, candidates: &mut CandidateSet) {
        let mut buffer = word.to_vec();
        for i in 0..word.len().saturating_sub(1) {
            buffer.swap(i, i + 1);
            candidates.insert(&buffer);
            buffer.swap(i, i + 1);
        }
    }
}

// ---------------------------------------------------------------------------
// Substitution
// ---------------------------------------------------------------------------

/// Replace each character with every other alphabet character.
///
/// At most `len(word) * (|alphabet| - 1)` candidates.
pub struct Substitution;

impl CandidateGenerator for Substitution {
    fn generate(&self, word: &[char], alphabet: &Alphabet, candidates: &mut CandidateSet) {
        let mut buffer = word.to_vec();
        for i in 0..word.len() {
            let original = word[i];
            for replacement in alphabet.iter() {
                if replacement == original {
                    continue;
                }
                buffer[i] = replacement;
                candidates.insert(&buffer);
            }
            buffer[i] = original;
        }
    }
}

// ---------------------------------------------------------------------------
// Insertion
// ---------------------------------------------------------------------------

/// Insert every alphabet character into each of the `len(word) + 1` gaps.
///
/// At most `(len(word) + 1) * |alphabet|` candidates.
pub struct Insertion;

impl CandidateGenerator for Insertion {
    fn generate(&self, word: &[char], alphabet: &Alphabet, candidates: &mut CandidateSet) {
        let mut buffer = Vec::with_capacity(word.len() + 1);
        for gap in 0..=word.len() {
            for inserted in alphabet.iter() {
                buffer.clear();
                buffer.extend_from_slice(&word[..gap]);
                buffer.push(inserted);
                buffer.extend_from_slice(&word[gap..]);
                candidates.insert(&buffer);
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Union
// ---------------------------------------------------------------------------

/// Every word one deletion, adjacent transposition, substitution or
/// insertion away from `word`.
///
/// Characters of `word` outside `alphabet` are rejected rather than
/// silently skipped: candidates built from them could never be reached by
/// a substitution or insertion and would make the set depend on which
/// characters happened to be foreign.
pub fn one_edit_candidates(word: &[char], alphabet: &Alphabet) -> Result<CandidateSet, CoreError> {
    alphabet.validate(word)?;

    let generators: [&dyn CandidateGenerator; 4] =
        [&Deletion, &Transposition, &Substitution, &Insertion];
    let mut candidates = CandidateSet::for_word(word);
    for generator in generators {
        generator.generate(word, alphabet, &mut candidates);
    }
    trace!(
        "{} one-edit candidates for {:?}",
        candidates.len(),
        candidates.source()
    );
    Ok(candidates)
}

// =========================================================================
// Tests
// =========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use korjain_core::character::chars;

    fn run(generator: &dyn CandidateGenerator, word: &str, alphabet: &Alphabet) -> Vec<String> {
        let word = chars(word);
        let mut candidates = CandidateSet::for_word(&word);
        generator.generate(&word, alphabet, &mut candidates);
        candidates.into_sorted_vec()
    }

    // --- Deletion ---

    #[test]
    fn deletion_removes_each_position() {
        assert_eq!(run(&Deletion, "cat", &Alphabet::default()), vec!["at", "ca", "ct"]);
    }

    #[test]
    fn deletion_collapses_repeated_letters() {
        assert_eq!(run(&Deletion, "book", &Alphabet::default()), vec!["bok", "boo", "ook"]);
    }

    #[test]
    fn deletion_of_single_letter_yields_empty_word() {
        assert_eq!(run(&Deletion, "a", &Alphabet::default()), vec![""]);
    }

    // --- Transposition ---

    #[test]
    fn transposition_swaps_neighbours() {
        assert_eq!(run(&Transposition, "cat", &Alphabet::default()), vec!["act", "cta"]);
    }

    #[test]
    fn transposition_of_equal_letters_is_dropped() {
        assert_eq!(run(&Transposition, "book", &Alphabet::default()), vec!["boko", "obok"]);
    }

    #[test]
    fn transposition_needs_two_letters() {
        assert!(run(&Transposition, "a", &Alphabet::default()).is_empty());
        assert!(run(&Transposition, "", &Alphabet::default()).is_empty());
    }

    // --- Substitution ---

    #[test]
    fn substitution_uses_other_letters_only() {
        let alphabet: Alphabet = "abc".parse().unwrap();
        assert_eq!(run(&Substitution, "ab", &alphabet), vec!["aa", "ac", "bb", "cb"]);
    }

    #[test]
    fn substitution_count_with_default_alphabet() {
        assert_eq!(run(&Substitution, "cat", &Alphabet::default()).len(), 3 * 25);
    }

    // --- Insertion ---

    #[test]
    fn insertion_fills_every_gap() {
        let alphabet: Alphabet = "ab".parse().unwrap();
        assert_eq!(run(&Insertion, "a", &alphabet), vec!["aa", "ab", "ba"]);
    }

    #[test]
    fn insertion_into_empty_word() {
        let alphabet: Alphabet = "xyz".parse().unwrap();
        assert_eq!(run(&Insertion, "", &alphabet), vec!["x", "y", "z"]);
    }

    // --- Union ---

    #[test]
    fn one_edit_candidates_for_cat() {
        let candidates = one_edit_candidates(&chars("cat"), &Alphabet::default()).unwrap();
        for expected in ["at", "act", "cta", "bat", "cats"] {
            assert!(candidates.contains(expected), "missing {expected}");
        }
        assert!(!candidates.contains("cat"));
        assert!(!candidates.contains("bats"));
        assert_eq!(candidates.len(), 181);
    }

    #[test]
    fn one_edit_candidates_for_empty_word() {
        let candidates = one_edit_candidates(&[], &Alphabet::default()).unwrap();
        let words = candidates.into_sorted_vec();
        let expected: Vec<String> = ('a'..='z').map(String::from).collect();
        assert_eq!(words, expected);
    }

    #[test]
    fn one_edit_candidates_collapse_across_kinds() {
        // "aa": deleting either letter gives "a"; substitutions and
        // insertions overlap on several words.
        let candidates = one_edit_candidates(&chars("aa"), &Alphabet::default()).unwrap();
        assert_eq!(candidates.len(), 127);
        assert!(candidates.contains("a"));
        assert!(candidates.contains("aaa"));
        assert!(!candidates.contains("aa"));
    }

    #[test]
    fn one_edit_candidates_rejects_foreign_characters() {
        let err = one_edit_candidates(&chars("caT"), &Alphabet::default()).unwrap_err();
        assert_eq!(
            err,
            CoreError::CharacterNotInAlphabet {
                character: 'T',
                position: 2
            }
        );
    }

    #[test]
    fn one_edit_candidates_with_custom_alphabet() {
        let alphabet: Alphabet = "aik\u{00E4}s".parse().unwrap();
        let candidates = one_edit_candidates(&chars("kasi"), &alphabet).unwrap();
        assert!(candidates.contains("k\u{00E4}si"));
        assert!(candidates.contains("aksi"));
        assert!(!candidates.contains("kazi"));
    }
}
