// SpellCheckEngine: top-level integration point for spell checking and
// correction.
//
// Design notes:
// - The membership oracle and the dictionary enumerator are borrowed trait
//   objects supplied by the caller. A trie, a hash set or a word file can be
//   plugged in without the engine knowing which.
// - Everything configurable (alphabet, ranking metric, result limit) lives
//   in `EngineOptions`.

use korjain_core::character::{chars, split_words};
use korjain_core::{Alphabet, CoreError};
use korjain_distance::{EditDistance, Metric};
use log::debug;

use crate::rank::{RankedWord, rank_by_distance};
use crate::speller::{Dictionary, Speller};
use crate::suggestion::{CandidateSet, one_edit_candidates};

/// Error type for engine operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SpellError {
    #[error("invalid word: {0}")]
    InvalidWord(#[from] CoreError),
}

/// Engine configuration.
#[derive(Debug, Clone)]
pub struct EngineOptions {
    /// Characters used for substitutions and insertions.
    pub alphabet: Alphabet,
    /// Metric used by [`SpellCheckEngine::closest`].
    pub metric: Metric,
    /// Maximum number of words returned by [`SpellCheckEngine::closest`].
    pub max_suggestions: usize,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            alphabet: Alphabet::default(),
            metric: Metric::DamerauLevenshtein,
            max_suggestions: 5,
        }
    }
}

/// An unknown word found by [`SpellCheckEngine::check_text`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Misspelling {
    /// The word as it appeared after lowercasing and edge trimming.
    pub word: String,
    /// Index of the word among the whitespace-separated tokens.
    pub position: usize,
    /// Known words one edit away, sorted.
    pub suggestions: Vec<String>,
}

/// Spell checker over an injected membership oracle and dictionary.
pub struct SpellCheckEngine<'a> {
    speller: &'a dyn Speller,
    dictionary: &'a dyn Dictionary,
    options: EngineOptions,
}

impl<'a> SpellCheckEngine<'a> {
    /// Create an engine with default options.
    pub fn new(speller: &'a dyn Speller, dictionary: &'a dyn Dictionary) -> Self {
        Self::with_options(speller, dictionary, EngineOptions::default())
    }

    pub fn with_options(
        speller: &'a dyn Speller,
        dictionary: &'a dyn Dictionary,
        options: EngineOptions,
    ) -> Self {
        Self {
            speller,
            dictionary,
            options,
        }
    }

    pub fn options(&self) -> &EngineOptions {
        &self.options
    }

    pub fn set_alphabet(&mut self, alphabet: Alphabet) {
        self.options.alphabet = alphabet;
    }

    pub fn set_metric(&mut self, metric: Metric) {
        self.options.metric = metric;
    }

    pub fn set_max_suggestions(&mut self, max_suggestions: usize) {
        self.options.max_suggestions = max_suggestions;
    }

    /// Returns `true` if the oracle knows `word`.
    pub fn is_known(&self, word: &str) -> bool {
        self.speller.spell(&chars(word))
    }

    /// Known words exactly one edit away from `word`.
    ///
    /// An empty set means no one-edit correction exists. Fails if `word`
    /// contains characters outside the configured alphabet.
    pub fn suggest(&self, word: &str) -> Result<CandidateSet, SpellError> {
        let mut candidates = one_edit_candidates(&chars(word), &self.options.alphabet)?;
        let generated = candidates.len();

        let mut buffer: Vec<char> = Vec::new();
        candidates.retain(|candidate| {
            buffer.clear();
            buffer.extend(candidate.chars());
            self.speller.spell(&buffer)
        });
        debug!(
            "suggest {word:?}: {} of {generated} candidates are known",
            candidates.len()
        );
        Ok(candidates)
    }

    /// Score `candidates` against `word` and sort them ascending, keeping
    /// the candidates' order among equal distances.
    pub fn rank_by_distance<I, S, D>(&self, word: &str, candidates: I, scorer: &D) -> Vec<RankedWord>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
        D: EditDistance + ?Sized,
    {
        rank_by_distance(word, candidates, scorer)
    }

    /// The dictionary words closest to `word` under the configured metric,
    /// at most `max_suggestions` of them.
    pub fn closest(&self, word: &str) -> Vec<RankedWord> {
        let metric = self.options.metric;
        let mut ranked = rank_by_distance(word, self.dictionary.words(), &metric);
        ranked.truncate(self.options.max_suggestions);
        debug!("closest {word:?} under {metric}: {} words", ranked.len());
        ranked
    }

    /// Check free text and report every unknown word with its one-edit
    /// suggestions.
    ///
    /// Text is lowercased and split on whitespace. Characters outside the
    /// alphabet are trimmed from both ends of each token (so trailing
    /// punctuation does not count against a word); tokens that still
    /// contain such characters are reported without suggestions.
    pub fn check_text(&self, text: &str) -> Vec<Misspelling> {
        let alphabet = &self.options.alphabet;
        let mut misspellings = Vec::new();

        for (position, token) in split_words(text).iter().enumerate() {
            let word = token.trim_matches(|c: char| !alphabet.contains(c));
            if word.is_empty() || self.is_known(word) {
                continue;
            }
            let suggestions = match self.suggest(word) {
                Ok(candidates) => candidates.into_sorted_vec(),
                Err(e) => {
                    debug!("no suggestions for {word:?}: {e}");
                    Vec::new()
                }
            };
            misspellings.push(Misspelling {
                word: word.to_string(),
                position,
                suggestions,
            });
        }
        misspellings
    }
}
