// Deduplicated set of candidate words.

use hashbrown::HashSet;
use hashbrown::hash_set;

/// Words reachable from a source word by one elementary edit.
///
/// Membership is exact string equality. The source word itself is never
/// admitted, so edits that happen to reproduce it (for example swapping two
/// equal letters) leave no trace.
#[derive(Debug, Clone)]
pub struct CandidateSet {
    source: String,
    words: HashSet<String>,
}

impl CandidateSet {
    /// An empty set for candidates derived from `source`.
    pub fn for_word(source: &[char]) -> Self {
        Self {
            source: source.iter().collect(),
            words: HashSet::new(),
        }
    }

    /// The word the candidates were derived from.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Add a candidate. Returns `false` for duplicates and for the source
    /// word.
    pub fn insert(&mut self, candidate: &[char]) -> bool {
        let candidate: String = candidate.iter().collect();
        if candidate == self.source {
            return false;
        }
        self.words.insert(candidate)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterate in unspecified order.
    pub fn iter(&self) -> hash_set::Iter<'_, String> {
        self.words.iter()
    }

    /// Keep only the candidates for which `keep` returns `true`.
    pub fn retain<F: FnMut(&str) -> bool>(&mut self, mut keep: F) {
        self.words.retain(|w| keep(w.as_str()));
    }

    /// The candidates in lexicographic order, for deterministic output.
    pub fn into_sorted_vec(self) -> Vec<String> {
        let mut words: Vec<String> = self.words.into_iter().collect();
        words.sort_unstable();
        words
    }
}

impl<'a> IntoIterator for &'a CandidateSet {
    type Item = &'a String;
    type IntoIter = hash_set::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use korjain_core::character::chars;

    #[test]
    fn deduplicates() {
        let mut set = CandidateSet::for_word(&chars("cat"));
        assert!(set.insert(&chars("at")));
        assert!(!set.insert(&chars("at")));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn rejects_source_word() {
        let mut set = CandidateSet::for_word(&chars("book"));
        assert!(!set.insert(&chars("book")));
        assert!(set.is_empty());
        assert_eq!(set.source(), "book");
    }

    #[test]
    fn retain_and_sort() {
        let mut set = CandidateSet::for_word(&chars("x"));
        for w in ["c", "a", "bb", "b"] {
            set.insert(&chars(w));
        }
        set.retain(|w| w.len() == 1);
        assert_eq!(set.into_sorted_vec(), vec!["a", "b", "c"]);
    }
}
