// Ranking words by edit distance.

use korjain_core::character::chars;
use korjain_distance::EditDistance;

/// A word and its distance from the word being corrected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedWord {
    pub word: String,
    pub distance: usize,
}

/// Score every candidate against `word` and sort ascending by distance.
///
/// The sort is stable: candidates at equal distance keep the order in which
/// `candidates` yielded them.
pub fn rank_by_distance<I, S, D>(word: &str, candidates: I, scorer: &D) -> Vec<RankedWord>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
    D: EditDistance + ?Sized,
{
    let word = chars(word);
    let mut buffer: Vec<char> = Vec::new();
    let mut ranked: Vec<RankedWord> = candidates
        .into_iter()
        .map(|candidate| {
            let candidate = candidate.as_ref();
            buffer.clear();
            buffer.extend(candidate.chars());
            RankedWord {
                word: candidate.to_string(),
                distance: scorer.distance(&word, &buffer),
            }
        })
        .collect();
    ranked.sort_by_key(|r| r.distance);
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use korjain_distance::{DamerauLevenshtein, Levenshtein, Metric, OptimalStringAlignment};

    fn words(ranked: &[RankedWord]) -> Vec<&str> {
        ranked.iter().map(|r| r.word.as_str()).collect()
    }

    #[test]
    fn sorts_by_distance() {
        let ranked = rank_by_distance("cat", ["dog", "cats", "cat"], &Levenshtein::new());
        assert_eq!(words(&ranked), vec!["cat", "cats", "dog"]);
        assert_eq!(ranked[0].distance, 0);
        assert_eq!(ranked[1].distance, 1);
        assert_eq!(ranked[2].distance, 3);
    }

    #[test]
    fn ties_keep_input_order() {
        let ranked = rank_by_distance("cat", ["rat", "bat", "hat", "cab"], &Levenshtein::new());
        assert_eq!(words(&ranked), vec!["rat", "bat", "hat", "cab"]);

        let ranked = rank_by_distance("cat", ["hat", "cab", "rat", "bat"], &Levenshtein::new());
        assert_eq!(words(&ranked), vec!["hat", "cab", "rat", "bat"]);
    }

    #[test]
    fn scorer_choice_changes_order() {
        let candidates = ["abc", "xy"];
        let lev = rank_by_distance("ca", candidates, &Levenshtein::new());
        assert_eq!(words(&lev), vec!["xy", "abc"]);
        let osa = rank_by_distance("ca", candidates, &OptimalStringAlignment::new());
        assert_eq!(words(&osa), vec!["xy", "abc"]);
        // Under the unrestricted distance both are at 2; input order wins.
        let dl = rank_by_distance("ca", candidates, &DamerauLevenshtein::new());
        assert_eq!(words(&dl), vec!["abc", "xy"]);
        assert_eq!(dl[0].distance, 2);
        assert_eq!(dl[1].distance, 2);
    }

    #[test]
    fn accepts_trait_objects_and_owned_strings() {
        let scorer: &dyn korjain_distance::EditDistance = &Metric::DamerauLevenshtein;
        let candidates = vec!["the".to_string(), "tea".to_string()];
        let ranked = rank_by_distance("teh", &candidates, scorer);
        assert_eq!(ranked[0], RankedWord { word: "the".to_string(), distance: 1 });
    }

    #[test]
    fn empty_candidates() {
        let ranked = rank_by_distance("cat", Vec::<String>::new(), &Levenshtein::new());
        assert!(ranked.is_empty());
    }
}
