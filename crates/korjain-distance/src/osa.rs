// Optimal string alignment (restricted Damerau-Levenshtein) distance.

use crate::EditDistance;
use crate::cost::{CharacterCost, UnitCost};
use crate::matrix::DistanceMatrix;

/// Levenshtein distance extended with adjacent transpositions, where no
/// substring is edited more than once.
///
/// This restriction makes the distance violate the triangle inequality:
/// `osa("ca", "ac") + osa("ac", "abc") == 2` while `osa("ca", "abc") == 3`.
#[derive(Debug, Clone, Copy, Default)]
pub struct OptimalStringAlignment<C = UnitCost> {
    cost: C,
}

impl OptimalStringAlignment {
    pub fn new() -> Self {
        Self { cost: UnitCost }
    }
}

impl<C: CharacterCost> OptimalStringAlignment<C> {
    /// Use a custom substitution cost heuristic.
    pub fn with_cost(cost: C) -> Self {
        Self { cost }
    }

    /// Fill and return the whole distance matrix.
    pub fn matrix(&self, user_word: &[char], dictionary_word: &[char]) -> DistanceMatrix {
        let m = user_word.len();
        let n = dictionary_word.len();
        let mut matrix = DistanceMatrix::standard(m, n);

        for i in 1..=m {
            for j in 1..=n {
                let substitution = self.cost.cost(user_word[i - 1], dictionary_word[j - 1]);
                matrix[(i, j)] = (matrix[(i - 1, j)] + 1)
                    .min(matrix[(i, j - 1)] + 1)
                    .min(matrix[(i - 1, j - 1)] + substitution);

                if i > 1
                    && j > 1
                    && user_word[i - 1] == dictionary_word[j - 2]
                    && user_word[i - 2] == dictionary_word[j - 1]
                {
                    matrix[(i, j)] = matrix[(i, j)].min(matrix[(i - 2, j - 2)] + 1);
                }
            }
        }
        matrix
    }
}

impl<C: CharacterCost> EditDistance for OptimalStringAlignment<C> {
    fn distance(&self, a: &[char], b: &[char]) -> usize {
        self.matrix(a, b).corner()
    }

    fn name(&self) -> &'static str {
        "osa"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn osa(a: &str, b: &str) -> usize {
        OptimalStringAlignment::new().distance_str(a, b)
    }

    #[test]
    fn identical_and_empty() {
        assert_eq!(osa("", ""), 0);
        assert_eq!(osa("abc", "abc"), 0);
        assert_eq!(osa("", "abc"), 3);
        assert_eq!(osa("abc", ""), 3);
    }

    #[test]
    fn adjacent_transposition_costs_one() {
        assert_eq!(osa("ca", "ac"), 1);
        assert_eq!(osa("abcdef", "abdcef"), 1);
        assert_eq!(osa("receive", "recieve"), 1);
    }

    #[test]
    fn no_edit_on_a_transposed_pair() {
        // "ca" -> "ac" -> "abc" would need an insertion between the swapped
        // characters, which the restriction forbids.
        assert_eq!(osa("ca", "abc"), 3);
    }

    #[test]
    fn triangle_inequality_does_not_hold() {
        let direct = osa("ca", "abc");
        let via = osa("ca", "ac") + osa("ac", "abc");
        assert!(direct > via);
    }

    #[test]
    fn matches_levenshtein_without_transpositions() {
        assert_eq!(osa("kitten", "sitting"), 3);
        assert_eq!(osa("flaw", "lawn"), 2);
    }
}
