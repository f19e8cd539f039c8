// Classic Levenshtein distance: insertions, deletions, substitutions.

use crate::EditDistance;
use crate::cost::{CharacterCost, UnitCost};
use crate::matrix::DistanceMatrix;

/// Levenshtein distance computed by a full matrix fill.
///
/// `matrix[i][j]` is the cost of turning the first `i` characters of the
/// user word into the first `j` characters of the dictionary word.
#[derive(Debug, Clone, Copy, Default)]
pub struct Levenshtein<C = UnitCost> {
    cost: C,
}

impl Levenshtein {
    pub fn new() -> Self {
        Self { cost: UnitCost }
    }
}

impl<C: CharacterCost> Levenshtein<C> {
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
            }
        }
        matrix
    }
}

impl<C: CharacterCost> EditDistance for Levenshtein<C> {
    fn distance(&self, a: &[char], b: &[char]) -> usize {
        self.matrix(a, b).corner()
    }

    fn name(&self) -> &'static str {
        "levenshtein"
    }
}
