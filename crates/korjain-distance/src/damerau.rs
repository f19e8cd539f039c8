// Unrestricted (true) Damerau-Levenshtein distance.
//
// The matrix is shifted by two rows and two columns relative to the
// Levenshtein matrix: row `i` (2..=m+1) stands for `user_word[i - 2]` and
// column `j` (2..=n+1) for `dictionary_word[j - 2]`. Row 1 and column 1
// hold the empty-prefix costs, row 0 and column 0 the `m + n` sentinel.
//
// Each cell may reach back to the cell just before the last earlier pair
// of matching characters, which lets a transposition combine with any
// number of insertions and deletions between the swapped characters.

use hashbrown::HashMap;

use crate::EditDistance;
use crate::cost::{CharacterCost, UnitCost};
use crate::matrix::DistanceMatrix;

/// Row or column value meaning "no earlier match".
const NONE_SEEN: usize = 0;

/// Index of the sentinel row and column.
const SENTINEL: usize = 0;

/// Map a last-occurrence row or column to the index just before it.
///
/// `NONE_SEEN` maps onto the sentinel border, whose `m + n` cells keep the
/// transposition step from ever winning.
#[inline]
fn index_before(last_occurrence: usize) -> usize {
    if last_occurrence == NONE_SEEN {
        SENTINEL
    } else {
        last_occurrence - 1
    }
}

/// For each character, the last (shifted) row of the user word in which it
/// occurred.
///
/// Characters never seen report [`NONE_SEEN`], so the table works for any
/// character, not only those of a fixed alphabet. Lives for one distance
/// computation.
#[derive(Debug, Clone, Default)]
pub struct LastOccurrenceTable {
    rows: HashMap<char, usize>,
}

impl LastOccurrenceTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last row in which `c` occurred, or 0 if it has not occurred yet.
    pub fn last_row(&self, c: char) -> usize {
        self.rows.get(&c).copied().unwrap_or(NONE_SEEN)
    }

    /// Record that row `row` was filled for a user-word character `c`.
    pub fn record(&mut self, c: char, row: usize) {
        self.rows.insert(c, row);
    }
}

/// Unrestricted Damerau-Levenshtein distance.
///
/// Unlike [`OptimalStringAlignment`](crate::OptimalStringAlignment) this is
/// a metric: `dl("ca", "abc") == 2` (transpose, then insert between the
/// swapped characters).
#[derive(Debug, Clone, Copy, Default)]
pub struct DamerauLevenshtein<C = UnitCost> {
    cost: C,
}

impl DamerauLevenshtein {
    pub fn new() -> Self {
        Self { cost: UnitCost }
    }
}

impl<C: CharacterCost> DamerauLevenshtein<C> {
    /// Use a custom substitution cost heuristic.
    ///
    /// Transposition anchors are still found by exact character equality.
    pub fn with_cost(cost: C) -> Self {
        Self { cost }
    }

    /// Fill and return the whole shifted distance matrix.
    pub fn matrix(&self, user_word: &[char], dictionary_word: &[char]) -> DistanceMatrix {
        let m = user_word.len();
        let n = dictionary_word.len();
        let mut matrix = DistanceMatrix::damerau(m, n);
        let mut last_row_for_character = LastOccurrenceTable::new();

        for i in 2..=m + 1 {
            let user_char = user_word[i - 2];
            // Last column in this row where the user character matched.
            let mut last_col_for_character = NONE_SEEN;

            for j in 2..=n + 1 {
                let dictionary_char = dictionary_word[j - 2];
                let last_matching_row = last_row_for_character.last_row(dictionary_char);
                let last_matching_col = last_col_for_character;

                let substitution_cost = self.cost.cost(user_char, dictionary_char);
                if user_char == dictionary_char {
                    last_col_for_character = j;
                }

                debug_assert!(last_matching_row < i && last_matching_col < j);
                let transposition = matrix[(
                    index_before(last_matching_row),
                    index_before(last_matching_col),
                )] + (i - last_matching_row - 1)
                    + (j - last_matching_col - 1)
                    + 1;

                matrix[(i, j)] = (matrix[(i - 1, j - 1)] + substitution_cost)
                    .min(matrix[(i, j - 1)] + 1)
                    .min(matrix[(i - 1, j)] + 1)
                    .min(transposition);
            }

            last_row_for_character.record(user_char, i);
        }
        matrix
    }
}

impl<C: CharacterCost> EditDistance for DamerauLevenshtein<C> {
    fn distance(&self, a: &[char], b: &[char]) -> usize {
        self.matrix(a, b).corner()
    }

    fn name(&self) -> &'static str {
        "damerau"
    }
}
