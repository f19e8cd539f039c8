// Dense dynamic-programming matrices and their border seeding.

use std::fmt;
use std::ops::{Index, IndexMut};

/// A dense, row-major matrix of non-negative distances.
///
/// Indexed by `(row, column)`. Rows follow the user word, columns the
/// dictionary word.
#[derive(Clone, PartialEq, Eq)]
pub struct DistanceMatrix {
    rows: usize,
    cols: usize,
    cells: Vec<usize>,
}

impl DistanceMatrix {
    /// A `rows` x `cols` matrix with every cell set to `value`.
    pub fn filled(rows: usize, cols: usize, value: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![value; rows * cols],
        }
    }

    /// The `(m + 1) x (n + 1)` matrix used by Levenshtein and optimal string
    /// alignment.
    ///
    /// Row 0 holds `0..=n` and column 0 holds `0..=m`: the cost of building
    /// a prefix from, or reducing it to, the empty word. Interior cells hold
    /// `m + n` until the fill overwrites them.
    pub fn standard(m: usize, n: usize) -> Self {
        let mut matrix = Self::filled(m + 1, n + 1, m + n);
        for i in 0..=m {
            matrix[(i, 0)] = i;
        }
        for j in 0..=n {
            matrix[(0, j)] = j;
        }
        matrix
    }

    /// The `(m + 2) x (n + 2)` matrix used by unrestricted
    /// Damerau-Levenshtein.
    ///
    /// Every cell starts at `m + n`, which exceeds any real distance. Row 1
    /// and column 1 then hold the prefix costs `0..=n` and `0..=m`, leaving
    /// row 0 and column 0 as a sentinel border that the transposition step
    /// reads when no earlier match exists.
    pub fn damerau(m: usize, n: usize) -> Self {
        let mut matrix = Self::filled(m + 2, n + 2, m + n);
        for i in 1..=m + 1 {
            matrix[(i, 1)] = i - 1;
        }
        for j in 1..=n + 1 {
            matrix[(1, j)] = j - 1;
        }
        matrix
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// The bottom-right cell, i.e. the distance between the full words.
    pub fn corner(&self) -> usize {
        self[(self.rows - 1, self.cols - 1)]
    }

    /// Cells of row `i`.
    pub fn row(&self, i: usize) -> &[usize] {
        &self.cells[i * self.cols..(i + 1) * self.cols]
    }

    /// Cell `(i, j)`, or `None` outside the matrix.
    pub fn get(&self, i: usize, j: usize) -> Option<usize> {
        if i < self.rows && j < self.cols {
            Some(self.cells[i * self.cols + j])
        } else {
            None
        }
    }

    /// Overwrite cell `(i, j)`. Panics outside the matrix.
    pub fn set(&mut self, i: usize, j: usize, value: usize) {
        self[(i, j)] = value;
    }

    #[inline]
    fn offset(&self, (i, j): (usize, usize)) -> usize {
        assert!(
            i < self.rows && j < self.cols,
            "matrix index ({i}, {j}) out of bounds for {}x{} matrix",
            self.rows,
            self.cols
        );
        i * self.cols + j
    }
}

impl Index<(usize, usize)> for DistanceMatrix {
    type Output = usize;

    #[inline]
    fn index(&self, index: (usize, usize)) -> &usize {
        &self.cells[self.offset(index)]
    }
}

impl IndexMut<(usize, usize)> for DistanceMatrix {
    #[inline]
    fn index_mut(&mut self, index: (usize, usize)) -> &mut usize {
        let offset = self.offset(index);
        &mut self.cells[offset]
    }
}

impl fmt::Debug for DistanceMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "DistanceMatrix {}x{}", self.rows, self.cols)?;
        for i in 0..self.rows {
            writeln!(f, "  {:?}", self.row(i))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_and_set() {
        let mut matrix = DistanceMatrix::standard(1, 1);
        assert_eq!(matrix.get(1, 1), Some(2));
        assert_eq!(matrix.get(2, 0), None);
        matrix.set(1, 1, 0);
        assert_eq!(matrix.corner(), 0);
    }

    #[test]
    fn standard_borders() {
        let matrix = DistanceMatrix::standard(3, 4);
        assert_eq!(matrix.rows(), 4);
        assert_eq!(matrix.cols(), 5);
        assert_eq!(matrix.row(0), &[0, 1, 2, 3, 4]);
        for i in 0..=3 {
            assert_eq!(matrix[(i, 0)], i);
        }
        assert_eq!(matrix[(2, 2)], 7);
    }

    #[test]
    fn standard_empty_words() {
        let matrix = DistanceMatrix::standard(0, 0);
        assert_eq!(matrix.rows(), 1);
        assert_eq!(matrix.cols(), 1);
        assert_eq!(matrix.corner(), 0);
        assert_eq!(DistanceMatrix::standard(0, 3).corner(), 3);
        assert_eq!(DistanceMatrix::standard(2, 0).corner(), 2);
    }

    #[test]
    fn damerau_sentinel_border() {
        let matrix = DistanceMatrix::damerau(2, 3);
        assert_eq!(matrix.rows(), 4);
        assert_eq!(matrix.cols(), 5);
        // Row 0 and column 0 are the sentinel border.
        assert_eq!(matrix.row(0), &[5, 5, 5, 5, 5]);
        for i in 0..4 {
            assert_eq!(matrix[(i, 0)], 5);
        }
        // Row 1 and column 1 carry the prefix costs.
        assert_eq!(matrix.row(1), &[5, 0, 1, 2, 3]);
        assert_eq!(matrix[(2, 1)], 1);
        assert_eq!(matrix[(3, 1)], 2);
        assert_eq!(matrix[(3, 4)], 5);
    }

    #[test]
    fn damerau_empty_words() {
        let matrix = DistanceMatrix::damerau(0, 0);
        assert_eq!(matrix.rows(), 2);
        assert_eq!(matrix.corner(), 0);
        assert_eq!(DistanceMatrix::damerau(0, 4).corner(), 4);
        assert_eq!(DistanceMatrix::damerau(3, 0).corner(), 3);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn column_overflow_does_not_wrap_into_next_row() {
        let matrix = DistanceMatrix::standard(2, 2);
        let _ = matrix[(0, 3)];
    }
}
