//! Edit-distance engine.
//!
//! Three full-matrix dynamic-programming distances over character slices:
//!
//! - [`levenshtein`] -- insertions, deletions and substitutions
//! - [`osa`] -- optimal string alignment: Levenshtein plus adjacent
//!   transpositions, with no substring edited twice
//! - [`damerau`] -- unrestricted Damerau-Levenshtein, where transpositions
//!   compose freely with other edits
//!
//! Supporting modules:
//!
//! - [`cost`] -- pluggable character-pair cost heuristic
//! - [`matrix`] -- dense distance matrices and their border seeding
//!
//! For unit costs the three distances are ordered:
//! `damerau <= osa <= levenshtein`. Levenshtein and Damerau-Levenshtein are
//! metrics; optimal string alignment does not satisfy the triangle
//! inequality.

pub mod cost;
pub mod damerau;
pub mod levenshtein;
pub mod matrix;
pub mod osa;

use std::fmt;
use std::str::FromStr;

pub use cost::{CharacterCost, UnitCost};
pub use damerau::{DamerauLevenshtein, LastOccurrenceTable};
pub use levenshtein::Levenshtein;
pub use matrix::DistanceMatrix;
pub use osa::OptimalStringAlignment;

/// Error type for distance configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DistanceError {
    #[error("unknown metric {0:?} (expected levenshtein, osa or damerau)")]
    UnknownMetric(String),
}

/// Trait for edit-distance scorers.
///
/// Words are taken as `char` slices so that positions are character
/// positions. `a` is the user-typed word and `b` the dictionary word; the
/// distinction only matters for asymmetric cost heuristics.
pub trait EditDistance {
    /// Distance between `a` and `b`.
    fn distance(&self, a: &[char], b: &[char]) -> usize;

    /// Short identifier of the distance definition.
    fn name(&self) -> &'static str;

    /// Distance between two string slices.
    fn distance_str(&self, a: &str, b: &str) -> usize {
        let a: Vec<char> = a.chars().collect();
        let b: Vec<char> = b.chars().collect();
        self.distance(&a, &b)
    }
}

/// Selector for one of the three distance definitions with unit costs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Metric {
    Levenshtein,
    OptimalStringAlignment,
    #[default]
    DamerauLevenshtein,
}

impl Metric {
    pub const ALL: [Metric; 3] = [
        Metric::Levenshtein,
        Metric::OptimalStringAlignment,
        Metric::DamerauLevenshtein,
    ];
}

impl EditDistance for Metric {
    fn distance(&self, a: &[char], b: &[char]) -> usize {
        match self {
            Metric::Levenshtein => Levenshtein::new().distance(a, b),
            Metric::OptimalStringAlignment => OptimalStringAlignment::new().distance(a, b),
            Metric::DamerauLevenshtein => DamerauLevenshtein::new().distance(a, b),
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Metric::Levenshtein => "levenshtein",
            Metric::OptimalStringAlignment => "osa",
            Metric::DamerauLevenshtein => "damerau",
        }
    }
}

impl FromStr for Metric {
    type Err = DistanceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "levenshtein" | "lev" => Ok(Metric::Levenshtein),
            "osa" | "optimal-string-alignment" => Ok(Metric::OptimalStringAlignment),
            "damerau" | "damerau-levenshtein" | "dl" => Ok(Metric::DamerauLevenshtein),
            _ => Err(DistanceError::UnknownMetric(s.to_string())),
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Levenshtein distance with unit costs.
pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    Levenshtein::new().distance_str(a, b)
}

/// Optimal string alignment distance with unit costs.
pub fn osa_distance(a: &str, b: &str) -> usize {
    OptimalStringAlignment::new().distance_str(a, b)
}

/// Unrestricted Damerau-Levenshtein distance with unit costs.
pub fn damerau_levenshtein_distance(a: &str, b: &str) -> usize {
    DamerauLevenshtein::new().distance_str(a, b)
}
