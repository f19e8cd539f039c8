// Character-pair cost heuristics.

/// Cost of aligning character `a` (from the user word) with character `b`
/// (from the dictionary word).
///
/// Implementations must be total and deterministic. They need not be
/// symmetric, but the distances are only symmetric when the cost is.
pub trait CharacterCost {
    fn cost(&self, a: char, b: char) -> usize;
}

/// The default heuristic: 0 for equal characters, 1 otherwise.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UnitCost;

impl CharacterCost for UnitCost {
    #[inline]
    fn cost(&self, a: char, b: char) -> usize {
        if a == b { 0 } else { 1 }
    }
}

impl<F> CharacterCost for F
where
    F: Fn(char, char) -> usize,
{
    #[inline]
    fn cost(&self, a: char, b: char) -> usize {
        self(a, b)
    }
}
