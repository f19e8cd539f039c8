// One-edit candidate generation.
//
// Architecture:
//   - `candidates`: the deduplicated candidate set
//   - `generators`: one generator per elementary edit (deletion,
//     transposition, substitution, insertion) and their union

pub mod candidates;
pub mod generators;

pub use candidates::CandidateSet;
pub use generators::{
    CandidateGenerator, Deletion, Insertion, Substitution, Transposition, one_edit_candidates,
};
