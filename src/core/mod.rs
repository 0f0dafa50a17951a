//! Core domain types for the code-breaking game
//!
//! Codes, hints, the candidate space and the hint oracle. Everything here is
//! a pure in-memory computation with no I/O.

mod candidates;
mod code;
mod hint;
mod oracle;

pub use candidates::{CandidateSpace, generate_candidates, permutation_count};
pub use code::{Code, MAX_LENGTH, validate_length};
pub use hint::{Hint, check_similarity};
pub use oracle::{HintOracle, Respondent};
