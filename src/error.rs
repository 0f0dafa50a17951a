//! Error types shared by the solver library

use crate::core::Hint;
use thiserror::Error;

/// Errors produced while building codes, reading hints or running a session.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Requested code length is outside 1..=10.
    #[error("code length must be between 1 and 10, got {0}")]
    UnsupportedLength(usize),

    /// A guess or answer does not have the session's code length.
    #[error("code must be exactly {expected} digits, got {actual}")]
    InvalidCodeLength { expected: usize, actual: usize },

    /// A code contains something other than '0'..='9'.
    #[error("code contains non-digit character {0:?}")]
    NonDigit(char),

    /// A code repeats a digit.
    #[error("code repeats digit {0:?}")]
    RepeatedDigit(char),

    /// A hint string is not of the form `{int}A{int}B`.
    #[error("invalid hint {0:?}: expected the form XAYB, e.g. 1A2B")]
    InvalidHintFormat(String),

    /// A well-formed hint that cannot occur for the session's code length.
    #[error("hint {hint} is impossible for a {length}-digit code")]
    HintOutOfRange { hint: Hint, length: usize },

    /// Elimination removed every candidate: the hints contradict each other.
    #[error("no candidates remain after round {round}: the feedback is inconsistent")]
    InconsistentFeedback { round: usize },

    /// `eliminate` was called without a guess awaiting its hint.
    #[error("no guess is awaiting a hint")]
    NoPendingGuess,

    /// Strategy name not recognized.
    #[error("unknown strategy {0:?} (expected random, entropy or minimax)")]
    UnknownStrategy(String),
}

/// Result type for solver operations.
pub type Result<T> = std::result::Result<T, Error>;
