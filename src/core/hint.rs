//! Bulls-and-cows feedback calculation and representation
//!
//! A hint counts exact matches (right digit, right position, the "A" part)
//! and partial matches (digit present elsewhere, the "B" part). It is shown
//! canonically as `XAYB`, e.g. `1A2B`.

use super::Code;
use crate::error::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// Feedback for a guess against an answer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Hint {
    exact: u8,
    partial: u8,
}

impl Hint {
    /// Create a hint from raw counts
    #[inline]
    #[must_use]
    pub const fn new(exact: u8, partial: u8) -> Self {
        Self { exact, partial }
    }

    /// The all-exact hint for a code of `length` digits
    #[inline]
    #[must_use]
    pub const fn perfect(length: usize) -> Self {
        Self::new(length as u8, 0)
    }

    /// Number of exact matches (A)
    #[inline]
    #[must_use]
    pub const fn exact(self) -> u8 {
        self.exact
    }

    /// Number of partial matches (B)
    #[inline]
    #[must_use]
    pub const fn partial(self) -> u8 {
        self.partial
    }

    /// Check if this hint means the guess was the answer
    #[inline]
    #[must_use]
    pub const fn is_perfect(self, length: usize) -> bool {
        self.exact as usize == length && self.partial == 0
    }

    /// Calculate the hint when `guess` is played against `answer`
    ///
    /// # Algorithm
    /// 1. Count positions where guess and answer agree, remembering those digits
    /// 2. Count guess positions whose digit occurs in the answer and was not
    ///    already matched exactly
    ///
    /// Both codes are distinct-digit, so the second pass is a mask intersection.
    ///
    /// # Panics
    /// Panics if the codes have different lengths. Use [`Hint::try_calculate`]
    /// for untrusted input.
    ///
    /// # Examples
    /// ```
    /// use bulls_cows::core::{Code, Hint};
    ///
    /// let guess = Code::new("4589").unwrap();
    /// let answer = Code::new("5049").unwrap();
    ///
    /// // 9 is in place; 4 and 5 are elsewhere in the answer; 8 is absent
    /// assert_eq!(Hint::calculate(&guess, &answer).to_string(), "1A2B");
    /// ```
    #[must_use]
    pub fn calculate(guess: &Code, answer: &Code) -> Self {
        assert_eq!(
            guess.length(),
            answer.length(),
            "cannot score a {}-digit guess against a {}-digit answer",
            guess.length(),
            answer.length()
        );

        let mut exact = 0u8;
        let mut matched = 0u16;

        for (&g, &a) in guess.digits().iter().zip(answer.digits()) {
            if g == a {
                exact += 1;
                matched |= 1 << g;
            }
        }

        let partial = (guess.mask() & answer.mask() & !matched).count_ones() as u8;

        Self { exact, partial }
    }

    /// Like [`Hint::calculate`] but rejects codes of different lengths
    ///
    /// # Errors
    /// Returns `Error::InvalidCodeLength` if the guess length differs from the
    /// answer length.
    pub fn try_calculate(guess: &Code, answer: &Code) -> Result<Self> {
        if guess.length() != answer.length() {
            return Err(Error::InvalidCodeLength {
                expected: answer.length(),
                actual: guess.length(),
            });
        }
        Ok(Self::calculate(guess, answer))
    }

    /// Check that this hint can occur for codes of `length` digits
    ///
    /// # Errors
    /// Returns `Error::HintOutOfRange` if `exact > length` or
    /// `exact + partial > length`.
    pub fn validate(self, length: usize) -> Result<Self> {
        let exact = usize::from(self.exact);
        let partial = usize::from(self.partial);
        if exact > length || exact + partial > length {
            return Err(Error::HintOutOfRange { hint: self, length });
        }
        Ok(self)
    }
}

/// Check whether `candidate` would have produced `hint` for `guess`
///
/// This is the elimination predicate: a candidate survives a round only if,
/// were it the answer, the guess would have scored exactly the observed hint.
///
/// # Examples
/// ```
/// use bulls_cows::core::{Code, Hint, check_similarity};
///
/// let guess = Code::new("1234").unwrap();
/// let candidate = Code::new("3241").unwrap();
/// assert!(check_similarity(&guess, &candidate, "1A3B".parse().unwrap()));
/// assert!(!check_similarity(&guess, &candidate, Hint::new(0, 4)));
/// ```
///
/// # Panics
/// Panics if `guess` and `candidate` have different lengths.
#[inline]
#[must_use]
pub fn check_similarity(guess: &Code, candidate: &Code, hint: Hint) -> bool {
    Hint::calculate(guess, candidate) == hint
}

impl fmt::Display for Hint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}A{}B", self.exact, self.partial)
    }
}

impl FromStr for Hint {
    type Err = Error;

    /// Parse the canonical `{int}A{int}B` form, ignoring surrounding whitespace
    fn from_str(s: &str) -> Result<Self> {
        let invalid = || Error::InvalidHintFormat(s.to_string());
        let trimmed = s.trim();

        let (exact, rest) = trimmed.split_once('A').ok_or_else(invalid)?;
        let partial = rest.strip_suffix('B').ok_or_else(invalid)?;

        let parse_count = |part: &str| -> Result<u8> {
            if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
                return Err(invalid());
            }
            part.parse::<u8>().map_err(|_| invalid())
        };

        Ok(Self::new(parse_count(exact)?, parse_count(partial)?))
    }
}
