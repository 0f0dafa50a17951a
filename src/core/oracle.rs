//! Hint sources
//!
//! A [`Respondent`] answers guesses with hints. [`HintOracle`] is the
//! automatic one: it knows the secret and scores guesses against it.

use super::{Code, Hint};
use crate::error::Result;

/// Anything that can answer a guess with a hint
pub trait Respondent {
    /// Score `guess` against the hidden answer
    ///
    /// # Errors
    /// Implementations reject guesses they cannot score, e.g. a guess of the
    /// wrong length.
    fn respond(&mut self, guess: &Code) -> Result<Hint>;
}

/// Holds the secret code for a session and scores guesses against it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HintOracle {
    secret: Code,
}

impl HintOracle {
    /// Create an oracle that answers for `secret`
    #[must_use]
    pub const fn new(secret: Code) -> Self {
        Self { secret }
    }

    /// The code being guessed
    #[must_use]
    pub const fn secret(&self) -> &Code {
        &self.secret
    }

    /// Hint for `guess` against the secret
    ///
    /// # Errors
    /// Returns `Error::InvalidCodeLength` if the guess length differs from the
    /// secret length.
    ///
    /// # Examples
    /// ```
    /// use bulls_cows::core::{Code, HintOracle};
    ///
    /// let oracle = HintOracle::new(Code::new("5049").unwrap());
    /// let hint = oracle.hint(&Code::new("4589").unwrap()).unwrap();
    /// assert_eq!(hint.to_string(), "1A2B");
    /// ```
    pub fn hint(&self, guess: &Code) -> Result<Hint> {
        Hint::try_calculate(guess, &self.secret)
    }
}

impl Respondent for HintOracle {
    fn respond(&mut self, guess: &Code) -> Result<Hint> {
        self.hint(guess)
    }
}
