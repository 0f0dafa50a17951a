//! Session configuration
//!
//! Collects the knobs the CLI exposes (code length, strategy, seed) and turns
//! them into solvers and secrets.

use crate::core::{CandidateSpace, Code, validate_length};
use crate::error::{Error, Result};
use crate::solver::{Solver, StrategyType};
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Default code length for the classic game
pub const DEFAULT_LENGTH: usize = 4;

/// Mixed into the seed when drawing secrets so they don't mirror the solver's picks
const SECRET_STREAM: u64 = 0x9E37_79B9_7F4A_7C15;

/// Settings shared by every session of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    /// Digits per code (1-10)
    pub length: usize,
    /// Guess selection policy
    pub strategy: StrategyType,
    /// Fixed seed for reproducible runs; OS entropy when `None`
    pub seed: Option<u64>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            length: DEFAULT_LENGTH,
            strategy: StrategyType::Random,
            seed: None,
        }
    }
}

impl SessionConfig {
    /// Build a validated configuration
    ///
    /// # Errors
    /// Returns `Error::UnsupportedLength` for a length outside 1..=10 and
    /// `Error::UnknownStrategy` for an unrecognized strategy name.
    pub fn new(length: usize, strategy: &str, seed: Option<u64>) -> Result<Self> {
        validate_length(length)?;
        Ok(Self {
            length,
            strategy: StrategyType::from_name(strategy)?,
            seed,
        })
    }

    /// Create the solver for session number `session`
    ///
    /// With a fixed seed each session gets its own deterministic stream.
    ///
    /// # Errors
    /// Returns `Error::UnsupportedLength` for an invalid length.
    pub fn solver(&self, session: u64) -> Result<Solver> {
        match self.seed {
            Some(seed) => {
                Solver::with_seed(self.length, self.strategy, seed.wrapping_add(session))
            }
            None => Solver::new(self.length, self.strategy),
        }
    }

    /// Parse a secret or guess for this configuration's code length
    ///
    /// # Errors
    /// Returns `Error::InvalidCodeLength` on a length mismatch, or the digit
    /// errors from [`Code::new`].
    pub fn parse_code(&self, text: &str) -> Result<Code> {
        Code::with_length(text.trim(), self.length)
    }

    /// Draw `count` distinct secrets uniformly, or every code when `count` is `None`
    ///
    /// # Errors
    /// Returns `Error::UnsupportedLength` for an invalid length.
    pub fn secrets(&self, count: Option<usize>) -> Result<Vec<Code>> {
        let space = CandidateSpace::generate(self.length)?;
        let Some(count) = count else {
            return Ok(space.codes().to_vec());
        };

        let mut rng = self.secret_rng();
        let mut secrets: Vec<Code> =
            rand::seq::index::sample(&mut rng, space.len(), count.min(space.len()))
                .into_iter()
                .map(|i| space.codes()[i])
                .collect();
        secrets.sort_unstable();
        Ok(secrets)
    }

    /// Draw a single random secret
    ///
    /// # Errors
    /// Returns `Error::UnsupportedLength` for an invalid length. A valid
    /// length always yields a non-empty space, so that is the only failure.
    pub fn random_secret(&self) -> Result<Code> {
        let space = CandidateSpace::generate(self.length)?;
        space
            .choose(&mut self.secret_rng())
            .copied()
            .ok_or(Error::UnsupportedLength(self.length))
    }

    fn secret_rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed ^ SECRET_STREAM),
            None => StdRng::from_os_rng(),
        }
    }
}
