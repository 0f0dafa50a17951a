//! Code solving command
//!
//! Runs a full session against a secret and returns the solution path.

use crate::config::SessionConfig;
use crate::core::{Code, Hint, HintOracle, Respondent};
use crate::error::{Error, Result};
use crate::solver::{Solver, Strategy};

/// A single round of a session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessStep {
    pub round: usize,
    pub guess: Code,
    pub hint: Hint,
    pub candidates_before: usize,
    pub candidates_after: usize,
}

/// Result of solving one secret
#[derive(Debug, Clone)]
pub struct SolveResult {
    pub secret: Code,
    pub answer: Code,
    pub rounds: usize,
    pub steps: Vec<GuessStep>,
    pub strategy: &'static str,
}

impl SolveResult {
    /// True when the surviving candidate is the secret
    #[must_use]
    pub fn success(&self) -> bool {
        self.answer == self.secret
    }
}

/// Drive `solver` with hints from `respondent` until one candidate remains
///
/// Each round asks the solver for a guess, asks the respondent for its hint
/// and feeds the hint back. Returns the rounds played.
///
/// # Errors
/// Propagates respondent errors and `Error::InconsistentFeedback` when the
/// hints contradict each other.
pub fn play<S: Strategy, R: Respondent>(
    solver: &mut Solver<S>,
    respondent: &mut R,
) -> Result<Vec<GuessStep>> {
    let mut steps = Vec::new();

    while !solver.is_solved() {
        let candidates_before = solver.remaining();
        let guess = solver.next_guess()?;
        let hint = respondent.respond(&guess)?;
        let candidates_after = solver.eliminate(hint)?;

        steps.push(GuessStep {
            round: solver.round(),
            guess,
            hint,
            candidates_before,
            candidates_after,
        });
    }

    Ok(steps)
}

/// Solve `secret` with a fresh session built from `config`
///
/// # Errors
/// Returns `Error::InvalidCodeLength` if the secret does not have the
/// configured length, or any error raised while playing.
pub fn solve_code(config: &SessionConfig, secret: Code) -> Result<SolveResult> {
    solve_session(config, 0, secret)
}

/// Solve `secret` using the solver for session number `session`
pub(crate) fn solve_session(
    config: &SessionConfig,
    session: u64,
    secret: Code,
) -> Result<SolveResult> {
    if secret.length() != config.length {
        return Err(Error::InvalidCodeLength {
            expected: config.length,
            actual: secret.length(),
        });
    }

    let mut solver = config.solver(session)?;
    let mut oracle = HintOracle::new(secret);
    let steps = play(&mut solver, &mut oracle)?;

    let answer = *solver
        .solution()
        .ok_or(Error::InconsistentFeedback { round: solver.round() })?;

    Ok(SolveResult {
        secret,
        answer,
        rounds: solver.round(),
        steps,
        strategy: config.strategy.name(),
    })
}
