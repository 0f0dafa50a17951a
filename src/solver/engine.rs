//! Main solver session

use super::strategy::{Strategy, StrategyType};
use crate::core::{CandidateSpace, Code, Hint};
use crate::error::{Error, Result};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info, warn};

/// Where a session stands between calls
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolverState {
    /// No guess made yet, full candidate space
    Ready,
    /// A guess was handed out and its hint has not been applied
    AwaitingHint,
    /// Hints applied, more than one candidate left
    Guessing,
    /// Exactly one candidate left
    Solved,
    /// Inconsistent feedback emptied the candidate space
    Exhausted,
}

/// Code-breaking session
///
/// Owns the candidate space, the round counter and the guess awaiting its
/// hint. Drive it with [`Solver::next_guess`] and [`Solver::eliminate`]
/// until [`Solver::solution`] returns the answer.
///
/// # Examples
/// ```
/// use bulls_cows::core::{Code, HintOracle};
/// use bulls_cows::solver::{Solver, StrategyType};
///
/// let oracle = HintOracle::new(Code::new("5049").unwrap());
/// let mut solver = Solver::with_seed(4, StrategyType::Random, 7).unwrap();
///
/// while !solver.is_solved() {
///     let guess = solver.next_guess().unwrap();
///     let hint = oracle.hint(&guess).unwrap();
///     solver.eliminate(hint).unwrap();
/// }
/// assert_eq!(solver.solution().unwrap().to_string(), "5049");
/// ```
#[derive(Debug)]
pub struct Solver<S: Strategy = StrategyType> {
    strategy: S,
    candidates: CandidateSpace,
    round: usize,
    pending_guess: Option<Code>,
    rng: StdRng,
}

impl<S: Strategy> Solver<S> {
    /// Create a solver for `length`-digit codes seeded from the OS
    ///
    /// # Errors
    /// Returns `Error::UnsupportedLength` unless `1 <= length <= 10`.
    pub fn new(length: usize, strategy: S) -> Result<Self> {
        Self::with_rng(length, strategy, StdRng::from_os_rng())
    }

    /// Create a solver with a fixed RNG seed for reproducible runs
    ///
    /// # Errors
    /// Returns `Error::UnsupportedLength` unless `1 <= length <= 10`.
    pub fn with_seed(length: usize, strategy: S, seed: u64) -> Result<Self> {
        Self::with_rng(length, strategy, StdRng::seed_from_u64(seed))
    }

    fn with_rng(length: usize, strategy: S, rng: StdRng) -> Result<Self> {
        let candidates = CandidateSpace::generate(length)?;
        debug!(length, candidates = candidates.len(), "candidate space generated");

        Ok(Self {
            strategy,
            candidates,
            round: 0,
            pending_guess: None,
            rng,
        })
    }

    /// Pick the next guess and start a new round
    ///
    /// The guess stays pending until [`Solver::eliminate`] receives its hint.
    /// Asking again before that replaces the pending guess and counts another
    /// round.
    ///
    /// # Errors
    /// Returns `Error::InconsistentFeedback` once the candidate space is empty.
    pub fn next_guess(&mut self) -> Result<Code> {
        let guess = *self
            .strategy
            .select_guess(self.candidates.codes(), &mut self.rng)
            .ok_or(Error::InconsistentFeedback { round: self.round })?;

        self.round += 1;
        self.pending_guess = Some(guess);
        debug!(
            round = self.round,
            %guess,
            remaining = self.candidates.len(),
            "guess selected"
        );

        Ok(guess)
    }

    /// Apply the hint for the pending guess
    ///
    /// Keeps only candidates that would have produced `hint`, and returns how
    /// many remain.
    ///
    /// # Errors
    /// - `Error::NoPendingGuess` if no guess is awaiting a hint
    /// - `Error::HintOutOfRange` if the hint cannot occur for this code length
    /// - `Error::InconsistentFeedback` if no candidate survives; the session
    ///   cannot continue after this
    pub fn eliminate(&mut self, hint: Hint) -> Result<usize> {
        let length = self.candidates.code_length();
        hint.validate(length)?;
        let guess = self.pending_guess.take().ok_or(Error::NoPendingGuess)?;

        let removed = self.candidates.retain_consistent(&guess, hint);
        let remaining = self.candidates.len();
        debug!(round = self.round, %guess, %hint, removed, remaining, "candidates filtered");

        match remaining {
            0 => {
                warn!(round = self.round, %guess, %hint, "feedback eliminated every candidate");
                Err(Error::InconsistentFeedback { round: self.round })
            }
            1 => {
                info!(rounds = self.round, answer = %self.candidates.codes()[0], "solved");
                Ok(remaining)
            }
            _ => Ok(remaining),
        }
    }

    /// Current position in the guess/hint cycle
    #[must_use]
    pub fn state(&self) -> SolverState {
        if self.candidates.is_empty() {
            SolverState::Exhausted
        } else if self.pending_guess.is_some() {
            SolverState::AwaitingHint
        } else if self.candidates.len() == 1 {
            SolverState::Solved
        } else if self.round == 0 {
            SolverState::Ready
        } else {
            SolverState::Guessing
        }
    }

    /// True once exactly one candidate remains
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.candidates.len() == 1
    }

    /// The answer, once the session is solved
    #[must_use]
    pub fn solution(&self) -> Option<&Code> {
        self.candidates.single()
    }

    /// Number of guesses handed out so far
    #[must_use]
    pub const fn round(&self) -> usize {
        self.round
    }

    /// The guess awaiting its hint, if any
    #[must_use]
    pub const fn pending_guess(&self) -> Option<&Code> {
        self.pending_guess.as_ref()
    }

    /// Candidates still consistent with every hint, in ascending order
    #[must_use]
    pub const fn candidates(&self) -> &CandidateSpace {
        &self.candidates
    }

    /// Number of candidates still consistent with every hint
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.candidates.len()
    }

    /// Code length for this session
    #[must_use]
    pub const fn code_length(&self) -> usize {
        self.candidates.code_length()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::HintOracle;
    use std::collections::HashSet;

    fn oracle(secret: &str) -> HintOracle {
        HintOracle::new(Code::new(secret).unwrap())
    }

    #[test]
    fn new_solver_is_ready() {
        let solver = Solver::with_seed(4, StrategyType::Random, 1).unwrap();

        assert_eq!(solver.state(), SolverState::Ready);
        assert_eq!(solver.round(), 0);
        assert_eq!(solver.remaining(), 5040);
        assert!(solver.pending_guess().is_none());
    }

    #[test]
    fn unsupported_length_rejected() {
        assert!(matches!(
            Solver::with_seed(0, StrategyType::Random, 1),
            Err(Error::UnsupportedLength(0))
        ));
        assert!(matches!(
            Solver::new(11, StrategyType::Random),
            Err(Error::UnsupportedLength(11))
        ));
    }

    #[test]
    fn next_guess_increments_round() {
        let mut solver = Solver::with_seed(4, StrategyType::Random, 2).unwrap();

        let guess = solver.next_guess().unwrap();

        assert_eq!(solver.round(), 1);
        assert_eq!(solver.pending_guess(), Some(&guess));
        assert_eq!(solver.state(), SolverState::AwaitingHint);
        assert!(solver.candidates().contains(&guess));
    }

    #[test]
    fn eliminate_without_guess_fails() {
        let mut solver = Solver::with_seed(4, StrategyType::Random, 3).unwrap();
        assert_eq!(solver.eliminate(Hint::new(0, 0)), Err(Error::NoPendingGuess));
    }

    #[test]
    fn eliminate_consumes_pending_guess() {
        let oracle = oracle("5049");
        let mut solver = Solver::with_seed(4, StrategyType::Random, 4).unwrap();

        let guess = solver.next_guess().unwrap();
        solver.eliminate(oracle.hint(&guess).unwrap()).unwrap();

        assert!(solver.pending_guess().is_none());
        assert_eq!(solver.eliminate(Hint::new(0, 0)), Err(Error::NoPendingGuess));
    }

    #[test]
    fn eliminate_rejects_out_of_range_hint() {
        let mut solver = Solver::with_seed(4, StrategyType::Random, 5).unwrap();
        solver.next_guess().unwrap();

        assert_eq!(
            solver.eliminate(Hint::new(3, 2)),
            Err(Error::HintOutOfRange {
                hint: Hint::new(3, 2),
                length: 4
            })
        );
        // The guess is still waiting for a usable hint
        assert_eq!(solver.state(), SolverState::AwaitingHint);
        assert_eq!(solver.remaining(), 5040);
    }

    #[test]
    fn elimination_is_monotone_and_keeps_answer() {
        let answer = Code::new("5049").unwrap();
        let oracle = HintOracle::new(answer);
        let mut solver = Solver::with_seed(4, StrategyType::Random, 6).unwrap();

        while !solver.is_solved() {
            let before: HashSet<Code> = solver.candidates().codes().iter().copied().collect();

            let guess = solver.next_guess().unwrap();
            solver.eliminate(oracle.hint(&guess).unwrap()).unwrap();

            assert!(solver.remaining() < before.len());
            assert!(solver.candidates().codes().iter().all(|c| before.contains(c)));
            assert!(solver.candidates().contains(&answer));
        }
    }

    #[test]
    fn solves_5049_with_every_strategy() {
        for strategy in [StrategyType::Random, StrategyType::Entropy, StrategyType::Minimax] {
            let oracle = oracle("5049");
            let mut solver = Solver::with_seed(4, strategy, 11).unwrap();

            while !solver.is_solved() {
                assert!(solver.round() < 20, "{} did not converge", strategy.name());
                let guess = solver.next_guess().unwrap();
                solver.eliminate(oracle.hint(&guess).unwrap()).unwrap();
            }

            assert_eq!(solver.state(), SolverState::Solved);
            assert_eq!(solver.solution().unwrap().to_string(), "5049");
        }
    }

    #[test]
    fn random_solves_within_bound_across_seeds() {
        let oracle = oracle("5049");
        for seed in 0..25 {
            let mut solver = Solver::with_seed(4, StrategyType::Random, seed).unwrap();

            while !solver.is_solved() {
                let guess = solver.next_guess().unwrap();
                solver.eliminate(oracle.hint(&guess).unwrap()).unwrap();
            }

            assert!(solver.round() <= 12, "seed {seed} took {} rounds", solver.round());
            assert_eq!(solver.solution(), Some(oracle.secret()));
        }
    }

    #[test]
    fn contradictory_hints_exhaust_session() {
        let mut solver = Solver::with_seed(2, StrategyType::Random, 8).unwrap();

        let guess = solver.next_guess().unwrap();
        assert_eq!(solver.eliminate(Hint::perfect(2)), Ok(1));
        assert_eq!(solver.solution(), Some(&guess));

        // The only survivor is the guess itself, so "nothing matches" is a lie
        let again = solver.next_guess().unwrap();
        assert_eq!(again, guess);
        assert_eq!(
            solver.eliminate(Hint::new(0, 0)),
            Err(Error::InconsistentFeedback { round: 2 })
        );

        assert_eq!(solver.state(), SolverState::Exhausted);
        assert_eq!(
            solver.next_guess(),
            Err(Error::InconsistentFeedback { round: 2 })
        );
    }

    #[test]
    fn impossible_hint_empties_space_in_one_round() {
        // With two distinct digits, one exact match forces the other digit to
        // be absent, so 1A1B never occurs
        let mut solver = Solver::with_seed(2, StrategyType::Random, 9).unwrap();
        solver.next_guess().unwrap();

        assert_eq!(
            solver.eliminate(Hint::new(1, 1)),
            Err(Error::InconsistentFeedback { round: 1 })
        );
        assert_eq!(solver.remaining(), 0);
    }

    #[test]
    fn seeded_solvers_are_reproducible() {
        let mut first = Solver::with_seed(4, StrategyType::Random, 99).unwrap();
        let mut second = Solver::with_seed(4, StrategyType::Random, 99).unwrap();

        assert_eq!(first.next_guess().unwrap(), second.next_guess().unwrap());
    }

    #[test]
    fn single_digit_game() {
        let oracle = oracle("7");
        let mut solver = Solver::with_seed(1, StrategyType::Random, 3).unwrap();

        while !solver.is_solved() {
            let guess = solver.next_guess().unwrap();
            solver.eliminate(oracle.hint(&guess).unwrap()).unwrap();
        }
        assert_eq!(solver.solution().unwrap().to_string(), "7");
        assert!(solver.round() <= 10);
    }
}
