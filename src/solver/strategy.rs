//! Guess selection strategies
//!
//! Defines the Strategy trait and concrete implementations. Every strategy
//! picks from the remaining candidates, so each round either hits the answer
//! or eliminates at least the guess itself.

use crate::core::Code;
use crate::error::{Error, Result};
use rand::Rng;
use rand::seq::IndexedRandom;

/// A strategy for selecting the next guess from the remaining candidates
pub trait Strategy {
    /// Select a guess from `candidates`
    ///
    /// Returns `None` if there are no candidates.
    fn select_guess<'a, R: Rng + ?Sized>(
        &self,
        candidates: &'a [Code],
        rng: &mut R,
    ) -> Option<&'a Code>;
}

/// Enum wrapper for all strategy types
///
/// Allows runtime selection of strategy while maintaining static dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StrategyType {
    /// Uniform random pick (default)
    #[default]
    Random,
    /// Pure entropy maximization
    Entropy,
    /// Pure minimax optimization
    Minimax,
}

impl Strategy for StrategyType {
    fn select_guess<'a, R: Rng + ?Sized>(
        &self,
        candidates: &'a [Code],
        rng: &mut R,
    ) -> Option<&'a Code> {
        match self {
            Self::Random => RandomStrategy.select_guess(candidates, rng),
            Self::Entropy => EntropyStrategy.select_guess(candidates, rng),
            Self::Minimax => MinimaxStrategy.select_guess(candidates, rng),
        }
    }
}

impl StrategyType {
    /// Create strategy from name string
    ///
    /// Supported names: "random", "entropy" (or "max-entropy"), "minimax"
    /// (or "minimize-worst-case").
    ///
    /// # Errors
    /// Returns `Error::UnknownStrategy` for any other name.
    pub fn from_name(name: &str) -> Result<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "random" => Ok(Self::Random),
            "entropy" | "max-entropy" => Ok(Self::Entropy),
            "minimax" | "minimize-worst-case" => Ok(Self::Minimax),
            _ => Err(Error::UnknownStrategy(name.to_string())),
        }
    }

    /// Canonical name, accepted by [`StrategyType::from_name`]
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Random => "random",
            Self::Entropy => "entropy",
            Self::Minimax => "minimax",
        }
    }
}

/// Random strategy
///
/// Picks uniformly among the remaining candidates.
pub struct RandomStrategy;

impl Strategy for RandomStrategy {
    fn select_guess<'a, R: Rng + ?Sized>(
        &self,
        candidates: &'a [Code],
        rng: &mut R,
    ) -> Option<&'a Code> {
        candidates.choose(rng)
    }
}

/// Pure entropy maximization strategy
///
/// Selects the candidate whose hint distribution has the highest Shannon entropy.
pub struct EntropyStrategy;

impl Strategy for EntropyStrategy {
    fn select_guess<'a, R: Rng + ?Sized>(
        &self,
        candidates: &'a [Code],
        _rng: &mut R,
    ) -> Option<&'a Code> {
        super::entropy::select_best_guess(candidates, candidates).map(|(best, _)| best)
    }
}

/// Pure minimax strategy
///
/// Selects the candidate that minimizes the worst-case remaining candidates.
pub struct MinimaxStrategy;

impl Strategy for MinimaxStrategy {
    fn select_guess<'a, R: Rng + ?Sized>(
        &self,
        candidates: &'a [Code],
        _rng: &mut R,
    ) -> Option<&'a Code> {
        super::minimax::select_best_guess(candidates, candidates).map(|(best, _)| best)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn candidates() -> Vec<Code> {
        ["0123", "0132", "1023", "1032", "4567"]
            .iter()
            .map(|t| Code::new(t).unwrap())
            .collect()
    }

    #[test]
    fn random_strategy_selects_a_candidate() {
        let candidates = candidates();
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..10 {
            let guess = RandomStrategy.select_guess(&candidates, &mut rng).unwrap();
            assert!(candidates.contains(guess));
        }
    }

    #[test]
    fn random_strategy_single_candidate() {
        let candidates = vec![Code::new("5049").unwrap()];
        let mut rng = StdRng::seed_from_u64(1);

        let guess = RandomStrategy.select_guess(&candidates, &mut rng).unwrap();
        assert_eq!(guess.to_string(), "5049");
    }

    #[test]
    fn random_strategy_is_reproducible_with_seed() {
        let candidates = candidates();
        let mut first = StdRng::seed_from_u64(9);
        let mut second = StdRng::seed_from_u64(9);

        assert_eq!(
            RandomStrategy.select_guess(&candidates, &mut first),
            RandomStrategy.select_guess(&candidates, &mut second)
        );
    }

    #[test]
    fn entropy_strategy_selects_a_candidate() {
        let candidates = candidates();
        let mut rng = StdRng::seed_from_u64(0);

        let guess = EntropyStrategy.select_guess(&candidates, &mut rng).unwrap();
        assert!(candidates.contains(guess));
    }

    #[test]
    fn minimax_strategy_selects_a_candidate() {
        let candidates = candidates();
        let mut rng = StdRng::seed_from_u64(0);

        let guess = MinimaxStrategy.select_guess(&candidates, &mut rng).unwrap();
        assert!(candidates.contains(guess));
    }

    #[test]
    fn strategies_return_none_without_candidates() {
        let mut rng = StdRng::seed_from_u64(0);
        for strategy in [StrategyType::Random, StrategyType::Entropy, StrategyType::Minimax] {
            assert!(strategy.select_guess(&[], &mut rng).is_none());
        }
    }

    #[test]
    fn from_name_parses_known_names() {
        assert_eq!(StrategyType::from_name("random"), Ok(StrategyType::Random));
        assert_eq!(StrategyType::from_name("Entropy"), Ok(StrategyType::Entropy));
        assert_eq!(
            StrategyType::from_name("max-entropy"),
            Ok(StrategyType::Entropy)
        );
        assert_eq!(
            StrategyType::from_name("minimize-worst-case"),
            Ok(StrategyType::Minimax)
        );
        assert_eq!(
            StrategyType::from_name("adaptive"),
            Err(Error::UnknownStrategy("adaptive".to_string()))
        );
    }

    #[test]
    fn name_round_trips() {
        for strategy in [StrategyType::Random, StrategyType::Entropy, StrategyType::Minimax] {
            assert_eq!(StrategyType::from_name(strategy.name()), Ok(strategy));
        }
        assert_eq!(StrategyType::default(), StrategyType::Random);
    }
}
