//! Shannon entropy calculation for hint distributions
//!
//! Given a guess and set of candidates, computes the expected information gain.

use crate::core::{Code, Hint};
use rustc_hash::FxHashMap;

/// Comprehensive metrics for evaluating a guess
#[derive(Debug, Clone, Copy)]
pub struct GuessMetrics {
    /// Shannon entropy (expected information gain in bits)
    pub entropy: f64,
    /// Expected number of remaining candidates after this guess
    pub expected_remaining: f64,
    /// Maximum partition size (worst-case remaining candidates)
    pub max_partition: usize,
}

/// Calculate Shannon entropy for a guess against candidates
///
/// Returns the expected information gain in bits.
///
/// # Formula
/// H(X) = -Σ p(x) * log₂(p(x))
///
/// where p(x) is the probability of observing hint x.
///
/// # Examples
/// ```
/// use bulls_cows::core::Code;
/// use bulls_cows::solver::entropy::calculate_entropy;
///
/// let guess = Code::new("0123").unwrap();
/// let candidates = vec![Code::new("0123").unwrap(), Code::new("4567").unwrap()];
///
/// let entropy = calculate_entropy(&guess, &candidates);
/// assert!((entropy - 1.0).abs() < 1e-9); // two equally likely hints
/// ```
#[must_use]
pub fn calculate_entropy(guess: &Code, candidates: &[Code]) -> f64 {
    if candidates.is_empty() {
        return 0.0;
    }

    let hint_counts = group_by_hint(guess, candidates);
    shannon_entropy(&hint_counts)
}

/// Group candidates by the hint they produce with the guess
pub(crate) fn group_by_hint(guess: &Code, candidates: &[Code]) -> FxHashMap<Hint, usize> {
    let mut counts = FxHashMap::default();

    for candidate in candidates {
        let hint = Hint::calculate(guess, candidate);
        *counts.entry(hint).or_insert(0) += 1;
    }

    counts
}

/// How many candidates fall under each hint, ordered by hint
#[must_use]
pub fn hint_distribution(guess: &Code, candidates: &[Code]) -> Vec<(Hint, usize)> {
    let mut distribution: Vec<(Hint, usize)> =
        group_by_hint(guess, candidates).into_iter().collect();
    distribution.sort_unstable_by_key(|&(hint, _)| hint);
    distribution
}

/// Calculate Shannon entropy from a hint distribution
///
/// H = -Σ p * log₂(p)
///
/// # Properties
/// - Returns 0.0 for certain outcome (one hint with p=1)
/// - Maximized for uniform distribution
/// - Always in range [0, log₂(n)] for n hints
#[must_use]
pub fn shannon_entropy<S>(hint_counts: &std::collections::HashMap<Hint, usize, S>) -> f64
where
    S: std::hash::BuildHasher,
{
    let total = hint_counts.values().sum::<usize>() as f64;

    if total == 0.0 {
        return 0.0;
    }

    hint_counts
        .values()
        .filter(|&&count| count > 0)
        .map(|&count| {
            let p = count as f64 / total;
            -p * p.log2()
        })
        .sum()
}

/// Calculate comprehensive metrics for a guess
///
/// Returns entropy, expected remaining candidates, and max partition size.
#[must_use]
pub fn calculate_metrics(guess: &Code, candidates: &[Code]) -> GuessMetrics {
    if candidates.is_empty() {
        return GuessMetrics {
            entropy: 0.0,
            expected_remaining: 0.0,
            max_partition: 0,
        };
    }

    let hint_counts = group_by_hint(guess, candidates);
    let total = candidates.len() as f64;

    let entropy = shannon_entropy(&hint_counts);

    let expected_remaining: f64 = hint_counts
        .values()
        .map(|&count| {
            let p = count as f64 / total;
            p * count as f64
        })
        .sum();

    let max_partition = hint_counts.values().copied().max().unwrap_or(0);

    GuessMetrics {
        entropy,
        expected_remaining,
        max_partition,
    }
}
