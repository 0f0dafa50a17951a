//! Minimax worst-case calculation for hint partitions
//!
//! Given a guess and set of candidates, computes the maximum remaining candidates
//! for any possible hint.

use crate::core::Code;
use crate::solver::entropy::group_by_hint;

/// Calculate the maximum remaining candidates for a guess
///
/// Returns the worst-case number of remaining candidates after this guess.
///
/// # Examples
/// ```
/// use bulls_cows::core::Code;
/// use bulls_cows::solver::minimax::calculate_max_remaining;
///
/// let guess = Code::new("0123").unwrap();
/// let candidates = vec![Code::new("0132").unwrap(), Code::new("1023").unwrap()];
///
/// // Both candidates score 2A2B, so one hint leaves both
/// assert_eq!(calculate_max_remaining(&guess, &candidates), 2);
/// ```
#[must_use]
pub fn calculate_max_remaining(guess: &Code, candidates: &[Code]) -> usize {
    group_by_hint(guess, candidates)
        .into_values()
        .max()
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn codes(texts: &[&str]) -> Vec<Code> {
        texts.iter().map(|t| Code::new(t).unwrap()).collect()
    }

    #[test]
    fn max_remaining_perfect_split() {
        let guess = Code::new("0123").unwrap();
        let candidates = codes(&["0123", "4567"]);

        assert_eq!(calculate_max_remaining(&guess, &candidates), 1);
    }

    #[test]
    fn max_remaining_all_same_hint() {
        let guess = Code::new("4567").unwrap();
        let candidates = codes(&["0123", "0132", "1023"]);

        assert_eq!(calculate_max_remaining(&guess, &candidates), 3);
    }

    #[test]
    fn max_remaining_largest_group() {
        let guess = Code::new("0123").unwrap();
        let candidates = codes(&["0123", "0132", "1023", "1032"]);

        assert_eq!(calculate_max_remaining(&guess, &candidates), 2);
    }

    #[test]
    fn max_remaining_matches_largest_distribution_bucket() {
        let guess = Code::new("0123").unwrap();
        let candidates = crate::core::generate_candidates(4).unwrap();

        let largest = crate::solver::entropy::hint_distribution(&guess, &candidates)
            .into_iter()
            .map(|(_, count)| count)
            .max();
        assert_eq!(Some(calculate_max_remaining(&guess, &candidates)), largest);
    }

    #[test]
    fn max_remaining_empty_candidates() {
        let guess = Code::new("0123").unwrap();
        assert_eq!(calculate_max_remaining(&guess, &[]), 0);
    }

    #[test]
    fn max_remaining_bounds() {
        let guess = Code::new("0123").unwrap();
        let candidates = codes(&["5049", "4589", "3241", "1234"]);

        let max = calculate_max_remaining(&guess, &candidates);
        assert!((1..=candidates.len()).contains(&max));
    }
}
