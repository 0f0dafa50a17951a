//! Minimax-based guess selection
//!
//! Always selects the guess that minimizes the worst-case remaining candidates.

use super::calculator::calculate_max_remaining;
use crate::core::Code;
use rayon::prelude::*;

/// Select best guess by minimizing worst-case remaining candidates
///
/// Returns the code with the lowest maximum remaining candidates and that value,
/// or `None` if the guess pool is empty. Ties go to the lowest code.
#[must_use]
pub fn select_best_guess<'a>(
    guess_pool: &'a [Code],
    candidates: &[Code],
) -> Option<(&'a Code, usize)> {
    guess_pool
        .par_iter()
        .map(|guess| {
            let max_remaining = calculate_max_remaining(guess, candidates);
            (guess, max_remaining)
        })
        .min_by_key(|&(guess, max)| (max, *guess))
}
