//! Pure entropy-based guess selection
//!
//! Selects codes that maximize Shannon entropy (expected information gain).

use super::calculator::calculate_entropy;
use crate::core::Code;
use rayon::prelude::*;

/// Select best guess by maximizing entropy
///
/// Returns the code with highest entropy and its entropy value,
/// or `None` if the guess pool is empty.
///
/// # Examples
/// ```
/// use bulls_cows::core::Code;
/// use bulls_cows::solver::entropy::select_best_guess;
///
/// let pool = vec![Code::new("4567").unwrap(), Code::new("0123").unwrap()];
/// let candidates = vec![Code::new("0123").unwrap(), Code::new("1032").unwrap()];
///
/// let (best, entropy) = select_best_guess(&pool, &candidates).unwrap();
/// assert_eq!(best.to_string(), "0123"); // 4567 cannot tell them apart
/// assert!(entropy > 0.0);
/// ```
#[must_use]
pub fn select_best_guess<'a>(
    guess_pool: &'a [Code],
    candidates: &[Code],
) -> Option<(&'a Code, f64)> {
    guess_pool
        .par_iter()
        .map(|guess| {
            let entropy = calculate_entropy(guess, candidates);
            (guess, entropy)
        })
        .max_by(|(g1, e1), (g2, e2)| e1.total_cmp(e2).then_with(|| g2.cmp(g1)))
}
