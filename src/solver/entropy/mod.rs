//! Entropy-based guess scoring
//!
//! Implements Shannon entropy calculation for hint distributions.

mod calculator;
mod selector;

pub use calculator::{
    GuessMetrics, calculate_entropy, calculate_metrics, hint_distribution, shannon_entropy,
};
pub use selector::select_best_guess;

pub(crate) use calculator::group_by_hint;
