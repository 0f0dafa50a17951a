//! Minimax guess scoring
//!
//! Implements worst-case minimization over hint partitions.

mod calculator;
mod selector;

pub use calculator::calculate_max_remaining;
pub use selector::select_best_guess;
