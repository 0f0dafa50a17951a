//! Formatting utilities for terminal output

use crate::core::Hint;

/// Render a hint as pegs: `●` per exact match, `○` per partial, `·` per miss
#[must_use]
pub fn hint_to_pegs(hint: Hint, length: usize) -> String {
    let exact = usize::from(hint.exact());
    let partial = usize::from(hint.partial());
    let misses = length.saturating_sub(exact + partial);

    let mut result = String::with_capacity(length * 3);
    result.push_str(&"●".repeat(exact));
    result.push_str(&"○".repeat(partial));
    result.push_str(&"·".repeat(misses));
    result
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format entropy as a bar scaled to the most informative possible split
///
/// A `length`-digit game has at most one hint per (A, B) pair, so the
/// entropy can never exceed log2 of that count.
#[must_use]
pub fn entropy_bar(entropy: f64, length: usize, width: usize) -> String {
    let outcomes = (length + 1) * (length + 2) / 2;
    create_progress_bar(entropy, (outcomes as f64).log2(), width)
}
