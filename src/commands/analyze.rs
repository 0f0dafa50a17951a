//! Guess analysis command
//!
//! Analyzes the information content of a specific opening guess.

use crate::config::SessionConfig;
use crate::core::{CandidateSpace, Code, Hint};
use crate::error::Result;
use crate::solver::entropy::{calculate_metrics, hint_distribution};

/// Result of analyzing a guess
#[derive(Debug, Clone)]
pub struct AnalysisResult {
    pub guess: Code,
    pub entropy: f64,
    pub expected_reduction: f64,
    pub expected_remaining: f64,
    /// Largest hint partition, the worst case after this guess
    pub max_partition: usize,
    pub total_candidates: usize,
    /// Candidates per possible hint, ordered by hint
    pub distribution: Vec<(Hint, usize)>,
}

/// Analyze `guess` against the full candidate space for its length
///
/// # Errors
///
/// Returns an error if:
/// - The guess is not a valid code (digits, length, repeats)
/// - The guess length differs from the configured length
pub fn analyze_guess(config: &SessionConfig, guess: &str) -> Result<AnalysisResult> {
    let guess = config.parse_code(guess)?;
    let space = CandidateSpace::generate(config.length)?;

    let metrics = calculate_metrics(&guess, space.codes());

    Ok(AnalysisResult {
        guess,
        entropy: metrics.entropy,
        expected_reduction: metrics.entropy.exp2(),
        expected_remaining: metrics.expected_remaining,
        max_partition: metrics.max_partition,
        total_candidates: space.len(),
        distribution: hint_distribution(&guess, space.codes()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn analyze_valid_guess() {
        let result = analyze_guess(&SessionConfig::default(), "0123").unwrap();

        assert_eq!(result.guess.to_string(), "0123");
        assert_eq!(result.total_candidates, 5040);
        assert!(result.entropy > 0.0);
        assert!(result.expected_reduction >= 1.0);
        assert!(result.max_partition <= result.total_candidates);
    }

    #[test]
    fn analyze_invalid_guess() {
        let config = SessionConfig::default();

        assert_eq!(
            analyze_guess(&config, "1123").unwrap_err(),
            Error::RepeatedDigit('1')
        );
        assert!(matches!(
            analyze_guess(&config, "12345"),
            Err(Error::InvalidCodeLength { .. })
        ));
    }

    #[test]
    fn distribution_covers_every_candidate() {
        let result = analyze_guess(&SessionConfig::default(), "5049").unwrap();

        let total: usize = result.distribution.iter().map(|&(_, n)| n).sum();
        assert_eq!(total, 5040);

        // Only the guess itself scores 4A0B
        assert_eq!(result.distribution.last(), Some(&(Hint::perfect(4), 1)));
        // A 4-digit guess can never leave exactly one digit misplaced with three exact
        assert!(result.distribution.iter().all(|&(h, _)| h != Hint::new(3, 1)));
    }

    #[test]
    fn entropy_properties() {
        let result = analyze_guess(&SessionConfig::default(), "9876").unwrap();

        assert!(result.entropy <= (result.distribution.len() as f64).log2() + 1e-9);
        assert!(result.expected_remaining >= 1.0);
        assert!(result.expected_remaining <= result.max_partition as f64);
    }
}
