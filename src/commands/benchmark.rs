//! Benchmark command
//!
//! Tests solver performance across many secrets.

use super::solve::solve_session;
use crate::config::SessionConfig;
use crate::core::Code;
use crate::error::Result;
use indicatif::{ProgressBar, ProgressStyle};
use std::collections::BTreeMap;
use std::time::{Duration, Instant};
use tracing::info;

/// Result of a benchmark run
#[derive(Debug, Clone)]
pub struct BenchmarkResult {
    pub strategy: &'static str,
    pub total_codes: usize,
    pub total_rounds: usize,
    pub average_rounds: f64,
    pub min_rounds: usize,
    pub max_rounds: usize,
    /// Rounds taken -> number of secrets
    pub distribution: BTreeMap<usize, usize>,
    /// Secrets that took `max_rounds`, capped at ten
    pub hardest: Vec<Code>,
    pub duration: Duration,
    pub codes_per_second: f64,
}

/// Solve every secret in `secrets` with a fresh session each
///
/// Session `i` uses `config.solver(i)`, so a seeded run is reproducible.
///
/// # Errors
/// Returns the first error raised by a session.
pub fn run_benchmark(
    config: &SessionConfig,
    secrets: &[Code],
    show_progress: bool,
) -> Result<BenchmarkResult> {
    let pb = if show_progress {
        let pb = ProgressBar::new(secrets.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("█▓▒░"),
        );
        pb
    } else {
        ProgressBar::hidden()
    };

    let start = Instant::now();
    let mut total_rounds = 0;
    let mut min_rounds = usize::MAX;
    let mut max_rounds = 0;
    let mut distribution: BTreeMap<usize, usize> = BTreeMap::new();
    let mut hardest = Vec::new();

    for (session, &secret) in (0u64..).zip(secrets) {
        let rounds = solve_session(config, session, secret)?.rounds;

        total_rounds += rounds;
        min_rounds = min_rounds.min(rounds);
        *distribution.entry(rounds).or_insert(0) += 1;

        if rounds > max_rounds {
            max_rounds = rounds;
            hardest.clear();
        }
        if rounds == max_rounds && hardest.len() < 10 {
            hardest.push(secret);
        }

        if session % 10 == 0 {
            let done = session as f64 + 1.0;
            pb.set_message(format!("Avg: {:.2}", total_rounds as f64 / done));
        }
        pb.inc(1);
    }

    pb.finish_with_message("Complete!");

    let duration = start.elapsed();
    let total_codes = secrets.len();
    let (average_rounds, codes_per_second) = if total_codes == 0 {
        (0.0, 0.0)
    } else {
        (
            total_rounds as f64 / total_codes as f64,
            total_codes as f64 / duration.as_secs_f64().max(f64::EPSILON),
        )
    };

    info!(
        strategy = config.strategy.name(),
        total_codes, average_rounds, max_rounds, "benchmark finished"
    );

    Ok(BenchmarkResult {
        strategy: config.strategy.name(),
        total_codes,
        total_rounds,
        average_rounds,
        min_rounds: if total_codes == 0 { 0 } else { min_rounds },
        max_rounds,
        distribution,
        hardest,
        duration,
        codes_per_second,
    })
}
