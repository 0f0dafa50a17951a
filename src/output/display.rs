//! Display functions for command results

use super::formatters::{create_progress_bar, entropy_bar, hint_to_pegs};
use crate::commands::{AnalysisResult, BenchmarkResult, SolveResult};
use colored::Colorize;

/// Print the result of solving a code
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    let length = result.secret.length();

    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}  ({} strategy)",
        result.secret.to_string().bright_yellow().bold(),
        result.strategy
    );
    println!("{}", "─".repeat(60).cyan());

    for step in &result.steps {
        println!(
            "\nRound {}: {}  {}  {}",
            step.round,
            step.guess.to_string().bold(),
            step.hint.to_string().bright_yellow(),
            hint_to_pegs(step.hint, length)
        );

        if verbose {
            println!(
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );

            if step.candidates_after > 0 {
                let ratio = step.candidates_before as f64 / step.candidates_after as f64;
                println!(
                    "  Info gained: {:.3} bits ({ratio:.1}x reduction)",
                    ratio.log2()
                );
            }
        }
    }

    println!();
    if result.success() {
        println!(
            "{}",
            format!(
                "✅ The answer is {}, used {} attempt(s)",
                result.answer, result.rounds
            )
            .green()
            .bold()
        );
    } else {
        println!(
            "{}",
            format!("❌ Converged on {} instead of {}", result.answer, result.secret)
                .red()
                .bold()
        );
    }
}

/// Print the result of guess analysis
pub fn print_analysis_result(result: &AnalysisResult) {
    let length = result.guess.length();

    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "ENTROPY ANALYSIS:".bright_cyan().bold(),
        result.guess.to_string().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    let bar = entropy_bar(result.entropy, length, 30);

    println!("\n📊 Against {} possible codes:", result.total_candidates);
    println!(
        "   Entropy:     [{}] {}",
        bar.green(),
        format!("{:.3} bits", result.entropy).bright_yellow()
    );
    println!(
        "   Info gain:   {:.1}x reduction",
        result.expected_reduction
    );
    println!(
        "   Expected:    {:.1} candidates remain",
        result.expected_remaining
    );
    println!("   Worst case:  {} candidates remain", result.max_partition);

    println!("\n📈 {}", "Hint distribution:".bright_cyan().bold());
    for &(hint, count) in &result.distribution {
        let bar = create_progress_bar(count as f64, result.max_partition as f64, 30);
        println!(
            "   {hint}  {}  {} {count:5}",
            hint_to_pegs(hint, length),
            bar.green()
        );
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} ({} strategy) ",
        "BENCHMARK RESULTS".bright_cyan().bold(),
        result.strategy
    );
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Codes tested:     {}", result.total_codes);
    println!(
        "   Average rounds:   {}",
        format!("{:.3}", result.average_rounds)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Best case:        {}",
        format!("{}", result.min_rounds).green()
    );
    println!(
        "   Worst case:       {}",
        format!("{}", result.max_rounds).yellow()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Codes/second:     {:.1}", result.codes_per_second);

    if result.total_codes == 0 {
        return;
    }

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    for (&rounds, &count) in &result.distribution {
        let pct = (count as f64 / result.total_codes as f64) * 100.0;
        let bar_width = ((pct / 2.5) as usize).min(40);
        let bar = format!(
            "{}{}",
            "█".repeat(bar_width).green(),
            "░".repeat(40 - bar_width).bright_black()
        );
        println!("   {rounds:2}: {bar} {count:5} ({pct:5.1}%)");
    }

    if !result.hardest.is_empty() {
        let hardest: Vec<String> = result.hardest.iter().map(ToString::to_string).collect();
        println!(
            "\n🐢 {} {}",
            "Hardest codes:".bright_cyan().bold(),
            hardest.join(", ")
        );
    }
}
