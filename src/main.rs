//! Bulls and Cows Solver - CLI
//!
//! Breaks distinct-digit codes from XAYB hints by candidate elimination.

use anyhow::{Context, Result};
use bulls_cows::{
    commands::{analyze_guess, run_benchmark, solve_code},
    config::{DEFAULT_LENGTH, SessionConfig},
    output::{print_analysis_result, print_benchmark_result, print_solve_result},
};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(
    name = "bulls_cows",
    about = "Bulls-and-Cows (XAYB) code breaker using candidate elimination",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Number of digits per code (1-10)
    #[arg(short = 'n', long, global = true, default_value_t = DEFAULT_LENGTH)]
    length: usize,

    /// Strategy: random (default), entropy, minimax
    #[arg(short, long, global = true, default_value = "random")]
    strategy: String,

    /// Seed for reproducible runs
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Log level when RUST_LOG is unset
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve a secret code (default - random secret when omitted)
    Solve {
        /// The secret to solve
        secret: Option<String>,

        /// Show verbose output with candidate counts
        #[arg(short, long)]
        verbose: bool,
    },

    /// Analyze the information content of a specific guess
    Analyze {
        /// Guess to analyze
        guess: String,
    },

    /// Benchmark solver performance
    Benchmark {
        /// Number of random secrets to test
        #[arg(short, long, default_value = "100")]
        count: usize,

        /// Test every possible secret instead of a sample
        #[arg(short, long)]
        all: bool,
    },
}

fn init_tracing(level: &str) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| level.into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    let config = SessionConfig::new(cli.length, &cli.strategy, cli.seed)
        .context("invalid configuration")?;

    // Default to solving a random secret if no command given
    let command = cli.command.unwrap_or(Commands::Solve {
        secret: None,
        verbose: false,
    });

    match command {
        Commands::Solve { secret, verbose } => {
            run_solve_command(&config, secret.as_deref(), verbose)
        }
        Commands::Analyze { guess } => run_analyze_command(&config, &guess),
        Commands::Benchmark { count, all } => run_benchmark_command(&config, count, all),
    }
}

fn run_solve_command(config: &SessionConfig, secret: Option<&str>, verbose: bool) -> Result<()> {
    let secret = match secret {
        Some(text) => config
            .parse_code(text)
            .with_context(|| format!("invalid secret '{text}'"))?,
        None => config.random_secret()?,
    };

    let result = solve_code(config, secret)?;
    print_solve_result(&result, verbose);
    Ok(())
}

fn run_analyze_command(config: &SessionConfig, guess: &str) -> Result<()> {
    let result =
        analyze_guess(config, guess).with_context(|| format!("cannot analyze '{guess}'"))?;
    print_analysis_result(&result);
    Ok(())
}

fn run_benchmark_command(config: &SessionConfig, count: usize, all: bool) -> Result<()> {
    let secrets = config.secrets(if all { None } else { Some(count) })?;
    println!(
        "Running benchmark on {} secrets ({} strategy)...",
        secrets.len(),
        config.strategy.name()
    );

    let result = run_benchmark(config, &secrets, true)?;
    print_benchmark_result(&result);
    Ok(())
}
