//! Randshow CLI - Command Line Front End for the Randshow Generators
//!
//! # Commands
//!
//! - `randshow histogram` - Count signed draws in a range
//! - `randshow dump` - Stream raw engine output for external test batteries
//! - `randshow zipf` - Sample a Zipf distribution against its expected frequencies
//! - `randshow benford` - Sample Benford's law against its expected frequencies
//! - `randshow uniformity` - Bucket acceptance check for one or all engines
//!
//! # Configuration
//!
//! Engine, seed and log level come from, in order of precedence, the command
//! line, the `RANDSHOW_*` environment variables, a TOML file given with
//! `--config`, and built-in defaults.
//!
//! Data goes to stdout and logs to stderr.

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;
mod error;

pub use error::{CliError, Result};

use config::{build_config, CliArgs, CliConfig, EngineKind};

/// Randshow random number generator CLI
#[derive(Parser)]
#[command(name = "randshow")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path (TOML format)
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

/// Engine selection shared by the sampling commands
#[derive(Args, Debug, Clone, Default)]
struct EngineArgs {
    /// Engine (lcg, pcg32, pcg64, splitmix64, xoshiro256pp)
    #[arg(short, long)]
    engine: Option<String>,

    /// Fixed seed; omit to seed from system entropy
    #[arg(short, long)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Count draws in [min, max) and print `value count` lines
    Histogram {
        #[command(flatten)]
        engine: EngineArgs,

        /// Inclusive lower bound
        #[arg(long, default_value = "-100", allow_hyphen_values = true)]
        min: i64,

        /// Exclusive upper bound
        #[arg(long, default_value = "100", allow_hyphen_values = true)]
        max: i64,

        /// Number of draws
        #[arg(short = 'n', long, default_value = "10000000")]
        draws: u64,
    },

    /// Write raw little-endian words to stdout
    Dump {
        #[command(flatten)]
        engine: EngineArgs,

        /// Number of words; omit to stream until the reader closes the pipe
        #[arg(short = 'n', long)]
        count: Option<u64>,
    },

    /// Sample a Zipf distribution
    Zipf {
        #[command(flatten)]
        engine: EngineArgs,

        /// Population size
        #[arg(short, long, default_value = "10")]
        population: u64,

        /// Skew exponent (at least 1)
        #[arg(short = 'x', long, default_value = "1.5")]
        exponent: f64,

        /// Number of draws
        #[arg(short = 'n', long, default_value = "100000")]
        draws: u64,

        /// Ranks to print
        #[arg(short, long, default_value = "20")]
        top: u64,
    },

    /// Sample Benford's law for leading digits
    Benford {
        #[command(flatten)]
        engine: EngineArgs,

        /// Digit base (greater than 2)
        #[arg(short, long, default_value = "10")]
        base: u32,

        /// Number of draws
        #[arg(short = 'n', long, default_value = "100000")]
        draws: u64,
    },

    /// Check bucket counts of bounded draws against a tolerance band
    Uniformity {
        /// Engine, or `all` to check every engine
        #[arg(short, long)]
        engine: Option<String>,

        /// Fixed seed; omit to seed from system entropy
        #[arg(short, long)]
        seed: Option<u64>,

        /// Number of buckets
        #[arg(short, long, default_value = "2000")]
        range: u64,

        /// Expected draws per bucket
        #[arg(short, long, default_value = "1200")]
        per_bucket: u64,

        /// Allowed relative deviation per bucket
        #[arg(short, long, default_value = "0.15")]
        tolerance: f64,
    },
}

impl Cli {
    fn config_args(&self) -> CliArgs {
        let (engine, seed) = match &self.command {
            Commands::Histogram { engine, .. }
            | Commands::Dump { engine, .. }
            | Commands::Zipf { engine, .. }
            | Commands::Benford { engine, .. } => (engine.engine.clone(), engine.seed),
            Commands::Uniformity { engine, seed, .. } => (
                engine.clone().filter(|e| !e.eq_ignore_ascii_case("all")),
                *seed,
            ),
        };
        CliArgs {
            config_file: self.config.clone(),
            engine,
            seed,
            log_level: self.log_level.clone(),
            verbose: self.verbose,
        }
    }
}

fn init_tracing(log_level: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = build_config(&cli.config_args()).context("Failed to load configuration")?;

    init_tracing(config.log_level.as_filter_str());
    info!(
        engine = %config.engine,
        seed = ?config.seed,
        log_level = %config.log_level,
        "Configuration loaded"
    );

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    execute(cli.command, &config, &mut out)?;
    match out.flush() {
        Err(e) if e.kind() != io::ErrorKind::BrokenPipe => Err(e).context("Failed to flush output"),
        _ => Ok(()),
    }
}

fn execute<W: Write>(command: Commands, config: &CliConfig, out: &mut W) -> anyhow::Result<()> {
    match command {
        Commands::Histogram {
            min, max, draws, ..
        } => commands::histogram::run(config, min, max, draws, out)
            .context("Histogram command failed"),
        Commands::Dump { count, .. } => commands::dump::run(config, count, out)
            .map(|_| ())
            .context("Dump command failed"),
        Commands::Zipf {
            population,
            exponent,
            draws,
            top,
            ..
        } => commands::zipf::run(config, population, exponent, draws, top, out)
            .context("Zipf command failed"),
        Commands::Benford { base, draws, .. } => {
            commands::benford::run(config, base, draws, out).context("Benford command failed")
        }
        Commands::Uniformity {
            engine,
            range,
            per_bucket,
            tolerance,
            ..
        } => {
            let engines = match engine {
                Some(e) if e.eq_ignore_ascii_case("all") => EngineKind::ALL.to_vec(),
                _ => vec![config.engine],
            };
            commands::uniformity::run(config, &engines, range, per_bucket, tolerance, out)
                .map(|_| ())
                .context("Uniformity check failed")
        }
    }
}
