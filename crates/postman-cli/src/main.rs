//! Postman CLI - route inspection (Chinese Postman) solver.
//!
//! Finds the cheapest closed walk covering every edge of a weighted graph,
//! either for a built-in sample or for a JSON edge list.

mod commands;
mod loader;
mod samples;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use postman_core::config::{PairingStrategyKind, PostmanConfig, DEFAULT_CONFIG_FILE};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use commands::GraphSource;

/// Postman - minimum-cost route inspection
#[derive(Parser, Debug)]
#[command(name = "postman")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Configuration file (missing file means defaults)
    #[arg(short, long, global = true, default_value = DEFAULT_CONFIG_FILE, env = "POSTMAN_CONFIG")]
    config: PathBuf,

    /// Log progress to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List the built-in sample graphs
    List,

    /// Eulerize a graph if needed and walk every edge
    Solve {
        /// Built-in sample name
        #[arg(required_unless_present = "file", conflicts_with = "file")]
        sample: Option<String>,

        /// JSON edge list instead of a sample
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Node to start (and end) the route at
        #[arg(short, long)]
        start: Option<String>,

        /// RNG seed for reproducible routes
        #[arg(long)]
        seed: Option<u64>,

        /// Walk attempts before giving up
        #[arg(long)]
        max_attempts: Option<usize>,

        /// Odd-node pairing strategy
        #[arg(long, value_enum)]
        strategy: Option<StrategyArg>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the effective configuration as TOML
    Config,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
#[value(rename_all = "snake_case")]
enum StrategyArg {
    BruteForce,
    Greedy,
}

impl From<StrategyArg> for PairingStrategyKind {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::BruteForce => Self::BruteForce,
            StrategyArg::Greedy => Self::Greedy,
        }
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "info" } else { "warn" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut config = PostmanConfig::load_from(&cli.config)
        .with_context(|| format!("Failed to load '{}'", cli.config.display()))?;
    tracing::info!(path = %cli.config.display(), "Configuration loaded");

    match cli.command {
        Commands::List => commands::cmd_list(),
        Commands::Config => commands::cmd_config(&config),
        Commands::Solve {
            sample,
            file,
            start,
            seed,
            max_attempts,
            strategy,
            json,
        } => {
            if let Some(seed) = seed {
                config.walk.seed = Some(seed);
            }
            if let Some(max_attempts) = max_attempts {
                config.walk.max_attempts = max_attempts;
            }
            if let Some(strategy) = strategy {
                config.pairing.strategy = strategy.into();
            }
            config.validate()?;

            let source = match (&file, &sample) {
                (Some(path), _) => GraphSource::File(path),
                (None, Some(name)) => GraphSource::Sample(name),
                (None, None) => anyhow::bail!("Give a sample name or --file"),
            };
            commands::cmd_solve(&source, start.as_deref(), &config, json)
        }
    }
}
