//! Varswap CLI - Command Line Host for Variance Swap Replication
//!
//! This is the operational entry point for the variance swap libraries.
//!
//! # Commands
//!
//! - `varswap price --quotes <file> --forward <F>` - Replicate the par variance of a quote strip
//! - `varswap weights --forward <F> --strikes <list>` - Show replication weights
//! - `varswap realized --prices <file>` - Realised variance of a price path
//!
//! # Architecture
//!
//! As part of the **S**ervice layer, this crate reads inputs, calls the
//! pricing layer and turns its typed errors into operator-facing messages.

use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::str::FromStr;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod config;
mod error;
mod input;
mod output;

pub use error::{CliError, Result};

use config::{build_config, CliArgs, CliConfig, OutputFormat};

/// Variance swap replication CLI
#[derive(Parser)]
#[command(name = "varswap")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true, default_value = "varswap.toml")]
    config: PathBuf,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Replicate the par variance from a put/call quote strip
    Price {
        /// Path to quotes CSV with header strike,put,call
        #[arg(short, long)]
        quotes: PathBuf,

        /// Forward price of the underlying
        #[arg(short, long)]
        forward: f64,

        /// Output format (table, json, csv)
        #[arg(long)]
        format: Option<String>,

        /// Sort records by strike before replicating
        #[arg(long)]
        sort: bool,
    },

    /// Show the option weights of the replicating portfolio
    Weights {
        /// Forward price of the underlying
        #[arg(short, long)]
        forward: f64,

        /// Comma-separated ascending strikes
        #[arg(short, long)]
        strikes: String,

        /// Output format (table, json, csv)
        #[arg(long)]
        format: Option<String>,
    },

    /// Realised variance of an observed price path
    Realized {
        /// Path to CSV with a price column
        #[arg(short, long)]
        prices: PathBuf,

        /// Output format (table, json, csv)
        #[arg(long)]
        format: Option<String>,
    },
}

/// Install the global subscriber; `RUST_LOG` wins over the configured level.
fn init_tracing(config: &CliConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.as_filter_str()));

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

/// Per-command format flag, else the configured default.
fn resolve_format(flag: Option<&str>, config: &CliConfig) -> Result<OutputFormat> {
    match flag {
        Some(f) => Ok(OutputFormat::from_str(f)?),
        None => Ok(config.format),
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = build_config(&CliArgs {
        config_file: Some(cli.config.clone()),
        log_level: cli.log_level.clone(),
        verbose: cli.verbose,
    })
    .context("failed to load configuration")?;

    init_tracing(&config);
    debug!("Configuration: {:?}", config);

    if cli.verbose {
        info!("Verbose mode enabled");
    }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Price {
            quotes,
            forward,
            format,
            sort,
        } => {
            let format = resolve_format(format.as_deref(), &config)?;
            commands::price::run(&mut out, &quotes, forward, sort, format)
                .with_context(|| format!("price failed for {}", quotes.display()))
        }
        Commands::Weights {
            forward,
            strikes,
            format,
        } => {
            let format = resolve_format(format.as_deref(), &config)?;
            commands::weights::run(&mut out, forward, &strikes, format)
                .context("weights failed")
        }
        Commands::Realized { prices, format } => {
            let format = resolve_format(format.as_deref(), &config)?;
            commands::realized::run(&mut out, &prices, format)
                .with_context(|| format!("realized failed for {}", prices.display()))
        }
    }
}
