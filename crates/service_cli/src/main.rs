//! Log-option CLI - renders the log-option contract payoff chart
//!
//! Running `log-option` with no arguments samples the payoff over
//! [-20, 20] and writes the chart to `log_option_contract.png`.
//!
//! # Commands
//!
//! - `log-option render [--output <file>]` - Draw the chart (PNG or SVG by extension)
//! - `log-option sample [--format table|csv|json]` - Print the evaluated samples
//! - `log-option check` - Verify continuity at every segment boundary
//!
//! # Architecture
//!
//! As part of the **S**ervice layer, this crate wires configuration and
//! logging around the payoff layer (`payoff_core`) and the chart layer
//! (`payoff_chart`).

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::{debug, info};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod config;
mod error;

pub use error::{CliError, Result};

use config::{build_config, CliArgs, LogLevel};

/// Log-option payoff chart CLI
#[derive(Parser)]
#[command(name = "log-option")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path (TOML)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the payoff chart to an image file
    Render {
        /// Output file (.png or .svg)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print the sampled payoff points
    Sample {
        /// Output format (json, csv, table)
        #[arg(short, long, default_value = "table")]
        format: String,
    },

    /// Check payoff continuity at the segment boundaries
    Check,
}

fn init_tracing(level: LogLevel) {
    // RUST_LOG wins over the configured level when set.
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::from_level(level.into()).into())
        .from_env_lossy();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(filter)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let output = match &cli.command {
        Some(Commands::Render { output }) => output.clone(),
        _ => None,
    };
    let args = CliArgs {
        config_file: cli.config.clone(),
        output,
        verbose: cli.verbose,
    };
    let config = build_config(&args)?;

    init_tracing(config.log_level);

    if cli.verbose {
        info!("Verbose mode enabled");
    }
    debug!(?config, "Configuration loaded");

    match cli.command {
        None | Some(Commands::Render { .. }) => commands::render::run(&config),
        Some(Commands::Sample { format }) => commands::sample::run(&format),
        Some(Commands::Check) => commands::check::run(),
    }
}
