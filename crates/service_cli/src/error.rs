//! Error types for the log-option CLI.

use payoff_chart::error::ChartError;
use payoff_core::types::PayoffError;
use thiserror::Error;

use crate::config::ConfigError;

/// CLI error type
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Payoff evaluation error
    #[error("Payoff error: {0}")]
    Payoff(#[from] PayoffError),

    /// Chart rendering error
    #[error("Chart error: {0}")]
    Chart(#[from] ChartError),

    /// Invalid command-line argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Payoff jumps at a segment boundary
    #[error("Continuity violated at x = {boundary}: jump of {gap:e}")]
    ContinuityViolation {
        /// Boundary abscissa
        boundary: f64,
        /// Absolute jump
        gap: f64,
    },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV output error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON output error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result alias used by every command
pub type Result<T> = std::result::Result<T, CliError>;
