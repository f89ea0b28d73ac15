//! Error types for chart resolution and rendering.

use payoff_core::types::PayoffError;
use thiserror::Error;

/// Chart error type
#[derive(Debug, Error)]
pub enum ChartError {
    /// Payoff sampling or tick generation failed
    #[error("Payoff error: {0}")]
    Payoff(#[from] PayoffError),

    /// Plot configuration is inconsistent
    #[error("Invalid plot configuration: {0}")]
    InvalidConfig(String),

    /// Output path has no supported image extension
    #[error("Unsupported output format: {0}. Supported: png, svg")]
    UnsupportedFormat(String),

    /// Backend or drawing-area failure reported by plotters
    #[error("Drawing error: {0}")]
    Drawing(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ChartError {
    /// Create an invalid configuration error
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }

    /// Create a drawing error from any plotters error
    pub fn drawing(err: impl std::fmt::Display) -> Self {
        Self::Drawing(err.to_string())
    }
}
