//! Error types for structured error handling.
//!
//! This module provides:
//! - `PayoffError`: Errors from domain generation, rule evaluation and
//!   segment assembly

use thiserror::Error;

/// Categorised payoff errors.
///
/// Every fallible operation in this crate returns `PayoffError` so callers
/// can distinguish a malformed sample grid from a numeric domain violation.
///
/// # Examples
/// ```
/// use payoff_core::types::PayoffError;
///
/// let err = PayoffError::LogDomain { x: -1.0 };
/// assert_eq!(format!("{}", err), "Logarithm undefined for non-positive input: -1");
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PayoffError {
    /// A domain was requested with zero samples.
    #[error("Sample count must be positive")]
    EmptyDomain,

    /// Domain bounds are inverted or not finite.
    #[error("Invalid domain bounds [{start}, {end}]")]
    InvalidBounds {
        /// Left bound
        start: f64,
        /// Right bound
        end: f64,
    },

    /// Tick or grid step is zero, negative or not finite.
    #[error("Invalid step: {0}")]
    InvalidStep(f64),

    /// Natural logarithm evaluated outside `(0, ∞)`.
    #[error("Logarithm undefined for non-positive input: {x}")]
    LogDomain {
        /// The offending abscissa
        x: f64,
    },

    /// Paired sequences differ in length.
    #[error("Length mismatch: {xs} abscissae, {ys} values")]
    LengthMismatch {
        /// Number of x values
        xs: usize,
        /// Number of y values
        ys: usize,
    },

    /// Adjacent segments leave a gap or overlap.
    #[error("Segments are not contiguous: left ends at {left_end}, right starts at {right_start}")]
    NonContiguousSegments {
        /// Right bound of the left segment
        left_end: f64,
        /// Left bound of the right segment
        right_start: f64,
    },
}
