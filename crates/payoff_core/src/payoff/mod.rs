//! Piecewise payoff definitions.
//!
//! This module provides:
//! - `rule`: closed-form evaluation rules (`Zero`, `Linear`, `NaturalLog`)
//! - `segment`: an interval with its sample grid and rule
//! - `sample`: evaluated `(x, f(x))` sequences
//! - `log_option`: the three-leg log-option payoff built from the above

pub mod log_option;
pub mod rule;
pub mod sample;
pub mod segment;

pub use log_option::{ContinuityCheck, LogOptionPayoff, CONTINUITY_TOLERANCE};
pub use rule::{evaluate, EvaluationRule};
pub use sample::SampleSet;
pub use segment::{check_contiguous, Segment};
