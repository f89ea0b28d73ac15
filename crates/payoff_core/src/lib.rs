//! # payoff_core: Piecewise Payoff Evaluation
//!
//! ## Foundation Layer Role
//!
//! payoff_core is the bottom layer of the workspace, providing:
//! - Evenly spaced sample grids and tick sequences (`math::domain`)
//! - Evaluation rules, segments and sample sets (`payoff`)
//! - The log-option payoff and its continuity checks (`payoff::log_option`)
//! - Error type: `PayoffError` (`types::error`)
//!
//! ## Minimal Dependencies
//!
//! No dependency on the chart or service crates:
//! - num-traits: Generic floating-point grids and rules
//! - thiserror: Error derivation
//! - tracing: Debug-level instrumentation of sampling
//! - serde: Serialisation support (optional, default on)
//!
//! ## Usage Examples
//!
//! ```rust
//! use payoff_core::math::domain::{generate_domain, Endpoint};
//! use payoff_core::payoff::{EvaluationRule, LogOptionPayoff};
//!
//! // Linear leg sampled on [0, e)
//! let xs = generate_domain(0.0, std::f64::consts::E, 200, Endpoint::Excluded).unwrap();
//! let ys = EvaluationRule::inverse_e_linear().evaluate(&xs).unwrap();
//! assert_eq!(ys[0], 0.0);
//! # assert!((ys[199] - 0.995).abs() < 1e-12);
//!
//! // Whole payoff, three legs left to right
//! let sets = LogOptionPayoff::default().sample().unwrap();
//! assert_eq!(sets.iter().map(|s| s.len()).sum::<usize>(), 900);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` (default): Enable serialisation for rules, segments, sample sets and errors

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod math;
pub mod payoff;
pub mod types;
