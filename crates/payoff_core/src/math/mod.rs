//! Numeric utilities.
//!
//! - `domain`: evenly spaced sample grids and tick sequences

pub mod domain;

pub use domain::{arange, generate_domain, Endpoint};
