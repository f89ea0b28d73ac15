//! Shared types.
//!
//! This module provides:
//! - `error`: Structured error type for domain generation and evaluation
//!
//! # Re-exports
//!
//! [`PayoffError`] is re-exported at this module level.

pub mod error;

pub use error::PayoffError;
