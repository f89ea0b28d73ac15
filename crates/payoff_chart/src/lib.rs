//! # payoff_chart: Payoff Curve Rendering
//!
//! Presentation layer on top of `payoff_core`:
//! - `config`: every visual parameter of the chart (`PlotConfig`)
//! - `layout`: configuration resolved into concrete ticks, lines and series
//! - `render`: plotters drawing to PNG or SVG
//!
//! ## Usage Examples
//!
//! ```rust
//! use payoff_chart::config::PlotConfig;
//! use payoff_chart::layout::{ChartLayout, FeatureFamily};
//! use payoff_core::payoff::LogOptionPayoff;
//!
//! let series = LogOptionPayoff::default().sample().unwrap();
//! let layout = ChartLayout::resolve(&PlotConfig::default(), &series).unwrap();
//!
//! assert_eq!(layout.x_limits, (-20.0, 20.0));
//! assert_eq!(layout.y_limits, (-5.0, 5.0));
//! assert_eq!(layout.features().len(), 5);
//! ```

#![deny(missing_docs)]

pub mod config;
pub mod error;
pub mod layout;
pub mod render;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::config::{AxisLimits, GridStyle, PlotConfig, ReferenceLine, Rgb, TickSpec};
    pub use crate::error::ChartError;
    pub use crate::layout::{ChartLayout, FeatureFamily};
    pub use crate::render::{render, render_layout, OutputFormat};
}
