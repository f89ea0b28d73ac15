//! Resolved chart layout.
//!
//! [`ChartLayout`] turns a [`PlotConfig`] plus evaluated sample sets into the
//! concrete values a backend draws: limits, tick vectors, reference lines,
//! grid and series. It has no plotters dependency, so everything the chart
//! will show can be asserted without rasterising anything.

use std::collections::BTreeSet;

use payoff_core::math::domain::arange;
use payoff_core::payoff::SampleSet;
use tracing::debug;

use crate::config::{GridStyle, Orientation, PlotConfig, ReferenceLine, Rgb};
use crate::error::ChartError;

/// Distinct families of axis decorations present on a chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FeatureFamily {
    /// Labelled x-axis ticks
    XTicks,
    /// Labelled y-axis ticks
    YTicks,
    /// At least one vertical reference line
    VerticalReference,
    /// At least one horizontal reference line
    HorizontalReference,
    /// Grid lines
    Grid,
}

/// Everything needed to draw the chart, with ticks already generated.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartLayout {
    /// Chart title
    pub title: String,
    /// Title font size
    pub title_font_size: f64,
    /// X-axis description
    pub x_label: String,
    /// Y-axis description
    pub y_label: String,
    /// Axis description font size
    pub label_font_size: f64,
    /// Visible x range
    pub x_limits: (f64, f64),
    /// Visible y range
    pub y_limits: (f64, f64),
    /// X tick positions within the x range
    pub x_ticks: Vec<f64>,
    /// Y tick positions within the y range
    pub y_ticks: Vec<f64>,
    /// Grid style, `None` when disabled
    pub grid: Option<GridStyle>,
    /// Solid reference lines
    pub reference_lines: Vec<ReferenceLine>,
    /// Reference line colour
    pub reference_color: Rgb,
    /// Reference line width
    pub reference_width: u32,
    /// Curve segments in draw order
    pub series: Vec<SampleSet<f64>>,
    /// Shared curve colour
    pub curve_color: Rgb,
    /// Curve stroke width
    pub curve_width: u32,
    /// Image size
    pub size: (u32, u32),
}

impl ChartLayout {
    /// Resolve a configuration against the sample sets to plot.
    ///
    /// Ticks are generated with `arange` semantics and then restricted to
    /// the axis limits.
    pub fn resolve(config: &PlotConfig, series: &[SampleSet<f64>]) -> Result<Self, ChartError> {
        config.validate()?;

        let x_ticks: Vec<f64> = arange(config.x_ticks.start, config.x_ticks.stop, config.x_ticks.step)?
            .into_iter()
            .filter(|&t| config.x_limits.contains(t))
            .collect();
        let y_ticks: Vec<f64> = arange(config.y_ticks.start, config.y_ticks.stop, config.y_ticks.step)?
            .into_iter()
            .filter(|&t| config.y_limits.contains(t))
            .collect();

        debug!(
            x_ticks = x_ticks.len(),
            y_ticks = y_ticks.len(),
            series = series.len(),
            "Chart layout resolved"
        );

        Ok(Self {
            title: config.title.clone(),
            title_font_size: config.title_font_size,
            x_label: config.x_label.clone(),
            y_label: config.y_label.clone(),
            label_font_size: config.label_font_size,
            x_limits: config.x_limits.as_tuple(),
            y_limits: config.y_limits.as_tuple(),
            x_ticks,
            y_ticks,
            grid: config.grid.enabled.then_some(config.grid),
            reference_lines: config.reference_lines.clone(),
            reference_color: config.reference_color,
            reference_width: config.reference_width,
            series: series.to_vec(),
            curve_color: config.curve_color,
            curve_width: config.curve_width,
            size: config.size(),
        })
    }

    /// Decoration families that will appear on the chart.
    pub fn features(&self) -> BTreeSet<FeatureFamily> {
        let mut features = BTreeSet::new();
        if !self.x_ticks.is_empty() {
            features.insert(FeatureFamily::XTicks);
        }
        if !self.y_ticks.is_empty() {
            features.insert(FeatureFamily::YTicks);
        }
        for line in &self.reference_lines {
            features.insert(match line.orientation {
                Orientation::Vertical => FeatureFamily::VerticalReference,
                Orientation::Horizontal => FeatureFamily::HorizontalReference,
            });
        }
        if self.grid.is_some() {
            features.insert(FeatureFamily::Grid);
        }
        features
    }

    /// Total number of plotted points across all series.
    pub fn point_count(&self) -> usize {
        self.series.iter().map(SampleSet::len).sum()
    }
}

/// Tick label text: integers without a decimal point, `-0` printed as `0`.
pub fn format_tick(value: &f64) -> String {
    if *value == 0.0 {
        "0".to_string()
    } else {
        format!("{}", value)
    }
}
