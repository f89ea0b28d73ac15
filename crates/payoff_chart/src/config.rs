//! Plot configuration.
//!
//! Every visual parameter of the payoff chart lives in [`PlotConfig`]. The
//! defaults reproduce the log-option chart exactly; all fields can be
//! overridden from a TOML `[plot]` table.

use serde::{Deserialize, Serialize};

use crate::error::ChartError;

/// 8-bit RGB colour, written as `[r, g, b]` in TOML.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Pure blue, the curve colour.
    pub const BLUE: Rgb = Rgb(0, 0, 255);
    /// Black, used for reference lines.
    pub const BLACK: Rgb = Rgb(0, 0, 0);
    /// Light grey, used for the grid.
    pub const GRID_GREY: Rgb = Rgb(176, 176, 176);
}

/// Closed axis interval `[min, max]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisLimits {
    /// Lower bound
    pub min: f64,
    /// Upper bound
    pub max: f64,
}

impl AxisLimits {
    /// Create axis limits
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Limits as a `(min, max)` tuple.
    pub fn as_tuple(&self) -> (f64, f64) {
        (self.min, self.max)
    }

    /// Returns `true` if `v` lies within the limits.
    pub fn contains(&self, v: f64) -> bool {
        v >= self.min && v <= self.max
    }
}

/// Tick positions `start, start + step, ...` stopping before `stop`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TickSpec {
    /// First tick
    pub start: f64,
    /// Exclusive upper bound
    pub stop: f64,
    /// Distance between ticks
    pub step: f64,
}

impl TickSpec {
    /// Create a tick specification
    pub const fn new(start: f64, stop: f64, step: f64) -> Self {
        Self { start, stop, step }
    }
}

/// Grid line style.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridStyle {
    /// Whether grid lines are drawn at all
    pub enabled: bool,
    /// Dashed when `true`, solid otherwise
    pub dashed: bool,
    /// Stroke width in pixels
    pub line_width: u32,
    /// Dash length in pixels
    pub dash_length: u32,
    /// Gap between dashes in pixels
    pub dash_spacing: u32,
    /// Line colour
    pub color: Rgb,
}

impl Default for GridStyle {
    fn default() -> Self {
        Self {
            enabled: true,
            dashed: true,
            line_width: 1,
            dash_length: 4,
            dash_spacing: 3,
            color: Rgb::GRID_GREY,
        }
    }
}

/// Orientation of a reference line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    /// Line at constant `x`
    Vertical,
    /// Line at constant `y`
    Horizontal,
}

/// Solid axis reference line.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReferenceLine {
    /// Vertical or horizontal
    pub orientation: Orientation,
    /// Coordinate on the perpendicular axis
    pub at: f64,
}

impl ReferenceLine {
    /// Vertical line `x = at`
    pub const fn vertical(at: f64) -> Self {
        Self {
            orientation: Orientation::Vertical,
            at,
        }
    }

    /// Horizontal line `y = at`
    pub const fn horizontal(at: f64) -> Self {
        Self {
            orientation: Orientation::Horizontal,
            at,
        }
    }
}

/// Chart configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlotConfig {
    /// Chart title
    pub title: String,
    /// Title font size in pixels
    pub title_font_size: f64,
    /// X-axis description
    pub x_label: String,
    /// Y-axis description
    pub y_label: String,
    /// Axis description font size in pixels
    pub label_font_size: f64,
    /// Visible x range
    pub x_limits: AxisLimits,
    /// Visible y range
    pub y_limits: AxisLimits,
    /// X tick positions
    pub x_ticks: TickSpec,
    /// Y tick positions
    pub y_ticks: TickSpec,
    /// Grid style
    pub grid: GridStyle,
    /// Solid axis reference lines
    pub reference_lines: Vec<ReferenceLine>,
    /// Reference line colour
    pub reference_color: Rgb,
    /// Reference line width in pixels
    pub reference_width: u32,
    /// Colour shared by every curve segment
    pub curve_color: Rgb,
    /// Curve stroke width in pixels
    pub curve_width: u32,
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            title: "Log-Option Contract".to_string(),
            title_font_size: 20.0,
            x_label: "x".to_string(),
            y_label: "f(x)".to_string(),
            label_font_size: 16.0,
            x_limits: AxisLimits::new(-20.0, 20.0),
            y_limits: AxisLimits::new(-5.0, 5.0),
            // Stop is exclusive: 21 keeps the tick at 20, while 5 drops the tick at 5.
            x_ticks: TickSpec::new(-20.0, 21.0, 2.0),
            y_ticks: TickSpec::new(-5.0, 5.0, 0.5),
            grid: GridStyle::default(),
            reference_lines: vec![ReferenceLine::horizontal(0.0), ReferenceLine::vertical(0.0)],
            reference_color: Rgb::BLACK,
            reference_width: 1,
            curve_color: Rgb::BLUE,
            curve_width: 2,
            width: 800,
            height: 600,
        }
    }
}

impl PlotConfig {
    /// Image size as `(width, height)`.
    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Validate the configuration, collecting every problem found.
    pub fn validate(&self) -> Result<(), ChartError> {
        let mut errors = Vec::new();

        for (name, limits) in [("x_limits", self.x_limits), ("y_limits", self.y_limits)] {
            if !limits.min.is_finite() || !limits.max.is_finite() || limits.min >= limits.max {
                errors.push(format!(
                    "{} must be finite with min < max, got [{}, {}]",
                    name, limits.min, limits.max
                ));
            }
        }

        for (name, ticks) in [("x_ticks", self.x_ticks), ("y_ticks", self.y_ticks)] {
            if !ticks.step.is_finite() || ticks.step <= 0.0 {
                errors.push(format!("{} step must be positive, got {}", name, ticks.step));
            }
        }

        if self.width == 0 || self.height == 0 {
            errors.push(format!(
                "image size must be non-zero, got {}x{}",
                self.width, self.height
            ));
        }

        if self.title_font_size <= 0.0 || self.label_font_size <= 0.0 {
            errors.push("font sizes must be positive".to_string());
        }

        if self.grid.enabled && self.grid.dashed && self.grid.dash_length == 0 {
            errors.push("grid dash_length must be positive".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ChartError::InvalidConfig(errors.join("; ")))
        }
    }
}
