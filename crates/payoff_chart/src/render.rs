//! Plotters rendering.
//!
//! The output format follows the file extension: `.png` goes through
//! `BitMapBackend`, `.svg` through `SVGBackend`. Both share one drawing
//! routine generic over the backend.
//!
//! Axis ticks are placed at exactly the positions resolved in
//! [`ChartLayout`], so tick marks and labels are drawn here rather than
//! through plotters' automatic mesh.

use std::path::Path;

use payoff_core::payoff::SampleSet;
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use plotters::style::FontTransform;
use tracing::{debug, info};

use crate::config::{Orientation, PlotConfig, Rgb};
use crate::error::ChartError;
use crate::layout::{format_tick, ChartLayout};

const MARGIN: u32 = 15;
const X_LABEL_AREA: u32 = 45;
const Y_LABEL_AREA: u32 = 55;
const TICK_LENGTH: i32 = 5;
const TICK_LABEL_GAP: i32 = 3;
const TICK_FONT_SIZE: f64 = 12.0;

/// Image format selected from the output path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Raster PNG
    Png,
    /// Vector SVG
    Svg,
}

impl OutputFormat {
    /// Detect the format from a file extension (case-insensitive).
    pub fn from_path(path: &Path) -> Result<Self, ChartError> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase());

        match extension.as_deref() {
            Some("png") => Ok(OutputFormat::Png),
            Some("svg") => Ok(OutputFormat::Svg),
            _ => Err(ChartError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

impl From<Rgb> for RGBColor {
    fn from(rgb: Rgb) -> Self {
        RGBColor(rgb.0, rgb.1, rgb.2)
    }
}

/// Draw `series` with `config` and write the image to `output`.
///
/// Returns the resolved layout that was drawn.
pub fn render(
    series: &[SampleSet<f64>],
    config: &PlotConfig,
    output: &Path,
) -> Result<ChartLayout, ChartError> {
    let layout = ChartLayout::resolve(config, series)?;
    render_layout(&layout, output)?;
    Ok(layout)
}

/// Draw an already-resolved layout to `output`.
pub fn render_layout(layout: &ChartLayout, output: &Path) -> Result<(), ChartError> {
    let format = OutputFormat::from_path(output)?;

    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }

    debug!(?format, path = %output.display(), "Rendering chart");

    match format {
        OutputFormat::Png => {
            let root = BitMapBackend::new(output, layout.size).into_drawing_area();
            draw(&root, layout)?;
            root.present().map_err(ChartError::drawing)?;
        }
        OutputFormat::Svg => {
            let root = SVGBackend::new(output, layout.size).into_drawing_area();
            draw(&root, layout)?;
            root.present().map_err(ChartError::drawing)?;
        }
    }

    info!(
        path = %output.display(),
        points = layout.point_count(),
        "Chart written"
    );
    Ok(())
}

fn draw<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    layout: &ChartLayout,
) -> Result<(), ChartError> {
    root.fill(&WHITE).map_err(ChartError::drawing)?;

    let (x_min, x_max) = layout.x_limits;
    let (y_min, y_max) = layout.y_limits;

    let mut chart = ChartBuilder::on(root)
        .caption(&layout.title, ("sans-serif", layout.title_font_size).into_font())
        .margin(MARGIN)
        .x_label_area_size(X_LABEL_AREA)
        .y_label_area_size(Y_LABEL_AREA)
        .build_cartesian_2d(x_min..x_max, y_min..y_max)
        .map_err(ChartError::drawing)?;

    if let Some(grid) = layout.grid {
        let style = RGBColor::from(grid.color).stroke_width(grid.line_width);
        let vertical = layout.x_ticks.iter().map(|&x| vec![(x, y_min), (x, y_max)]);
        let horizontal = layout.y_ticks.iter().map(|&y| vec![(x_min, y), (x_max, y)]);

        for line in vertical.chain(horizontal) {
            if grid.dashed {
                chart
                    .draw_series(DashedLineSeries::new(
                        line,
                        grid.dash_length,
                        grid.dash_spacing,
                        style,
                    ))
                    .map_err(ChartError::drawing)?;
            } else {
                chart
                    .draw_series(LineSeries::new(line, style))
                    .map_err(ChartError::drawing)?;
            }
        }
    }

    let reference_style = RGBColor::from(layout.reference_color).stroke_width(layout.reference_width);
    for line in &layout.reference_lines {
        let points = match line.orientation {
            Orientation::Vertical => vec![(line.at, y_min), (line.at, y_max)],
            Orientation::Horizontal => vec![(x_min, line.at), (x_max, line.at)],
        };
        chart
            .draw_series(LineSeries::new(points, reference_style))
            .map_err(ChartError::drawing)?;
    }

    let curve_style = RGBColor::from(layout.curve_color).stroke_width(layout.curve_width);
    for (index, samples) in layout.series.iter().enumerate() {
        chart
            .draw_series(LineSeries::new(samples.points(), curve_style))
            .map_err(ChartError::drawing)?;
        debug!(segment = index, points = samples.len(), "Series drawn");
    }

    // Frame, ticks and labels, in pixel space around the plotting area.
    chart
        .plotting_area()
        .draw(&Rectangle::new(
            [(x_min, y_min), (x_max, y_max)],
            BLACK.stroke_width(1),
        ))
        .map_err(ChartError::drawing)?;

    let axis_style = BLACK.stroke_width(1);
    let tick_font = ("sans-serif", TICK_FONT_SIZE).into_font();
    let below = TextStyle::from(tick_font.clone()).pos(Pos::new(HPos::Center, VPos::Top));
    let left_of = TextStyle::from(tick_font).pos(Pos::new(HPos::Right, VPos::Center));

    for &x in &layout.x_ticks {
        let (px, py) = chart.backend_coord(&(x, y_min));
        root.draw(&PathElement::new(
            vec![(px, py), (px, py + TICK_LENGTH)],
            axis_style,
        ))
        .map_err(ChartError::drawing)?;
        root.draw_text(
            &format_tick(&x),
            &below,
            (px, py + TICK_LENGTH + TICK_LABEL_GAP),
        )
        .map_err(ChartError::drawing)?;
    }

    for &y in &layout.y_ticks {
        let (px, py) = chart.backend_coord(&(x_min, y));
        root.draw(&PathElement::new(
            vec![(px - TICK_LENGTH, py), (px, py)],
            axis_style,
        ))
        .map_err(ChartError::drawing)?;
        root.draw_text(
            &format_tick(&y),
            &left_of,
            (px - TICK_LENGTH - TICK_LABEL_GAP, py),
        )
        .map_err(ChartError::drawing)?;
    }

    let (left, bottom) = chart.backend_coord(&(x_min, y_min));
    let (right, top) = chart.backend_coord(&(x_max, y_max));
    let desc_font = ("sans-serif", layout.label_font_size).into_font();

    root.draw_text(
        &layout.x_label,
        &TextStyle::from(desc_font.clone()).pos(Pos::new(HPos::Center, VPos::Bottom)),
        ((left + right) / 2, bottom + X_LABEL_AREA as i32),
    )
    .map_err(ChartError::drawing)?;
    root.draw_text(
        &layout.y_label,
        &TextStyle::from(desc_font)
            .transform(FontTransform::Rotate270)
            .pos(Pos::new(HPos::Center, VPos::Top)),
        (left - Y_LABEL_AREA as i32, (top + bottom) / 2),
    )
    .map_err(ChartError::drawing)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::BTreeSet;
    use std::convert::Infallible;
    use std::path::PathBuf;
    use std::rc::Rc;

    use payoff_core::payoff::LogOptionPayoff;
    use plotters_backend::{
        BackendColor, BackendCoord, BackendStyle, BackendTextStyle, DrawingErrorKind,
    };

    #[derive(Debug, Default)]
    struct Recording {
        paths: Vec<(Rgb, Vec<BackendCoord>)>,
        texts: Vec<String>,
    }

    /// Backend that keeps paths and text instead of rasterising, so no
    /// font is needed.
    struct RecordingBackend {
        size: (u32, u32),
        recording: Rc<RefCell<Recording>>,
    }

    impl DrawingBackend for RecordingBackend {
        type ErrorType = Infallible;

        fn get_size(&self) -> (u32, u32) {
            self.size
        }

        fn ensure_prepared(&mut self) -> Result<(), DrawingErrorKind<Infallible>> {
            Ok(())
        }

        fn present(&mut self) -> Result<(), DrawingErrorKind<Infallible>> {
            Ok(())
        }

        fn draw_pixel(
            &mut self,
            _point: BackendCoord,
            _color: BackendColor,
        ) -> Result<(), DrawingErrorKind<Infallible>> {
            Ok(())
        }

        fn draw_rect<S: BackendStyle>(
            &mut self,
            _upper_left: BackendCoord,
            _bottom_right: BackendCoord,
            _style: &S,
            _fill: bool,
        ) -> Result<(), DrawingErrorKind<Infallible>> {
            Ok(())
        }

        fn draw_path<S: BackendStyle, I: IntoIterator<Item = BackendCoord>>(
            &mut self,
            path: I,
            style: &S,
        ) -> Result<(), DrawingErrorKind<Infallible>> {
            let (r, g, b) = style.color().rgb;
            self.recording
                .borrow_mut()
                .paths
                .push((Rgb(r, g, b), path.into_iter().collect()));
            Ok(())
        }

        fn draw_text<TStyle: BackendTextStyle>(
            &mut self,
            text: &str,
            _style: &TStyle,
            _pos: BackendCoord,
        ) -> Result<(), DrawingErrorKind<Infallible>> {
            self.recording.borrow_mut().texts.push(text.to_string());
            Ok(())
        }

        fn estimate_text_size<TStyle: BackendTextStyle>(
            &self,
            text: &str,
            _style: &TStyle,
        ) -> Result<(u32, u32), DrawingErrorKind<Infallible>> {
            Ok((text.len() as u32 * 7, 12))
        }
    }

    fn record_default_chart() -> Recording {
        let series = LogOptionPayoff::default().sample().unwrap();
        let layout = ChartLayout::resolve(&PlotConfig::default(), &series).unwrap();

        let recording = Rc::new(RefCell::new(Recording::default()));
        let backend = RecordingBackend {
            size: layout.size,
            recording: Rc::clone(&recording),
        };
        let root = backend.into_drawing_area();
        draw(&root, &layout).unwrap();
        root.present().unwrap();

        recording.take()
    }

    fn paths_in(recording: &Recording, color: Rgb) -> Vec<&Vec<BackendCoord>> {
        recording
            .paths
            .iter()
            .filter(|(c, _)| *c == color)
            .map(|(_, points)| points)
            .collect()
    }

    #[test]
    fn test_draw_three_blue_curves() {
        let recording = record_default_chart();
        let lengths: Vec<usize> = paths_in(&recording, Rgb::BLUE)
            .iter()
            .map(|points| points.len())
            .collect();
        assert_eq!(lengths, vec![400, 200, 300]);
    }

    #[test]
    fn test_draw_two_black_reference_lines() {
        let recording = record_default_chart();

        // Tick marks are black too, but only TICK_LENGTH pixels long.
        let long_lines: Vec<_> = paths_in(&recording, Rgb::BLACK)
            .into_iter()
            .filter(|points| points.len() == 2)
            .filter(|points| {
                let (a, b) = (points[0], points[1]);
                (a.0 - b.0).abs().max((a.1 - b.1).abs()) > 100
            })
            .collect();

        assert_eq!(long_lines.len(), 2);
        assert!(long_lines.iter().any(|p| p[0].0 == p[1].0));
        assert!(long_lines.iter().any(|p| p[0].1 == p[1].1));
    }

    #[test]
    fn test_draw_dashed_grid_on_every_tick() {
        let recording = record_default_chart();
        let dashes = paths_in(&recording, Rgb::GRID_GREY);

        let mut columns = BTreeSet::new();
        let mut rows = BTreeSet::new();
        for points in &dashes {
            let (Some(&first), Some(&last)) = (points.first(), points.last()) else {
                continue;
            };
            if first.0 == last.0 && first.1 != last.1 {
                columns.insert(first.0);
            } else if first.1 == last.1 && first.0 != last.0 {
                rows.insert(first.1);
            }
        }

        assert_eq!(columns.len(), 21);
        assert_eq!(rows.len(), 20);
        // Dashed lines arrive as many short pieces, not one path per line.
        assert!(dashes.len() > 21 + 20);
    }

    #[test]
    fn test_draw_title_labels_and_tick_text() {
        let recording = record_default_chart();
        let texts = &recording.texts;

        for expected in ["Log-Option Contract", "x", "f(x)", "-20", "20", "-5", "4.5", "0"] {
            assert!(texts.iter().any(|t| t == expected), "missing {:?}", expected);
        }
        assert!(!texts.iter().any(|t| t == "5"));
    }

    #[test]
    fn test_output_format_from_extension() {
        assert_eq!(
            OutputFormat::from_path(Path::new("chart.png")).unwrap(),
            OutputFormat::Png
        );
        assert_eq!(
            OutputFormat::from_path(Path::new("out/chart.SVG")).unwrap(),
            OutputFormat::Svg
        );
    }

    #[test]
    fn test_output_format_rejects_unknown() {
        assert!(matches!(
            OutputFormat::from_path(Path::new("chart.bmp")),
            Err(ChartError::UnsupportedFormat(_))
        ));
        assert!(OutputFormat::from_path(&PathBuf::from("chart")).is_err());
    }

    #[test]
    fn test_render_rejects_unknown_format_before_drawing() {
        let series = vec![SampleSet::new(vec![0.0, 1.0], vec![0.0, 1.0]).unwrap()];
        let result = render(&series, &PlotConfig::default(), Path::new("chart.gif"));
        assert!(matches!(result, Err(ChartError::UnsupportedFormat(_))));
    }

    #[test]
    fn test_rgb_conversion() {
        let color: RGBColor = Rgb::BLUE.into();
        assert_eq!(color, RGBColor(0, 0, 255));
    }
}
