//! Sample command implementation
//!
//! Prints the evaluated payoff legs as a table, CSV or JSON.

use std::io::Write;
use std::str::FromStr;

use payoff_core::payoff::{LogOptionPayoff, SampleSet, Segment};
use serde::Serialize;
use tracing::info;

use crate::{CliError, Result};

/// Output format for sampled points
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleFormat {
    Table,
    Csv,
    Json,
}

impl FromStr for SampleFormat {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "table" => Ok(SampleFormat::Table),
            "csv" => Ok(SampleFormat::Csv),
            "json" => Ok(SampleFormat::Json),
            other => Err(CliError::InvalidArgument(format!(
                "Unknown format: {}. Supported: json, csv, table",
                other
            ))),
        }
    }
}

/// One evaluated point, tagged with its segment
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SampleRow {
    pub segment: usize,
    pub rule: &'static str,
    pub x: f64,
    pub y: f64,
}

fn rows(segments: &[Segment], series: &[SampleSet<f64>]) -> Vec<SampleRow> {
    segments
        .iter()
        .zip(series)
        .enumerate()
        .flat_map(|(index, (segment, samples))| {
            let rule = segment.rule().name();
            samples.points().map(move |(x, y)| SampleRow {
                segment: index,
                rule,
                x,
                y,
            })
        })
        .collect()
}

/// Write sampled rows in the requested format
pub fn write_rows<W: Write>(writer: &mut W, rows: &[SampleRow], format: SampleFormat) -> Result<()> {
    match format {
        SampleFormat::Table => {
            writeln!(writer, "┌─────────┬────────┬──────────────┬──────────────┐")?;
            writeln!(writer, "│ Segment │ Rule   │ x            │ f(x)         │")?;
            writeln!(writer, "├─────────┼────────┼──────────────┼──────────────┤")?;
            for row in rows {
                writeln!(
                    writer,
                    "│ {:>7} │ {:<6} │ {:>12.6} │ {:>12.6} │",
                    row.segment, row.rule, row.x, row.y
                )?;
            }
            writeln!(writer, "└─────────┴────────┴──────────────┴──────────────┘")?;
        }
        SampleFormat::Csv => {
            let mut csv_writer = csv::Writer::from_writer(&mut *writer);
            for row in rows {
                csv_writer.serialize(row)?;
            }
            csv_writer.flush()?;
        }
        SampleFormat::Json => {
            serde_json::to_writer_pretty(&mut *writer, rows)?;
            writeln!(writer)?;
        }
    }
    Ok(())
}

/// Run the sample command
pub fn run(format: &str) -> Result<()> {
    let format = SampleFormat::from_str(format)?;
    info!("Sampling payoff as {:?}", format);

    let payoff = LogOptionPayoff::default();
    let segments = payoff.segments()?;
    let series = payoff.sample()?;
    let rows = rows(&segments, &series);

    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    write_rows(&mut handle, &rows, format)?;

    info!("Wrote {} samples", rows.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_rows() -> Vec<SampleRow> {
        let payoff = LogOptionPayoff::default();
        rows(&payoff.segments().unwrap(), &payoff.sample().unwrap())
    }

    #[test]
    fn test_format_parsing() {
        assert_eq!(SampleFormat::from_str("table").unwrap(), SampleFormat::Table);
        assert_eq!(SampleFormat::from_str("csv").unwrap(), SampleFormat::Csv);
        assert_eq!(SampleFormat::from_str("json").unwrap(), SampleFormat::Json);
        assert!(matches!(
            SampleFormat::from_str("xml"),
            Err(CliError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_rows_cover_all_segments_in_order() {
        let rows = default_rows();
        assert_eq!(rows.len(), 900);
        assert_eq!(rows[0].segment, 0);
        assert_eq!(rows[0].rule, "zero");
        assert_eq!(rows[400].segment, 1);
        assert_eq!(rows[400].rule, "linear");
        assert_eq!(rows[600].segment, 2);
        assert_eq!(rows[600].rule, "log");
        assert_eq!(rows[899].x, 20.0);
    }

    #[test]
    fn test_csv_output() {
        let rows = default_rows();
        let mut buffer = Vec::new();
        write_rows(&mut buffer, &rows, SampleFormat::Csv).unwrap();

        let text = String::from_utf8(buffer).unwrap();
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("segment,rule,x,y"));
        assert_eq!(lines.next(), Some("0,zero,-20.0,0.0"));
        assert_eq!(text.lines().count(), 901);
    }

    #[test]
    fn test_json_output() {
        let rows = default_rows();
        let mut buffer = Vec::new();
        write_rows(&mut buffer, &rows[..2], SampleFormat::Json).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&buffer).unwrap();
        let array = value.as_array().unwrap();
        assert_eq!(array.len(), 2);
        assert_eq!(array[0]["rule"], "zero");
        assert_eq!(array[0]["x"], -20.0);
    }

    #[test]
    fn test_table_output() {
        let rows = default_rows();
        let mut buffer = Vec::new();
        write_rows(&mut buffer, &rows[..3], SampleFormat::Table).unwrap();

        let text = String::from_utf8(buffer).unwrap();
        assert!(text.contains("f(x)"));
        assert!(text.contains("zero"));
        assert_eq!(text.lines().count(), 3 + 4);
    }
}
