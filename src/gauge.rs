use std::str::FromStr;

use miette::Diagnostic;
use thiserror::Error;

/// Gauge swatches are crocheted 4 inches wide and 4 inches tall.
pub const SWATCH_INCHES: f64 = 4.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeasurementUnit {
    Inches,
}

#[derive(Debug, Error, Diagnostic, PartialEq, Eq)]
pub enum GaugeError {
    #[error("Unknown measurement unit `{0}`")]
    #[diagnostic(code(blanket::gauge::unit), help("try `inches`"))]
    UnknownUnit(String),
}

impl FromStr for MeasurementUnit {
    type Err = GaugeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "inches" => Ok(Self::Inches),
            s => Err(GaugeError::UnknownUnit(s.to_string())),
        }
    }
}

/// Stitches and rows per inch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gauge {
    pub stitches_per_inch: f64,
    pub rows_per_inch: f64,
}

impl Gauge {
    /// Measure the gauge from the stitch and row counts of a swatch.
    pub fn from_swatch(stitches: f64, rows: f64, unit: &str) -> Result<Self, GaugeError> {
        match unit.parse::<MeasurementUnit>()? {
            MeasurementUnit::Inches => Ok(Self {
                stitches_per_inch: stitches / SWATCH_INCHES,
                rows_per_inch: rows / SWATCH_INCHES,
            }),
        }
    }
}

impl From<Gauge> for (f64, f64) {
    fn from(gauge: Gauge) -> Self {
        (gauge.stitches_per_inch, gauge.rows_per_inch)
    }
}

/// Returns `None` when `unit` isn't `inches`.
pub fn calculate_crochet_gauge(stitches: f64, rows: f64, unit: &str) -> Option<Gauge> {
    Gauge::from_swatch(stitches, rows, unit).ok()
}
