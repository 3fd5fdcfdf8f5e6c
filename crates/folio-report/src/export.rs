//! CSV and JSON export of analysis data.

use folio_analytics::{PerformanceMetrics, ReturnSeries};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Write;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur during export operations.
#[derive(Debug, Error)]
pub enum ExportError {
    /// CSV serialization error.
    #[error("CSV serialization error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization error.
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Unrecognized output format.
    #[error("Invalid format: {0}")]
    InvalidFormat(String),
}

/// Export format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// Comma-separated values format.
    Csv,

    /// Compact JSON format.
    Json,

    /// Pretty-printed JSON format.
    PrettyJson,
}

impl ExportFormat {
    /// Get the file extension for this format.
    pub const fn extension(&self) -> &str {
        match self {
            Self::Csv => "csv",
            Self::Json | Self::PrettyJson => "json",
        }
    }

    /// Infer a format from a path's extension.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::InvalidFormat`] for anything but `csv`/`json`.
    pub fn from_path(path: &Path) -> Result<Self, ExportError> {
        match path.extension().and_then(|e| e.to_str()) {
            Some("csv") => Ok(Self::Csv),
            Some("json") => Ok(Self::Json),
            other => Err(ExportError::InvalidFormat(
                other.unwrap_or("<none>").to_string(),
            )),
        }
    }
}

/// One return observation flattened for CSV export.
#[derive(Debug, Serialize, Deserialize)]
struct ReturnRecord {
    date: String,
    portfolio_return: f64,
}

/// Trait for exporting data in various formats.
pub trait Exporter {
    /// Export data to a string in the specified format.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    fn export_to_string(&self, format: ExportFormat) -> Result<String, ExportError>;

    /// Export data to a file in the specified format.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or file writing fails.
    fn export_to_file(&self, path: &Path, format: ExportFormat) -> Result<(), ExportError> {
        let content = self.export_to_string(format)?;
        let mut file = File::create(path)?;
        file.write_all(content.as_bytes())?;
        Ok(())
    }
}

impl Exporter for ReturnSeries {
    fn export_to_string(&self, format: ExportFormat) -> Result<String, ExportError> {
        match format {
            ExportFormat::Csv => {
                let mut wtr = csv::Writer::from_writer(vec![]);
                for (date, value) in self.iter() {
                    wtr.serialize(ReturnRecord {
                        date: date.to_string(),
                        portfolio_return: value,
                    })?;
                }
                let bytes = wtr.into_inner().map_err(|e| e.into_error())?;
                Ok(String::from_utf8_lossy(&bytes).into_owned())
            }
            ExportFormat::Json => Ok(serde_json::to_string(self)?),
            ExportFormat::PrettyJson => Ok(serde_json::to_string_pretty(self)?),
        }
    }
}

impl Exporter for PerformanceMetrics {
    fn export_to_string(&self, format: ExportFormat) -> Result<String, ExportError> {
        match format {
            ExportFormat::Csv => {
                let mut wtr = csv::Writer::from_writer(vec![]);
                wtr.serialize(self)?;
                let bytes = wtr.into_inner().map_err(|e| e.into_error())?;
                Ok(String::from_utf8_lossy(&bytes).into_owned())
            }
            ExportFormat::Json => Ok(serde_json::to_string(self)?),
            ExportFormat::PrettyJson => Ok(serde_json::to_string_pretty(self)?),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use folio_analytics::compute_metrics;

    fn sample_series() -> ReturnSeries {
        ReturnSeries::new(
            vec![
                NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
                NaiveDate::from_ymd_opt(2024, 1, 3).unwrap(),
            ],
            vec![0.01, -0.02],
        )
        .unwrap()
    }

    #[test]
    fn test_series_export_csv() {
        let csv = sample_series().export_to_string(ExportFormat::Csv).unwrap();

        assert!(csv.contains("date,portfolio_return"));
        assert!(csv.contains("2024-01-02,0.01"));
        assert!(csv.contains("2024-01-03,-0.02"));
    }

    #[test]
    fn test_series_export_json_round_trip() {
        let series = sample_series();
        let json = series.export_to_string(ExportFormat::Json).unwrap();

        let parsed: ReturnSeries = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, series);
    }

    #[test]
    fn test_metrics_export_csv_header() {
        let metrics = compute_metrics(&sample_series());
        let csv = metrics.export_to_string(ExportFormat::Csv).unwrap();

        assert!(csv.contains("total_return"));
        assert!(csv.contains("sharpe"));
        assert!(csv.contains("max_drawdown"));
    }

    #[test]
    fn test_format_from_path() {
        assert_eq!(
            ExportFormat::from_path(Path::new("out.csv")).unwrap(),
            ExportFormat::Csv
        );
        assert_eq!(
            ExportFormat::from_path(Path::new("out.json")).unwrap(),
            ExportFormat::Json
        );
        assert!(ExportFormat::from_path(Path::new("out.txt")).is_err());
    }

    #[test]
    fn test_export_to_file() {
        use std::io::Read;

        let path = std::env::temp_dir().join(format!(
            "folio-export-series-{}.csv",
            std::process::id()
        ));

        sample_series()
            .export_to_file(&path, ExportFormat::Csv)
            .unwrap();

        let mut content = String::new();
        File::open(&path)
            .unwrap()
            .read_to_string(&mut content)
            .unwrap();
        assert!(content.contains("portfolio_return"));

        std::fs::remove_file(path).ok();
    }
}
