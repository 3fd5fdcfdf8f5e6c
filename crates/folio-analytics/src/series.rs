//! Time-indexed return series and analytics errors.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type for analytics operations.
pub type Result<T> = std::result::Result<T, AnalyticsError>;

/// Errors that can occur during analytics computations.
#[derive(Debug, Error)]
pub enum AnalyticsError {
    /// The series has no observations.
    #[error("return series is empty")]
    EmptySeries,

    /// Dates and values have different lengths.
    #[error("series length mismatch: {dates} dates vs {values} values")]
    LengthMismatch {
        /// Number of dates.
        dates: usize,
        /// Number of values.
        values: usize,
    },

    /// A requested symbol is missing from the price table.
    #[error("symbol {0} missing from price table")]
    MissingSymbol(String),

    /// A value failed to parse back out of a DataFrame.
    #[error("data parsing error: {0}")]
    Parse(String),

    /// Polars error
    #[error("Polars error: {0}")]
    Polars(#[from] polars::prelude::PolarsError),
}

/// A date-sorted series of periodic returns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReturnSeries {
    dates: Vec<NaiveDate>,
    values: Vec<f64>,
}

impl ReturnSeries {
    /// Create a series from dates and matching return values.
    ///
    /// Observations are sorted by date on construction.
    ///
    /// # Errors
    ///
    /// Rejects empty input and mismatched lengths.
    pub fn new(dates: Vec<NaiveDate>, values: Vec<f64>) -> Result<Self> {
        if dates.is_empty() || values.is_empty() {
            return Err(AnalyticsError::EmptySeries);
        }

        if dates.len() != values.len() {
            return Err(AnalyticsError::LengthMismatch {
                dates: dates.len(),
                values: values.len(),
            });
        }

        let mut paired: Vec<(NaiveDate, f64)> = dates.into_iter().zip(values).collect();
        paired.sort_by_key(|(d, _)| *d);
        let (dates, values) = paired.into_iter().unzip();

        Ok(Self { dates, values })
    }

    /// Observation dates, ascending.
    pub fn dates(&self) -> &[NaiveDate] {
        &self.dates
    }

    /// Return values aligned with [`Self::dates`].
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Number of observations.
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    /// Whether the series has no observations (never true after `new`).
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// First and last observation dates.
    pub fn date_range(&self) -> Option<(NaiveDate, NaiveDate)> {
        match (self.dates.first(), self.dates.last()) {
            (Some(first), Some(last)) => Some((*first, *last)),
            _ => None,
        }
    }

    /// Iterate over `(date, value)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (NaiveDate, f64)> + '_ {
        self.dates.iter().copied().zip(self.values.iter().copied())
    }
}
