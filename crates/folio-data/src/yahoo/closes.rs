//! Daily closing prices from Yahoo Finance.

use crate::error::{DataError, Result};
use chrono::{DateTime, Utc};
use polars::prelude::*;
use yahoo_finance_api as yahoo;

/// Yahoo Finance provider for daily closing prices.
pub struct YahooCloseProvider {
    provider: yahoo::YahooConnector,
}

impl std::fmt::Debug for YahooCloseProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("YahooCloseProvider").finish_non_exhaustive()
    }
}

impl YahooCloseProvider {
    /// Create a new Yahoo Finance close-price provider.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be constructed.
    pub fn new() -> Result<Self> {
        let provider = yahoo::YahooConnector::new().map_err(DataError::from)?;
        Ok(Self { provider })
    }

    /// Fetch daily closing prices for a single symbol.
    ///
    /// # Arguments
    /// * `symbol` - The ticker symbol (e.g., "RELIANCE.NS")
    /// * `start` - Start date for the data
    /// * `end` - End date for the data
    ///
    /// # Returns
    /// A polars DataFrame with columns: date (Date), close (Float64),
    /// sorted by date.
    pub async fn fetch_closes(
        &self,
        symbol: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<DataFrame> {
        if start > end {
            return Err(DataError::InvalidDateRange {
                start: start.to_rfc3339(),
                end: end.to_rfc3339(),
            });
        }

        if symbol.is_empty() {
            return Err(DataError::InvalidSymbol("Empty symbol".to_string()));
        }

        // Convert chrono DateTime to time::OffsetDateTime
        let start_time = time::OffsetDateTime::from_unix_timestamp(start.timestamp())
            .map_err(|e| DataError::TimeConversion(e.to_string()))?;
        let end_time = time::OffsetDateTime::from_unix_timestamp(end.timestamp())
            .map_err(|e| DataError::TimeConversion(e.to_string()))?;

        let response = self
            .provider
            .get_quote_history(symbol, start_time, end_time)
            .await?;

        let quotes = response
            .quotes()
            .map_err(|e| DataError::YahooApi(e.to_string()))?;

        if quotes.is_empty() {
            return Err(DataError::MissingData {
                symbol: symbol.to_string(),
                reason: "No data returned from Yahoo Finance".to_string(),
            });
        }

        let timestamps: Vec<i64> = quotes.iter().map(|q| q.timestamp).collect();
        let closes: Vec<f64> = quotes.iter().map(|q| q.close).collect();

        let df = DataFrame::new(vec![
            Series::new("timestamp".into(), timestamps).into(),
            Series::new("close".into(), closes).into(),
        ])?;

        // Convert epoch seconds to a Date column
        let df = df
            .lazy()
            .with_column(
                (col("timestamp") * lit(1_000_000_000))
                    .cast(DataType::Datetime(TimeUnit::Nanoseconds, None))
                    .cast(DataType::Date)
                    .alias("date"),
            )
            .select(&[col("date"), col("close")])
            .sort(["date"], SortMultipleOptions::default())
            .collect()?;

        Ok(df)
    }

    /// Fetch a wide close-price table for several symbols.
    ///
    /// Per-symbol frames are inner-joined on `date`, so the table only keeps
    /// dates on which every symbol traded.
    ///
    /// # Arguments
    /// * `symbols` - List of ticker symbols
    /// * `start` - Start date for the data
    /// * `end` - End date for the data
    ///
    /// # Returns
    /// A polars DataFrame with a `date` column followed by one Float64
    /// close column per symbol, sorted by date.
    ///
    /// # Errors
    ///
    /// Any per-symbol fetch failure aborts the whole table; there is no
    /// partial result.
    pub async fn fetch_close_table(
        &self,
        symbols: &[String],
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<DataFrame> {
        if symbols.is_empty() {
            return Err(DataError::MissingData {
                symbol: "portfolio".to_string(),
                reason: "No symbols requested".to_string(),
            });
        }

        let mut table: Option<LazyFrame> = None;

        for symbol in symbols {
            let closes = self
                .fetch_closes(symbol, start, end)
                .await?
                .lazy()
                .select(&[col("date"), col("close").alias(symbol.as_str())]);

            table = Some(match table {
                Some(acc) => acc.join(
                    closes,
                    [col("date")],
                    [col("date")],
                    JoinArgs::new(JoinType::Inner),
                ),
                None => closes,
            });
        }

        let combined = table
            .ok_or_else(|| DataError::MissingData {
                symbol: "portfolio".to_string(),
                reason: "No data fetched for any symbol".to_string(),
            })?
            .sort(["date"], SortMultipleOptions::default())
            .collect()?;

        Ok(combined)
    }
}
