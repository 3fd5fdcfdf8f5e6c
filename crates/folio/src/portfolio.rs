//! Portfolio construction and weight normalization.
//!
//! A [`Portfolio`] pairs a ticker selection with per-ticker weights. The two
//! user-facing input errors (empty selection, ticker/weight count mismatch)
//! are rejected at construction; all accepted weights are normalized to sum
//! to one unless the raw sum is already zero or one.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Tolerance used when comparing a weight sum against 0 and 1.
///
/// The sum is almost never exactly 1.0 after slider-style rounding, so the
/// "already normalized" check uses a tolerance instead of float equality.
const NORMALIZATION_TOLERANCE: f64 = 1e-9;

/// Errors raised while collecting portfolio inputs.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PortfolioError {
    /// No tickers were selected.
    #[error("no tickers selected: pick at least one stock")]
    NoTickersSelected,

    /// Ticker and weight counts differ.
    #[error("tickers and weights mismatch: {tickers} tickers vs {weights} weights")]
    WeightCountMismatch {
        /// Number of selected tickers.
        tickers: usize,
        /// Number of supplied weights.
        weights: usize,
    },
}

/// A single position in a portfolio.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Holding {
    /// Ticker symbol.
    pub symbol: String,

    /// Normalized weight in [0, 1].
    pub weight: f64,
}

impl Holding {
    /// Create a new holding.
    pub const fn new(symbol: String, weight: f64) -> Self {
        Self { symbol, weight }
    }
}

/// A weighted selection of tickers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Portfolio {
    holdings: Vec<Holding>,
}

impl Portfolio {
    /// Build a portfolio from a ticker selection and raw weights.
    ///
    /// Weights are divided by their sum unless the sum is within tolerance
    /// of 0 or of 1.
    ///
    /// # Errors
    ///
    /// Returns [`PortfolioError::NoTickersSelected`] for an empty selection
    /// and [`PortfolioError::WeightCountMismatch`] when the counts differ.
    ///
    /// # Examples
    ///
    /// ```
    /// use folio::Portfolio;
    ///
    /// let portfolio = Portfolio::new(
    ///     vec!["RELIANCE.NS".to_string(), "TCS.NS".to_string()],
    ///     vec![0.6, 0.6],
    /// )
    /// .unwrap();
    ///
    /// assert_eq!(portfolio.weights(), vec![0.5, 0.5]);
    /// ```
    pub fn new(tickers: Vec<String>, weights: Vec<f64>) -> Result<Self, PortfolioError> {
        if tickers.is_empty() {
            return Err(PortfolioError::NoTickersSelected);
        }

        if tickers.len() != weights.len() {
            return Err(PortfolioError::WeightCountMismatch {
                tickers: tickers.len(),
                weights: weights.len(),
            });
        }

        let total: f64 = weights.iter().sum();
        let normalized: Vec<f64> =
            if total.abs() > NORMALIZATION_TOLERANCE && (total - 1.0).abs() > NORMALIZATION_TOLERANCE {
                weights.iter().map(|w| w / total).collect()
            } else {
                weights
            };

        let holdings = tickers
            .into_iter()
            .zip(normalized)
            .map(|(symbol, weight)| Holding::new(symbol, weight))
            .collect();

        Ok(Self { holdings })
    }

    /// Build an equal-weighted portfolio.
    ///
    /// Each raw weight is `1 / N` rounded to two decimals, matching the
    /// slider default; rounding drift is absorbed by normalization.
    ///
    /// # Errors
    ///
    /// Returns [`PortfolioError::NoTickersSelected`] for an empty selection.
    pub fn equal_weighted(tickers: Vec<String>) -> Result<Self, PortfolioError> {
        if tickers.is_empty() {
            return Err(PortfolioError::NoTickersSelected);
        }

        let raw = (1.0 / tickers.len() as f64 * 100.0).round() / 100.0;
        let weights = vec![raw; tickers.len()];
        Self::new(tickers, weights)
    }

    /// Get all holdings.
    pub fn holdings(&self) -> &[Holding] {
        &self.holdings
    }

    /// Get all ticker symbols.
    pub fn symbols(&self) -> Vec<String> {
        self.holdings.iter().map(|h| h.symbol.clone()).collect()
    }

    /// Get the normalized weight vector.
    pub fn weights(&self) -> Vec<f64> {
        self.holdings.iter().map(|h| h.weight).collect()
    }

    /// Number of holdings.
    pub fn len(&self) -> usize {
        self.holdings.len()
    }

    /// Whether the portfolio has no holdings.
    pub fn is_empty(&self) -> bool {
        self.holdings.is_empty()
    }

    /// Sum of all weights (1.0 after normalization, unless the raw sum was 0).
    pub fn total_weight(&self) -> f64 {
        self.holdings.iter().map(|h| h.weight).sum()
    }
}
