//! The analytics bundle handed to front-ends.

use crate::aggregate::{MonthlyTable, cumulative_returns, eoy_returns, monthly_returns};
use crate::metrics::{PerformanceMetrics, compute_metrics};
use crate::series::ReturnSeries;
use chrono::NaiveDate;
use folio::Portfolio;
use serde::{Deserialize, Serialize};

/// Requested analysis window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisPeriod {
    /// First requested date.
    pub start: NaiveDate,
    /// Last requested date (usually today).
    pub end: NaiveDate,
}

impl AnalysisPeriod {
    /// Create a new period.
    pub const fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }
}

/// Everything a front-end needs to render one analysis run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyticsResult {
    /// The analyzed portfolio (normalized weights).
    pub portfolio: Portfolio,

    /// Requested analysis window.
    pub period: AnalysisPeriod,

    /// Daily weighted portfolio returns.
    pub returns: ReturnSeries,

    /// Headline performance metrics.
    pub metrics: PerformanceMetrics,

    /// Compounded monthly returns by calendar year.
    pub monthly: MonthlyTable,

    /// Equity curve: running product of `(1 + r)`.
    pub cumulative: Vec<(NaiveDate, f64)>,

    /// Compounded return per calendar year.
    pub eoy: Vec<(i32, f64)>,
}

impl AnalyticsResult {
    /// Derive the full bundle from a portfolio return series.
    pub fn from_returns(
        portfolio: Portfolio,
        period: AnalysisPeriod,
        returns: ReturnSeries,
    ) -> Self {
        let metrics = compute_metrics(&returns);
        let monthly = monthly_returns(&returns);
        let cumulative = cumulative_returns(&returns);
        let eoy = eoy_returns(&returns);

        Self {
            portfolio,
            period,
            returns,
            metrics,
            monthly,
            cumulative,
            eoy,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_from_returns_bundles_everything() {
        let portfolio = Portfolio::new(vec!["A".to_string()], vec![1.0]).unwrap();
        let returns = ReturnSeries::new(
            vec![date(2024, 1, 2), date(2024, 1, 3), date(2024, 1, 4)],
            vec![0.01, -0.02, 0.03],
        )
        .unwrap();
        let period = AnalysisPeriod::new(date(2024, 1, 1), date(2024, 1, 4));

        let result = AnalyticsResult::from_returns(portfolio, period, returns);

        assert_eq!(result.cumulative.len(), 3);
        assert_relative_eq!(result.cumulative[0].1, 1.01, epsilon = 1e-12);
        assert_eq!(result.eoy.len(), 1);
        assert_eq!(result.monthly.years(), &[2024]);
        assert_relative_eq!(result.metrics.max_drawdown, -0.02, epsilon = 1e-12);
    }
}
