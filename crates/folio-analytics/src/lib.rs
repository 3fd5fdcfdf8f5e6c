#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/foliolabs/folio/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod aggregate;
pub mod metrics;
pub mod result;
pub mod returns;
pub mod series;

pub use aggregate::{MonthlyTable, cumulative_returns, eoy_returns, monthly_returns};
pub use metrics::{PerformanceMetrics, compute_metrics};
pub use result::{AnalysisPeriod, AnalyticsResult};
pub use returns::{daily_returns, portfolio_returns};
pub use series::{AnalyticsError, Result, ReturnSeries};

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
