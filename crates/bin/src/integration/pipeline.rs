//! The fetch/compute pipeline behind the `analyze` command.
//!
//! One linear pass per invocation: fetch closing prices, derive daily
//! returns, collapse them with the portfolio weights, and bundle the
//! analytics result. Provider and computation failures propagate unchanged;
//! there is no retry or partial result.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use folio::Portfolio;
use folio_analytics::{AnalysisPeriod, AnalyticsResult, daily_returns, portfolio_returns};
use folio_data::YahooCloseProvider;

/// Error type for pipeline operations.
#[derive(Debug, thiserror::Error)]
pub(crate) enum PipelineError {
    /// Data fetch error from Yahoo.
    #[error("Data fetch error: {0}")]
    Fetch(#[from] folio_data::DataError),

    /// Analytics computation error.
    #[error("Analytics error: {0}")]
    Analytics(#[from] folio_analytics::AnalyticsError),
}

fn to_utc_midnight(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(NaiveTime::MIN).and_utc()
}

/// Run the full analysis for one portfolio and date window.
pub(crate) async fn run_analysis(
    provider: &YahooCloseProvider,
    portfolio: Portfolio,
    start: NaiveDate,
    end: NaiveDate,
) -> Result<AnalyticsResult, PipelineError> {
    let prices = provider
        .fetch_close_table(&portfolio.symbols(), to_utc_midnight(start), to_utc_midnight(end))
        .await?;

    let returns = daily_returns(&prices)?;
    let series = portfolio_returns(&returns, &portfolio)?;

    Ok(AnalyticsResult::from_returns(
        portfolio,
        AnalysisPeriod::new(start, end),
        series,
    ))
}
