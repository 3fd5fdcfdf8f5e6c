//! Headline risk/return metrics for a portfolio return series.
//!
//! Definitions follow the usual tearsheet conventions: Sharpe from
//! per-period excess returns annualized by the square root of the period
//! count, volatility as annualized sample standard deviation, max drawdown
//! as the deepest peak-to-trough decline of the equity curve, and CAGR from
//! total growth over the calendar span of the series.

use crate::series::ReturnSeries;
use serde::{Deserialize, Serialize};

/// Trading periods per year for daily series.
pub const TRADING_DAYS_PER_YEAR: u32 = 252;

/// Headline performance metrics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceMetrics {
    /// Compounded return over the whole series.
    pub total_return: f64,

    /// Compound annual growth rate.
    pub cagr: f64,

    /// Annualized Sharpe ratio (risk-free rate 0 unless supplied).
    pub sharpe: f64,

    /// Annualized volatility.
    pub volatility: f64,

    /// Max drawdown as a negative fraction (e.g. -0.25 for -25%).
    pub max_drawdown: f64,
}

/// Compute all headline metrics with default assumptions (rf = 0, daily
/// periodicity).
pub fn compute_metrics(returns: &ReturnSeries) -> PerformanceMetrics {
    compute_metrics_with(returns, 0.0, TRADING_DAYS_PER_YEAR)
}

/// Compute all headline metrics with an explicit annual risk-free rate and
/// period count.
pub fn compute_metrics_with(
    returns: &ReturnSeries,
    rf: f64,
    periods_per_year: u32,
) -> PerformanceMetrics {
    PerformanceMetrics {
        total_return: compounded_return(returns.values()),
        cagr: cagr(returns),
        sharpe: sharpe(returns.values(), rf, periods_per_year),
        volatility: annualized_volatility(returns.values(), periods_per_year),
        max_drawdown: max_drawdown(returns.values()),
    }
}

/// Compounded return over a slice of periodic returns.
pub fn compounded_return(returns: &[f64]) -> f64 {
    returns
        .iter()
        .filter(|v| v.is_finite())
        .fold(1.0, |acc, r| acc * (1.0 + r))
        - 1.0
}

/// Annualized sample volatility (ddof = 1).
pub fn annualized_volatility(returns: &[f64], periods_per_year: u32) -> f64 {
    let clean: Vec<f64> = returns.iter().copied().filter(|v| v.is_finite()).collect();
    if clean.len() < 2 {
        return 0.0;
    }

    let n = clean.len() as f64;
    let mean = clean.iter().sum::<f64>() / n;
    let var = clean.iter().map(|r| (r - mean).powi(2)).sum::<f64>() / (n - 1.0);

    var.sqrt() * (periods_per_year as f64).sqrt()
}

/// Annualized Sharpe ratio from per-period returns.
///
/// The annual risk-free rate is de-annualized to per-period before the
/// excess returns are taken.
pub fn sharpe(returns: &[f64], rf: f64, periods_per_year: u32) -> f64 {
    let clean: Vec<f64> = returns.iter().copied().filter(|v| v.is_finite()).collect();
    if clean.len() < 2 {
        return 0.0;
    }

    let rf_per_period = if rf != 0.0 {
        (1.0 + rf).powf(1.0 / periods_per_year as f64) - 1.0
    } else {
        0.0
    };

    let excess: Vec<f64> = clean.into_iter().map(|r| r - rf_per_period).collect();
    let n = excess.len() as f64;
    let mean = excess.iter().sum::<f64>() / n;
    let var = excess.iter().map(|r| (r - mean).powi(2)).sum::<f64>() / (n - 1.0);
    let std = var.sqrt();

    if std == 0.0 {
        0.0
    } else {
        mean / std * (periods_per_year as f64).sqrt()
    }
}

/// Max drawdown of the equity curve implied by the returns.
///
/// Returned as a non-positive fraction; 0.0 means the curve never dipped
/// below a previous peak.
pub fn max_drawdown(returns: &[f64]) -> f64 {
    let mut equity = 1.0_f64;
    let mut peak = 1.0_f64;
    let mut worst = 0.0_f64;

    for r in returns.iter().copied().filter(|v| v.is_finite()) {
        equity *= 1.0 + r;
        if equity > peak {
            peak = equity;
        }
        let dd = equity / peak - 1.0;
        if dd < worst {
            worst = dd;
        }
    }

    worst
}

/// Compound annual growth rate over the calendar span of the series.
pub fn cagr(returns: &ReturnSeries) -> f64 {
    let Some((first, last)) = returns.date_range() else {
        return 0.0;
    };

    let days = (last - first).num_days();
    if days <= 0 {
        return 0.0;
    }

    let total = compounded_return(returns.values());
    (1.0 + total).powf(365.0 / days as f64) - 1.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample_series() -> ReturnSeries {
        ReturnSeries::new(
            vec![date(2024, 1, 2), date(2024, 1, 3), date(2024, 1, 4)],
            vec![0.01, -0.02, 0.03],
        )
        .unwrap()
    }

    #[test]
    fn test_compounded_return() {
        let total = compounded_return(&[0.01, -0.02, 0.03]);
        assert_relative_eq!(total, 1.01 * 0.98 * 1.03 - 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_max_drawdown_known_series() {
        // Equity curve: 1.01, 0.9898, 1.019494 against a 1.01 peak.
        let dd = max_drawdown(&[0.01, -0.02, 0.03]);
        assert_relative_eq!(dd, -0.02, epsilon = 1e-12);
    }

    #[test]
    fn test_max_drawdown_monotone_series_is_zero() {
        assert_eq!(max_drawdown(&[0.01, 0.02, 0.005]), 0.0);
    }

    #[test]
    fn test_sharpe_known_series() {
        let value = sharpe(&[0.01, -0.02, 0.03], 0.0, 252);
        assert_relative_eq!(value, 4.20526, epsilon = 1e-4);
    }

    #[test]
    fn test_sharpe_zero_volatility() {
        assert_eq!(sharpe(&[0.01, 0.01, 0.01], 0.0, 252), 0.0);
    }

    #[test]
    fn test_volatility_constant_series_is_zero() {
        assert_relative_eq!(annualized_volatility(&[0.01, 0.01, 0.01], 252), 0.0);
    }

    #[test]
    fn test_volatility_annualization() {
        let daily = annualized_volatility(&[0.01, -0.02, 0.03], 1);
        let annual = annualized_volatility(&[0.01, -0.02, 0.03], 252);
        assert_relative_eq!(annual, daily * 252.0_f64.sqrt(), epsilon = 1e-12);
    }

    #[test]
    fn test_cagr_one_year_span_equals_total_return() {
        // 2023-01-01 to 2024-01-01 is exactly 365 days.
        let series = ReturnSeries::new(
            vec![date(2023, 1, 1), date(2023, 7, 1), date(2024, 1, 1)],
            vec![0.05, 0.03, -0.01],
        )
        .unwrap();

        let total = compounded_return(series.values());
        assert_relative_eq!(cagr(&series), total, epsilon = 1e-12);
    }

    #[test]
    fn test_cagr_zero_span() {
        let series =
            ReturnSeries::new(vec![date(2024, 1, 2)], vec![0.01]).unwrap();
        assert_eq!(cagr(&series), 0.0);
    }

    #[test]
    fn test_compute_metrics_bundle() {
        let metrics = compute_metrics(&sample_series());

        assert_relative_eq!(metrics.total_return, 0.019494, epsilon = 1e-9);
        assert_relative_eq!(metrics.max_drawdown, -0.02, epsilon = 1e-12);
        assert!(metrics.volatility > 0.0);
        assert!(metrics.sharpe > 0.0);
    }
}
