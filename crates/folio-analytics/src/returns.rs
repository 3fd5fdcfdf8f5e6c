//! Daily returns from close prices and weighted portfolio collapse.

use crate::series::{AnalyticsError, Result, ReturnSeries};
use chrono::NaiveDate;
use folio::Portfolio;
use polars::prelude::*;

/// Name of the collapsed portfolio return column.
const PORTFOLIO_RETURN: &str = "portfolio_return";

fn value_columns(df: &DataFrame) -> Vec<String> {
    df.get_columns()
        .iter()
        .map(|c| c.name().to_string())
        .filter(|n| n != "date")
        .collect()
}

/// Compute daily percentage returns for every price column.
///
/// Takes a wide table with a `date` column and one close column per symbol,
/// computes `p_t / p_{t-1} - 1` per symbol, and drops every row with a
/// missing value. The leading row always drops.
///
/// # Errors
///
/// Returns an error if the table has no price columns or the computation
/// fails.
pub fn daily_returns(prices: &DataFrame) -> Result<DataFrame> {
    let symbols = value_columns(prices);
    if symbols.is_empty() {
        return Err(AnalyticsError::EmptySeries);
    }

    let pct_change: Vec<Expr> = symbols
        .iter()
        .map(|s| {
            (col(s.as_str()) / col(s.as_str()).shift(lit(1)) - lit(1.0)).alias(s.as_str())
        })
        .collect();

    let returns = prices
        .clone()
        .lazy()
        .sort(["date"], SortMultipleOptions::default())
        .with_columns(pct_change)
        .drop_nulls(None)
        .collect()?;

    Ok(returns)
}

/// Collapse per-symbol returns into a single weighted portfolio series.
///
/// Each date's portfolio return is the dot product of that date's return
/// row with the portfolio's weight vector.
///
/// # Errors
///
/// Returns [`AnalyticsError::MissingSymbol`] when a holding has no matching
/// return column.
pub fn portfolio_returns(returns: &DataFrame, portfolio: &Portfolio) -> Result<ReturnSeries> {
    let available = value_columns(returns);

    let mut weighted = lit(0.0);
    for holding in portfolio.holdings() {
        if !available.contains(&holding.symbol) {
            return Err(AnalyticsError::MissingSymbol(holding.symbol.clone()));
        }
        weighted = weighted + col(holding.symbol.as_str()) * lit(holding.weight);
    }

    let collapsed = returns
        .clone()
        .lazy()
        .select(&[col("date"), weighted.alias(PORTFOLIO_RETURN)])
        .collect()?;

    series_from_frame(&collapsed, PORTFOLIO_RETURN)
}

/// Extract a [`ReturnSeries`] from a `[date, <column>]` frame.
fn series_from_frame(df: &DataFrame, column: &str) -> Result<ReturnSeries> {
    // Dates round-trip through strings; polars' chrono interop is not
    // enabled in this feature set.
    let dates_col = df.column("date")?.cast(&DataType::String)?;
    let dates_str = dates_col.str()?;
    let values_col = df.column(column)?.f64()?;

    let mut dates = Vec::with_capacity(df.height());
    let mut values = Vec::with_capacity(df.height());

    for i in 0..df.height() {
        let raw = dates_str
            .get(i)
            .ok_or_else(|| AnalyticsError::Parse(format!("missing date at row {i}")))?;
        let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .map_err(|e| AnalyticsError::Parse(format!("bad date {raw}: {e}")))?;
        let value = values_col
            .get(i)
            .ok_or_else(|| AnalyticsError::Parse(format!("missing value at row {i}")))?;

        dates.push(date);
        values.push(value);
    }

    ReturnSeries::new(dates, values)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn price_frame(dates: &[&str], columns: &[(&str, Vec<Option<f64>>)]) -> DataFrame {
        let mut cols: Vec<Column> = vec![Series::new("date".into(), dates.to_vec()).into()];
        for (name, values) in columns {
            cols.push(Series::new((*name).into(), values.clone()).into());
        }

        DataFrame::new(cols)
            .unwrap()
            .lazy()
            .with_column(col("date").cast(DataType::Date))
            .collect()
            .unwrap()
    }

    fn some(values: &[f64]) -> Vec<Option<f64>> {
        values.iter().copied().map(Some).collect()
    }

    #[test]
    fn test_daily_returns_drops_leading_row() {
        let prices = price_frame(
            &["2024-01-02", "2024-01-03", "2024-01-04", "2024-01-05"],
            &[("A", some(&[100.0, 101.0, 98.98, 101.9494]))],
        );

        let returns = daily_returns(&prices).unwrap();
        assert_eq!(returns.height(), 3);

        let values = returns.column("A").unwrap().f64().unwrap();
        assert_relative_eq!(values.get(0).unwrap(), 0.01, epsilon = 1e-9);
        assert_relative_eq!(values.get(1).unwrap(), -0.02, epsilon = 1e-9);
        assert_relative_eq!(values.get(2).unwrap(), 0.03, epsilon = 1e-9);
    }

    #[test]
    fn test_daily_returns_drops_rows_with_missing_data() {
        let prices = price_frame(
            &["2024-01-02", "2024-01-03", "2024-01-04"],
            &[
                ("A", some(&[100.0, 110.0, 121.0])),
                ("B", vec![Some(50.0), None, Some(55.0)]),
            ],
        );

        let returns = daily_returns(&prices).unwrap();
        // Leading row drops, and the row where B is missing drops for both
        // symbols; the 01-04 return also drops because its previous close
        // for B is null.
        assert_eq!(returns.height(), 0);
    }

    #[test]
    fn test_daily_returns_rejects_priceless_table() {
        let prices = price_frame(&["2024-01-02"], &[]);
        assert!(matches!(
            daily_returns(&prices),
            Err(AnalyticsError::EmptySeries)
        ));
    }

    #[test]
    fn test_portfolio_returns_weighted_sum() {
        let prices = price_frame(
            &["2024-01-02", "2024-01-03", "2024-01-04"],
            &[
                ("A", some(&[100.0, 102.0, 104.04])),
                ("B", some(&[200.0, 196.0, 200.0])),
            ],
        );

        let returns = daily_returns(&prices).unwrap();
        let portfolio = Portfolio::new(
            vec!["A".to_string(), "B".to_string()],
            vec![0.75, 0.25],
        )
        .unwrap();

        let series = portfolio_returns(&returns, &portfolio).unwrap();
        assert_eq!(series.len(), 2);
        // 0.75 * 0.02 + 0.25 * (-0.02)
        assert_relative_eq!(series.values()[0], 0.01, epsilon = 1e-9);
        // 0.75 * 0.02 + 0.25 * (200/196 - 1)
        let expected = 0.75 * 0.02 + 0.25 * (200.0 / 196.0 - 1.0);
        assert_relative_eq!(series.values()[1], expected, epsilon = 1e-9);
    }

    #[test]
    fn test_portfolio_returns_missing_symbol() {
        let prices = price_frame(
            &["2024-01-02", "2024-01-03"],
            &[("A", some(&[100.0, 101.0]))],
        );
        let returns = daily_returns(&prices).unwrap();
        let portfolio =
            Portfolio::new(vec!["A".to_string(), "Z".to_string()], vec![0.5, 0.5]).unwrap();

        let result = portfolio_returns(&returns, &portfolio);
        assert!(matches!(result, Err(AnalyticsError::MissingSymbol(s)) if s == "Z"));
    }

    #[test]
    fn test_single_ticker_passthrough() {
        let prices = price_frame(
            &["2024-01-02", "2024-01-03", "2024-01-04"],
            &[("A", some(&[100.0, 101.0, 99.99]))],
        );

        let returns = daily_returns(&prices).unwrap();
        let portfolio = Portfolio::new(vec!["A".to_string()], vec![1.0]).unwrap();
        let series = portfolio_returns(&returns, &portfolio).unwrap();

        assert_relative_eq!(series.values()[0], 0.01, epsilon = 1e-9);
        assert_relative_eq!(series.values()[1], 99.99 / 101.0 - 1.0, epsilon = 1e-9);
    }
}
