//! Terminal rendering of an analytics result.

use folio_analytics::AnalyticsResult;
use folio_analytics::aggregate::MONTH_LABELS;

/// Format a ratio-style metric (Sharpe) to two decimals.
pub fn format_ratio(value: f64) -> String {
    format!("{value:.2}")
}

/// Format a fractional metric as a percentage to two decimals.
pub fn format_percent(value: f64) -> String {
    format!("{:.2}%", value * 100.0)
}

/// Format the analytics result as an ASCII table for terminal display.
///
/// Sections appear in presentation order: metric cards, allocation,
/// monthly returns, cumulative return, end-of-year returns.
pub fn to_ascii_table(result: &AnalyticsResult, title: &str) -> String {
    let mut output = String::new();
    let metrics = &result.metrics;

    output.push_str(&format!("\n{title}\n"));
    if let Some((start, end)) = result.returns.date_range() {
        output.push_str(&format!("Period: {start} to {end}\n"));
    }
    output.push_str(&"=".repeat(80));
    output.push('\n');

    output.push_str("\nKey Metrics:\n");
    output.push_str(&"-".repeat(80));
    output.push('\n');
    output.push_str(&format!(
        "  Sharpe Ratio:             {}\n",
        format_ratio(metrics.sharpe)
    ));
    output.push_str(&format!(
        "  Max Drawdown:             {}\n",
        format_percent(metrics.max_drawdown)
    ));
    output.push_str(&format!(
        "  CAGR:                     {}\n",
        format_percent(metrics.cagr)
    ));
    output.push_str(&format!(
        "  Volatility:               {}\n",
        format_percent(metrics.volatility)
    ));

    output.push_str("\nPortfolio Allocation:\n");
    output.push_str(&"-".repeat(80));
    output.push('\n');
    for holding in result.portfolio.holdings() {
        let bar_len = (holding.weight * 40.0).round() as usize;
        output.push_str(&format!(
            "  {:<16} {:>8} {}\n",
            holding.symbol,
            format_percent(holding.weight),
            "#".repeat(bar_len)
        ));
    }

    if !result.monthly.is_empty() {
        output.push_str("\nMonthly Returns (%):\n");
        output.push_str(&"-".repeat(80));
        output.push('\n');
        output.push_str(&format!("{:<6}", "Year"));
        for label in MONTH_LABELS {
            output.push_str(&format!("{label:>6}"));
        }
        output.push('\n');

        for (year, row) in result.monthly.years().iter().zip(result.monthly.rows()) {
            output.push_str(&format!("{year:<6}"));
            for cell in row {
                match cell {
                    Some(value) => output.push_str(&format!("{:>6.2}", value * 100.0)),
                    None => output.push_str(&format!("{:>6}", "-")),
                }
            }
            output.push('\n');
        }
    }

    if let Some((date, level)) = result.cumulative.last() {
        output.push_str("\nCumulative Return:\n");
        output.push_str(&"-".repeat(80));
        output.push('\n');
        output.push_str(&format!(
            "  1.00 invested at the start is {level:.4} on {date}\n"
        ));
    }

    if !result.eoy.is_empty() {
        output.push_str("\nEnd-of-Year Returns:\n");
        output.push_str(&"-".repeat(80));
        output.push('\n');
        for (year, value) in &result.eoy {
            output.push_str(&format!("  {year}  {:>8}\n", format_percent(*value)));
        }
    }

    output.push_str(&"=".repeat(80));
    output.push('\n');

    output
}

/// Format the analytics result as Markdown.
pub fn to_markdown(result: &AnalyticsResult, title: &str) -> String {
    let mut output = String::new();
    let metrics = &result.metrics;

    output.push_str(&format!("# {title}\n\n"));
    if let Some((start, end)) = result.returns.date_range() {
        output.push_str(&format!("**Period:** {start} to {end}\n\n"));
    }

    output.push_str("## Key Metrics\n\n");
    output.push_str(&format!(
        "- **Sharpe Ratio:** {}\n",
        format_ratio(metrics.sharpe)
    ));
    output.push_str(&format!(
        "- **Max Drawdown:** {}\n",
        format_percent(metrics.max_drawdown)
    ));
    output.push_str(&format!("- **CAGR:** {}\n", format_percent(metrics.cagr)));
    output.push_str(&format!(
        "- **Volatility:** {}\n\n",
        format_percent(metrics.volatility)
    ));

    output.push_str("## Portfolio Allocation\n\n");
    output.push_str("| Symbol | Weight |\n|--------|--------|\n");
    for holding in result.portfolio.holdings() {
        output.push_str(&format!(
            "| {} | {} |\n",
            holding.symbol,
            format_percent(holding.weight)
        ));
    }
    output.push('\n');

    if !result.monthly.is_empty() {
        output.push_str("## Monthly Returns (%)\n\n");
        output.push_str("| Year |");
        for label in MONTH_LABELS {
            output.push_str(&format!(" {label} |"));
        }
        output.push_str("\n|------|");
        output.push_str(&"------|".repeat(12));
        output.push('\n');

        for (year, row) in result.monthly.years().iter().zip(result.monthly.rows()) {
            output.push_str(&format!("| {year} |"));
            for cell in row {
                match cell {
                    Some(value) => output.push_str(&format!(" {:.2} |", value * 100.0)),
                    None => output.push_str(" - |"),
                }
            }
            output.push('\n');
        }
        output.push('\n');
    }

    if !result.eoy.is_empty() {
        output.push_str("## End-of-Year Returns\n\n");
        output.push_str("| Year | Return |\n|------|--------|\n");
        for (year, value) in &result.eoy {
            output.push_str(&format!("| {year} | {} |\n", format_percent(*value)));
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use folio::Portfolio;
    use folio_analytics::{AnalysisPeriod, ReturnSeries};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample_result() -> AnalyticsResult {
        let portfolio = Portfolio::new(
            vec!["RELIANCE.NS".to_string(), "TCS.NS".to_string()],
            vec![0.5, 0.5],
        )
        .unwrap();
        let returns = ReturnSeries::new(
            vec![date(2024, 1, 2), date(2024, 1, 3), date(2024, 2, 1)],
            vec![0.01, -0.02, 0.03],
        )
        .unwrap();
        let period = AnalysisPeriod::new(date(2024, 1, 1), date(2024, 2, 1));
        AnalyticsResult::from_returns(portfolio, period, returns)
    }

    #[test]
    fn test_format_contracts() {
        assert_eq!(format_ratio(1.23456), "1.23");
        assert_eq!(format_percent(-0.02), "-2.00%");
        assert_eq!(format_percent(0.12345), "12.35%");
    }

    #[test]
    fn test_ascii_table_sections() {
        let table = to_ascii_table(&sample_result(), "Portfolio Analytics");

        assert!(table.contains("Portfolio Analytics"));
        assert!(table.contains("Sharpe Ratio"));
        assert!(table.contains("Max Drawdown"));
        assert!(table.contains("RELIANCE.NS"));
        assert!(table.contains("Monthly Returns"));
        assert!(table.contains("End-of-Year Returns"));
    }

    #[test]
    fn test_ascii_allocation_bars() {
        let table = to_ascii_table(&sample_result(), "Report");
        // 50% weight maps onto a 20-character bar.
        assert!(table.contains(&"#".repeat(20)));
    }

    #[test]
    fn test_markdown_tables() {
        let md = to_markdown(&sample_result(), "Portfolio Analytics");

        assert!(md.contains("# Portfolio Analytics"));
        assert!(md.contains("## Key Metrics"));
        assert!(md.contains("| RELIANCE.NS | 50.00% |"));
        assert!(md.contains("| Jan |"));
    }
}
