//! HTML tearsheet generation and export.
//!
//! The report is rendered from an embedded template, staged through a
//! temporary directory, patched so the two-column layout is responsive, and
//! written to its final location. The staged copy is removed once read.

use crate::charts::{bar_chart, line_chart};
use crate::summary::{format_percent, format_ratio};
use folio_analytics::AnalyticsResult;
use folio_analytics::aggregate::MONTH_LABELS;
use std::path::Path;
use thiserror::Error;

const DEFAULT_TEMPLATE: &str = include_str!("template.html");
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default file name for the exported report.
pub const DEFAULT_REPORT_NAME: &str = "portfolio_report.html";

/// Fixed-pixel two-column rule emitted by the template.
const FIXED_LAYOUT_CSS: &str =
    "#left{width:620px;margin-right:18px;margin-top:-1.2rem;float:left}#right{width:320px;float:right}";

/// Responsive replacement: percentage columns plus a fluid container.
const RESPONSIVE_LAYOUT_CSS: &str =
    "#left{width:62%;margin-right:2%;margin-top:-1.2rem;float:left}#right{width:34%;float:right}.container{max-width:100%;padding:0 20px}";

/// Errors that can occur during report export.
#[derive(Debug, Error)]
pub enum ReportError {
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Render the full HTML report from an analytics result.
///
/// The output still carries the template's fixed-width layout; call
/// [`make_responsive`] (or [`export_report`], which does both) for the
/// downloadable artifact.
pub fn render_html(result: &AnalyticsResult, title: &str) -> String {
    let date_range = result
        .returns
        .date_range()
        .map_or_else(String::new, |(start, end)| format!("{start} - {end}"));

    DEFAULT_TEMPLATE
        .replace("{{title}}", title)
        .replace("{{date_range}}", &date_range)
        .replace("{{v}}", VERSION)
        .replace("{{metrics_table}}", &metrics_table(result))
        .replace("{{allocation_table}}", &allocation_table(result))
        .replace("{{monthly_table}}", &monthly_table(result))
        .replace("{{eoy_table}}", &eoy_table(result))
        .replace("{{cumulative_chart}}", &line_chart(&result.cumulative))
        .replace("{{eoy_chart}}", &bar_chart(&result.eoy))
}

/// Swap the fixed-pixel column rule for the responsive one.
///
/// The substitution is a literal string replacement against the exact rule
/// the template emits; everything else in the document is untouched.
pub fn make_responsive(html: &str) -> String {
    html.replace(FIXED_LAYOUT_CSS, RESPONSIVE_LAYOUT_CSS)
}

/// Render, patch, and write the report to `output`.
///
/// The raw report is staged in a scoped temporary directory, read back,
/// patched, and only the patched copy survives.
///
/// # Errors
///
/// Returns an error if any filesystem step fails.
pub fn export_report(
    result: &AnalyticsResult,
    title: &str,
    output: &Path,
) -> Result<(), ReportError> {
    let html = render_html(result, title);

    let staging_dir = std::env::temp_dir().join(format!("folio-report-{}", std::process::id()));
    std::fs::create_dir_all(&staging_dir)?;

    let staged = staging_dir.join(DEFAULT_REPORT_NAME);
    std::fs::write(&staged, &html)?;
    let raw = std::fs::read_to_string(&staged)?;
    std::fs::remove_dir_all(&staging_dir)?;

    std::fs::write(output, make_responsive(&raw))?;

    Ok(())
}

fn metrics_table(result: &AnalyticsResult) -> String {
    let metrics = &result.metrics;
    let mut out = String::from("<table>\n");

    out.push_str(&metric_row("Sharpe Ratio", &format_ratio(metrics.sharpe)));
    out.push_str(&metric_row(
        "Max Drawdown",
        &format_percent(metrics.max_drawdown),
    ));
    out.push_str(&metric_row("CAGR", &format_percent(metrics.cagr)));
    out.push_str(&metric_row("Volatility", &format_percent(metrics.volatility)));
    out.push_str(&metric_row(
        "Total Return",
        &format_percent(metrics.total_return),
    ));

    out.push_str("</table>\n");
    out
}

fn metric_row(label: &str, value: &str) -> String {
    format!("<tr><td>{label}</td><td>{value}</td></tr>\n")
}

fn allocation_table(result: &AnalyticsResult) -> String {
    let mut out = String::from("<table>\n<tr><th>Symbol</th><th>Weight</th></tr>\n");
    for holding in result.portfolio.holdings() {
        out.push_str(&format!(
            "<tr><td>{}</td><td>{}</td></tr>\n",
            holding.symbol,
            format_percent(holding.weight)
        ));
    }
    out.push_str("</table>\n");
    out
}

fn monthly_table(result: &AnalyticsResult) -> String {
    let mut out = String::from("<table>\n<tr><th>Year</th>");
    for label in MONTH_LABELS {
        out.push_str(&format!("<th>{label}</th>"));
    }
    out.push_str("</tr>\n");

    for (year, row) in result.monthly.years().iter().zip(result.monthly.rows()) {
        out.push_str(&format!("<tr><td>{year}</td>"));
        for cell in row {
            match cell {
                Some(value) => {
                    let class = if *value < 0.0 { "neg" } else { "pos" };
                    out.push_str(&format!(
                        "<td class=\"{class}\">{:.2}</td>",
                        value * 100.0
                    ));
                }
                None => out.push_str("<td>-</td>"),
            }
        }
        out.push_str("</tr>\n");
    }

    out.push_str("</table>\n");
    out
}

fn eoy_table(result: &AnalyticsResult) -> String {
    let mut out = String::from("<table>\n<tr><th>Year</th><th>Return</th></tr>\n");
    for (year, value) in &result.eoy {
        let class = if *value < 0.0 { "neg" } else { "pos" };
        out.push_str(&format!(
            "<tr><td>{year}</td><td class=\"{class}\">{}</td></tr>\n",
            format_percent(*value)
        ));
    }
    out.push_str("</table>\n");
    out
}
