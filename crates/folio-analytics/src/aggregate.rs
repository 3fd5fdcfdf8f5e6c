//! Calendar aggregations: cumulative, monthly, and end-of-year returns.

use crate::series::ReturnSeries;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Month column labels for the monthly table.
pub const MONTH_LABELS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Compounded monthly returns laid out as one row per calendar year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyTable {
    years: Vec<i32>,
    // One row per year, one cell per month; None where no data exists.
    values: Vec<[Option<f64>; 12]>,
}

impl MonthlyTable {
    /// Years covered by the table, ascending.
    pub fn years(&self) -> &[i32] {
        &self.years
    }

    /// Rows aligned with [`Self::years`].
    pub fn rows(&self) -> &[[Option<f64>; 12]] {
        &self.values
    }

    /// Look up the compounded return for a year and 1-based month.
    ///
    /// Returns `None` for months outside `1..=12`.
    pub fn get(&self, year: i32, month: u32) -> Option<f64> {
        if !(1..=12).contains(&month) {
            return None;
        }
        let row = self.years.iter().position(|y| *y == year)?;
        self.values[row][month as usize - 1]
    }

    /// Whether the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.years.is_empty()
    }
}

/// Running product of `(1 + r)` over the series, starting at `1 + r_0`.
///
/// This is the equity curve of one unit invested at the series start.
pub fn cumulative_returns(returns: &ReturnSeries) -> Vec<(NaiveDate, f64)> {
    let mut level = 1.0_f64;
    returns
        .iter()
        .map(|(date, r)| {
            level *= 1.0 + r;
            (date, level)
        })
        .collect()
}

/// Compounded return per (year, month), one table row per year.
pub fn monthly_returns(returns: &ReturnSeries) -> MonthlyTable {
    let mut years: Vec<i32> = Vec::new();
    let mut values: Vec<[Option<f64>; 12]> = Vec::new();

    // Series dates are sorted, so each (year, month) bucket is contiguous.
    for (date, r) in returns.iter() {
        let year = date.year();
        let month = date.month() as usize - 1;

        if years.last() != Some(&year) {
            years.push(year);
            values.push([None; 12]);
        }

        if let Some(row) = values.last_mut() {
            let growth = row[month].map_or(1.0, |prev| 1.0 + prev);
            row[month] = Some(growth * (1.0 + r) - 1.0);
        }
    }

    MonthlyTable { years, values }
}

/// Compounded return per calendar year, ascending by year.
pub fn eoy_returns(returns: &ReturnSeries) -> Vec<(i32, f64)> {
    let mut out: Vec<(i32, f64)> = Vec::new();

    for (date, r) in returns.iter() {
        let year = date.year();
        match out.last_mut() {
            Some((y, total)) if *y == year => {
                *total = (1.0 + *total) * (1.0 + r) - 1.0;
            }
            _ => out.push((year, r)),
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_cumulative_running_product() {
        let series = ReturnSeries::new(
            vec![date(2024, 1, 2), date(2024, 1, 3), date(2024, 1, 4)],
            vec![0.01, -0.02, 0.03],
        )
        .unwrap();

        let cumulative = cumulative_returns(&series);
        let levels: Vec<f64> = cumulative.iter().map(|(_, v)| *v).collect();

        assert_relative_eq!(levels[0], 1.01, epsilon = 1e-12);
        assert_relative_eq!(levels[1], 0.9898, epsilon = 1e-12);
        assert_relative_eq!(levels[2], 0.9898 * 1.03, epsilon = 1e-12);
    }

    #[test]
    fn test_monthly_compounding() {
        let series = ReturnSeries::new(
            vec![
                date(2023, 1, 10),
                date(2023, 1, 11),
                date(2023, 2, 1),
                date(2024, 1, 5),
            ],
            vec![0.01, 0.02, -0.01, 0.05],
        )
        .unwrap();

        let table = monthly_returns(&series);
        assert_eq!(table.years(), &[2023, 2024]);

        assert_relative_eq!(
            table.get(2023, 1).unwrap(),
            1.01 * 1.02 - 1.0,
            epsilon = 1e-12
        );
        assert_relative_eq!(table.get(2023, 2).unwrap(), -0.01, epsilon = 1e-12);
        assert_eq!(table.get(2023, 3), None);
        assert_relative_eq!(table.get(2024, 1).unwrap(), 0.05, epsilon = 1e-12);
    }

    #[test]
    fn test_monthly_get_out_of_range_month() {
        let series =
            ReturnSeries::new(vec![date(2023, 1, 10)], vec![0.01]).unwrap();
        let table = monthly_returns(&series);

        assert_eq!(table.get(2023, 0), None);
        assert_eq!(table.get(2023, 13), None);
    }

    #[test]
    fn test_eoy_compounding_per_year() {
        let series = ReturnSeries::new(
            vec![
                date(2023, 3, 1),
                date(2023, 9, 1),
                date(2024, 2, 1),
                date(2024, 2, 2),
            ],
            vec![0.10, -0.05, 0.02, 0.02],
        )
        .unwrap();

        let eoy = eoy_returns(&series);
        assert_eq!(eoy.len(), 2);

        let (year_a, total_a) = eoy[0];
        assert_eq!(year_a, 2023);
        assert_relative_eq!(total_a, 1.10 * 0.95 - 1.0, epsilon = 1e-12);

        let (year_b, total_b) = eoy[1];
        assert_eq!(year_b, 2024);
        assert_relative_eq!(total_b, 1.02 * 1.02 - 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_eoy_matches_compounded_product_of_that_year() {
        let series = ReturnSeries::new(
            vec![date(2023, 1, 2), date(2023, 1, 3), date(2023, 1, 4)],
            vec![0.01, -0.02, 0.03],
        )
        .unwrap();

        let eoy = eoy_returns(&series);
        assert_eq!(eoy.len(), 1);
        assert_relative_eq!(eoy[0].1, 1.01 * 0.98 * 1.03 - 1.0, epsilon = 1e-12);
    }
}
