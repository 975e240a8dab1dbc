//! Deduction period model.
//!
//! A [`DeductionPeriod`] bounds which attendance records an engine run
//! considers, typically one payroll month.

use chrono::{Datelike, Months, NaiveDate};
use serde::{Deserialize, Serialize};

/// An inclusive date range that attendance records are filtered against.
///
/// # Example
///
/// ```
/// use late_deduction_engine::models::DeductionPeriod;
/// use chrono::NaiveDate;
///
/// let period = DeductionPeriod::month(2026, 2).unwrap();
/// assert_eq!(period.start_date, NaiveDate::from_ymd_opt(2026, 2, 1).unwrap());
/// assert_eq!(period.end_date, NaiveDate::from_ymd_opt(2026, 2, 28).unwrap());
/// assert!(period.contains_date(NaiveDate::from_ymd_opt(2026, 2, 14).unwrap()));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeductionPeriod {
    /// The start date of the period (inclusive).
    pub start_date: NaiveDate,
    /// The end date of the period (inclusive).
    pub end_date: NaiveDate,
}

impl DeductionPeriod {
    /// Creates a period covering a whole calendar month.
    ///
    /// Returns `None` if `month` is not in 1..=12 or the year is out of range.
    pub fn month(year: i32, month: u32) -> Option<Self> {
        let start_date = NaiveDate::from_ymd_opt(year, month, 1)?;
        let end_date = start_date.checked_add_months(Months::new(1))?.pred_opt()?;
        Some(Self {
            start_date,
            end_date,
        })
    }

    /// Checks if a given date falls within this period, inclusive of both ends.
    pub fn contains_date(&self, date: NaiveDate) -> bool {
        date >= self.start_date && date <= self.end_date
    }

    /// Returns a short label such as "2026-02" when the period is a calendar month.
    pub fn month_label(&self) -> Option<String> {
        let whole_month = Self::month(self.start_date.year(), self.start_date.month())?;
        (whole_month == *self).then(|| self.start_date.format("%Y-%m").to_string())
    }
}
