//! Deduction output models.
//!
//! This module contains the values produced by the deduction calculations:
//! per-day breakdown entries, the per-employee [`DeductionDetail`], the
//! single-day [`DayDeduction`] and the run-level [`DeductionSummary`].

use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Per-employee deductions for one run, keyed by employee id.
pub type DeductionMap = BTreeMap<String, DeductionDetail>;

/// A single qualifying late day.
///
/// # Example
///
/// ```
/// use late_deduction_engine::models::DeductionBreakdown;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let entry = DeductionBreakdown {
///     date: NaiveDate::from_ymd_opt(2026, 3, 2).unwrap(),
///     late_minutes: 22,
///     day_deduction: Decimal::new(50, 0),
/// };
/// assert_eq!(entry.late_minutes, 22);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeductionBreakdown {
    /// The date of the late arrival.
    pub date: NaiveDate,
    /// Minutes past the official check-in time.
    pub late_minutes: u32,
    /// The amount deducted for this day.
    pub day_deduction: Decimal,
}

/// The late-arrival deduction for one employee over a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeductionDetail {
    /// The employee the deduction applies to.
    pub employee_id: String,
    /// The employee's display name, taken from their first attendance record.
    pub employee_name: String,
    /// Number of days at or beyond the lateness threshold.
    pub late_days: u32,
    /// Sum of late minutes over those days.
    pub total_late_minutes: u32,
    /// Mean late minutes per late day, rounded to the nearest minute.
    pub average_late_minutes: u32,
    /// Sum of every breakdown entry's deduction.
    pub deduction_amount: Decimal,
    /// One entry per qualifying late day, in attendance order.
    pub breakdown: Vec<DeductionBreakdown>,
}

/// The outcome of evaluating a single check-in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayDeduction {
    /// Minutes past the official check-in time.
    pub late_minutes: u32,
    /// The deduction the policy assigns to that lateness.
    pub deduction: Decimal,
}

/// Totals across every employee in a [`DeductionMap`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeductionSummary {
    /// Number of employees with a deduction.
    pub total_employees_with_deductions: usize,
    /// Sum of every employee's deduction.
    pub total_deduction_amount: Decimal,
    /// Sum of every employee's late days.
    pub total_late_days: u32,
    /// `total_deduction_amount / total_employees_with_deductions`, or zero.
    pub average_deduction_per_employee: Decimal,
}

impl Default for DeductionSummary {
    fn default() -> Self {
        Self {
            total_employees_with_deductions: 0,
            total_deduction_amount: Decimal::ZERO,
            total_late_days: 0,
            average_deduction_per_employee: Decimal::ZERO,
        }
    }
}
