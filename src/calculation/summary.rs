//! Deduction rollups.

use rust_decimal::Decimal;

use crate::models::{DeductionDetail, DeductionMap, DeductionSummary};

/// Totals a deduction map.
///
/// The average is the total deduction divided by the number of employees, or
/// zero for an empty map. Totals saturate at [`Decimal::MAX`] and `u32::MAX`.
///
/// # Example
///
/// ```
/// use late_deduction_engine::calculation::get_deduction_summary;
/// use late_deduction_engine::models::DeductionMap;
/// use rust_decimal::Decimal;
///
/// let summary = get_deduction_summary(&DeductionMap::new());
/// assert_eq!(summary.total_employees_with_deductions, 0);
/// assert_eq!(summary.average_deduction_per_employee, Decimal::ZERO);
/// ```
pub fn get_deduction_summary(deductions: &DeductionMap) -> DeductionSummary {
    let total_employees_with_deductions = deductions.len();
    let total_deduction_amount = deductions
        .values()
        .fold(Decimal::ZERO, |total, d| total.saturating_add(d.deduction_amount));
    let total_late_days = deductions
        .values()
        .fold(0u32, |total, d| total.saturating_add(d.late_days));

    let average_deduction_per_employee = if total_employees_with_deductions > 0 {
        total_deduction_amount / Decimal::from(total_employees_with_deductions)
    } else {
        Decimal::ZERO
    };

    DeductionSummary {
        total_employees_with_deductions,
        total_deduction_amount,
        total_late_days,
        average_deduction_per_employee,
    }
}

/// Applies a deduction to a monthly base salary, never going below zero.
///
/// # Example
///
/// ```
/// use late_deduction_engine::calculation::net_salary_after_deduction;
/// use rust_decimal::Decimal;
///
/// assert_eq!(
///     net_salary_after_deduction(Decimal::new(30000, 0), None),
///     Decimal::new(30000, 0)
/// );
/// ```
pub fn net_salary_after_deduction(
    base_salary: Decimal,
    detail: Option<&DeductionDetail>,
) -> Decimal {
    let deduction = detail.map(|d| d.deduction_amount).unwrap_or(Decimal::ZERO);
    base_salary.saturating_sub(deduction).max(Decimal::ZERO)
}
