//! Per-day late deduction.
//!
//! This module maps a day's lateness to a currency amount under the active
//! policy, and evaluates single check-ins outside a monthly run.

use rust_decimal::Decimal;

use crate::config::{DeductionType, LateDeductionSettings};
use crate::models::DayDeduction;

use super::time_parsing::parse_time_to_minutes;

/// Minutes between the official check-in time and the actual one.
///
/// Early arrivals count as zero minutes late.
pub fn late_minutes_between(check_in_minutes: u32, official_minutes: u32) -> u32 {
    check_in_minutes.saturating_sub(official_minutes)
}

/// Returns the deduction for one day that was `late_minutes` late.
///
/// Nothing is deducted when the policy is disabled or the lateness is below
/// the threshold. Otherwise the policy's deduction type decides:
///
/// - `fixed`: the fixed amount (zero if unset)
/// - `percentage`: `daily_salary * percentage / 100` (zero if unset)
/// - `scaled`: the amount of the first tier whose range contains
///   `late_minutes`; past every tier the last tier's amount applies, and an
///   empty schedule deducts nothing
/// - anything else: zero
///
/// Products that exceed the decimal range saturate at [`Decimal::MAX`].
///
/// # Examples
///
/// ```
/// use late_deduction_engine::calculation::deduction_for_late_minutes;
/// use late_deduction_engine::config::{DeductionType, LateDeductionSettings};
/// use rust_decimal::Decimal;
///
/// let settings = LateDeductionSettings {
///     enabled: true,
///     deduction_type: DeductionType::Percentage,
///     percentage_deduction: Some(Decimal::new(10, 0)),
///     ..LateDeductionSettings::default()
/// };
///
/// let deduction = deduction_for_late_minutes(20, Decimal::new(1500, 0), &settings);
/// assert_eq!(deduction, Decimal::new(150, 0));
/// ```
pub fn deduction_for_late_minutes(
    late_minutes: u32,
    daily_salary: Decimal,
    settings: &LateDeductionSettings,
) -> Decimal {
    if !settings.enabled || late_minutes < settings.late_threshold_minutes {
        return Decimal::ZERO;
    }

    match settings.deduction_type {
        DeductionType::Fixed => settings.fixed_deduction_amount.unwrap_or(Decimal::ZERO),
        DeductionType::Percentage => {
            let percentage = settings.percentage_deduction.unwrap_or(Decimal::ZERO);
            daily_salary.saturating_mul(percentage / Decimal::ONE_HUNDRED)
        }
        DeductionType::Scaled => settings
            .scaled_deductions
            .iter()
            .find(|tier| tier.minutes_range.contains(late_minutes))
            .or_else(|| settings.scaled_deductions.last())
            .map(|tier| tier.deduction_amount)
            .unwrap_or(Decimal::ZERO),
        DeductionType::Unknown => Decimal::ZERO,
    }
}

/// Evaluates a single check-in against the official check-in time.
///
/// Unlike the monthly calculation, no late-day count is required before the
/// deduction applies.
///
/// # Examples
///
/// ```
/// use late_deduction_engine::calculation::calculate_day_deduction;
/// use late_deduction_engine::config::LateDeductionSettings;
/// use rust_decimal::Decimal;
///
/// let settings = LateDeductionSettings {
///     enabled: true,
///     apply_after_days: 5,
///     ..LateDeductionSettings::default()
/// };
///
/// let result = calculate_day_deduction("08:52 AM", Decimal::ZERO, &settings, "08:30 AM");
/// assert_eq!(result.late_minutes, 22);
/// assert_eq!(result.deduction, Decimal::new(50, 0));
/// ```
pub fn calculate_day_deduction(
    check_in_time: &str,
    daily_salary: Decimal,
    settings: &LateDeductionSettings,
    official_check_in_time: &str,
) -> DayDeduction {
    let late_minutes = late_minutes_between(
        parse_time_to_minutes(check_in_time),
        parse_time_to_minutes(official_check_in_time),
    );

    DayDeduction {
        late_minutes,
        deduction: deduction_for_late_minutes(late_minutes, daily_salary, settings),
    }
}
