//! Monthly late deduction aggregation.
//!
//! This module turns a period's attendance into per-employee deductions:
//! attendance is grouped by employee, every evaluated day is compared with the
//! official check-in time, and employees who reach the policy's late-day
//! minimum receive a [`DeductionDetail`].

use std::collections::{BTreeMap, HashMap};

use rust_decimal::Decimal;
use tracing::debug;

use crate::config::LateDeductionSettings;
use crate::models::{
    AttendanceRecord, DeductionBreakdown, DeductionDetail, DeductionMap, PayrollRecord,
};

use super::day_deduction::{deduction_for_late_minutes, late_minutes_between};
use super::time_parsing::parse_time_to_minutes;

/// The on-time mark used when the caller has no site-specific one.
pub const DEFAULT_OFFICIAL_CHECK_IN_TIME: &str = "08:30 AM";

/// Groups attendance by employee id, keeping record order within each group.
pub(crate) fn group_by_employee(
    attendance_records: &[AttendanceRecord],
) -> BTreeMap<&str, Vec<&AttendanceRecord>> {
    let mut groups: BTreeMap<&str, Vec<&AttendanceRecord>> = BTreeMap::new();
    for record in attendance_records {
        groups
            .entry(record.employee_id.as_str())
            .or_default()
            .push(record);
    }
    groups
}

/// Indexes payroll by employee id; the first record for an employee wins.
pub(crate) fn index_payroll(payroll_records: &[PayrollRecord]) -> HashMap<&str, &PayrollRecord> {
    let mut index = HashMap::with_capacity(payroll_records.len());
    for record in payroll_records {
        index.entry(record.employee_id.as_str()).or_insert(record);
    }
    index
}

/// Calculates late-arrival deductions for every employee in `attendance_records`.
///
/// # Arguments
///
/// * `attendance_records` - Attendance for the period, any order
/// * `payroll_records` - Base salaries; the first record per employee is used
/// * `settings` - The active late deduction policy
/// * `official_check_in_time` - The on-time mark for every employee and day,
///   usually [`DEFAULT_OFFICIAL_CHECK_IN_TIME`]
///
/// # Returns
///
/// A map from employee id to [`DeductionDetail`]. An employee is present only
/// if they are not exempt, reached `apply_after_days` late days, and were late
/// by a positive number of minutes in total. A disabled policy returns an
/// empty map.
///
/// Only `present` and `late` records are evaluated. A day counts as late when
/// its lateness reaches `late_threshold_minutes`; each such day adds a
/// breakdown entry whose deduction uses a daily salary of `base_salary / 30`
/// (zero without a payroll record).
///
/// # Example
///
/// ```
/// use late_deduction_engine::calculation::{
///     calculate_monthly_deductions, DEFAULT_OFFICIAL_CHECK_IN_TIME,
/// };
/// use late_deduction_engine::config::LateDeductionSettings;
/// use late_deduction_engine::models::{AttendanceRecord, AttendanceStatus};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let attendance = vec![AttendanceRecord {
///     employee_id: "emp_001".to_string(),
///     employee_name: "Amina Wanjiru".to_string(),
///     date: NaiveDate::from_ymd_opt(2026, 3, 2).unwrap(),
///     check_in_time: "08:50 AM".to_string(),
///     status: AttendanceStatus::Late,
/// }];
/// let settings = LateDeductionSettings {
///     enabled: true,
///     ..LateDeductionSettings::default()
/// };
///
/// let deductions =
///     calculate_monthly_deductions(&attendance, &[], &settings, DEFAULT_OFFICIAL_CHECK_IN_TIME);
/// assert_eq!(deductions["emp_001"].late_days, 1);
/// assert_eq!(deductions["emp_001"].deduction_amount, Decimal::new(50, 0));
/// ```
pub fn calculate_monthly_deductions(
    attendance_records: &[AttendanceRecord],
    payroll_records: &[PayrollRecord],
    settings: &LateDeductionSettings,
    official_check_in_time: &str,
) -> DeductionMap {
    let mut deductions = DeductionMap::new();

    if !settings.enabled {
        return deductions;
    }

    let official_minutes = parse_time_to_minutes(official_check_in_time);
    let payroll = index_payroll(payroll_records);

    for (employee_id, records) in group_by_employee(attendance_records) {
        if settings.is_excluded(employee_id) {
            debug!(employee_id, "Skipping exempt employee");
            continue;
        }

        let daily_salary = payroll
            .get(employee_id)
            .map(|record| record.daily_salary())
            .unwrap_or(Decimal::ZERO);

        match evaluate_employee(employee_id, &records, daily_salary, official_minutes, settings) {
            Some(detail) => {
                deductions.insert(employee_id.to_string(), detail);
            }
            None => {
                debug!(employee_id, "No deduction after late-day gate");
            }
        }
    }

    deductions
}

fn evaluate_employee(
    employee_id: &str,
    records: &[&AttendanceRecord],
    daily_salary: Decimal,
    official_minutes: u32,
    settings: &LateDeductionSettings,
) -> Option<DeductionDetail> {
    let employee_name = records
        .first()
        .map(|record| record.employee_name.clone())
        .unwrap_or_default();

    let mut late_days: u32 = 0;
    let mut total_late_minutes: u32 = 0;
    let mut breakdown = Vec::new();

    for record in records
        .iter()
        .filter(|record| record.status.counts_for_lateness())
    {
        let late_minutes = late_minutes_between(
            parse_time_to_minutes(&record.check_in_time),
            official_minutes,
        );

        if late_minutes >= settings.late_threshold_minutes {
            late_days = late_days.saturating_add(1);
            total_late_minutes = total_late_minutes.saturating_add(late_minutes);
            breakdown.push(DeductionBreakdown {
                date: record.date,
                late_minutes,
                day_deduction: deduction_for_late_minutes(late_minutes, daily_salary, settings),
            });
        }
    }

    if late_days < settings.effective_apply_after_days() || total_late_minutes == 0 {
        return None;
    }

    Some(DeductionDetail {
        employee_id: employee_id.to_string(),
        employee_name,
        late_days,
        total_late_minutes,
        average_late_minutes: rounded_average(total_late_minutes, late_days),
        deduction_amount: breakdown
            .iter()
            .fold(Decimal::ZERO, |total, entry| total.saturating_add(entry.day_deduction)),
        breakdown,
    })
}

/// `total / count` rounded to the nearest integer, halves rounding up.
fn rounded_average(total: u32, count: u32) -> u32 {
    if count == 0 {
        return 0;
    }
    let (total, count) = (u64::from(total), u64::from(count));
    ((2 * total + count) / (2 * count)) as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DeductionType, ScaledDeduction};
    use crate::models::AttendanceStatus;
    use chrono::NaiveDate;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn record(
        employee_id: &str,
        day: u32,
        check_in: &str,
        status: AttendanceStatus,
    ) -> AttendanceRecord {
        AttendanceRecord {
            employee_id: employee_id.to_string(),
            employee_name: format!("Employee {}", employee_id),
            date: NaiveDate::from_ymd_opt(2026, 3, day).unwrap(),
            check_in_time: check_in.to_string(),
            status,
        }
    }

    fn late(employee_id: &str, day: u32, check_in: &str) -> AttendanceRecord {
        record(employee_id, day, check_in, AttendanceStatus::Late)
    }

    fn payroll(employee_id: &str, base_salary: &str) -> PayrollRecord {
        PayrollRecord {
            employee_id: employee_id.to_string(),
            base_salary: dec(base_salary),
        }
    }

    fn fixed_settings() -> LateDeductionSettings {
        LateDeductionSettings {
            enabled: true,
            late_threshold_minutes: 15,
            deduction_type: DeductionType::Fixed,
            fixed_deduction_amount: Some(dec("50")),
            apply_after_days: 1,
            ..LateDeductionSettings::default()
        }
    }

    fn run(attendance: &[AttendanceRecord], settings: &LateDeductionSettings) -> DeductionMap {
        calculate_monthly_deductions(attendance, &[], settings, DEFAULT_OFFICIAL_CHECK_IN_TIME)
    }

    #[test]
    fn test_disabled_policy_returns_empty_map() {
        let mut settings = fixed_settings();
        settings.enabled = false;
        let attendance = vec![late("emp_001", 2, "10:00 AM"), late("emp_002", 2, "11:00 AM")];
        let payroll_records = vec![payroll("emp_001", "30000")];

        let result = calculate_monthly_deductions(
            &attendance,
            &payroll_records,
            &settings,
            DEFAULT_OFFICIAL_CHECK_IN_TIME,
        );
        assert!(result.is_empty());
    }

    #[test]
    fn test_threshold_boundary() {
        let settings = fixed_settings();

        let result = run(&[late("emp_001", 2, "08:44 AM")], &settings);
        assert!(result.is_empty());

        let result = run(&[late("emp_001", 2, "08:45 AM")], &settings);
        assert_eq!(result["emp_001"].breakdown.len(), 1);
        assert_eq!(result["emp_001"].breakdown[0].late_minutes, 15);
    }

    #[test]
    fn test_fixed_deduction_two_late_days() {
        let settings = fixed_settings();
        let attendance = vec![late("emp_001", 2, "08:50 AM"), late("emp_001", 3, "09:40 AM")];

        let result = run(&attendance, &settings);
        let detail = &result["emp_001"];
        assert_eq!(detail.late_days, 2);
        assert_eq!(detail.total_late_minutes, 90);
        assert_eq!(detail.average_late_minutes, 45);
        assert_eq!(detail.deduction_amount, dec("100"));
    }

    #[test]
    fn test_apply_after_days_gate() {
        let mut settings = fixed_settings();
        settings.apply_after_days = 3;

        let two_days = vec![late("emp_001", 2, "09:00 AM"), late("emp_001", 3, "09:00 AM")];
        assert!(run(&two_days, &settings).is_empty());

        let mut three_days = two_days.clone();
        three_days.push(late("emp_001", 4, "09:00 AM"));
        let result = run(&three_days, &settings);
        assert_eq!(result["emp_001"].late_days, 3);
        assert_eq!(result["emp_001"].deduction_amount, dec("150"));
    }

    #[test]
    fn test_apply_after_days_zero_behaves_as_one() {
        let mut settings = fixed_settings();
        settings.apply_after_days = 0;
        let result = run(&[late("emp_001", 2, "09:00 AM")], &settings);
        assert_eq!(result.len(), 1);
    }

    #[test]
    fn test_excluded_employee_never_appears() {
        let mut settings = fixed_settings();
        settings.exclude_employee_ids.insert("emp_002".to_string());
        let attendance = vec![
            late("emp_001", 2, "09:00 AM"),
            late("emp_002", 2, "11:00 AM"),
            late("emp_002", 3, "11:30 AM"),
        ];

        let result = run(&attendance, &settings);
        assert!(result.contains_key("emp_001"));
        assert!(!result.contains_key("emp_002"));
    }

    #[test]
    fn test_absent_and_half_day_are_not_evaluated() {
        let settings = fixed_settings();
        let attendance = vec![
            record("emp_001", 2, "11:00 AM", AttendanceStatus::Absent),
            record("emp_001", 3, "01:00 PM", AttendanceStatus::HalfDay),
        ];
        assert!(run(&attendance, &settings).is_empty());
    }

    #[test]
    fn test_present_status_is_evaluated() {
        let settings = fixed_settings();
        let attendance = vec![record("emp_001", 2, "09:05 AM", AttendanceStatus::Present)];
        let result = run(&attendance, &settings);
        assert_eq!(result["emp_001"].late_days, 1);
    }

    #[test]
    fn test_zero_threshold_requires_positive_total_minutes() {
        let mut settings = fixed_settings();
        settings.late_threshold_minutes = 0;
        let attendance = vec![late("emp_001", 2, "08:30 AM"), late("emp_001", 3, "08:00 AM")];
        assert!(run(&attendance, &settings).is_empty());
    }

    #[test]
    fn test_employee_name_comes_from_first_record() {
        let settings = fixed_settings();
        let mut first = late("emp_001", 2, "09:00 AM");
        first.employee_name = "Amina Wanjiru".to_string();
        let mut second = late("emp_001", 3, "09:00 AM");
        second.employee_name = "A. Wanjiru".to_string();

        let result = run(&[first, second], &settings);
        assert_eq!(result["emp_001"].employee_name, "Amina Wanjiru");
    }

    #[test]
    fn test_breakdown_keeps_record_order() {
        let settings = fixed_settings();
        let attendance = vec![
            late("emp_001", 9, "09:00 AM"),
            late("emp_002", 2, "09:00 AM"),
            late("emp_001", 3, "09:10 AM"),
        ];

        let result = run(&attendance, &settings);
        let days: Vec<u32> = result["emp_001"]
            .breakdown
            .iter()
            .map(|entry| chrono::Datelike::day(&entry.date))
            .collect();
        assert_eq!(days, vec![9, 3]);
    }

    #[test]
    fn test_percentage_uses_first_payroll_record() {
        let settings = LateDeductionSettings {
            deduction_type: DeductionType::Percentage,
            percentage_deduction: Some(dec("10")),
            ..fixed_settings()
        };
        let payroll_records = vec![payroll("emp_001", "30000"), payroll("emp_001", "60000")];

        let result = calculate_monthly_deductions(
            &[late("emp_001", 2, "09:00 AM")],
            &payroll_records,
            &settings,
            DEFAULT_OFFICIAL_CHECK_IN_TIME,
        );
        assert_eq!(result["emp_001"].deduction_amount, dec("100"));
    }

    #[test]
    fn test_percentage_without_payroll_is_zero_but_listed() {
        let settings = LateDeductionSettings {
            deduction_type: DeductionType::Percentage,
            ..fixed_settings()
        };
        let result = run(&[late("emp_001", 2, "09:00 AM")], &settings);
        assert_eq!(result["emp_001"].deduction_amount, Decimal::ZERO);
        assert_eq!(result["emp_001"].late_days, 1);
    }

    #[test]
    fn test_scaled_deductions_sum_per_day() {
        let settings = LateDeductionSettings {
            deduction_type: DeductionType::Scaled,
            scaled_deductions: vec![
                ScaledDeduction::new(15, 30, dec("30")),
                ScaledDeduction::new(31, 60, dec("60")),
                ScaledDeduction::new(61, 120, dec("100")),
                ScaledDeduction::new(121, 999, dec("150")),
            ],
            ..fixed_settings()
        };
        let attendance = vec![
            late("emp_001", 2, "08:50 AM"),
            late("emp_001", 3, "09:15 AM"),
            late("emp_001", 4, "10:00 AM"),
            late("emp_001", 5, "02:00 PM"),
        ];

        let result = run(&attendance, &settings);
        let detail = &result["emp_001"];
        let amounts: Vec<Decimal> = detail.breakdown.iter().map(|b| b.day_deduction).collect();
        assert_eq!(amounts, vec![dec("30"), dec("60"), dec("100"), dec("150")]);
        assert_eq!(detail.deduction_amount, dec("340"));
    }

    #[test]
    fn test_maximum_fixed_amount_saturates_monthly_total() {
        let settings = LateDeductionSettings {
            fixed_deduction_amount: Some(Decimal::MAX),
            ..fixed_settings()
        };
        let attendance = vec![late("emp_001", 2, "09:00 AM"), late("emp_001", 3, "09:00 AM")];

        let result = run(&attendance, &settings);
        assert_eq!(result["emp_001"].late_days, 2);
        assert_eq!(result["emp_001"].deduction_amount, Decimal::MAX);
    }

    #[test]
    fn test_maximum_salary_percentage_policy_does_not_overflow() {
        let settings = LateDeductionSettings {
            deduction_type: DeductionType::Percentage,
            percentage_deduction: Some(Decimal::ONE_HUNDRED),
            ..fixed_settings()
        };
        let payroll_records = vec![PayrollRecord {
            employee_id: "emp_001".to_string(),
            base_salary: Decimal::MAX,
        }];
        let attendance = vec![late("emp_001", 2, "09:00 AM"), late("emp_001", 3, "09:00 AM")];

        let result = calculate_monthly_deductions(
            &attendance,
            &payroll_records,
            &settings,
            DEFAULT_OFFICIAL_CHECK_IN_TIME,
        );
        let daily_salary = payroll_records[0].daily_salary();
        assert_eq!(result["emp_001"].breakdown[0].day_deduction, daily_salary);
        assert_eq!(
            result["emp_001"].deduction_amount,
            daily_salary.saturating_add(daily_salary)
        );
    }

    #[test]
    fn test_unparsable_check_in_reads_as_on_time() {
        let settings = fixed_settings();
        let attendance = vec![late("emp_001", 2, "device error")];
        assert!(run(&attendance, &settings).is_empty());
    }

    #[test]
    fn test_custom_official_check_in_time() {
        let settings = fixed_settings();
        let attendance = vec![late("emp_001", 2, "09:10 AM")];

        let result = calculate_monthly_deductions(&attendance, &[], &settings, "09:00 AM");
        assert!(result.is_empty());

        let result = calculate_monthly_deductions(&attendance, &[], &settings, "08:00 AM");
        assert_eq!(result["emp_001"].breakdown[0].late_minutes, 70);
    }

    #[test]
    fn test_rounded_average() {
        assert_eq!(rounded_average(0, 0), 0);
        assert_eq!(rounded_average(45, 2), 23);
        assert_eq!(rounded_average(44, 3), 15);
        assert_eq!(rounded_average(46, 3), 15);
        assert_eq!(rounded_average(47, 3), 16);
    }

    #[test]
    fn test_group_by_employee_preserves_order() {
        let attendance = vec![
            late("emp_002", 5, "09:00 AM"),
            late("emp_001", 1, "09:00 AM"),
            late("emp_002", 2, "09:00 AM"),
        ];
        let groups = group_by_employee(&attendance);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups["emp_002"][0].date, attendance[0].date);
        assert_eq!(groups["emp_002"][1].date, attendance[2].date);
    }
}
