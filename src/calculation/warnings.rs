//! Data-quality warnings for a deduction run.
//!
//! The calculations read an unparsable check-in as midnight and a missing
//! salary as zero, without saying so. This module reports where that happened
//! without changing any amount.

use std::collections::BTreeSet;

use crate::config::{DeductionType, LateDeductionSettings};
use crate::models::{AttendanceRecord, PayrollRecord, RunWarning, WarningSeverity};

use super::monthly::index_payroll;
use super::time_parsing::try_parse_time_to_minutes;

/// Warning code for a check-in time that is not a recognizable clock time.
pub const UNPARSABLE_CHECK_IN: &str = "UNPARSABLE_CHECK_IN";

/// Warning code for an employee with no payroll record under a percentage policy.
pub const MISSING_PAYROLL: &str = "MISSING_PAYROLL";

/// Lists data-quality issues in the records a monthly calculation would evaluate.
///
/// Only `present`/`late` records of non-exempt employees are inspected, and a
/// disabled policy yields no warnings. A blank check-in is reported at
/// [`WarningSeverity::Low`], unrecognizable text at [`WarningSeverity::Medium`].
/// At most one missing-payroll warning is raised per employee.
pub fn collect_warnings(
    attendance_records: &[AttendanceRecord],
    payroll_records: &[PayrollRecord],
    settings: &LateDeductionSettings,
) -> Vec<RunWarning> {
    let mut warnings = Vec::new();
    if !settings.enabled {
        return warnings;
    }

    let payroll = index_payroll(payroll_records);
    let needs_salary = settings.deduction_type == DeductionType::Percentage;
    let mut missing_payroll_reported = BTreeSet::new();

    for record in attendance_records {
        if !record.status.counts_for_lateness() || settings.is_excluded(&record.employee_id) {
            continue;
        }

        if try_parse_time_to_minutes(&record.check_in_time).is_none() {
            let blank = record.check_in_time.trim().is_empty();
            let message = if blank {
                format!("No check-in time recorded on {}; read as 00:00", record.date)
            } else {
                format!(
                    "Check-in time '{}' on {} could not be parsed and was read as 00:00",
                    record.check_in_time, record.date
                )
            };
            warnings.push(RunWarning {
                code: UNPARSABLE_CHECK_IN.to_string(),
                message,
                severity: if blank {
                    WarningSeverity::Low
                } else {
                    WarningSeverity::Medium
                },
                employee_id: record.employee_id.clone(),
            });
        }

        if needs_salary
            && !payroll.contains_key(record.employee_id.as_str())
            && missing_payroll_reported.insert(record.employee_id.as_str())
        {
            warnings.push(RunWarning {
                code: MISSING_PAYROLL.to_string(),
                message: format!(
                    "No payroll record for '{}'; percentage deductions are zero",
                    record.employee_id
                ),
                severity: WarningSeverity::Medium,
                employee_id: record.employee_id.clone(),
            });
        }
    }

    warnings
}
