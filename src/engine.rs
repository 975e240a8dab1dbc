//! Deduction engine facade.
//!
//! [`DeductionEngine`] binds a [`SettingsProvider`] to an official check-in
//! time and produces identified [`DeductionRun`] reports. The arithmetic lives
//! in [`crate::calculation`]; this type only fetches the policy, filters by
//! period, and records the outcome.

use std::time::Instant;

use chrono::Utc;
use rust_decimal::Decimal;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{
    DEFAULT_OFFICIAL_CHECK_IN_TIME, calculate_day_deduction, calculate_monthly_deductions,
    collect_warnings, get_deduction_summary,
};
use crate::config::SettingsProvider;
use crate::error::EngineResult;
use crate::models::{AttendanceRecord, DayDeduction, DeductionPeriod, DeductionRun, PayrollRecord};

/// The version recorded on every run.
pub const ENGINE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Evaluates attendance against the policy supplied by a [`SettingsProvider`].
///
/// The policy is fetched fresh on every call, so a provider that reloads its
/// source is picked up without rebuilding the engine.
///
/// # Example
///
/// ```
/// use late_deduction_engine::config::LateDeductionSettings;
/// use late_deduction_engine::engine::DeductionEngine;
/// use late_deduction_engine::models::{AttendanceRecord, AttendanceStatus, DeductionPeriod};
/// use chrono::NaiveDate;
///
/// let settings = LateDeductionSettings {
///     enabled: true,
///     ..LateDeductionSettings::default()
/// };
/// let engine = DeductionEngine::new(settings).with_official_check_in_time("08:00 AM");
///
/// let attendance = vec![AttendanceRecord {
///     employee_id: "emp_001".to_string(),
///     employee_name: "Amina Wanjiru".to_string(),
///     date: NaiveDate::from_ymd_opt(2026, 3, 2).unwrap(),
///     check_in_time: "08:20 AM".to_string(),
///     status: AttendanceStatus::Late,
/// }];
///
/// let run = engine
///     .run_for_period(DeductionPeriod::month(2026, 3).unwrap(), &attendance, &[])
///     .unwrap();
/// assert_eq!(run.summary.total_employees_with_deductions, 1);
/// assert_eq!(run.official_check_in_time, "08:00 AM");
/// ```
#[derive(Debug, Clone)]
pub struct DeductionEngine<P> {
    provider: P,
    official_check_in_time: String,
}

impl<P: SettingsProvider> DeductionEngine<P> {
    /// Creates an engine using [`DEFAULT_OFFICIAL_CHECK_IN_TIME`].
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            official_check_in_time: DEFAULT_OFFICIAL_CHECK_IN_TIME.to_string(),
        }
    }

    /// Replaces the on-time mark every check-in is compared with.
    pub fn with_official_check_in_time(
        mut self,
        official_check_in_time: impl Into<String>,
    ) -> Self {
        self.official_check_in_time = official_check_in_time.into();
        self
    }

    /// Returns the on-time mark in use.
    pub fn official_check_in_time(&self) -> &str {
        &self.official_check_in_time
    }

    /// Calculates deductions over every supplied attendance record.
    ///
    /// # Errors
    ///
    /// Only fails if the provider cannot supply a policy.
    pub fn run(
        &self,
        attendance_records: &[AttendanceRecord],
        payroll_records: &[PayrollRecord],
    ) -> EngineResult<DeductionRun> {
        self.evaluate(None, attendance_records, payroll_records)
    }

    /// Calculates deductions over the attendance records dated inside `period`.
    ///
    /// # Errors
    ///
    /// Only fails if the provider cannot supply a policy.
    pub fn run_for_period(
        &self,
        period: DeductionPeriod,
        attendance_records: &[AttendanceRecord],
        payroll_records: &[PayrollRecord],
    ) -> EngineResult<DeductionRun> {
        let in_period: Vec<AttendanceRecord> = attendance_records
            .iter()
            .filter(|record| period.contains_date(record.date))
            .cloned()
            .collect();
        self.evaluate(Some(period), &in_period, payroll_records)
    }

    /// Evaluates a single check-in with the current policy.
    ///
    /// # Errors
    ///
    /// Only fails if the provider cannot supply a policy.
    pub fn day_deduction(
        &self,
        check_in_time: &str,
        daily_salary: Decimal,
    ) -> EngineResult<DayDeduction> {
        let settings = self.provider.late_deduction_settings()?;
        Ok(calculate_day_deduction(
            check_in_time,
            daily_salary,
            &settings,
            &self.official_check_in_time,
        ))
    }

    fn evaluate(
        &self,
        period: Option<DeductionPeriod>,
        attendance_records: &[AttendanceRecord],
        payroll_records: &[PayrollRecord],
    ) -> EngineResult<DeductionRun> {
        let started = Instant::now();
        let run_id = Uuid::new_v4();
        let settings = self.provider.late_deduction_settings()?;
        let period_label = period.and_then(|p| p.month_label());

        info!(
            run_id = %run_id,
            period = period_label.as_deref().unwrap_or("custom"),
            records = attendance_records.len(),
            policy_enabled = settings.enabled,
            "Starting late deduction run"
        );

        let deductions = calculate_monthly_deductions(
            attendance_records,
            payroll_records,
            &settings,
            &self.official_check_in_time,
        );
        let summary = get_deduction_summary(&deductions);
        let warnings = collect_warnings(attendance_records, payroll_records, &settings);

        if !warnings.is_empty() {
            warn!(
                run_id = %run_id,
                warnings = warnings.len(),
                "Late deduction run raised data-quality warnings"
            );
        }

        info!(
            run_id = %run_id,
            employees = summary.total_employees_with_deductions,
            total_deduction = %summary.total_deduction_amount,
            duration_us = started.elapsed().as_micros(),
            "Late deduction run completed"
        );

        Ok(DeductionRun {
            run_id,
            timestamp: Utc::now(),
            engine_version: ENGINE_VERSION.to_string(),
            official_check_in_time: self.official_check_in_time.clone(),
            period,
            period_label,
            deductions,
            summary,
            warnings,
        })
    }
}
