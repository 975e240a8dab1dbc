//! Core data models for the late deduction engine.
//!
//! Inputs (attendance and payroll records) are owned by other subsystems; the
//! output types are built fresh on every run and carry no persistence logic.

mod attendance;
mod deduction;
mod payroll;
mod period;
mod run;

pub use attendance::{AttendanceRecord, AttendanceStatus};
pub use deduction::{
    DayDeduction, DeductionBreakdown, DeductionDetail, DeductionMap, DeductionSummary,
};
pub use payroll::{DAYS_PER_SALARY_MONTH, PayrollRecord};
pub use period::DeductionPeriod;
pub use run::{DeductionRun, RunWarning, WarningSeverity};
