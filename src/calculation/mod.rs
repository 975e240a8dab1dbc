//! Calculation logic for the late deduction engine.
//!
//! This module contains check-in time parsing, the per-day deduction formula,
//! monthly aggregation per employee, summary rollups, and the data-quality
//! warnings reported alongside a run.

mod day_deduction;
mod monthly;
mod summary;
mod time_parsing;
mod warnings;

pub use day_deduction::{calculate_day_deduction, deduction_for_late_minutes, late_minutes_between};
pub use monthly::{DEFAULT_OFFICIAL_CHECK_IN_TIME, calculate_monthly_deductions};
pub use summary::{get_deduction_summary, net_salary_after_deduction};
pub use time_parsing::{parse_time_to_minutes, try_parse_time_to_minutes};
pub use warnings::{MISSING_PAYROLL, UNPARSABLE_CHECK_IN, collect_warnings};
