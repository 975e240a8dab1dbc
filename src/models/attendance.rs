//! Attendance record model.
//!
//! Attendance records are produced by the attendance subsystem (biometric
//! devices, manual entry) and are read-only input to the deduction engine.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The attendance status recorded for an employee on a given day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AttendanceStatus {
    /// The employee checked in.
    Present,
    /// The employee did not attend.
    Absent,
    /// The employee checked in and was flagged late by the device.
    Late,
    /// The employee worked half the day.
    HalfDay,
}

impl AttendanceStatus {
    /// Returns true if records with this status are evaluated for lateness.
    ///
    /// Only `present` and `late` days count; absences and half days never do,
    /// even when a check-in time was captured.
    ///
    /// # Example
    ///
    /// ```
    /// use late_deduction_engine::models::AttendanceStatus;
    ///
    /// assert!(AttendanceStatus::Late.counts_for_lateness());
    /// assert!(!AttendanceStatus::HalfDay.counts_for_lateness());
    /// ```
    pub fn counts_for_lateness(self) -> bool {
        matches!(self, AttendanceStatus::Present | AttendanceStatus::Late)
    }
}

/// A single day of attendance for one employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceRecord {
    /// The employee this record belongs to.
    pub employee_id: String,
    /// The employee's display name.
    pub employee_name: String,
    /// The calendar date of the record.
    pub date: NaiveDate,
    /// The raw check-in time, e.g. "08:30 AM" or "08:30".
    #[serde(default)]
    pub check_in_time: String,
    /// The attendance status for the day.
    pub status: AttendanceStatus,
}
