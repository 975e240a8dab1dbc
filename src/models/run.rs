//! Engine run report models.
//!
//! A [`DeductionRun`] wraps the deductions computed for one evaluation with
//! the metadata needed to store and audit it: a run id, a timestamp, the
//! engine version and any data-quality warnings raised along the way.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{DeductionMap, DeductionPeriod, DeductionSummary};

/// How much attention a [`RunWarning`] deserves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WarningSeverity {
    /// The record is incomplete but nothing was misread.
    Low,
    /// The computed amount may be lower than intended.
    Medium,
}

/// A data-quality issue noticed while evaluating attendance.
///
/// Warnings never change the computed amounts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level.
    pub severity: WarningSeverity,
    /// The employee the warning concerns.
    pub employee_id: String,
}

/// The complete result of one engine run.
///
/// # Example
///
/// ```
/// use late_deduction_engine::models::{DeductionMap, DeductionRun, DeductionSummary};
/// use chrono::Utc;
/// use uuid::Uuid;
///
/// let run = DeductionRun {
///     run_id: Uuid::new_v4(),
///     timestamp: Utc::now(),
///     engine_version: "0.1.0".to_string(),
///     official_check_in_time: "08:30 AM".to_string(),
///     period: None,
///     period_label: None,
///     deductions: DeductionMap::new(),
///     summary: DeductionSummary::default(),
///     warnings: vec![],
/// };
/// assert!(run.deductions.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeductionRun {
    /// Unique identifier for this run.
    pub run_id: Uuid,
    /// When the run was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the run.
    pub engine_version: String,
    /// The on-time mark every check-in was compared with.
    pub official_check_in_time: String,
    /// The period attendance was restricted to, if any.
    pub period: Option<DeductionPeriod>,
    /// "YYYY-MM" when `period` is a whole calendar month.
    pub period_label: Option<String>,
    /// Per-employee deductions.
    pub deductions: DeductionMap,
    /// Totals over `deductions`.
    pub summary: DeductionSummary,
    /// Data-quality warnings raised during the run.
    pub warnings: Vec<RunWarning>,
}
