//! Late deduction policy types.
//!
//! These structures are deserialized from the stored policy (YAML or JSON)
//! and passed by reference into the deduction calculations.

use std::collections::BTreeSet;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Selects the per-day deduction formula.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeductionType {
    /// A flat amount per late day.
    Fixed,
    /// A percentage of the daily salary per late day.
    Percentage,
    /// A tiered amount keyed by late minutes.
    Scaled,
    /// Any value the engine does not recognize. Always deducts nothing.
    #[serde(other)]
    Unknown,
}

/// An inclusive range of late minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MinutesRange {
    /// Lowest late minutes covered (inclusive).
    pub min: u32,
    /// Highest late minutes covered (inclusive).
    pub max: u32,
}

impl MinutesRange {
    /// Returns true if `minutes` falls inside the range.
    pub fn contains(&self, minutes: u32) -> bool {
        self.min <= minutes && minutes <= self.max
    }
}

/// One tier of a scaled deduction schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScaledDeduction {
    /// The late minutes this tier covers.
    pub minutes_range: MinutesRange,
    /// The amount deducted for a day in this tier.
    pub deduction_amount: Decimal,
}

impl ScaledDeduction {
    /// Creates a tier covering `min..=max` minutes.
    pub fn new(min: u32, max: u32, deduction_amount: Decimal) -> Self {
        Self {
            minutes_range: MinutesRange { min, max },
            deduction_amount,
        }
    }
}

/// The active late-arrival deduction policy.
///
/// Missing fields fall back to [`LateDeductionSettings::default`], so a stored
/// policy only needs the fields it changes.
///
/// # Example
///
/// ```
/// use late_deduction_engine::config::{DeductionType, LateDeductionSettings};
///
/// let settings: LateDeductionSettings = serde_json::from_str(
///     r#"{"enabled": true, "deductionType": "percentage", "percentageDeduction": 5}"#,
/// )
/// .unwrap();
/// assert!(settings.enabled);
/// assert_eq!(settings.deduction_type, DeductionType::Percentage);
/// assert_eq!(settings.late_threshold_minutes, 15);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LateDeductionSettings {
    /// Master switch. When false no deductions are produced.
    pub enabled: bool,
    /// Minimum lateness, in minutes, for a day to count as late.
    pub late_threshold_minutes: u32,
    /// The per-day deduction formula.
    pub deduction_type: DeductionType,
    /// Amount per late day for [`DeductionType::Fixed`].
    pub fixed_deduction_amount: Option<Decimal>,
    /// Percent of daily salary per late day for [`DeductionType::Percentage`].
    pub percentage_deduction: Option<Decimal>,
    /// Tiers for [`DeductionType::Scaled`], matched first to last.
    pub scaled_deductions: Vec<ScaledDeduction>,
    /// Minimum number of late days in a period before any deduction applies.
    pub apply_after_days: u32,
    /// Employees exempt from the policy.
    pub exclude_employee_ids: BTreeSet<String>,
}

impl Default for LateDeductionSettings {
    fn default() -> Self {
        Self {
            enabled: false,
            late_threshold_minutes: 15,
            deduction_type: DeductionType::Fixed,
            fixed_deduction_amount: Some(Decimal::new(50, 0)),
            percentage_deduction: Some(Decimal::new(10, 0)),
            scaled_deductions: vec![
                ScaledDeduction::new(15, 30, Decimal::new(30, 0)),
                ScaledDeduction::new(31, 60, Decimal::new(60, 0)),
                ScaledDeduction::new(61, 120, Decimal::new(100, 0)),
                ScaledDeduction::new(121, 999, Decimal::new(150, 0)),
            ],
            apply_after_days: 1,
            exclude_employee_ids: BTreeSet::new(),
        }
    }
}

impl LateDeductionSettings {
    /// Returns `apply_after_days`, treating zero as one.
    pub fn effective_apply_after_days(&self) -> u32 {
        self.apply_after_days.max(1)
    }

    /// Returns true if the employee is exempt from the policy.
    pub fn is_excluded(&self, employee_id: &str) -> bool {
        self.exclude_employee_ids.contains(employee_id)
    }

    /// Checks the policy for values the calculations would silently misread.
    ///
    /// Tiers are checked for overlap in `min` order, so an unsorted but
    /// otherwise valid schedule passes; use [`normalized`](Self::normalized)
    /// to put it in evaluation order.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidSettings`] naming the first offending field.
    pub fn validate(&self) -> EngineResult<()> {
        let hundred = Decimal::ONE_HUNDRED;

        if let Some(amount) = self.fixed_deduction_amount {
            if amount < Decimal::ZERO {
                return Err(invalid("fixedDeductionAmount", "must not be negative"));
            }
        }

        if let Some(percentage) = self.percentage_deduction {
            if percentage < Decimal::ZERO || percentage > hundred {
                return Err(invalid(
                    "percentageDeduction",
                    format!("must be between 0 and 100, got {}", percentage),
                ));
            }
        }

        for (index, tier) in self.scaled_deductions.iter().enumerate() {
            if tier.minutes_range.min > tier.minutes_range.max {
                return Err(invalid(
                    "scaledDeductions",
                    format!(
                        "tier {} has min {} greater than max {}",
                        index, tier.minutes_range.min, tier.minutes_range.max
                    ),
                ));
            }
            if tier.deduction_amount < Decimal::ZERO {
                return Err(invalid(
                    "scaledDeductions",
                    format!("tier {} has a negative deduction amount", index),
                ));
            }
        }

        let mut ranges: Vec<MinutesRange> = self
            .scaled_deductions
            .iter()
            .map(|t| t.minutes_range)
            .collect();
        ranges.sort_by_key(|r| r.min);
        for pair in ranges.windows(2) {
            if pair[1].min <= pair[0].max {
                return Err(invalid(
                    "scaledDeductions",
                    format!(
                        "ranges {}-{} and {}-{} overlap",
                        pair[0].min, pair[0].max, pair[1].min, pair[1].max
                    ),
                ));
            }
        }

        Ok(())
    }

    /// Returns a copy with scaled tiers sorted by their lower bound.
    pub fn normalized(&self) -> Self {
        let mut settings = self.clone();
        settings
            .scaled_deductions
            .sort_by_key(|t| t.minutes_range.min);
        settings
    }
}

fn invalid(field: &str, message: impl Into<String>) -> EngineError {
    EngineError::InvalidSettings {
        field: field.to_string(),
        message: message.into(),
    }
}
