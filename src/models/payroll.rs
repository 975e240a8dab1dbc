//! Payroll record model.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Days in the fixed month used to derive a daily salary.
pub const DAYS_PER_SALARY_MONTH: Decimal = Decimal::from_parts(30, 0, 0, false, 0);

/// The payroll data the engine needs for one employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayrollRecord {
    /// The employee this record belongs to.
    pub employee_id: String,
    /// The monthly base salary.
    pub base_salary: Decimal,
}

impl PayrollRecord {
    /// Returns the daily salary as `base_salary / 30`.
    ///
    /// The divisor is fixed and does not follow the calendar.
    ///
    /// # Example
    ///
    /// ```
    /// use late_deduction_engine::models::PayrollRecord;
    /// use rust_decimal::Decimal;
    ///
    /// let record = PayrollRecord {
    ///     employee_id: "emp_001".to_string(),
    ///     base_salary: Decimal::new(45000, 0),
    /// };
    /// assert_eq!(record.daily_salary(), Decimal::new(1500, 0));
    /// ```
    pub fn daily_salary(&self) -> Decimal {
        self.base_salary / DAYS_PER_SALARY_MONTH
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_daily_salary_divides_by_thirty() {
        let record = PayrollRecord {
            employee_id: "emp_001".to_string(),
            base_salary: dec("30000"),
        };
        assert_eq!(record.daily_salary(), dec("1000"));
    }

    #[test]
    fn test_daily_salary_of_zero_salary() {
        let record = PayrollRecord {
            employee_id: "emp_001".to_string(),
            base_salary: Decimal::ZERO,
        };
        assert_eq!(record.daily_salary(), Decimal::ZERO);
    }

    #[test]
    fn test_deserialize_numeric_salary() {
        let json = r#"{"employeeId": "emp_003", "baseSalary": 27000}"#;
        let record: PayrollRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.employee_id, "emp_003");
        assert_eq!(record.base_salary, dec("27000"));
    }

    #[test]
    fn test_deserialize_string_salary() {
        let json = r#"{"employeeId": "emp_004", "baseSalary": "31500.50"}"#;
        let record: PayrollRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.base_salary, dec("31500.50"));
    }
}
