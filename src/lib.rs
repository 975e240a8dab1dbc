//! Late-Attendance Deduction Engine
//!
//! This crate computes salary deductions for late arrivals from attendance
//! records, payroll records and a configurable deduction policy, as used by
//! the HR and payroll side of an ISP back-office system.

#![warn(missing_docs)]

pub mod calculation;
pub mod config;
pub mod engine;
pub mod error;
pub mod models;
