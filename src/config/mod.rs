//! Late deduction policy configuration.
//!
//! This module provides the policy types, the [`SettingsProvider`] seam the
//! engine reads its policy through, and a file-backed [`SettingsLoader`].
//!
//! # Example
//!
//! ```no_run
//! use late_deduction_engine::config::SettingsLoader;
//!
//! let loader = SettingsLoader::load("./config/late_deductions.yaml").unwrap();
//! println!("Deductions enabled: {}", loader.settings().enabled);
//! ```

mod loader;
mod provider;
mod types;

pub use loader::SettingsLoader;
pub use provider::SettingsProvider;
pub use types::{DeductionType, LateDeductionSettings, MinutesRange, ScaledDeduction};
