//! Settings provider abstraction.
//!
//! The engine never reaches for stored settings itself; the policy is
//! injected through a [`SettingsProvider`].

use std::sync::Arc;

use crate::error::EngineResult;

use super::loader::SettingsLoader;
use super::types::LateDeductionSettings;

/// Supplies the active late deduction policy.
pub trait SettingsProvider {
    /// Returns the policy to evaluate with.
    fn late_deduction_settings(&self) -> EngineResult<LateDeductionSettings>;
}

/// A fixed policy value acts as its own provider.
impl SettingsProvider for LateDeductionSettings {
    fn late_deduction_settings(&self) -> EngineResult<LateDeductionSettings> {
        Ok(self.clone())
    }
}

impl SettingsProvider for SettingsLoader {
    fn late_deduction_settings(&self) -> EngineResult<LateDeductionSettings> {
        Ok(self.settings().clone())
    }
}

impl<P: SettingsProvider + ?Sized> SettingsProvider for Arc<P> {
    fn late_deduction_settings(&self) -> EngineResult<LateDeductionSettings> {
        (**self).late_deduction_settings()
    }
}

impl<P: SettingsProvider + ?Sized> SettingsProvider for &P {
    fn late_deduction_settings(&self) -> EngineResult<LateDeductionSettings> {
        (**self).late_deduction_settings()
    }
}
