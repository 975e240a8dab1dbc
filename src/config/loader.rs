//! Settings loading functionality.
//!
//! This module provides the [`SettingsLoader`] type for loading the late
//! deduction policy from a YAML or JSON file.

use std::fs;
use std::path::Path;

use tracing::{debug, warn};

use crate::error::{EngineError, EngineResult};

use super::types::LateDeductionSettings;

/// Loads, validates and holds the late deduction policy.
///
/// The format is picked from the file extension: `.yaml`/`.yml` are read as
/// YAML, `.json` as JSON (the shape the settings screen stores). Loaded
/// settings are validated and their scaled tiers sorted, so the engine can
/// trust them as given.
///
/// # Example
///
/// ```no_run
/// use late_deduction_engine::config::SettingsLoader;
///
/// let loader = SettingsLoader::load("./config/late_deductions.yaml")?;
/// println!("Late threshold: {} minutes", loader.settings().late_threshold_minutes);
/// # Ok::<(), late_deduction_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct SettingsLoader {
    settings: LateDeductionSettings,
}

impl SettingsLoader {
    /// Loads settings from the file at `path`.
    ///
    /// # Errors
    ///
    /// - [`EngineError::ConfigNotFound`] if the file cannot be read
    /// - [`EngineError::UnsupportedConfigFormat`] for an unknown extension
    /// - [`EngineError::ConfigParseError`] if the content does not parse
    /// - [`EngineError::InvalidSettings`] if the policy fails validation
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let settings: LateDeductionSettings = match extension.as_deref() {
            Some("yaml") | Some("yml") => {
                serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
                    path: path_str.clone(),
                    message: e.to_string(),
                })?
            }
            Some("json") => {
                serde_json::from_str(&content).map_err(|e| EngineError::ConfigParseError {
                    path: path_str.clone(),
                    message: e.to_string(),
                })?
            }
            _ => {
                return Err(EngineError::UnsupportedConfigFormat { path: path_str });
            }
        };

        debug!(path = %path_str, "Loaded late deduction settings");
        Self::from_settings(settings).inspect_err(|err| {
            warn!(path = %path_str, error = %err, "Rejected late deduction settings");
        })
    }

    /// Parses settings from a YAML string.
    pub fn from_yaml_str(content: &str) -> EngineResult<Self> {
        let settings: LateDeductionSettings =
            serde_yaml::from_str(content).map_err(|e| EngineError::ConfigParseError {
                path: "<inline>".to_string(),
                message: e.to_string(),
            })?;
        Self::from_settings(settings)
    }

    /// Validates an in-memory policy and wraps it.
    pub fn from_settings(settings: LateDeductionSettings) -> EngineResult<Self> {
        settings.validate()?;
        Ok(Self {
            settings: settings.normalized(),
        })
    }

    /// Returns the loaded policy.
    pub fn settings(&self) -> &LateDeductionSettings {
        &self.settings
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DeductionType;
    use rust_decimal::Decimal;
    use std::io::Write;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn config_path() -> &'static str {
        "./config/late_deductions.yaml"
    }

    fn write_temp(suffix: &str, content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_valid_configuration() {
        let result = SettingsLoader::load(config_path());
        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());

        let settings = result.unwrap().settings().clone();
        assert!(settings.enabled);
        assert_eq!(settings.late_threshold_minutes, 15);
        assert_eq!(settings.deduction_type, DeductionType::Scaled);
        assert_eq!(settings.scaled_deductions.len(), 4);
        assert_eq!(settings.scaled_deductions[3].deduction_amount, dec("150"));
    }

    #[test]
    fn test_load_json_settings() {
        let file = write_temp(
            ".json",
            r#"{"enabled": true, "deductionType": "fixed", "fixedDeductionAmount": 80}"#,
        );
        let loader = SettingsLoader::load(file.path()).unwrap();
        assert_eq!(loader.settings().fixed_deduction_amount, Some(dec("80")));
    }

    #[test]
    fn test_load_sorts_scaled_tiers() {
        let file = write_temp(
            ".yml",
            concat!(
                "scaledDeductions:\n",
                "  - minutesRange: {min: 31, max: 60}\n",
                "    deductionAmount: 60\n",
                "  - minutesRange: {min: 15, max: 30}\n",
                "    deductionAmount: 30\n",
            ),
        );
        let loader = SettingsLoader::load(file.path()).unwrap();
        assert_eq!(loader.settings().scaled_deductions[0].minutes_range.min, 15);
    }

    #[test]
    fn test_load_missing_file_returns_error() {
        let result = SettingsLoader::load("/nonexistent/late_deductions.yaml");
        match result {
            Err(EngineError::ConfigNotFound { path }) => {
                assert!(path.contains("late_deductions.yaml"));
            }
            other => panic!("Expected ConfigNotFound error, got {:?}", other),
        }
    }

    #[test]
    fn test_load_unknown_extension_returns_error() {
        let file = write_temp(".toml", "enabled = true");
        assert!(matches!(
            SettingsLoader::load(file.path()),
            Err(EngineError::UnsupportedConfigFormat { .. })
        ));
    }

    #[test]
    fn test_load_malformed_yaml_returns_parse_error() {
        let file = write_temp(".yaml", "enabled: [not, a, bool");
        assert!(matches!(
            SettingsLoader::load(file.path()),
            Err(EngineError::ConfigParseError { .. })
        ));
    }

    #[test]
    fn test_load_invalid_policy_returns_error() {
        let file = write_temp(".yaml", "percentageDeduction: 250\n");
        assert!(matches!(
            SettingsLoader::load(file.path()),
            Err(EngineError::InvalidSettings { .. })
        ));
    }

    #[test]
    fn test_from_yaml_str_applies_defaults() {
        let loader = SettingsLoader::from_yaml_str("enabled: true\n").unwrap();
        assert!(loader.settings().enabled);
        assert_eq!(loader.settings().apply_after_days, 1);
        assert_eq!(loader.settings().deduction_type, DeductionType::Fixed);
    }
}
