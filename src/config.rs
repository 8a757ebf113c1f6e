//! TOML-based input configuration and preset definitions.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::controls::{self, Slider};
use crate::sizing::types::{SizingRequest, SystemVoltage};

/// Top-level sizing inputs parsed from TOML.
///
/// All fields have defaults matching the initial control positions. Load
/// from TOML with [`SizingConfig::from_toml_file`] or use
/// [`SizingConfig::default_preset`] for the built-in default. Efficiencies
/// are percentages here, as on the controls, and become fractions in
/// [`SizingConfig::to_request`].
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct SizingConfig {
    /// Appliance parameters.
    #[serde(default)]
    pub appliance: ApplianceConfig,
    /// Conversion efficiencies.
    #[serde(default)]
    pub efficiency: EfficiencyConfig,
}

/// Appliance parameters.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct ApplianceConfig {
    /// Rated power (W).
    pub power_watts: f64,
    /// Nominal voltage (V): 12, 24, 48, or 220.
    pub voltage_volts: u32,
    /// Cooking duration (h).
    pub cook_duration_hours: f64,
}

impl Default for ApplianceConfig {
    fn default() -> Self {
        Self {
            power_watts: controls::POWER_WATTS.default,
            voltage_volts: SystemVoltage::default().volts(),
            cook_duration_hours: controls::DURATION_HOURS.default,
        }
    }
}

/// Conversion efficiencies, in percent.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct EfficiencyConfig {
    /// Inverter efficiency (%).
    pub inverter_pct: f64,
    /// Solar panel efficiency (%).
    pub solar_panel_pct: f64,
}

impl Default for EfficiencyConfig {
    fn default() -> Self {
        Self {
            inverter_pct: controls::INVERTER_PCT.default,
            solar_panel_pct: controls::SOLAR_PANEL_PCT.default,
        }
    }
}

/// Configuration error with field path and constraint description.
#[derive(Debug, Error)]
#[error("config error: {field}: {message}")]
pub struct ConfigError {
    /// Dotted field path (e.g., `"appliance.power_watts"`).
    pub field: String,
    /// Human-readable constraint description.
    pub message: String,
}

impl SizingConfig {
    /// Returns the initial control positions: 700 W at 24 V for one hour,
    /// 90% inverter and 22% panel efficiency.
    pub fn default_preset() -> Self {
        Self::default()
    }

    /// Returns the compact preset: the smallest appliance the controls allow.
    pub fn compact() -> Self {
        Self {
            appliance: ApplianceConfig {
                power_watts: 100.0,
                voltage_volts: 12,
                cook_duration_hours: 0.1,
            },
            efficiency: EfficiencyConfig {
                inverter_pct: 70.0,
                solar_panel_pct: 100.0,
            },
        }
    }

    /// Returns the full-load preset: a 3 kW induction hob on a 48 V bank
    /// running for the maximum duration.
    pub fn full_load() -> Self {
        Self {
            appliance: ApplianceConfig {
                power_watts: 3000.0,
                voltage_volts: 48,
                cook_duration_hours: 5.0,
            },
            efficiency: EfficiencyConfig {
                inverter_pct: 95.0,
                ..EfficiencyConfig::default()
            },
        }
    }

    /// Available preset names.
    pub const PRESETS: &[&str] = &["default", "compact", "full_load"];

    /// Loads inputs from a named preset.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the preset name is unknown.
    pub fn from_preset(name: &str) -> Result<Self, ConfigError> {
        match name {
            "default" => Ok(Self::default_preset()),
            "compact" => Ok(Self::compact()),
            "full_load" => Ok(Self::full_load()),
            _ => Err(ConfigError {
                field: "preset".to_string(),
                message: format!(
                    "unknown preset \"{name}\", available: {}",
                    Self::PRESETS.join(", ")
                ),
            }),
        }
    }

    /// Parses inputs from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the file cannot be read or the TOML is invalid.
    pub fn from_toml_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError {
            field: "config".to_string(),
            message: format!("cannot read \"{}\": {e}", path.display()),
        })?;
        Self::from_toml_str(&content)
    }

    /// Parses inputs from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the TOML is invalid or contains unknown fields.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        toml::from_str(s).map_err(|e| ConfigError {
            field: "toml".to_string(),
            message: e.to_string(),
        })
    }

    /// Checks every value against its control range and returns all errors.
    ///
    /// Returns an empty vector if the configuration is valid. A solar panel
    /// efficiency of 0% passes here; the calculator rejects it.
    pub fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        let a = &self.appliance;
        let e = &self.efficiency;

        check_range(
            &mut errors,
            "appliance.power_watts",
            &controls::POWER_WATTS,
            a.power_watts,
        );
        if SystemVoltage::from_volts(f64::from(a.voltage_volts)).is_none() {
            errors.push(ConfigError {
                field: "appliance.voltage_volts".into(),
                message: format!(
                    "must be one of 12, 24, 48, 220, got {}",
                    a.voltage_volts
                ),
            });
        }
        check_range(
            &mut errors,
            "appliance.cook_duration_hours",
            &controls::DURATION_HOURS,
            a.cook_duration_hours,
        );
        check_range(
            &mut errors,
            "efficiency.inverter_pct",
            &controls::INVERTER_PCT,
            e.inverter_pct,
        );
        check_range(
            &mut errors,
            "efficiency.solar_panel_pct",
            &controls::SOLAR_PANEL_PCT,
            e.solar_panel_pct,
        );

        errors
    }

    /// Builds a calculator request, converting percentages to fractions.
    pub fn to_request(&self) -> SizingRequest {
        SizingRequest {
            appliance_power_watts: self.appliance.power_watts,
            appliance_voltage_volts: f64::from(self.appliance.voltage_volts),
            cook_duration_hours: self.appliance.cook_duration_hours,
            inverter_efficiency: self.efficiency.inverter_pct / 100.0,
            solar_panel_efficiency: self.efficiency.solar_panel_pct / 100.0,
        }
    }
}

fn check_range(errors: &mut Vec<ConfigError>, field: &str, slider: &Slider, value: f64) {
    if !slider.contains(value) {
        errors.push(ConfigError {
            field: field.into(),
            message: format!(
                "must be in [{}, {}] {}, got {value}",
                slider.min, slider.max, slider.unit
            ),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_preset_valid() {
        let cfg = SizingConfig::default_preset();
        let errors = cfg.validate();
        assert!(errors.is_empty(), "default should be valid: {errors:?}");
    }

    #[test]
    fn from_preset_unknown() {
        let err = SizingConfig::from_preset("nonexistent");
        assert!(err.is_err());
        let e = err.unwrap_err();
        assert!(e.message.contains("unknown preset"));
    }

    #[test]
    fn all_presets_are_valid() {
        for name in SizingConfig::PRESETS {
            let cfg = SizingConfig::from_preset(name);
            assert!(cfg.is_ok(), "preset \"{name}\" should load");
            let errors = cfg.as_ref().map(|c| c.validate()).unwrap_or_default();
            assert!(
                errors.is_empty(),
                "preset \"{name}\" should be valid: {errors:?}"
            );
        }
    }

    #[test]
    fn valid_toml_parses() {
        let toml = r#"
[appliance]
power_watts = 1500.0
voltage_volts = 48
cook_duration_hours = 2.5

[efficiency]
inverter_pct = 93.0
solar_panel_pct = 20.0
"#;
        let cfg = SizingConfig::from_toml_str(toml);
        assert!(cfg.is_ok(), "valid TOML should parse: {:?}", cfg.err());
        let cfg = cfg.ok();
        assert_eq!(cfg.as_ref().map(|c| c.appliance.voltage_volts), Some(48));
        assert_eq!(cfg.as_ref().map(|c| c.efficiency.inverter_pct), Some(93.0));
    }

    #[test]
    fn invalid_toml_unknown_field() {
        let toml = r#"
[appliance]
power_watts = 700.0
phase_count = 3
"#;
        let result = SizingConfig::from_toml_str(toml);
        assert!(result.is_err());
    }

    #[test]
    fn partial_toml_uses_defaults() {
        let toml = r#"
[appliance]
power_watts = 1200.0
"#;
        let cfg = SizingConfig::from_toml_str(toml).ok();
        assert_eq!(cfg.as_ref().map(|c| c.appliance.power_watts), Some(1200.0));
        // voltage kept default
        assert_eq!(cfg.as_ref().map(|c| c.appliance.voltage_volts), Some(24));
        // efficiency section kept default
        assert_eq!(cfg.as_ref().map(|c| c.efficiency.solar_panel_pct), Some(22.0));
    }

    #[test]
    fn validation_catches_out_of_range_power() {
        let mut cfg = SizingConfig::default_preset();
        cfg.appliance.power_watts = 5000.0;
        let errors = cfg.validate();
        assert!(errors.iter().any(|e| e.field == "appliance.power_watts"));
    }

    #[test]
    fn validation_catches_bad_voltage() {
        let mut cfg = SizingConfig::default_preset();
        cfg.appliance.voltage_volts = 36;
        let errors = cfg.validate();
        assert!(errors.iter().any(|e| e.field == "appliance.voltage_volts"));
    }

    #[test]
    fn validation_reports_every_error() {
        let mut cfg = SizingConfig::default_preset();
        cfg.appliance.cook_duration_hours = 0.0;
        cfg.efficiency.inverter_pct = 50.0;
        let errors = cfg.validate();
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn zero_solar_efficiency_passes_range_check() {
        let mut cfg = SizingConfig::default_preset();
        cfg.efficiency.solar_panel_pct = 0.0;
        assert!(cfg.validate().is_empty());
        assert!(cfg.to_request().size().is_err());
    }

    #[test]
    fn to_request_converts_percentages() {
        let req = SizingConfig::default_preset().to_request();
        assert_eq!(req, SizingRequest::default());
    }

    #[test]
    fn compact_preset_has_smallest_appliance() {
        let base = SizingConfig::default_preset();
        let compact = SizingConfig::compact();
        assert!(compact.appliance.power_watts < base.appliance.power_watts);
        assert_eq!(compact.appliance.voltage_volts, 12);
    }
}
