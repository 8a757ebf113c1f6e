//! Sizing value types: the request, the derived result, and nominal voltages.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Nominal DC/AC system voltage of a cooking appliance.
///
/// Only the four standard voltages offered by the appliance dropdown are
/// valid sizing inputs.
///
/// # Examples
///
/// ```
/// use clean_cook_sizing::sizing::types::SystemVoltage;
///
/// assert_eq!(SystemVoltage::from_volts(48.0), Some(SystemVoltage::V48));
/// assert_eq!(SystemVoltage::V24.to_string(), "24 V");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum SystemVoltage {
    /// 12 V battery bus.
    V12,
    /// 24 V battery bus.
    #[default]
    V24,
    /// 48 V battery bus.
    V48,
    /// 220 V mains-rated appliance.
    V220,
}

impl SystemVoltage {
    /// All supported voltages in ascending order.
    pub const ALL: [Self; 4] = [Self::V12, Self::V24, Self::V48, Self::V220];

    /// Nominal voltage in volts.
    pub fn volts(self) -> u32 {
        match self {
            Self::V12 => 12,
            Self::V24 => 24,
            Self::V48 => 48,
            Self::V220 => 220,
        }
    }

    /// Maps a raw voltage to a supported variant, if it is one.
    pub fn from_volts(volts: f64) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|v| f64::from(v.volts()) == volts)
    }

    /// Next voltage in the list, wrapping around.
    pub fn next(self) -> Self {
        let idx = self.index();
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    /// Previous voltage in the list, wrapping around.
    pub fn prev(self) -> Self {
        let idx = self.index();
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    fn index(self) -> usize {
        Self::ALL.iter().position(|&v| v == self).unwrap_or(0)
    }
}

impl fmt::Display for SystemVoltage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} V", self.volts())
    }
}

impl TryFrom<u32> for SystemVoltage {
    type Error = String;

    fn try_from(volts: u32) -> Result<Self, Self::Error> {
        Self::from_volts(f64::from(volts)).ok_or_else(|| {
            format!("unsupported voltage {volts}, expected one of 12, 24, 48, 220")
        })
    }
}

impl From<SystemVoltage> for u32 {
    fn from(v: SystemVoltage) -> Self {
        v.volts()
    }
}

/// Inputs to a single sizing calculation.
///
/// Efficiencies are fractions in `(0, 1]`, not percentages. The voltage is
/// kept as a raw number so that malformed values can be reported by the
/// calculator instead of being lost at construction time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SizingRequest {
    /// Rated power draw of the cooking appliance (W).
    pub appliance_power_watts: f64,
    /// Nominal appliance voltage (V), one of 12, 24, 48, 220.
    pub appliance_voltage_volts: f64,
    /// Cooking session length (h).
    pub cook_duration_hours: f64,
    /// Inverter efficiency as a fraction.
    pub inverter_efficiency: f64,
    /// Solar panel efficiency as a fraction.
    pub solar_panel_efficiency: f64,
}

impl SizingRequest {
    /// Creates a request from already-typed inputs.
    ///
    /// # Arguments
    ///
    /// * `power_watts` - Appliance power in W
    /// * `voltage` - Nominal appliance voltage
    /// * `duration_hours` - Cooking duration in hours
    /// * `inverter_efficiency` - Inverter efficiency fraction
    /// * `solar_panel_efficiency` - Solar panel efficiency fraction
    pub fn new(
        power_watts: f64,
        voltage: SystemVoltage,
        duration_hours: f64,
        inverter_efficiency: f64,
        solar_panel_efficiency: f64,
    ) -> Self {
        Self {
            appliance_power_watts: power_watts,
            appliance_voltage_volts: f64::from(voltage.volts()),
            cook_duration_hours: duration_hours,
            inverter_efficiency,
            solar_panel_efficiency,
        }
    }
}

impl Default for SizingRequest {
    /// 700 W appliance at 24 V, one hour of cooking, 90% inverter and 22%
    /// panel efficiency.
    fn default() -> Self {
        Self::new(700.0, SystemVoltage::V24, 1.0, 0.90, 0.22)
    }
}

/// Derived battery and solar sizing for one request.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SizingResult {
    /// Energy drawn by one cooking session (kWh).
    pub energy_required_kwh: f64,
    /// Battery energy needed after inverter losses (kWh).
    pub battery_capacity_kwh: f64,
    /// Battery capacity at the appliance voltage (Ah).
    pub battery_size_ah: f64,
    /// Solar array power needed to cover the appliance (W).
    pub solar_power_watts: f64,
}
