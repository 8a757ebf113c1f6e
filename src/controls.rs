//! Input control ranges for the interactive surfaces.
//!
//! Each numeric input is bounded by a [`Slider`]: a closed range with a step
//! grid and an initial value. The appliance voltage is a choice from
//! [`SystemVoltage::ALL`] instead.

use serde::Serialize;

use crate::sizing::types::SystemVoltage;

/// A bounded numeric input with a step grid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Slider {
    /// Label shown next to the control.
    pub label: &'static str,
    /// Lowest accepted value (inclusive).
    pub min: f64,
    /// Highest accepted value (inclusive).
    pub max: f64,
    /// Increment between adjacent positions.
    pub step: f64,
    /// Initial position.
    pub default: f64,
    /// Display unit.
    pub unit: &'static str,
}

impl Slider {
    /// Clamps `value` into `[min, max]`. NaN maps to the default.
    pub fn clamp(&self, value: f64) -> f64 {
        if value.is_nan() {
            return self.default;
        }
        value.clamp(self.min, self.max)
    }

    /// Returns `true` if `value` lies within `[min, max]`.
    pub fn contains(&self, value: f64) -> bool {
        (self.min..=self.max).contains(&value)
    }

    /// Moves one step up, snapped to the step grid and clamped.
    pub fn increment(&self, value: f64) -> f64 {
        self.snap(self.clamp(value) + self.step)
    }

    /// Moves one step down, snapped to the step grid and clamped.
    pub fn decrement(&self, value: f64) -> f64 {
        self.snap(self.clamp(value) - self.step)
    }

    /// Rounds to the nearest grid position counted from `min`.
    ///
    /// Rounding the step count keeps decimal steps such as 0.1 from drifting.
    pub fn snap(&self, value: f64) -> f64 {
        let steps = ((self.clamp(value) - self.min) / self.step).round();
        let snapped = self.min + steps * self.step;
        // Re-round to the step's decimal precision to strip float noise.
        let scale = 10f64.powi(decimals(self.step));
        self.clamp((snapped * scale).round() / scale)
    }

    /// Fraction of the way from `min` to `max`, for gauges.
    pub fn ratio(&self, value: f64) -> f64 {
        if self.max <= self.min {
            return 0.0;
        }
        (self.clamp(value) - self.min) / (self.max - self.min)
    }
}

/// Decimal places needed to represent `step` exactly (up to 6).
fn decimals(step: f64) -> i32 {
    let mut d = 0;
    let mut s = step;
    while d < 6 && (s - s.round()).abs() > 1e-9 {
        s *= 10.0;
        d += 1;
    }
    d
}

/// Cooking appliance power (W).
pub const POWER_WATTS: Slider = Slider {
    label: "Cooking Appliance Power (W)",
    min: 100.0,
    max: 3000.0,
    step: 50.0,
    default: 700.0,
    unit: "W",
};

/// Cooking duration (h).
pub const DURATION_HOURS: Slider = Slider {
    label: "Cooking Duration (hrs)",
    min: 0.1,
    max: 5.0,
    step: 0.1,
    default: 1.0,
    unit: "h",
};

/// Inverter efficiency (%).
pub const INVERTER_PCT: Slider = Slider {
    label: "Inverter Efficiency (%)",
    min: 70.0,
    max: 100.0,
    step: 1.0,
    default: 90.0,
    unit: "%",
};

/// Solar panel efficiency (%).
///
/// The range starts at 0; a zero setting is rejected by the calculator.
pub const SOLAR_PANEL_PCT: Slider = Slider {
    label: "Solar Panel Efficiency (%)",
    min: 0.0,
    max: 100.0,
    step: 1.0,
    default: 22.0,
    unit: "%",
};

/// Label of the voltage dropdown.
pub const VOLTAGE_LABEL: &str = "Cooking Appliance Voltage (V)";

/// All controls in presentation order, for listing over the API.
#[derive(Debug, Clone, Serialize)]
pub struct ControlSet {
    pub power_watts: Slider,
    pub voltage_volts: VoltageChoice,
    pub cook_duration_hours: Slider,
    pub inverter_pct: Slider,
    pub solar_panel_pct: Slider,
}

/// The voltage dropdown.
#[derive(Debug, Clone, Serialize)]
pub struct VoltageChoice {
    pub label: &'static str,
    pub options: Vec<u32>,
    pub default: u32,
}

impl Default for ControlSet {
    fn default() -> Self {
        Self {
            power_watts: POWER_WATTS,
            voltage_volts: VoltageChoice {
                label: VOLTAGE_LABEL,
                options: SystemVoltage::ALL.iter().map(|v| v.volts()).collect(),
                default: SystemVoltage::default().volts(),
            },
            cook_duration_hours: DURATION_HOURS,
            inverter_pct: INVERTER_PCT,
            solar_panel_pct: SOLAR_PANEL_PCT,
        }
    }
}
