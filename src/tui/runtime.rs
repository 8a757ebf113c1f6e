//! Form state for the TUI: current inputs, selection, and the live result.

use crate::config::SizingConfig;
use crate::controls::{self, Slider};
use crate::sizing::calculator::calculate;
use crate::sizing::error::SizingError;
use crate::sizing::types::{SizingRequest, SizingResult, SystemVoltage};

/// Editable inputs, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Power,
    Voltage,
    Duration,
    Inverter,
    Solar,
}

impl Field {
    /// All fields in display order.
    pub const ALL: [Self; 5] = [
        Self::Power,
        Self::Voltage,
        Self::Duration,
        Self::Inverter,
        Self::Solar,
    ];

    /// Control label shown in the form.
    pub fn label(self) -> &'static str {
        match self {
            Self::Voltage => controls::VOLTAGE_LABEL,
            other => other.slider().map_or("", |s| s.label),
        }
    }

    /// Slider backing this field; `None` for the voltage dropdown.
    pub fn slider(self) -> Option<&'static Slider> {
        match self {
            Self::Power => Some(&controls::POWER_WATTS),
            Self::Voltage => None,
            Self::Duration => Some(&controls::DURATION_HOURS),
            Self::Inverter => Some(&controls::INVERTER_PCT),
            Self::Solar => Some(&controls::SOLAR_PANEL_PCT),
        }
    }

    fn index(self) -> usize {
        Self::ALL.iter().position(|&f| f == self).unwrap_or(0)
    }
}

/// TUI application state.
///
/// Inputs live here as explicit values; every change rebuilds a
/// [`SizingRequest`] and re-runs the calculator.
pub struct App {
    /// Current inputs.
    pub inputs: SizingConfig,
    /// Field receiving adjustments.
    pub selected: Field,
    /// Latest calculator outcome for `inputs`.
    pub result: Result<SizingResult, SizingError>,
    /// Preset name or config path the inputs were loaded from.
    pub source: String,
    /// Inputs restored by [`App::reset`].
    initial: SizingConfig,
    /// Whether the user has requested quit.
    pub quit: bool,
}

impl App {
    /// Creates the form from a preset name, falling back to the default preset.
    pub fn new(preset: &str) -> Self {
        let (inputs, source) = match SizingConfig::from_preset(preset) {
            Ok(cfg) => (cfg, preset.to_string()),
            Err(_) => (SizingConfig::default_preset(), "default".to_string()),
        };
        Self::with_inputs(inputs, source)
    }

    /// Creates the form from explicit inputs, e.g. a loaded config file
    /// with CLI overrides applied. `reset` returns to these inputs.
    pub fn with_inputs(inputs: SizingConfig, source: impl Into<String>) -> Self {
        let result = calculate(&inputs.to_request());
        Self {
            initial: inputs.clone(),
            inputs,
            selected: Field::Power,
            result,
            source: source.into(),
            quit: false,
        }
    }

    /// Request built from the current inputs.
    pub fn request(&self) -> SizingRequest {
        self.inputs.to_request()
    }

    /// Current value of a field in its display unit.
    pub fn value(&self, field: Field) -> f64 {
        let a = &self.inputs.appliance;
        let e = &self.inputs.efficiency;
        match field {
            Field::Power => a.power_watts,
            Field::Voltage => f64::from(a.voltage_volts),
            Field::Duration => a.cook_duration_hours,
            Field::Inverter => e.inverter_pct,
            Field::Solar => e.solar_panel_pct,
        }
    }

    /// Current voltage choice, defaulting when the inputs hold an unsupported value.
    pub fn voltage(&self) -> SystemVoltage {
        SystemVoltage::from_volts(f64::from(self.inputs.appliance.voltage_volts))
            .unwrap_or_default()
    }

    /// Moves the selection down, wrapping.
    pub fn select_next(&mut self) {
        let i = self.selected.index();
        self.selected = Field::ALL[(i + 1) % Field::ALL.len()];
    }

    /// Moves the selection up, wrapping.
    pub fn select_prev(&mut self) {
        let i = self.selected.index();
        self.selected = Field::ALL[(i + Field::ALL.len() - 1) % Field::ALL.len()];
    }

    /// Steps the selected field up.
    pub fn increase(&mut self) {
        self.adjust(true);
    }

    /// Steps the selected field down.
    pub fn decrease(&mut self) {
        self.adjust(false);
    }

    fn adjust(&mut self, up: bool) {
        let field = self.selected;
        if field == Field::Voltage {
            let v = self.voltage();
            let next = if up { v.next() } else { v.prev() };
            self.inputs.appliance.voltage_volts = next.volts();
        } else if let Some(slider) = field.slider() {
            let current = self.value(field);
            let new = if up {
                slider.increment(current)
            } else {
                slider.decrement(current)
            };
            self.set(field, new);
        }
        self.recompute();
    }

    fn set(&mut self, field: Field, value: f64) {
        let a = &mut self.inputs.appliance;
        let e = &mut self.inputs.efficiency;
        match field {
            Field::Power => a.power_watts = value,
            Field::Voltage => {}
            Field::Duration => a.cook_duration_hours = value,
            Field::Inverter => e.inverter_pct = value,
            Field::Solar => e.solar_panel_pct = value,
        }
    }

    /// Replaces the inputs with a preset. Unknown names are ignored.
    pub fn switch_preset(&mut self, name: &str) {
        let Ok(cfg) = SizingConfig::from_preset(name) else {
            return;
        };
        self.initial = cfg.clone();
        self.inputs = cfg;
        self.source = name.to_string();
        self.recompute();
    }

    /// Restores the inputs the form started with, or the last preset switched to.
    pub fn reset(&mut self) {
        self.inputs = self.initial.clone();
        self.recompute();
    }

    fn recompute(&mut self) {
        self.result = calculate(&self.request());
    }
}
