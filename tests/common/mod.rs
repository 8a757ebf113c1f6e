//! Shared test fixtures for integration tests.

#![allow(dead_code)]

use clean_cook_sizing::sizing::{SizingRequest, SystemVoltage};

/// Request at the initial control positions (700 W, 24 V, 1 h, 90%, 22%).
pub fn default_request() -> SizingRequest {
    SizingRequest::default()
}

/// 1 kW appliance on a 48 V bank for two hours, 85% inverter, 18% panel.
pub fn kettle_request() -> SizingRequest {
    SizingRequest::new(1000.0, SystemVoltage::V48, 2.0, 0.85, 0.18)
}

/// Default request with one efficiency knocked to zero.
pub fn zero_solar_request() -> SizingRequest {
    SizingRequest {
        solar_panel_efficiency: 0.0,
        ..default_request()
    }
}

/// CSV header naming the request fields, in column order.
pub const REQUEST_HEADER: &str = "appliance_power_watts,appliance_voltage_volts,\
                                  cook_duration_hours,inverter_efficiency,solar_panel_efficiency";
