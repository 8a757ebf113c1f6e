//! Property-based invariant tests for the sizing calculator.
//!
//! 1. Energy is power times duration over 1000
//! 2. Battery capacity never undercuts the energy required
//! 3. Solar power never undercuts the appliance rating
//! 4. Battery amp-hours convert back to capacity at the chosen voltage
//! 5. Determinism: the same request always yields the same result
//! 6. A zero efficiency is always a division-by-zero error

use clean_cook_sizing::sizing::{SizingError, SizingRequest, SystemVoltage, calculate};
use proptest::prelude::*;

// ── Strategies ──────────────────────────────────────────────────────────

fn voltage_strategy() -> impl Strategy<Value = SystemVoltage> {
    prop::sample::select(SystemVoltage::ALL.to_vec())
}

/// Requests inside the control ranges, efficiencies as fractions.
fn request_strategy() -> impl Strategy<Value = SizingRequest> {
    (
        100.0f64..=3000.0,
        voltage_strategy(),
        0.1f64..=5.0,
        0.70f64..=1.0,
        0.01f64..=1.0,
    )
        .prop_map(|(power, voltage, hours, inverter, solar)| {
            SizingRequest::new(power, voltage, hours, inverter, solar)
        })
}

// ── Invariants ──────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn energy_is_power_times_duration(req in request_strategy()) {
        let res = calculate(&req).unwrap();
        let expected = req.appliance_power_watts * req.cook_duration_hours / 1000.0;
        prop_assert!((res.energy_required_kwh - expected).abs() < 1e-9);
    }

    #[test]
    fn battery_covers_energy(req in request_strategy()) {
        let res = calculate(&req).unwrap();
        prop_assert!(res.battery_capacity_kwh >= res.energy_required_kwh);
    }

    #[test]
    fn solar_covers_appliance(req in request_strategy()) {
        let res = calculate(&req).unwrap();
        prop_assert!(res.solar_power_watts >= req.appliance_power_watts);
    }

    #[test]
    fn amp_hours_match_capacity(req in request_strategy()) {
        let res = calculate(&req).unwrap();
        let kwh = res.battery_size_ah * req.appliance_voltage_volts / 1000.0;
        prop_assert!((kwh - res.battery_capacity_kwh).abs() < 1e-9);
    }

    #[test]
    fn sizing_is_deterministic(req in request_strategy()) {
        prop_assert_eq!(calculate(&req), calculate(&req));
    }

    #[test]
    fn zero_inverter_efficiency_divides_by_zero(req in request_strategy()) {
        let req = SizingRequest { inverter_efficiency: 0.0, ..req };
        prop_assert_eq!(
            calculate(&req),
            Err(SizingError::division_by_zero("inverter_efficiency"))
        );
    }

    #[test]
    fn zero_solar_efficiency_divides_by_zero(req in request_strategy()) {
        let req = SizingRequest { solar_panel_efficiency: 0.0, ..req };
        prop_assert_eq!(
            calculate(&req),
            Err(SizingError::division_by_zero("solar_panel_efficiency"))
        );
    }
}
