//! Closed-form energy, battery, and solar sizing.

use tracing::debug;

use super::error::{Result, SizingError};
use super::types::{SizingRequest, SizingResult, SystemVoltage};

/// Watt-hours per kilowatt-hour.
const WH_PER_KWH: f64 = 1000.0;

/// Computes the sizing result for a request.
///
/// The request is validated first; see [`SizingRequest::validate`] for the
/// order in which errors are reported.
///
/// # Errors
///
/// Returns [`SizingError::DivisionByZero`] when either efficiency is zero and
/// [`SizingError::InvalidInput`] for negative, non-finite, or out-of-range
/// fields, and for inputs whose result overflows `f64`.
///
/// # Examples
///
/// ```
/// use clean_cook_sizing::sizing::calculator::calculate;
/// use clean_cook_sizing::sizing::types::SizingRequest;
///
/// let result = calculate(&SizingRequest::default()).unwrap();
/// assert!((result.energy_required_kwh - 0.7).abs() < 1e-9);
/// ```
pub fn calculate(req: &SizingRequest) -> Result<SizingResult> {
    if let Err(e) = req.validate() {
        debug!(error = %e, "sizing request rejected");
        return Err(e);
    }

    let energy_required_kwh = req.appliance_power_watts * req.cook_duration_hours / WH_PER_KWH;
    let battery_capacity_kwh = energy_required_kwh / req.inverter_efficiency;
    let battery_size_ah = battery_capacity_kwh * WH_PER_KWH / req.appliance_voltage_volts;
    let solar_power_watts = req.appliance_power_watts / req.solar_panel_efficiency;

    let result = SizingResult {
        energy_required_kwh,
        battery_capacity_kwh,
        battery_size_ah,
        solar_power_watts,
    };
    // Finite inputs can still overflow, e.g. a subnormal efficiency.
    if let Some((name, _)) = result.fields().into_iter().find(|(_, v)| !v.is_finite()) {
        let e = SizingError::invalid_input(name, "result overflows");
        debug!(?req, error = %e, "sizing request rejected");
        return Err(e);
    }
    debug!(?req, ?result, "sizing computed");
    Ok(result)
}

impl SizingResult {
    fn fields(&self) -> [(&'static str, f64); 4] {
        [
            ("energy_required_kwh", self.energy_required_kwh),
            ("battery_capacity_kwh", self.battery_capacity_kwh),
            ("battery_size_ah", self.battery_size_ah),
            ("solar_power_watts", self.solar_power_watts),
        ]
    }
}

impl SizingRequest {
    /// Field names and values in declaration order.
    fn fields(&self) -> [(&'static str, f64); 5] {
        [
            ("appliance_power_watts", self.appliance_power_watts),
            ("appliance_voltage_volts", self.appliance_voltage_volts),
            ("cook_duration_hours", self.cook_duration_hours),
            ("inverter_efficiency", self.inverter_efficiency),
            ("solar_panel_efficiency", self.solar_panel_efficiency),
        ]
    }

    /// Checks the request without computing anything.
    ///
    /// Checks run in this order: non-finite fields, negative fields, zero
    /// efficiencies, voltage, efficiencies above 1. The first failure is
    /// returned.
    ///
    /// # Errors
    ///
    /// Same as [`calculate`].
    pub fn validate(&self) -> Result<()> {
        let fields = self.fields();

        if let Some((name, _)) = fields.into_iter().find(|(_, v)| !v.is_finite()) {
            return Err(SizingError::invalid_input(name, "must be a finite number"));
        }
        if let Some((name, v)) = fields.into_iter().find(|(_, v)| *v < 0.0) {
            return Err(SizingError::invalid_input(
                name,
                format!("must not be negative, got {v}"),
            ));
        }

        if self.inverter_efficiency == 0.0 {
            return Err(SizingError::division_by_zero("inverter_efficiency"));
        }
        if self.solar_panel_efficiency == 0.0 {
            return Err(SizingError::division_by_zero("solar_panel_efficiency"));
        }

        if self.appliance_voltage_volts == 0.0 {
            return Err(SizingError::invalid_input(
                "appliance_voltage_volts",
                "must be nonzero",
            ));
        }
        if SystemVoltage::from_volts(self.appliance_voltage_volts).is_none() {
            return Err(SizingError::invalid_input(
                "appliance_voltage_volts",
                format!(
                    "must be one of 12, 24, 48, 220, got {}",
                    self.appliance_voltage_volts
                ),
            ));
        }

        for (name, v) in [
            ("inverter_efficiency", self.inverter_efficiency),
            ("solar_panel_efficiency", self.solar_panel_efficiency),
        ] {
            if v > 1.0 {
                return Err(SizingError::invalid_input(
                    name,
                    format!("must be a fraction in (0, 1], got {v}"),
                ));
            }
        }

        Ok(())
    }

    /// Shorthand for [`calculate`].
    ///
    /// # Errors
    ///
    /// Same as [`calculate`].
    pub fn size(&self) -> Result<SizingResult> {
        calculate(self)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    fn request(power: f64, volts: f64, hours: f64, inv: f64, sol: f64) -> SizingRequest {
        SizingRequest {
            appliance_power_watts: power,
            appliance_voltage_volts: volts,
            cook_duration_hours: hours,
            inverter_efficiency: inv,
            solar_panel_efficiency: sol,
        }
    }

    #[test]
    fn default_controls_scenario() {
        let r = calculate(&request(700.0, 24.0, 1.0, 0.90, 0.22)).unwrap();
        assert_abs_diff_eq!(r.energy_required_kwh, 0.70, epsilon = 1e-9);
        assert_abs_diff_eq!(r.battery_capacity_kwh, 0.7778, epsilon = 1e-4);
        assert_abs_diff_eq!(r.battery_size_ah, 32.41, epsilon = 1e-2);
        assert_abs_diff_eq!(r.solar_power_watts, 3181.82, epsilon = 1e-2);
    }

    #[test]
    fn smallest_appliance_scenario() {
        let r = calculate(&request(100.0, 12.0, 0.1, 0.70, 1.0)).unwrap();
        assert_abs_diff_eq!(r.energy_required_kwh, 0.01, epsilon = 1e-9);
        assert_abs_diff_eq!(r.battery_capacity_kwh, 0.0143, epsilon = 1e-4);
        assert_abs_diff_eq!(r.battery_size_ah, 1.19, epsilon = 1e-2);
        assert_abs_diff_eq!(r.solar_power_watts, 100.0, epsilon = 1e-9);
    }

    #[test]
    fn zero_inverter_efficiency_is_division_by_zero() {
        let err = calculate(&request(700.0, 24.0, 1.0, 0.0, 0.22)).unwrap_err();
        assert_eq!(err, SizingError::division_by_zero("inverter_efficiency"));
    }

    #[test]
    fn zero_solar_efficiency_is_division_by_zero() {
        let err = calculate(&request(700.0, 24.0, 1.0, 0.9, 0.0)).unwrap_err();
        assert_eq!(err, SizingError::division_by_zero("solar_panel_efficiency"));
        assert_eq!(err.kind(), "division_by_zero");
    }

    #[test]
    fn zero_voltage_is_invalid_input() {
        let err = calculate(&request(700.0, 0.0, 1.0, 0.9, 0.22)).unwrap_err();
        assert_eq!(err.kind(), "invalid_input");
        assert_eq!(err.field(), "appliance_voltage_volts");
    }

    #[test]
    fn non_standard_voltage_is_invalid_input() {
        let err = calculate(&request(700.0, 36.0, 1.0, 0.9, 0.22)).unwrap_err();
        assert_eq!(err.field(), "appliance_voltage_volts");
    }

    #[test]
    fn negative_fields_are_invalid_input() {
        let cases = [
            (request(-1.0, 24.0, 1.0, 0.9, 0.22), "appliance_power_watts"),
            (request(700.0, -24.0, 1.0, 0.9, 0.22), "appliance_voltage_volts"),
            (request(700.0, 24.0, -1.0, 0.9, 0.22), "cook_duration_hours"),
            (request(700.0, 24.0, 1.0, -0.9, 0.22), "inverter_efficiency"),
            (request(700.0, 24.0, 1.0, 0.9, -0.22), "solar_panel_efficiency"),
        ];
        for (req, field) in cases {
            let err = calculate(&req).unwrap_err();
            assert_eq!(err.kind(), "invalid_input", "{field}");
            assert_eq!(err.field(), field);
        }
    }

    #[test]
    fn negative_check_precedes_zero_efficiency() {
        let err = calculate(&request(-5.0, 24.0, 1.0, 0.0, 0.22)).unwrap_err();
        assert_eq!(err.kind(), "invalid_input");
    }

    #[test]
    fn nan_is_invalid_input() {
        let err = calculate(&request(f64::NAN, 24.0, 1.0, 0.9, 0.22)).unwrap_err();
        assert_eq!(err.field(), "appliance_power_watts");
        assert_eq!(err.kind(), "invalid_input");
    }

    #[test]
    fn efficiency_above_one_is_invalid_input() {
        let err = calculate(&request(700.0, 24.0, 1.0, 1.2, 0.22)).unwrap_err();
        assert_eq!(err.field(), "inverter_efficiency");
        let err = calculate(&request(700.0, 24.0, 1.0, 0.9, 1.01)).unwrap_err();
        assert_eq!(err.field(), "solar_panel_efficiency");
    }

    #[test]
    fn zero_duration_yields_zero_energy() {
        let r = calculate(&request(700.0, 24.0, 0.0, 0.9, 0.22)).unwrap();
        assert_eq!(r.energy_required_kwh, 0.0);
        assert_eq!(r.battery_size_ah, 0.0);
        assert!(r.solar_power_watts > 0.0);
    }

    #[test]
    fn overflowing_energy_is_invalid_input() {
        let err = calculate(&request(1e308, 24.0, 5.0, 0.9, 0.22)).unwrap_err();
        assert_eq!(
            err,
            SizingError::invalid_input("energy_required_kwh", "result overflows")
        );
    }

    #[test]
    fn subnormal_solar_efficiency_overflows() {
        let err = calculate(&request(700.0, 24.0, 1.0, 0.9, 1e-320)).unwrap_err();
        assert_eq!(err.kind(), "invalid_input");
        assert_eq!(err.field(), "solar_power_watts");
    }

    #[test]
    fn size_is_idempotent() {
        let req = SizingRequest::default();
        assert_eq!(req.size(), req.size());
    }
}
