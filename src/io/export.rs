//! CSV export for sizing outcomes.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use crate::sizing::error::SizingError;
use crate::sizing::types::{SizingRequest, SizingResult};

/// Column header for CSV sizing export.
const HEADER: &str = "appliance_power_watts,appliance_voltage_volts,cook_duration_hours,\
                      inverter_efficiency,solar_panel_efficiency,\
                      energy_required_kwh,battery_capacity_kwh,battery_size_ah,\
                      solar_power_watts,status";

/// One computed row: the request and what the calculator returned for it.
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    pub request: SizingRequest,
    pub result: Result<SizingResult, SizingError>,
}

/// Exports outcomes to a CSV file at the given path.
///
/// # Errors
///
/// Returns an `io::Error` if file creation or writing fails.
pub fn export_csv(outcomes: &[Outcome], path: &Path) -> io::Result<()> {
    let file = File::create(path)?;
    let buf = io::BufWriter::new(file);
    write_csv(outcomes, buf)
}

/// Writes outcomes as CSV to any writer.
///
/// Result columns use four decimals. Rejected requests leave the result
/// columns empty and carry the error message in `status`; accepted ones
/// have `status` = `ok`. Output is deterministic for identical inputs.
///
/// # Errors
///
/// Returns an `io::Error` if writing fails.
pub fn write_csv(outcomes: &[Outcome], writer: impl Write) -> io::Result<()> {
    let mut wtr = csv::WriterBuilder::new().from_writer(writer);

    wtr.write_record(HEADER.split(',').map(str::trim))?;

    for o in outcomes {
        let q = &o.request;
        let mut record = vec![
            q.appliance_power_watts.to_string(),
            q.appliance_voltage_volts.to_string(),
            q.cook_duration_hours.to_string(),
            q.inverter_efficiency.to_string(),
            q.solar_panel_efficiency.to_string(),
        ];
        match &o.result {
            Ok(r) => record.extend([
                format!("{:.4}", r.energy_required_kwh),
                format!("{:.4}", r.battery_capacity_kwh),
                format!("{:.4}", r.battery_size_ah),
                format!("{:.4}", r.solar_power_watts),
                "ok".to_string(),
            ]),
            Err(e) => {
                record.extend(std::iter::repeat_n(String::new(), 4));
                record.push(e.to_string());
            }
        }
        wtr.write_record(&record)?;
    }

    wtr.flush()?;
    Ok(())
}
