//! Text report and bar-chart model for a sizing result.

use std::fmt;

use serde::Serialize;

use crate::sizing::types::{SizingRequest, SizingResult};

/// Chart title.
pub const CHART_TITLE: &str = "System Requirements";
/// Y-axis label.
pub const CHART_Y_LABEL: &str = "Value";

/// Bar categories, in chart order.
pub const CATEGORIES: [&str; 3] = [
    "Energy Consumption (kWh)",
    "Battery Capacity (kWh)",
    "Solar Power (W)",
];

/// Bar fill colours, in chart order.
pub const BAR_COLORS: [&str; 3] = ["#ffd300", "#f590c7", "#1b1612"];

/// One bar of the requirements chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bar {
    /// Category label.
    pub label: &'static str,
    /// Bar height in the category's own unit.
    pub value: f64,
    /// Fill colour as `#rrggbb`.
    pub color: &'static str,
}

/// The three-bar requirements chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Chart {
    pub title: &'static str,
    pub y_label: &'static str,
    pub bars: Vec<Bar>,
}

impl Chart {
    /// Builds the chart for a result: energy, battery capacity, solar power.
    pub fn from_result(result: &SizingResult) -> Self {
        let values = [
            result.energy_required_kwh,
            result.battery_capacity_kwh,
            result.solar_power_watts,
        ];
        let bars = CATEGORIES
            .iter()
            .zip(values)
            .zip(BAR_COLORS)
            .map(|((&label, value), color)| Bar {
                label,
                value,
                color,
            })
            .collect();
        Self {
            title: CHART_TITLE,
            y_label: CHART_Y_LABEL,
            bars,
        }
    }

    /// Largest bar value, or 0 for an empty chart.
    pub fn max_value(&self) -> f64 {
        self.bars.iter().map(|b| b.value).fold(0.0, f64::max)
    }
}

/// Renders the chart as horizontal text bars scaled to the largest value.
///
/// `width` is the number of cells available to the longest bar. Nonzero
/// values always get at least one cell so small bars stay visible next to
/// the solar bar.
pub fn render_ascii_chart(chart: &Chart, width: usize) -> String {
    let label_w = chart.bars.iter().map(|b| b.label.len()).max().unwrap_or(0);
    let max = chart.max_value();
    let mut out = format!("{}\n", chart.title);
    for bar in &chart.bars {
        let cells = if max > 0.0 {
            let n = (bar.value / max * width as f64).round() as usize;
            if bar.value > 0.0 { n.max(1) } else { 0 }
        } else {
            0
        };
        out.push_str(&format!(
            "{:<label_w$} │{} {:.2}\n",
            bar.label,
            "█".repeat(cells),
            bar.value,
        ));
    }
    out
}

/// A sized request with its chart, as emitted by `--json` and the API.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    /// The inputs that were sized.
    pub request: SizingRequest,
    /// Calculator output.
    pub result: SizingResult,
    /// Requirements chart for the result.
    pub chart: Chart,
}

impl Summary {
    pub fn new(request: SizingRequest, result: SizingResult) -> Self {
        Self {
            request,
            result,
            chart: Chart::from_result(&result),
        }
    }
}

/// Human-readable requirements summary for one request/result pair.
#[derive(Debug, Clone, Copy)]
pub struct Report<'a> {
    pub request: &'a SizingRequest,
    pub result: &'a SizingResult,
}

impl<'a> Report<'a> {
    pub fn new(request: &'a SizingRequest, result: &'a SizingResult) -> Self {
        Self { request, result }
    }

    /// Report body, one line per requirement.
    pub fn lines(&self) -> [String; 4] {
        let r = self.result;
        [
            format!("Energy Required: {:.2} kWh", r.energy_required_kwh),
            format!("Minimum Battery Capacity: {:.2} kWh", r.battery_capacity_kwh),
            format!(
                "Battery Size: {:.2} Ah (at {}V)",
                r.battery_size_ah, self.request.appliance_voltage_volts
            ),
            format!("Solar Panel Power Required: {:.0} W", r.solar_power_watts),
        ]
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- Calculated Requirements ---")?;
        let [energy, battery, ah, solar] = self.lines();
        writeln!(f, "{energy}")?;
        writeln!(f, "{battery}")?;
        writeln!(f, "{ah}")?;
        write!(f, "{solar}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_pair() -> (SizingRequest, SizingResult) {
        let req = SizingRequest::default();
        let res = req.size().unwrap();
        (req, res)
    }

    #[test]
    fn report_lines_match_expected_format() {
        let (req, res) = default_pair();
        let lines = Report::new(&req, &res).lines();
        assert_eq!(lines[0], "Energy Required: 0.70 kWh");
        assert_eq!(lines[1], "Minimum Battery Capacity: 0.78 kWh");
        assert_eq!(lines[2], "Battery Size: 32.41 Ah (at 24V)");
        assert_eq!(lines[3], "Solar Panel Power Required: 3182 W");
    }

    #[test]
    fn chart_has_three_ordered_bars() {
        let (_, res) = default_pair();
        let chart = Chart::from_result(&res);
        let labels: Vec<_> = chart.bars.iter().map(|b| b.label).collect();
        assert_eq!(labels, CATEGORIES);
        assert_eq!(chart.bars[2].value, res.solar_power_watts);
        assert_eq!(chart.bars[0].color, "#ffd300");
        assert_eq!(chart.title, "System Requirements");
    }

    #[test]
    fn ascii_chart_scales_to_largest_bar() {
        let (_, res) = default_pair();
        let out = render_ascii_chart(&Chart::from_result(&res), 40);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], CHART_TITLE);
        assert_eq!(lines[3].matches('█').count(), 40);
        // tiny kWh bars still show one cell
        assert_eq!(lines[1].matches('█').count(), 1);
    }

    #[test]
    fn summary_serializes_all_sections() {
        let (req, res) = default_pair();
        let json = serde_json::to_value(Summary::new(req, res)).unwrap();
        assert_eq!(json["request"]["appliance_voltage_volts"], 24.0);
        assert_eq!(json["chart"]["bars"][1]["label"], "Battery Capacity (kWh)");
        assert!(json["result"]["solar_power_watts"].as_f64().is_some());
    }

    #[test]
    fn ascii_chart_handles_all_zero_values() {
        let res = SizingResult {
            energy_required_kwh: 0.0,
            battery_capacity_kwh: 0.0,
            battery_size_ah: 0.0,
            solar_power_watts: 0.0,
        };
        let out = render_ascii_chart(&Chart::from_result(&res), 20);
        assert!(!out.contains('█'));
    }
}
