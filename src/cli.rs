//! Command-line argument parsing.

use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use crate::config::SizingConfig;

/// Default `tracing` filter when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Default API port.
pub const DEFAULT_PORT: u16 = 3000;

/// Per-field input overrides applied on top of the config or preset.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Overrides {
    pub power_watts: Option<f64>,
    pub voltage_volts: Option<u32>,
    pub cook_duration_hours: Option<f64>,
    pub inverter_pct: Option<f64>,
    pub solar_panel_pct: Option<f64>,
}

impl Overrides {
    /// Whether no override flag was given.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Writes every set override into `cfg`.
    pub fn apply(&self, cfg: &mut SizingConfig) {
        if let Some(v) = self.power_watts {
            cfg.appliance.power_watts = v;
        }
        if let Some(v) = self.voltage_volts {
            cfg.appliance.voltage_volts = v;
        }
        if let Some(v) = self.cook_duration_hours {
            cfg.appliance.cook_duration_hours = v;
        }
        if let Some(v) = self.inverter_pct {
            cfg.efficiency.inverter_pct = v;
        }
        if let Some(v) = self.solar_panel_pct {
            cfg.efficiency.solar_panel_pct = v;
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CliOptions {
    pub config: Option<PathBuf>,
    pub preset: Option<String>,
    pub overrides: Overrides,
    pub json: bool,
    pub chart: bool,
    pub batch: Option<PathBuf>,
    pub out: Option<PathBuf>,
    pub log_filter: String,
    pub tui: bool,
    pub serve: bool,
    pub port: u16,
    pub help: bool,
}

impl Default for CliOptions {
    fn default() -> Self {
        Self {
            config: None,
            preset: None,
            overrides: Overrides::default(),
            json: false,
            chart: true,
            batch: None,
            out: None,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            tui: false,
            serve: false,
            port: DEFAULT_PORT,
            help: false,
        }
    }
}

pub fn parse_args() -> Result<CliOptions, String> {
    let args: Vec<String> = env::args().skip(1).collect();
    parse_args_from(&args)
}

pub fn parse_args_from(args: &[String]) -> Result<CliOptions, String> {
    let mut i = 0usize;
    let mut opts = CliOptions::default();

    while i < args.len() {
        match args[i].as_str() {
            "--config" => {
                i += 1;
                let path = args.next_or_err(i, "missing value for --config (expected a TOML file path)")?;
                if opts.config.replace(PathBuf::from(path)).is_some() {
                    return Err("--config provided more than once".to_string());
                }
            }
            "--preset" => {
                i += 1;
                let name = args.next_or_err(i, "missing value for --preset (expected a preset name)")?;
                if opts.preset.replace(name.to_string()).is_some() {
                    return Err("--preset provided more than once".to_string());
                }
            }
            "--power" => {
                i += 1;
                opts.overrides.power_watts = Some(parse_value(args, i, "--power", "watts")?);
            }
            "--voltage" => {
                i += 1;
                opts.overrides.voltage_volts = Some(parse_value(args, i, "--voltage", "volts")?);
            }
            "--duration" => {
                i += 1;
                opts.overrides.cook_duration_hours =
                    Some(parse_value(args, i, "--duration", "hours")?);
            }
            "--inverter-eff" => {
                i += 1;
                opts.overrides.inverter_pct =
                    Some(parse_value(args, i, "--inverter-eff", "percent")?);
            }
            "--solar-eff" => {
                i += 1;
                opts.overrides.solar_panel_pct =
                    Some(parse_value(args, i, "--solar-eff", "percent")?);
            }
            "--json" => opts.json = true,
            "--no-chart" => opts.chart = false,
            "--batch" => {
                i += 1;
                let path = args.next_or_err(i, "missing value for --batch (expected a CSV file path)")?;
                opts.batch = Some(PathBuf::from(path));
            }
            "--out" => {
                i += 1;
                let path = args.next_or_err(i, "missing value for --out (expected a file path)")?;
                opts.out = Some(PathBuf::from(path));
            }
            "--log-level" => {
                i += 1;
                opts.log_filter = args
                    .next_or_err(i, "missing value for --log-level (expected a filter such as `debug`)")?
                    .to_string();
            }
            #[cfg(feature = "tui")]
            "--tui" => opts.tui = true,
            #[cfg(feature = "api")]
            "--serve" => opts.serve = true,
            #[cfg(feature = "api")]
            "--port" => {
                i += 1;
                opts.port = parse_value(args, i, "--port", "a u16 port")?;
            }
            "--help" | "-h" => opts.help = true,
            other => return Err(format!("unknown argument: {other}")),
        }
        i += 1;
    }

    if opts.config.is_some() && opts.preset.is_some() {
        return Err(
            "arguments `--config` and `--preset` are mutually exclusive; choose one source"
                .to_string(),
        );
    }
    if opts.out.is_some() && opts.batch.is_none() {
        return Err("`--out` requires `--batch`".to_string());
    }
    if opts.batch.is_some() {
        if let Some(flag) = batch_conflict(&opts) {
            return Err(format!(
                "`--batch` reads every input from the CSV and cannot be combined with {flag}"
            ));
        }
    }

    if opts.config.is_none() && opts.preset.is_none() && opts.batch.is_none() {
        opts.preset = Some("default".to_string());
    }

    Ok(opts)
}

/// First flag given alongside `--batch` that batch mode would ignore.
fn batch_conflict(opts: &CliOptions) -> Option<&'static str> {
    [
        ("`--config`", opts.config.is_some()),
        ("`--preset`", opts.preset.is_some()),
        ("input overrides", !opts.overrides.is_empty()),
        ("`--json`", opts.json),
        ("`--no-chart`", !opts.chart),
        ("`--tui`", opts.tui),
        ("`--serve`", opts.serve),
    ]
    .into_iter()
    .find_map(|(flag, given)| given.then_some(flag))
}

fn parse_value<T: FromStr>(args: &[String], i: usize, flag: &str, expected: &str) -> Result<T, String> {
    let raw = args.next_or_err(i, &format!("missing value for {flag} (expected {expected})"))?;
    raw.parse::<T>()
        .map_err(|_| format!("{flag} value \"{raw}\" is not valid (expected {expected})"))
}

trait SliceArgExt {
    fn next_or_err(&self, index: usize, err: &str) -> Result<&str, String>;
}

impl SliceArgExt for [String] {
    fn next_or_err(&self, index: usize, err: &str) -> Result<&str, String> {
        self.get(index)
            .map(String::as_str)
            .ok_or_else(|| err.to_string())
    }
}

pub fn print_usage() {
    eprintln!("clean-cook-sizing: battery and solar sizing for electric cooking appliances");
    eprintln!();
    eprintln!("Usage:");
    eprintln!("  clean-cook-sizing [--config <path> | --preset <name>] [OVERRIDES] [OUTPUT]");
    eprintln!("  clean-cook-sizing --batch <requests.csv> [--out <results.csv>]");
    eprintln!();
    eprintln!("Sources:");
    eprintln!("  --config <path>          Load inputs from a TOML file");
    eprintln!(
        "  --preset <name>          Built-in inputs ({}), default: default",
        SizingConfig::PRESETS.join(", ")
    );
    eprintln!();
    eprintln!("Overrides:");
    eprintln!("  --power <W>              Appliance power, 100-3000");
    eprintln!("  --voltage <V>            Appliance voltage: 12, 24, 48, 220");
    eprintln!("  --duration <h>           Cooking duration, 0.1-5.0");
    eprintln!("  --inverter-eff <%>       Inverter efficiency, 70-100");
    eprintln!("  --solar-eff <%>          Solar panel efficiency, 0-100");
    eprintln!();
    eprintln!("Output:");
    eprintln!("  --json                   Print request, result, and chart as JSON");
    eprintln!("  --no-chart               Omit the text bar chart");
    eprintln!("  --log-level <filter>     tracing filter (default: warn, RUST_LOG wins)");
    #[cfg(feature = "tui")]
    eprintln!("  --tui                    Interactive terminal form");
    #[cfg(feature = "api")]
    {
        eprintln!("  --serve                  Start the HTTP API");
        eprintln!("  --port <u16>             API port (default: 3000)");
    }
    eprintln!("  --help                   Show this help message");
}
