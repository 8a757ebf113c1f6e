//! Sizing calculator entry point: CLI wiring and config-driven request construction.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use std::process;

use clean_cook_sizing::cli::{self, CliOptions};
use clean_cook_sizing::config::SizingConfig;
use clean_cook_sizing::io::batch;
use clean_cook_sizing::logging;
use clean_cook_sizing::report::{Chart, Report, Summary, render_ascii_chart};
use clean_cook_sizing::sizing::calculate;
use tracing::{debug, warn};

/// Width of the longest bar in the text chart.
const CHART_WIDTH: usize = 40;

/// Loads inputs from `--config` or `--preset`, then applies flag overrides.
///
/// Returns the inputs and the name shown for their source.
fn load_inputs(cli: &CliOptions) -> Result<(SizingConfig, String), Vec<String>> {
    let (mut cfg, source) = if let Some(ref path) = cli.config {
        let cfg = SizingConfig::from_toml_file(path).map_err(|e| vec![e.to_string()])?;
        (cfg, path.display().to_string())
    } else {
        let name = cli.preset.as_deref().unwrap_or("default");
        let cfg = SizingConfig::from_preset(name).map_err(|e| vec![e.to_string()])?;
        (cfg, name.to_string())
    };

    cli.overrides.apply(&mut cfg);

    let errors = cfg.validate();
    if !errors.is_empty() {
        return Err(errors.iter().map(ToString::to_string).collect());
    }
    debug!(?cfg, %source, "inputs loaded");
    Ok((cfg, source))
}

fn run_batch(input: &Path, out: Option<&Path>) -> Result<(), String> {
    let outcomes = match out {
        Some(path) => {
            let file = File::create(path)
                .map_err(|e| format!("cannot create \"{}\": {e}", path.display()))?;
            batch::run_file(input, BufWriter::new(file))
        }
        None => batch::run_file(input, io::stdout().lock()),
    }
    .map_err(|e| e.to_string())?;

    let rejected = outcomes.iter().filter(|o| o.result.is_err()).count();
    if rejected > 0 {
        eprintln!("{rejected} of {} requests rejected", outcomes.len());
    }
    if let Some(path) = out {
        eprintln!("Results written to {}", path.display());
    }
    Ok(())
}

fn print_once(cli: &CliOptions, cfg: &SizingConfig) -> Result<(), String> {
    let request = cfg.to_request();
    let result = calculate(&request).map_err(|e| e.to_string())?;

    let mut stdout = io::stdout().lock();
    if cli.json {
        serde_json::to_string_pretty(&Summary::new(request, result))
            .map_err(|e| format!("cannot serialize result: {e}"))
            .and_then(|s| writeln!(stdout, "{s}").map_err(|e| e.to_string()))
    } else {
        let mut text = Report::new(&request, &result).to_string();
        if cli.chart {
            text.push_str("\n\n");
            text.push_str(&render_ascii_chart(&Chart::from_result(&result), CHART_WIDTH));
        }
        writeln!(stdout, "{}", text.trim_end()).map_err(|e| e.to_string())
    }
}

fn main() {
    let cli = match cli::parse_args() {
        Ok(opts) => opts,
        Err(e) => {
            eprintln!("error: {e}");
            cli::print_usage();
            process::exit(1);
        }
    };

    if cli.help {
        cli::print_usage();
        return;
    }

    // The TUI owns the terminal; log lines would tear its frames.
    if !cli.tui {
        if let Err(e) = logging::init(&cli.log_filter) {
            eprintln!("warning: {e}");
        }
    }

    if let Some(ref input) = cli.batch {
        if let Err(e) = run_batch(input, cli.out.as_deref()) {
            eprintln!("error: {e}");
            process::exit(1);
        }
        return;
    }

    let (cfg, source) = match load_inputs(&cli) {
        Ok(loaded) => loaded,
        Err(errors) => {
            for e in &errors {
                eprintln!("{e}");
            }
            process::exit(1);
        }
    };

    #[cfg(feature = "tui")]
    if cli.tui {
        let app = clean_cook_sizing::tui::runtime::App::with_inputs(cfg, source);
        if let Err(e) = clean_cook_sizing::tui::run(app) {
            eprintln!("error: TUI crashed: {e}");
            process::exit(1);
        }
        return;
    }

    #[cfg(feature = "api")]
    if cli.serve {
        use std::net::SocketAddr;
        use std::sync::Arc;

        let state = Arc::new(clean_cook_sizing::api::AppState::default());
        let addr = SocketAddr::from(([0, 0, 0, 0], cli.port));
        let rt = tokio::runtime::Runtime::new().unwrap_or_else(|e| {
            eprintln!("error: failed to create tokio runtime: {e}");
            process::exit(1);
        });
        if let Err(e) = rt.block_on(clean_cook_sizing::api::serve(state, addr)) {
            eprintln!("error: API server failed: {e}");
            process::exit(1);
        }
        return;
    }

    if let Err(e) = print_once(&cli, &cfg) {
        warn!(%source, "sizing failed");
        eprintln!("error: {e}");
        process::exit(1);
    }
}
