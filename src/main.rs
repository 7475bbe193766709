//! # hopgraph - command-line entry point
//!
//! 1. Parse arguments
//! 2. Resolve configuration (defaults, file, environment, flags)
//! 3. Initialize tracing on stderr
//! 4. Load the graph, run one command, print its report to stdout
//!
//! Failures are printed to stderr (or as a JSON error envelope on stdout when
//! JSON output is selected) and mapped to semantic exit codes.

#![forbid(unsafe_code)]
#![forbid(clippy::unwrap_used)]
#![forbid(clippy::panic)]
#![deny(clippy::expect_used)]

use std::io::Write;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, error};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use hopgraph::cli::Cli;
use hopgraph::commands::execute;
use hopgraph::json::{JsonError, JsonSerializable};
use hopgraph::loader::{LoadOptions, load_file};
use hopgraph::{HopgraphConfig, OutputFormat};

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match resolve_config(&cli) {
        Ok(config) => config,
        Err(err) => return report_failure(&err, cli.format.unwrap_or_default()),
    };

    init_tracing(cli.verbosity_filter().unwrap_or(config.log_level.as_str()));
    debug!(?config, "Configuration resolved");

    match run(&cli, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => report_failure(&*err, config.output),
    }
}

/// Defaults, then the config file, then `HOPGRAPH_*`, then flags.
fn resolve_config(cli: &Cli) -> hopgraph::Result<HopgraphConfig> {
    let mut config = HopgraphConfig::load(cli.config.as_deref())?;
    if let Some(format) = cli.format {
        config.output = format;
    }
    Ok(config)
}

fn run(cli: &Cli, config: &HopgraphConfig) -> Result<()> {
    let graph = load_file(&cli.graph, &LoadOptions::from(config))
        .with_context(|| format!("Failed to load graph from {}", cli.graph.display()))?;

    let report = execute(&cli.command, &graph)?;
    let rendered = report.render(config.output)?;

    std::io::stdout()
        .lock()
        .write_all(rendered.as_bytes())
        .context("Failed to write report to stdout")?;
    Ok(())
}

/// Print `err` in the selected format and map it to an exit code.
fn report_failure(err: &(dyn std::error::Error + 'static), format: OutputFormat) -> ExitCode {
    let driver_error = find_driver_error(err);
    let exit_code = driver_error.map_or(3, hopgraph::Error::exit_code);

    error!(exit_code, "{err}");

    match (format, driver_error) {
        (OutputFormat::Json, Some(driver_error)) => {
            let payload = JsonError::from(driver_error)
                .to_json()
                .unwrap_or_else(|_| driver_error.to_string());
            println!("{payload}");
        }
        _ => eprintln!("Error: {}", render_chain(err)),
    }

    ExitCode::from(exit_code)
}

/// The first `hopgraph::Error` in the source chain.
fn find_driver_error<'e>(err: &'e (dyn std::error::Error + 'static)) -> Option<&'e hopgraph::Error> {
    std::iter::successors(Some(err), |current| current.source())
        .find_map(|current| current.downcast_ref::<hopgraph::Error>())
}

fn render_chain(err: &(dyn std::error::Error + 'static)) -> String {
    std::iter::successors(Some(err), |current| current.source())
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(": ")
}

/// Initialize tracing on stderr, preferring `RUST_LOG` over `default_filter`.
fn init_tracing(default_filter: &str) {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
