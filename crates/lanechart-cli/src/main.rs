//! Lanechart CLI entry point.

use std::{process, str::FromStr};

use clap::Parser;
use log::{LevelFilter, debug, error, info, warn};

use lanechart::LanechartError;
use lanechart_cli::{Args, error_adapter::to_reports};

/// Sets up `env_logger`, falling back to `warn` for an unknown level name.
fn init_logging(level: &str) {
    let filter = LevelFilter::from_str(level).ok();

    env_logger::Builder::from_env(env_logger::Env::default())
        .filter_level(filter.unwrap_or(LevelFilter::Warn))
        .init();

    match filter {
        Some(filter) => info!(log_level:? = filter; "Starting Lanechart"),
        None => warn!(requested = level; "Invalid log level, using 'warn' instead"),
    }
}

/// Logs one rendered miette report per diagnostic in `err`.
fn report(err: &LanechartError) {
    let handler = miette::GraphicalReportHandler::new();
    for item in to_reports(err) {
        let mut rendered = String::new();
        if handler.render_report(&mut rendered, &item).is_err() {
            rendered = item.to_string();
        }
        error!("{rendered}");
    }
}

fn main() {
    miette::set_panic_hook();

    let args = Args::parse();
    init_logging(&args.log_level);
    debug!(args:?; "Parsed arguments");

    if let Err(err) = lanechart_cli::run(&args) {
        report(&err);
        process::exit(1);
    }

    info!("Completed successfully");
}
