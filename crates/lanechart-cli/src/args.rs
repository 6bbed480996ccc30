//! Command-line interface definition.

use std::path::PathBuf;

use clap::Parser;

/// Render a Lanechart script as an SVG sequence diagram.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Script to render
    #[arg(value_name = "SCRIPT")]
    pub input: PathBuf,

    /// Where to write the SVG
    #[arg(short, long, value_name = "FILE", default_value = "out.svg")]
    pub output: PathBuf,

    /// TOML configuration file; searched for when omitted
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// One of off, error, warn, info, debug, trace
    #[arg(long, value_name = "LEVEL", default_value = "info")]
    pub log_level: String,
}
