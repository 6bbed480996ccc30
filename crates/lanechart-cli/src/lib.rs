//! Library half of the `lanechart` binary.
//!
//! [`run`] does the whole job for one invocation and hands any failure back
//! as a [`LanechartError`]; `main` turns that into miette reports through
//! [`error_adapter`].

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::fs;

use log::{debug, info};

use lanechart::{DiagramBuilder, LanechartError};

/// Renders the script named by `args.input` into `args.output`.
///
/// # Errors
///
/// Fails on the first problem: configuration, reading the script, parsing,
/// layout, rendering or writing the SVG.
pub fn run(args: &Args) -> Result<(), LanechartError> {
    let config = config::load_config(args.config.as_deref())?;
    let builder = DiagramBuilder::new(config);

    info!(input:? = args.input; "Reading script");
    let source = fs::read_to_string(&args.input)?;

    let statements = builder.parse(&source)?;
    let diagram = builder.build(&statements)?;
    let svg = builder.render_svg(&diagram)?;
    debug!(bytes = svg.len(); "Diagram rendered");

    fs::write(&args.output, svg)?;
    info!(output:? = args.output; "Diagram written");

    Ok(())
}
