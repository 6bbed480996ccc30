//! The crate-level error type.

use std::io;

use thiserror::Error;

use lanechart_parser::error::ParseError;

use crate::{export, layout::LayoutError};

/// Anything that can go wrong between reading a script and writing its SVG.
///
/// A parse failure keeps the script text next to its diagnostics so that a
/// front end can point into the source; the other variants stand alone.
#[derive(Debug, Error)]
pub enum LanechartError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("{err}")]
    Parse { err: ParseError, src: String },

    #[error("Layout error: {0}")]
    Layout(#[from] LayoutError),

    #[error("Export error: {0}")]
    Export(#[from] export::Error),
}

impl LanechartError {
    /// Wraps `err` together with the script it was raised for.
    pub fn new_parse_error(err: ParseError, src: impl Into<String>) -> Self {
        Self::Parse {
            err,
            src: src.into(),
        }
    }
}
