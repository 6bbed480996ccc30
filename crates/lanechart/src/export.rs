//! Output backends for laid-out diagrams.
//!
//! An [`Exporter`] takes a finished [`Diagram`] and writes it in some concrete
//! format. Layout never depends on this module; the only backend today is
//! [`svg::SvgExporter`].

pub mod svg;

use std::io;

use thiserror::Error;

use crate::layout::Diagram;

/// A sink that knows how to serialize a [`Diagram`].
pub trait Exporter {
    /// Writes `diagram` out in the backend's format.
    ///
    /// # Errors
    ///
    /// [`Error::Io`] when the underlying writer fails, [`Error::Render`] for
    /// anything the backend cannot express.
    fn export_diagram(&mut self, diagram: &Diagram) -> Result<(), Error>;
}

/// Failure while exporting a diagram.
#[derive(Debug, Error)]
pub enum Error {
    #[error("render error: {0}")]
    Render(String),

    #[error("write failed: {0}")]
    Io(#[from] io::Error),
}
