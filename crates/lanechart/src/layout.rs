//! Layout of sequence diagrams.
//!
//! Turns an ordered statement list into a [`Diagram`]: a flat list of drawing
//! primitives in absolute coordinates plus the overall dimensions an exporter
//! needs.
//!
//! # Pipeline Position
//!
//! ```text
//! Source Text
//!     ↓ parse
//! Statements
//!     ↓ layout (this module)
//! Diagram (positioned primitives)
//!     ↓ export
//! Output File
//! ```
//!
//! The work happens in [`sequence`], which drives the smaller pieces:
//! lane placement, the frame, per-lifeline activity boxes, no-go zones and
//! the final lifeline segmentation.

mod activity;
mod error;
mod frame;
mod lanes;
mod no_go;
mod segments;
mod sequence;

pub use activity::BoxError;
pub use error::LayoutError;
pub use sequence::build;

use lanechart_core::draw::Primitives;

/// A laid-out diagram, ready for export.
#[derive(Debug, Clone, PartialEq)]
pub struct Diagram {
    width: f32,
    height: f32,
    font_height: f32,
    dash_len: f32,
    dash_gap: f32,
    primitives: Primitives,
}

impl Diagram {
    /// Returns the working width of the diagram
    pub fn width(&self) -> f32 {
        self.width
    }

    /// Returns the height of the diagram, bottom padding included
    pub fn height(&self) -> f32 {
        self.height
    }

    /// Returns the height of one line of text
    pub fn font_height(&self) -> f32 {
        self.font_height
    }

    /// Returns the dash length for dashed lines
    pub fn dash_len(&self) -> f32 {
        self.dash_len
    }

    /// Returns the gap between dashes
    pub fn dash_gap(&self) -> f32 {
        self.dash_gap
    }

    /// Returns every primitive, in drawing order
    pub fn primitives(&self) -> &Primitives {
        &self.primitives
    }
}
