//! The outer frame and the diagram title.
//!
//! ```text
//! ┌──────────────────┐─────────────────────────────┐
//! │ Title            │                             │
//! └──────────────────┘                             │
//! │   ┌─────┐    ┌─────┐                           │
//! │   │  A  │    │  B  │     ...                   │
//! │                                                │
//! └────────────────────────────────────────────────┘
//! ```

use lanechart_core::{
    draw::{HorizontalJustification, Primitives},
    sizing::{Measurement, SizingProvider},
    statement::{Keyword, Statement},
};

const DEFAULT_TITLE: &str = "Unknown Title";

/// Returns the label of the first `title` statement, or a placeholder.
pub fn title_lines(statements: &[Statement]) -> Vec<String> {
    statements
        .iter()
        .find(|s| s.keyword() == Keyword::Title && !s.label_lines().is_empty())
        .map(|s| s.label_lines().to_vec())
        .unwrap_or_else(|| vec![DEFAULT_TITLE.to_string()])
}

/// The frame of a diagram under construction.
#[derive(Debug, Clone, Copy)]
pub struct Frame {
    top: f32,
}

impl Frame {
    /// Starts the frame at `tidemark` and draws the title box below its top
    /// edge.
    ///
    /// Returns the frame and the tidemark below the title box.
    pub fn open(
        title: &[String],
        tidemark: f32,
        sizing: &dyn SizingProvider,
        primitives: &mut Primitives,
    ) -> (Self, f32) {
        let font_height = sizing.get(Measurement::FontHeight);
        let frame_left = sizing.get(Measurement::FramePadLR);
        let top = tidemark;

        let mut tidemark = top + sizing.get(Measurement::FrameTitleTextPadT);
        primitives.add_rows_of_text(
            frame_left + sizing.get(Measurement::FrameTitleTextPadL),
            tidemark,
            font_height,
            HorizontalJustification::Left,
            title,
        );
        tidemark += title.len() as f32 * font_height + sizing.get(Measurement::FrameTitleTextPadB);

        primitives.add_rect(
            frame_left,
            top,
            sizing.get(Measurement::FrameTitleBoxWidth),
            tidemark,
        );
        tidemark += sizing.get(Measurement::FrameTitleRectPadB);

        (Self { top }, tidemark)
    }

    pub fn top(&self) -> f32 {
        self.top
    }

    /// Draws the outer frame down to just below `tidemark` and returns the
    /// frame's bottom.
    pub fn close(
        &self,
        tidemark: f32,
        sizing: &dyn SizingProvider,
        primitives: &mut Primitives,
    ) -> f32 {
        let bottom = tidemark + sizing.get(Measurement::FrameInternalPadB);
        let pad = sizing.get(Measurement::FramePadLR);
        primitives.add_rect(
            pad,
            self.top,
            sizing.get(Measurement::DiagramWidth) - pad,
            bottom,
        );
        bottom
    }
}
