//! Activity boxes of a single lifeline.
//!
//! A lifeline's activity boxes are opened by the interactions that arrive at
//! or leave from it and closed either by an explicit `stop` or, at the end of
//! the diagram, implicitly. [`BoxTracker`] records them as vertical intervals:
//! every box but the last is closed, and the last may still be in progress.

use thiserror::Error;

use lanechart_core::geometry::{InvalidInterval, Segment};

/// Illegal transitions of a [`BoxTracker`].
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum BoxError {
    #[error("an activity box is already in progress (started at {start})")]
    AlreadyInProgress { start: f32 },

    #[error("no activity box is in progress")]
    NoneInProgress,

    #[error(transparent)]
    Interval(#[from] InvalidInterval),
}

/// Open/closed state of the activity boxes on one lifeline.
///
/// Boxes are added in non-decreasing start order and never overlap; at most
/// one is in progress at a time.
#[derive(Debug, Clone, Default)]
pub struct BoxTracker {
    closed: Vec<Segment>,
    in_progress: Option<f32>,
}

impl BoxTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if the most recent box has not been terminated.
    pub fn has_box_in_progress(&self) -> bool {
        self.in_progress.is_some()
    }

    /// Returns the start of the box in progress, if any.
    pub fn in_progress_start(&self) -> Option<f32> {
        self.in_progress
    }

    /// Opens a new box at `y`.
    ///
    /// # Errors
    ///
    /// Returns [`BoxError::AlreadyInProgress`] if a box is already open.
    pub fn add_starting_at(&mut self, y: f32) -> Result<(), BoxError> {
        if let Some(start) = self.in_progress {
            return Err(BoxError::AlreadyInProgress { start });
        }
        self.in_progress = Some(y);
        Ok(())
    }

    /// Closes the box in progress at `y` and returns its extent.
    ///
    /// # Errors
    ///
    /// Returns [`BoxError::NoneInProgress`] if no box is open, or
    /// [`BoxError::Interval`] if `y` lies above the box's start. The box
    /// stays open when either error is returned.
    pub fn terminate_at(&mut self, y: f32) -> Result<Segment, BoxError> {
        let start = self.in_progress.ok_or(BoxError::NoneInProgress)?;
        let extent = Segment::new(start, y)?;
        self.in_progress = None;
        self.closed.push(extent);
        Ok(extent)
    }

    /// Returns the closed boxes in the order they were opened.
    ///
    /// A box still in progress is not included.
    pub fn extents(&self) -> &[Segment] {
        &self.closed
    }
}
