//! Errors raised while laying out a diagram.

use thiserror::Error;

use lanechart_core::{geometry::InvalidInterval, identifier::Id, statement::Keyword};

use super::activity::BoxError;

/// A failure of the layout pass.
///
/// Every variant means the statement list broke an invariant the parser is
/// expected to enforce; layout never recovers from one and the whole build
/// fails.
#[derive(Debug, Error)]
pub enum LayoutError {
    /// An activity box was opened while one was open, or closed while none was.
    #[error("line {line}: lane {lane}: {source}")]
    InvalidBoxState {
        lane: Id,
        line: usize,
        #[source]
        source: BoxError,
    },

    /// A vertical interval would end before it starts.
    #[error(transparent)]
    InvalidInterval(#[from] InvalidInterval),

    /// A statement refers to a lane that was never declared.
    #[error("line {line}: unknown lane: {lane}")]
    UnknownLane { lane: Id, line: usize },

    /// A statement has fewer lane references than its keyword requires.
    #[error("line {line}: `{keyword}` statement is missing a lane reference")]
    MissingLane { keyword: Keyword, line: usize },
}

impl LayoutError {
    /// Attributes a box tracker failure to `lane` and the statement's source line.
    pub(crate) fn from_box_error(source: BoxError, lane: Id, line: usize) -> Self {
        match source {
            BoxError::Interval(err) => Self::InvalidInterval(err),
            source => Self::InvalidBoxState { lane, line, source },
        }
    }
}
