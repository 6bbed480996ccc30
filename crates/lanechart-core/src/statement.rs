//! The typed statement model consumed by the layout engine.
//!
//! A diagram is an ordered list of [`Statement`]s. Each statement carries a
//! [`Keyword`], the lanes it refers to, the lines of its label, and the source
//! line it came from (used only when reporting errors).
//!
//! | Keyword | Lanes | Label |
//! |---|---|---|
//! | [`Keyword::Title`] | none | required |
//! | [`Keyword::Lane`] | the declared lane | required |
//! | [`Keyword::Full`] / [`Keyword::Dash`] | from, to | required |
//! | [`Keyword::SelfCall`] | the lane | required |
//! | [`Keyword::Stop`] | the lane | empty |

use std::fmt;

use crate::identifier::Id;

/// The kind of a statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Keyword {
    /// Diagram title.
    Title,
    /// Lane (lifeline) declaration.
    Lane,
    /// Solid interaction line between two lanes.
    Full,
    /// Dashed (reply) interaction line between two lanes.
    Dash,
    /// A loop from a lane back to itself.
    SelfCall,
    /// Explicit end of a lane's activity box.
    Stop,
}

impl Keyword {
    /// Returns the DSL spelling of the keyword.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Lane => "lane",
            Self::Full => "full",
            Self::Dash => "dash",
            Self::SelfCall => "self",
            Self::Stop => "stop",
        }
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One statement of a diagram script.
#[derive(Debug, Clone, PartialEq)]
pub struct Statement {
    keyword: Keyword,
    lanes: Vec<Id>,
    label_lines: Vec<String>,
    source_line: usize,
}

impl Statement {
    /// Creates a statement from its parts.
    ///
    /// Prefer the keyword-specific constructors, which fix the lane arity.
    pub fn new(keyword: Keyword, lanes: Vec<Id>, label_lines: Vec<String>) -> Self {
        Self {
            keyword,
            lanes,
            label_lines,
            source_line: 0,
        }
    }

    /// A `title` statement.
    pub fn title<S: Into<String>>(label_lines: impl IntoIterator<Item = S>) -> Self {
        Self::new(Keyword::Title, Vec::new(), collect_lines(label_lines))
    }

    /// A `lane` declaration.
    pub fn lane<S: Into<String>>(lane: Id, label_lines: impl IntoIterator<Item = S>) -> Self {
        Self::new(Keyword::Lane, vec![lane], collect_lines(label_lines))
    }

    /// A solid interaction from `from` to `to`.
    pub fn full<S: Into<String>>(
        from: Id,
        to: Id,
        label_lines: impl IntoIterator<Item = S>,
    ) -> Self {
        Self::new(Keyword::Full, vec![from, to], collect_lines(label_lines))
    }

    /// A dashed interaction from `from` to `to`.
    pub fn dash<S: Into<String>>(
        from: Id,
        to: Id,
        label_lines: impl IntoIterator<Item = S>,
    ) -> Self {
        Self::new(Keyword::Dash, vec![from, to], collect_lines(label_lines))
    }

    /// A self interaction on `lane`.
    pub fn self_call<S: Into<String>>(lane: Id, label_lines: impl IntoIterator<Item = S>) -> Self {
        Self::new(Keyword::SelfCall, vec![lane], collect_lines(label_lines))
    }

    /// A `stop` for `lane`.
    pub fn stop(lane: Id) -> Self {
        Self::new(Keyword::Stop, vec![lane], Vec::new())
    }

    /// Sets the 1-based source line.
    pub fn with_source_line(mut self, line: usize) -> Self {
        self.source_line = line;
        self
    }

    /// Returns the keyword
    pub fn keyword(&self) -> Keyword {
        self.keyword
    }

    /// Returns the referenced lanes, in order
    pub fn lanes(&self) -> &[Id] {
        &self.lanes
    }

    /// Returns the lane at `position`, if the statement references that many.
    pub fn lane_at(&self, position: usize) -> Option<Id> {
        self.lanes.get(position).copied()
    }

    /// Returns the label lines
    pub fn label_lines(&self) -> &[String] {
        &self.label_lines
    }

    /// Returns the 1-based source line, or 0 when unknown
    pub fn source_line(&self) -> usize {
        self.source_line
    }
}

fn collect_lines<S: Into<String>>(lines: impl IntoIterator<Item = S>) -> Vec<String> {
    lines.into_iter().map(Into::into).collect()
}
