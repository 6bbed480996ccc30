//! Spans of the script annotated with a short message.

use crate::span::Span;

/// Points a diagnostic at part of the script.
///
/// The primary label marks the offending text; secondary labels mark related
/// text, such as where a duplicated lane was first declared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Label {
    span: Span,
    message: String,
    primary: bool,
}

impl Label {
    fn new(span: Span, message: impl Into<String>, primary: bool) -> Self {
        Self {
            span,
            message: message.into(),
            primary,
        }
    }

    pub fn primary(span: Span, message: impl Into<String>) -> Self {
        Self::new(span, message, true)
    }

    pub fn secondary(span: Span, message: impl Into<String>) -> Self {
        Self::new(span, message, false)
    }

    pub fn span(&self) -> Span {
        self.span
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn is_primary(&self) -> bool {
        self.primary
    }
}
