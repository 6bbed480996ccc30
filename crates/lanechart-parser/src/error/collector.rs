//! Collector for accumulating diagnostics while parsing a script.

use crate::error::{Diagnostic, ParseError};

/// Accumulates diagnostics so that every bad line is reported in one run.
#[derive(Debug, Default)]
pub struct DiagnosticCollector {
    diagnostics: Vec<Diagnostic>,
}

impl DiagnosticCollector {
    /// Create a new empty collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a diagnostic.
    pub fn emit(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    /// Returns `Err` with every recorded diagnostic, or `Ok(())` if none.
    pub fn finish(self) -> Result<(), ParseError> {
        if self.diagnostics.is_empty() {
            Ok(())
        } else {
            Err(ParseError::new(self.diagnostics))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_collector_succeeds() {
        assert!(DiagnosticCollector::new().finish().is_ok());
    }

    #[test]
    fn test_collector_keeps_order() {
        let mut collector = DiagnosticCollector::new();
        collector.emit(Diagnostic::error("one"));
        collector.emit(Diagnostic::error("two"));

        let err = collector.finish().unwrap_err();
        assert_eq!(err.diagnostics()[0].message(), "one");
        assert_eq!(err.diagnostics()[1].message(), "two");
    }
}
