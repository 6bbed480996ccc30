//! Turns a [`LanechartError`] into miette reports for the terminal.
//!
//! A parse failure yields one [`Report`] per parser diagnostic, each pointing
//! into the script. Any other failure yields a single report with a
//! `lanechart::*` code and no source.

use std::{error::Error, fmt};

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan, SourceCode, SourceSpan};

use lanechart::LanechartError;
use lanechart_parser::{Span, error::Diagnostic};

/// One renderable problem.
#[derive(Debug)]
pub struct Report<'a> {
    message: String,
    code: Option<String>,
    help: Option<&'a str>,
    labels: Vec<LabeledSpan>,
    src: Option<&'a str>,
    cause: Option<&'a (dyn Error + 'static)>,
}

impl<'a> Report<'a> {
    /// A parser diagnostic, with snippets taken from `src`.
    pub fn from_diagnostic(diag: &'a Diagnostic, src: &'a str) -> Self {
        let labels = diag
            .labels()
            .iter()
            .map(|label| {
                let text = Some(label.message().to_string());
                let span = to_source_span(label.span());
                if label.is_primary() {
                    LabeledSpan::new_primary_with_span(text, span)
                } else {
                    LabeledSpan::new_with_span(text, span)
                }
            })
            .collect();

        Self {
            message: diag.message().to_string(),
            code: diag.code().map(|code| code.to_string()),
            help: diag.help(),
            labels,
            src: Some(src),
            cause: None,
        }
    }

    /// Any failure that has no position in the script.
    pub fn from_error(err: &'a LanechartError) -> Self {
        Self {
            message: err.to_string(),
            code: error_code(err).map(str::to_string),
            help: None,
            labels: Vec::new(),
            src: None,
            cause: err.source(),
        }
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl Error for Report<'_> {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.cause
    }
}

impl MietteDiagnostic for Report<'_> {
    fn code<'b>(&'b self) -> Option<Box<dyn fmt::Display + 'b>> {
        self.code
            .as_ref()
            .map(|code| Box::new(code) as Box<dyn fmt::Display + 'b>)
    }

    fn help<'b>(&'b self) -> Option<Box<dyn fmt::Display + 'b>> {
        self.help
            .map(|help| Box::new(help) as Box<dyn fmt::Display + 'b>)
    }

    fn source_code(&self) -> Option<&dyn SourceCode> {
        self.src.as_ref().map(|src| src as &dyn SourceCode)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        if self.labels.is_empty() {
            return None;
        }
        Some(Box::new(self.labels.iter().cloned()))
    }
}

/// The miette code for failures outside the parser.
fn error_code(err: &LanechartError) -> Option<&'static str> {
    match err {
        LanechartError::Io(_) => Some("lanechart::io"),
        LanechartError::Config(_) => Some("lanechart::config"),
        LanechartError::Parse { .. } => None,
        LanechartError::Layout(_) => Some("lanechart::layout"),
        LanechartError::Export(_) => Some("lanechart::export"),
    }
}

fn to_source_span(span: Span) -> SourceSpan {
    SourceSpan::new(span.start().into(), span.len())
}

/// Splits `err` into the reports the CLI prints.
pub fn to_reports(err: &LanechartError) -> Vec<Report<'_>> {
    match err {
        LanechartError::Parse { err: parse, src } => parse
            .diagnostics()
            .iter()
            .map(|diag| Report::from_diagnostic(diag, src))
            .collect(),
        other => vec![Report::from_error(other)],
    }
}
