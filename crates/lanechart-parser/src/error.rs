//! Error and diagnostic system for the Lanechart parser.
//!
//! Each problem found in a script becomes a [`Diagnostic`] carrying an
//! [`ErrorCode`], a message, labelled source spans and optional help text.
//! The parser keeps going after a bad line so that one run reports every
//! problem; all diagnostics are returned together in a [`ParseError`].
//!
//! # Example
//!
//! ```
//! # use lanechart_parser::error::{Diagnostic, ErrorCode};
//! # use lanechart_parser::Span;
//!
//! let diag = Diagnostic::error("line 3: Unknown lane: C")
//!     .with_code(ErrorCode::E200)
//!     .with_label(Span::new(20..31), "lane `C` is not declared")
//!     .with_help("declare it first with `lane C <label>`");
//! ```

mod collector;
mod diagnostic;
mod error_code;
mod label;
mod parse_error;

pub(crate) use collector::DiagnosticCollector;

pub use diagnostic::Diagnostic;
pub use error_code::ErrorCode;
pub use label::Label;
pub use parse_error::ParseError;
