//! Parser for the Lanechart sequence diagram script.
//!
//! A script is a sequence of one-line statements which this crate turns into
//! the typed [`Statement`] list consumed by the layout engine:
//!
//! ```
//! use lanechart_core::statement::Keyword;
//!
//! let statements = lanechart_parser::parse("lane A App\nlane B API\nfull AB get()").unwrap();
//! assert_eq!(statements.len(), 3);
//! assert_eq!(statements[2].keyword(), Keyword::Full);
//! ```
//!
//! Errors are collected for every bad line and returned together in a
//! [`ParseError`](error::ParseError); each [`Diagnostic`](error::Diagnostic)
//! carries byte [`Span`]s into the source for rendering.

pub mod error;

mod parser;
mod span;

pub use span::Span;

use lanechart_core::statement::Statement;

use crate::error::ParseError;

/// Parses a Lanechart script into statements.
///
/// Blank lines are ignored. Every statement carries its 1-based source line.
///
/// # Errors
///
/// Returns a [`ParseError`] holding one diagnostic per malformed line.
pub fn parse(source: &str) -> Result<Vec<Statement>, ParseError> {
    parser::parse_script(source)
}
