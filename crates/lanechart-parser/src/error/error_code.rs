//! Error codes for the Lanechart diagnostic system.
//!
//! Error codes are organized by phase:
//! - `E1xx` - Statement syntax errors
//! - `E2xx` - Lane reference errors

use std::fmt;

/// Error codes for categorizing diagnostic errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // =========================================================================
    // Syntax Errors (E1xx)
    // =========================================================================
    /// Too few words.
    ///
    /// Every statement needs a keyword followed by at least one more word.
    E100,

    /// Unrecognized keyword.
    ///
    /// Valid keywords are `title`, `lane`, `full`, `dash`, `self` and `stop`.
    E101,

    /// Malformed single lane name.
    ///
    /// `lane`, `self` and `stop` expect one upper case letter, e.g. `A`.
    E102,

    /// Malformed lane pair.
    ///
    /// `full` and `dash` expect two adjacent upper case letters, e.g. `AB`.
    E103,

    /// Missing label text.
    ///
    /// Every statement except `stop` needs a label.
    E104,

    // =========================================================================
    // Reference Errors (E2xx)
    // =========================================================================
    /// Unknown lane.
    ///
    /// A lane was referenced before it was declared with `lane`.
    E200,

    /// Duplicate lane.
    ///
    /// The same lane name was declared twice.
    E201,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}
