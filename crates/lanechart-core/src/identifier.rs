//! Interned identifiers for lanes.
//!
//! Lane names are short strings that are compared and hashed constantly during
//! layout. [`Id`] interns them once so that copies and comparisons are cheap.

use std::{
    fmt,
    sync::{Mutex, OnceLock},
};

use string_interner::{DefaultStringInterner, DefaultSymbol};

/// Process-wide interner shared by every [`Id`].
static INTERNER: OnceLock<Mutex<DefaultStringInterner>> = OnceLock::new();

/// Runs `f` with exclusive access to the interner.
///
/// A poisoned lock still holds a consistent interner (interning never leaves
/// it half-updated), so the guard is recovered instead of propagating a panic.
fn with_interner<R>(f: impl FnOnce(&mut DefaultStringInterner) -> R) -> R {
    let mutex = INTERNER.get_or_init(|| Mutex::new(DefaultStringInterner::new()));
    let mut guard = match mutex.lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    };
    f(&mut guard)
}

/// A lane identifier backed by the string interner.
///
/// # Examples
///
/// ```
/// use lanechart_core::identifier::Id;
///
/// let a = Id::new("A");
/// assert_eq!(a, Id::new("A"));
/// assert_eq!(a, "A");
/// assert_eq!(a.to_string(), "A");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Id(DefaultSymbol);

impl Id {
    /// Interns `name` and returns its identifier.
    pub fn new(name: &str) -> Self {
        Self(with_interner(|interner| interner.get_or_intern(name)))
    }

    /// Returns the interned string for this identifier.
    pub fn resolve(self) -> String {
        with_interner(|interner| interner.resolve(self.0).unwrap_or_default().to_string())
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.resolve())
    }
}

impl From<&str> for Id {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<char> for Id {
    fn from(name: char) -> Self {
        let mut buf = [0u8; 4];
        Self::new(name.encode_utf8(&mut buf))
    }
}

impl PartialEq<&str> for Id {
    fn eq(&self, other: &&str) -> bool {
        with_interner(|interner| interner.resolve(self.0) == Some(*other))
    }
}

impl PartialEq<str> for Id {
    fn eq(&self, other: &str) -> bool {
        self == &other
    }
}
