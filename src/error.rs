//! This module implements `TimeError`.

use core::fmt;

/// `TimeError`'s error type.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Error.
    #[default]
    Generic,
    /// RangeError
    Range,
    /// SyntaxError
    Syntax,
    /// A rule shape or buffer size the active zone processor cannot represent.
    Unsupported,
    /// Assertion error
    Assert,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Generic => "Error",
            Self::Range => "RangeError",
            Self::Syntax => "SyntaxError",
            Self::Unsupported => "UnsupportedError",
            Self::Assert => "ImplementationError",
        }
        .fmt(f)
    }
}

/// The error type for `tinytz`.
///
/// Errors carry a kind and a static message, so creating and returning
/// one never allocates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeError {
    kind: ErrorKind,
    msg: &'static str,
}

impl TimeError {
    #[inline]
    #[must_use]
    const fn new(kind: ErrorKind) -> Self {
        Self { kind, msg: "" }
    }

    /// Create a generic error
    #[inline]
    #[must_use]
    pub const fn general(msg: &'static str) -> Self {
        Self::new(ErrorKind::Generic).with_message(msg)
    }

    /// Create a range error.
    #[inline]
    #[must_use]
    pub const fn range() -> Self {
        Self::new(ErrorKind::Range)
    }

    /// Create a syntax error.
    #[inline]
    #[must_use]
    pub const fn syntax() -> Self {
        Self::new(ErrorKind::Syntax)
    }

    /// Create an unsupported rule error.
    #[inline]
    #[must_use]
    pub const fn unsupported() -> Self {
        Self::new(ErrorKind::Unsupported)
    }

    /// Creates an assertion error
    #[inline]
    #[must_use]
    pub(crate) const fn assert() -> Self {
        Self::new(ErrorKind::Assert).with_message("Implementation error: invariant violated.")
    }

    /// Add a message to the error.
    #[inline]
    #[must_use]
    pub const fn with_message(mut self, msg: &'static str) -> Self {
        self.msg = msg;
        self
    }

    /// Returns this error's kind.
    #[inline]
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Returns the error message.
    #[inline]
    #[must_use]
    pub const fn message(&self) -> &'static str {
        self.msg
    }
}

impl fmt::Display for TimeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)?;

        let msg = self.msg.trim();
        if !msg.is_empty() {
            write!(f, ": {msg}")?;
        }

        Ok(())
    }
}

impl core::error::Error for TimeError {}

#[cfg(test)]
mod tests {
    use std::string::ToString;

    use super::{ErrorKind, TimeError};

    #[test]
    fn display() {
        let err = TimeError::range().with_message("month out of range.");
        assert_eq!(err.kind(), ErrorKind::Range);
        assert_eq!(err.to_string(), "RangeError: month out of range.");
        assert_eq!(TimeError::syntax().to_string(), "SyntaxError");
    }
}
