//! Native implementation of the `tinytz` options.
//!
//! Converting a wall clock time to an instant may be ambiguous, the options
//! here define how such an operation is completed.

use core::{fmt, str::FromStr};

/// The disambiguation options for resolving a local date time to an instant.
///
/// A local time inside a fall-back overlap occurs twice and a local time
/// inside a spring-forward gap never occurs.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Disambiguation {
    /// Compatible option
    ///
    /// Picks the earlier instant in an overlap and moves a time in a gap
    /// forward by the length of the gap.
    #[default]
    Compatible,
    /// Earlier option
    Earlier,
    /// Later option
    Later,
    /// Reject option
    Reject,
}

/// A parsing error on `Disambiguation` options.
#[derive(Debug, Clone, Copy)]
pub struct ParseDisambiguationError;

impl fmt::Display for ParseDisambiguationError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("provided string was not a valid disambiguation value")
    }
}

impl FromStr for Disambiguation {
    type Err = ParseDisambiguationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "compatible" => Ok(Self::Compatible),
            "earlier" => Ok(Self::Earlier),
            "later" => Ok(Self::Later),
            "reject" => Ok(Self::Reject),
            _ => Err(ParseDisambiguationError),
        }
    }
}

impl fmt::Display for Disambiguation {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Compatible => "compatible",
            Self::Earlier => "earlier",
            Self::Later => "later",
            Self::Reject => "reject",
        }
        .fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use core::str::FromStr;

    use super::Disambiguation;

    #[test]
    fn parse_disambiguation() {
        assert_eq!(Disambiguation::default(), Disambiguation::Compatible);
        assert_eq!(
            Disambiguation::from_str("later").ok(),
            Some(Disambiguation::Later)
        );
        assert!(Disambiguation::from_str("Later").is_err());
    }
}
