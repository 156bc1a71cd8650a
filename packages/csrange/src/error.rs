use std::fmt;
use std::num::ParseIntError;

use thiserror::Error;

use crate::Item;

/// Errors that can occur when decoding comma separated range strings.
///
/// Every variant carries the offending token exactly as it appeared in the input (after the
/// input was split on commas), so callers can point the user at the part that needs fixing.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// A comma-delimited token is neither an integer nor a range with exactly two bounds.
    #[error("malformed token '{token}': {problem}")]
    MalformedToken {
        /// The token that could not be decoded.
        token: String,

        /// A human-readable description of the problem.
        problem: String,
    },

    /// One of the bounds of a range token could not be parsed as an integer.
    #[error("invalid range '{token}': {bound} value is not an integer")]
    NonIntegerBound {
        /// The range token that could not be decoded.
        token: String,

        /// Which side of the range was invalid.
        bound: RangeBound,

        /// The underlying integer parsing failure.
        source: ParseIntError,
    },

    /// The first bound of a range token is greater than the last bound.
    #[error("invalid range '{token}': first value {first} is greater than last value {last}")]
    InvertedRange {
        /// The range token that could not be decoded.
        token: String,

        /// The parsed first bound.
        first: Item,

        /// The parsed last bound.
        last: Item,
    },
}

impl Error {
    /// The token from the input that caused decoding to fail.
    #[must_use]
    pub fn token(&self) -> &str {
        match self {
            Self::MalformedToken { token, .. }
            | Self::NonIntegerBound { token, .. }
            | Self::InvertedRange { token, .. } => token.as_str(),
        }
    }
}

/// Identifies one side of a `first-last` range token.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum RangeBound {
    /// The value before the dash.
    First,

    /// The value after the dash.
    Last,
}

impl fmt::Display for RangeBound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::First => write!(f, "first"),
            Self::Last => write!(f, "last"),
        }
    }
}

/// A specialized `Result` type for csrange operations, returning the crate's
/// [`Error`] type as the error value.
pub(crate) type Result<T> = std::result::Result<T, Error>;
