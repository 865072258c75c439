//! Error types for the time reference.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from instant parsing, calendar construction, or clock stepping.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum TimeError {
    /// Date/time string could not be parsed.
    Parse(String),
    /// Calendar fields do not form a valid date/time.
    InvalidCalendar(&'static str),
    /// Resulting instant is outside the representable range.
    OutOfRange,
    /// Clock configuration rejected by validation.
    InvalidConfig(&'static str),
}

impl Display for TimeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(msg) => write!(f, "time parse error: {msg}"),
            Self::InvalidCalendar(msg) => write!(f, "invalid calendar date: {msg}"),
            Self::OutOfRange => write!(f, "instant outside representable range"),
            Self::InvalidConfig(msg) => write!(f, "invalid clock config: {msg}"),
        }
    }
}

impl Error for TimeError {}

impl From<chrono::ParseError> for TimeError {
    fn from(e: chrono::ParseError) -> Self {
        Self::Parse(e.to_string())
    }
}
