//! Error types for sphere geometry.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from projection, arc discretization, or style lookup.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum FrameError {
    /// Sphere or grid configuration rejected by validation.
    InvalidConfig(&'static str),
    /// A direction vector had zero or non-finite length.
    DegenerateDirection,
    /// A catalog record referenced a style code missing from the table.
    UnknownStyle(u8),
}

impl Display for FrameError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidConfig(msg) => write!(f, "invalid sphere config: {msg}"),
            Self::DegenerateDirection => write!(f, "direction vector has no usable length"),
            Self::UnknownStyle(code) => write!(f, "unknown line style code: {code}"),
        }
    }
}

impl Error for FrameError {}
