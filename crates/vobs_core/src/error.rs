//! Error types for the ephemeris.

use std::error::Error;
use std::fmt::{Display, Formatter};

use vobs_frames::FrameError;
use vobs_time::TimeError;

/// Errors from element propagation, corrections, or the engine.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum EphemerisError {
    /// Engine or observer configuration rejected by validation.
    InvalidConfig(&'static str),
    /// Eccentricity outside `[0, 1)` or not finite. The element tables
    /// never produce this; seeing it means a table is wrong.
    InvalidEccentricity { eccentricity: f64 },
    /// An orbital element or anomaly evaluated to NaN or infinity.
    NonFiniteElement(&'static str),
    /// The topocentric correction hit a division by a vanishing quantity
    /// or produced a non-finite direction.
    Singularity { reason: &'static str },
    Time(TimeError),
    Frame(FrameError),
}

impl Display for EphemerisError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidConfig(msg) => write!(f, "invalid config: {msg}"),
            Self::InvalidEccentricity { eccentricity } => {
                write!(f, "eccentricity {eccentricity} outside [0, 1)")
            }
            Self::NonFiniteElement(name) => write!(f, "non-finite orbital element: {name}"),
            Self::Singularity { reason } => write!(f, "numerical singularity: {reason}"),
            Self::Time(e) => write!(f, "time error: {e}"),
            Self::Frame(e) => write!(f, "frame error: {e}"),
        }
    }
}

impl Error for EphemerisError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Time(e) => Some(e),
            Self::Frame(e) => Some(e),
            _ => None,
        }
    }
}

impl From<TimeError> for EphemerisError {
    fn from(e: TimeError) -> Self {
        Self::Time(e)
    }
}

impl From<FrameError> for EphemerisError {
    fn from(e: FrameError) -> Self {
        Self::Frame(e)
    }
}
