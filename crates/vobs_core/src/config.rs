//! Engine configuration.

use vobs_frames::SphereConfig;

use crate::error::EphemerisError;
use crate::observer::Observer;

/// Ephemeris configuration used at startup time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EphemerisConfig {
    pub observer: Observer,
    pub sphere: SphereConfig,
    /// Add the perturbation series for the Moon, Jupiter, Saturn and Uranus.
    pub apply_perturbations: bool,
    /// Shift the Moon from geocentric to topocentric.
    pub apply_topocentric: bool,
}

impl Default for EphemerisConfig {
    fn default() -> Self {
        Self {
            observer: Observer::default(),
            sphere: SphereConfig::default(),
            apply_perturbations: true,
            apply_topocentric: true,
        }
    }
}

impl EphemerisConfig {
    pub fn with_observer(observer: Observer) -> Self {
        Self {
            observer,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), EphemerisError> {
        self.observer.validate()?;
        self.sphere.validate()?;
        Ok(())
    }
}
