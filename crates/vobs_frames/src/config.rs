//! Celestial-sphere configuration shared by the projector and the arc
//! discretizer.

use crate::error::FrameError;

/// Default sphere radius in scene units.
pub const DEFAULT_RADIUS: f64 = 1000.0;

/// Default angular step for arc discretization, degrees.
pub const DEFAULT_ARC_RESOLUTION_DEG: f64 = 5.0;

/// Scene sphere parameters. Fixed after construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SphereConfig {
    /// Radius every projected direction is scaled to.
    pub radius: f64,
    /// Largest angle between consecutive polyline points, degrees.
    pub arc_resolution_deg: f64,
}

impl Default for SphereConfig {
    fn default() -> Self {
        Self {
            radius: DEFAULT_RADIUS,
            arc_resolution_deg: DEFAULT_ARC_RESOLUTION_DEG,
        }
    }
}

impl SphereConfig {
    pub fn new(radius: f64, arc_resolution_deg: f64) -> Result<Self, FrameError> {
        let config = Self {
            radius,
            arc_resolution_deg,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), FrameError> {
        if !self.radius.is_finite() || self.radius <= 0.0 {
            return Err(FrameError::InvalidConfig("radius must be finite and positive"));
        }
        if !self.arc_resolution_deg.is_finite()
            || self.arc_resolution_deg <= 0.0
            || self.arc_resolution_deg > 180.0
        {
            return Err(FrameError::InvalidConfig(
                "arc_resolution_deg must be in (0, 180]",
            ));
        }
        Ok(())
    }
}
