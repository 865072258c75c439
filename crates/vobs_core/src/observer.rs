//! Geographic observer location.

use crate::error::EphemerisError;

/// Default site latitude, degrees.
pub const DEFAULT_LATITUDE_DEG: f64 = -22.356_94;
/// Default site longitude, degrees east.
pub const DEFAULT_LONGITUDE_DEG: f64 = -47.384_17;

/// Observer on the Earth's surface. Constant for a session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Observer {
    /// Geographic latitude, degrees, north positive.
    pub latitude_deg: f64,
    /// Longitude, degrees, east positive.
    pub longitude_deg: f64,
}

impl Default for Observer {
    fn default() -> Self {
        Self {
            latitude_deg: DEFAULT_LATITUDE_DEG,
            longitude_deg: DEFAULT_LONGITUDE_DEG,
        }
    }
}

impl Observer {
    pub fn new(latitude_deg: f64, longitude_deg: f64) -> Result<Self, EphemerisError> {
        let observer = Self {
            latitude_deg,
            longitude_deg,
        };
        observer.validate()?;
        Ok(observer)
    }

    pub fn validate(&self) -> Result<(), EphemerisError> {
        if !self.latitude_deg.is_finite() || self.latitude_deg.abs() > 90.0 {
            return Err(EphemerisError::InvalidConfig(
                "latitude must be within [-90, 90] degrees",
            ));
        }
        if !self.longitude_deg.is_finite() || self.longitude_deg.abs() > 180.0 {
            return Err(EphemerisError::InvalidConfig(
                "longitude must be within [-180, 180] degrees",
            ));
        }
        Ok(())
    }

    pub fn latitude_rad(&self) -> f64 {
        self.latitude_deg.to_radians()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_site() {
        let o = Observer::default();
        assert!(o.validate().is_ok());
        assert!((o.latitude_rad() + 0.390_202_2).abs() < 1e-7);
    }

    #[test]
    fn rejects_out_of_range() {
        assert!(Observer::new(91.0, 0.0).is_err());
        assert!(Observer::new(0.0, -180.5).is_err());
        assert!(Observer::new(f64::NAN, 0.0).is_err());
        assert!(Observer::new(-90.0, 180.0).is_ok());
    }
}
