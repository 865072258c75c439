//! Position types in the ecliptic, equatorial and horizontal frames.
//!
//! All angles are radians. Conversions to degrees or hours are provided
//! for display only.

use std::f64::consts::TAU;

use crate::spherical::{SphericalCoords, spherical_to_cartesian};

/// Ecliptic longitude, latitude and radius.
///
/// The radius unit follows the body: AU for planets, Earth radii for the
/// Moon.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EclipticPosition {
    pub longitude: f64,
    pub latitude: f64,
    pub radius: f64,
}

impl EclipticPosition {
    pub fn new(longitude: f64, latitude: f64, radius: f64) -> Self {
        Self {
            longitude,
            latitude,
            radius,
        }
    }

    /// Cartesian ecliptic coordinates `[x, y, z]` in the radius unit.
    pub fn to_cartesian(&self) -> [f64; 3] {
        spherical_to_cartesian(&SphericalCoords {
            lon: self.longitude,
            lat: self.latitude,
            radius: self.radius,
        })
    }
}

/// Geocentric (or topocentric) right ascension and declination.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EquatorialPosition {
    /// Right ascension, radians.
    pub right_ascension: f64,
    /// Declination, radians, `[-π/2, π/2]`.
    pub declination: f64,
}

impl EquatorialPosition {
    pub fn new(right_ascension: f64, declination: f64) -> Self {
        Self {
            right_ascension,
            declination,
        }
    }

    /// Build from right ascension in hours and declination in degrees.
    pub fn from_hours_deg(ra_hours: f64, dec_deg: f64) -> Self {
        Self {
            right_ascension: ra_hours * TAU / 24.0,
            declination: dec_deg.to_radians(),
        }
    }

    /// Copy with right ascension wrapped into `[0, 2π)`.
    pub fn normalized(self) -> Self {
        Self {
            right_ascension: self.right_ascension.rem_euclid(TAU),
            declination: self.declination,
        }
    }

    /// Right ascension in hours `[0, 24)`.
    pub fn ra_hours(&self) -> f64 {
        self.right_ascension.rem_euclid(TAU) * 24.0 / TAU
    }

    /// Declination in degrees.
    pub fn dec_deg(&self) -> f64 {
        self.declination.to_degrees()
    }

    pub fn is_finite(&self) -> bool {
        self.right_ascension.is_finite() && self.declination.is_finite()
    }
}

/// Altitude above the horizon and azimuth (north = 0, east = π/2).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct HorizontalPosition {
    pub altitude: f64,
    pub azimuth: f64,
}

impl HorizontalPosition {
    pub fn is_above_horizon(&self) -> bool {
        self.altitude > 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn ecliptic_cartesian_on_axis() {
        let p = EclipticPosition::new(0.0, 0.0, 2.0).to_cartesian();
        assert_eq!(p, [2.0, 0.0, 0.0]);
    }

    #[test]
    fn ecliptic_cartesian_pole() {
        let p = EclipticPosition::new(1.0, PI / 2.0, 1.0).to_cartesian();
        assert!(p[0].abs() < 1e-15 && p[1].abs() < 1e-15);
        assert!((p[2] - 1.0).abs() < 1e-15);
    }

    #[test]
    fn hours_degrees_roundtrip() {
        let eq = EquatorialPosition::from_hours_deg(18.5, -23.25);
        assert!((eq.ra_hours() - 18.5).abs() < 1e-12);
        assert!((eq.dec_deg() + 23.25).abs() < 1e-12);
    }

    #[test]
    fn normalized_wraps_negative_ra() {
        let eq = EquatorialPosition::new(-PI / 2.0, 0.1).normalized();
        assert!((eq.right_ascension - 1.5 * PI).abs() < 1e-15);
        assert_eq!(eq.declination, 0.1);
    }
}
