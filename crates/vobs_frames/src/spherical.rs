//! Cartesian ↔ spherical conversion and the celestial-sphere projector.
//!
//! Two conventions live here:
//! - `cartesian_to_spherical` / `spherical_to_cartesian` use the usual
//!   astronomical axes (longitude from +x toward +y, latitude toward +z);
//!   the ephemeris uses them for ecliptic and equatorial reductions.
//! - `unit_vector` / `equatorial_from_unit` define the scene layout: right
//!   ascension is measured from +y toward +x and declination toward +z.
//!   Every rendered direction (bodies, stars, constellation endpoints, grid
//!   lines) goes through this single pair so they stay consistent.

use std::f64::consts::{FRAC_PI_2, TAU};

use crate::config::SphereConfig;
use crate::coords::EquatorialPosition;
use crate::error::FrameError;
use crate::vector::{normalize, scale};

/// Spherical coordinates: longitude, latitude, radius.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SphericalCoords {
    /// Longitude in radians, range [0, 2π).
    /// Measured in the x-y plane from +x toward +y.
    pub lon: f64,
    /// Latitude in radians, range [-π/2, π/2].
    pub lat: f64,
    /// Distance from origin.
    pub radius: f64,
}

/// Convert Cartesian `[x, y, z]` to spherical coordinates.
///
/// Latitude is `atan2(z, √(x²+y²))`. The zero vector maps to all zeros.
pub fn cartesian_to_spherical(xyz: &[f64; 3]) -> SphericalCoords {
    let [x, y, z] = *xyz;
    let rxy = (x * x + y * y).sqrt();
    let r = (rxy * rxy + z * z).sqrt();

    if r == 0.0 {
        return SphericalCoords {
            lon: 0.0,
            lat: 0.0,
            radius: 0.0,
        };
    }

    SphericalCoords {
        lon: y.atan2(x).rem_euclid(TAU),
        lat: z.atan2(rxy),
        radius: r,
    }
}

/// Convert spherical coordinates back to Cartesian `[x, y, z]`.
pub fn spherical_to_cartesian(s: &SphericalCoords) -> [f64; 3] {
    let cos_lat = s.lat.cos();
    [
        s.radius * cos_lat * s.lon.cos(),
        s.radius * cos_lat * s.lon.sin(),
        s.radius * s.lat.sin(),
    ]
}

/// Scene unit vector for an equatorial direction.
///
/// `x = sin(π/2−δ)·sin α`, `y = sin(π/2−δ)·cos α`, `z = cos(π/2−δ)`.
pub fn unit_vector(eq: &EquatorialPosition) -> [f64; 3] {
    let polar = FRAC_PI_2 - eq.declination;
    let (sin_p, cos_p) = polar.sin_cos();
    let (sin_ra, cos_ra) = eq.right_ascension.sin_cos();
    [sin_p * sin_ra, sin_p * cos_ra, cos_p]
}

/// Inverse of [`unit_vector`]. Accepts any non-zero length.
///
/// At the poles right ascension is undefined and comes back as 0.
pub fn equatorial_from_unit(v: &[f64; 3]) -> Result<EquatorialPosition, FrameError> {
    let u = normalize(v).ok_or(FrameError::DegenerateDirection)?;
    let rxy = (u[0] * u[0] + u[1] * u[1]).sqrt();
    Ok(EquatorialPosition {
        right_ascension: u[0].atan2(u[1]).rem_euclid(TAU),
        declination: u[2].atan2(rxy),
    })
}

/// Maps equatorial directions onto the scene sphere.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SphereProjector {
    config: SphereConfig,
}

impl SphereProjector {
    pub fn new(config: SphereConfig) -> Result<Self, FrameError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &SphereConfig {
        &self.config
    }

    pub fn radius(&self) -> f64 {
        self.config.radius
    }

    /// Renderable point on the sphere surface.
    pub fn project(&self, eq: &EquatorialPosition) -> [f64; 3] {
        scale(&unit_vector(eq), self.config.radius)
    }

    /// Project a batch of catalog directions, preserving order.
    pub fn project_all(&self, positions: &[EquatorialPosition]) -> Vec<[f64; 3]> {
        positions.iter().map(|eq| self.project(eq)).collect()
    }

    /// Recover the direction of a scene point.
    pub fn unproject(&self, point: &[f64; 3]) -> Result<EquatorialPosition, FrameError> {
        equatorial_from_unit(point)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    const EPS: f64 = 1e-12;

    #[test]
    fn along_x_axis() {
        let s = cartesian_to_spherical(&[3.0, 0.0, 0.0]);
        assert!(s.lon.abs() < EPS);
        assert!(s.lat.abs() < EPS);
        assert!((s.radius - 3.0).abs() < EPS);
    }

    #[test]
    fn along_negative_y() {
        let s = cartesian_to_spherical(&[0.0, -1.0, 0.0]);
        assert!((s.lon - 1.5 * PI).abs() < EPS);
    }

    #[test]
    fn along_z_axis() {
        let s = cartesian_to_spherical(&[0.0, 0.0, 2.0]);
        assert!((s.lat - PI / 2.0).abs() < EPS);
    }

    #[test]
    fn zero_vector() {
        let s = cartesian_to_spherical(&[0.0, 0.0, 0.0]);
        assert_eq!(s.radius, 0.0);
    }

    #[test]
    fn cartesian_roundtrip() {
        let xyz = [1.234, -5.678, 3.456];
        let back = spherical_to_cartesian(&cartesian_to_spherical(&xyz));
        for i in 0..3 {
            assert!((xyz[i] - back[i]).abs() < EPS, "axis {i}: {} != {}", xyz[i], back[i]);
        }
    }

    #[test]
    fn unit_vector_reference_directions() {
        let v = unit_vector(&EquatorialPosition::new(0.0, 0.0));
        assert!(v[0].abs() < EPS && (v[1] - 1.0).abs() < EPS && v[2].abs() < EPS);
        let v = unit_vector(&EquatorialPosition::new(PI / 2.0, 0.0));
        assert!((v[0] - 1.0).abs() < EPS && v[1].abs() < EPS);
        let v = unit_vector(&EquatorialPosition::new(1.3, PI / 2.0));
        assert!((v[2] - 1.0).abs() < EPS);
    }

    #[test]
    fn projector_scales_to_radius() {
        let projector = SphereProjector::new(SphereConfig::default()).unwrap();
        let p = projector.project(&EquatorialPosition::new(2.0, -0.4));
        let r = (p[0] * p[0] + p[1] * p[1] + p[2] * p[2]).sqrt();
        assert!((r - 1000.0).abs() < 1e-9);
    }

    #[test]
    fn unproject_zero_is_error() {
        assert_eq!(
            equatorial_from_unit(&[0.0, 0.0, 0.0]),
            Err(FrameError::DegenerateDirection)
        );
    }

    #[test]
    fn pole_has_zero_ra() {
        let eq = equatorial_from_unit(&[0.0, 0.0, 5.0]).unwrap();
        assert_eq!(eq.right_ascension, 0.0);
        assert!((eq.declination - PI / 2.0).abs() < EPS);
    }
}
