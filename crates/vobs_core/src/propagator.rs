//! Orbital elements → ecliptic position.
//!
//! One routine for every body. With E from [`solve_kepler`]:
//!
//!   xv = a(cos E − e),  yv = a√(1−e²)·sin E
//!   v = atan2(yv, xv),  r = √(xv² + yv²)
//!
//! then rotated by node, inclination and argument of perihelion into the
//! ecliptic frame. The result is heliocentric for planets and geocentric
//! for the Moon.

use vobs_frames::EclipticPosition;

use crate::elements::OrbitalElements;
use crate::error::EphemerisError;
use crate::kepler::{KeplerSolution, solve_kepler};

/// Position in the orbital plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitalPlanePosition {
    pub true_anomaly: f64,
    pub distance: f64,
}

/// Propagator output.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Propagation {
    pub position: EclipticPosition,
    pub kepler: KeplerSolution,
}

/// True anomaly and distance from the eccentric anomaly.
pub fn orbital_plane(eccentric_anomaly: f64, a: f64, e: f64) -> OrbitalPlanePosition {
    let (sin_e, cos_e) = eccentric_anomaly.sin_cos();
    let xv = a * (cos_e - e);
    let yv = a * (1.0 - e * e).sqrt() * sin_e;
    OrbitalPlanePosition {
        true_anomaly: yv.atan2(xv),
        distance: xv.hypot(yv),
    }
}

/// Ecliptic longitude, latitude and radius for one set of elements.
pub fn propagate(elements: &OrbitalElements) -> Result<Propagation, EphemerisError> {
    let OrbitalElements {
        node,
        inclination,
        perihelion,
        semi_major_axis,
        eccentricity,
        mean_anomaly,
    } = *elements;

    for (value, name) in [
        (node, "node"),
        (inclination, "inclination"),
        (perihelion, "argument of perihelion"),
        (semi_major_axis, "semi-major axis"),
    ] {
        if !value.is_finite() {
            return Err(EphemerisError::NonFiniteElement(name));
        }
    }

    let kepler = solve_kepler(mean_anomaly, eccentricity)?;
    let plane = orbital_plane(kepler.eccentric_anomaly, semi_major_axis, eccentricity);
    let r = plane.distance;

    let (sin_n, cos_n) = node.sin_cos();
    let (sin_i, cos_i) = inclination.sin_cos();
    let (sin_vw, cos_vw) = (plane.true_anomaly + perihelion).sin_cos();

    let xh = r * (cos_n * cos_vw - sin_n * sin_vw * cos_i);
    let yh = r * (sin_n * cos_vw + cos_n * sin_vw * cos_i);
    let zh = r * sin_vw * sin_i;

    Ok(Propagation {
        position: EclipticPosition {
            longitude: yh.atan2(xh),
            latitude: zh.atan2(xh.hypot(yh)),
            radius: r,
        },
        kepler,
    })
}
