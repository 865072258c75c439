//! Ecliptic → equatorial rotation and the geocentric frame transform.
//!
//! The equatorial frame is the ecliptic frame rotated about +x (the
//! equinox direction) by the obliquity ε:
//!
//!   x_eq = x_ecl
//!   y_eq = y_ecl·cos ε − z_ecl·sin ε
//!   z_eq = y_ecl·sin ε + z_ecl·cos ε

use crate::coords::{EclipticPosition, EquatorialPosition};
use crate::spherical::cartesian_to_spherical;

/// Rotate an ecliptic vector into the equatorial frame.
pub fn ecliptic_to_equatorial(v: &[f64; 3], obliquity: f64) -> [f64; 3] {
    let (sin_e, cos_e) = obliquity.sin_cos();
    [
        v[0],
        v[1] * cos_e - v[2] * sin_e,
        v[1] * sin_e + v[2] * cos_e,
    ]
}

/// Geocentric right ascension and declination of an ecliptic position.
///
/// `offset` is the Sun's geocentric ecliptic `(xs, ys)`, added to move a
/// heliocentric position to Earth's centre; pass `[0.0, 0.0]` for a
/// position that is already geocentric (the Moon). Right ascension comes
/// back in `[0, 2π)`.
pub fn geocentric_equatorial(
    position: &EclipticPosition,
    offset: [f64; 2],
    obliquity: f64,
) -> EquatorialPosition {
    let [xh, yh, zh] = position.to_cartesian();
    let geocentric = [xh + offset[0], yh + offset[1], zh];
    let eq = cartesian_to_spherical(&ecliptic_to_equatorial(&geocentric, obliquity));
    EquatorialPosition {
        right_ascension: eq.lon,
        declination: eq.lat,
    }
}
