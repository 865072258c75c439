//! Topocentric parallax correction for the Moon.
//!
//! The Moon is close enough (about 60 Earth radii) that its direction seen
//! from the surface differs from the geocentric one by up to about a
//! degree. With horizontal parallax `mpar = asin(1/r)`, geocentric latitude
//! `gclat`, Earth radius factor `rho`, hour angle `HA` and auxiliary
//! `g = atan(tan(gclat)/cos(HA))`:
//!
//!   ra'  = ra  − mpar·rho·cos(gclat)·sin(HA)/cos(dec)
//!   dec' = dec − mpar·rho·sin(gclat)·sin(g − dec)/sin(g)
//!
//! Source: P. Schlyter, "How to compute planetary positions", §13.

use std::f64::consts::TAU;

use vobs_frames::EquatorialPosition;

use crate::error::EphemerisError;

/// Below this magnitude a divisor counts as zero.
pub const SINGULARITY_EPS: f64 = 1.0e-9;

/// Geocentric latitude and distance-from-centre factor for a geographic
/// latitude, accounting for Earth's flattening.
pub fn geocentric_latitude(latitude_rad: f64) -> (f64, f64) {
    let two_lat = 2.0 * latitude_rad;
    let gclat = latitude_rad - 0.1924_f64.to_radians() * two_lat.sin();
    let rho = 0.99833 + 0.00167 * two_lat.cos();
    (gclat, rho)
}

/// Shift a geocentric RA/Dec to the observer's position.
///
/// `distance` is in Earth radii, `lst_hours` is local sidereal time.
/// Fails with [`EphemerisError::Singularity`] when the body is inside the
/// Earth, at a celestial pole, or the result is not finite. An observer
/// on the equator (`gclat = 0`, so `sin g = 0`) takes the limiting form
/// `dec' = dec − mpar·rho·sin(−dec)·cos(HA)`.
pub fn topocentric_correction(
    geocentric: &EquatorialPosition,
    distance: f64,
    lst_hours: f64,
    latitude_rad: f64,
) -> Result<EquatorialPosition, EphemerisError> {
    if distance.is_nan() || distance <= 1.0 {
        return singular("distance not above one Earth radius");
    }
    let mpar = (1.0 / distance).asin();
    let (gclat, rho) = geocentric_latitude(latitude_rad);
    let ra = geocentric.right_ascension;
    let dec = geocentric.declination;
    let ha = lst_hours * TAU / 24.0 - ra;

    let cos_dec = dec.cos();
    if cos_dec.abs() < SINGULARITY_EPS {
        return singular("cos(dec) vanishes at the celestial pole");
    }
    let top_ra = ra - mpar * rho * gclat.cos() * ha.sin() / cos_dec;

    let g = (gclat.tan() / ha.cos()).atan();
    let sin_g = g.sin();
    let top_dec = if sin_g.abs() >= SINGULARITY_EPS {
        dec - mpar * rho * gclat.sin() * (g - dec).sin() / sin_g
    } else if gclat.abs() < SINGULARITY_EPS {
        log::debug!("topocentric: observer on the equator, using limiting declination form");
        dec - mpar * rho * (-dec).sin() * ha.cos()
    } else {
        return singular("sin(g) vanishes");
    };

    if !top_ra.is_finite() || !top_dec.is_finite() {
        return singular("non-finite topocentric direction");
    }

    Ok(EquatorialPosition {
        right_ascension: top_ra.rem_euclid(TAU),
        declination: top_dec,
    })
}

fn singular(reason: &'static str) -> Result<EquatorialPosition, EphemerisError> {
    log::warn!("topocentric correction singular: {reason}");
    Err(EphemerisError::Singularity { reason })
}
