//! Local sidereal time from the Sun's mean longitude.
//!
//! Low-precision form: the Greenwich sidereal time at 0h UT is the Sun's
//! mean longitude plus 180°, so
//!
//!   LST = Ls/15 + 12 + UT + longitude/15   (hours, mod 24)
//!
//! with Ls in degrees and longitude east-positive in degrees.
//!
//! Source: P. Schlyter, "How to compute planetary positions", §5b.

use std::f64::consts::TAU;

/// Reduce hours to `[0, 24)`.
///
/// `rem_euclid` rounds tiny negative inputs up to exactly 24.0.
fn wrap_hours(hours: f64) -> f64 {
    let h = hours.rem_euclid(24.0);
    if h >= 24.0 { 0.0 } else { h }
}

/// Greenwich sidereal time at 0h UT, in hours `[0, 24)`.
pub fn gmst0_hours(sun_mean_longitude_rad: f64) -> f64 {
    wrap_hours(sun_mean_longitude_rad.to_degrees() / 15.0 + 12.0)
}

/// Local sidereal time in hours `[0, 24)`.
///
/// `hour_utc` is the UT time of day in hours; `longitude_deg` is east-positive.
pub fn local_sidereal_time_hours(
    sun_mean_longitude_rad: f64,
    hour_utc: f64,
    longitude_deg: f64,
) -> f64 {
    wrap_hours(gmst0_hours(sun_mean_longitude_rad) + hour_utc + longitude_deg / 15.0)
}

/// Sidereal hours to an angle in radians `[0, 2π)`.
pub fn hours_to_rad(hours: f64) -> f64 {
    (hours * TAU / 24.0).rem_euclid(TAU)
}
