//! Equatorial → horizontal (altitude/azimuth) conversion for an observer.
//!
//! With hour angle H = LST − α and latitude φ:
//!
//!   sin h = sin δ sin φ + cos δ cos φ cos H
//!   A     = atan2(−cos δ sin H, sin δ cos φ − cos δ sin φ cos H)
//!
//! Azimuth is measured from north through east, in `[0, 2π)`.

use std::f64::consts::TAU;

use crate::coords::{EquatorialPosition, HorizontalPosition};

/// Hour angle `LST − α`, wrapped to `(−π, π]`.
pub fn hour_angle(lst_rad: f64, right_ascension: f64) -> f64 {
    let h = (lst_rad - right_ascension).rem_euclid(TAU);
    if h > TAU / 2.0 { h - TAU } else { h }
}

/// Altitude and azimuth of `eq` for an observer at `latitude_rad` when the
/// local sidereal time is `lst_rad`.
pub fn equatorial_to_horizontal(
    eq: &EquatorialPosition,
    lst_rad: f64,
    latitude_rad: f64,
) -> HorizontalPosition {
    let h = hour_angle(lst_rad, eq.right_ascension);
    let (sin_h, cos_h) = h.sin_cos();
    let (sin_d, cos_d) = eq.declination.sin_cos();
    let (sin_p, cos_p) = latitude_rad.sin_cos();

    let sin_alt = (sin_d * sin_p + cos_d * cos_p * cos_h).clamp(-1.0, 1.0);
    let azimuth = (-cos_d * sin_h).atan2(sin_d * cos_p - cos_d * sin_p * cos_h);

    HorizontalPosition {
        altitude: sin_alt.asin(),
        azimuth: azimuth.rem_euclid(TAU),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, PI};

    const EPS: f64 = 1e-12;

    #[test]
    fn zenith_when_dec_equals_latitude_on_meridian() {
        let lat = (-22.35694_f64).to_radians();
        let eq = EquatorialPosition::new(1.0, lat);
        let hz = equatorial_to_horizontal(&eq, 1.0, lat);
        assert!((hz.altitude - FRAC_PI_2).abs() < 1e-7);
    }

    #[test]
    fn celestial_pole_at_latitude_altitude() {
        let lat = 40_f64.to_radians();
        let pole = EquatorialPosition::new(0.3, FRAC_PI_2);
        let hz = equatorial_to_horizontal(&pole, 2.0, lat);
        assert!((hz.altitude - lat).abs() < EPS);
        assert!(hz.azimuth.abs() < 1e-9 || (hz.azimuth - TAU).abs() < 1e-9);
    }

    #[test]
    fn transit_south_of_zenith_is_due_south() {
        let lat = 50_f64.to_radians();
        let eq = EquatorialPosition::new(3.0, 0.0);
        let hz = equatorial_to_horizontal(&eq, 3.0, lat);
        assert!((hz.azimuth - PI).abs() < EPS);
        assert!((hz.altitude - 40_f64.to_radians()).abs() < EPS);
    }

    #[test]
    fn western_hour_angle_gives_western_azimuth() {
        let eq = EquatorialPosition::new(0.0, 0.0);
        let hz = equatorial_to_horizontal(&eq, FRAC_PI_2, 0.0);
        assert!((hz.azimuth - 1.5 * PI).abs() < EPS);
        assert!(hz.altitude.abs() < EPS);
    }

    #[test]
    fn hour_angle_wraps() {
        assert!((hour_angle(0.1, 6.2) - (0.1 - 6.2 + TAU)).abs() < EPS);
        assert!((hour_angle(6.2, 0.1) - (6.1 - TAU)).abs() < EPS);
    }
}
