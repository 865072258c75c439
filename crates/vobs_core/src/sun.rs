//! Sun model.
//!
//! Earth's orbit seen from Earth: the same element evaluation as a planet
//! with `N = i = 0`, giving the Sun's geocentric ecliptic longitude
//! `v + w` and distance `r`. Its rectangular ecliptic coordinates
//! `(xs, ys)` move heliocentric planet positions to Earth's centre.

use vobs_frames::{EclipticPosition, EquatorialPosition, geocentric_equatorial};

use crate::elements::{OBLIQUITY, SUN};
use crate::error::EphemerisError;
use crate::kepler::solve_kepler;
use crate::propagator::orbital_plane;

/// Sun mean longitude `M + w` at `day`, radians (unreduced).
///
/// Needs no Kepler solve, so sidereal time can be computed without a
/// full [`SunState`].
pub fn mean_longitude(day: f64) -> f64 {
    SUN.mean_anomaly.at(day) + SUN.perihelion.at(day)
}

/// Sun quantities for one day number. Immutable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SunState {
    /// Geocentric ecliptic x of the Sun, AU.
    pub xs: f64,
    /// Geocentric ecliptic y of the Sun, AU.
    pub ys: f64,
    /// Obliquity of the ecliptic, radians.
    pub obliquity: f64,
    /// Mean anomaly M, radians.
    pub mean_anomaly: f64,
    /// Argument of perihelion w, radians.
    pub perihelion: f64,
    /// True longitude `v + w`, radians.
    pub longitude: f64,
    /// Earth–Sun distance, AU.
    pub distance: f64,
}

impl SunState {
    pub fn at(day: f64) -> Result<Self, EphemerisError> {
        let el = SUN.at(day);
        let kepler = solve_kepler(el.mean_anomaly, el.eccentricity)?;
        let plane = orbital_plane(kepler.eccentric_anomaly, el.semi_major_axis, el.eccentricity);
        let longitude = plane.true_anomaly + el.perihelion;
        let (sin_l, cos_l) = longitude.sin_cos();

        Ok(Self {
            xs: plane.distance * cos_l,
            ys: plane.distance * sin_l,
            obliquity: OBLIQUITY.at(day),
            mean_anomaly: el.mean_anomaly,
            perihelion: el.perihelion,
            longitude,
            distance: plane.distance,
        })
    }

    /// Copy with `xs = ys = 0`, for bodies whose positions are already
    /// geocentric (the Moon).
    pub fn with_zero_offset(self) -> Self {
        Self {
            xs: 0.0,
            ys: 0.0,
            ..self
        }
    }

    pub fn offset(&self) -> [f64; 2] {
        [self.xs, self.ys]
    }

    /// `M + w`, radians.
    pub fn mean_longitude(&self) -> f64 {
        self.mean_anomaly + self.perihelion
    }

    /// Geocentric ecliptic position of the Sun.
    pub fn ecliptic(&self) -> EclipticPosition {
        EclipticPosition::new(self.longitude, 0.0, self.distance)
    }

    /// The Sun's right ascension and declination: the frame transform of
    /// the origin with this state's offset.
    pub fn equatorial(&self) -> EquatorialPosition {
        geocentric_equatorial(&EclipticPosition::default(), self.offset(), self.obliquity)
    }

    /// Transform an ecliptic position to RA/Dec with this state's offset.
    pub fn to_equatorial(&self, position: &EclipticPosition) -> EquatorialPosition {
        geocentric_equatorial(position, self.offset(), self.obliquity)
    }
}
