//! Low-order analytic ephemeris for the Sun, Moon and planets.
//!
//! This crate provides the [`Ephemeris`] engine, which takes an instant and
//! an observer and produces right ascension, declination, altitude/azimuth
//! and a scene direction for every [`Body`]:
//!
//! - element tables linear in the day number ([`elements`])
//! - Kepler solver and orbital propagator ([`kepler`], [`propagator`])
//! - perturbation series for the Moon, Jupiter, Saturn and Uranus
//! - the Sun model, which supplies the geocentric offset and obliquity
//! - topocentric parallax for the Moon

pub mod body;
pub mod config;
pub mod elements;
pub mod error;
pub mod kepler;
pub mod observer;
pub mod perturbation;
pub mod propagator;
pub mod sun;
pub mod topocentric;

use vobs_frames::{
    EclipticPosition, EquatorialPosition, HorizontalPosition, SphereProjector,
    equatorial_to_horizontal,
};
use vobs_time::{TimeInstant, hours_to_rad, local_sidereal_time_hours};

pub use body::{ALL_BODIES, Body};
pub use config::EphemerisConfig;
pub use elements::{ElementTable, Linear, OrbitalElements};
pub use error::EphemerisError;
pub use kepler::{KeplerSolution, solve_kepler};
pub use observer::Observer;
pub use perturbation::{Correction, correction_for};
pub use propagator::{Propagation, propagate};
pub use sun::SunState;
pub use topocentric::topocentric_correction;

/// Everything computed for one body at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyPosition {
    pub body: Body,
    /// Corrected ecliptic position: heliocentric for planets, geocentric
    /// for the Sun and Moon.
    pub ecliptic: EclipticPosition,
    /// Apparent RA/Dec (topocentric for the Moon when enabled).
    pub equatorial: EquatorialPosition,
    pub horizontal: HorizontalPosition,
    /// Radius-scaled scene point.
    pub direction: [f64; 3],
    /// `false` if the Kepler iteration hit its cap.
    pub converged: bool,
}

/// All bodies at one instant.
#[derive(Debug, Clone, PartialEq)]
pub struct SkySnapshot {
    pub instant: TimeInstant,
    pub day: f64,
    /// Local sidereal time, hours.
    pub lst_hours: f64,
    pub sun: SunState,
    /// One entry per body in [`ALL_BODIES`] order; each fails on its own.
    pub positions: Vec<(Body, Result<BodyPosition, EphemerisError>)>,
}

impl SkySnapshot {
    pub fn get(&self, body: Body) -> Option<&Result<BodyPosition, EphemerisError>> {
        self.positions
            .iter()
            .find(|(b, _)| *b == body)
            .map(|(_, r)| r)
    }

    /// Bodies that computed successfully.
    pub fn resolved(&self) -> impl Iterator<Item = &BodyPosition> {
        self.positions.iter().filter_map(|(_, r)| r.as_ref().ok())
    }
}

/// Ephemeris engine.
///
/// Holds only immutable configuration, so it is [`Send`] + [`Sync`] and
/// every query is a pure function of its inputs.
#[derive(Debug, Clone)]
pub struct Ephemeris {
    config: EphemerisConfig,
    projector: SphereProjector,
}

impl Ephemeris {
    pub fn new(config: EphemerisConfig) -> Result<Self, EphemerisError> {
        config.validate()?;
        let projector = SphereProjector::new(config.sphere)?;
        Ok(Self { config, projector })
    }

    pub fn config(&self) -> &EphemerisConfig {
        &self.config
    }

    pub fn projector(&self) -> &SphereProjector {
        &self.projector
    }

    /// Local sidereal time in hours for the configured observer.
    pub fn local_sidereal_time(&self, instant: &TimeInstant) -> f64 {
        local_sidereal_time_hours(
            sun::mean_longitude(instant.day_number()),
            instant.hour_utc(),
            self.config.observer.longitude_deg,
        )
    }

    /// Position of a single body.
    pub fn position(
        &self,
        body: Body,
        instant: &TimeInstant,
    ) -> Result<BodyPosition, EphemerisError> {
        let day = instant.day_number();
        let sun = SunState::at(day)?;
        self.compute(body, day, self.local_sidereal_time(instant), &sun)
    }

    /// Every body at `instant`. Only a failure of the Sun model, which all
    /// bodies depend on, fails the whole snapshot.
    pub fn snapshot(&self, instant: &TimeInstant) -> Result<SkySnapshot, EphemerisError> {
        let day = instant.day_number();
        let lst_hours = self.local_sidereal_time(instant);
        let sun = SunState::at(day)?;

        let positions: Vec<_> = ALL_BODIES
            .iter()
            .map(|&body| (body, self.compute(body, day, lst_hours, &sun)))
            .collect();

        let failed = positions.iter().filter(|(_, r)| r.is_err()).count();
        log::debug!(
            "snapshot {instant}: day {day:.5}, LST {lst_hours:.4} h, {failed} of {} bodies failed",
            positions.len()
        );

        Ok(SkySnapshot {
            instant: *instant,
            day,
            lst_hours,
            sun,
            positions,
        })
    }

    fn compute(
        &self,
        body: Body,
        day: f64,
        lst_hours: f64,
        sun: &SunState,
    ) -> Result<BodyPosition, EphemerisError> {
        let (ecliptic, equatorial, converged) = if body == Body::Sun {
            (sun.ecliptic(), sun.equatorial(), true)
        } else {
            let propagation = propagate(&body.elements().at(day))?;
            let mut ecliptic = propagation.position;
            if self.config.apply_perturbations && body.is_perturbed() {
                ecliptic = correction_for(body, day, sun.mean_anomaly, sun.mean_longitude())
                    .apply(&ecliptic);
            }

            let frame = if body.is_geocentric() {
                sun.with_zero_offset()
            } else {
                *sun
            };
            let mut equatorial = frame.to_equatorial(&ecliptic);
            if self.config.apply_topocentric && body.needs_topocentric() {
                equatorial = topocentric_correction(
                    &equatorial,
                    ecliptic.radius,
                    lst_hours,
                    self.config.observer.latitude_rad(),
                )?;
            }
            (ecliptic, equatorial, propagation.kepler.converged)
        };

        let horizontal = equatorial_to_horizontal(
            &equatorial,
            hours_to_rad(lst_hours),
            self.config.observer.latitude_rad(),
        );

        Ok(BodyPosition {
            body,
            ecliptic,
            equatorial,
            horizontal,
            direction: self.projector.project(&equatorial),
            converged,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine() -> Ephemeris {
        Ephemeris::new(EphemerisConfig::default()).unwrap()
    }

    #[test]
    fn engine_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Ephemeris>();
    }

    #[test]
    fn rejects_bad_observer() {
        let config = EphemerisConfig::with_observer(Observer {
            latitude_deg: 95.0,
            longitude_deg: 0.0,
        });
        assert!(matches!(
            Ephemeris::new(config),
            Err(EphemerisError::InvalidConfig(_))
        ));
    }

    #[test]
    fn snapshot_covers_every_body() {
        let t = TimeInstant::from_calendar(2023, 9, 23, 6, 0, 0.0).unwrap();
        let snap = engine().snapshot(&t).unwrap();
        assert_eq!(snap.positions.len(), ALL_BODIES.len());
        assert_eq!(snap.resolved().count(), ALL_BODIES.len());
        for (body, result) in &snap.positions {
            let pos = result.as_ref().unwrap();
            assert_eq!(pos.body, *body);
            assert!(pos.converged);
        }
    }

    #[test]
    fn sun_position_matches_sun_state() {
        let t = TimeInstant::from_calendar(2001, 3, 4, 12, 0, 0.0).unwrap();
        let e = engine();
        let pos = e.position(Body::Sun, &t).unwrap();
        let sun = SunState::at(t.day_number()).unwrap();
        assert_eq!(pos.equatorial, sun.equatorial());
    }

    #[test]
    fn direction_is_on_sphere() {
        let t = TimeInstant::from_calendar(2010, 1, 1, 0, 0, 0.0).unwrap();
        let snap = engine().snapshot(&t).unwrap();
        for pos in snap.resolved() {
            let [x, y, z] = pos.direction;
            let r = (x * x + y * y + z * z).sqrt();
            assert!((r - 1000.0).abs() < 1e-9, "{}: r = {r}", pos.body);
        }
    }
}
