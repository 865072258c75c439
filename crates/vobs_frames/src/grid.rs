//! Equatorial coordinate grid: meridians of constant right ascension and
//! parallels of constant declination, as closed polylines on the sphere.

use std::f64::consts::{PI, TAU};

use crate::config::SphereConfig;
use crate::coords::EquatorialPosition;
use crate::error::FrameError;
use crate::spherical::unit_vector;
use crate::vector::{add, scale};

/// How many grid lines to draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridConfig {
    /// Meridians, evenly spaced over 180° of right ascension. Each is a
    /// full great circle, so this covers all 24 hours.
    pub ra_divisions: u32,
    /// The sphere is cut into this many declination bands; the
    /// `dec_divisions − 1` interior boundaries are drawn.
    pub dec_divisions: u32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            ra_divisions: 11,
            dec_divisions: 10,
        }
    }
}

impl GridConfig {
    pub fn validate(&self) -> Result<(), FrameError> {
        if self.ra_divisions == 0 {
            return Err(FrameError::InvalidConfig("ra_divisions must be at least 1"));
        }
        if self.dec_divisions < 2 {
            return Err(FrameError::InvalidConfig("dec_divisions must be at least 2"));
        }
        Ok(())
    }
}

/// Which family a grid line belongs to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GridLineKind {
    /// Great circle through both poles at this right ascension (and its
    /// opposite, RA + 12h), radians.
    Meridian { right_ascension: f64 },
    /// Small circle at this declination, radians.
    Parallel { declination: f64 },
}

/// A closed polyline; the last point connects back to the first.
#[derive(Debug, Clone, PartialEq)]
pub struct GridLine {
    pub kind: GridLineKind,
    pub points: Vec<[f64; 3]>,
}

/// All grid lines for one sphere.
#[derive(Debug, Clone, PartialEq)]
pub struct EquatorialGrid {
    pub meridians: Vec<GridLine>,
    pub parallels: Vec<GridLine>,
}

impl EquatorialGrid {
    pub fn build(sphere: &SphereConfig, grid: &GridConfig) -> Result<Self, FrameError> {
        sphere.validate()?;
        grid.validate()?;

        let segments = ((360.0 / sphere.arc_resolution_deg).round() as usize).max(3);
        let radius = sphere.radius;

        let meridians = (0..grid.ra_divisions)
            .map(|k| {
                let ra = k as f64 * PI / grid.ra_divisions as f64;
                let equator = unit_vector(&EquatorialPosition::new(ra, 0.0));
                let pole = [0.0, 0.0, 1.0];
                let points = (0..segments)
                    .map(|j| {
                        let (s, c) = (j as f64 * TAU / segments as f64).sin_cos();
                        scale(&add(&scale(&equator, c), &scale(&pole, s)), radius)
                    })
                    .collect();
                GridLine {
                    kind: GridLineKind::Meridian {
                        right_ascension: ra,
                    },
                    points,
                }
            })
            .collect();

        let parallels = (1..grid.dec_divisions)
            .map(|k| {
                let declination = PI / 2.0 - k as f64 * PI / grid.dec_divisions as f64;
                let points = (0..segments)
                    .map(|j| {
                        let ra = j as f64 * TAU / segments as f64;
                        scale(&unit_vector(&EquatorialPosition::new(ra, declination)), radius)
                    })
                    .collect();
                GridLine {
                    kind: GridLineKind::Parallel { declination },
                    points,
                }
            })
            .collect();

        Ok(Self {
            meridians,
            parallels,
        })
    }

    /// Every line, meridians first.
    pub fn lines(&self) -> impl Iterator<Item = &GridLine> {
        self.meridians.iter().chain(self.parallels.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vector::norm;

    #[test]
    fn default_grid_counts() {
        let grid = EquatorialGrid::build(&SphereConfig::default(), &GridConfig::default()).unwrap();
        assert_eq!(grid.meridians.len(), 11);
        assert_eq!(grid.parallels.len(), 9);
        for line in grid.lines() {
            assert_eq!(line.points.len(), 72);
        }
    }

    #[test]
    fn points_lie_on_sphere() {
        let sphere = SphereConfig::new(250.0, 10.0).unwrap();
        let grid = EquatorialGrid::build(&sphere, &GridConfig::default()).unwrap();
        for line in grid.lines() {
            for p in &line.points {
                assert!((norm(p) - 250.0).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn parallels_hold_declination() {
        let grid = EquatorialGrid::build(&SphereConfig::default(), &GridConfig::default()).unwrap();
        for line in &grid.parallels {
            let GridLineKind::Parallel { declination } = line.kind else {
                panic!("expected parallel");
            };
            for p in &line.points {
                assert!((p[2] / 1000.0 - declination.sin()).abs() < 1e-12);
            }
        }
        // The equator is the middle parallel for an even division count.
        let GridLineKind::Parallel { declination } = grid.parallels[4].kind else {
            panic!("expected parallel");
        };
        assert!(declination.abs() < 1e-12);
    }

    #[test]
    fn rejects_too_few_divisions() {
        let bad = GridConfig {
            ra_divisions: 0,
            dec_divisions: 10,
        };
        assert!(EquatorialGrid::build(&SphereConfig::default(), &bad).is_err());
        let bad = GridConfig {
            ra_divisions: 4,
            dec_divisions: 1,
        };
        assert!(EquatorialGrid::build(&SphereConfig::default(), &bad).is_err());
    }
}
