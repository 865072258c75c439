//! Great-circle arc discretization.
//!
//! A catalog line segment joins two directions on the sphere. It is drawn
//! as a polyline whose consecutive points are at most about one angular
//! resolution step apart:
//!
//!   n = max(1, round(θ / resolution)) + 1
//!
//! points at `t = k/(n−1)`, `k = 0..n−1`, interpolated along the great
//! circle. The endpoints are emitted exactly as given (scaled to the
//! sphere radius).

use std::f64::consts::FRAC_PI_2;

use crate::config::SphereConfig;
use crate::coords::EquatorialPosition;
use crate::error::FrameError;
use crate::spherical::unit_vector;
use crate::style::{ArcSegment, CatalogPoint, StyleTable, StyledPolyline};
use crate::vector::{add, angle_between, cross, dot, norm, normalize, scale, sub};

/// Below this `sin θ` the two endpoints are treated as coincident or
/// antipodal and the great circle through them is not unique.
const DEGENERATE_SIN: f64 = 1e-12;

/// Number of polyline points for an arc of `angle_rad`.
///
/// Always at least 2.
pub fn point_count(angle_rad: f64, resolution_deg: f64) -> usize {
    let steps = (angle_rad.to_degrees() / resolution_deg).round();
    let steps = if steps.is_finite() && steps >= 1.0 {
        steps as usize
    } else {
        1
    };
    steps + 1
}

/// Some unit vector perpendicular to unit vector `a`.
fn any_perpendicular(a: &[f64; 3]) -> [f64; 3] {
    let axis = if a[2].abs() < 0.9 {
        [0.0, 0.0, 1.0]
    } else {
        [1.0, 0.0, 0.0]
    };
    // a is unit and not parallel to axis, so the cross product is non-zero.
    let c = cross(a, &axis);
    scale(&c, 1.0 / norm(&c))
}

/// Spherical linear interpolation between unit vectors `a` and `b`.
///
/// Built on the orthonormal pair `(a, p)` with `p` the normalized part of
/// `b` orthogonal to `a`: `a·cos(tθ) + p·sin(tθ)`. No sine of θ appears in
/// a denominator. When `a` and `b` are (nearly) coincident the result is a
/// normalized linear blend; when they are (nearly) antipodal a fixed
/// perpendicular is used so the arc is still a half great circle.
pub fn slerp(a: &[f64; 3], b: &[f64; 3], t: f64) -> [f64; 3] {
    let theta = angle_between(a, b);
    let ortho = sub(b, &scale(a, dot(a, b)));
    let ortho_len = norm(&ortho);

    if ortho_len < DEGENERATE_SIN {
        if theta < FRAC_PI_2 {
            let blend = add(&scale(a, 1.0 - t), &scale(b, t));
            return normalize(&blend).unwrap_or(*a);
        }
        let p = any_perpendicular(a);
        let (s, c) = (theta * t).sin_cos();
        return add(&scale(a, c), &scale(&p, s));
    }

    let p = scale(&ortho, 1.0 / ortho_len);
    let (s, c) = (theta * t).sin_cos();
    add(&scale(a, c), &scale(&p, s))
}

/// Turns pairs of sphere directions into radius-scaled polylines.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcDiscretizer {
    config: SphereConfig,
}

impl ArcDiscretizer {
    pub fn new(config: SphereConfig) -> Result<Self, FrameError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &SphereConfig {
        &self.config
    }

    /// Polyline along the great circle from `start` to `end`.
    ///
    /// Inputs need not be unit length but must be non-zero. Unit inputs are
    /// scaled without renormalizing, so the endpoints equal `start·radius`
    /// and `end·radius` exactly.
    pub fn discretize(
        &self,
        start: &[f64; 3],
        end: &[f64; 3],
    ) -> Result<Vec<[f64; 3]>, FrameError> {
        let a = normalize(start).ok_or(FrameError::DegenerateDirection)?;
        let b = normalize(end).ok_or(FrameError::DegenerateDirection)?;
        let n = point_count(angle_between(&a, &b), self.config.arc_resolution_deg);
        let radius = self.config.radius;

        let mut points = Vec::with_capacity(n);
        points.push(scale(&a, radius));
        for k in 1..n - 1 {
            let t = k as f64 / (n - 1) as f64;
            points.push(scale(&slerp(&a, &b, t), radius));
        }
        points.push(scale(&b, radius));

        log::trace!("arc discretized into {n} points");
        Ok(points)
    }

    /// Polyline between two equatorial directions.
    pub fn discretize_equatorial(
        &self,
        start: &EquatorialPosition,
        end: &EquatorialPosition,
    ) -> Result<Vec<[f64; 3]>, FrameError> {
        self.discretize(&unit_vector(start), &unit_vector(end))
    }

    /// Styled polyline for one catalog segment.
    pub fn discretize_segment(
        &self,
        segment: &ArcSegment,
        styles: &StyleTable,
    ) -> Result<StyledPolyline, FrameError> {
        let style = styles.get(segment.style_code)?;
        Ok(StyledPolyline {
            points: self.discretize(&segment.start, &segment.end)?,
            color: style.color,
            width: style.scaled_width(self.config.radius),
        })
    }

    /// One styled polyline per consecutive pair of a catalog path.
    ///
    /// Each piece takes the style of its first record. Paths with fewer
    /// than two records yield nothing.
    pub fn discretize_path(
        &self,
        path: &[CatalogPoint],
        styles: &StyleTable,
    ) -> Result<Vec<StyledPolyline>, FrameError> {
        path.windows(2)
            .map(|pair| {
                let segment = ArcSegment::between(&pair[0], &pair[1]);
                self.discretize_segment(&segment, styles)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    fn discretizer() -> ArcDiscretizer {
        ArcDiscretizer::new(SphereConfig::default()).unwrap()
    }

    #[test]
    fn point_count_examples() {
        assert_eq!(point_count(0.0, 5.0), 2);
        assert_eq!(point_count(2.4_f64.to_radians(), 5.0), 2);
        assert_eq!(point_count(90_f64.to_radians(), 5.0), 19);
        assert_eq!(point_count(PI, 5.0), 37);
    }

    #[test]
    fn slerp_midpoint_of_quarter_circle() {
        let m = slerp(&[1.0, 0.0, 0.0], &[0.0, 1.0, 0.0], 0.5);
        let h = 0.5_f64.sqrt();
        assert!((m[0] - h).abs() < 1e-12 && (m[1] - h).abs() < 1e-12 && m[2].abs() < 1e-12);
    }

    #[test]
    fn slerp_antipodal_stays_on_sphere() {
        let a = [0.0, 0.0, 1.0];
        let b = [0.0, 0.0, -1.0];
        for k in 0..=10 {
            let p = slerp(&a, &b, k as f64 / 10.0);
            assert!((norm(&p) - 1.0).abs() < 1e-12);
        }
        let mid = slerp(&a, &b, 0.5);
        assert!(mid[2].abs() < 1e-12, "midpoint should be on the equator: {mid:?}");
    }

    #[test]
    fn slerp_identical_is_constant() {
        let a = [0.6, 0.8, 0.0];
        let p = slerp(&a, &a, 0.3);
        for i in 0..3 {
            assert!((p[i] - a[i]).abs() < 1e-15);
        }
    }

    #[test]
    fn rejects_zero_endpoint() {
        assert_eq!(
            discretizer().discretize(&[0.0, 0.0, 0.0], &[1.0, 0.0, 0.0]),
            Err(FrameError::DegenerateDirection)
        );
    }

    #[test]
    fn unit_endpoints_are_scaled_verbatim() {
        let eq = EquatorialPosition::from_hours_deg(5.92, 7.41);
        let start = unit_vector(&eq);
        let end = unit_vector(&EquatorialPosition::from_hours_deg(18.6, 38.8));
        let pts = discretizer().discretize(&start, &end).unwrap();
        assert_eq!(pts[0], scale(&start, 1000.0));
        assert_eq!(pts[pts.len() - 1], scale(&end, 1000.0));
    }

    #[test]
    fn quarter_circle_spacing() {
        let pts = discretizer()
            .discretize(&[1.0, 0.0, 0.0], &[0.0, 0.0, 1.0])
            .unwrap();
        assert_eq!(pts.len(), 19);
        for w in pts.windows(2) {
            let step = angle_between(&w[0], &w[1]).to_degrees();
            assert!((step - 5.0).abs() < 1e-9, "step = {step}");
        }
    }
}
