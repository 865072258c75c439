//! Newton iteration for Kepler's equation `M = E − e·sin E`.
//!
//! Starting guess `E0 = M + e·sin M·(1 + e·cos M)`, then
//!
//!   E1 = E0 − (E0 − e·sin E0 − M) / (1 − e·cos E0)
//!
//! until successive estimates differ by at most [`TOLERANCE`] or
//! [`MAX_ITERATIONS`] steps have run.

use std::f64::consts::TAU;

use crate::error::EphemerisError;

/// Convergence threshold on `|E1 − E0|`, radians.
pub const TOLERANCE: f64 = 1.0e-5;

/// Iteration cap. Reaching it is not an error; see [`KeplerSolution::converged`].
pub const MAX_ITERATIONS: u32 = 100;

/// Result of one solve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeplerSolution {
    /// Eccentric anomaly in radians, for the mean anomaly reduced to `[0, 2π)`.
    pub eccentric_anomaly: f64,
    pub iterations: u32,
    /// `false` when the cap was hit; the estimate is still the best available.
    pub converged: bool,
}

/// Solve for the eccentric anomaly.
///
/// Rejects `e` outside `[0, 1)`, and non-finite `e` or `M`, without
/// iterating.
pub fn solve_kepler(
    mean_anomaly: f64,
    eccentricity: f64,
) -> Result<KeplerSolution, EphemerisError> {
    let e = eccentricity;
    if !e.is_finite() || !(0.0..1.0).contains(&e) {
        return Err(EphemerisError::InvalidEccentricity { eccentricity: e });
    }
    if !mean_anomaly.is_finite() {
        return Err(EphemerisError::NonFiniteElement("mean anomaly"));
    }

    let m = mean_anomaly.rem_euclid(TAU);
    let mut e0 = m + e * m.sin() * (1.0 + e * m.cos());
    let mut iterations = 0;
    let mut diff = f64::INFINITY;

    while diff > TOLERANCE && iterations < MAX_ITERATIONS {
        let e1 = e0 - (e0 - e * e0.sin() - m) / (1.0 - e * e0.cos());
        diff = (e1 - e0).abs();
        e0 = e1;
        iterations += 1;
    }

    let converged = diff <= TOLERANCE;
    if !converged {
        log::debug!(
            "Kepler iteration cap reached: M={m}, e={e}, last step {diff:e}, returning E={e0}"
        );
    }

    Ok(KeplerSolution {
        eccentric_anomaly: e0,
        iterations,
        converged,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    fn residual(sol: &KeplerSolution, m: f64, e: f64) -> f64 {
        let ea = sol.eccentric_anomaly;
        (ea - e * ea.sin() - m.rem_euclid(TAU)).abs()
    }

    #[test]
    fn circular_orbit_is_identity() {
        let sol = solve_kepler(1.234, 0.0).unwrap();
        assert!((sol.eccentric_anomaly - 1.234).abs() < 1e-15);
        assert!(sol.converged);
    }

    #[test]
    fn moderate_eccentricity_converges_quickly() {
        let sol = solve_kepler(0.5, 0.2).unwrap();
        assert!(sol.converged);
        assert!(sol.iterations <= 5, "iterations = {}", sol.iterations);
        assert!(residual(&sol, 0.5, 0.2) < 1e-10);
    }

    #[test]
    fn large_mean_anomaly_is_reduced() {
        let m = 1976.3;
        let sol = solve_kepler(m, 0.0549).unwrap();
        assert!((0.0..=TAU + 0.1).contains(&sol.eccentric_anomaly));
        assert!(residual(&sol, m, 0.0549) < 1e-8);
    }

    #[test]
    fn half_turn_is_fixed_point() {
        let sol = solve_kepler(PI, 0.7).unwrap();
        assert!((sol.eccentric_anomaly - PI).abs() < 1e-12);
    }

    #[test]
    fn rejects_bad_eccentricity() {
        for e in [-0.1, 1.0, 1.5, f64::NAN, f64::INFINITY] {
            assert!(
                matches!(
                    solve_kepler(1.0, e),
                    Err(EphemerisError::InvalidEccentricity { .. })
                ),
                "e = {e} accepted"
            );
        }
    }

    #[test]
    fn rejects_non_finite_mean_anomaly() {
        assert_eq!(
            solve_kepler(f64::NAN, 0.1),
            Err(EphemerisError::NonFiniteElement("mean anomaly"))
        );
    }
}
