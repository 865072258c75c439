//! Low-order perturbation series.
//!
//! Each correction is a sum of sinusoids of an integer combination of
//! fundamental arguments plus a phase. Two argument sets are used:
//!
//! - planetary `[Mj, Ms, Mu]`: mean anomalies of Jupiter, Saturn, Uranus
//!   (the "great Jupiter–Saturn term" and its relatives);
//! - lunar `[Mm, D, F, Msun]`: Moon's mean anomaly, mean elongation,
//!   argument of latitude, and the Sun's mean anomaly.
//!
//! Amplitudes are radians except the lunar radius series (Earth radii).
//! Coefficients from P. Schlyter, "How to compute planetary positions",
//! §9, converted from degrees.

use vobs_frames::EclipticPosition;

use crate::body::Body;
use crate::elements::{JUPITER, MOON, OrbitalElements, SATURN, URANUS};

/// Sine or cosine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Wave {
    Sin,
    Cos,
}

/// One term `amplitude · wave(Σ multipliers[k]·args[k] + phase)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Term<const N: usize> {
    pub amplitude: f64,
    pub wave: Wave,
    pub multipliers: [f64; N],
    pub phase: f64,
}

impl<const N: usize> Term<N> {
    pub fn evaluate(&self, args: &[f64; N]) -> f64 {
        let angle = self
            .multipliers
            .iter()
            .zip(args)
            .fold(self.phase, |acc, (k, a)| acc + k * a);
        let value = match self.wave {
            Wave::Sin => angle.sin(),
            Wave::Cos => angle.cos(),
        };
        self.amplitude * value
    }

    /// Copy with zero amplitude.
    pub fn zeroed(&self) -> Self {
        Self {
            amplitude: 0.0,
            ..*self
        }
    }
}

pub fn sum_series<const N: usize>(terms: &[Term<N>], args: &[f64; N]) -> f64 {
    terms.iter().map(|t| t.evaluate(args)).sum()
}

const fn sin<const N: usize>(amplitude: f64, multipliers: [f64; N], phase: f64) -> Term<N> {
    Term {
        amplitude,
        wave: Wave::Sin,
        multipliers,
        phase,
    }
}

const fn cos<const N: usize>(amplitude: f64, multipliers: [f64; N], phase: f64) -> Term<N> {
    Term {
        amplitude,
        wave: Wave::Cos,
        multipliers,
        phase,
    }
}

// Planetary arguments: [Mj, Ms, Mu].

#[rustfmt::skip]
pub static JUPITER_LONGITUDE: [Term<3>; 7] = [
    //    amplitude   Mj    Ms   Mu    phase
    sin(-5.794e-3, [2.0, -5.0, 0.0], -1.180),
    sin(-9.774e-4, [2.0, -2.0, 0.0],  0.367),
    sin( 7.330e-4, [3.0, -5.0, 0.0],  0.367),
    sin(-6.283e-4, [1.0, -2.0, 0.0],  0.0),
    cos( 3.840e-4, [1.0, -1.0, 0.0],  0.0),
    sin( 4.014e-4, [2.0, -3.0, 0.0],  0.908),
    sin(-2.793e-4, [1.0, -5.0, 0.0], -1.204),
];

#[rustfmt::skip]
pub static SATURN_LONGITUDE: [Term<3>; 5] = [
    sin( 1.417e-2, [2.0, -5.0, 0.0], -1.180),
    cos(-3.997e-3, [2.0, -4.0, 0.0], -3.491e-2),
    sin( 2.077e-3, [1.0, -2.0, 0.0], -5.236e-2),
    sin( 8.029e-4, [2.0, -6.0, 0.0], -1.204),
    sin( 2.443e-4, [1.0, -3.0, 0.0],  5.585e-1),
];

#[rustfmt::skip]
pub static SATURN_LATITUDE: [Term<3>; 2] = [
    cos(-3.491e-4, [2.0, -4.0, 0.0], -3.491e-2),
    sin( 3.142e-4, [2.0, -6.0, 0.0], -8.552e-1),
];

#[rustfmt::skip]
pub static URANUS_LONGITUDE: [Term<3>; 3] = [
    sin( 6.981e-4, [0.0, 1.0, -2.0], 1.047e-1),
    sin( 6.109e-4, [0.0, 1.0, -3.0], 5.760e-1),
    sin(-2.618e-4, [1.0, 0.0, -1.0], 3.491e-1),
];

// Lunar arguments: [Mm, D, F, Msun].

#[rustfmt::skip]
pub static MOON_LONGITUDE: [Term<4>; 12] = [
    //    amplitude    Mm    D     F    Msun
    sin(-2.224e-2, [1.0, -2.0, 0.0,  0.0], 0.0),  // evection
    sin( 1.148e-2, [0.0,  2.0, 0.0,  0.0], 0.0),  // variation
    sin(-3.246e-3, [0.0,  0.0, 0.0,  1.0], 0.0),  // yearly equation
    sin(-1.030e-3, [2.0, -2.0, 0.0,  0.0], 0.0),
    sin(-9.948e-4, [1.0, -2.0, 0.0,  1.0], 0.0),
    sin( 9.250e-4, [1.0,  2.0, 0.0,  0.0], 0.0),
    sin( 8.029e-4, [0.0,  2.0, 0.0, -1.0], 0.0),
    sin( 7.156e-4, [1.0,  0.0, 0.0, -1.0], 0.0),
    sin(-6.109e-4, [0.0,  1.0, 0.0,  0.0], 0.0),  // parallactic equation
    sin(-5.411e-4, [1.0,  0.0, 0.0,  1.0], 0.0),
    sin(-2.618e-4, [0.0, -2.0, 2.0,  0.0], 0.0),
    sin( 1.920e-4, [1.0, -4.0, 0.0,  0.0], 0.0),
];

#[rustfmt::skip]
pub static MOON_LATITUDE: [Term<4>; 5] = [
    sin(-3.019e-3, [0.0, -2.0,  1.0, 0.0], 0.0),
    sin(-9.599e-4, [1.0, -2.0, -1.0, 0.0], 0.0),
    sin(-8.029e-4, [1.0, -2.0,  1.0, 0.0], 0.0),
    sin( 5.760e-4, [0.0,  2.0,  1.0, 0.0], 0.0),
    sin( 2.967e-4, [2.0,  0.0,  1.0, 0.0], 0.0),
];

/// Earth radii.
#[rustfmt::skip]
pub static MOON_RADIUS: [Term<4>; 2] = [
    cos(-0.58, [1.0, -2.0, 0.0, 0.0], 0.0),
    cos(-0.46, [0.0,  2.0, 0.0, 0.0], 0.0),
];

/// Longitude, latitude and radius series for one body.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Series<'a, const N: usize> {
    pub longitude: &'a [Term<N>],
    pub latitude: &'a [Term<N>],
    pub radius: &'a [Term<N>],
}

impl<const N: usize> Series<'_, N> {
    pub fn correction(&self, args: &[f64; N]) -> Correction {
        Correction {
            longitude: sum_series(self.longitude, args),
            latitude: sum_series(self.latitude, args),
            radius: sum_series(self.radius, args),
        }
    }
}

pub static JUPITER_SERIES: Series<'static, 3> = Series {
    longitude: &JUPITER_LONGITUDE,
    latitude: &[],
    radius: &[],
};

pub static SATURN_SERIES: Series<'static, 3> = Series {
    longitude: &SATURN_LONGITUDE,
    latitude: &SATURN_LATITUDE,
    radius: &[],
};

pub static URANUS_SERIES: Series<'static, 3> = Series {
    longitude: &URANUS_LONGITUDE,
    latitude: &[],
    radius: &[],
};

pub static MOON_SERIES: Series<'static, 4> = Series {
    longitude: &MOON_LONGITUDE,
    latitude: &MOON_LATITUDE,
    radius: &MOON_RADIUS,
};

/// Additive offsets to an ecliptic position.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Correction {
    pub longitude: f64,
    pub latitude: f64,
    pub radius: f64,
}

impl Correction {
    pub fn apply(&self, position: &EclipticPosition) -> EclipticPosition {
        EclipticPosition {
            longitude: position.longitude + self.longitude,
            latitude: position.latitude + self.latitude,
            radius: position.radius + self.radius,
        }
    }
}

/// `[Mj, Ms, Mu]` at `day`, each from its own element table.
pub fn planetary_arguments(day: f64) -> [f64; 3] {
    [
        JUPITER.mean_anomaly.at(day),
        SATURN.mean_anomaly.at(day),
        URANUS.mean_anomaly.at(day),
    ]
}

/// `[Mm, D, F, Msun]` from the Moon's elements and the Sun's mean anomaly
/// and mean longitude.
pub fn lunar_arguments(
    moon: &OrbitalElements,
    sun_mean_anomaly: f64,
    sun_mean_longitude: f64,
) -> [f64; 4] {
    let l = moon.mean_longitude();
    [
        moon.mean_anomaly,
        l - sun_mean_longitude,
        l - moon.node,
        sun_mean_anomaly,
    ]
}

/// Correction for `body` at `day`. Bodies without a series get zero.
pub fn correction_for(
    body: Body,
    day: f64,
    sun_mean_anomaly: f64,
    sun_mean_longitude: f64,
) -> Correction {
    match body {
        Body::Moon => {
            let args = lunar_arguments(&MOON.at(day), sun_mean_anomaly, sun_mean_longitude);
            MOON_SERIES.correction(&args)
        }
        Body::Jupiter => JUPITER_SERIES.correction(&planetary_arguments(day)),
        Body::Saturn => SATURN_SERIES.correction(&planetary_arguments(day)),
        Body::Uranus => URANUS_SERIES.correction(&planetary_arguments(day)),
        Body::Sun | Body::Mercury | Body::Venus | Body::Mars | Body::Neptune => {
            Correction::default()
        }
    }
}
