//! Small 3-vector helpers over `[f64; 3]`.

pub fn dot(a: &[f64; 3], b: &[f64; 3]) -> f64 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}

pub fn cross(a: &[f64; 3], b: &[f64; 3]) -> [f64; 3] {
    [
        a[1] * b[2] - a[2] * b[1],
        a[2] * b[0] - a[0] * b[2],
        a[0] * b[1] - a[1] * b[0],
    ]
}

pub fn norm(a: &[f64; 3]) -> f64 {
    dot(a, a).sqrt()
}

pub fn scale(a: &[f64; 3], k: f64) -> [f64; 3] {
    [a[0] * k, a[1] * k, a[2] * k]
}

pub fn add(a: &[f64; 3], b: &[f64; 3]) -> [f64; 3] {
    [a[0] + b[0], a[1] + b[1], a[2] + b[2]]
}

pub fn sub(a: &[f64; 3], b: &[f64; 3]) -> [f64; 3] {
    [a[0] - b[0], a[1] - b[1], a[2] - b[2]]
}

/// Unit-length tolerance below which [`normalize`] returns its input as is.
const UNIT_EPS: f64 = 1e-12;

/// Unit vector along `a`, or `None` for zero or non-finite input.
///
/// Input that is already unit length within [`UNIT_EPS`] is returned
/// unchanged, bit for bit.
pub fn normalize(a: &[f64; 3]) -> Option<[f64; 3]> {
    let n = norm(a);
    if (n - 1.0).abs() <= UNIT_EPS {
        Some(*a)
    } else if n.is_finite() && n > 0.0 {
        Some(scale(a, 1.0 / n))
    } else {
        None
    }
}

/// Angle between two vectors in `[0, π]`.
///
/// Uses `atan2(|a×b|, a·b)`, which stays accurate near 0 and π where
/// `acos` of the dot product loses precision.
pub fn angle_between(a: &[f64; 3], b: &[f64; 3]) -> f64 {
    norm(&cross(a, b)).atan2(dot(a, b))
}
