//! Bodies modelled by the ephemeris.

use crate::elements::{
    ElementTable, JUPITER, MARS, MERCURY, MOON, NEPTUNE, SATURN, SUN, URANUS, VENUS,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Body {
    Sun,
    Moon,
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
}

/// Every body, in display order.
pub const ALL_BODIES: [Body; 9] = [
    Body::Sun,
    Body::Moon,
    Body::Mercury,
    Body::Venus,
    Body::Mars,
    Body::Jupiter,
    Body::Saturn,
    Body::Uranus,
    Body::Neptune,
];

impl Body {
    pub const fn all() -> &'static [Body] {
        &ALL_BODIES
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Sun => "Sun",
            Self::Moon => "Moon",
            Self::Mercury => "Mercury",
            Self::Venus => "Venus",
            Self::Mars => "Mars",
            Self::Jupiter => "Jupiter",
            Self::Saturn => "Saturn",
            Self::Uranus => "Uranus",
            Self::Neptune => "Neptune",
        }
    }

    /// Case-insensitive lookup by English name.
    pub fn from_name(name: &str) -> Option<Self> {
        ALL_BODIES
            .iter()
            .copied()
            .find(|b| b.name().eq_ignore_ascii_case(name.trim()))
    }

    pub const fn elements(self) -> &'static ElementTable {
        match self {
            Self::Sun => &SUN,
            Self::Moon => &MOON,
            Self::Mercury => &MERCURY,
            Self::Venus => &VENUS,
            Self::Mars => &MARS,
            Self::Jupiter => &JUPITER,
            Self::Saturn => &SATURN,
            Self::Uranus => &URANUS,
            Self::Neptune => &NEPTUNE,
        }
    }

    /// Whether a perturbation series applies.
    pub const fn is_perturbed(self) -> bool {
        matches!(self, Self::Moon | Self::Jupiter | Self::Saturn | Self::Uranus)
    }

    /// Whether the topocentric parallax correction applies.
    pub const fn needs_topocentric(self) -> bool {
        matches!(self, Self::Moon)
    }

    /// Whether propagated positions are already geocentric, so no Sun
    /// offset is added.
    pub const fn is_geocentric(self) -> bool {
        matches!(self, Self::Moon)
    }
}

impl std::fmt::Display for Body {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_roundtrip() {
        for body in ALL_BODIES {
            assert_eq!(Body::from_name(body.name()), Some(body));
        }
        assert_eq!(Body::from_name(" saturn "), Some(Body::Saturn));
        assert_eq!(Body::from_name("Pluto"), None);
    }

    #[test]
    fn only_moon_is_topocentric() {
        let topo: Vec<_> = ALL_BODIES.iter().filter(|b| b.needs_topocentric()).collect();
        assert_eq!(topo, [&Body::Moon]);
    }

    #[test]
    fn perturbed_set() {
        let perturbed: Vec<_> = ALL_BODIES.iter().copied().filter(|b| b.is_perturbed()).collect();
        assert_eq!(
            perturbed,
            [Body::Moon, Body::Jupiter, Body::Saturn, Body::Uranus]
        );
    }
}
