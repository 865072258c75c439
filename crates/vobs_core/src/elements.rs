//! Orbital element tables.
//!
//! Every element is linear in the day number `d` (days since
//! 1999-12-31T00:00 UTC). Angles are radians; `a` is AU for the Sun and
//! planets and Earth radii for the Moon. The Sun's table describes Earth's
//! orbit seen from Earth, so its node and inclination are zero.
//!
//! Source: P. Schlyter, "How to compute planetary positions", §4 and §6,
//! converted from degrees.

/// `base + rate·d`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Linear {
    pub base: f64,
    pub rate: f64,
}

impl Linear {
    pub const fn new(base: f64, rate: f64) -> Self {
        Self { base, rate }
    }

    pub const fn constant(value: f64) -> Self {
        Self {
            base: value,
            rate: 0.0,
        }
    }

    pub fn at(&self, day: f64) -> f64 {
        self.base + self.rate * day
    }
}

/// Element functions for one body.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElementTable {
    /// Longitude of the ascending node, N.
    pub node: Linear,
    /// Inclination to the ecliptic, i.
    pub inclination: Linear,
    /// Argument of perihelion, w.
    pub perihelion: Linear,
    /// Semi-major axis, a.
    pub semi_major_axis: Linear,
    /// Eccentricity, e.
    pub eccentricity: Linear,
    /// Mean anomaly, M.
    pub mean_anomaly: Linear,
}

/// Elements evaluated at one day.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitalElements {
    pub node: f64,
    pub inclination: f64,
    pub perihelion: f64,
    pub semi_major_axis: f64,
    pub eccentricity: f64,
    pub mean_anomaly: f64,
}

impl OrbitalElements {
    /// Mean longitude `M + w + N`.
    pub fn mean_longitude(&self) -> f64 {
        self.mean_anomaly + self.perihelion + self.node
    }
}

impl ElementTable {
    pub fn at(&self, day: f64) -> OrbitalElements {
        OrbitalElements {
            node: self.node.at(day),
            inclination: self.inclination.at(day),
            perihelion: self.perihelion.at(day),
            semi_major_axis: self.semi_major_axis.at(day),
            eccentricity: self.eccentricity.at(day),
            mean_anomaly: self.mean_anomaly.at(day),
        }
    }
}

/// Obliquity of the ecliptic, ecl.
pub const OBLIQUITY: Linear = Linear::new(0.409_092_96, -6.218_608e-9);

#[rustfmt::skip]
pub const SUN: ElementTable = ElementTable {
    node:            Linear::constant(0.0),
    inclination:     Linear::constant(0.0),
    perihelion:      Linear::new(4.938_241_57, 8.219_366e-7),
    semi_major_axis: Linear::constant(1.0),
    eccentricity:    Linear::new(0.016_709, -1.151e-9),
    mean_anomaly:    Linear::new(6.214_192_441, 0.017_201_969_62),
};

#[rustfmt::skip]
pub const MOON: ElementTable = ElementTable {
    node:            Linear::new(2.183_804_83, -9.242_183_063_049e-4),
    inclination:     Linear::constant(0.089_804_17),
    perihelion:      Linear::new(5.551_253_56, 2.868_576_423_896_5e-3),
    semi_major_axis: Linear::constant(60.2666),
    eccentricity:    Linear::constant(0.054_900),
    mean_anomaly:    Linear::new(2.013_506_073, 0.228_027_143_743),
};

#[rustfmt::skip]
pub const MERCURY: ElementTable = ElementTable {
    node:            Linear::new(8.435_403_17e-1, 5.665_111_86e-7),
    inclination:     Linear::new(1.222_550_78e-1, 8.726_646_26e-10),
    perihelion:      Linear::new(5.083_114_37e-1, 1.770_531_81e-7),
    semi_major_axis: Linear::constant(0.387_098),
    eccentricity:    Linear::new(0.205_635, 5.59e-10),
    mean_anomaly:    Linear::new(2.943_605_99, 7.142_471_001_49e-2),
};

#[rustfmt::skip]
pub const VENUS: ElementTable = ElementTable {
    node:            Linear::new(1.338_316_73, 4.303_807_40e-7),
    inclination:     Linear::new(5.924_694_68e-2, 4.799_655_44e-10),
    perihelion:      Linear::new(9.580_286_80e-1, 2.415_081_90e-7),
    semi_major_axis: Linear::constant(0.723_330),
    eccentricity:    Linear::new(0.006_773, -1.302e-9),
    mean_anomaly:    Linear::new(8.378_487_98e-1, 2.796_244_75e-2),
};

#[rustfmt::skip]
pub const MARS: ElementTable = ElementTable {
    node:            Linear::new(8.649_397_99e-1, 3.684_058_44e-7),
    inclination:     Linear::new(3.228_335_52e-2, -3.106_686_07e-10),
    perihelion:      Linear::new(5.000_396_23, 5.113_134_03e-7),
    semi_major_axis: Linear::constant(1.523_688),
    eccentricity:    Linear::new(0.093_405, 2.516e-9),
    mean_anomaly:    Linear::new(3.246_678_93e-1, 9.145_887_90e-3),
};

#[rustfmt::skip]
pub const JUPITER: ElementTable = ElementTable {
    node:            Linear::new(1.753_256_54, 4.832_013_85e-7),
    inclination:     Linear::new(2.274_164_02e-2, -2.717_477_65e-9),
    perihelion:      Linear::new(4.780_067_61, 2.871_153_89e-7),
    semi_major_axis: Linear::constant(5.202_56),
    eccentricity:    Linear::new(0.048_498, 4.469e-9),
    mean_anomaly:    Linear::new(3.472_332_55e-1, 1.450_112_046_752_574e-3),
};

#[rustfmt::skip]
pub const SATURN: ElementTable = ElementTable {
    node:            Linear::new(1.983_800_57, 4.170_987_85e-7),
    inclination:     Linear::new(4.343_426_38e-2, -1.886_700_92e-9),
    perihelion:      Linear::new(5.923_541_02, 5.195_164_50e-7),
    semi_major_axis: Linear::constant(9.554_75),
    eccentricity:    Linear::new(0.055_546, -9.499e-9),
    mean_anomaly:    Linear::new(5.532_117_77, 5.837_118_978_783_366e-4),
};

#[rustfmt::skip]
pub const URANUS: ElementTable = ElementTable {
    node:            Linear::new(1.291_552_37, 2.439_621_23e-7),
    inclination:     Linear::new(1.349_663_11e-2, 3.316_125_58e-10),
    perihelion:      Linear::new(1.687_056_20, 5.334_598_86e-7),
    semi_major_axis: Linear::new(19.181_71, -1.55e-8),
    eccentricity:    Linear::new(0.047_318, 7.45e-9),
    mean_anomaly:    Linear::new(2.488_673_71, 2.046_539_22e-4),
};

#[rustfmt::skip]
pub const NEPTUNE: ElementTable = ElementTable {
    node:            Linear::new(2.300_005_36, 5.266_181_95e-7),
    inclination:     Linear::new(3.089_232_78e-2, -4.450_589_59e-9),
    perihelion:      Linear::new(4.762_062_80, -1.051_909_94e-7),
    semi_major_axis: Linear::new(30.058_26, 3.313e-8),
    eccentricity:    Linear::new(0.008_606, 2.15e-9),
    mean_anomaly:    Linear::new(4.542_168_76, 1.046_350_54e-4),
};

#[cfg(test)]
mod tests {
    use super::*;

    const TABLES: [ElementTable; 9] = [
        SUN, MOON, MERCURY, VENUS, MARS, JUPITER, SATURN, URANUS, NEPTUNE,
    ];

    #[test]
    fn linear_evaluates() {
        let l = Linear::new(1.0, 0.5);
        assert_eq!(l.at(0.0), 1.0);
        assert_eq!(l.at(4.0), 3.0);
        assert_eq!(Linear::constant(2.5).at(1.0e6), 2.5);
    }

    #[test]
    fn eccentricities_valid_over_operating_range() {
        // ±300 years around the epoch.
        for day in [-110_000.0, -36_525.0, 0.0, 8_667.25, 36_525.0, 110_000.0] {
            for table in &TABLES {
                let e = table.eccentricity.at(day);
                assert!((0.0..1.0).contains(&e), "e = {e} at day {day}");
            }
        }
    }

    #[test]
    fn mars_differs_from_venus() {
        assert!(MARS.semi_major_axis != VENUS.semi_major_axis);
        assert!(MARS.eccentricity != VENUS.eccentricity);
        assert!(SATURN.semi_major_axis != JUPITER.semi_major_axis);
    }

    #[test]
    fn sun_at_day_zero() {
        let el = SUN.at(0.0);
        assert!((el.perihelion - 4.9382).abs() < 1e-4);
        assert!((el.mean_anomaly - 6.2142).abs() < 1e-4);
        assert!((OBLIQUITY.at(0.0) - 0.40909).abs() < 1e-5);
    }

    #[test]
    fn moon_mean_longitude() {
        let el = MOON.at(0.0);
        let expected = 2.013_506_073 + 5.551_253_56 + 2.183_804_83;
        assert!((el.mean_longitude() - expected).abs() < 1e-12);
    }
}
