//! Line styles for catalog segments.
//!
//! Catalog records carry an opaque style code. The caller supplies the
//! table mapping codes to a color and a width; widths are fractions of the
//! sphere radius so the same table works at any scene scale.

use std::collections::BTreeMap;

use crate::coords::EquatorialPosition;
use crate::error::FrameError;
use crate::spherical::unit_vector;

/// Linear RGB color, components in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub const BLUE: Color = Color::rgb(0.0, 0.0, 1.0);
    pub const RED: Color = Color::rgb(1.0, 0.0, 0.0);
    pub const YELLOW: Color = Color::rgb(1.0, 0.92, 0.016);

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }
}

/// Color and relative width of one line class.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcStyle {
    pub color: Color,
    /// Width as a fraction of the sphere radius.
    pub width: f64,
}

impl ArcStyle {
    /// Width in scene units for a sphere of `radius`.
    pub fn scaled_width(&self, radius: f64) -> f64 {
        self.width * radius
    }
}

/// Caller-supplied map from style code to [`ArcStyle`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StyleTable {
    entries: BTreeMap<u8, ArcStyle>,
}

impl StyleTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// The four-class table used for constellation figures: primary lines
    /// blue and thickest, secondary red, the two faint classes yellow.
    pub fn reference() -> Self {
        let mut table = Self::new();
        table.insert(
            1,
            ArcStyle {
                color: Color::BLUE,
                width: 0.006,
            },
        );
        table.insert(
            2,
            ArcStyle {
                color: Color::RED,
                width: 0.004,
            },
        );
        table.insert(
            3,
            ArcStyle {
                color: Color::YELLOW,
                width: 0.002,
            },
        );
        table.insert(
            4,
            ArcStyle {
                color: Color::YELLOW,
                width: 0.002,
            },
        );
        table
    }

    /// Add or replace a style. Returns the previous entry, if any.
    pub fn insert(&mut self, code: u8, style: ArcStyle) -> Option<ArcStyle> {
        self.entries.insert(code, style)
    }

    pub fn get(&self, code: u8) -> Result<&ArcStyle, FrameError> {
        self.entries.get(&code).ok_or(FrameError::UnknownStyle(code))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// One record from a line catalog: a direction and its style code.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CatalogPoint {
    pub position: EquatorialPosition,
    pub style_code: u8,
}

impl CatalogPoint {
    pub fn new(position: EquatorialPosition, style_code: u8) -> Self {
        Self {
            position,
            style_code,
        }
    }
}

/// Two sphere directions joined by a styled line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcSegment {
    pub start: [f64; 3],
    pub end: [f64; 3],
    pub style_code: u8,
}

impl ArcSegment {
    /// Segment between two catalog records, styled by the first.
    pub fn between(from: &CatalogPoint, to: &CatalogPoint) -> Self {
        Self {
            start: unit_vector(&from.position),
            end: unit_vector(&to.position),
            style_code: from.style_code,
        }
    }
}

/// A ready-to-draw polyline.
#[derive(Debug, Clone, PartialEq)]
pub struct StyledPolyline {
    pub points: Vec<[f64; 3]>,
    pub color: Color,
    /// Width in scene units.
    pub width: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_table_has_four_classes() {
        let table = StyleTable::reference();
        assert_eq!(table.len(), 4);
        assert_eq!(table.get(1).unwrap().width, 0.006);
        assert_eq!(table.get(2).unwrap().color, Color::RED);
        assert_eq!(table.get(3).unwrap(), table.get(4).unwrap());
    }

    #[test]
    fn unknown_code_is_error() {
        assert_eq!(
            StyleTable::reference().get(9),
            Err(FrameError::UnknownStyle(9))
        );
    }

    #[test]
    fn width_scales_with_radius() {
        let style = ArcStyle {
            color: Color::BLUE,
            width: 0.004,
        };
        assert!((style.scaled_width(1000.0) - 4.0).abs() < 1e-12);
    }

    #[test]
    fn segment_takes_first_style() {
        let a = CatalogPoint::new(EquatorialPosition::new(0.0, 0.0), 2);
        let b = CatalogPoint::new(EquatorialPosition::new(0.1, 0.1), 3);
        assert_eq!(ArcSegment::between(&a, &b).style_code, 2);
    }
}
