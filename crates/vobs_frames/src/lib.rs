//! Celestial-sphere geometry for the ephemeris and the scene.
//!
//! Provides:
//! - Position types for the ecliptic, equatorial and horizontal frames
//! - Ecliptic → equatorial rotation and the geocentric frame transform
//! - Equatorial → horizontal conversion
//! - The sphere projector and great-circle arc discretizer
//! - Line styles and the equatorial grid

pub mod arc;
pub mod config;
pub mod coords;
pub mod error;
pub mod grid;
pub mod horizontal;
pub mod rotation;
pub mod spherical;
pub mod style;
pub mod vector;

pub use arc::{ArcDiscretizer, point_count, slerp};
pub use config::{DEFAULT_ARC_RESOLUTION_DEG, DEFAULT_RADIUS, SphereConfig};
pub use coords::{EclipticPosition, EquatorialPosition, HorizontalPosition};
pub use error::FrameError;
pub use grid::{EquatorialGrid, GridConfig, GridLine, GridLineKind};
pub use horizontal::{equatorial_to_horizontal, hour_angle};
pub use rotation::{ecliptic_to_equatorial, geocentric_equatorial};
pub use spherical::{
    SphereProjector, SphericalCoords, cartesian_to_spherical, equatorial_from_unit,
    spherical_to_cartesian, unit_vector,
};
pub use style::{ArcSegment, ArcStyle, CatalogPoint, Color, StyleTable, StyledPolyline};
