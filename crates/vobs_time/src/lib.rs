//! Time reference for the virtual observatory.
//!
//! This crate provides:
//! - `TimeInstant`, a UTC instant with local→UTC conversion and parsing
//! - The continuous day number counted from 1999-12-31T00:00:00 UTC
//! - Local sidereal time from the Sun's mean longitude
//! - `SimClock`, the accelerated/reversible simulation clock

pub mod clock;
pub mod error;
pub mod instant;
pub mod sidereal;

pub use clock::{ClockConfig, SimClock, slow_down, speed_up};
pub use error::TimeError;
pub use instant::{DAY_ZERO_UNIX_SECONDS, SECONDS_PER_DAY, TimeInstant};
pub use sidereal::{gmst0_hours, hours_to_rad, local_sidereal_time_hours};
