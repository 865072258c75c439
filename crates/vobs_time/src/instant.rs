//! UTC instants and the continuous day count used by the element tables.
//!
//! The day count is anchored at 1999-12-31T00:00:00 UTC (day 0.0), the
//! origin of the low-order orbital element polynomials. One day is exactly
//! 86 400 SI seconds; leap seconds are not modelled.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, TimeZone, Timelike, Utc};

use crate::error::TimeError;

/// Seconds in one day.
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Unix timestamp of 1999-12-31T00:00:00 UTC, the day-number origin.
pub const DAY_ZERO_UNIX_SECONDS: i64 = 946_598_400;

/// A UTC instant.
///
/// Any instant chrono can represent is accepted. The element tables lose
/// accuracy far from J2000 (a few centuries either side), which is an
/// operating-range caveat rather than an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeInstant {
    utc: DateTime<Utc>,
}

impl TimeInstant {
    /// Wrap a UTC date/time.
    pub fn from_utc(utc: DateTime<Utc>) -> Self {
        Self { utc }
    }

    /// Convert an instant in any time zone (e.g. `Local`) to UTC.
    pub fn from_zoned<Tz: TimeZone>(dt: &DateTime<Tz>) -> Self {
        Self {
            utc: dt.with_timezone(&Utc),
        }
    }

    /// The current wall-clock instant.
    pub fn now() -> Self {
        Self { utc: Utc::now() }
    }

    /// Build an instant from UTC calendar fields.
    ///
    /// `second` may carry a fractional part; it must lie in `[0, 60)`.
    pub fn from_calendar(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: f64,
    ) -> Result<Self, TimeError> {
        if !(0.0..60.0).contains(&second) {
            return Err(TimeError::InvalidCalendar("second must be in [0, 60)"));
        }
        let whole = second.floor();
        let nanos = (((second - whole) * 1e9).round() as u32).min(999_999_999);
        let date = NaiveDate::from_ymd_opt(year, month, day)
            .ok_or(TimeError::InvalidCalendar("no such year/month/day"))?;
        let naive = date
            .and_hms_nano_opt(hour, minute, whole as u32, nanos)
            .ok_or(TimeError::InvalidCalendar("no such hour/minute/second"))?;
        Ok(Self {
            utc: Utc.from_utc_datetime(&naive),
        })
    }

    /// Inverse of [`TimeInstant::day_number`].
    pub fn from_day_number(day: f64) -> Result<Self, TimeError> {
        if !day.is_finite() {
            return Err(TimeError::OutOfRange);
        }
        let seconds = day * SECONDS_PER_DAY;
        let whole = seconds.floor();
        let nanos = (((seconds - whole) * 1e9).round() as u32).min(999_999_999);
        let unix = DAY_ZERO_UNIX_SECONDS
            .checked_add(whole as i64)
            .ok_or(TimeError::OutOfRange)?;
        DateTime::from_timestamp(unix, nanos)
            .map(Self::from_utc)
            .ok_or(TimeError::OutOfRange)
    }

    /// The wrapped UTC date/time.
    pub fn utc(&self) -> DateTime<Utc> {
        self.utc
    }

    /// Signed fractional days since 1999-12-31T00:00:00 UTC.
    pub fn day_number(&self) -> f64 {
        let whole = (self.utc.timestamp() - DAY_ZERO_UNIX_SECONDS) as f64;
        let frac = self.utc.timestamp_subsec_nanos() as f64 * 1e-9;
        (whole + frac) / SECONDS_PER_DAY
    }

    /// Hours elapsed since UTC midnight, in `[0, 24)`.
    pub fn hour_utc(&self) -> f64 {
        self.utc.hour() as f64
            + self.utc.minute() as f64 / 60.0
            + (self.utc.second() as f64 + self.utc.nanosecond() as f64 * 1e-9) / 3600.0
    }

    /// Shift by a signed number of seconds. `None` if the result overflows.
    pub fn checked_add_seconds(self, seconds: f64) -> Option<Self> {
        if !seconds.is_finite() {
            return None;
        }
        let nanos = (seconds * 1e9).round();
        if nanos.abs() >= i64::MAX as f64 {
            return None;
        }
        self.utc
            .checked_add_signed(Duration::nanoseconds(nanos as i64))
            .map(Self::from_utc)
    }
}

impl FromStr for TimeInstant {
    type Err = TimeError;

    /// Parse `YYYY-MM-DDThh:mm:ss[.fff]` followed by `Z`, an offset, or
    /// nothing (read as UTC).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
            return Ok(Self::from_zoned(&dt));
        }
        let naive = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f").map_err(|_| {
            TimeError::Parse(format!("expected YYYY-MM-DDThh:mm:ss[Z|+hh:mm], got {s}"))
        })?;
        Ok(Self {
            utc: Utc.from_utc_datetime(&naive),
        })
    }
}

impl Display for TimeInstant {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.utc.nanosecond() == 0 {
            write!(f, "{}", self.utc.format("%Y-%m-%dT%H:%M:%SZ"))
        } else {
            write!(f, "{}", self.utc.format("%Y-%m-%dT%H:%M:%S%.3fZ"))
        }
    }
}

impl From<DateTime<Utc>> for TimeInstant {
    fn from(utc: DateTime<Utc>) -> Self {
        Self::from_utc(utc)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn day_zero_is_origin() {
        let t = TimeInstant::from_calendar(1999, 12, 31, 0, 0, 0.0).unwrap();
        assert_eq!(t.day_number(), 0.0);
    }

    #[test]
    fn j2000_noon_is_day_one_and_a_half() {
        let t = TimeInstant::from_calendar(2000, 1, 1, 12, 0, 0.0).unwrap();
        assert!((t.day_number() - 1.5).abs() < 1e-12);
    }

    #[test]
    fn before_origin_is_negative() {
        let t = TimeInstant::from_calendar(1999, 12, 30, 18, 0, 0.0).unwrap();
        assert!((t.day_number() + 0.25).abs() < 1e-12);
    }

    #[test]
    fn day_number_roundtrip() {
        for &d in &[-36_525.25, -1.0, 0.0, 0.5, 8_666.123_456, 36_525.75] {
            let t = TimeInstant::from_day_number(d).unwrap();
            assert!(
                (t.day_number() - d).abs() < 1e-9,
                "day {d} came back as {}",
                t.day_number()
            );
        }
    }

    #[test]
    fn non_finite_day_rejected() {
        assert_eq!(
            TimeInstant::from_day_number(f64::NAN),
            Err(TimeError::OutOfRange)
        );
    }

    #[test]
    fn hour_utc_fraction() {
        let t = TimeInstant::from_calendar(2023, 9, 23, 6, 30, 36.0).unwrap();
        assert!((t.hour_utc() - 6.51).abs() < 1e-12);
    }

    #[test]
    fn invalid_calendar_rejected() {
        assert!(TimeInstant::from_calendar(2023, 2, 30, 0, 0, 0.0).is_err());
        assert!(TimeInstant::from_calendar(2023, 1, 1, 24, 0, 0.0).is_err());
        assert!(TimeInstant::from_calendar(2023, 1, 1, 0, 0, 60.0).is_err());
    }

    #[test]
    fn parse_with_and_without_zone() {
        let a: TimeInstant = "2023-09-23T06:00:00Z".parse().unwrap();
        let b: TimeInstant = "2023-09-23T06:00:00".parse().unwrap();
        let c: TimeInstant = "2023-09-23T03:00:00-03:00".parse().unwrap();
        assert_eq!(a, b);
        assert_eq!(a, c);
    }

    #[test]
    fn parse_garbage_fails() {
        let r: Result<TimeInstant, _> = "yesterday".parse();
        assert!(matches!(r, Err(TimeError::Parse(_))));
    }

    #[test]
    fn display_whole_seconds() {
        let t = TimeInstant::from_calendar(2024, 1, 15, 0, 0, 0.0).unwrap();
        assert_eq!(t.to_string(), "2024-01-15T00:00:00Z");
    }

    #[test]
    fn add_seconds_moves_day_number() {
        let t = TimeInstant::from_calendar(2000, 1, 1, 0, 0, 0.0).unwrap();
        let later = t.checked_add_seconds(43_200.0).unwrap();
        assert!((later.day_number() - t.day_number() - 0.5).abs() < 1e-12);
        let earlier = t.checked_add_seconds(-86_400.0).unwrap();
        assert!((t.day_number() - earlier.day_number() - 1.0).abs() < 1e-12);
    }
}
