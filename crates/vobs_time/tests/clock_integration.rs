//! Integration tests for the day count and the simulated clock.
//!
//! All tests are pure arithmetic (no data files needed).

use std::time::Duration;

use chrono::{FixedOffset, TimeZone};
use vobs_time::{ClockConfig, SimClock, TimeInstant, local_sidereal_time_hours};

#[test]
fn zoned_instant_converts_to_utc() {
    // 03:00 at UTC-3 is 06:00 UTC.
    let tz = FixedOffset::west_opt(3 * 3600).unwrap();
    let local = tz.with_ymd_and_hms(2023, 9, 23, 3, 0, 0).unwrap();
    let t = TimeInstant::from_zoned(&local);
    assert!((t.hour_utc() - 6.0).abs() < 1e-12);
    let expected = TimeInstant::from_calendar(2023, 9, 23, 6, 0, 0.0).unwrap();
    assert_eq!(t, expected);
}

#[test]
fn day_number_for_reference_session() {
    // 2023-09-23T06:00Z: 8 667 whole days after 1999-12-31 plus a quarter.
    let t = TimeInstant::from_calendar(2023, 9, 23, 6, 0, 0.0).unwrap();
    assert!(
        (t.day_number() - 8_667.25).abs() < 1e-9,
        "day number = {}",
        t.day_number()
    );
}

#[test]
fn clock_day_number_increases_monotonically_forward() {
    let start = TimeInstant::from_calendar(2023, 9, 23, 6, 0, 0.0).unwrap();
    let mut clock = SimClock::new(start, ClockConfig::default()).unwrap();
    clock.set_speed(3600);
    let mut last = clock.instant().day_number();
    for _ in 0..50 {
        clock.advance(Duration::from_millis(120)).unwrap();
        let now = clock.instant().day_number();
        assert!(now > last, "day number did not increase: {last} -> {now}");
        last = now;
    }
}

#[test]
fn clock_ladder_walk_is_symmetric() {
    let start = TimeInstant::from_calendar(2000, 1, 1, 0, 0, 0.0).unwrap();
    let config = ClockConfig {
        tick_interval: Duration::from_millis(100),
        max_speed: 64,
    };
    let mut clock = SimClock::new(start, config).unwrap();
    for _ in 0..20 {
        clock.faster();
    }
    assert_eq!(clock.speed(), 64);
    for _ in 0..40 {
        clock.slower();
    }
    assert_eq!(clock.speed(), -64);
}

#[test]
fn sidereal_time_advances_about_four_minutes_per_day() {
    // Same UT on consecutive days: the mean Sun moves ~0.9856°, i.e. LST
    // gains ~3.94 minutes.
    let ls0 = 11.152_434_011;
    let ls1 = ls0 + 0.017_201_969_62 + 8.219_366e-7;
    let a = local_sidereal_time_hours(ls0, 0.0, 0.0);
    let b = local_sidereal_time_hours(ls1, 0.0, 0.0);
    let gain_min = (b - a).rem_euclid(24.0) * 60.0;
    assert!((gain_min - 3.94).abs() < 0.01, "gain = {gain_min} min");
}
