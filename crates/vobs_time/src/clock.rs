//! Simulated clock driven by a host render loop.
//!
//! The clock owns the rendering instant. Each time at least one tick
//! interval of real time has passed, the instant advances by
//! `speed × tick_interval` simulated seconds. Speed is an integer on a
//! doubling/halving ladder bounded by `±max_speed`; zero pauses the clock
//! and negative values run it backwards.

use std::time::Duration;

use crate::error::TimeError;
use crate::instant::TimeInstant;

/// Clock configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockConfig {
    /// Real time between simulation steps.
    pub tick_interval: Duration,
    /// Largest allowed speed magnitude.
    pub max_speed: i64,
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            tick_interval: Duration::from_millis(100),
            max_speed: 4096,
        }
    }
}

impl ClockConfig {
    pub fn validate(&self) -> Result<(), TimeError> {
        if self.tick_interval.is_zero() {
            return Err(TimeError::InvalidConfig("tick_interval must be non-zero"));
        }
        if self.max_speed < 1 {
            return Err(TimeError::InvalidConfig("max_speed must be at least 1"));
        }
        Ok(())
    }
}

/// Next step up the speed ladder.
///
/// `… −4 → −2 → −1 → 0 → 1 → 2 → 4 …`, held at `max`.
pub fn speed_up(speed: i64, max: i64) -> i64 {
    if speed >= max {
        return speed;
    }
    if speed < -1 {
        speed / 2
    } else if speed > -2 && speed < 2 {
        speed + 1
    } else {
        speed * 2
    }
}

/// Next step down the speed ladder, held at `-max`.
pub fn slow_down(speed: i64, max: i64) -> i64 {
    if speed <= -max {
        return speed;
    }
    if speed > 1 {
        speed / 2
    } else if speed > -2 && speed < 2 {
        speed - 1
    } else {
        speed * 2
    }
}

/// The simulated clock.
#[derive(Debug, Clone)]
pub struct SimClock {
    config: ClockConfig,
    instant: TimeInstant,
    speed: i64,
    pending: Duration,
}

impl SimClock {
    /// Start a clock at `instant` running at real-time speed (1).
    pub fn new(instant: TimeInstant, config: ClockConfig) -> Result<Self, TimeError> {
        config.validate()?;
        Ok(Self {
            config,
            instant,
            speed: 1,
            pending: Duration::ZERO,
        })
    }

    pub fn config(&self) -> &ClockConfig {
        &self.config
    }

    /// Current simulated instant.
    pub fn instant(&self) -> TimeInstant {
        self.instant
    }

    /// Current speed multiplier.
    pub fn speed(&self) -> i64 {
        self.speed
    }

    /// Jump to an arbitrary instant (explicit rewind or fast-forward).
    pub fn set_instant(&mut self, instant: TimeInstant) {
        self.instant = instant;
        self.pending = Duration::ZERO;
    }

    /// Set the speed directly, clamped to `±max_speed`.
    pub fn set_speed(&mut self, speed: i64) {
        self.speed = speed.clamp(-self.config.max_speed, self.config.max_speed);
    }

    /// Move one rung up the speed ladder. Returns the new speed.
    pub fn faster(&mut self) -> i64 {
        self.speed = speed_up(self.speed, self.config.max_speed);
        self.speed
    }

    /// Move one rung down the speed ladder. Returns the new speed.
    pub fn slower(&mut self) -> i64 {
        self.speed = slow_down(self.speed, self.config.max_speed);
        self.speed
    }

    /// Simulated seconds covered by one tick at the current speed.
    pub fn step_seconds(&self) -> f64 {
        self.speed as f64 * self.config.tick_interval.as_secs_f64()
    }

    /// Feed real elapsed time. Returns `Ok(true)` when the instant moved.
    ///
    /// A step fires once the accumulated real time exceeds one tick
    /// interval; the remainder is discarded, so a stalled host loop never
    /// causes a burst of catch-up steps.
    pub fn advance(&mut self, real_elapsed: Duration) -> Result<bool, TimeError> {
        self.pending = self.pending.saturating_add(real_elapsed);
        if self.pending <= self.config.tick_interval {
            return Ok(false);
        }
        self.pending = Duration::ZERO;
        if self.speed == 0 {
            return Ok(false);
        }
        let step = self.step_seconds();
        self.instant = self
            .instant
            .checked_add_seconds(step)
            .ok_or(TimeError::OutOfRange)?;
        log::trace!("clock step {step:+} s -> {}", self.instant);
        Ok(true)
    }
}
