//! Simulated time model.
//!
//! # Design
//!
//! Time is a monotonically increasing count of simulated seconds,
//! [`SimSecond`].  One tick of the simulation loop advances the clock by
//! exactly one second.
//!
//! Two views of the same counter are used:
//!
//! ```text
//! absolute       = running counter, never wrapped
//! second_of_day  = absolute mod 86_400
//! ```
//!
//! Departure matching works on `absolute`, so a round trip that starts just
//! before midnight is evaluated without a discontinuity.  Anything shown to
//! the outside world (track timestamps, the AIS seconds field) uses
//! `second_of_day`.

use std::fmt;

use chrono::{NaiveDate, NaiveDateTime, TimeDelta};

/// Seconds in one simulated day.
pub const SECONDS_PER_DAY: u64 = 86_400;

// ── SimSecond ─────────────────────────────────────────────────────────────────

/// An absolute simulated second.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimSecond(pub u64);

impl SimSecond {
    /// Seconds since midnight of the current simulated day.
    #[inline]
    pub fn second_of_day(self) -> u32 {
        (self.0 % SECONDS_PER_DAY) as u32
    }

    /// `(hours, minutes, seconds)` of [`second_of_day`](Self::second_of_day).
    pub fn hms(self) -> (u32, u32, u32) {
        let s = self.second_of_day();
        (s / 3_600, (s % 3_600) / 60, s % 60)
    }

    /// Signed seconds from `earlier` to `self`; negative when `earlier` lies
    /// in the future.
    #[inline]
    pub fn signed_since(self, earlier: u64) -> i64 {
        self.0 as i64 - earlier as i64
    }
}

impl std::ops::Add<u64> for SimSecond {
    type Output = SimSecond;
    #[inline]
    fn add(self, rhs: u64) -> SimSecond {
        SimSecond(self.0 + rhs)
    }
}

impl fmt::Display for SimSecond {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (h, m, s) = self.hms();
        write!(f, "{h:02}:{m:02}:{s:02}")
    }
}

// ── SimClock ──────────────────────────────────────────────────────────────────

/// The simulation clock: where the run started and where it is now.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimClock {
    /// Calendar date of absolute second 0.
    pub epoch_date: NaiveDate,
    /// First simulated second of the run.
    pub start: SimSecond,
    /// The current simulated second, advanced once per tick.
    pub current: SimSecond,
}

impl SimClock {
    pub fn new(epoch_date: NaiveDate, start: SimSecond) -> Self {
        Self { epoch_date, start, current: start }
    }

    /// Advance the clock by one simulated second.
    #[inline]
    pub fn advance(&mut self) {
        self.current = self.current + 1;
    }

    /// Ticks processed since the run started.
    #[inline]
    pub fn elapsed_ticks(&self) -> u64 {
        self.current.0 - self.start.0
    }

    /// Calendar date-time of `at` (absolute, un-wrapped) plus `offset_secs`.
    pub fn date_time_at(&self, at: SimSecond, offset_secs: u64) -> NaiveDateTime {
        let secs = at.0.saturating_add(offset_secs).min(i64::MAX as u64) as i64;
        self.epoch_date.and_time(chrono::NaiveTime::MIN) + TimeDelta::seconds(secs)
    }
}

impl fmt::Display for SimClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let day = self.current.0 / SECONDS_PER_DAY;
        write!(f, "day {} {}", day, self.current)
    }
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Run-level configuration shared by the simulation loop and encoders.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimConfig {
    /// Absolute second of the first tick (43 200 = noon of day 0).
    pub start_second: u64,

    /// Number of ticks to run.  `None` runs until the caller stops.
    pub total_ticks: Option<u64>,

    /// Master RNG seed for the static-report cadence.
    pub seed: u64,

    /// Calendar date of absolute second 0, used for AIS ETA fields.
    pub epoch_date: NaiveDate,
}

impl SimConfig {
    /// Noon, the default start of a run.
    pub const NOON: u64 = 12 * 3_600;

    /// The absolute second at which the run ends (exclusive), if bounded.
    #[inline]
    pub fn end_second(&self) -> Option<SimSecond> {
        self.total_ticks.map(|n| SimSecond(self.start_second + n))
    }

    /// Construct a [`SimClock`] positioned at the first tick.
    pub fn make_clock(&self) -> SimClock {
        SimClock::new(self.epoch_date, SimSecond(self.start_second))
    }
}
