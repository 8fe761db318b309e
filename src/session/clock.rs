//! Simulated chat time.
//!
//! The simulated clock starts at an arbitrary time of day and then moves
//! forward exactly as fast as the wall clock does, so the gaps between
//! logged messages follow the operator's typing speed.

use chrono::{Local, NaiveDateTime, NaiveTime, TimeDelta};

use crate::error::{SessionError, SessionResult};

/// Format of every timestamp shown in prompts and written to chat logs.
pub const TIME_FORMAT: &str = "%H:%M:%S";

/// Source of wall-clock time.
pub trait Clock {
    fn now(&self) -> NaiveDateTime;
}

/// The local system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Parses an operator-supplied time of day such as `12:44:37`.
pub fn parse_time_of_day(input: &str) -> SessionResult<NaiveTime> {
    NaiveTime::parse_from_str(input.trim(), TIME_FORMAT)
        .map_err(|_| SessionError::InvalidTimeFormat(input.to_string()))
}

/// Simulated time plus the wall-clock instant it was last synchronized at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulatedClock {
    current: NaiveDateTime,
    anchor: NaiveDateTime,
}

impl SimulatedClock {
    /// Starts at `start` on today's date, or at `now` when no start is given.
    pub fn start(start: Option<NaiveTime>, now: NaiveDateTime) -> Self {
        let current = start.map_or(now, |time| now.date().and_time(time));
        Self {
            current,
            anchor: now,
        }
    }

    pub const fn current(&self) -> NaiveDateTime {
        self.current
    }

    /// The current simulated time formatted as `HH:MM:SS`.
    pub fn timestamp(&self) -> String {
        self.current.format(TIME_FORMAT).to_string()
    }

    /// Moves simulated time forward by the wall time elapsed since the last
    /// call, then re-anchors at `now`.
    ///
    /// A wall clock that went backwards advances nothing.
    pub fn advance(&mut self, now: NaiveDateTime) {
        let elapsed = (now - self.anchor).max(TimeDelta::zero());
        self.current += elapsed;
        self.anchor = now;
    }
}
