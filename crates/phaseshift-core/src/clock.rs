//! Minute-of-day clock times with modular midnight arithmetic.
//!
//! All schedule rules work on wall-clock times of day; whenever an end time
//! is numerically earlier than its start, it is taken to fall on the
//! following day ("crossing midnight"). [`ClockTime`] keeps that arithmetic
//! in one place so the rule code never touches raw minute math.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ScheduleError;

/// Minutes in one day.
pub const MINUTES_PER_DAY: u16 = 24 * 60;

/// A wall-clock time of day, stored as minutes since midnight in [0, 1440).
///
/// Serializes as a zero-padded "HH:MM" string, which is also the wire
/// format the roster records carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClockTime(u16);

impl ClockTime {
    pub const MIDNIGHT: ClockTime = ClockTime(0);

    /// Build from an hour/minute pair.
    ///
    /// # Panics
    /// Panics when hour >= 24 or minute >= 60. Intended for the literal
    /// policy constants; parsed input goes through [`ClockTime::parse`].
    pub const fn from_hm(hour: u16, minute: u16) -> Self {
        assert!(hour < 24 && minute < 60);
        ClockTime(hour * 60 + minute)
    }

    /// Wrap an arbitrary minute offset (possibly negative or beyond one
    /// day) into a clock time.
    pub fn from_offset(minutes: i32) -> Self {
        ClockTime(minutes.rem_euclid(i32::from(MINUTES_PER_DAY)) as u16)
    }

    /// Minutes since midnight.
    pub fn minute_of_day(self) -> u16 {
        self.0
    }

    pub fn hour(self) -> u16 {
        self.0 / 60
    }

    pub fn minute(self) -> u16 {
        self.0 % 60
    }

    /// Parse "H:MM" or "HH:MM".
    pub fn parse(s: &str) -> Result<Self, ScheduleError> {
        let malformed = || ScheduleError::MalformedTime(s.to_string());
        let (hours, minutes) = s.trim().split_once(':').ok_or_else(malformed)?;
        if hours.is_empty() || hours.len() > 2 || minutes.len() != 2 {
            return Err(malformed());
        }
        let hour: u16 = hours.parse().map_err(|_| malformed())?;
        let minute: u16 = minutes.parse().map_err(|_| malformed())?;
        if hour >= 24 || minute >= 60 {
            return Err(malformed());
        }
        Ok(ClockTime(hour * 60 + minute))
    }

    /// Add minutes, wrapping into [0, 1440).
    pub fn add_minutes(self, minutes: i32) -> Self {
        Self::from_offset(i32::from(self.0) + minutes)
    }

    /// Subtract minutes, wrapping into [0, 1440).
    pub fn sub_minutes(self, minutes: i32) -> Self {
        self.add_minutes(-minutes)
    }

    /// Minutes from `self` forward to `other`, assuming `other` logically
    /// follows within one midnight crossing. Always non-negative.
    pub fn minutes_until(self, other: ClockTime) -> u16 {
        (i32::from(other.0) - i32::from(self.0)).rem_euclid(i32::from(MINUTES_PER_DAY)) as u16
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl FromStr for ClockTime {
    type Err = ScheduleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ClockTime::parse(s)
    }
}

impl Serialize for ClockTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ClockTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        ClockTime::parse(&s).map_err(serde::de::Error::custom)
    }
}
