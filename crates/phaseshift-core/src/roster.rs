//! Roster and preference inputs.
//!
//! Two layers: the wire-facing records ([`ShiftRecord`],
//! [`PreferencesRecord`]) deserialize straight from the roster document
//! with string-typed dates and times, and `resolve()` converts them into
//! the typed model, parsing every field up front so a malformed record
//! fails the whole run before any planning happens.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::clock::ClockTime;
use crate::error::{Result, ScheduleError};

/// A single work shift. An end earlier than the start (by wall clock)
/// means the shift spans midnight.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftSpec {
    pub date: NaiveDate,
    pub start: ClockTime,
    pub end: ClockTime,
    pub travel_minutes: u16,
}

impl ShiftSpec {
    /// Shift length in minutes, crossing at most one midnight.
    pub fn duration_minutes(&self) -> u16 {
        self.start.minutes_until(self.end)
    }

    pub fn crosses_midnight(&self) -> bool {
        self.end <= self.start
    }
}

/// Natural bias toward morning or evening alertness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Chronotype {
    #[serde(rename = "early bird")]
    EarlyBird,
    #[serde(rename = "night owl")]
    NightOwl,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Male,
    Female,
}

/// Personal parameters supplying the baseline sleep target and whether
/// caffeine windows are emitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Preferences {
    pub chronotype: Chronotype,
    pub regular_bedtime: ClockTime,
    pub regular_wake_time: ClockTime,
    pub sex: Sex,
    pub age: u8,
    pub caffeine_advice: bool,
    pub melatonin_recommended: bool,
    pub get_ready_minutes: u16,
}

impl Preferences {
    /// Baseline sleep length, reused as the target duration for
    /// post-night-shift sleep.
    pub fn regular_sleep_duration(&self) -> u16 {
        self.regular_bedtime.minutes_until(self.regular_wake_time)
    }
}

/// Wire-facing shift record with unparsed date and time fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShiftRecord {
    /// Calendar date, "YYYY-MM-DD".
    pub date: String,
    /// "H:MM" or "HH:MM".
    pub start_time: String,
    pub end_time: String,
    #[serde(default)]
    pub travel_minutes: u16,
}

impl ShiftRecord {
    /// Parse into a typed [`ShiftSpec`].
    pub fn resolve(&self) -> Result<ShiftSpec> {
        let date = NaiveDate::parse_from_str(self.date.trim(), "%Y-%m-%d")
            .map_err(|_| ScheduleError::MalformedDate(self.date.clone()))?;
        Ok(ShiftSpec {
            date,
            start: ClockTime::parse(&self.start_time)?,
            end: ClockTime::parse(&self.end_time)?,
            travel_minutes: self.travel_minutes,
        })
    }
}

/// Resolve a whole shift list, failing on the first malformed record.
pub fn resolve_shifts(records: &[ShiftRecord]) -> Result<Vec<ShiftSpec>> {
    records.iter().map(ShiftRecord::resolve).collect()
}

/// Wire-facing preferences record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreferencesRecord {
    pub chronotype: Chronotype,
    /// Baseline sleep on days off, "HH:MM-HH:MM" (bedtime-wake).
    pub sleep_pattern: String,
    pub sex: Sex,
    pub age: u8,
    #[serde(default = "default_true")]
    pub caffeine_advice: bool,
    #[serde(default)]
    pub use_melatonin: bool,
    #[serde(default = "default_get_ready_minutes")]
    pub get_ready_minutes: u16,
}

fn default_true() -> bool {
    true
}

fn default_get_ready_minutes() -> u16 {
    30
}

impl PreferencesRecord {
    /// Parse into typed [`Preferences`], splitting the sleep pattern.
    pub fn resolve(&self) -> Result<Preferences> {
        let (bedtime, wake_time) = self
            .sleep_pattern
            .split_once('-')
            .ok_or_else(|| ScheduleError::MalformedSleepPattern(self.sleep_pattern.clone()))?;
        Ok(Preferences {
            chronotype: self.chronotype,
            regular_bedtime: ClockTime::parse(bedtime)?,
            regular_wake_time: ClockTime::parse(wake_time)?,
            sex: self.sex,
            age: self.age,
            caffeine_advice: self.caffeine_advice,
            melatonin_recommended: self.use_melatonin,
            get_ready_minutes: self.get_ready_minutes,
        })
    }
}
