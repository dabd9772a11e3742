//! Structured per-day schedule output.
//!
//! The planner emits one [`DayPlan`] per displayed calendar day. Windows
//! are built from minute offsets relative to the plan date's midnight, so
//! whether a window runs past midnight is decided once, in the engine, and
//! the formatter never re-derives it.

use chrono::NaiveDate;
use serde::Serialize;

use crate::classify::DayType;
use crate::clock::{ClockTime, MINUTES_PER_DAY};

/// A clock-time window attributed to a plan's calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TimeWindow {
    pub start: ClockTime,
    pub end: ClockTime,
    /// True when the window ends past the plan date's midnight.
    pub ends_next_day: bool,
}

impl TimeWindow {
    /// Build from minute offsets relative to the plan date's midnight.
    ///
    /// Offsets may be negative (a window in the prior evening) or exceed
    /// one day (windows that follow a midnight-crossing shift).
    pub(crate) fn from_offsets(start: i32, end: i32) -> Self {
        TimeWindow {
            start: ClockTime::from_offset(start),
            end: ClockTime::from_offset(end),
            ends_next_day: end >= i32::from(MINUTES_PER_DAY),
        }
    }
}

/// The pre-bed avoid-light window plus its suppression flag.
///
/// A window whose computed start lands exactly on midnight is flagged
/// rather than dropped; the formatter emits nothing for it, but the
/// computed times stay visible to callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AvoidLightWindow {
    pub window: TimeWindow,
    pub suppressed: bool,
}

/// One day's schedule recommendations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayPlan {
    pub date: NaiveDate,
    pub day_type: DayType,
    pub sleep: TimeWindow,
    /// The ok-to-drink window; on night days this is the during-shift dose.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caffeine: Option<TimeWindow>,
    /// Night days: the abstention window from noon to the pre-nap cutoff.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub no_caffeine_before_nap: Option<TimeWindow>,
    /// The abstention window running up to bedtime.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub no_caffeine: Option<TimeWindow>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nap: Option<TimeWindow>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seek_light: Option<TimeWindow>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avoid_light: Option<AvoidLightWindow>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub work: Option<TimeWindow>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commute_to: Option<TimeWindow>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commute_from: Option<TimeWindow>,
}
