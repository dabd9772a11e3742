//! Tunable clock-time policy for the schedule rules.
//!
//! These values are fixed recommendations, not outputs of a circadian
//! model. They live in one table so the rule code in the planner stays
//! free of magic numbers.

use crate::clock::ClockTime;

/// First preparatory delay, two days before a night shift.
pub const TRANSITION_TWO_DAYS_BEDTIME: ClockTime = ClockTime::from_hm(1, 0);
pub const TRANSITION_TWO_DAYS_WAKE: ClockTime = ClockTime::from_hm(10, 0);

/// Second, larger delay the day before a night shift.
pub const TRANSITION_ONE_DAY_BEDTIME: ClockTime = ClockTime::from_hm(3, 0);
pub const TRANSITION_ONE_DAY_WAKE: ClockTime = ClockTime::from_hm(12, 0);

/// Caffeine cutoffs by day role.
pub const CAFFEINE_END_TWO_DAYS_OUT: ClockTime = ClockTime::from_hm(19, 0);
pub const CAFFEINE_END_ONE_DAY_OUT: ClockTime = ClockTime::from_hm(18, 0);
pub const CAFFEINE_END_DAY_SHIFT: ClockTime = ClockTime::from_hm(14, 0);
/// Fallback cutoff: stop this many minutes before bedtime.
pub const CAFFEINE_BEFORE_SLEEP_MIN: i32 = 8 * 60;
/// Later caffeine start on the day off right before a night shift.
pub const CAFFEINE_START_DAY_OFF_BEFORE_NIGHT: ClockTime = ClockTime::from_hm(10, 0);

/// Night days: abstention starts at noon.
pub const NIGHT_NO_CAFFEINE_START: ClockTime = ClockTime::from_hm(12, 0);
/// Fixed pre-nap cutoffs for the common night-shift start hours.
pub const PRE_NAP_CUTOFF_23H_START: ClockTime = ClockTime::from_hm(21, 0);
pub const PRE_NAP_CUTOFF_22H_START: ClockTime = ClockTime::from_hm(20, 0);
/// Generic pre-nap cutoff: this many minutes before the nap starts.
pub const PRE_NAP_CUTOFF_BEFORE_NAP_MIN: i32 = 60;

/// Pre-shift nap geometry.
pub const NAP_DURATION_MIN: i32 = 3 * 60;
pub const NAP_END_BEFORE_SHIFT_MIN: i32 = 60;
/// During-shift caffeine runs this long from the nap's end.
pub const SHIFT_CAFFEINE_DURATION_MIN: i32 = 210;

/// Light exposure.
pub const SEEK_LIGHT_AFTER_WAKE_MIN: i32 = 30;
pub const SEEK_LIGHT_END: ClockTime = ClockTime::from_hm(17, 30);
pub const NIGHT_LIGHT_BEFORE_SHIFT_MIN: i32 = 30;
pub const NIGHT_LIGHT_AFTER_SHIFT_START_MIN: i32 = 30;
pub const AVOID_LIGHT_BEFORE_BED_MIN: i32 = 60;

/// Recovery days: abstention starts this many minutes before the actual
/// post-shift wake.
pub const RECOVERY_NO_CAFFEINE_BEFORE_WAKE_MIN: i32 = 60;
