//! Day classification over the roster's scaffolded date range.
//!
//! The classifier runs in two passes: first every day in
//! [min shift date − 1, max shift date + 2] is typed as day-shift,
//! night-shift, or off; then a single reverse sweep fills in each day's
//! distance to the nearest night shift strictly ahead of it. The planner
//! never rescans the roster itself.

use chrono::NaiveDate;
use serde::Serialize;

use crate::error::{Result, ScheduleError};
use crate::roster::ShiftSpec;

/// What kind of day a calendar date is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DayType {
    Day,
    Night,
    Off,
}

/// Classification of one calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayClassification {
    pub date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shift: Option<ShiftSpec>,
    pub day_type: DayType,
    /// Distance in days to the nearest Night day strictly after this one;
    /// None when no night shift follows. Never wraps backward.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub days_until_night: Option<u32>,
}

/// A shift counts as a night shift when it wraps past midnight, starts in
/// the late evening, or ends in the early morning.
pub fn is_night_shift(shift: &ShiftSpec) -> bool {
    let start_hour = shift.start.hour();
    let end_hour = shift.end.hour();
    end_hour < start_hour || start_hour >= 20 || end_hour <= 8
}

/// Classify every day in [min shift date − 1, max shift date + 2].
///
/// The extra scaffold days give the planner lookbehind for recovery and
/// lookahead past the last shift; callers display only the interior days.
pub fn classify_roster(shifts: &[ShiftSpec]) -> Result<Vec<DayClassification>> {
    let min = shifts
        .iter()
        .map(|s| s.date)
        .min()
        .ok_or(ScheduleError::EmptyRoster)?;
    let max = shifts
        .iter()
        .map(|s| s.date)
        .max()
        .ok_or(ScheduleError::EmptyRoster)?;

    let start = min.pred_opt().ok_or(ScheduleError::InvalidRange(min))?;
    let end = max
        .succ_opt()
        .and_then(|d| d.succ_opt())
        .ok_or(ScheduleError::InvalidRange(max))?;
    if start > end {
        return Err(ScheduleError::InvalidRange(start));
    }

    let mut days = Vec::new();
    let mut date = start;
    while date <= end {
        let shift = shifts.iter().find(|s| s.date == date).cloned();
        let day_type = match &shift {
            Some(s) if is_night_shift(s) => DayType::Night,
            Some(_) => DayType::Day,
            None => DayType::Off,
        };
        days.push(DayClassification {
            date,
            shift,
            day_type,
            days_until_night: None,
        });
        date = date.succ_opt().ok_or(ScheduleError::InvalidRange(end))?;
    }

    // Reverse sweep: each day's distance to the nearest Night day ahead.
    let mut next_night: Option<usize> = None;
    for idx in (0..days.len()).rev() {
        days[idx].days_until_night = next_night.map(|night| (night - idx) as u32);
        if days[idx].day_type == DayType::Night {
            next_night = Some(idx);
        }
    }

    Ok(days)
}
