//! The per-day schedule rule engine.
//!
//! [`build_schedule`] classifies the roster, then walks the interior days
//! of the scaffolded range producing one [`DayPlan`] each. Sleep timing
//! follows a strict precedence: a night shift keys sleep off its actual
//! end plus travel; the day after a night shift resets to the baseline;
//! two days and one day before a night shift the bedtime is delayed in two
//! steps; everything else sleeps on the baseline pattern.
//!
//! All window math runs on minute offsets relative to the plan date's
//! midnight, which may go negative or past 1440; conversion into wall
//! clock happens only when a [`TimeWindow`] is built.

pub mod policy;

use crate::classify::{classify_roster, DayClassification, DayType};
use crate::clock::{ClockTime, MINUTES_PER_DAY};
use crate::error::Result;
use crate::plan::{AvoidLightWindow, DayPlan, TimeWindow};
use crate::roster::{Preferences, ShiftSpec};

/// Compute the full schedule: one plan per displayed calendar day.
///
/// A pure function of its inputs; identical arguments always produce an
/// identical plan sequence.
pub fn build_schedule(prefs: &Preferences, shifts: &[ShiftSpec]) -> Result<Vec<DayPlan>> {
    let days = classify_roster(shifts)?;
    let mut plans = Vec::with_capacity(days.len().saturating_sub(2));
    // The first and last scaffold days exist only as lookbehind/lookahead.
    for idx in 1..days.len().saturating_sub(1) {
        plans.push(plan_day(prefs, &days, idx));
    }
    Ok(plans)
}

fn plan_day(prefs: &Preferences, days: &[DayClassification], idx: usize) -> DayPlan {
    let today = &days[idx];
    let yesterday = &days[idx - 1];
    match (&today.shift, today.day_type) {
        (Some(shift), DayType::Night) => night_plan(prefs, today, shift),
        _ => day_or_off_plan(prefs, today, yesterday),
    }
}

/// Bedtime/wake as offsets from the plan date's midnight. A bedtime
/// numerically earlier than its wake time falls past midnight.
fn bed_wake_offsets(bedtime: ClockTime, wake_time: ClockTime) -> (i32, i32) {
    let mut bed = i32::from(bedtime.minute_of_day());
    if bedtime < wake_time {
        bed += i32::from(MINUTES_PER_DAY);
    }
    (bed, bed + i32::from(bedtime.minutes_until(wake_time)))
}

fn night_plan(prefs: &Preferences, today: &DayClassification, shift: &ShiftSpec) -> DayPlan {
    let start = i32::from(shift.start.minute_of_day());
    let end = start + i32::from(shift.duration_minutes());
    let travel = i32::from(shift.travel_minutes);

    // Sleep keys off the actual shift end plus travel, never the baseline.
    let bed = end + travel;
    let wake = bed + i32::from(prefs.regular_sleep_duration());

    let nap_end = start - policy::NAP_END_BEFORE_SHIFT_MIN;
    let nap_start = nap_end - policy::NAP_DURATION_MIN;

    let pre_nap_cutoff = match shift.start.hour() {
        23 => i32::from(policy::PRE_NAP_CUTOFF_23H_START.minute_of_day()),
        22 => i32::from(policy::PRE_NAP_CUTOFF_22H_START.minute_of_day()),
        _ => nap_start - policy::PRE_NAP_CUTOFF_BEFORE_NAP_MIN,
    };
    let shift_caffeine_end = nap_end + policy::SHIFT_CAFFEINE_DURATION_MIN;

    let caffeine = prefs.caffeine_advice;
    DayPlan {
        date: today.date,
        day_type: today.day_type,
        sleep: TimeWindow::from_offsets(bed, wake),
        caffeine: caffeine.then(|| TimeWindow::from_offsets(nap_end, shift_caffeine_end)),
        no_caffeine_before_nap: caffeine.then(|| {
            TimeWindow::from_offsets(
                i32::from(policy::NIGHT_NO_CAFFEINE_START.minute_of_day()),
                pre_nap_cutoff,
            )
        }),
        no_caffeine: caffeine.then(|| TimeWindow::from_offsets(shift_caffeine_end, bed)),
        nap: Some(TimeWindow::from_offsets(nap_start, nap_end)),
        // A bright-light pulse around the shift start anchors the shifted
        // phase; no avoid-light window on night days.
        seek_light: Some(TimeWindow::from_offsets(
            start - policy::NIGHT_LIGHT_BEFORE_SHIFT_MIN,
            start + policy::NIGHT_LIGHT_AFTER_SHIFT_START_MIN,
        )),
        avoid_light: None,
        work: Some(TimeWindow::from_offsets(start, end)),
        commute_to: Some(TimeWindow::from_offsets(start - travel, start)),
        commute_from: Some(TimeWindow::from_offsets(end, bed)),
    }
}

fn day_or_off_plan(
    prefs: &Preferences,
    today: &DayClassification,
    yesterday: &DayClassification,
) -> DayPlan {
    let recovery = yesterday.day_type == DayType::Night;
    let days_until = today.days_until_night;

    let (bedtime, wake_time) = if recovery {
        // Full reset; the night shift's phase delay does not propagate.
        (prefs.regular_bedtime, prefs.regular_wake_time)
    } else if days_until == Some(2) {
        (
            policy::TRANSITION_TWO_DAYS_BEDTIME,
            policy::TRANSITION_TWO_DAYS_WAKE,
        )
    } else if days_until == Some(1) {
        (
            policy::TRANSITION_ONE_DAY_BEDTIME,
            policy::TRANSITION_ONE_DAY_WAKE,
        )
    } else {
        (prefs.regular_bedtime, prefs.regular_wake_time)
    };
    let (bed, wake) = bed_wake_offsets(bedtime, wake_time);

    // Two days out only the bedtime shifts; on a working day the person
    // still rises at the regular time, and light/caffeine follow that.
    let activity_wake_time = if days_until == Some(2) && today.day_type == DayType::Day {
        prefs.regular_wake_time
    } else {
        wake_time
    };
    let activity_wake = i32::from(activity_wake_time.minute_of_day());

    let caffeine_end = if days_until == Some(2) {
        i32::from(policy::CAFFEINE_END_TWO_DAYS_OUT.minute_of_day())
    } else if days_until == Some(1) {
        i32::from(policy::CAFFEINE_END_ONE_DAY_OUT.minute_of_day())
    } else if today.day_type == DayType::Day {
        i32::from(policy::CAFFEINE_END_DAY_SHIFT.minute_of_day())
    } else {
        bed - policy::CAFFEINE_BEFORE_SLEEP_MIN
    };
    // The day off right before a night shift starts later in the morning.
    let caffeine_start = if today.day_type == DayType::Off && days_until == Some(1) {
        i32::from(policy::CAFFEINE_START_DAY_OFF_BEFORE_NIGHT.minute_of_day())
    } else {
        activity_wake
    };
    let caffeine = (prefs.caffeine_advice && !recovery)
        .then(|| TimeWindow::from_offsets(caffeine_start, caffeine_end));

    let no_caffeine = if !prefs.caffeine_advice {
        None
    } else if recovery && today.day_type == DayType::Off {
        // From an hour before the actual post-shift wake, which is keyed
        // off yesterday's shift end, not today's baseline wake.
        yesterday.shift.as_ref().map(|shift| {
            let yesterday_shift_end = i32::from(shift.start.minute_of_day())
                + i32::from(shift.duration_minutes())
                - i32::from(MINUTES_PER_DAY);
            let recovery_wake = yesterday_shift_end
                + i32::from(shift.travel_minutes)
                + i32::from(prefs.regular_sleep_duration());
            TimeWindow::from_offsets(
                recovery_wake - policy::RECOVERY_NO_CAFFEINE_BEFORE_WAKE_MIN,
                bed,
            )
        })
    } else {
        Some(TimeWindow::from_offsets(caffeine_end, bed))
    };

    // No seek-light target on an Off recovery day: the post-shift sleep
    // occupies the morning the window would anchor to.
    let seek_light = (!(recovery && today.day_type == DayType::Off)).then(|| {
        TimeWindow::from_offsets(
            activity_wake + policy::SEEK_LIGHT_AFTER_WAKE_MIN,
            i32::from(policy::SEEK_LIGHT_END.minute_of_day()),
        )
    });

    let avoid_window = TimeWindow::from_offsets(bed - policy::AVOID_LIGHT_BEFORE_BED_MIN, bed);
    let avoid_light = Some(AvoidLightWindow {
        window: avoid_window,
        suppressed: avoid_window.start == ClockTime::MIDNIGHT,
    });

    let (work, commute_to, commute_from) = match (&today.shift, today.day_type) {
        (Some(shift), DayType::Day) => {
            let start = i32::from(shift.start.minute_of_day());
            let end = start + i32::from(shift.duration_minutes());
            let travel = i32::from(shift.travel_minutes);
            (
                Some(TimeWindow::from_offsets(start, end)),
                Some(TimeWindow::from_offsets(start - travel, start)),
                Some(TimeWindow::from_offsets(end, end + travel)),
            )
        }
        _ => (None, None, None),
    };

    DayPlan {
        date: today.date,
        day_type: today.day_type,
        sleep: TimeWindow::from_offsets(bed, wake),
        caffeine,
        no_caffeine_before_nap: None,
        no_caffeine,
        nap: None,
        seek_light,
        avoid_light,
        work,
        commute_to,
        commute_from,
    }
}
