//! Plain-text rendering of day plans.
//!
//! A side-effect-free final pass: blank-line-separated day blocks, one
//! line per window as `"<label>: <start> - <end>"`, with a lowercase
//! short-date suffix when the window runs past the plan date's midnight.
//! Formatting assumes upstream correctness and never re-checks arithmetic.

use chrono::{Datelike, NaiveDate};

use crate::classify::DayType;
use crate::plan::{DayPlan, TimeWindow};

const SHORT_MONTHS: [&str; 12] = [
    "jan", "feb", "mar", "apr", "may", "jun", "jul", "aug", "sep", "oct", "nov", "dec",
];

fn short_date(date: NaiveDate) -> String {
    format!("{} {}", SHORT_MONTHS[date.month0() as usize], date.day())
}

fn window_line(plan_date: NaiveDate, label: &str, window: TimeWindow) -> String {
    let mut line = format!("{label}: {} - {}", window.start, window.end);
    if window.ends_next_day {
        if let Some(next) = plan_date.succ_opt() {
            line.push(' ');
            line.push_str(&short_date(next));
        }
    }
    line
}

fn render_day(plan: &DayPlan) -> String {
    let mut lines = Vec::new();
    let mut push = |label: &str, window: Option<TimeWindow>| {
        if let Some(window) = window {
            lines.push(window_line(plan.date, label, window));
        }
    };

    match plan.day_type {
        DayType::Night => {
            push("no caffeine", plan.no_caffeine_before_nap);
            push("nap", plan.nap);
            push("caffeine", plan.caffeine);
            push("see bright light", plan.seek_light);
            push("to work", plan.commute_to);
            push("work", plan.work);
            push("no caffeine", plan.no_caffeine);
            push("from work", plan.commute_from);
        }
        DayType::Day | DayType::Off => {
            push("caffeine", plan.caffeine);
            push("see bright light", plan.seek_light);
            push("to work", plan.commute_to);
            push("work", plan.work);
            push("no caffeine", plan.no_caffeine);
            push("from work", plan.commute_from);
            let avoid = plan
                .avoid_light
                .filter(|avoid| !avoid.suppressed)
                .map(|avoid| avoid.window);
            push("avoid bright light", avoid);
        }
    }
    push("sleep", Some(plan.sleep));

    lines.join("\n")
}

/// Render the ordered plan sequence into blank-line-separated day blocks.
pub fn render_schedule(plans: &[DayPlan]) -> String {
    plans.iter().map(render_day).collect::<Vec<_>>().join("\n\n")
}
