//! # Phaseshift Core Library
//!
//! Schedule-generation logic for Phaseshift, a planner for workers whose
//! rosters mix day shifts, night shifts, and days off. Given a roster and
//! a preference record it computes, for every calendar day, recommended
//! sleep, caffeine, light-exposure, nap, and work/commute windows --
//! including the pre-emptive bedtime delays in the two days before a night
//! shift and the baseline reset on the day after one.
//!
//! ## Architecture
//!
//! - **Clock arithmetic**: minute-of-day times with modular
//!   midnight-crossing arithmetic ([`ClockTime`])
//! - **Classifier**: a two-pass scan that types every day in the roster's
//!   scaffolded date range and precomputes each day's distance to the next
//!   night shift ([`classify_roster`])
//! - **Planner**: the per-day rule engine producing structured
//!   [`DayPlan`]s ([`build_schedule`])
//! - **Formatter**: a side-effect-free text rendering of the plans
//!   ([`render_schedule`])
//!
//! The whole computation is a pure function of (preferences, roster):
//! no I/O, no shared state, deterministic output. Malformed input fails
//! the entire run before any planning happens.

pub mod classify;
pub mod clock;
pub mod error;
pub mod format;
pub mod plan;
pub mod planner;
pub mod roster;

pub use classify::{classify_roster, is_night_shift, DayClassification, DayType};
pub use clock::ClockTime;
pub use error::{Result, ScheduleError};
pub use format::render_schedule;
pub use plan::{AvoidLightWindow, DayPlan, TimeWindow};
pub use planner::build_schedule;
pub use roster::{
    resolve_shifts, Chronotype, Preferences, PreferencesRecord, Sex, ShiftRecord, ShiftSpec,
};
