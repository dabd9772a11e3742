//! Error types for phaseshift-core.
//!
//! Every failure here is an input-contract violation caught before the
//! per-day planning loop runs. The computation itself is pure and
//! deterministic, so there is no partial output and nothing to retry: a
//! malformed record anywhere in the roster fails the whole run rather than
//! letting a skipped day read downstream as "no shift = day off".

use chrono::NaiveDate;
use thiserror::Error;

/// Error type for schedule generation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    /// A clock time did not parse as "H:MM" or "HH:MM".
    #[error("malformed time {0:?}: expected \"H:MM\" or \"HH:MM\"")]
    MalformedTime(String),

    /// A date did not resolve to a calendar date.
    #[error("malformed date {0:?}: expected \"YYYY-MM-DD\"")]
    MalformedDate(String),

    /// A baseline sleep pattern did not split into two clock times.
    #[error("malformed sleep pattern {0:?}: expected \"HH:MM-HH:MM\"")]
    MalformedSleepPattern(String),

    /// The roster contains no shifts at all.
    #[error("empty roster: at least one shift is required")]
    EmptyRoster,

    /// The scaffolded date window around the roster is inverted or falls
    /// outside the representable calendar range.
    #[error("invalid date range around {0}")]
    InvalidRange(NaiveDate),
}

/// Result type alias for ScheduleError.
pub type Result<T, E = ScheduleError> = std::result::Result<T, E>;
