//! Error types for the schedule core.

use thiserror::Error;

/// Result type for schedule operations.
pub type ScheduleResult<T> = Result<T, ScheduleError>;

/// Errors that can occur while constructing or parsing schedule data.
///
/// "No meeting found" is deliberately *not* an error: resolver lookups
/// return `Option` so callers can tell an empty result apart from bad
/// input (see [`crate::Schedule`]).
#[derive(Debug, Error)]
pub enum ScheduleError {
    /// Hour component outside 0-23.
    #[error("hour out of range: {0} (expected 0-23)")]
    HourOutOfRange(u32),

    /// Minute component outside 0-59.
    #[error("minute out of range: {0} (expected 0-59)")]
    MinuteOutOfRange(u32),

    /// A time string that is not in `H:MM` or `HH:MM` form.
    #[error("invalid time string: {0:?} (expected H:MM or HH:MM, 24-hour)")]
    InvalidTimeString(String),

    /// A persisted weekday number outside 0-7.
    #[error("invalid weekday number: {0} (expected 1-7, or 0 for Sunday)")]
    InvalidWeekday(u32),

    /// No meeting id could be extracted from the given input.
    #[error("no meeting id found in {0:?}")]
    InvalidMeetingId(String),
}
