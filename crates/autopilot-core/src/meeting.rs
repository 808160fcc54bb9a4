//! Meeting records.
//!
//! This module provides [`Meeting`], a named recurring event with a set
//! of active weekdays, a start time, and a numeric meeting id used as
//! the join target. It also fixes the canonical weekday representation
//! at the persistence boundary.
//!
//! # Weekday numbering
//!
//! In memory, weekdays are always [`chrono::Weekday`]. The persisted
//! schedule stores them as numbers, 1=Monday through 7=Sunday; `0` is
//! also accepted for Sunday on input (both spellings exist in the wild),
//! but is never written back.

use chrono::{Datelike, NaiveDateTime, Timelike, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::ScheduleError;
use crate::time::MeetingTime;

/// Converts a persisted weekday number to a [`Weekday`].
///
/// Accepts 1-7 (Monday first) and 0 as an alias for Sunday.
pub fn weekday_from_number(number: u32) -> Result<Weekday, ScheduleError> {
    match number {
        0 | 7 => Ok(Weekday::Sun),
        1 => Ok(Weekday::Mon),
        2 => Ok(Weekday::Tue),
        3 => Ok(Weekday::Wed),
        4 => Ok(Weekday::Thu),
        5 => Ok(Weekday::Fri),
        6 => Ok(Weekday::Sat),
        other => Err(ScheduleError::InvalidWeekday(other)),
    }
}

/// Converts a [`Weekday`] to its canonical persisted number (1-7).
pub fn weekday_to_number(day: Weekday) -> u32 {
    day.number_from_monday()
}

/// Serde adapter for the numeric `days` field of the persisted format.
mod weekday_numbers {
    use super::*;
    use serde::{Deserializer, Serializer};

    pub fn serialize<S: Serializer>(days: &[Weekday], serializer: S) -> Result<S::Ok, S::Error> {
        days.iter()
            .map(|d| weekday_to_number(*d))
            .collect::<Vec<u32>>()
            .serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Vec<Weekday>, D::Error> {
        Vec::<u32>::deserialize(deserializer)?
            .into_iter()
            .map(|n| weekday_from_number(n).map_err(serde::de::Error::custom))
            .collect()
    }
}

/// A recurring meeting in the weekly schedule.
///
/// `wake` and `is_right_now` are derived by the resolver for a concrete
/// occurrence; they are never persisted as source of truth.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meeting {
    /// Optional display label.
    #[serde(default)]
    pub name: Option<String>,
    /// The weekdays on which this meeting recurs.
    #[serde(with = "weekday_numbers")]
    pub days: Vec<Weekday>,
    /// The time-of-day at which it starts.
    pub time: MeetingTime,
    /// Numeric meeting id; the join target and the identity key when
    /// matching two meeting references (see [`same_zoom`](Self::same_zoom)).
    pub zoom: u64,
    /// The absolute date-time at which the machine should next wake for
    /// this occurrence. Computed on demand by the resolver.
    #[serde(skip)]
    pub wake: Option<NaiveDateTime>,
    /// Whether the joinable window has already started, in which case
    /// the caller skips the wait phase entirely.
    #[serde(skip)]
    pub is_right_now: bool,
}

impl Meeting {
    /// Creates a new meeting with no display name.
    pub fn new(days: Vec<Weekday>, time: MeetingTime, zoom: u64) -> Self {
        Self {
            name: None,
            days,
            time,
            zoom,
            wake: None,
            is_right_now: false,
        }
    }

    /// Builder method to set the display name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Returns true if this meeting recurs on the given weekday.
    pub fn occurs_on(&self, day: Weekday) -> bool {
        self.days.contains(&day)
    }

    /// Returns true if `other` refers to the same meeting, i.e. both
    /// carry the same `zoom` id.
    ///
    /// This is an explicit key comparison rather than an `Eq` impl:
    /// structural equality and schedule identity are different things,
    /// and conflating them surprises generic collection code.
    pub fn same_zoom(&self, other: &Meeting) -> bool {
        self.zoom == other.zoom
    }

    /// Formats the active weekdays as short names, e.g. `"Mon, Wed, Fri"`.
    pub fn format_weekdays(&self) -> String {
        let names: Vec<&str> = self
            .days
            .iter()
            .map(|d| match d {
                Weekday::Mon => "Mon",
                Weekday::Tue => "Tue",
                Weekday::Wed => "Wed",
                Weekday::Thu => "Thu",
                Weekday::Fri => "Fri",
                Weekday::Sat => "Sat",
                Weekday::Sun => "Sun",
            })
            .collect();
        names.join(", ")
    }

    /// Formats the wake time as `M/D/YYYY H:MM:00`, the form consumed
    /// by the wake-scheduling collaborator. Returns `None` when no wake
    /// time has been resolved.
    pub fn wake_string(&self) -> Option<String> {
        self.wake.map(|wake| {
            format!(
                "{}/{}/{} {}:{:02}:00",
                wake.month(),
                wake.day(),
                wake.year(),
                wake.hour(),
                wake.minute()
            )
        })
    }

    /// Infers the wake time for a meeting given directly by the caller
    /// (time and id as arguments) rather than resolved from a schedule:
    /// today if the start time is still ahead of `now`, tomorrow
    /// otherwise. A meeting already flagged as right-now needs no wake.
    pub fn infer_wake(&mut self, now: NaiveDateTime) {
        if self.is_right_now {
            return;
        }
        let mut date = now.date();
        if self.time.to_naive_time() <= now.time() {
            date += chrono::Duration::days(1);
        }
        self.wake = Some(self.time.on_date(date));
    }
}
