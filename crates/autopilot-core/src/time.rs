//! Wall-clock meeting times.
//!
//! This module provides [`MeetingTime`], the time-of-day at which a
//! recurring meeting starts. It is deliberately minimal: hour and minute
//! only, range-checked at construction, with helpers for ordering,
//! 12-hour display, and conversion to [`chrono`] types for comparisons
//! against the caller-supplied "now".

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ScheduleError;

/// The time-of-day at which a meeting starts.
///
/// Invariant: `hour` is always 0-23 and `minute` 0-59; construction
/// fails otherwise, it never clamps. Persisted as a two-element
/// `[hour, minute]` array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MeetingTime {
    hour: u32,
    minute: u32,
}

impl MeetingTime {
    /// Creates a new meeting time.
    ///
    /// # Errors
    ///
    /// Returns [`ScheduleError::HourOutOfRange`] or
    /// [`ScheduleError::MinuteOutOfRange`] for out-of-range components.
    pub fn new(hour: u32, minute: u32) -> Result<Self, ScheduleError> {
        if hour > 23 {
            return Err(ScheduleError::HourOutOfRange(hour));
        }
        if minute > 59 {
            return Err(ScheduleError::MinuteOutOfRange(minute));
        }
        Ok(Self { hour, minute })
    }

    /// Creates a meeting time from a [`NaiveTime`], discarding seconds.
    pub fn from_naive(time: NaiveTime) -> Self {
        use chrono::Timelike;
        Self {
            hour: time.hour(),
            minute: time.minute(),
        }
    }

    /// The hour component (0-23).
    pub fn hour(&self) -> u32 {
        self.hour
    }

    /// The minute component (0-59).
    pub fn minute(&self) -> u32 {
        self.minute
    }

    /// The time one minute earlier, wrapping 00:00 back to 23:59.
    pub fn previous_minute(&self) -> Self {
        match (self.hour, self.minute) {
            (0, 0) => Self {
                hour: 23,
                minute: 59,
            },
            (h, 0) => Self {
                hour: h - 1,
                minute: 59,
            },
            (h, m) => Self {
                hour: h,
                minute: m - 1,
            },
        }
    }

    /// The time one minute later, wrapping 23:59 forward to 00:00.
    ///
    /// Inverse of [`previous_minute`](Self::previous_minute).
    pub fn next_minute(&self) -> Self {
        match (self.hour, self.minute) {
            (23, 59) => Self { hour: 0, minute: 0 },
            (h, 59) => Self {
                hour: h + 1,
                minute: 0,
            },
            (h, m) => Self {
                hour: h,
                minute: m + 1,
            },
        }
    }

    /// A continuous sort key (`hour + minute / 60`) for ordering a
    /// day's meetings by start time.
    pub fn sort_key(&self) -> f64 {
        f64::from(self.hour) + f64::from(self.minute) / 60.0
    }

    /// Converts to 12-hour display form: `(hour, minute, is_pm)`.
    ///
    /// Midnight maps to `(12, 0, false)` and noon to `(12, 0, true)`.
    pub fn as_12_hour(&self) -> (u32, u32, bool) {
        let is_pm = self.hour > 11;
        let hour = (self.hour + 11) % 12 + 1;
        (hour, self.minute, is_pm)
    }

    /// Converts to a [`NaiveTime`] (seconds set to zero).
    pub fn to_naive_time(&self) -> NaiveTime {
        NaiveTime::from_hms_opt(self.hour, self.minute, 0).expect("hour and minute range-checked")
    }

    /// Combines this time with a calendar date.
    pub fn on_date(&self, date: NaiveDate) -> NaiveDateTime {
        date.and_time(self.to_naive_time())
    }
}

impl fmt::Display for MeetingTime {
    /// Formats as `H:MM`: hour unpadded, minute two digits. This is the
    /// form embedded in wake timestamps.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{:02}", self.hour, self.minute)
    }
}

impl FromStr for MeetingTime {
    type Err = ScheduleError;

    /// Parses `H:MM` or `HH:MM` (24-hour).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ScheduleError::InvalidTimeString(s.to_string());
        let (hour, minute) = s.trim().split_once(':').ok_or_else(invalid)?;
        let hour: u32 = hour.parse().map_err(|_| invalid())?;
        let minute: u32 = minute.parse().map_err(|_| invalid())?;
        Self::new(hour, minute)
    }
}

impl Serialize for MeetingTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        (self.hour, self.minute).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for MeetingTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let (hour, minute) = <(u32, u32)>::deserialize(deserializer)?;
        Self::new(hour, minute).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn time(h: u32, m: u32) -> MeetingTime {
        MeetingTime::new(h, m).unwrap()
    }

    mod construction {
        use super::*;

        #[test]
        fn valid_range() {
            assert!(MeetingTime::new(0, 0).is_ok());
            assert!(MeetingTime::new(23, 59).is_ok());
        }

        #[test]
        fn hour_out_of_range() {
            assert!(matches!(
                MeetingTime::new(24, 0),
                Err(ScheduleError::HourOutOfRange(24))
            ));
        }

        #[test]
        fn minute_out_of_range() {
            assert!(matches!(
                MeetingTime::new(12, 60),
                Err(ScheduleError::MinuteOutOfRange(60))
            ));
        }

        #[test]
        fn from_naive_drops_seconds() {
            let t = MeetingTime::from_naive(NaiveTime::from_hms_opt(9, 30, 45).unwrap());
            assert_eq!(t, time(9, 30));
        }
    }

    mod minute_arithmetic {
        use super::*;

        #[test]
        fn previous_within_hour() {
            assert_eq!(time(9, 30).previous_minute(), time(9, 29));
        }

        #[test]
        fn previous_across_hour() {
            assert_eq!(time(9, 0).previous_minute(), time(8, 59));
        }

        #[test]
        fn previous_wraps_midnight() {
            assert_eq!(time(0, 0).previous_minute(), time(23, 59));
        }

        #[test]
        fn next_is_inverse_of_previous() {
            for (h, m) in [(0, 0), (0, 1), (9, 0), (12, 30), (23, 59)] {
                let t = time(h, m);
                assert_eq!(t.previous_minute().next_minute(), t);
                assert_eq!(t.next_minute().previous_minute(), t);
            }
        }

        #[test]
        fn next_wraps_end_of_day() {
            assert_eq!(time(23, 59).next_minute(), time(0, 0));
        }
    }

    mod ordering {
        use super::*;

        #[test]
        fn sort_key_orders_by_time() {
            assert!(time(9, 30).sort_key() < time(10, 0).sort_key());
            assert!(time(9, 0).sort_key() < time(9, 1).sort_key());
            assert_eq!(time(9, 30).sort_key(), 9.5);
        }

        #[test]
        fn derived_ord_matches_sort_key() {
            let mut by_ord = vec![time(10, 0), time(9, 30), time(9, 0), time(23, 59)];
            let mut by_key = by_ord.clone();
            by_ord.sort();
            by_key.sort_by(|a, b| a.sort_key().total_cmp(&b.sort_key()));
            assert_eq!(by_ord, by_key);
        }
    }

    mod display {
        use super::*;

        #[test]
        fn twelve_hour_conversion() {
            assert_eq!(time(0, 0).as_12_hour(), (12, 0, false));
            assert_eq!(time(9, 5).as_12_hour(), (9, 5, false));
            assert_eq!(time(12, 0).as_12_hour(), (12, 0, true));
            assert_eq!(time(15, 30).as_12_hour(), (3, 30, true));
            assert_eq!(time(23, 59).as_12_hour(), (11, 59, true));
        }

        #[test]
        fn minute_is_zero_padded() {
            assert_eq!(time(9, 5).to_string(), "9:05");
            assert_eq!(time(9, 0).to_string(), "9:00");
            assert_eq!(time(14, 30).to_string(), "14:30");
        }
    }

    mod parsing {
        use super::*;

        #[test]
        fn parses_both_hour_widths() {
            assert_eq!("9:05".parse::<MeetingTime>().unwrap(), time(9, 5));
            assert_eq!("09:05".parse::<MeetingTime>().unwrap(), time(9, 5));
            assert_eq!("23:59".parse::<MeetingTime>().unwrap(), time(23, 59));
        }

        #[test]
        fn rejects_garbage() {
            assert!("nine".parse::<MeetingTime>().is_err());
            assert!("9".parse::<MeetingTime>().is_err());
            assert!("9:5:0".parse::<MeetingTime>().is_err());
        }

        #[test]
        fn rejects_out_of_range() {
            assert!(matches!(
                "24:00".parse::<MeetingTime>(),
                Err(ScheduleError::HourOutOfRange(24))
            ));
        }
    }

    mod serde_format {
        use super::*;

        #[test]
        fn serializes_as_pair() {
            let json = serde_json::to_string(&time(9, 30)).unwrap();
            assert_eq!(json, "[9,30]");
        }

        #[test]
        fn roundtrip() {
            let t = time(23, 59);
            let json = serde_json::to_string(&t).unwrap();
            let parsed: MeetingTime = serde_json::from_str(&json).unwrap();
            assert_eq!(t, parsed);
        }

        #[test]
        fn rejects_out_of_range_pair() {
            assert!(serde_json::from_str::<MeetingTime>("[24,0]").is_err());
            assert!(serde_json::from_str::<MeetingTime>("[9,60]").is_err());
        }
    }
}
