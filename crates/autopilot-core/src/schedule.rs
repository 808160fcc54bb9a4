//! Weekly schedule resolution.
//!
//! This module provides [`Schedule`], an owned list of [`Meeting`]
//! records with the query operations the rest of the program is built
//! on:
//!
//! - [`meetings_on`](Schedule::meetings_on): a single day's meetings,
//!   ordered by start time
//! - [`find_next`](Schedule::find_next): the first upcoming meeting,
//!   scanning forward across weekday boundaries
//! - [`find_last`](Schedule::find_last): the most recently started
//!   meeting today
//! - [`find_occurrence_of`](Schedule::find_occurrence_of): the next
//!   calendar occurrence of a specific meeting
//!
//! The resolver is a pure query over the owned list: the caller
//! supplies "now", nothing is read from the environment, and nothing is
//! persisted. Callers that edit the schedule construct a new one.

use chrono::{Datelike, Duration, NaiveDateTime, NaiveTime, Weekday};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::meeting::Meeting;

/// The forward search examines at most this many distinct weekdays
/// before giving up. A fully-passed schedule is indistinguishable from
/// an empty one at that point.
const SEARCH_HORIZON_DAYS: i64 = 7;

/// A weekly recurring schedule of meetings.
///
/// Serializes transparently as the persisted JSON array of meeting
/// objects. Constructed once from externally supplied data; there is no
/// process-wide cache and no reload primitive.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Schedule {
    meetings: Vec<Meeting>,
}

impl Schedule {
    /// Creates a schedule from a list of meetings, keeping their order.
    pub fn new(meetings: Vec<Meeting>) -> Self {
        Self { meetings }
    }

    /// The meetings in their original (persisted) order.
    pub fn meetings(&self) -> &[Meeting] {
        &self.meetings
    }

    /// Number of meetings in the schedule.
    pub fn len(&self) -> usize {
        self.meetings.len()
    }

    /// Returns true if the schedule has no meetings at all.
    pub fn is_empty(&self) -> bool {
        self.meetings.is_empty()
    }

    /// All meetings recurring on `day`, ascending by start time.
    ///
    /// The sort is stable: meetings sharing a start time keep their
    /// original relative order.
    pub fn meetings_on(&self, day: Weekday) -> Vec<&Meeting> {
        let mut found: Vec<&Meeting> = self.meetings.iter().filter(|m| m.occurs_on(day)).collect();
        found.sort_by(|a, b| a.time.sort_key().total_cmp(&b.time.sort_key()));
        found
    }

    /// All meetings recurring on `day`, descending by start time, ties
    /// keeping their original relative order.
    fn meetings_on_descending(&self, day: Weekday) -> Vec<&Meeting> {
        let mut found: Vec<&Meeting> = self.meetings.iter().filter(|m| m.occurs_on(day)).collect();
        found.sort_by(|a, b| b.time.sort_key().total_cmp(&a.time.sort_key()));
        found
    }

    /// Finds the first meeting strictly after `now`, scanning forward
    /// day by day from today's weekday.
    ///
    /// The returned clone has `wake` set to the occurrence's absolute
    /// date-time. Returns `None` when no meeting starts within the
    /// search horizon, which callers treat the same as an empty
    /// schedule.
    pub fn find_next(&self, now: NaiveDateTime) -> Option<Meeting> {
        self.lookup_forward(now, None)
    }

    /// Finds the next calendar occurrence of `target`, matched by zoom
    /// id.
    ///
    /// Returns a clone of `target` itself with `wake` populated, not
    /// the instance stored in the schedule. Returns `None` when no
    /// scheduled meeting carries the target's id within the search
    /// horizon.
    pub fn find_occurrence_of(&self, target: &Meeting, now: NaiveDateTime) -> Option<Meeting> {
        self.lookup_forward(now, Some(target))
    }

    /// Shared forward scan behind [`find_next`](Self::find_next) and
    /// [`find_occurrence_of`](Self::find_occurrence_of).
    ///
    /// The time bound starts at `now` and is reset to midnight once the
    /// first day has been examined. The comparison stays strict
    /// throughout, so a meeting starting exactly now is not "next".
    fn lookup_forward(&self, now: NaiveDateTime, target: Option<&Meeting>) -> Option<Meeting> {
        let mut weekday = now.date().weekday();
        let mut bound = now.time();

        for day_offset in 0..SEARCH_HORIZON_DAYS {
            trace!(weekday = %weekday, day_offset, "examining day");
            for candidate in self.meetings_on(weekday) {
                if candidate.time.to_naive_time() <= bound {
                    continue;
                }
                if let Some(target) = target {
                    if !target.same_zoom(candidate) {
                        continue;
                    }
                }
                // The occurrence belongs to the target reference when
                // one was given, down to its own start time.
                let mut resolved = target.cloned().unwrap_or_else(|| candidate.clone());
                let date = now.date() + Duration::days(day_offset);
                let wake = resolved.time.on_date(date);
                resolved.wake = Some(wake);
                debug!(
                    zoom = resolved.zoom,
                    wake = %wake,
                    day_offset,
                    "resolved upcoming meeting"
                );
                return Some(resolved);
            }
            bound = NaiveTime::MIN;
            weekday = weekday.succ();
        }

        debug!("no meeting within the search horizon");
        None
    }

    /// Finds the most recently started meeting on the current weekday:
    /// the greatest start time less than or equal to `now`'s
    /// time-of-day. A meeting starting exactly now already counts.
    ///
    /// Never looks at prior days; if nothing has started today the
    /// result is `None`. The returned clone has `is_right_now` set.
    pub fn find_last(&self, now: NaiveDateTime) -> Option<Meeting> {
        let today = now.date().weekday();
        for candidate in self.meetings_on_descending(today) {
            if candidate.time.to_naive_time() <= now.time() {
                let mut resolved = candidate.clone();
                resolved.is_right_now = true;
                debug!(zoom = resolved.zoom, "meeting already started today");
                return Some(resolved);
            }
        }
        None
    }

    /// Picks the meeting to join when the caller gave no explicit
    /// target: the most recently started meeting if it began fewer than
    /// `threshold_minutes` ago, otherwise the next upcoming one.
    pub fn resolve_auto(&self, now: NaiveDateTime, threshold_minutes: i64) -> Option<Meeting> {
        if let Some(last) = self.find_last(now) {
            let started = last.time.on_date(now.date());
            if (now - started).num_minutes() < threshold_minutes {
                return Some(last);
            }
        }
        self.find_next(now)
    }
}
