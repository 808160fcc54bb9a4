//! User settings.
//!
//! The settings model behind the persisted `userconfig.json`. Mutation
//! goes through [`Settings::apply`] so the change is visible at the
//! call site; writing the file back is the caller's job and happens as
//! a separate, explicit step.

use serde::{Deserialize, Serialize};

/// User-tunable behaviour of the joining flow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Seconds between clock polls while waiting for the meeting.
    pub interval: u64,
    /// Join the most recently started meeting instead of the next one
    /// when it began fewer than this many minutes ago.
    pub threshold: i64,
    /// Ask for the user password so the display wake can be scheduled
    /// with `pmset`; the fallback path drives System Preferences.
    pub ask_pass: bool,
    /// Confirm the join-with-video prompt after entering the meeting.
    pub video: bool,
    /// Go fullscreen once the meeting is joined.
    pub fullscreen: bool,
    /// Close the main conferencing window left behind after joining.
    pub close_menu: bool,
    /// Delete stray screenshots taken during pixel matching.
    pub remove_ss: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            interval: 30,
            threshold: 10,
            ask_pass: true,
            video: true,
            fullscreen: true,
            close_menu: true,
            remove_ss: false,
        }
    }
}

/// A single settings change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsUpdate {
    Interval(u64),
    Threshold(i64),
    AskPass(bool),
    Video(bool),
    Fullscreen(bool),
    CloseMenu(bool),
    RemoveScreenshots(bool),
}

impl Settings {
    /// Applies one update in place. Does not persist; callers decide
    /// when to write the file back.
    pub fn apply(&mut self, update: SettingsUpdate) {
        match update {
            SettingsUpdate::Interval(seconds) => self.interval = seconds,
            SettingsUpdate::Threshold(minutes) => self.threshold = minutes,
            SettingsUpdate::AskPass(on) => self.ask_pass = on,
            SettingsUpdate::Video(on) => self.video = on,
            SettingsUpdate::Fullscreen(on) => self.fullscreen = on,
            SettingsUpdate::CloseMenu(on) => self.close_menu = on,
            SettingsUpdate::RemoveScreenshots(on) => self.remove_ss = on,
        }
    }
}
