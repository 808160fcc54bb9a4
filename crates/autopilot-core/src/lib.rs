//! Core types: meeting times, weekly schedule resolution, settings

pub mod config;
pub mod error;
pub mod ids;
pub mod meeting;
pub mod schedule;
pub mod time;
pub mod tracing;

pub use config::{Settings, SettingsUpdate};
pub use error::{ScheduleError, ScheduleResult};
pub use ids::parse_meeting_id;
pub use meeting::{Meeting, weekday_from_number, weekday_to_number};
pub use schedule::Schedule;
pub use time::MeetingTime;
pub use tracing::{TracingConfig, TracingError, TracingOutputFormat, init_tracing};
