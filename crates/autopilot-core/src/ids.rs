//! Meeting-id parsing.
//!
//! Users hand over meeting ids in whatever shape their invite came in:
//! a bare number, a number with grouping spaces, or a full Zoom invite
//! link. This module extracts the numeric id from any of those.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::ScheduleError;

/// Regex for the numeric id embedded in a meeting link.
static MEETING_ID_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d{5,}").expect("Invalid meeting id regex"));

/// Parses a numeric meeting id from a bare number or a Zoom URL.
///
/// Whitespace and grouping spaces are stripped first. For URLs, the
/// first run of five or more digits is taken as the id.
///
/// # Errors
///
/// Returns [`ScheduleError::InvalidMeetingId`] when no id can be
/// extracted.
pub fn parse_meeting_id(raw: &str) -> Result<u64, ScheduleError> {
    let invalid = || ScheduleError::InvalidMeetingId(raw.to_string());
    let cleaned = raw.trim().replace(' ', "");

    if cleaned.starts_with("https://") || cleaned.contains("zoom.us") {
        let found = MEETING_ID_REGEX.find(&cleaned).ok_or_else(invalid)?;
        return found.as_str().parse().map_err(|_| invalid());
    }
    cleaned.parse().map_err(|_| invalid())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_number() {
        assert_eq!(parse_meeting_id("123456789").unwrap(), 123_456_789);
    }

    #[test]
    fn grouping_spaces_and_whitespace() {
        assert_eq!(parse_meeting_id(" 123 4567 8901 \n").unwrap(), 123_456_78901);
    }

    #[test]
    fn zoom_link() {
        assert_eq!(
            parse_meeting_id("https://us02web.zoom.us/j/123456789?pwd=abc123").unwrap(),
            123_456_789
        );
    }

    #[test]
    fn link_without_scheme() {
        assert_eq!(
            parse_meeting_id("zoom.us/j/987654321").unwrap(),
            987_654_321
        );
    }

    #[test]
    fn link_without_id() {
        assert!(matches!(
            parse_meeting_id("https://zoom.us/join"),
            Err(ScheduleError::InvalidMeetingId(_))
        ));
    }

    #[test]
    fn garbage() {
        assert!(parse_meeting_id("not a meeting").is_err());
        assert!(parse_meeting_id("").is_err());
    }
}
