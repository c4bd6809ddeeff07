//! Schedule JSON body parsing.
//!
//! The feeds answer with a top-level object of the shape
//! `{"data": {"chProgram": {"<channel>": [<programme>, ...], ...}}}`.
//! Channel keys and programme arrays are consumed in source order;
//! `serde_json`'s `preserve_order` feature keeps the key enumeration
//! order intact, which fixes the channel first-seen order downstream.

use chrono::{DateTime, Utc};
use serde_json::{Map, Value};

use super::error::ScheduleError;
use super::types::{DaySchedule, Programme};

/// Builds a `Malformed` error for the given feed URL.
fn malformed(url: &str, detail: impl Into<String>) -> ScheduleError {
    ScheduleError::Malformed {
        url: String::from(url),
        detail: detail.into(),
    }
}

/// Reads a required epoch-millisecond field from a programme object.
fn require_instant(
    url: &str,
    channel: &str,
    programme: &Map<String, Value>,
    field: &str,
) -> Result<DateTime<Utc>, ScheduleError> {
    let millis = programme.get(field).and_then(Value::as_i64).ok_or_else(|| {
        malformed(
            url,
            format!("programme in channel `{channel}` is missing integer field `{field}`"),
        )
    })?;
    DateTime::from_timestamp_millis(millis).ok_or_else(|| {
        malformed(
            url,
            format!("programme in channel `{channel}` has out-of-range `{field}`: {millis}"),
        )
    })
}

/// Reads a required string field from a programme object.
fn require_string(
    url: &str,
    channel: &str,
    programme: &Map<String, Value>,
    field: &str,
) -> Result<String, ScheduleError> {
    programme
        .get(field)
        .and_then(Value::as_str)
        .map(String::from)
        .ok_or_else(|| {
            malformed(
                url,
                format!("programme in channel `{channel}` is missing string field `{field}`"),
            )
        })
}

/// Converts one programme object into a `Programme` tagged with its channel.
fn parse_programme(
    url: &str,
    channel: &str,
    programme: &Map<String, Value>,
) -> Result<Programme, ScheduleError> {
    Ok(Programme {
        channel: String::from(channel),
        name: require_string(url, channel, programme, "name")?,
        description: require_string(url, channel, programme, "synopsis")?,
        start: require_instant(url, channel, programme, "start")?,
        end: require_instant(url, channel, programme, "end")?,
    })
}

/// Parses one endpoint's response body into a `DaySchedule`.
///
/// `url` is only used for error context. Channel keys with an empty
/// programme array are still reported as seen. Array elements that are
/// not JSON objects are skipped; that is tolerated upstream noise, not
/// an error.
///
/// # Errors
///
/// Returns `ScheduleError::Malformed` if the body is not valid JSON, the
/// `data.chProgram` object levels are missing or mistyped, or a programme
/// object lacks a required `start`/`end`/`name`/`synopsis` field.
pub fn parse_schedule_body(url: &str, body: &str) -> Result<DaySchedule, ScheduleError> {
    let root: Value =
        serde_json::from_str(body).map_err(|e| malformed(url, format!("invalid JSON: {e}")))?;

    let ch_program = root
        .get("data")
        .ok_or_else(|| malformed(url, "missing `data` object"))?
        .get("chProgram")
        .ok_or_else(|| malformed(url, "missing `data.chProgram` object"))?
        .as_object()
        .ok_or_else(|| malformed(url, "`data.chProgram` is not an object"))?;

    let mut schedule = DaySchedule::default();
    for (channel, entries) in ch_program {
        let entries = entries.as_array().ok_or_else(|| {
            malformed(
                url,
                format!("programme list for channel `{channel}` is not an array"),
            )
        })?;

        schedule.channels.push(channel.clone());
        for entry in entries {
            let Some(programme) = entry.as_object() else {
                continue;
            };
            schedule
                .programmes
                .push(parse_programme(url, channel, programme)?);
        }
    }

    Ok(schedule)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::indexing_slicing)]

    use super::*;

    const TEST_URL: &str = "http://test.invalid/ch_G01.json";

    #[test]
    fn test_parse_fixture_body() {
        // Arrange
        let body = include_str!("../../../../fixtures/nowtv/ch_g01_20240101.json");

        // Act
        let schedule = parse_schedule_body(TEST_URL, body).unwrap();

        // Assert
        assert_eq!(schedule.channels, vec!["CH096", "CH100", "CH113"]);
        assert_eq!(schedule.programmes.len(), 4);
        assert_eq!(schedule.programmes[0].channel, "CH096");
        assert_eq!(schedule.programmes[0].name, "Morning News");
        assert_eq!(schedule.programmes[0].description, "Start the day informed.");
        assert_eq!(
            schedule.programmes[0].start,
            DateTime::from_timestamp_millis(1_704_067_200_000).unwrap()
        );
        // CH113 has an empty array but is still reported
        assert!(schedule.programmes.iter().all(|p| p.channel != "CH113"));
    }

    #[test]
    fn test_parse_preserves_source_order() {
        // Arrange: keys deliberately not in lexical order
        let body = r#"{"data":{"chProgram":{
            "ZZ9":[{"start":1,"end":2,"name":"a","synopsis":""}],
            "AA1":[{"start":3,"end":4,"name":"b","synopsis":""}]
        }}}"#;

        // Act
        let schedule = parse_schedule_body(TEST_URL, body).unwrap();

        // Assert
        assert_eq!(schedule.channels, vec!["ZZ9", "AA1"]);
        assert_eq!(schedule.programmes[0].name, "a");
        assert_eq!(schedule.programmes[1].name, "b");
    }

    #[test]
    fn test_parse_skips_non_object_elements() {
        // Arrange
        let body = r#"{"data":{"chProgram":{"CH1":[
            "junk",
            {"start":1700000000000,"end":1700003600000,"name":"News","synopsis":"Daily news"},
            42,
            null
        ]}}}"#;

        // Act
        let schedule = parse_schedule_body(TEST_URL, body).unwrap();

        // Assert
        assert_eq!(schedule.programmes.len(), 1);
        assert_eq!(schedule.programmes[0].name, "News");
    }

    #[test]
    fn test_parse_empty_array_reports_channel() {
        // Arrange
        let body = r#"{"data":{"chProgram":{"CH1":[]}}}"#;

        // Act
        let schedule = parse_schedule_body(TEST_URL, body).unwrap();

        // Assert
        assert_eq!(schedule.channels, vec!["CH1"]);
        assert!(schedule.programmes.is_empty());
    }

    #[test]
    fn test_parse_missing_data_key_fails() {
        // Arrange
        let body = r#"{"status":"ok"}"#;

        // Act
        let err = parse_schedule_body(TEST_URL, body).unwrap_err();

        // Assert
        assert!(matches!(err, ScheduleError::Malformed { .. }));
        assert!(err.to_string().contains("missing `data` object"));
        assert!(err.to_string().contains(TEST_URL));
    }

    #[test]
    fn test_parse_invalid_json_fails() {
        // Arrange & Act
        let err = parse_schedule_body(TEST_URL, "not json at all").unwrap_err();

        // Assert
        assert!(matches!(err, ScheduleError::Malformed { .. }));
        assert!(err.to_string().contains("invalid JSON"));
    }

    #[test]
    fn test_parse_missing_start_field_fails() {
        // Arrange
        let body = r#"{"data":{"chProgram":{"CH1":[
            {"end":1700003600000,"name":"News","synopsis":"Daily news"}
        ]}}}"#;

        // Act
        let err = parse_schedule_body(TEST_URL, body).unwrap_err();

        // Assert
        assert!(err.to_string().contains("missing integer field `start`"));
        assert!(err.to_string().contains("CH1"));
    }

    #[test]
    fn test_parse_mistyped_name_field_fails() {
        // Arrange: name is a number, not a string
        let body = r#"{"data":{"chProgram":{"CH1":[
            {"start":1,"end":2,"name":7,"synopsis":"x"}
        ]}}}"#;

        // Act
        let err = parse_schedule_body(TEST_URL, body).unwrap_err();

        // Assert
        assert!(err.to_string().contains("missing string field `name`"));
    }

    #[test]
    fn test_parse_non_array_channel_value_fails() {
        // Arrange
        let body = r#"{"data":{"chProgram":{"CH1":{"start":1}}}}"#;

        // Act
        let err = parse_schedule_body(TEST_URL, body).unwrap_err();

        // Assert
        assert!(err.to_string().contains("is not an array"));
    }

    #[test]
    fn test_parse_empty_name_and_synopsis_allowed() {
        // Arrange: empty strings are valid values, only absence is an error
        let body = r#"{"data":{"chProgram":{"CH1":[
            {"start":1,"end":2,"name":"","synopsis":""}
        ]}}}"#;

        // Act
        let schedule = parse_schedule_body(TEST_URL, body).unwrap();

        // Assert
        assert_eq!(schedule.programmes[0].name, "");
        assert_eq!(schedule.programmes[0].description, "");
    }
}
