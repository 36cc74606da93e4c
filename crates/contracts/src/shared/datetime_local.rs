//! Conversion of source timestamps into `datetime-local` input values.
//!
//! An `<input type="datetime-local">` accepts `YYYY-MM-DDTHH:MM`. Source
//! values come from the data files as ISO 8601 strings, with or without an
//! offset and with arbitrary sub-minute precision.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

/// Minute-precision format of a `datetime-local` value
pub const DATETIME_LOCAL_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// Used when an event has no usable start time
pub const DEFAULT_START_TIME: &str = "2023-12-01T19:00";

/// Used when an event has no usable end time
pub const DEFAULT_END_TIME: &str = "2023-12-01T22:00";

const NAIVE_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S%.f"];

/// Convert an ISO 8601 timestamp to a `datetime-local` value.
///
/// Values with an offset are normalised to UTC, naive values keep their wall
/// clock time and a bare date maps to midnight. Returns `None` when the value
/// is empty or cannot be parsed.
pub fn to_datetime_local(raw: &str) -> Option<String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc).format(DATETIME_LOCAL_FORMAT).to_string());
    }

    for fmt in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Some(naive.format(DATETIME_LOCAL_FORMAT).to_string());
        }
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.format(DATETIME_LOCAL_FORMAT).to_string())
}

/// A `datetime-local` value together with how it was obtained
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedTime {
    pub value: String,
    /// `true` when the source value was missing or unparseable and the
    /// fallback was used instead
    pub defaulted: bool,
}

/// Convert `raw`, substituting `fallback` when conversion fails.
///
/// Callers must report `defaulted` values to the user; the fallback hides
/// missing data otherwise.
pub fn resolve_datetime_local(raw: &str, fallback: &str) -> ResolvedTime {
    match to_datetime_local(raw) {
        Some(value) => ResolvedTime {
            value,
            defaulted: false,
        },
        None => ResolvedTime {
            value: fallback.to_string(),
            defaulted: true,
        },
    }
}
