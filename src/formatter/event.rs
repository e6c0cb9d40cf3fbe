use chrono::{DateTime, NaiveDateTime};

use super::{Escaping, escape_text_value};
use crate::error::{Error, Result};
use crate::models::EventPayload;

/// Form layouts accepted for local date-times, most specific first
const LOCAL_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

/// Parse a date-time form value.
///
/// Empty input means "not set". Local values (`2024-01-15T10:00`) carry no
/// zone and are kept as-is; RFC 3339 values with an offset are converted to
/// UTC.
pub fn parse_event_time(input: &str) -> Result<Option<NaiveDateTime>> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(None);
    }
    for format in LOCAL_FORMATS {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(input, format) {
            return Ok(Some(parsed));
        }
    }
    DateTime::parse_from_rfc3339(input)
        .map(|dt| Some(dt.naive_utc()))
        .map_err(|_| Error::InvalidDateTime(input.to_string()))
}

/// Render as iCalendar UTC basic format (`YYYYMMDDTHHMMSSZ`); unset is empty
pub fn format_timestamp(time: Option<&NaiveDateTime>) -> String {
    time.map(|t| t.format("%Y%m%dT%H%M%SZ").to_string())
        .unwrap_or_default()
}

/// Format a VEVENT block, lines joined with `\n`
pub fn format_event(event: &EventPayload, escaping: Escaping) -> String {
    let value = |s: &str| match escaping {
        Escaping::Compatible => s.to_string(),
        Escaping::Strict => escape_text_value(s),
    };

    [
        "BEGIN:VEVENT".to_string(),
        format!("SUMMARY:{}", value(&event.title)),
        format!("DTSTART:{}", format_timestamp(event.start.as_ref())),
        format!("DTEND:{}", format_timestamp(event.end.as_ref())),
        format!("LOCATION:{}", value(&event.location)),
        format!("DESCRIPTION:{}", value(&event.description)),
        "END:VEVENT".to_string(),
    ]
    .join("\n")
}
