// --- File: crates/keurplan_gcal/src/logic.rs ---
use chrono::{DateTime, LocalResult, NaiveDateTime, TimeZone, Utc};
use chrono_tz::Tz;
use keurplan_common::services::EventDetails;
use serde::{Deserialize, Serialize};

/// The fixed time zone every calendar operation is interpreted in,
/// regardless of caller locale.
pub const CALENDAR_TIME_ZONE: Tz = chrono_tz::Europe::Brussels;

/// Upper bound on the number of events a listing returns.
pub const UPCOMING_EVENTS_LIMIT: i32 = 3;

// --- Data Structures ---

#[derive(Deserialize, Debug)]
pub struct CreateEventRequest {
    pub summary: String,
    pub location: String,
    pub description: String,
    pub start: String, // wall-clock date-time, calendar time zone
    pub end: String,
}

#[derive(Deserialize, Debug)]
pub struct RescheduleEventRequest {
    pub start: String,
    pub end: String,
}

#[derive(Serialize, Debug)]
pub struct EventListResponse {
    pub events: Vec<EventDetails>,
}

#[derive(Serialize, Debug)]
pub struct CreateEventResponse {
    pub success: bool,
    pub event_id: Option<String>,
    pub message: String,
}

#[derive(Serialize, Debug)]
pub struct DeleteEventResponse {
    pub success: bool,
    pub message: String,
}

// --- Time handling ---

/// Parse a caller-supplied date-time into UTC.
///
/// An explicit RFC 3339 offset wins; anything else is wall-clock time in
/// [`CALENDAR_TIME_ZONE`]. An ambiguous local time (the DST fold) resolves to
/// the earlier instant; a non-existent one (the DST gap) is an error.
pub fn parse_calendar_datetime(value: &str) -> Result<DateTime<Utc>, String> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Ok(dt.with_timezone(&Utc));
    }

    let naive = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M"))
        .map_err(|e| format!("Invalid date-time '{value}': {e}"))?;

    match CALENDAR_TIME_ZONE.from_local_datetime(&naive) {
        LocalResult::Single(dt) => Ok(dt.with_timezone(&Utc)),
        LocalResult::Ambiguous(earliest, _) => Ok(earliest.with_timezone(&Utc)),
        LocalResult::None => Err(format!(
            "Date-time '{value}' does not exist in {}",
            CALENDAR_TIME_ZONE.name()
        )),
    }
}
