// --- File: crates/keurplan_gcal/src/service.rs ---
//! Google Calendar service implementation.
//!
//! This module implements the `CalendarService` trait against the Google
//! Calendar API. Every provider failure is normalized into
//! `ServiceError::CalendarOperationFailed` tagged with the wire operation
//! that failed; nothing is retried here.

use std::sync::Arc;

use chrono::Utc;
use google_calendar3::api::{Event, EventDateTime};
use keurplan_common::services::{
    BoxFuture, CalendarService, CreatedEvent, EventDetails, EventDraft, EventWindow,
};
use keurplan_common::ServiceError;
use tracing::debug;

use crate::auth::HubType;
use crate::logic::{parse_calendar_datetime, CALENDAR_TIME_ZONE, UPCOMING_EVENTS_LIMIT};

/// Google Calendar service implementation.
pub struct GoogleCalendarService {
    calendar_hub: Arc<HubType>,
}

impl GoogleCalendarService {
    /// Create a new Google Calendar service.
    pub fn new(calendar_hub: Arc<HubType>) -> Self {
        Self { calendar_hub }
    }
}

fn calendar_error(operation: &'static str, err: impl std::fmt::Display) -> ServiceError {
    ServiceError::CalendarOperationFailed {
        operation,
        message: err.to_string(),
    }
}

fn parse_error(operation: &'static str, message: String) -> ServiceError {
    ServiceError::CalendarOperationFailed { operation, message }
}

/// Convert a wall-clock date-time into the provider's start/end shape,
/// pinning the fixed calendar time zone.
fn event_date_time(operation: &'static str, value: &str) -> Result<EventDateTime, ServiceError> {
    let dt = parse_calendar_datetime(value).map_err(|msg| parse_error(operation, msg))?;
    Ok(EventDateTime {
        date_time: Some(dt),
        time_zone: Some(CALENDAR_TIME_ZONE.name().to_string()),
        ..Default::default()
    })
}

/// Normalize a provider event into the shared view.
fn normalize_event(event: Event) -> EventDetails {
    let start_time = match event.start {
        Some(start) => match start.date_time {
            Some(dt) => dt.to_rfc3339(),
            None => match start.date {
                Some(d) => format!("{}T00:00:00Z", d),
                None => String::new(),
            },
        },
        None => String::new(),
    };

    let end_time = match event.end {
        Some(end) => match end.date_time {
            Some(dt) => dt.to_rfc3339(),
            None => match end.date {
                Some(d) => format!("{}T23:59:59Z", d),
                None => String::new(),
            },
        },
        None => String::new(),
    };

    EventDetails {
        event_id: event.id.unwrap_or_default(),
        summary: event.summary.unwrap_or_default(),
        location: event.location,
        description: event.description,
        start_time,
        end_time,
        status: event.status.unwrap_or_else(|| "confirmed".to_string()),
        sequence: event.sequence,
    }
}

impl CalendarService for GoogleCalendarService {
    /// Fetches the next events on the calendar, recurring events expanded.
    fn list_upcoming(&self, calendar_id: &str) -> BoxFuture<'_, Vec<EventDetails>, ServiceError> {
        let calendar_id = calendar_id.to_string();
        let calendar_hub = self.calendar_hub.clone();

        Box::pin(async move {
            let (_response, events_list) = calendar_hub
                .events()
                .list(&calendar_id)
                .max_results(UPCOMING_EVENTS_LIMIT)
                .single_events(true) // Expand recurring events
                .order_by("startTime") // Sort by start time
                .time_min(Utc::now())
                .doit()
                .await
                .map_err(|e| calendar_error("list", e))?;

            let events = events_list
                .items
                .unwrap_or_default()
                .into_iter()
                .map(normalize_event)
                .collect();

            Ok(events)
        })
    }

    /// Creates a new calendar event and returns the provider-assigned id.
    fn create_event(
        &self,
        calendar_id: &str,
        draft: EventDraft,
    ) -> BoxFuture<'_, CreatedEvent, ServiceError> {
        let calendar_id = calendar_id.to_string();
        let calendar_hub = self.calendar_hub.clone();

        Box::pin(async move {
            let new_event = Event {
                summary: Some(draft.summary),
                location: Some(draft.location),
                description: Some(draft.description),
                start: Some(event_date_time("insert", &draft.start)?),
                end: Some(event_date_time("insert", &draft.end)?),
                ..Default::default()
            };

            let (_response, created_event) = calendar_hub
                .events()
                .insert(new_event, &calendar_id)
                .doit()
                .await
                .map_err(|e| calendar_error("insert", e))?;

            debug!("Created event {:?} on {}", created_event.id, calendar_id);

            Ok(CreatedEvent {
                event_id: created_event.id,
                status: created_event
                    .status
                    .unwrap_or_else(|| "confirmed".to_string()),
            })
        })
    }

    /// Moves an event to a new window via fetch-then-update.
    ///
    /// The fetched event is submitted back as a full replacement so fields
    /// this system does not manage survive the write. The pair of calls is
    /// not transactional; a concurrent writer between fetch and update wins
    /// or loses on the provider's own sequence handling.
    fn reschedule_event(
        &self,
        calendar_id: &str,
        event_id: &str,
        window: EventWindow,
    ) -> BoxFuture<'_, EventDetails, ServiceError> {
        let calendar_id = calendar_id.to_string();
        let event_id = event_id.to_string();
        let calendar_hub = self.calendar_hub.clone();

        Box::pin(async move {
            let (_response, mut event) = calendar_hub
                .events()
                .get(&calendar_id, &event_id)
                .doit()
                .await
                .map_err(|e| calendar_error("get", e))?;

            // A missing counter counts as zero, so the first reschedule
            // submits sequence 1.
            event.sequence = Some(event.sequence.map(|n| n + 1).unwrap_or(1));
            event.start = Some(event_date_time("update", &window.start)?);
            event.end = Some(event_date_time("update", &window.end)?);

            let (_response, updated) = calendar_hub
                .events()
                .update(event, &calendar_id, &event_id)
                .doit()
                .await
                .map_err(|e| calendar_error("update", e))?;

            Ok(normalize_event(updated))
        })
    }

    /// Deletes an event. An unknown event is a provider error surfaced to
    /// the caller, never a silent success.
    fn delete_event(&self, calendar_id: &str, event_id: &str) -> BoxFuture<'_, (), ServiceError> {
        let calendar_id = calendar_id.to_string();
        let event_id = event_id.to_string();
        let calendar_hub = self.calendar_hub.clone();

        Box::pin(async move {
            calendar_hub
                .events()
                .delete(&calendar_id, &event_id)
                .doit()
                .await
                .map_err(|e| calendar_error("delete", e))?;

            Ok(())
        })
    }
}
