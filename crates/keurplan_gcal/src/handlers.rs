// File: crates/keurplan_gcal/src/handlers.rs
use crate::logic::{
    CreateEventRequest, CreateEventResponse, DeleteEventResponse, EventListResponse,
    RescheduleEventRequest,
};
use axum::{
    extract::{Path, State},
    response::Json,
};
use keurplan_common::services::{
    CalendarService, DirectoryService, EventDetails, EventDraft, EventWindow,
};
use keurplan_common::ServiceError;
use std::sync::Arc;
use tracing::info;

// Define shared state needed by the calendar handlers
#[derive(Clone)]
pub struct CalendarApiState {
    pub directory: Arc<dyn DirectoryService>,
    pub calendar: Arc<dyn CalendarService>,
}

// Every calendar route goes through the same indirection: resolve the
// username to a directory record first and use its email as the calendar
// id. A failed lookup returns before any provider call is attempted.

/// Handler to list the upcoming events on a user's calendar.
pub async fn list_events_handler(
    State(state): State<Arc<CalendarApiState>>,
    Path(username): Path<String>,
) -> Result<Json<EventListResponse>, ServiceError> {
    let user = state.directory.resolve_user(&username).await?;
    let events = state.calendar.list_upcoming(&user.email).await?;

    Ok(Json(EventListResponse { events }))
}

/// Handler to create an event on a user's calendar.
pub async fn create_event_handler(
    State(state): State<Arc<CalendarApiState>>,
    Path(username): Path<String>,
    Json(payload): Json<CreateEventRequest>,
) -> Result<Json<CreateEventResponse>, ServiceError> {
    let user = state.directory.resolve_user(&username).await?;

    let draft = EventDraft {
        summary: payload.summary,
        location: payload.location,
        description: payload.description,
        start: payload.start,
        end: payload.end,
    };

    let created = state.calendar.create_event(&user.email, draft).await?;
    info!(
        "Created event {:?} on calendar of {}",
        created.event_id, username
    );

    Ok(Json(CreateEventResponse {
        success: true,
        event_id: created.event_id,
        message: "Event created successfully.".to_string(),
    }))
}

/// Handler to move an existing event to a new start/end window.
pub async fn reschedule_event_handler(
    State(state): State<Arc<CalendarApiState>>,
    Path((username, event_id)): Path<(String, String)>,
    Json(payload): Json<RescheduleEventRequest>,
) -> Result<Json<EventDetails>, ServiceError> {
    let user = state.directory.resolve_user(&username).await?;

    let window = EventWindow {
        start: payload.start,
        end: payload.end,
    };

    let updated = state
        .calendar
        .reschedule_event(&user.email, &event_id, window)
        .await?;
    info!("Rescheduled event {} for {}", event_id, username);

    Ok(Json(updated))
}

/// Handler to delete an event from a user's calendar.
pub async fn delete_event_handler(
    State(state): State<Arc<CalendarApiState>>,
    Path((username, event_id)): Path<(String, String)>,
) -> Result<Json<DeleteEventResponse>, ServiceError> {
    let user = state.directory.resolve_user(&username).await?;

    state.calendar.delete_event(&user.email, &event_id).await?;
    info!("Deleted event {} for {}", event_id, username);

    Ok(Json(DeleteEventResponse {
        success: true,
        message: "Event deleted successfully.".to_string(),
    }))
}
