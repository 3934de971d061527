// --- File: crates/keurplan_gcal/src/routes.rs ---

use crate::handlers::{
    create_event_handler, delete_event_handler, list_events_handler, reschedule_event_handler,
    CalendarApiState,
};
use axum::{
    routing::{get, put},
    Router,
};
use std::sync::Arc;

/// Creates a router containing all routes for the calendar feature.
///
/// The directory and calendar clients are injected through the state so
/// tests can substitute doubles.
pub fn routes(state: Arc<CalendarApiState>) -> Router {
    Router::new()
        .route(
            "/calendars/{username}/events",
            get(list_events_handler).post(create_event_handler),
        )
        .route(
            "/calendars/{username}/events/{event_id}",
            put(reschedule_event_handler).delete(delete_event_handler),
        )
        .with_state(state)
}
