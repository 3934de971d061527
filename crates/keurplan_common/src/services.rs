// --- File: crates/keurplan_common/src/services.rs ---
//! Service abstractions for external collaborators.
//!
//! This module provides trait definitions for the three external services the
//! application talks to: the user directory, the calendar provider and the
//! mail provider. The traits allow for dependency injection and easier
//! testing by decoupling the route layer from specific implementations.

use serde::{Deserialize, Serialize};
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use crate::error::ServiceError;

/// Type alias for a boxed future that returns a Result
pub type BoxFuture<'a, T, E> = Pin<Box<dyn Future<Output = Result<T, E>> + Send + 'a>>;

/// A trait for resolving usernames to directory records.
///
/// The directory is the system of record mapping usernames to user
/// attributes; the email field doubles as the calendar identifier. All
/// calendar routes go through this indirection; none accepts a calendar id
/// directly.
pub trait DirectoryService: Send + Sync {
    /// Resolve a username to its directory record.
    ///
    /// Matching is exact and case-sensitive against a single column. A
    /// missing record is `ServiceError::UserNotFound`; an unreachable store
    /// is `ServiceError::DirectoryUnavailable`.
    fn resolve_user(&self, username: &str) -> BoxFuture<'_, UserRecord, ServiceError>;
}

/// A trait for calendar provider operations.
///
/// All operations are scoped to a calendar id obtained from a resolved
/// [`UserRecord`]. Failures surface as
/// `ServiceError::CalendarOperationFailed`; nothing is retried here.
pub trait CalendarService: Send + Sync {
    /// List the next events on a calendar: at most 3, ascending by start
    /// time, recurring events expanded into single instances.
    fn list_upcoming(&self, calendar_id: &str) -> BoxFuture<'_, Vec<EventDetails>, ServiceError>;

    /// Create an event and return the provider-assigned identifier.
    fn create_event(
        &self,
        calendar_id: &str,
        draft: EventDraft,
    ) -> BoxFuture<'_, CreatedEvent, ServiceError>;

    /// Move an existing event to a new start/end window.
    ///
    /// Implementations fetch the current event first so unrelated fields
    /// survive the write, and bump the revision counter by one over the
    /// fetched value. The fetch-then-write pair is not transactional; a
    /// concurrent modification between the two calls is an accepted race.
    fn reschedule_event(
        &self,
        calendar_id: &str,
        event_id: &str,
        window: EventWindow,
    ) -> BoxFuture<'_, EventDetails, ServiceError>;

    /// Delete an event. Deleting an unknown event is a provider error, not a
    /// silent success.
    fn delete_event(&self, calendar_id: &str, event_id: &str) -> BoxFuture<'_, (), ServiceError>;
}

/// A trait for sending transactional email.
///
/// Sends are awaited synchronously but fire-and-forget in spirit: no retry,
/// no queueing. Failure is `ServiceError::MailDeliveryFailed`.
pub trait MailerService: Send + Sync {
    /// Send a single rendered message.
    fn send(&self, message: OutgoingEmail) -> BoxFuture<'_, (), ServiceError>;
}

/// A factory for the service instances the routers need.
///
/// Implemented by the backend binary; a service that is disabled by
/// configuration (or failed to initialize) is `None`.
pub trait ServiceFactory: Send + Sync {
    /// Get the user directory service, if configured.
    fn directory_service(&self) -> Option<Arc<dyn DirectoryService>>;

    /// Get the calendar service, if configured.
    fn calendar_service(&self) -> Option<Arc<dyn CalendarService>>;

    /// Get the mailer service, if configured.
    fn mailer_service(&self) -> Option<Arc<dyn MailerService>>;
}

/// A directory record. Read-only from this system's perspective.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserRecord {
    /// The unique username the record was resolved by.
    pub username: String,
    /// The email address, used as the calendar identifier.
    pub email: String,
    /// Optional human-readable name.
    pub display_name: Option<String>,
}

/// The fields a caller supplies to create an event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventDraft {
    /// The summary or title of the event.
    pub summary: String,
    /// Where the inspection takes place.
    pub location: String,
    /// Free-form description.
    pub description: String,
    /// Wall-clock start, interpreted in the fixed calendar time zone.
    pub start: String,
    /// Wall-clock end, interpreted in the fixed calendar time zone.
    pub end: String,
}

/// A new start/end window for an existing event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventWindow {
    pub start: String,
    pub end: String,
}

/// Represents the result of creating an event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatedEvent {
    /// The provider-assigned event identifier.
    pub event_id: Option<String>,
    /// The status the provider reported, usually "confirmed".
    pub status: String,
}

/// The normalized view of a provider event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventDetails {
    /// The ID of the event.
    pub event_id: String,
    /// The summary or title of the event.
    pub summary: String,
    /// Where the inspection takes place.
    pub location: Option<String>,
    /// Free-form description.
    pub description: Option<String>,
    /// Start time, RFC 3339.
    pub start_time: String,
    /// End time, RFC 3339.
    pub end_time: String,
    /// The status of the event.
    pub status: String,
    /// The provider's revision counter, incremented on update.
    pub sequence: Option<i32>,
}

/// A rendered message on its way to the mail provider. Never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutgoingEmail {
    pub to: String,
    pub subject: String,
    pub html_body: String,
}
