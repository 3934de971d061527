// --- File: crates/keurplan_common/src/error.rs ---
use thiserror::Error;

/// The error taxonomy for every Keurplan route.
///
/// Each variant is tagged with the collaborator that failed, so routes never
/// have to inspect message text to pick a status code. The mapping to HTTP
/// lives in the [`HttpStatusCode`] impl below.
#[derive(Error, Debug)]
pub enum ServiceError {
    /// No directory record matched the requested username
    #[error("No user found for username: {0}")]
    UserNotFound(String),

    /// The directory store was unreachable or the query itself failed
    #[error("User directory unavailable: {0}")]
    DirectoryUnavailable(String),

    /// A calendar provider call failed; `operation` names which one
    #[error("Calendar {operation} failed: {message}")]
    CalendarOperationFailed {
        operation: &'static str,
        message: String,
    },

    /// The mail provider rejected the message or the request never arrived
    #[error("Mail delivery failed: {0}")]
    MailDeliveryFailed(String),
}

/// A trait for converting errors to HTTP status codes.
///
/// This trait can be implemented by error types to provide a consistent way
/// to convert errors to HTTP status codes.
pub trait HttpStatusCode {
    /// Returns the HTTP status code for this error.
    fn status_code(&self) -> u16;
}

impl HttpStatusCode for ServiceError {
    fn status_code(&self) -> u16 {
        match self {
            ServiceError::UserNotFound(_) => 404,
            ServiceError::DirectoryUnavailable(_) => 500,
            ServiceError::CalendarOperationFailed { .. } => 500,
            ServiceError::MailDeliveryFailed(_) => 500,
        }
    }
}
