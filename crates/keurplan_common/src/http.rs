// --- File: crates/keurplan_common/src/http.rs ---
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::error::{HttpStatusCode, ServiceError};

// Include the client module
pub mod client;

/// Extension trait for ServiceError to convert it to an Axum HTTP response.
pub trait IntoHttpResponse {
    /// Converts the error into an Axum HTTP response.
    fn into_http_response(self) -> Response;
}

impl IntoHttpResponse for ServiceError {
    fn into_http_response(self) -> Response {
        let status_code =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        // Only the human-readable message is surfaced, never the underlying
        // error chain or a stack trace.
        let body = Json(json!({ "error": self.to_string() }));

        (status_code, body).into_response()
    }
}

/// Implement IntoResponse for ServiceError so handlers can return it with `?`.
impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        self.into_http_response()
    }
}
