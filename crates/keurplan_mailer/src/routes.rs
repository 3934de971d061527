// --- File: crates/keurplan_mailer/src/routes.rs ---

use crate::handlers::{
    certificate_available_handler, send_mail_handler, updated_visit_date_handler, MailerApiState,
};
use axum::{routing::post, Router};
use std::sync::Arc;

/// Creates a router containing all routes for the mail feature.
pub fn routes(state: Arc<MailerApiState>) -> Router {
    Router::new()
        .route("/send-mail", post(send_mail_handler))
        .route(
            "/notify-certificate-available",
            post(certificate_available_handler),
        )
        .route(
            "/notify-updated-date-visit",
            post(updated_visit_date_handler),
        )
        .with_state(state)
}
