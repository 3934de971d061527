// File: crates/keurplan_mailer/src/handlers.rs
use axum::{extract::State, response::Json};
use keurplan_common::services::{MailerService, OutgoingEmail};
use keurplan_common::ServiceError;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;

use crate::templates::{
    render_certificate_available, render_new_request, render_updated_visit_date,
};

// Define shared state needed by the mail handlers
#[derive(Clone)]
pub struct MailerApiState {
    pub mailer: Arc<dyn MailerService>,
}

#[derive(Deserialize, Debug)]
pub struct SendMailRequest {
    pub to: String,
    pub subject: String,
    /// Inspection type; multiple types arrive `/`-separated.
    #[serde(rename = "type")]
    pub inspection_type: String,
    pub link: String,
}

#[derive(Deserialize, Debug)]
pub struct CertificateNoticeRequest {
    pub to: String,
    pub subject: String,
    pub location: String,
    pub klant: String,
    #[serde(rename = "type")]
    pub inspection_type: String,
    pub link: String,
}

#[derive(Deserialize, Debug)]
pub struct UpdatedVisitNoticeRequest {
    pub to: String,
    pub subject: String,
    pub location: String,
    pub klant: String,
    pub date: String,
    /// One or more inspection types.
    #[serde(rename = "type")]
    pub inspection_types: Vec<String>,
}

#[derive(Serialize, Debug)]
pub struct MailResponse {
    pub success: bool,
    pub message: String,
}

/// Handler for the new-inspection-request notice.
pub async fn send_mail_handler(
    State(state): State<Arc<MailerApiState>>,
    Json(request): Json<SendMailRequest>,
) -> Result<Json<MailResponse>, ServiceError> {
    let html_body = render_new_request(&request.inspection_type, &request.link);

    state
        .mailer
        .send(OutgoingEmail {
            to: request.to.clone(),
            subject: request.subject,
            html_body,
        })
        .await?;

    info!("New-request notice sent to {}", request.to);
    Ok(Json(MailResponse {
        success: true,
        message: "Mail sent successfully.".to_string(),
    }))
}

/// Handler for the certificate-available notice.
pub async fn certificate_available_handler(
    State(state): State<Arc<MailerApiState>>,
    Json(request): Json<CertificateNoticeRequest>,
) -> Result<Json<MailResponse>, ServiceError> {
    let html_body = render_certificate_available(
        &request.inspection_type,
        &request.location,
        &request.klant,
        &request.link,
    );

    state
        .mailer
        .send(OutgoingEmail {
            to: request.to.clone(),
            subject: request.subject,
            html_body,
        })
        .await?;

    info!("Certificate notice sent to {}", request.to);
    Ok(Json(MailResponse {
        success: true,
        message: "Mail sent successfully.".to_string(),
    }))
}

/// Handler for the visit-date-change notice.
pub async fn updated_visit_date_handler(
    State(state): State<Arc<MailerApiState>>,
    Json(request): Json<UpdatedVisitNoticeRequest>,
) -> Result<Json<MailResponse>, ServiceError> {
    let html_body = render_updated_visit_date(
        &request.date,
        &request.inspection_types,
        &request.location,
        &request.klant,
    );

    state
        .mailer
        .send(OutgoingEmail {
            to: request.to.clone(),
            subject: request.subject,
            html_body,
        })
        .await?;

    info!("Visit-date-change notice sent to {}", request.to);
    Ok(Json(MailResponse {
        success: true,
        message: "Mail sent successfully.".to_string(),
    }))
}
