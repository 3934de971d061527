// --- File: crates/keurplan_mailer/src/service.rs ---
//! Transactional mail service implementation.
//!
//! This module implements the `MailerService` trait against a
//! SendGrid-compatible REST API. Sends are awaited but never retried or
//! queued; a rejection or network failure surfaces as
//! `ServiceError::MailDeliveryFailed` and nothing else.

use keurplan_common::services::{BoxFuture, MailerService, OutgoingEmail};
use keurplan_common::{ServiceError, HTTP_CLIENT};
use keurplan_config::MailerConfig;
use serde_json::json;
use tracing::info;

/// Default API base for the mail provider.
const DEFAULT_API_BASE_URL: &str = "https://api.sendgrid.com/v3";

/// Environment variable holding the provider API key.
pub const API_KEY_ENV_VAR: &str = "SENDGRID_API_KEY";

/// SendGrid-backed mail service.
pub struct SendGridMailerService {
    api_key: String,
    api_base_url: String,
    from_address: String,
}

impl SendGridMailerService {
    /// Create a new mail service with an explicit key and from-address.
    pub fn new(api_key: String, from_address: String, api_base_url: Option<String>) -> Self {
        Self {
            api_key,
            api_base_url: api_base_url.unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string()),
            from_address,
        }
    }

    /// Create a new mail service from config, reading the API key from the
    /// `SENDGRID_API_KEY` environment variable.
    pub fn from_config(config: &MailerConfig) -> Result<Self, String> {
        let api_key = std::env::var(API_KEY_ENV_VAR)
            .map_err(|_| format!("Missing {API_KEY_ENV_VAR} environment variable"))?;
        Ok(Self::new(
            api_key,
            config.from_address.clone(),
            config.api_base_url.clone(),
        ))
    }
}

impl MailerService for SendGridMailerService {
    fn send(&self, message: OutgoingEmail) -> BoxFuture<'_, (), ServiceError> {
        Box::pin(async move {
            let url = format!("{}/mail/send", self.api_base_url);

            let payload = json!({
                "personalizations": [{ "to": [{ "email": message.to }] }],
                "from": { "email": self.from_address },
                "subject": message.subject,
                "content": [{ "type": "text/html", "value": message.html_body }],
            });

            let resp = HTTP_CLIENT
                .post(&url)
                .bearer_auth(&self.api_key)
                .json(&payload)
                .send()
                .await
                .map_err(|e| ServiceError::MailDeliveryFailed(e.to_string()))?;

            let status = resp.status();
            if !status.is_success() {
                // Bubble up the provider body so failures can be debugged
                let body = resp.text().await.unwrap_or_default();
                tracing::error!("Mail provider returned {}: {}", status, body);
                return Err(ServiceError::MailDeliveryFailed(format!(
                    "{status}: {body}"
                )));
            }

            info!("Mail sent to {}", message.to);
            Ok(())
        })
    }
}
