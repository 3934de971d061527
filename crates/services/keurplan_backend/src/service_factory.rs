// --- File: crates/services/keurplan_backend/src/service_factory.rs ---
//! Service factory implementation.
//!
//! This module wires the concrete service implementations (SQL directory,
//! Google Calendar, SendGrid mailer) based on the runtime configuration and
//! exposes them through the `ServiceFactory` trait. Routes only ever see the
//! trait objects, so tests can substitute doubles without touching this file.

use keurplan_common::features;
use keurplan_common::services::{CalendarService, DirectoryService, MailerService, ServiceFactory};
use keurplan_config::AppConfig;
use keurplan_directory::{DbClient, SqlDirectoryService, SqlUserRepository, UserRepository};
use keurplan_gcal::auth::create_calendar_hub;
use keurplan_gcal::service::GoogleCalendarService;
use keurplan_mailer::service::SendGridMailerService;
use std::sync::Arc;
use tracing::{error, info, warn};

/// Service factory for the backend binary.
pub struct KeurplanServiceFactory {
    directory_service: Option<Arc<dyn DirectoryService>>,
    calendar_service: Option<Arc<dyn CalendarService>>,
    mailer_service: Option<Arc<dyn MailerService>>,
}

impl KeurplanServiceFactory {
    /// Create a new service factory, initializing each service the
    /// configuration asks for. A service that fails to initialize is logged
    /// and left unset; the corresponding routes are simply not mounted.
    pub async fn new(config: Arc<AppConfig>) -> Self {
        let mut factory = Self {
            directory_service: None,
            calendar_service: None,
            mailer_service: None,
        };

        if config.database.is_some() {
            info!("Initializing user directory...");
            match DbClient::new(&config).await {
                Ok(client) => {
                    let repository = SqlUserRepository::new(client);
                    if let Err(e) = repository.init_schema().await {
                        warn!("Could not bootstrap users schema: {}", e);
                    }
                    factory.directory_service =
                        Some(Arc::new(SqlDirectoryService::new(repository)));
                }
                Err(e) => error!("Failed to initialize user directory: {}", e),
            }
        }

        if features::is_gcal_enabled(&config) {
            info!("Initializing Google Calendar service...");
            match create_calendar_hub(config.gcal.as_ref().unwrap()).await {
                Ok(hub) => {
                    factory.calendar_service =
                        Some(Arc::new(GoogleCalendarService::new(Arc::new(hub))));
                }
                Err(e) => error!("Failed to initialize Google Calendar service: {}", e),
            }
        }

        if features::is_mailer_enabled(&config) {
            info!("Initializing mail service...");
            match SendGridMailerService::from_config(config.mailer.as_ref().unwrap()) {
                Ok(service) => factory.mailer_service = Some(Arc::new(service)),
                Err(e) => error!("Failed to initialize mail service: {}", e),
            }
        }

        factory
    }
}

impl ServiceFactory for KeurplanServiceFactory {
    fn directory_service(&self) -> Option<Arc<dyn DirectoryService>> {
        self.directory_service.clone()
    }

    fn calendar_service(&self) -> Option<Arc<dyn CalendarService>> {
        self.calendar_service.clone()
    }

    fn mailer_service(&self) -> Option<Arc<dyn MailerService>> {
        self.mailer_service.clone()
    }
}
