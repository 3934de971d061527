// --- File: crates/services/keurplan_backend/src/app_state.rs ---
use keurplan_common::services::ServiceFactory;
use keurplan_config::AppConfig;
use std::sync::Arc;

use crate::service_factory::KeurplanServiceFactory;

/// Application state that is shared across all routes.
///
/// Holds the loaded configuration plus the service factory the routers are
/// wired from. Keeping both behind one struct gives the binary a single
/// source of truth and keeps the dependency injection explicit.
#[derive(Clone)]
pub struct AppState {
    /// The application configuration loaded at startup.
    pub config: Arc<AppConfig>,

    /// Service factory for accessing the external collaborators.
    pub service_factory: Arc<dyn ServiceFactory>,
}

impl AppState {
    /// Create a new AppState with the given configuration.
    /// This builds the service factory and wires every configured service.
    pub async fn new(config: Arc<AppConfig>) -> Self {
        let service_factory = Arc::new(KeurplanServiceFactory::new(config.clone()).await);

        Self {
            config,
            service_factory,
        }
    }
}
