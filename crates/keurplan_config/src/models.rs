// --- File: crates/keurplan_config/src/models.rs ---

use serde::{Deserialize, Serialize};

// --- General Server Config ---
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

// --- Database Config ---
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct DatabaseConfig {
    pub url: String, // e.g., DATABASE_URL loaded via APP_DATABASE__URL or DATABASE_URL
}

// --- Google Calendar Config ---
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct GcalConfig {
    pub key_path: Option<String>, // Mandatory
                                  // Secrets loaded directly from env vars:
                                  // GOOGLE_CALENDAR_SERVICE_ACCOUNT_JSON
}

// --- Transactional Mail Config ---
// Holds non-secret mail config. API key loaded directly from env var.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct MailerConfig {
    pub from_address: String, // Mandatory
    pub api_base_url: Option<String>,
    // Secret loaded directly from env var: SENDGRID_API_KEY
}

// --- Unified App Configuration ---
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AppConfig {
    // Server config is mandatory
    pub server: ServerConfig,

    // --- Runtime Flags (optional in config file, default to false) ---
    #[serde(default)]
    pub use_gcal: bool,
    #[serde(default)]
    pub use_mailer: bool,

    // --- Optional Feature Configurations ---
    #[serde(default)]
    pub database: Option<DatabaseConfig>, // Central DB config
    #[serde(default)]
    pub gcal: Option<GcalConfig>,
    #[serde(default)]
    pub mailer: Option<MailerConfig>,
}
