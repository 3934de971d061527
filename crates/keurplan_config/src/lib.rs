// --- File: crates/keurplan_config/src/lib.rs ---
use config::{Config, ConfigError, Environment, File};
use std::env;
use std::sync::Once;

pub mod models;
pub use models::*;

static DOTENV: Once = Once::new();

/// Load `.env` once per process. Safe to call from multiple crates.
pub fn ensure_dotenv_loaded() {
    DOTENV.call_once(|| {
        dotenv::dotenv().ok();
    });
}

/// Loads the unified application configuration.
///
/// Sources, in ascending priority:
/// 1. built-in defaults (bind all interfaces, port 8080),
/// 2. `config/default.*`,
/// 3. `config/{RUN_MODE}.*` (RUN_MODE defaults to "default"),
/// 4. environment variables with the `APP` prefix and `__` separator
///    (e.g. `APP_DATABASE__URL`, `APP_SERVER__PORT`).
///
/// Dependent crates call this so they do not need to know where any
/// particular value came from.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    ensure_dotenv_loaded();
    let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "default".into());

    Config::builder()
        .set_default("server.host", "0.0.0.0")?
        .set_default("server.port", 8080)?
        .add_source(File::with_name("config/default").required(false))
        .add_source(File::with_name(&format!("config/{run_mode}")).required(false))
        .add_source(Environment::with_prefix("APP").separator("__"))
        .build()?
        .try_deserialize()
}
