//! Runtime feature flag handling for the Keurplan application.
//!
//! Features are toggled at runtime through the `use_*` flags in the unified
//! configuration; a feature is only considered enabled when its flag is set
//! AND its configuration section is present.

use keurplan_config::AppConfig;
use std::sync::Arc;

/// Check if a feature is enabled at runtime based on configuration.
///
/// # Arguments
///
/// * `config` - The application configuration
/// * `use_feature` - The configuration flag that enables the feature
/// * `feature_config` - The configuration section for the feature
pub fn is_feature_enabled<T>(
    _config: &Arc<AppConfig>,
    use_feature: bool,
    feature_config: Option<&T>,
) -> bool {
    use_feature && feature_config.is_some()
}

/// Check if the Google Calendar feature is enabled at runtime.
pub fn is_gcal_enabled(config: &Arc<AppConfig>) -> bool {
    is_feature_enabled(config, config.use_gcal, config.gcal.as_ref())
}

/// Check if the transactional mail feature is enabled at runtime.
pub fn is_mailer_enabled(config: &Arc<AppConfig>) -> bool {
    is_feature_enabled(config, config.use_mailer, config.mailer.as_ref())
}
