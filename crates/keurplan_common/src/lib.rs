// --- File: crates/keurplan_common/src/lib.rs ---

// Declare modules within this crate
pub mod error; // Error taxonomy shared by all routes
pub mod features; // Runtime feature flag handling
pub mod http; // HTTP utilities
pub mod logging; // Logging utilities
pub mod services; // Service abstractions

// Re-export error types and utilities for easier access
pub use error::{HttpStatusCode, ServiceError};

// Re-export HTTP utilities for easier access
pub use http::{
    client::{create_client, HTTP_CLIENT},
    IntoHttpResponse,
};

// Re-export feature flag handling utilities for easier access
pub use features::is_feature_enabled;
