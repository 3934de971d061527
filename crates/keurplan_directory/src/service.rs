// --- File: crates/keurplan_directory/src/service.rs ---
//! Directory service implementation.
//!
//! This module adapts the SQL user repository to the `DirectoryService`
//! trait consumed by the route layer, normalizing failures into the shared
//! error taxonomy: a missing record is `UserNotFound`, anything the store
//! itself reports is `DirectoryUnavailable`.

use keurplan_common::services::{BoxFuture, DirectoryService, UserRecord};
use keurplan_common::ServiceError;
use tracing::debug;

use crate::repository::{SqlUserRepository, UserRepository};

/// SQL-backed directory service.
pub struct SqlDirectoryService {
    repository: SqlUserRepository,
}

impl SqlDirectoryService {
    /// Create a new directory service over the given repository.
    pub fn new(repository: SqlUserRepository) -> Self {
        Self { repository }
    }
}

impl DirectoryService for SqlDirectoryService {
    fn resolve_user(&self, username: &str) -> BoxFuture<'_, UserRecord, ServiceError> {
        let username = username.to_string();

        Box::pin(async move {
            let row = self
                .repository
                .find_by_username(&username)
                .await
                .map_err(|e| ServiceError::DirectoryUnavailable(e.to_string()))?;

            match row {
                Some(row) => {
                    debug!("Resolved {} to calendar id {}", username, row.email);
                    Ok(UserRecord {
                        username: row.username,
                        email: row.email,
                        display_name: row.display_name,
                    })
                }
                None => Err(ServiceError::UserNotFound(username)),
            }
        })
    }
}
