//! Repository for directory user records
//!
//! This module provides the `users` table access used to resolve a username
//! to a directory record. The table is owned by the external directory; this
//! system only ever reads it, but the schema bootstrap ships here so fresh
//! deployments (and tests) can seed records.

use crate::error::DbError;
use crate::DbClient;
use sqlx::Row;
use tracing::{debug, info};

/// A row from the `users` table.
#[derive(Debug, Clone)]
pub struct UserRow {
    pub id: Option<i64>,
    pub username: String,
    pub email: String,
    pub display_name: Option<String>,
}

/// Read access to directory user records.
#[allow(async_fn_in_trait)]
pub trait UserRepository {
    /// Create the `users` table if it doesn't exist.
    async fn init_schema(&self) -> Result<(), DbError>;

    /// Find a user by exact, case-sensitive username match.
    async fn find_by_username(&self, username: &str) -> Result<Option<UserRow>, DbError>;

    /// Insert a user record. Used for seeding and tests.
    async fn insert_user(&self, row: UserRow) -> Result<(), DbError>;
}

/// SQL implementation of the user repository
#[derive(Debug, Clone)]
pub struct SqlUserRepository {
    /// The database client
    db_client: DbClient,
}

impl SqlUserRepository {
    /// Create a new SQL user repository
    pub fn new(db_client: DbClient) -> Self {
        Self { db_client }
    }
}

impl UserRepository for SqlUserRepository {
    async fn init_schema(&self) -> Result<(), DbError> {
        debug!("Initializing users schema");

        let query = r#"
            CREATE TABLE IF NOT EXISTS users (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                username TEXT NOT NULL UNIQUE,
                email TEXT NOT NULL,
                display_name TEXT
            )
        "#;

        self.db_client.execute(query).await?;

        info!("Users schema initialized successfully");
        Ok(())
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<UserRow>, DbError> {
        debug!("Resolving directory record for username: {}", username);

        // The username column is unique; ordering by primary key keeps the
        // result deterministic even on a directory without the constraint.
        let query = r#"
            SELECT id, username, email, display_name
            FROM users
            WHERE username = $1
            ORDER BY id
            LIMIT 1
        "#;

        let result = sqlx::query(query)
            .bind(username)
            .fetch_optional(self.db_client.pool())
            .await
            .map_err(|e| DbError::QueryError(e.to_string()))?;

        Ok(result.map(|row| UserRow {
            id: row.try_get("id").ok(),
            username: row.try_get("username").unwrap_or_default(),
            email: row.try_get("email").unwrap_or_default(),
            display_name: row.try_get("display_name").ok(),
        }))
    }

    async fn insert_user(&self, row: UserRow) -> Result<(), DbError> {
        debug!("Inserting directory record for username: {}", row.username);

        let query = r#"
            INSERT INTO users (username, email, display_name)
            VALUES ($1, $2, $3)
        "#;

        sqlx::query(query)
            .bind(&row.username)
            .bind(&row.email)
            .bind(&row.display_name)
            .execute(self.db_client.pool())
            .await
            .map_err(|e| DbError::QueryError(e.to_string()))?;

        Ok(())
    }
}
