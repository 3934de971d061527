// --- File: crates/keurplan_directory/src/lib.rs ---
//! SQL user directory client.
//!
//! The directory is the system of record mapping usernames to user
//! attributes. This crate owns the connection pool, the `users` repository
//! and the [`service::SqlDirectoryService`] adapter that the route layer
//! consumes through the `DirectoryService` trait.

pub mod client;
pub mod error;
pub mod repository;
pub mod service;

pub use client::DbClient;
pub use error::DbError;
pub use repository::{SqlUserRepository, UserRepository, UserRow};
pub use service::SqlDirectoryService;
