//! Database operations against the hosted Postgres.
//!
//! # Tables
//!
//! - `profiles` - User display names and roles (ids match the auth provider)
//! - `categories` / `products` - Catalog
//! - `orders` / `order_items` - Captured orders
//! - `site_settings` - JSONB documents keyed by name
//! - `session` - Managed by the tower-sessions Postgres store
//!
//! Queries use the runtime query APIs (`query_as` + `bind`) rather than the
//! compile-time checked macros: the hosted database is not reachable at
//! build time.
//!
//! # Migrations
//!
//! Migrations are stored in `crates/storefront/migrations/` and run via:
//! ```bash
//! cargo run -p lavibaby-cli -- migrate
//! ```

use std::time::Duration;

use secrecy::ExposeSecret;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

pub mod categories;
pub mod orders;
pub mod products;
pub mod profiles;
pub mod settings;

/// Error type shared by all repositories.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    /// Query failed.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A stored value failed domain validation.
    #[error("data corruption: {0}")]
    DataCorruption(String),

    /// Unique constraint violated.
    #[error("conflict: {0}")]
    Conflict(String),
}

/// Create a Postgres connection pool with sensible defaults.
///
/// # Errors
///
/// Returns `sqlx::Error` if the connection cannot be established.
pub async fn create_pool(database_url: &secrecy::SecretString) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(10)
        .min_connections(2)
        .acquire_timeout(Duration::from_secs(10))
        .connect(database_url.expose_secret())
        .await
}

/// Embedded schema migrations.
#[must_use]
pub fn migrator() -> sqlx::migrate::Migrator {
    sqlx::migrate!()
}
