//! CLI command implementations.

pub mod admin;
pub mod migrate;
pub mod seed;

use secrecy::SecretString;
use sqlx::PgPool;

/// Error type shared by all commands.
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error("missing environment variable: {0}")]
    MissingEnv(String),
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("migration error: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),
    #[error("repository error: {0}")]
    Repository(#[from] lavibaby_storefront::db::RepositoryError),
}

/// Connect to the hosted database using the storefront's pool settings.
pub async fn connect() -> Result<PgPool, CommandError> {
    let _ = dotenvy::dotenv();

    let url = std::env::var("LAVIBABY_DATABASE_URL")
        .or_else(|_| std::env::var("DATABASE_URL"))
        .map_err(|_| CommandError::MissingEnv("LAVIBABY_DATABASE_URL".to_owned()))?;

    Ok(lavibaby_storefront::db::create_pool(&SecretString::from(url)).await?)
}
