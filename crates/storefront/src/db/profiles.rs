//! Profile repository.
//!
//! Profiles carry the display name and role for accounts owned by the hosted
//! auth provider; the profile id IS the provider's user id.

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use lavibaby_core::UserId;

use super::RepositoryError;
use crate::models::user::{Profile, UserRole};

#[derive(sqlx::FromRow)]
struct ProfileRow {
    id: Uuid,
    name: String,
    role: String,
    created_at: DateTime<Utc>,
}

impl TryFrom<ProfileRow> for Profile {
    type Error = RepositoryError;

    fn try_from(row: ProfileRow) -> Result<Self, Self::Error> {
        let role = match row.role.as_str() {
            "user" => UserRole::User,
            "admin" => UserRole::Admin,
            other => {
                return Err(RepositoryError::DataCorruption(format!(
                    "invalid role in database: {other}"
                )));
            }
        };

        Ok(Self {
            id: UserId::new(row.id),
            name: row.name,
            role,
            created_at: row.created_at,
        })
    }
}

/// Repository for profile database operations.
pub struct ProfileRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ProfileRepository<'a> {
    /// Create a new profile repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Get a profile by the auth provider's user ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    /// Returns `RepositoryError::DataCorruption` if the stored role is invalid.
    pub async fn get(&self, id: UserId) -> Result<Option<Profile>, RepositoryError> {
        let row: Option<ProfileRow> =
            sqlx::query_as("SELECT id, name, role, created_at FROM profiles WHERE id = $1")
                .bind(id)
                .fetch_optional(self.pool)
                .await?;

        row.map(Profile::try_from).transpose()
    }

    /// Create a profile for a freshly registered account.
    ///
    /// Idempotent: an existing row wins, so a retried registration does not
    /// overwrite a name edited elsewhere.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn create_if_missing(&self, id: UserId, name: &str) -> Result<(), RepositoryError> {
        sqlx::query(
            "INSERT INTO profiles (id, name, role) VALUES ($1, $2, 'user') \
             ON CONFLICT (id) DO NOTHING",
        )
        .bind(id)
        .bind(name)
        .execute(self.pool)
        .await?;

        Ok(())
    }

    /// Grant the admin role to the account registered under `email`.
    ///
    /// The email lives with the auth provider, so the lookup joins its
    /// `auth.users` table. Returns `false` when no such account exists.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn promote_to_admin(&self, email: &str) -> Result<bool, RepositoryError> {
        let result = sqlx::query(
            "UPDATE profiles p SET role = 'admin' \
             FROM auth.users u \
             WHERE u.id = p.id AND u.email = $1",
        )
        .bind(email)
        .execute(self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}
