//! Admin role management.

use lavibaby_storefront::db::profiles::ProfileRepository;

use super::{CommandError, connect};

/// Grant the admin role to the account registered under `email`.
///
/// # Errors
///
/// Returns `CommandError` when the database is unreachable.
pub async fn promote(email: &str) -> Result<(), CommandError> {
    let pool = connect().await?;

    let promoted = ProfileRepository::new(&pool).promote_to_admin(email).await?;
    if promoted {
        tracing::info!("{email} is now an admin");
    } else {
        tracing::warn!("no account found for {email}");
    }

    Ok(())
}
