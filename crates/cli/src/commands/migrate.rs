//! Database migration command.

use super::{CommandError, connect};

/// Run the storefront schema migrations.
///
/// # Errors
///
/// Returns `CommandError` when the database is unreachable or a migration
/// fails to apply.
pub async fn run() -> Result<(), CommandError> {
    let pool = connect().await?;

    lavibaby_storefront::db::migrator().run(&pool).await?;
    tracing::info!("migrations applied");

    Ok(())
}
