//! Site settings handlers.

use axum::{Json, extract::State};
use tracing::instrument;

use crate::db::settings::SettingsRepository;
use crate::error::Result;
use crate::models::settings::SiteSettings;
use crate::state::AppState;

/// Show the public site settings.
///
/// Falls back to the built-in defaults until an admin saves a document.
#[instrument(skip(state))]
pub async fn show(State(state): State<AppState>) -> Result<Json<SiteSettings>> {
    let settings = SettingsRepository::new(state.pool())
        .get_site_settings()
        .await?
        .unwrap_or_default();

    Ok(Json(settings))
}
