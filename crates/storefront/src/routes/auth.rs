//! Authentication route handlers.
//!
//! Registration and login proxy the hosted auth provider; the session keeps
//! the authenticated identity so later requests avoid a provider round-trip.

use axum::{Json, extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};
use tower_sessions::Session;
use tracing::instrument;

use lavibaby_core::UserId;

use crate::db::profiles::ProfileRepository;
use crate::error::{AppError, Result};
use crate::middleware::{OptionalAuth, RequireAuth, clear_current_user, set_current_user};
use crate::models::session::CurrentUser;
use crate::models::user::UserRole;
use crate::services::auth::AuthSession;
use crate::state::AppState;

/// Registration request body.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub name: String,
}

/// Login request body.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Current user display data.
#[derive(Debug, Serialize)]
pub struct UserView {
    pub id: UserId,
    pub email: String,
    pub name: String,
    pub role: UserRole,
}

impl From<&CurrentUser> for UserView {
    fn from(user: &CurrentUser) -> Self {
        Self {
            id: user.id,
            email: user.email.as_str().to_owned(),
            name: user.name.clone(),
            role: user.role,
        }
    }
}

/// Turn a provider session into a logged-in local session.
///
/// The profile row supplies the display name and role; accounts without one
/// (created outside this service) fall back to the email's local part and
/// the plain user role.
async fn establish_session(
    state: &AppState,
    session: &Session,
    auth_session: AuthSession,
) -> Result<CurrentUser> {
    let profile = ProfileRepository::new(state.pool())
        .get(auth_session.user_id)
        .await?;

    let (name, role) = profile.map_or_else(
        || (auth_session.email.local_part().to_owned(), UserRole::User),
        |profile| (profile.name, profile.role),
    );

    let current = CurrentUser {
        id: auth_session.user_id,
        email: auth_session.email,
        name,
        role,
        access_token: auth_session.access_token,
    };

    set_current_user(session, &current)
        .await
        .map_err(|e| AppError::Internal(format!("failed to persist session: {e}")))?;

    Ok(current)
}

/// Create an account with the hosted provider and log in.
#[instrument(skip_all)]
pub async fn register(
    State(state): State<AppState>,
    session: Session,
    Json(body): Json<RegisterRequest>,
) -> Result<Json<UserView>> {
    let auth_session = state
        .auth()
        .sign_up(&body.email, &body.password, &body.name)
        .await?;

    ProfileRepository::new(state.pool())
        .create_if_missing(auth_session.user_id, &body.name)
        .await?;

    let current = establish_session(&state, &session, auth_session).await?;
    Ok(Json(UserView::from(&current)))
}

/// Password login against the hosted provider.
#[instrument(skip_all)]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Json(body): Json<LoginRequest>,
) -> Result<Json<UserView>> {
    let auth_session = state.auth().sign_in(&body.email, &body.password).await?;
    let current = establish_session(&state, &session, auth_session).await?;
    Ok(Json(UserView::from(&current)))
}

/// End the session.
///
/// The provider call is best-effort: the local session is what actually logs
/// the user out, so a provider hiccup only gets a warning.
#[instrument(skip_all)]
pub async fn logout(
    State(state): State<AppState>,
    session: Session,
    OptionalAuth(user): OptionalAuth,
) -> StatusCode {
    if let Some(user) = user {
        if let Err(e) = state.auth().sign_out(&user.access_token).await {
            tracing::warn!("provider logout failed: {e}");
        }
    }

    clear_current_user(&session).await;
    StatusCode::NO_CONTENT
}

/// Show the logged-in user.
#[instrument(skip_all)]
pub async fn me(RequireAuth(user): RequireAuth) -> Json<UserView> {
    Json(UserView::from(&user))
}
