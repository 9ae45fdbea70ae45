//! Session-related types.
//!
//! Types stored in the session for authentication state. The cart snapshot
//! key lives with the cart store (`crate::cart::store::CART_KEY`).

use serde::{Deserialize, Serialize};

use lavibaby_core::{Email, UserId};

use crate::models::user::UserRole;

/// Session-stored user identity.
///
/// Minimal data stored in the session to identify the logged-in user without
/// a provider round-trip on every request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentUser {
    /// Auth provider user ID.
    pub id: UserId,
    /// User's email address.
    pub email: Email,
    /// Display name from the profile.
    pub name: String,
    /// Access role from the profile.
    pub role: UserRole,
    /// Provider access token, kept for the logout call.
    pub access_token: String,
}

/// Session keys for authentication data.
pub mod keys {
    /// Key for storing the current logged-in user.
    pub const CURRENT_USER: &str = "current_user";
}
