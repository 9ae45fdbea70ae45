//! User profile types.
//!
//! Credentials live with the hosted auth provider; the database only holds
//! the profile row (display name and role) keyed by the provider's user id.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use lavibaby_core::UserId;

/// Role attached to a profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    User,
    Admin,
}

impl UserRole {
    /// Returns the lowercase label stored in the database.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Admin => "admin",
        }
    }

    #[must_use]
    pub const fn is_admin(self) -> bool {
        matches!(self, Self::Admin)
    }
}

/// A user's profile row.
#[derive(Debug, Clone)]
pub struct Profile {
    /// Auth provider user ID.
    pub id: UserId,
    /// Display name.
    pub name: String,
    /// Access role.
    pub role: UserRole,
    /// When the profile was created.
    pub created_at: DateTime<Utc>,
}
