//! Authentication error types.

use thiserror::Error;

use crate::db::RepositoryError;

/// Errors that can occur during authentication operations.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Invalid email format.
    #[error("invalid email: {0}")]
    InvalidEmail(#[from] lavibaby_core::EmailError),

    /// Invalid credentials (wrong password or unknown account).
    #[error("invalid credentials")]
    InvalidCredentials,

    /// Account already registered.
    #[error("an account with this email already exists")]
    UserAlreadyExists,

    /// The provider rejected the request (e.g., password too weak).
    #[error("auth provider rejected the request: {message}")]
    Provider {
        /// HTTP status returned by the provider.
        status: u16,
        /// Provider error message, shown to the client as-is.
        message: String,
    },

    /// Could not reach the provider.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// Provider returned a payload we could not parse.
    #[error("malformed provider payload: {0}")]
    Parse(#[from] serde_json::Error),

    /// Profile lookup failed.
    #[error("database error: {0}")]
    Repository(#[from] RepositoryError),
}

impl AuthError {
    /// Message safe to send to the client.
    #[must_use]
    pub fn client_message(&self) -> String {
        match self {
            Self::Http(_) | Self::Parse(_) | Self::Repository(_) => {
                "authentication service unavailable".to_owned()
            }
            Self::Provider { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }
}
