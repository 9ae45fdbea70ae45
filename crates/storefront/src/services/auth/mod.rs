//! Authentication pass-through to the hosted auth provider.
//!
//! The storefront never stores or verifies passwords. Signup, login and
//! logout forward to the provider's REST endpoints; the session keeps the
//! resulting identity. Provider error messages are propagated to the client
//! the way the frontend always displayed them.

mod error;

pub use error::AuthError;

use reqwest::StatusCode;
use serde::Deserialize;
use serde_json::json;

use lavibaby_core::{Email, UserId};

use crate::config::SupabaseConfig;

/// An authenticated provider session.
#[derive(Debug, Clone)]
pub struct AuthSession {
    /// Provider user ID.
    pub user_id: UserId,
    /// Verified account email.
    pub email: Email,
    /// Bearer token for provider calls (kept for logout).
    pub access_token: String,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    user: ProviderUser,
}

#[derive(Debug, Deserialize)]
struct ProviderUser {
    id: UserId,
    email: String,
}

/// Error payload shapes the provider uses across endpoints.
#[derive(Debug, Deserialize)]
struct ProviderErrorBody {
    msg: Option<String>,
    message: Option<String>,
    error_description: Option<String>,
}

impl ProviderErrorBody {
    fn into_message(self) -> Option<String> {
        self.msg.or(self.message).or(self.error_description)
    }
}

/// Client for the hosted auth provider's REST API.
///
/// Cheaply cloneable; `reqwest::Client` pools connections internally.
#[derive(Clone)]
pub struct AuthClient {
    http: reqwest::Client,
    endpoint: String,
    api_key: String,
}

impl AuthClient {
    /// Create a new auth client.
    #[must_use]
    pub fn new(config: &SupabaseConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: config.auth_endpoint(),
            api_key: config.anon_key.clone(),
        }
    }

    /// Register a new account and return a logged-in session.
    ///
    /// The signup response shape depends on the project's email-confirmation
    /// settings, so a password grant afterwards establishes the session for
    /// both configurations.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::UserAlreadyExists` for duplicate registrations and
    /// `AuthError::Provider` for other provider rejections (weak password,
    /// disabled signups).
    pub async fn sign_up(
        &self,
        email: &str,
        password: &str,
        name: &str,
    ) -> Result<AuthSession, AuthError> {
        let email = Email::parse(email)?;

        let response = self
            .http
            .post(format!("{}/signup", self.endpoint))
            .header("apikey", &self.api_key)
            .json(&json!({
                "email": email.as_str(),
                "password": password,
                "data": { "name": name },
            }))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::provider_error(response).await);
        }

        self.sign_in(email.as_str(), password).await
    }

    /// Log in with email and password.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidCredentials` when the provider rejects the
    /// grant.
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<AuthSession, AuthError> {
        let email = Email::parse(email)?;

        let response = self
            .http
            .post(format!("{}/token?grant_type=password", self.endpoint))
            .header("apikey", &self.api_key)
            .json(&json!({
                "email": email.as_str(),
                "password": password,
            }))
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::BAD_REQUEST || status == StatusCode::UNAUTHORIZED {
            return Err(AuthError::InvalidCredentials);
        }
        if !status.is_success() {
            return Err(Self::provider_error(response).await);
        }

        let token: TokenResponse = response.json().await?;
        let email = Email::parse(&token.user.email)?;

        Ok(AuthSession {
            user_id: token.user.id,
            email,
            access_token: token.access_token,
        })
    }

    /// Revoke the provider session.
    ///
    /// An already-expired token is treated as success - the local session is
    /// what actually logs the user out.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Http` when the provider is unreachable.
    pub async fn sign_out(&self, access_token: &str) -> Result<(), AuthError> {
        let response = self
            .http
            .post(format!("{}/logout", self.endpoint))
            .header("apikey", &self.api_key)
            .bearer_auth(access_token)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() || status == StatusCode::UNAUTHORIZED {
            Ok(())
        } else {
            Err(Self::provider_error(response).await)
        }
    }

    /// Map a non-success provider response to an error.
    async fn provider_error(response: reqwest::Response) -> AuthError {
        let status = response.status();
        let message = response
            .json::<ProviderErrorBody>()
            .await
            .ok()
            .and_then(ProviderErrorBody::into_message)
            .unwrap_or_else(|| "authentication failed".to_owned());

        if message.to_lowercase().contains("already registered") {
            return AuthError::UserAlreadyExists;
        }

        AuthError::Provider {
            status: status.as_u16(),
            message,
        }
    }
}
