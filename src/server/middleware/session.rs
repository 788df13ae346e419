//! Type-safe session wrappers.
//!
//! The server session only carries short-lived OAuth state; the signed-in identity
//! lives in the JWT cookie.

use tower_sessions::Session;

use crate::server::error::{auth::AuthError, AppError};

const SESSION_OAUTH_CSRF_TOKEN: &str = "oauth:csrf_token";

/// CSRF protection session management.
///
/// Handles CSRF token storage and validation for the Google OAuth flow. The token is
/// stored when the login redirect is issued and validated during the callback.
pub struct CsrfSession<'a> {
    session: &'a Session,
}

impl<'a> CsrfSession<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Stores a CSRF token in the session.
    ///
    /// # Returns
    /// - `Ok(())` - Token successfully stored
    /// - `Err(AppError::SessionErr(_))` - Failed to store in session
    pub async fn set_token(&self, token: String) -> Result<(), AppError> {
        self.session.insert(SESSION_OAUTH_CSRF_TOKEN, token).await?;
        Ok(())
    }

    /// Removes the stored token and checks it against the callback state.
    ///
    /// The token is removed even on mismatch so each token can only be used once.
    ///
    /// # Arguments
    /// - `state` - `state` query parameter from the OAuth callback
    ///
    /// # Returns
    /// - `Ok(())` - Stored token matched
    /// - `Err(AuthError::CsrfValidationFailed)` - Token missing or different
    /// - `Err(AppError::SessionErr(_))` - Failed to access session
    pub async fn validate(&self, state: &str) -> Result<(), AppError> {
        let stored: Option<String> = self.session.remove(SESSION_OAUTH_CSRF_TOKEN).await?;

        match stored {
            Some(token) if token == state => Ok(()),
            _ => Err(AuthError::CsrfValidationFailed.into()),
        }
    }
}
