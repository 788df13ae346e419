use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::server::error::error_response;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No valid session token accompanied the request.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("Request is not signed in")]
    NotSignedIn,

    /// Email and password did not match a stored account.
    ///
    /// Results in a 401 Unauthorized response with a message that does not reveal
    /// which of the two was wrong.
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// Token referenced a user id that no longer exists.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("User {0} from session token not found in database")]
    UserNotInDatabase(i32),

    /// User is signed in but lacks permission for the resource.
    ///
    /// Results in a 403 Forbidden response. The reason is logged, not returned.
    ///
    /// # Fields
    /// - User id that was denied
    /// - Reason for the denial, for server-side logs
    #[error("Access denied for user {0}: {1}")]
    AccessDenied(i32, String),

    /// CSRF state validation failed during OAuth callback.
    ///
    /// The state in the callback URL does not match the token stored in the session.
    /// Results in a 400 Bad Request response.
    #[error("Failed to login user due to CSRF state mismatch")]
    CsrfValidationFailed,

    /// Payment callback signature did not match the expected HMAC.
    ///
    /// Results in a 401 Unauthorized response. The order is marked failed before this
    /// error is returned.
    #[error("Payment signature verification failed for order {0}")]
    InvalidPaymentSignature(String),

    /// Exchanging the OAuth authorization code or fetching the profile failed.
    ///
    /// Results in a 502 Bad Gateway response.
    #[error("OAuth exchange failed: {0}")]
    OAuthExchange(String),
}

/// Converts authentication errors into HTTP responses.
///
/// Every variant is logged at debug level while the client receives a short, generic
/// message.
///
/// # Returns
/// - 400 Bad Request - For CSRF failures
/// - 401 Unauthorized - For missing sessions, bad credentials and bad payment signatures
/// - 403 Forbidden - For permission and ownership failures
/// - 502 Bad Gateway - For failed OAuth exchanges
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::NotSignedIn | Self::UserNotInDatabase(_) => {
                error_response(StatusCode::UNAUTHORIZED, "You need to sign in first")
            }
            Self::InvalidCredentials => {
                error_response(StatusCode::UNAUTHORIZED, "Invalid email or password")
            }
            Self::AccessDenied(_, _) => error_response(
                StatusCode::FORBIDDEN,
                "You are not allowed to perform this action",
            ),
            Self::CsrfValidationFailed => error_response(
                StatusCode::BAD_REQUEST,
                "There was an issue logging you in, please try again.",
            ),
            Self::InvalidPaymentSignature(_) => {
                error_response(StatusCode::UNAUTHORIZED, "Payment verification failed")
            }
            Self::OAuthExchange(_) => error_response(
                StatusCode::BAD_GATEWAY,
                "Could not complete sign in with Google",
            ),
        }
    }
}
