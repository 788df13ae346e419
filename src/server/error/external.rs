use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::server::error::error_response;

/// Failures reported by third-party providers.
#[derive(Error, Debug)]
pub enum ExternalError {
    /// Provider answered with a non-success status.
    ///
    /// # Fields
    /// - `provider` - Provider name for logs
    /// - `status` - HTTP status returned by the provider
    /// - `body` - Response body returned by the provider
    #[error("{provider} responded with status {status}: {body}")]
    Provider {
        provider: &'static str,
        status: u16,
        body: String,
    },

    /// Provider answered successfully but the payload was missing expected data.
    #[error("{provider} returned an unusable response: {reason}")]
    InvalidResponse {
        provider: &'static str,
        reason: String,
    },
}

impl ExternalError {
    /// Checks a provider response and converts non-2xx statuses into errors.
    ///
    /// # Arguments
    /// - `provider` - Provider name for logs
    /// - `response` - Response to check
    ///
    /// # Returns
    /// - `Ok(Response)` - The unchanged response on success
    /// - `Err(ExternalError::Provider)` - Status and body of the failed response
    pub async fn check(
        provider: &'static str,
        response: reqwest::Response,
    ) -> Result<reqwest::Response, ExternalError> {
        if response.status().is_success() {
            return Ok(response);
        }

        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();

        Err(ExternalError::Provider {
            provider,
            status,
            body,
        })
    }
}

/// Logs the provider failure and returns 502 Bad Gateway with a generic message.
impl IntoResponse for ExternalError {
    fn into_response(self) -> Response {
        tracing::error!("{}", self);

        error_response(
            StatusCode::BAD_GATEWAY,
            "An external service failed to respond, please try again later.",
        )
    }
}
