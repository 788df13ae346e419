//! Application state shared across all request handlers.
//!
//! `AppState` is initialized once during startup and then cloned for each request
//! through Axum's state extraction. It holds:
//! - Database connection pool for data persistence
//! - HTTP client for calls to storage, mail, AI and payment providers
//! - OAuth2 client for Google sign-in
//! - Immutable configuration (secrets, provider settings, application URL)

use oauth2::basic::{BasicErrorResponseType, BasicTokenType};
use oauth2::{
    Client, EmptyExtraTokenFields, EndpointNotSet, EndpointSet, RevocationErrorResponseType,
    StandardErrorResponse, StandardRevocableToken, StandardTokenIntrospectionResponse,
    StandardTokenResponse,
};
use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::server::config::Config;

/// Type alias for the OAuth2 client configured for Google authentication.
pub(crate) type OAuth2Client = Client<
    StandardErrorResponse<BasicErrorResponseType>,
    StandardTokenResponse<EmptyExtraTokenFields, BasicTokenType>,
    StandardTokenIntrospectionResponse<EmptyExtraTokenFields, BasicTokenType>,
    StandardRevocableToken,
    StandardErrorResponse<RevocationErrorResponseType>,
    EndpointSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointSet,
>;

/// Application state containing shared resources and dependencies.
///
/// All fields are cheap to clone: the connection pool and `reqwest::Client` share their
/// internals, and the configuration sits behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// HTTP client for outbound provider requests.
    ///
    /// Configured without redirects to prevent SSRF through provider responses.
    pub http_client: reqwest::Client,

    /// OAuth2 client for the Google sign-in flow.
    pub oauth_client: OAuth2Client,

    /// Application configuration loaded at startup.
    pub config: Arc<Config>,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `http_client` - HTTP client for external API requests
    /// - `oauth_client` - OAuth2 client for Google authentication
    /// - `config` - Loaded application configuration
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(
        db: DatabaseConnection,
        http_client: reqwest::Client,
        oauth_client: OAuth2Client,
        config: Config,
    ) -> Self {
        Self {
            db,
            http_client,
            oauth_client,
            config: Arc::new(config),
        }
    }
}
