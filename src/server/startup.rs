use oauth2::{basic::BasicClient, AuthUrl, ClientId, ClientSecret, RedirectUrl, TokenUrl};
use axum::http::{header, HeaderValue, Method};
use time::Duration;
use tower_http::cors::CorsLayer;
use tower_sessions::{cookie::SameSite, Expiry, SessionManagerLayer};
use tower_sessions_sqlx_store::SqliteStore;

use crate::server::{
    config::Config,
    error::{config::ConfigError, AppError},
    state::OAuth2Client,
};

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool using the connection string from configuration, then
/// runs all pending SeaORM migrations so the schema is up to date before any request is
/// served.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::DbErr)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Creates the session layer used to carry OAuth CSRF state across the Google redirect.
///
/// Sessions are stored in the application database. They are short lived: the sign-in
/// itself is carried by the JWT cookie, not the session.
///
/// # Arguments
/// - `db` - Database connection whose pool backs the session store
///
/// # Returns
/// - `Ok(SessionManagerLayer)` - Layer ready to attach to the router
/// - `Err(AppError::SqlxErr)` - Failed to create the session table
pub async fn connect_to_session(
    db: &sea_orm::DatabaseConnection,
) -> Result<SessionManagerLayer<SqliteStore>, AppError> {
    let pool = db.get_sqlite_connection_pool();
    let session_store = SqliteStore::new(pool.clone());

    session_store.migrate().await?;

    let session = SessionManagerLayer::new(session_store)
        .with_secure(false)
        .with_same_site(SameSite::Lax)
        .with_expiry(Expiry::OnInactivity(Duration::minutes(10)));

    Ok(session)
}

/// Builds the shared HTTP client for outbound provider calls.
///
/// Redirects are disabled so provider responses cannot bounce requests to
/// arbitrary hosts.
pub fn setup_reqwest_client() -> Result<reqwest::Client, AppError> {
    let client = reqwest::ClientBuilder::new()
        .redirect(reqwest::redirect::Policy::none())
        .build()?;

    Ok(client)
}

/// Builds the Google OAuth2 client from configuration.
///
/// # Returns
/// - `Ok(OAuth2Client)` - Client with authorization, token and redirect endpoints set
/// - `Err(AppError::ConfigErr(InvalidUrl))` - One of the configured URLs failed to parse
pub fn setup_oauth_client(config: &Config) -> Result<OAuth2Client, AppError> {
    let google = &config.google;

    let auth_url = AuthUrl::new(google.auth_url.clone()).map_err(|e| invalid_url("auth_url", e))?;
    let token_url =
        TokenUrl::new(google.token_url.clone()).map_err(|e| invalid_url("token_url", e))?;
    let redirect_url = RedirectUrl::new(google.redirect_url.clone())
        .map_err(|e| invalid_url("GOOGLE_REDIRECT_URL", e))?;

    let client = BasicClient::new(ClientId::new(google.client_id.clone()))
        .set_client_secret(ClientSecret::new(google.client_secret.clone()))
        .set_auth_uri(auth_url)
        .set_token_uri(token_url)
        .set_redirect_uri(redirect_url);

    Ok(client)
}

/// Builds the CORS layer allowing the configured application origin.
///
/// Credentials are allowed so the session cookie travels with requests from a client
/// served on a different port during development.
///
/// # Returns
/// - `Ok(CorsLayer)` - Layer restricted to `APP_URL`
/// - `Err(AppError::ConfigErr(InvalidUrl))` - `APP_URL` is not a valid header value
pub fn setup_cors(config: &Config) -> Result<CorsLayer, AppError> {
    let origin = HeaderValue::from_str(config.app_url.trim_end_matches('/')).map_err(|e| {
        ConfigError::InvalidUrl {
            name: "APP_URL".to_string(),
            reason: e.to_string(),
        }
    })?;

    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
        .allow_credentials(true))
}

fn invalid_url(name: &str, err: oauth2::url::ParseError) -> ConfigError {
    ConfigError::InvalidUrl {
        name: name.to_string(),
        reason: err.to_string(),
    }
}
