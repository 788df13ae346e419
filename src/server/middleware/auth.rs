//! Authentication extraction and permission guard.
//!
//! Signed-in requests carry a JWT in the `access_token` HTTP-only cookie, or in an
//! `Authorization: Bearer` header for non-browser clients. `AuthToken` extracts and
//! verifies it for every handler; `AuthGuard` then loads the user and checks the
//! permissions the handler requires.

use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts, HeaderMap},
};
use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;
use std::convert::Infallible;
use time::Duration;
use tower_sessions::cookie::{Cookie, SameSite};

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::User,
    service::token::{TokenService, TOKEN_LIFETIME_DAYS},
    state::AppState,
};

/// Name of the cookie holding the session token.
pub const ACCESS_TOKEN_COOKIE: &str = "access_token";

/// Builds the HTTP-only cookie that carries a freshly issued token.
pub fn session_cookie(token: String) -> Cookie<'static> {
    Cookie::build((ACCESS_TOKEN_COOKIE, token))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .max_age(Duration::days(TOKEN_LIFETIME_DAYS))
        .build()
}

/// Builds a cookie that immediately expires the session token.
pub fn expired_session_cookie() -> Cookie<'static> {
    Cookie::build((ACCESS_TOKEN_COOKIE, ""))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .max_age(Duration::ZERO)
        .build()
}

/// Identity attached to a request.
///
/// Holds the user id from a valid token, or `None` when the request carried no token
/// or an invalid one. Extraction never fails; handlers decide whether sign-in is
/// required through `AuthGuard`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthToken {
    user_id: Option<i32>,
}

impl AuthToken {
    pub fn new(user_id: Option<i32>) -> Self {
        Self { user_id }
    }

    pub fn anonymous() -> Self {
        Self { user_id: None }
    }

    pub fn user_id(&self) -> Option<i32> {
        self.user_id
    }

    /// Reads and verifies the token from request headers.
    ///
    /// The `Authorization: Bearer` header takes precedence over the cookie.
    ///
    /// # Arguments
    /// - `headers` - Request headers
    /// - `tokens` - Token service holding the signing secret
    ///
    /// # Returns
    /// - `AuthToken` - With the user id if a valid token was found
    pub fn from_headers(headers: &HeaderMap, tokens: &TokenService) -> Self {
        let Some(raw) = bearer_token(headers).or_else(|| cookie_token(headers)) else {
            return Self::anonymous();
        };

        match tokens.verify(&raw) {
            Ok(user_id) => Self::new(Some(user_id)),
            Err(e) => {
                tracing::debug!("Ignoring session token: {}", e);
                Self::anonymous()
            }
        }
    }
}

fn bearer_token(headers: &HeaderMap) -> Option<String> {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(|token| token.trim().to_string())
        .filter(|token| !token.is_empty())
}

fn cookie_token(headers: &HeaderMap) -> Option<String> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| Cookie::split_parse(value.to_string()))
        .filter_map(|cookie| cookie.ok())
        .find(|cookie| cookie.name() == ACCESS_TOKEN_COOKIE)
        .map(|cookie| cookie.value().to_string())
        .filter(|token| !token.is_empty())
}

impl FromRequestParts<AppState> for AuthToken {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let tokens = TokenService::new(&state.config.jwt_secret);

        Ok(Self::from_headers(&parts.headers, &tokens))
    }
}

pub enum Permission {
    /// User has the admin role.
    Admin,
    /// User is a verified seller, or an admin.
    Seller,
}

/// Loads the signed-in user and checks permissions.
pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    token: &'a AuthToken,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, token: &'a AuthToken) -> Self {
        Self { db, token }
    }

    /// Requires a signed-in user holding every listed permission.
    ///
    /// An empty permission list only requires sign-in.
    ///
    /// # Arguments
    /// - `permissions` - Permissions the user must hold
    ///
    /// # Returns
    /// - `Ok(User)` - The signed-in user
    /// - `Err(AuthError::NotSignedIn)` - No valid token on the request
    /// - `Err(AuthError::UserNotInDatabase)` - Token refers to a deleted user
    /// - `Err(AuthError::AccessDenied)` - User lacks a required permission
    pub async fn require(&self, permissions: &[Permission]) -> Result<User, AppError> {
        let Some(user) = self.optional().await? else {
            return Err(AuthError::NotSignedIn.into());
        };

        for permission in permissions {
            match permission {
                Permission::Admin => {
                    if !user.is_admin() {
                        return Err(AuthError::AccessDenied(
                            user.id,
                            "Admin permission required".to_string(),
                        )
                        .into());
                    }
                }
                Permission::Seller => {
                    if !user.is_verified_seller() && !user.is_admin() {
                        return Err(AuthError::AccessDenied(
                            user.id,
                            "Verified seller permission required".to_string(),
                        )
                        .into());
                    }
                }
            }
        }

        Ok(user)
    }

    /// Loads the signed-in user if there is one.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - Valid token for an existing user
    /// - `Ok(None)` - No token on the request
    /// - `Err(AuthError::UserNotInDatabase)` - Token refers to a deleted user
    pub async fn optional(&self) -> Result<Option<User>, AppError> {
        let Some(user_id) = self.token.user_id() else {
            return Ok(None);
        };

        let user_repo = UserRepository::new(self.db);
        let Some(user) = user_repo.find_by_id(user_id).await? else {
            return Err(AuthError::UserNotInDatabase(user_id).into());
        };

        Ok(Some(user))
    }
}
