//! Google OAuth2 sign-in.

use oauth2::{url::Url, AuthorizationCode, CsrfToken, Scope, TokenResponse};
use rand::{distr::Alphanumeric, Rng};
use sea_orm::DatabaseConnection;
use serde::Deserialize;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::{CreateUserParams, User},
    service::auth::DEFAULT_AVATAR,
    state::OAuth2Client,
};

/// Attempts at finding a free username before giving up.
const USERNAME_ATTEMPTS: usize = 5;

/// Profile fields returned by Google's userinfo endpoint.
#[derive(Debug, Deserialize)]
pub struct GoogleProfile {
    pub email: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub picture: Option<String>,
}

pub struct GoogleAuthService<'a> {
    db: &'a DatabaseConnection,
    http_client: &'a reqwest::Client,
    oauth_client: &'a OAuth2Client,
    userinfo_url: &'a str,
}

impl<'a> GoogleAuthService<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        http_client: &'a reqwest::Client,
        oauth_client: &'a OAuth2Client,
        userinfo_url: &'a str,
    ) -> Self {
        Self {
            db,
            http_client,
            oauth_client,
            userinfo_url,
        }
    }

    /// Builds the Google consent URL and the CSRF token to store in the session.
    pub fn login_url(&self) -> (Url, CsrfToken) {
        let (authorize_url, csrf_state) = self
            .oauth_client
            .authorize_url(CsrfToken::new_random)
            .add_scope(Scope::new("openid".to_string()))
            .add_scope(Scope::new("email".to_string()))
            .add_scope(Scope::new("profile".to_string()))
            .url();

        (authorize_url, csrf_state)
    }

    /// Completes the OAuth flow and signs the user in.
    ///
    /// Exchanges the authorization code, fetches the Google profile, and returns the
    /// account with the same email, creating one if none exists.
    ///
    /// # Arguments
    /// - `authorization_code` - `code` query parameter from the callback
    ///
    /// # Returns
    /// - `Ok(User)` - Existing or newly created account
    /// - `Err(AuthError::OAuthExchange)` - Code exchange or profile fetch failed
    pub async fn callback(&self, authorization_code: String) -> Result<User, AppError> {
        let token = self
            .oauth_client
            .exchange_code(AuthorizationCode::new(authorization_code))
            .request_async(self.http_client)
            .await
            .map_err(|e| AuthError::OAuthExchange(e.to_string()))?;

        let profile = self
            .fetch_profile(token.access_token().secret())
            .await?;

        self.sign_in_profile(profile).await
    }

    /// Retrieves the Google profile for an access token.
    async fn fetch_profile(&self, access_token: &str) -> Result<GoogleProfile, AppError> {
        let response = self
            .http_client
            .get(self.userinfo_url)
            .bearer_auth(access_token)
            .send()
            .await
            .map_err(|e| AuthError::OAuthExchange(e.to_string()))?;

        if !response.status().is_success() {
            return Err(AuthError::OAuthExchange(format!(
                "userinfo responded with status {}",
                response.status()
            ))
            .into());
        }

        let profile = response
            .json::<GoogleProfile>()
            .await
            .map_err(|e| AuthError::OAuthExchange(e.to_string()))?;

        Ok(profile)
    }

    /// Finds or creates the account for a Google profile.
    ///
    /// New accounts get a username derived from the display name and a random
    /// password, so a password reset can later enable local sign-in.
    pub async fn sign_in_profile(&self, profile: GoogleProfile) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);
        let email = profile.email.trim().to_lowercase();

        if let Some(user) = user_repo.find_by_email(&email).await? {
            return Ok(user);
        }

        let base = username_base(profile.name.as_deref().unwrap_or(&email));
        let mut username = None;
        for _ in 0..USERNAME_ATTEMPTS {
            let candidate = format!("{}{}", base, random_string(4).to_lowercase());
            if user_repo.find_by_username(&candidate).await?.is_none() {
                username = Some(candidate);
                break;
            }
        }
        let Some(username) = username else {
            return Err(AppError::Conflict(
                "Could not allocate a username, please try again".to_string(),
            ));
        };

        let password_hash = bcrypt::hash(random_string(16), bcrypt::DEFAULT_COST)?;

        let user = user_repo
            .create(CreateUserParams {
                username,
                email,
                password_hash,
                avatar: profile
                    .picture
                    .unwrap_or_else(|| DEFAULT_AVATAR.to_string()),
            })
            .await?;

        Ok(user)
    }
}

/// Lowercased alphanumeric prefix of a display name, at most 20 characters.
pub fn username_base(name: &str) -> String {
    let base: String = name
        .split('@')
        .next()
        .unwrap_or_default()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .take(20)
        .collect();

    if base.is_empty() {
        "user".to_string()
    } else {
        base
    }
}

fn random_string(len: usize) -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(len)
        .map(char::from)
        .collect()
}
