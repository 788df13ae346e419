//! Session token issuing and verification.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::server::error::{auth::AuthError, AppError};

/// Days a session token stays valid.
pub const TOKEN_LIFETIME_DAYS: i64 = 7;

/// JWT claims carried in the session cookie.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// User id.
    pub sub: String,
    /// Expiration time (Unix timestamp).
    pub exp: i64,
    /// Issued at time (Unix timestamp).
    pub iat: i64,
}

/// Signs and verifies HS256 session tokens.
pub struct TokenService<'a> {
    secret: &'a str,
}

impl<'a> TokenService<'a> {
    pub fn new(secret: &'a str) -> Self {
        Self { secret }
    }

    /// Issues a token for a user, valid for [`TOKEN_LIFETIME_DAYS`].
    ///
    /// # Returns
    /// - `Ok(String)` - Encoded token
    /// - `Err(AppError::JwtErr)` - Signing failed
    pub fn issue(&self, user_id: i32) -> Result<String, AppError> {
        let now = Utc::now();
        let claims = Claims {
            sub: user_id.to_string(),
            iat: now.timestamp(),
            exp: (now + Duration::days(TOKEN_LIFETIME_DAYS)).timestamp(),
        };

        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.secret.as_bytes()),
        )?;

        Ok(token)
    }

    /// Verifies a token's signature and expiry and returns the user id it carries.
    ///
    /// # Returns
    /// - `Ok(i32)` - User id from a valid token
    /// - `Err(AuthError::NotSignedIn)` - Token is malformed, expired or forged
    pub fn verify(&self, token: &str) -> Result<i32, AuthError> {
        let data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.secret.as_bytes()),
            &Validation::default(),
        )
        .map_err(|_| AuthError::NotSignedIn)?;

        data.claims
            .sub
            .parse::<i32>()
            .map_err(|_| AuthError::NotSignedIn)
    }
}
