//! Local account sign-up and sign-in.

use sea_orm::DatabaseConnection;

use crate::{
    model::user::{SignInDto, SignUpDto},
    server::{
        data::user::UserRepository,
        error::{auth::AuthError, AppError},
        model::user::{CreateUserParams, User},
    },
};

/// Avatar assigned to accounts created without a profile picture.
pub const DEFAULT_AVATAR: &str =
    "https://cdn.pixabay.com/photo/2015/10/05/22/37/blank-profile-picture-973460_1280.png";

pub const MIN_PASSWORD_LENGTH: usize = 6;

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
    bcrypt_cost: u32,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            bcrypt_cost: bcrypt::DEFAULT_COST,
        }
    }

    /// Overrides the bcrypt cost; tests use the minimum to stay fast.
    pub fn with_bcrypt_cost(mut self, cost: u32) -> Self {
        self.bcrypt_cost = cost;
        self
    }

    /// Registers a new local account.
    ///
    /// # Arguments
    /// - `dto` - Username, email and plaintext password
    ///
    /// # Returns
    /// - `Ok(User)` - Created account
    /// - `Err(AppError::BadRequest)` - Missing fields, malformed email or short password
    /// - `Err(AppError::Conflict)` - Email or username already registered
    pub async fn sign_up(&self, dto: SignUpDto) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        let username = validate_username(&dto.username)?;
        let email = validate_email(&dto.email)?;
        validate_password(&dto.password)?;

        if user_repo.find_by_email(&email).await?.is_some() {
            return Err(AppError::Conflict("Email is already registered".to_string()));
        }
        if user_repo.find_by_username(&username).await?.is_some() {
            return Err(AppError::Conflict("Username is already taken".to_string()));
        }

        let password_hash = bcrypt::hash(&dto.password, self.bcrypt_cost)?;

        let user = user_repo
            .create(CreateUserParams {
                username,
                email,
                password_hash,
                avatar: DEFAULT_AVATAR.to_string(),
            })
            .await?;

        Ok(user)
    }

    /// Checks local credentials.
    ///
    /// # Returns
    /// - `Ok(User)` - Credentials match
    /// - `Err(AuthError::InvalidCredentials)` - Unknown email or wrong password
    pub async fn sign_in(&self, dto: SignInDto) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        let email = dto.email.trim().to_lowercase();
        let Some(user) = user_repo.find_by_email(&email).await? else {
            return Err(AuthError::InvalidCredentials.into());
        };

        if !bcrypt::verify(&dto.password, &user.password_hash)? {
            return Err(AuthError::InvalidCredentials.into());
        }

        Ok(user)
    }
}

/// Trims and validates a username.
pub fn validate_username(username: &str) -> Result<String, AppError> {
    let username = username.trim();
    let valid_chars = username
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-' || c == '.');

    if username.len() < 3 || username.len() > 32 || !valid_chars {
        return Err(AppError::BadRequest(
            "Username must be 3-32 letters, digits, '.', '-' or '_'".to_string(),
        ));
    }

    Ok(username.to_string())
}

/// Trims, lowercases and loosely validates an email address.
pub fn validate_email(email: &str) -> Result<String, AppError> {
    let email = email.trim().to_lowercase();

    let valid = match email.split_once('@') {
        Some((local, domain)) => !local.is_empty() && domain.contains('.') && !domain.starts_with('.'),
        None => false,
    };
    if !valid {
        return Err(AppError::BadRequest("Email address is invalid".to_string()));
    }

    Ok(email)
}

pub fn validate_password(password: &str) -> Result<(), AppError> {
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(AppError::BadRequest(format!(
            "Password must be at least {} characters",
            MIN_PASSWORD_LENGTH
        )));
    }

    Ok(())
}
