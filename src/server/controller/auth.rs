use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Redirect},
    Json,
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        user::{SignInDto, SignUpDto, UserDto},
    },
    server::{
        error::{auth::AuthError, AppError},
        middleware::{
            auth::{expired_session_cookie, session_cookie, AuthGuard, AuthToken},
            session::CsrfSession,
        },
        service::{auth::AuthService, oauth::GoogleAuthService, token::TokenService},
        state::AppState,
    },
};

/// Tag for grouping auth endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Query parameters for the Google OAuth callback.
///
/// # Fields
/// - `state` - CSRF token that must match the value stored in the session
/// - `code` - Authorization code, absent when the user declined consent
#[derive(Deserialize)]
pub struct CallbackParams {
    pub state: String,
    pub code: Option<String>,
}

/// Register a local account.
///
/// # Returns
/// - `201 Created` - Account created
/// - `400 Bad Request` - Invalid username, email or password
/// - `409 Conflict` - Email or username already registered
#[utoipa::path(
    post,
    path = "/api/auth/signup",
    tag = AUTH_TAG,
    request_body = SignUpDto,
    responses(
        (status = 201, description = "Account created", body = UserDto),
        (status = 400, description = "Invalid sign-up data", body = ErrorDto),
        (status = 409, description = "Email or username already registered", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn sign_up(
    State(state): State<AppState>,
    Json(payload): Json<SignUpDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthService::new(&state.db).sign_up(payload).await?;

    Ok((StatusCode::CREATED, Json(user.into_dto())))
}

/// Sign in with email and password.
///
/// Sets the `access_token` cookie on success.
///
/// # Returns
/// - `200 OK` - Signed-in user
/// - `401 Unauthorized` - Unknown email or wrong password
#[utoipa::path(
    post,
    path = "/api/auth/signin",
    tag = AUTH_TAG,
    request_body = SignInDto,
    responses(
        (status = 200, description = "Signed in, session cookie set", body = UserDto),
        (status = 401, description = "Invalid credentials", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn sign_in(
    State(state): State<AppState>,
    Json(payload): Json<SignInDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthService::new(&state.db).sign_in(payload).await?;
    let token = TokenService::new(&state.config.jwt_secret).issue(user.id)?;

    Ok((
        StatusCode::OK,
        [(header::SET_COOKIE, session_cookie(token).to_string())],
        Json(user.into_dto()),
    ))
}

/// Start Google sign-in.
///
/// Stores a CSRF token in the session and redirects to Google's consent screen.
#[utoipa::path(
    get,
    path = "/api/auth/google",
    tag = AUTH_TAG,
    responses(
        (status = 307, description = "Redirect to Google consent screen"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn google_login(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let auth_service = GoogleAuthService::new(
        &state.db,
        &state.http_client,
        &state.oauth_client,
        &state.config.google.userinfo_url,
    );

    let (url, csrf_token) = auth_service.login_url();

    CsrfSession::new(&session)
        .set_token(csrf_token.secret().clone())
        .await?;

    Ok(Redirect::temporary(url.as_str()))
}

/// Complete Google sign-in.
///
/// Validates the CSRF state, exchanges the code, signs in or creates the account,
/// sets the session cookie and redirects to the home page. A declined consent
/// redirects back to the sign-in page.
///
/// # Returns
/// - `303 See Other` - Redirect to `/` (signed in) or `/sign-in` (declined)
/// - `400 Bad Request` - CSRF state mismatch
/// - `502 Bad Gateway` - Code exchange with Google failed
#[utoipa::path(
    get,
    path = "/api/auth/google/callback",
    tag = AUTH_TAG,
    params(
        ("state" = String, Query, description = "CSRF state issued with the redirect"),
        ("code" = Option<String>, Query, description = "Authorization code")
    ),
    responses(
        (status = 303, description = "Redirect into the application"),
        (status = 400, description = "CSRF validation failed", body = ErrorDto),
        (status = 502, description = "Google sign-in failed", body = ErrorDto)
    ),
)]
pub async fn google_callback(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<CallbackParams>,
) -> Result<impl IntoResponse, AppError> {
    CsrfSession::new(&session).validate(&params.state).await?;

    let Some(code) = params.code else {
        return Ok(Redirect::to("/sign-in").into_response());
    };

    let user = GoogleAuthService::new(
        &state.db,
        &state.http_client,
        &state.oauth_client,
        &state.config.google.userinfo_url,
    )
    .callback(code)
    .await?;
    let token = TokenService::new(&state.config.jwt_secret).issue(user.id)?;

    Ok((
        [(header::SET_COOKIE, session_cookie(token).to_string())],
        Redirect::to("/"),
    )
        .into_response())
}

/// Sign out by expiring the session cookie.
#[utoipa::path(
    get,
    path = "/api/auth/signout",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Signed out", body = MessageDto)
    ),
)]
pub async fn sign_out() -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::SET_COOKIE, expired_session_cookie().to_string())],
        Json(MessageDto::new("Signed out")),
    )
}

/// Get the signed-in user, or `null` for anonymous requests.
///
/// A token for an account that no longer exists is treated as signed out.
#[utoipa::path(
    get,
    path = "/api/auth/user",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Current user or null", body = Option<UserDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    token: AuthToken,
) -> Result<impl IntoResponse, AppError> {
    let user = match AuthGuard::new(&state.db, &token).optional().await {
        Ok(user) => user,
        Err(AppError::AuthErr(AuthError::UserNotInDatabase(_))) => None,
        Err(e) => return Err(e),
    };

    Ok((StatusCode::OK, Json(user.map(|u| u.into_dto()))))
}
