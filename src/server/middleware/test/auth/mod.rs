use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::auth::{AuthGuard, AuthToken, Permission, ACCESS_TOKEN_COOKIE},
    service::token::TokenService,
};
use axum::http::{header, HeaderMap, HeaderValue};
use entity::user::{Role, SellerStatus};
use test_utils::{builder::TestBuilder, factory, factory::user::UserFactory};

mod extract;
mod require;

const SECRET: &str = "test-secret";
