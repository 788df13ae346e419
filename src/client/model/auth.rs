use dioxus::prelude::*;

use crate::{
    client::model::{cache::Cache, error::ApiError},
    model::user::UserDto,
};

#[cfg(feature = "web")]
use crate::client::api::auth::get_user;

/// Signed-in user shared through context.
///
/// Holds `Cache<Option<UserDto>>`: `Fetched(None)` means the session check completed and
/// nobody is signed in. The session itself lives in the HTTP-only cookie, so refreshing
/// simply asks the server again.
#[derive(Clone, Copy)]
pub struct AuthContext {
    inner: Signal<Cache<Option<UserDto>>>,
}

impl AuthContext {
    pub fn new() -> Self {
        Self {
            inner: Signal::new(Cache::NotFetched),
        }
    }

    pub fn read(&self) -> impl std::ops::Deref<Target = Cache<Option<UserDto>>> + '_ {
        self.inner.read()
    }

    pub fn user(&self) -> Option<UserDto> {
        self.inner.read().and_then(|user| user.clone())
    }

    pub fn is_fetched(&self) -> bool {
        self.inner.read().is_fetched()
    }

    /// Replace the cached user, e.g. with the body of a sign-in or profile update response.
    pub fn set_user(&mut self, user: Option<UserDto>) {
        self.inner.set(Cache::Fetched(user));
    }

    pub fn set_error(&mut self, error: ApiError) {
        self.inner.set(Cache::Error(error));
    }

    /// Re-check the session cookie with the server.
    #[cfg(feature = "web")]
    pub fn refresh(&self) {
        let mut inner = self.inner;
        inner.set(Cache::Loading);
        spawn(async move {
            inner.set(get_user().await.into());
        });
    }
}

/// Client-side mirror of the server's permission checks, used to pick which pages and
/// buttons to show. The server enforces the real rules.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Permission {
    LoggedIn,
    Seller,
    Admin,
}

impl Permission {
    pub fn granted_to(&self, user: &UserDto) -> bool {
        match self {
            Permission::LoggedIn => true,
            Permission::Seller => user.can_publish(),
            Permission::Admin => user.is_admin(),
        }
    }
}
