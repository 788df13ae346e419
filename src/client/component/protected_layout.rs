use dioxus::prelude::*;

use crate::client::{
    component::page::{ErrorPage, LoadingPage},
    model::auth::{AuthContext, Permission},
    router::Route,
};

#[component]
pub fn RequiresLoggedIn() -> Element {
    rsx! {
        ProtectedLayout { permissions: vec![Permission::LoggedIn] }
    }
}

#[component]
pub fn RequiresSeller() -> Element {
    rsx! {
        ProtectedLayout { permissions: vec![Permission::Seller] }
    }
}

#[component]
pub fn RequiresAdmin() -> Element {
    rsx! {
        ProtectedLayout { permissions: vec![Permission::Admin] }
    }
}

#[component]
pub fn ProtectedLayout(permissions: Vec<Permission>) -> Element {
    let auth = use_context::<AuthContext>();
    let nav = navigator();

    let user = auth.user();
    let fetch_completed = auth.is_fetched();

    let user_logged_in = user.is_some();
    let has_required_permissions = user
        .as_ref()
        .is_some_and(|u| permissions.iter().all(|p| p.granted_to(u)));

    use_effect(use_reactive!(|(user_logged_in, fetch_completed)| {
        if fetch_completed && !user_logged_in {
            nav.push(Route::SignIn {});
        }
    }));

    rsx! {
        if !fetch_completed {
            LoadingPage {  }
        } else if user_logged_in && !has_required_permissions {
            ErrorPage { status: 403, message: "You don't have permission to view this page".to_string() }
        } else if user_logged_in {
            Outlet::<Route> {}
        }
        // Signed out: render nothing while the effect redirects
    }
}
