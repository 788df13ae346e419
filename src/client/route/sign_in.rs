use dioxus::prelude::*;
use dioxus_free_icons::{icons::fa_brands_icons::FaGoogle, Icon};

use crate::{
    client::{
        component::{page::LoadingPage, Page},
        constant::SITE_NAME,
        model::auth::AuthContext,
        router::Route,
    },
    model::user::SignInDto,
};

#[cfg(feature = "web")]
use crate::client::api::auth::sign_in;

/// Google sign-in button; the server handles the redirect dance.
#[component]
pub fn GoogleButton() -> Element {
    rsx! {
        a {
            href: "/api/auth/google",
            class: "btn btn-outline w-full flex gap-2 items-center",
            Icon { width: 18, height: 18, icon: FaGoogle }
            "Continue with Google"
        }
    }
}

#[component]
pub fn SignIn() -> Element {
    #[allow(unused_mut)]
    let mut auth = use_context::<AuthContext>();
    let nav = navigator();
    let mut form = use_signal(|| SignInDto {
        email: String::new(),
        password: String::new(),
    });
    #[allow(unused_mut)]
    let mut submitting = use_signal(|| false);
    #[allow(unused_mut)]
    let mut error = use_signal(|| None::<String>);

    let signed_in = auth.user().is_some();
    use_effect(use_reactive!(|signed_in| {
        if signed_in {
            nav.push(Route::Home {});
        }
    }));

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        #[cfg(feature = "web")]
        spawn(async move {
            submitting.set(true);
            match sign_in(form()).await {
                Ok(user) => {
                    error.set(None);
                    auth.set_user(Some(user));
                }
                Err(err) => error.set(Some(err.message)),
            }
            submitting.set(false);
        });
    };

    if !auth.is_fetched() || signed_in {
        return rsx! { LoadingPage {} };
    }

    let current = form();

    rsx! {
        Title { "Sign in | {SITE_NAME}" }
        Page {
            class: "flex justify-center",
            div {
                class: "w-full max-w-md flex flex-col gap-4",
                h1 { class: "text-3xl text-center font-semibold my-6", "Sign In" }
                form {
                    class: "flex flex-col gap-4",
                    onsubmit: on_submit,
                    input {
                        r#type: "email",
                        class: "input input-bordered w-full",
                        placeholder: "Email",
                        value: "{current.email}",
                        oninput: move |evt| form.write().email = evt.value(),
                    }
                    input {
                        r#type: "password",
                        class: "input input-bordered w-full",
                        placeholder: "Password",
                        value: "{current.password}",
                        oninput: move |evt| form.write().password = evt.value(),
                    }
                    button {
                        r#type: "submit",
                        class: "btn btn-neutral w-full",
                        disabled: submitting(),
                        if submitting() { "Loading..." } else { "Sign In" }
                    }
                }
                GoogleButton {}
                p {
                    "Don't have an account? "
                    Link { to: Route::SignUp {}, class: "text-primary", "Sign up" }
                }
                if let Some(err) = error() {
                    p { class: "text-error", "{err}" }
                }
            }
        }
    }
}
