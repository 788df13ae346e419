use dioxus::prelude::*;

use crate::{
    client::{
        component::Page,
        constant::SITE_NAME,
        route::sign_in::GoogleButton,
        router::Route,
    },
    model::user::SignUpDto,
};

#[cfg(feature = "web")]
use crate::client::api::auth::sign_up;

#[component]
pub fn SignUp() -> Element {
    #[allow(unused_variables)]
    let nav = navigator();
    let mut form = use_signal(|| SignUpDto {
        username: String::new(),
        email: String::new(),
        password: String::new(),
    });
    #[allow(unused_mut)]
    let mut submitting = use_signal(|| false);
    #[allow(unused_mut)]
    let mut error = use_signal(|| None::<String>);

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        #[cfg(feature = "web")]
        spawn(async move {
            submitting.set(true);
            match sign_up(form()).await {
                Ok(_) => {
                    nav.push(Route::SignIn {});
                }
                Err(err) => error.set(Some(err.message)),
            }
            submitting.set(false);
        });
    };

    let current = form();

    rsx! {
        Title { "Sign up | {SITE_NAME}" }
        Page {
            class: "flex justify-center",
            div {
                class: "w-full max-w-md flex flex-col gap-4",
                h1 { class: "text-3xl text-center font-semibold my-6", "Sign Up" }
                form {
                    class: "flex flex-col gap-4",
                    onsubmit: on_submit,
                    input {
                        class: "input input-bordered w-full",
                        placeholder: "Username",
                        value: "{current.username}",
                        oninput: move |evt| form.write().username = evt.value(),
                    }
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
                        if submitting() { "Loading..." } else { "Sign Up" }
                    }
                }
                GoogleButton {}
                p {
                    "Have an account? "
                    Link { to: Route::SignIn {}, class: "text-primary", "Sign in" }
                }
                if let Some(err) = error() {
                    p { class: "text-error", "{err}" }
                }
            }
        }
    }
}
