use dioxus::prelude::*;
use dioxus_free_icons::{icons::fa_solid_icons::FaMagnifyingGlass, Icon};

use crate::client::{constant::SITE_NAME, model::auth::AuthContext, router::Route};

const LOGO: Asset = asset!("/assets/logo.svg");

#[component]
pub fn Header() -> Element {
    let auth = use_context::<AuthContext>();
    let nav = navigator();
    let mut search_term = use_signal(String::new);

    let user = auth.user();
    let fetch_completed = auth.is_fetched();

    rsx!(div {
        class: "fixed flex justify-between items-center gap-4 w-full h-20 py-2 px-4 bg-base-200 z-20",
        Link {
            to: Route::Home {},
            div {
                class: "flex items-center gap-3",
                img {
                    width: 40,
                    height: 40,
                    src: LOGO,
                }
                p {
                    class: "hidden sm:block md:text-xl font-bold",
                    {SITE_NAME}
                }
            }
        }
        form {
            class: "join",
            onsubmit: move |evt| {
                evt.prevent_default();
                nav.push(Route::Search { term: search_term().trim().to_string() });
            },
            input {
                class: "input input-bordered join-item w-32 sm:w-64",
                placeholder: "Search...",
                value: "{search_term}",
                oninput: move |evt| search_term.set(evt.value()),
            }
            button {
                r#type: "submit",
                class: "btn join-item",
                Icon {
                    width: 16,
                    height: 16,
                    icon: FaMagnifyingGlass
                }
            }
        }
        div {
            class: "flex items-center gap-2",
            if let Some(user) = user {
                if user.can_publish() {
                    Link {
                        to: Route::Dashboard {},
                        class: "btn btn-ghost hidden md:flex",
                        "Dashboard"
                    }
                }
                if user.is_admin() {
                    Link {
                        to: Route::SellerRequests {},
                        class: "btn btn-ghost hidden md:flex",
                        "Admin"
                    }
                }
                Link {
                    to: Route::Profile {},
                    div {
                        class: "avatar",
                        div {
                            class: "w-10 rounded-full",
                            img {
                                src: "{user.avatar}",
                                alt: "{user.username}",
                            }
                        }
                    }
                }
            } else if fetch_completed {
                Link {
                    to: Route::SignIn {},
                    class: "btn btn-outline",
                    "Sign in"
                }
            }
        }
    })
}
