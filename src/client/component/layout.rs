use dioxus::prelude::*;

use crate::client::{
    component::{ChatWidget, Header},
    constant::SITE_NAME,
    router::Route,
};

/// Shell shared by every page: header, routed content, footer and the assistant.
#[component]
pub fn Layout() -> Element {
    rsx!(
        div {
            class: "min-h-screen flex flex-col bg-base-200",
            Header {}
            main {
                class: "flex-1",
                Outlet::<Route> {}
            }
            footer {
                class: "footer footer-center p-4 text-sm text-base-content/60",
                "© {SITE_NAME}"
            }
            ChatWidget {}
        }
    )
}
