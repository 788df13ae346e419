use dioxus::prelude::*;

use crate::client::router::Route;

#[component]
pub fn Page(class: Option<&'static str>, children: Element) -> Element {
    let class: &str = class.unwrap_or_default();

    rsx!(
        div {
            class: "min-h-screen pt-24 p-4 {class}",
            {children}
        }
    )
}

#[component]
pub fn LoadingPage() -> Element {
    rsx!(
        Page {
            class: "flex items-center justify-center",
            span { class: "loading loading-spinner loading-xl" }
        }
    )
}

#[component]
pub fn ErrorPage(status: u16, message: String) -> Element {
    rsx!(
        Page {
            class: "flex flex-col gap-4 items-center justify-center text-center",
            p { class: "text-5xl font-bold", "{status}" }
            p { class: "text-lg opacity-80", "{message}" }
            Link {
                to: Route::Home {},
                class: "btn btn-outline",
                "Back to home"
            }
        }
    )
}

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    rsx!(
        ErrorPage { status: 404, message: format!("Nothing lives at /{}", segments.join("/")) }
    )
}
