use dioxus::prelude::*;

use crate::client::{constant::SITE_NAME, model::auth::AuthContext, router::Route};

const FAVICON: Asset = asset!("/assets/logo.svg");
const TAILWIND_CSS: Asset = asset!("/assets/tailwind.css");

#[component]
pub fn App() -> Element {
    #[allow(unused_variables)]
    let auth = use_context_provider(AuthContext::new);

    // Check the session cookie on first load
    #[cfg(feature = "web")]
    use_hook(move || auth.refresh());

    rsx! {
        Title { "{SITE_NAME}" }
        document::Link { rel: "icon", r#type: "image/svg+xml", href: FAVICON }
        document::Meta {
            name: "description",
            content: "Find, list, and buy or rent homes on OasisSpace"
        }
        document::Link { rel: "stylesheet", href: TAILWIND_CSS }
        Router::<Route> {}
    }
}
