use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::{
    client::{component::ListingCard, model::cache::Cache},
    model::listing::ListingDto,
};

#[cfg(feature = "web")]
use crate::client::api::user::get_saved_listings;

#[component]
pub fn SavedTab() -> Element {
    #[allow(unused_mut)]
    let mut saved = use_signal(|| Cache::<Vec<ListingDto>>::Loading);

    #[cfg(feature = "web")]
    {
        let future = use_resource(get_saved_listings);

        use_effect(move || {
            if let Some(result) = &*future.read_unchecked() {
                if let Err(err) = result {
                    tracing::error!("Failed to fetch saved listings: {}", err);
                }
                saved.set(result.clone().into());
            }
        });
    }

    rsx! {
        match saved() {
            Cache::Fetched(items) if items.is_empty() => rsx! {
                p { class: "text-center opacity-70", "No saved listings yet." }
            },
            Cache::Fetched(items) => rsx! {
                div {
                    class: "flex flex-wrap gap-4",
                    for listing in items {
                        ListingCard { key: "{listing.id}", listing }
                    }
                }
            },
            Cache::Error(err) => rsx! { p { class: "text-error", "{err}" } },
            _ => rsx! { span { class: "loading loading-spinner self-center" } },
        }
    }
}
