use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::{
    client::{
        component::ConfirmationModal,
        model::{auth::AuthContext, cache::Cache},
        router::Route,
    },
    model::listing::ListingDto,
};

#[cfg(feature = "web")]
use crate::client::api::{listing::delete_listing, user::get_user_listings};

#[component]
pub fn ListingsTab() -> Element {
    let auth = use_context::<AuthContext>();
    let user_id = auth.user().map(|u| u.id).unwrap_or_default();
    #[allow(unused_mut)]
    let mut listings = use_signal(|| Cache::<Vec<ListingDto>>::Loading);
    let refetch_trigger = use_signal(|| 0u32);

    #[cfg(feature = "web")]
    {
        let future = use_resource(move || async move {
            let _ = refetch_trigger();
            get_user_listings(user_id).await
        });

        use_effect(move || {
            if let Some(result) = &*future.read_unchecked() {
                if let Err(err) = result {
                    tracing::error!("Failed to fetch listings for user {}: {}", user_id, err);
                }
                listings.set(result.clone().into());
            }
        });
    }

    rsx! {
        match listings() {
            Cache::Fetched(items) if items.is_empty() => rsx! {
                p { class: "text-center opacity-70", "You have no listings yet." }
            },
            Cache::Fetched(items) => rsx! {
                div {
                    class: "flex flex-col gap-3",
                    for listing in items {
                        OwnedListingRow { key: "{listing.id}", listing, refetch_trigger }
                    }
                }
            },
            Cache::Error(err) => rsx! { p { class: "text-error", "{err}" } },
            _ => rsx! { span { class: "loading loading-spinner self-center" } },
        }
    }
}

#[component]
fn OwnedListingRow(listing: ListingDto, mut refetch_trigger: Signal<u32>) -> Element {
    let id = listing.id;
    let mut show_delete = use_signal(|| false);
    #[allow(unused_mut)]
    let mut deleting = use_signal(|| false);

    let on_delete = move |_| {
        #[cfg(feature = "web")]
        spawn(async move {
            deleting.set(true);
            match delete_listing(id).await {
                Ok(()) => {
                    show_delete.set(false);
                    refetch_trigger.set(refetch_trigger() + 1);
                }
                Err(err) => tracing::error!("Failed to delete listing {}: {}", id, err),
            }
            deleting.set(false);
        });
    };

    let cover = listing.image_urls.first().cloned().unwrap_or_default();

    rsx! {
        div {
            class: "flex items-center gap-4 border border-base-300 rounded-box p-3",
            Link {
                to: Route::ListingPage { id },
                img { class: "h-16 w-16 object-contain", src: "{cover}", alt: "listing cover" }
            }
            Link {
                to: Route::ListingPage { id },
                class: "flex-1 font-semibold truncate hover:underline",
                "{listing.name}"
            }
            div {
                class: "flex flex-col items-center",
                button {
                    class: "btn btn-ghost btn-sm text-error",
                    onclick: move |_| show_delete.set(true),
                    "Delete"
                }
                Link {
                    to: Route::UpdateListing { id },
                    class: "btn btn-ghost btn-sm text-success",
                    "Edit"
                }
            }
        }
        ConfirmationModal {
            show: show_delete,
            title: "Delete listing".to_string(),
            message: format!("Delete \"{}\"? This cannot be undone.", listing.name),
            confirm_text: "Delete".to_string(),
            is_processing: deleting(),
            on_confirm: on_delete,
        }
    }
}
