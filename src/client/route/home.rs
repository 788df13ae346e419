use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::{
    client::{
        component::{ListingCard, Page},
        constant::{HOME_ROW_SIZE, SITE_NAME},
        model::{cache::Cache, error::ApiError},
        router::Route,
    },
    model::listing::{ListingDto, ListingQueryDto},
};

#[cfg(feature = "web")]
use crate::client::api::listing::search_listings;

fn row_query(filter: impl FnOnce(&mut ListingQueryDto)) -> ListingQueryDto {
    let mut query = ListingQueryDto {
        limit: Some(HOME_ROW_SIZE.to_string()),
        status: Some("available".to_string()),
        ..Default::default()
    };
    filter(&mut query);
    query
}

#[component]
pub fn Home() -> Element {
    let featured = row_query(|q| q.featured = Some("true".to_string()));
    let offers = row_query(|q| q.offer = Some("true".to_string()));
    let rent = row_query(|q| q.listing_type = Some("rent".to_string()));
    let sale = row_query(|q| q.listing_type = Some("sale".to_string()));

    rsx! {
        Title { "{SITE_NAME}" }
        Page {
            class: "flex flex-col items-center w-full",
            div {
                class: "w-full max-w-6xl flex flex-col gap-10",
                div {
                    class: "flex flex-col gap-6 py-12",
                    h1 {
                        class: "text-3xl lg:text-6xl font-bold",
                        "Find your next "
                        span { class: "text-primary", "perfect" }
                        br {}
                        "place with ease"
                    }
                    p {
                        class: "opacity-70",
                        "{SITE_NAME} is the best place to find your next home. Browse homes for rent and sale, message owners, and pay securely."
                    }
                    Link {
                        to: Route::Search { term: String::new() },
                        class: "text-primary font-bold hover:underline",
                        "Let's get started..."
                    }
                }
                ListingRow { title: "Featured homes", query: featured }
                ListingRow { title: "Recent offers", query: offers }
                ListingRow { title: "Recent places for rent", query: rent }
                ListingRow { title: "Recent places for sale", query: sale }
            }
        }
    }
}

#[component]
fn ListingRow(title: &'static str, query: ListingQueryDto) -> Element {
    #[allow(unused_mut)]
    let mut listings = use_signal(|| Cache::<Vec<ListingDto>>::Loading);

    #[cfg(feature = "web")]
    {
        let query = query.clone();
        let future = use_resource(move || {
            let query = query.clone();
            async move { search_listings(&query).await }
        });

        use_effect(move || {
            if let Some(result) = &*future.read_unchecked() {
                if let Err(err) = result {
                    tracing::error!("Failed to fetch {}: {}", title, err);
                }
                listings.set(result.clone().into());
            }
        });
    }

    let listings = listings();
    let error: Option<ApiError> = listings.error().cloned();

    rsx! {
        if let Some(items) = listings.data() {
            if !items.is_empty() {
                div {
                    class: "flex flex-col gap-3",
                    div {
                        h2 { class: "text-2xl font-semibold", "{title}" }
                        Link {
                            to: Route::Search { term: String::new() },
                            class: "text-sm text-primary hover:underline",
                            "Show more"
                        }
                    }
                    div {
                        class: "flex flex-wrap gap-4",
                        for listing in items.clone() {
                            ListingCard { key: "{listing.id}", listing }
                        }
                    }
                }
            }
        } else if let Some(err) = error {
            p { class: "text-error", "{title}: {err}" }
        } else {
            div { class: "skeleton h-64 w-full" }
        }
    }
}
