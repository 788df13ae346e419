use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::{
    client::{
        component::{ListingCard, Page},
        constant::{SEARCH_PAGE_SIZE, SITE_NAME},
    },
    model::listing::{ListingDto, ListingQueryDto},
};

#[cfg(feature = "web")]
use crate::client::api::listing::search_listings;

/// Sort options shown in the dropdown as `(value, sort, order, label)`.
const SORT_OPTIONS: [(&str, &str, &str, &str); 4] = [
    ("createdAt_desc", "createdAt", "desc", "Latest"),
    ("createdAt_asc", "createdAt", "asc", "Oldest"),
    ("regularPrice_desc", "regularPrice", "desc", "Price high to low"),
    ("regularPrice_asc", "regularPrice", "asc", "Price low to high"),
];

#[derive(Clone, PartialEq)]
struct SearchForm {
    term: String,
    listing_type: String,
    offer: bool,
    parking: bool,
    furnished: bool,
    sort: &'static str,
}

impl SearchForm {
    fn new(term: String) -> Self {
        Self {
            term,
            listing_type: "all".to_string(),
            offer: false,
            parking: false,
            furnished: false,
            sort: SORT_OPTIONS[0].0,
        }
    }

    fn to_query(&self, start_index: usize) -> ListingQueryDto {
        let (_, sort, order, _) = SORT_OPTIONS
            .iter()
            .find(|(value, ..)| *value == self.sort)
            .copied()
            .unwrap_or(SORT_OPTIONS[0]);
        let flag = |set: bool| set.then(|| "true".to_string());

        ListingQueryDto {
            search_term: Some(self.term.clone()),
            listing_type: (self.listing_type != "all").then(|| self.listing_type.clone()),
            offer: flag(self.offer),
            parking: flag(self.parking),
            furnished: flag(self.furnished),
            sort: Some(sort.to_string()),
            order: Some(order.to_string()),
            start_index: Some(start_index.to_string()),
            limit: Some(SEARCH_PAGE_SIZE.to_string()),
            ..Default::default()
        }
    }
}

#[component]
pub fn Search(term: String) -> Element {
    let mut form = use_signal(|| SearchForm::new(term.clone()));
    // Submitted copy of the form; changing it restarts the search from the first page
    let mut submitted = use_signal(|| SearchForm::new(term.clone()));
    let mut listings = use_signal(Vec::<ListingDto>::new);
    let mut loading = use_signal(|| false);
    let mut has_more = use_signal(|| false);
    let mut error = use_signal(|| None::<String>);

    // A new term from the header search bar replaces the form
    use_effect(use_reactive!(|term| {
        let fresh = SearchForm::new(term);
        if *submitted.peek() != fresh {
            form.set(fresh.clone());
            submitted.set(fresh);
        }
    }));

    let mut fetch = move |start_index: usize| {
        #[cfg(feature = "web")]
        {
            let query = submitted.peek().to_query(start_index);
            loading.set(true);
            spawn(async move {
                match search_listings(&query).await {
                    Ok(batch) => {
                        has_more.set(batch.len() == SEARCH_PAGE_SIZE);
                        if start_index == 0 {
                            listings.set(batch);
                        } else {
                            listings.write().extend(batch);
                        }
                        error.set(None);
                    }
                    Err(err) => {
                        tracing::error!("Listing search failed: {}", err);
                        error.set(Some(err.message));
                    }
                }
                loading.set(false);
            });
        }
        #[cfg(not(feature = "web"))]
        let _ = start_index;
    };

    use_effect(move || {
        let _ = submitted();
        fetch(0);
    });

    let current = form();

    rsx! {
        Title { "Search | {SITE_NAME}" }
        Page {
            class: "flex flex-col md:flex-row gap-6",
            form {
                class: "flex flex-col gap-6 md:w-80 md:border-r md:border-base-300 md:pr-6",
                onsubmit: move |evt| {
                    evt.prevent_default();
                    submitted.set(form());
                },
                label {
                    class: "flex flex-col gap-2",
                    span { class: "font-semibold", "Search term" }
                    input {
                        class: "input input-bordered w-full",
                        placeholder: "Search...",
                        value: "{current.term}",
                        oninput: move |evt| form.write().term = evt.value(),
                    }
                }
                div {
                    class: "flex flex-wrap gap-3 items-center",
                    span { class: "font-semibold", "Type" }
                    for (value, label) in [("all", "Rent & Sale"), ("rent", "Rent"), ("sale", "Sale")] {
                        label {
                            key: "{value}",
                            class: "flex gap-1 items-center",
                            input {
                                r#type: "radio",
                                class: "radio radio-sm",
                                name: "listing-type",
                                checked: current.listing_type == value,
                                onchange: move |_| form.write().listing_type = value.to_string(),
                            }
                            "{label}"
                        }
                    }
                }
                div {
                    class: "flex flex-wrap gap-3 items-center",
                    span { class: "font-semibold", "Amenities" }
                    label {
                        class: "flex gap-1 items-center",
                        input {
                            r#type: "checkbox",
                            class: "checkbox checkbox-sm",
                            checked: current.offer,
                            onchange: move |evt| form.write().offer = evt.checked(),
                        }
                        "Offer"
                    }
                    label {
                        class: "flex gap-1 items-center",
                        input {
                            r#type: "checkbox",
                            class: "checkbox checkbox-sm",
                            checked: current.parking,
                            onchange: move |evt| form.write().parking = evt.checked(),
                        }
                        "Parking"
                    }
                    label {
                        class: "flex gap-1 items-center",
                        input {
                            r#type: "checkbox",
                            class: "checkbox checkbox-sm",
                            checked: current.furnished,
                            onchange: move |evt| form.write().furnished = evt.checked(),
                        }
                        "Furnished"
                    }
                }
                label {
                    class: "flex gap-2 items-center",
                    span { class: "font-semibold", "Sort" }
                    select {
                        class: "select select-bordered",
                        value: "{current.sort}",
                        onchange: move |evt| {
                            let value = evt.value();
                            if let Some((key, ..)) = SORT_OPTIONS.iter().find(|(key, ..)| *key == value) {
                                form.write().sort = *key;
                            }
                        },
                        for (value, _, _, label) in SORT_OPTIONS {
                            option { key: "{value}", value: "{value}", "{label}" }
                        }
                    }
                }
                button { r#type: "submit", class: "btn btn-primary", "Search" }
            }
            div {
                class: "flex-1 flex flex-col gap-4",
                h1 { class: "text-2xl font-semibold border-b border-base-300 pb-3", "Listing results" }
                if let Some(err) = error() {
                    p { class: "text-error", "{err}" }
                }
                if !loading() && listings().is_empty() && error().is_none() {
                    p { class: "opacity-70", "No listing found!" }
                }
                div {
                    class: "flex flex-wrap gap-4",
                    for listing in listings() {
                        ListingCard { key: "{listing.id}", listing }
                    }
                }
                if loading() {
                    span { class: "loading loading-spinner self-center" }
                } else if has_more() {
                    button {
                        class: "btn btn-ghost text-primary self-center",
                        onclick: move |_| fetch(listings.peek().len()),
                        "Show more"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unchecked_flags_are_left_out_of_the_query() {
        let query = SearchForm::new("loft".to_string()).to_query(0);

        assert_eq!(query.offer, None);
        assert_eq!(query.listing_type, None);
        assert_eq!(
            query.to_query_string(),
            "searchTerm=loft&sort=createdAt&order=desc&startIndex=0&limit=9"
        );
    }

    #[test]
    fn price_sort_maps_to_sort_and_order() {
        let mut form = SearchForm::new(String::new());
        form.sort = "regularPrice_asc";
        form.offer = true;
        form.listing_type = "rent".to_string();

        let query = form.to_query(9);

        assert_eq!(query.sort.as_deref(), Some("regularPrice"));
        assert_eq!(query.order.as_deref(), Some("asc"));
        assert_eq!(query.offer.as_deref(), Some("true"));
        assert_eq!(query.listing_type.as_deref(), Some("rent"));
        assert_eq!(query.start_index.as_deref(), Some("9"));
    }
}
