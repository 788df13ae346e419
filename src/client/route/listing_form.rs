use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::{
    client::{
        component::{
            page::{ErrorPage, LoadingPage},
            Page,
        },
        constant::{IMAGE_INPUT_ID, MAX_LISTING_IMAGES, SITE_NAME},
        model::cache::Cache,
        router::Route,
    },
    model::{
        ai::DescriptionRequestDto,
        listing::{ListingDto, ListingFormDto, ListingType},
    },
};

#[cfg(feature = "web")]
use crate::client::api::{
    ai::generate_description,
    listing::{create_listing, get_listing, update_listing},
    upload::upload_selected_images,
};

/// Checks the form before it is sent; the server repeats every check.
fn validate(form: &ListingFormDto) -> Result<(), String> {
    if form.image_urls.is_empty() {
        return Err("You must upload at least one image".to_string());
    }
    if form.image_urls.len() > MAX_LISTING_IMAGES {
        return Err(format!("You can only upload {} images per listing", MAX_LISTING_IMAGES));
    }
    if form.offer && (form.discount_price <= 0 || form.discount_price >= form.regular_price) {
        return Err("Discount price must be lower than regular price".to_string());
    }
    Ok(())
}

fn description_request(form: &ListingFormDto) -> DescriptionRequestDto {
    DescriptionRequestDto {
        name: form.name.clone(),
        address: form.address.clone(),
        listing_type: form.listing_type,
        bedrooms: form.bedrooms,
        bathrooms: form.bathrooms,
        furnished: form.furnished,
        parking: form.parking,
        offer: form.offer,
        regular_price: form.regular_price,
    }
}

impl From<ListingDto> for ListingFormDto {
    fn from(listing: ListingDto) -> Self {
        Self {
            name: listing.name,
            description: listing.description,
            address: listing.address,
            regular_price: listing.regular_price,
            discount_price: listing.discount_price,
            bathrooms: listing.bathrooms,
            bedrooms: listing.bedrooms,
            furnished: listing.furnished,
            parking: listing.parking,
            offer: listing.offer,
            listing_type: listing.listing_type,
            image_urls: listing.image_urls,
        }
    }
}

#[component]
pub fn CreateListing() -> Element {
    rsx! {
        Title { "Create listing | {SITE_NAME}" }
        ListingForm { listing_id: None, initial: ListingFormDto::default() }
    }
}

#[component]
pub fn UpdateListing(id: i32) -> Element {
    #[allow(unused_mut)]
    let mut listing = use_signal(|| Cache::<ListingDto>::Loading);

    #[cfg(feature = "web")]
    {
        let future = use_resource(move || async move { get_listing(id).await });

        use_effect(move || {
            if let Some(result) = &*future.read_unchecked() {
                if let Err(err) = result {
                    tracing::error!("Failed to fetch listing {}: {}", id, err);
                }
                listing.set(result.clone().into());
            }
        });
    }

    rsx! {
        Title { "Update listing | {SITE_NAME}" }
        match listing() {
            Cache::Fetched(listing) => rsx! {
                ListingForm { key: "{id}", listing_id: Some(id), initial: ListingFormDto::from(listing) }
            },
            Cache::Error(err) => rsx! { ErrorPage { status: err.status, message: err.message } },
            _ => rsx! { LoadingPage {} },
        }
    }
}

#[component]
fn ListingForm(listing_id: Option<i32>, initial: ListingFormDto) -> Element {
    #[allow(unused_variables)]
    let nav = navigator();
    let mut form = use_signal(|| initial.clone());
    #[allow(unused_mut)]
    let mut uploading = use_signal(|| false);
    #[allow(unused_mut)]
    let mut generating = use_signal(|| false);
    #[allow(unused_mut)]
    let mut submitting = use_signal(|| false);
    let mut error = use_signal(|| None::<String>);

    let on_upload = move |_| {
        #[cfg(feature = "web")]
        spawn(async move {
            uploading.set(true);
            match upload_selected_images(IMAGE_INPUT_ID).await {
                Ok(urls) => {
                    let mut current = form.write();
                    let room = MAX_LISTING_IMAGES.saturating_sub(current.image_urls.len());
                    if urls.len() > room {
                        error.set(Some(format!(
                            "You can only upload {} images per listing",
                            MAX_LISTING_IMAGES
                        )));
                    } else {
                        error.set(None);
                    }
                    current.image_urls.extend(urls.into_iter().take(room));
                }
                Err(err) => error.set(Some(format!("Image upload failed: {}", err))),
            }
            uploading.set(false);
        });
    };

    let on_generate = move |_| {
        let request = description_request(&form());
        if request.name.trim().is_empty() || request.address.trim().is_empty() {
            error.set(Some("Enter a name and address first".to_string()));
            return;
        }
        #[cfg(feature = "web")]
        spawn(async move {
            generating.set(true);
            match generate_description(request).await {
                Ok(description) => {
                    form.write().description = description;
                    error.set(None);
                }
                Err(err) => error.set(Some(err.message)),
            }
            generating.set(false);
        });
    };

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let payload = form();
        if let Err(message) = validate(&payload) {
            error.set(Some(message));
            return;
        }
        #[cfg(feature = "web")]
        spawn(async move {
            submitting.set(true);
            let result = match listing_id {
                Some(id) => update_listing(id, payload).await,
                None => create_listing(payload).await,
            };
            match result {
                Ok(listing) => {
                    nav.push(Route::ListingPage { id: listing.id });
                }
                Err(err) => error.set(Some(err.message)),
            }
            submitting.set(false);
        });
    };

    let current = form();
    let busy = uploading() || submitting();
    let (regular_label, discount_label) = match current.listing_type {
        ListingType::Rent => ("Regular price (₹ / month)", "Discounted price (₹ / month)"),
        ListingType::Sale => ("Regular price (₹)", "Discounted price (₹)"),
    };

    rsx! {
        Page {
            class: "flex justify-center",
            div {
                class: "w-full max-w-4xl",
                h1 {
                    class: "text-3xl font-semibold text-center my-6",
                    if listing_id.is_some() { "Update a Listing" } else { "Create a Listing" }
                }
                form {
                    class: "flex flex-col sm:flex-row gap-6",
                    onsubmit: on_submit,
                    div {
                        class: "flex flex-col gap-4 flex-1",
                        input {
                            class: "input input-bordered w-full",
                            placeholder: "Name",
                            required: true,
                            value: "{current.name}",
                            oninput: move |evt| form.write().name = evt.value(),
                        }
                        div {
                            class: "flex flex-col gap-1",
                            textarea {
                                class: "textarea textarea-bordered w-full",
                                placeholder: "Description",
                                rows: 5,
                                required: true,
                                value: "{current.description}",
                                oninput: move |evt| form.write().description = evt.value(),
                            }
                            button {
                                r#type: "button",
                                class: "btn btn-sm btn-outline self-end",
                                disabled: generating(),
                                onclick: on_generate,
                                if generating() {
                                    span { class: "loading loading-spinner loading-xs" }
                                    "Generating..."
                                } else {
                                    "Generate with AI"
                                }
                            }
                        }
                        input {
                            class: "input input-bordered w-full",
                            placeholder: "Address",
                            required: true,
                            value: "{current.address}",
                            oninput: move |evt| form.write().address = evt.value(),
                        }
                        div {
                            class: "flex flex-wrap gap-6",
                            label {
                                class: "flex gap-2 items-center",
                                input {
                                    r#type: "checkbox",
                                    class: "checkbox",
                                    checked: current.listing_type == ListingType::Sale,
                                    onchange: move |_| form.write().listing_type = ListingType::Sale,
                                }
                                "Sell"
                            }
                            label {
                                class: "flex gap-2 items-center",
                                input {
                                    r#type: "checkbox",
                                    class: "checkbox",
                                    checked: current.listing_type == ListingType::Rent,
                                    onchange: move |_| form.write().listing_type = ListingType::Rent,
                                }
                                "Rent"
                            }
                            label {
                                class: "flex gap-2 items-center",
                                input {
                                    r#type: "checkbox",
                                    class: "checkbox",
                                    checked: current.parking,
                                    onchange: move |evt| form.write().parking = evt.checked(),
                                }
                                "Parking spot"
                            }
                            label {
                                class: "flex gap-2 items-center",
                                input {
                                    r#type: "checkbox",
                                    class: "checkbox",
                                    checked: current.furnished,
                                    onchange: move |evt| form.write().furnished = evt.checked(),
                                }
                                "Furnished"
                            }
                            label {
                                class: "flex gap-2 items-center",
                                input {
                                    r#type: "checkbox",
                                    class: "checkbox",
                                    checked: current.offer,
                                    onchange: move |evt| form.write().offer = evt.checked(),
                                }
                                "Offer"
                            }
                        }
                        div {
                            class: "flex flex-wrap gap-6",
                            NumberField {
                                label: "Beds",
                                value: current.bedrooms as i64,
                                min: 1,
                                max: 10,
                                on_change: move |v: i64| form.write().bedrooms = v as i32,
                            }
                            NumberField {
                                label: "Baths",
                                value: current.bathrooms as i64,
                                min: 1,
                                max: 10,
                                on_change: move |v: i64| form.write().bathrooms = v as i32,
                            }
                            NumberField {
                                label: regular_label,
                                value: current.regular_price,
                                min: 50,
                                max: 10_000_000,
                                on_change: move |v: i64| form.write().regular_price = v,
                            }
                            if current.offer {
                                NumberField {
                                    label: discount_label,
                                    value: current.discount_price,
                                    min: 0,
                                    max: 10_000_000,
                                    on_change: move |v: i64| form.write().discount_price = v,
                                }
                            }
                        }
                    }
                    div {
                        class: "flex flex-col gap-4 flex-1",
                        p {
                            span { class: "font-semibold", "Images: " }
                            span { class: "opacity-70", "The first image will be the cover (max {MAX_LISTING_IMAGES})" }
                        }
                        div {
                            class: "flex gap-4",
                            input {
                                id: IMAGE_INPUT_ID,
                                r#type: "file",
                                class: "file-input file-input-bordered w-full",
                                accept: "image/*",
                                multiple: true,
                            }
                            button {
                                r#type: "button",
                                class: "btn btn-outline btn-success",
                                disabled: uploading(),
                                onclick: on_upload,
                                if uploading() { "Uploading..." } else { "Upload" }
                            }
                        }
                        for (index, url) in current.image_urls.iter().cloned().enumerate() {
                            div {
                                key: "{url}",
                                class: "flex justify-between items-center p-3 border border-base-300 rounded-box",
                                img { class: "w-20 h-20 object-contain rounded-lg", src: "{url}", alt: "listing image" }
                                button {
                                    r#type: "button",
                                    class: "btn btn-ghost text-error",
                                    onclick: move |_| {
                                        form.write().image_urls.remove(index);
                                    },
                                    "Delete"
                                }
                            }
                        }
                        button {
                            r#type: "submit",
                            class: "btn btn-neutral",
                            disabled: busy,
                            if submitting() {
                                "Saving..."
                            } else if listing_id.is_some() {
                                "Update listing"
                            } else {
                                "Create listing"
                            }
                        }
                        if let Some(err) = error() {
                            p { class: "text-error text-sm", "{err}" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn NumberField(
    label: &'static str,
    value: i64,
    min: i64,
    max: i64,
    on_change: EventHandler<i64>,
) -> Element {
    rsx! {
        label {
            class: "flex items-center gap-2",
            input {
                r#type: "number",
                class: "input input-bordered w-32",
                min: "{min}",
                max: "{max}",
                required: true,
                value: "{value}",
                oninput: move |evt| {
                    if let Ok(v) = evt.value().parse::<i64>() {
                        on_change.call(v.clamp(min, max));
                    }
                },
            }
            span { "{label}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> ListingFormDto {
        ListingFormDto {
            name: "Lakeside cottage".to_string(),
            address: "3 Shore Lane".to_string(),
            image_urls: vec!["https://cdn.example.com/a.jpg".to_string()],
            ..Default::default()
        }
    }

    #[test]
    fn requires_an_image() {
        let mut form = form();
        form.image_urls.clear();

        assert!(validate(&form).is_err());
    }

    #[test]
    fn offer_requires_lower_discount() {
        let mut form = form();
        form.offer = true;
        form.regular_price = 1000;
        form.discount_price = 1000;

        assert!(validate(&form).is_err());

        form.discount_price = 900;
        assert!(validate(&form).is_ok());
    }

    #[test]
    fn discount_is_ignored_without_offer() {
        let mut form = form();
        form.discount_price = 5000;

        assert!(validate(&form).is_ok());
    }
}
