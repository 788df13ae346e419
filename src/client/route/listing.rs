use dioxus::prelude::*;
use dioxus_free_icons::{
    icons::fa_solid_icons::{
        FaBath, FaBed, FaChair, FaChevronLeft, FaChevronRight, FaHeart, FaLocationDot,
        FaShareNodes, FaSquareParking,
    },
    Icon,
};
use dioxus_logger::tracing;

use crate::{
    client::{
        component::{
            listing_card::format_price,
            page::{ErrorPage, LoadingPage},
            ConfirmationModal, Page,
        },
        constant::SITE_NAME,
        model::{auth::AuthContext, cache::Cache},
        router::Route,
    },
    model::listing::{ListingDto, ListingStatus, ListingType},
};

#[cfg(feature = "web")]
use crate::{
    client::api::{
        listing::{delete_listing, get_listing, set_listing_status, toggle_featured},
        notification::contact_owner,
        payment::{cancel_order, create_order, open_checkout, verify_payment},
        user::{get_saved_listings, get_user_contact, toggle_saved_listing},
    },
    model::notification::ContactOwnerDto,
};

#[component]
pub fn ListingPage(id: i32) -> Element {
    let auth = use_context::<AuthContext>();
    #[allow(unused_mut)]
    let mut listing = use_signal(|| Cache::<ListingDto>::Loading);
    let refetch_trigger = use_signal(|| 0u32);

    #[cfg(feature = "web")]
    {
        let future = use_resource(move || async move {
            let _ = refetch_trigger();
            get_listing(id).await
        });

        use_effect(move || {
            if let Some(result) = &*future.read_unchecked() {
                if let Err(err) = result {
                    tracing::error!("Failed to fetch listing {}: {}", id, err);
                }
                listing.set(result.clone().into());
            }
        });
    }

    let user = auth.user();

    rsx! {
        match listing() {
            Cache::Fetched(listing) => rsx! {
                Title { "{listing.name} | {SITE_NAME}" }
                Page {
                    class: "flex flex-col items-center",
                    div {
                        class: "w-full max-w-4xl flex flex-col gap-6",
                        ImageCarousel { images: listing.image_urls.clone() }
                        ListingDetails { listing: listing.clone() }
                        if let Some(user) = user {
                            if user.can_manage(listing.owner_id) {
                                OwnerActions { listing: listing.clone(), is_admin: user.is_admin(), refetch_trigger }
                            } else {
                                BuyerActions {
                                    listing: listing.clone(),
                                    buyer_name: user.username.clone(),
                                    buyer_email: user.email.clone(),
                                    refetch_trigger
                                }
                            }
                        } else {
                            Link {
                                to: Route::SignIn {},
                                class: "btn btn-primary",
                                "Sign in to contact the owner or buy"
                            }
                        }
                    }
                }
            },
            Cache::Error(err) => rsx! {
                ErrorPage { status: err.status, message: err.message }
            },
            _ => rsx! { LoadingPage {} },
        }
    }
}

#[component]
fn ImageCarousel(images: Vec<String>) -> Element {
    let mut index = use_signal(|| 0usize);
    #[allow(unused_mut)]
    let mut copied = use_signal(|| false);
    let count = images.len().max(1);
    let current = images.get(index() % count).cloned().unwrap_or_default();

    rsx! {
        div {
            class: "relative h-64 sm:h-[28rem] rounded-box overflow-hidden bg-base-200",
            img { class: "h-full w-full object-cover", src: "{current}" }
            if images.len() > 1 {
                button {
                    class: "btn btn-circle btn-sm absolute left-2 top-1/2",
                    onclick: move |_| index.set((index() + count - 1) % count),
                    Icon { width: 12, height: 12, icon: FaChevronLeft }
                }
                button {
                    class: "btn btn-circle btn-sm absolute right-2 top-1/2",
                    onclick: move |_| index.set((index() + 1) % count),
                    Icon { width: 12, height: 12, icon: FaChevronRight }
                }
            }
            button {
                class: "btn btn-circle absolute top-4 right-4",
                onclick: move |_| {
                    #[cfg(feature = "web")]
                    {
                        document::eval("navigator.clipboard.writeText(window.location.href)");
                        copied.set(true);
                        spawn(async move {
                            gloo_timers::future::TimeoutFuture::new(2_000).await;
                            copied.set(false);
                        });
                    }
                },
                Icon { width: 16, height: 16, icon: FaShareNodes }
            }
            if copied() {
                p { class: "badge badge-neutral absolute top-20 right-4", "Link copied!" }
            }
        }
    }
}

#[component]
fn ListingDetails(listing: ListingDto) -> Element {
    let price = format_price(listing.effective_price());
    let discount = listing.regular_price - listing.discount_price;

    rsx! {
        div {
            class: "flex flex-col gap-4",
            h1 {
                class: "text-2xl font-semibold",
                "{listing.name} - {price}"
                if listing.listing_type == ListingType::Rent {
                    " / month"
                }
            }
            p {
                class: "flex items-center gap-2 opacity-80",
                Icon { width: 14, height: 14, icon: FaLocationDot }
                "{listing.address}"
            }
            div {
                class: "flex flex-wrap gap-3",
                span {
                    class: "badge badge-lg badge-error",
                    if listing.listing_type == ListingType::Rent { "For Rent" } else { "For Sale" }
                }
                if listing.offer {
                    span { class: "badge badge-lg badge-success", "{format_price(discount)} off" }
                }
                if listing.featured {
                    span { class: "badge badge-lg badge-warning", "Featured" }
                }
                match listing.status {
                    ListingStatus::Available => rsx!(span { class: "badge badge-lg badge-outline", "Available" }),
                    ListingStatus::Sold => rsx!(span { class: "badge badge-lg badge-neutral", "Sold" }),
                    ListingStatus::Rented => rsx!(span { class: "badge badge-lg badge-neutral", "Rented" }),
                }
            }
            p {
                span { class: "font-semibold", "Description - " }
                "{listing.description}"
            }
            ul {
                class: "flex flex-wrap gap-6 text-sm font-semibold text-success",
                li {
                    class: "flex items-center gap-1",
                    Icon { width: 16, height: 16, icon: FaBed }
                    if listing.bedrooms > 1 { "{listing.bedrooms} beds" } else { "{listing.bedrooms} bed" }
                }
                li {
                    class: "flex items-center gap-1",
                    Icon { width: 16, height: 16, icon: FaBath }
                    if listing.bathrooms > 1 { "{listing.bathrooms} baths" } else { "{listing.bathrooms} bath" }
                }
                li {
                    class: "flex items-center gap-1",
                    Icon { width: 16, height: 16, icon: FaSquareParking }
                    if listing.parking { "Parking spot" } else { "No parking" }
                }
                li {
                    class: "flex items-center gap-1",
                    Icon { width: 16, height: 16, icon: FaChair }
                    if listing.furnished { "Furnished" } else { "Unfurnished" }
                }
            }
        }
    }
}

#[derive(Clone, Copy)]
enum OwnerAction {
    SetStatus(ListingStatus),
    ToggleFeatured,
}

#[component]
fn OwnerActions(listing: ListingDto, is_admin: bool, mut refetch_trigger: Signal<u32>) -> Element {
    let nav = navigator();
    let id = listing.id;
    let mut show_delete = use_signal(|| false);
    #[allow(unused_mut)]
    let mut is_processing = use_signal(|| false);
    #[allow(unused_mut)]
    let mut error = use_signal(|| None::<String>);

    let mut apply = move |action: OwnerAction| {
        #[cfg(feature = "web")]
        spawn(async move {
            is_processing.set(true);
            let result = match action {
                OwnerAction::SetStatus(status) => set_listing_status(id, status).await,
                OwnerAction::ToggleFeatured => toggle_featured(id).await,
            };
            match result {
                Ok(_) => refetch_trigger.set(refetch_trigger() + 1),
                Err(err) => error.set(Some(err.message)),
            }
            is_processing.set(false);
        });
        #[cfg(not(feature = "web"))]
        let _ = action;
    };

    let on_delete = move |_| {
        #[cfg(feature = "web")]
        spawn(async move {
            is_processing.set(true);
            match delete_listing(id).await {
                Ok(()) => {
                    show_delete.set(false);
                    nav.push(Route::Profile {});
                }
                Err(err) => error.set(Some(err.message)),
            }
            is_processing.set(false);
        });
    };

    rsx! {
        div {
            class: "flex flex-wrap gap-3 items-center",
            Link {
                to: Route::UpdateListing { id },
                class: "btn btn-success",
                "Edit"
            }
            button {
                class: "btn btn-error btn-outline",
                onclick: move |_| show_delete.set(true),
                "Delete"
            }
            select {
                class: "select select-bordered",
                disabled: is_processing(),
                onchange: move |evt| {
                    let status = match evt.value().as_str() {
                        "sold" => ListingStatus::Sold,
                        "rented" => ListingStatus::Rented,
                        _ => ListingStatus::Available,
                    };
                    apply(OwnerAction::SetStatus(status));
                },
                option { value: "available", selected: listing.status == ListingStatus::Available, "Available" }
                option { value: "sold", selected: listing.status == ListingStatus::Sold, "Sold" }
                option { value: "rented", selected: listing.status == ListingStatus::Rented, "Rented" }
            }
            if is_admin {
                button {
                    class: "btn btn-warning btn-outline",
                    disabled: is_processing(),
                    onclick: move |_| apply(OwnerAction::ToggleFeatured),
                    if listing.featured { "Unfeature" } else { "Feature" }
                }
            }
            if let Some(err) = error() {
                p { class: "text-error", "{err}" }
            }
        }
        ConfirmationModal {
            show: show_delete,
            title: "Delete listing".to_string(),
            message: format!("Delete \"{}\"? This cannot be undone.", listing.name),
            confirm_text: "Delete".to_string(),
            is_processing: is_processing(),
            on_confirm: on_delete,
        }
    }
}

#[component]
fn BuyerActions(
    listing: ListingDto,
    buyer_name: String,
    buyer_email: String,
    mut refetch_trigger: Signal<u32>,
) -> Element {
    let id = listing.id;
    #[allow(unused_mut)]
    let mut saved = use_signal(|| false);
    let mut contact_open = use_signal(|| false);
    #[allow(unused_mut)]
    let mut owner_name = use_signal(|| None::<String>);
    let mut message = use_signal(String::new);
    #[allow(unused_mut)]
    let mut busy = use_signal(|| false);
    #[allow(unused_mut)]
    let mut notice = use_signal(|| None::<Result<String, String>>);

    #[cfg(feature = "web")]
    use_future(move || async move {
        if let Ok(listings) = get_saved_listings().await {
            saved.set(listings.iter().any(|l| l.id == id));
        }
    });

    let on_save = move |_| {
        #[cfg(feature = "web")]
        spawn(async move {
            match toggle_saved_listing(id).await {
                Ok(result) => saved.set(result.saved),
                Err(err) => notice.set(Some(Err(err.message))),
            }
        });
    };

    let owner_id = listing.owner_id;
    let on_open_contact = move |_| {
        contact_open.set(true);
        #[cfg(feature = "web")]
        if owner_name.peek().is_none() {
            spawn(async move {
                match get_user_contact(owner_id).await {
                    Ok(contact) => owner_name.set(Some(contact.username)),
                    Err(err) => notice.set(Some(Err(err.message))),
                }
            });
        }
        #[cfg(not(feature = "web"))]
        let _ = owner_id;
    };

    let on_send = move |evt: FormEvent| {
        evt.prevent_default();
        #[cfg(feature = "web")]
        {
            let payload = ContactOwnerDto {
                listing_id: id,
                message: message().trim().to_string(),
            };
            spawn(async move {
                busy.set(true);
                match contact_owner(payload).await {
                    Ok(_) => {
                        message.set(String::new());
                        contact_open.set(false);
                        notice.set(Some(Ok("Message sent to the owner".to_string())));
                    }
                    Err(err) => notice.set(Some(Err(err.message))),
                }
                busy.set(false);
            });
        }
    };

    let listing_name = listing.name.clone();
    let on_buy = move |_| {
        #[cfg(feature = "web")]
        {
            let listing_name = listing_name.clone();
            let buyer_name = buyer_name.clone();
            let buyer_email = buyer_email.clone();
            spawn(async move {
                busy.set(true);
                let outcome = checkout(id, &listing_name, &buyer_name, &buyer_email).await;
                match outcome {
                    Ok(true) => {
                        notice.set(Some(Ok("Payment successful!".to_string())));
                        refetch_trigger.set(refetch_trigger() + 1);
                    }
                    Ok(false) => notice.set(Some(Err("Payment cancelled".to_string()))),
                    Err(err) => notice.set(Some(Err(err))),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "web"))]
        let _ = (&listing_name, &buyer_name, &buyer_email, refetch_trigger);
    };

    let owner_label = owner_name().unwrap_or_else(|| "the owner".to_string());
    let buy_label = match listing.listing_type {
        ListingType::Rent => "Rent now",
        ListingType::Sale => "Buy now",
    };

    rsx! {
        div {
            class: "flex flex-col gap-3",
            div {
                class: "flex flex-wrap gap-3",
                if listing.status == ListingStatus::Available {
                    button {
                        class: "btn btn-primary",
                        disabled: busy(),
                        onclick: on_buy,
                        if busy() { span { class: "loading loading-spinner loading-sm" } }
                        "{buy_label}"
                    }
                }
                button {
                    class: "btn btn-outline",
                    onclick: on_open_contact,
                    "Contact landlord"
                }
                button {
                    class: if saved() { "btn btn-error" } else { "btn btn-outline" },
                    onclick: on_save,
                    Icon { width: 14, height: 14, icon: FaHeart }
                    if saved() { "Saved" } else { "Save" }
                }
            }
            match notice() {
                Some(Ok(text)) => rsx!(p { class: "text-success", "{text}" }),
                Some(Err(text)) => rsx!(p { class: "text-error", "{text}" }),
                None => rsx!(),
            }
            if contact_open() {
                form {
                    class: "flex flex-col gap-3",
                    onsubmit: on_send,
                    p {
                        "Contact "
                        span { class: "font-semibold", "{owner_label}" }
                        " for "
                        span { class: "font-semibold", "{listing.name.to_lowercase()}" }
                    }
                    textarea {
                        class: "textarea textarea-bordered w-full",
                        rows: 3,
                        placeholder: "Enter your message here...",
                        value: "{message}",
                        oninput: move |evt| message.set(evt.value()),
                    }
                    button {
                        r#type: "submit",
                        class: "btn btn-neutral",
                        disabled: busy() || message().trim().is_empty(),
                        "Send message"
                    }
                }
            }
        }
    }
}

/// Runs the full purchase: create the order, open the checkout, verify or cancel.
///
/// Returns `Ok(false)` when the buyer closes the checkout without paying.
#[cfg(feature = "web")]
async fn checkout(
    listing_id: i32,
    listing_name: &str,
    buyer_name: &str,
    buyer_email: &str,
) -> Result<bool, String> {
    let checkout = create_order(listing_id).await.map_err(|e| e.message)?;
    let order_id = checkout.order.id;

    match open_checkout(&checkout, listing_name, buyer_name, buyer_email).await {
        Ok(Some(payment)) => verify_payment(payment)
            .await
            .map(|_| true)
            .map_err(|e| e.message),
        Ok(None) => {
            if let Err(err) = cancel_order(order_id).await {
                tracing::warn!("Failed to cancel order {}: {}", order_id, err);
            }
            Ok(false)
        }
        Err(err) => {
            if let Err(cancel_err) = cancel_order(order_id).await {
                tracing::warn!("Failed to cancel order {}: {}", order_id, cancel_err);
            }
            Err(err.message)
        }
    }
}
