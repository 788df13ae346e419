use dioxus::prelude::*;
use dioxus_free_icons::{
    icons::fa_solid_icons::{FaBath, FaBed, FaLocationDot},
    Icon,
};

use crate::{
    client::router::Route,
    model::listing::{ListingDto, ListingStatus, ListingType},
};

/// Formats a whole-rupee amount with comma-separated thousands.
pub fn format_price(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    if amount < 0 {
        format!("-₹{}", grouped)
    } else {
        format!("₹{}", grouped)
    }
}

#[component]
pub fn ListingCard(listing: ListingDto) -> Element {
    let cover = listing.image_urls.first().cloned().unwrap_or_default();
    let price = format_price(listing.effective_price());

    rsx!(
        Link {
            to: Route::ListingPage { id: listing.id },
            class: "card bg-base-100 shadow hover:shadow-lg transition-shadow w-full sm:w-72 overflow-hidden",
            figure {
                class: "relative h-44",
                img {
                    class: "h-full w-full object-cover hover:scale-105 transition-transform",
                    src: "{cover}",
                    alt: "{listing.name}",
                }
                if listing.featured {
                    span { class: "badge badge-warning absolute top-2 left-2", "Featured" }
                }
                match listing.status {
                    ListingStatus::Available => rsx!(),
                    ListingStatus::Sold => rsx!(span { class: "badge badge-error absolute top-2 right-2", "Sold" }),
                    ListingStatus::Rented => rsx!(span { class: "badge badge-error absolute top-2 right-2", "Rented" }),
                }
            }
            div {
                class: "card-body p-4 gap-2",
                h2 { class: "card-title text-base truncate", "{listing.name}" }
                div {
                    class: "flex items-center gap-1 text-sm opacity-70",
                    Icon { width: 12, height: 12, icon: FaLocationDot }
                    p { class: "truncate", "{listing.address}" }
                }
                p { class: "text-sm opacity-80 line-clamp-2", "{listing.description}" }
                p {
                    class: "font-semibold",
                    "{price}"
                    if listing.listing_type == ListingType::Rent {
                        " / month"
                    }
                }
                div {
                    class: "flex gap-4 text-xs font-bold",
                    span {
                        class: "flex items-center gap-1",
                        Icon { width: 12, height: 12, icon: FaBed }
                        "{listing.bedrooms} beds"
                    }
                    span {
                        class: "flex items-center gap-1",
                        Icon { width: 12, height: 12, icon: FaBath }
                        "{listing.bathrooms} baths"
                    }
                }
            }
        }
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands() {
        assert_eq!(format_price(0), "₹0");
        assert_eq!(format_price(950), "₹950");
        assert_eq!(format_price(1500), "₹1,500");
        assert_eq!(format_price(1250000), "₹1,250,000");
    }
}
