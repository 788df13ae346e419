use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::{
    client::{
        component::{
            listing_card::format_price,
            page::{ErrorPage, LoadingPage},
            Page,
        },
        constant::SITE_NAME,
        model::cache::Cache,
        router::Route,
    },
    model::dashboard::{DashboardStatsDto, StatsScope},
};

#[cfg(feature = "web")]
use crate::client::api::dashboard::get_stats;

#[component]
pub fn Dashboard() -> Element {
    #[allow(unused_mut)]
    let mut stats = use_signal(|| Cache::<DashboardStatsDto>::Loading);

    #[cfg(feature = "web")]
    {
        let future = use_resource(get_stats);

        use_effect(move || {
            if let Some(result) = &*future.read_unchecked() {
                if let Err(err) = result {
                    tracing::error!("Failed to fetch dashboard stats: {}", err);
                }
                stats.set(result.clone().into());
            }
        });
    }

    rsx! {
        Title { "Dashboard | {SITE_NAME}" }
        match stats() {
            Cache::Fetched(stats) => rsx! {
                Page {
                    class: "flex flex-col items-center",
                    div {
                        class: "w-full max-w-6xl flex flex-col gap-6",
                        div {
                            class: "flex flex-wrap justify-between items-center gap-4",
                            h1 {
                                class: "text-2xl font-bold",
                                if stats.scope == StatsScope::Platform { "Platform dashboard" } else { "Seller dashboard" }
                            }
                            div {
                                class: "flex gap-2",
                                Link { to: Route::CreateListing {}, class: "btn btn-success", "Create listing" }
                                if let Some(pending) = stats.pending_seller_requests {
                                    Link {
                                        to: Route::SellerRequests {},
                                        class: "btn btn-outline",
                                        "Seller requests"
                                        span { class: "badge badge-sm", "{pending}" }
                                    }
                                }
                            }
                        }
                        StatsGrid { stats }
                    }
                }
            },
            Cache::Error(err) => rsx! { ErrorPage { status: err.status, message: err.message } },
            _ => rsx! { LoadingPage {} },
        }
    }
}

#[component]
fn StatsGrid(stats: DashboardStatsDto) -> Element {
    // Revenue is stored in paise
    let revenue = format_price(stats.revenue / 100);

    rsx! {
        div {
            class: "stats stats-vertical lg:stats-horizontal shadow w-full",
            if let Some(users) = stats.total_users {
                Stat { title: "Users", value: users.to_string() }
            }
            Stat { title: "Listings", value: stats.total_listings.to_string(), desc: format!("{} featured", stats.featured_listings) }
            Stat { title: "Available", value: stats.available_listings.to_string() }
            Stat {
                title: "Closed",
                value: (stats.sold_listings + stats.rented_listings).to_string(),
                desc: format!("{} sold, {} rented", stats.sold_listings, stats.rented_listings),
            }
        }
        div {
            class: "stats stats-vertical lg:stats-horizontal shadow w-full",
            Stat { title: "Orders", value: stats.total_orders.to_string() }
            Stat { title: "Successful payments", value: stats.successful_orders.to_string() }
            Stat { title: "Revenue", value: revenue }
        }
    }
}

#[component]
fn Stat(title: &'static str, value: String, desc: Option<String>) -> Element {
    rsx! {
        div {
            class: "stat",
            div { class: "stat-title", "{title}" }
            div { class: "stat-value", "{value}" }
            if let Some(desc) = desc {
                div { class: "stat-desc", "{desc}" }
            }
        }
    }
}
