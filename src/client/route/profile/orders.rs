use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::{
    client::{component::listing_card::format_price, model::cache::Cache, router::Route},
    model::order::{OrderDto, OrderStatus},
};

#[cfg(feature = "web")]
use crate::client::api::payment::{cancel_order, delete_order, get_orders};

fn status_badge(status: OrderStatus) -> (&'static str, &'static str) {
    match status {
        OrderStatus::Pending => ("badge badge-info", "Pending"),
        OrderStatus::Success => ("badge badge-success", "Paid"),
        OrderStatus::Failed => ("badge badge-error", "Failed"),
        OrderStatus::Cancelled => ("badge badge-ghost", "Cancelled"),
    }
}

#[component]
pub fn OrdersTab() -> Element {
    #[allow(unused_mut)]
    let mut orders = use_signal(|| Cache::<Vec<OrderDto>>::Loading);
    let refetch_trigger = use_signal(|| 0u32);

    #[cfg(feature = "web")]
    {
        let future = use_resource(move || async move {
            let _ = refetch_trigger();
            get_orders().await
        });

        use_effect(move || {
            if let Some(result) = &*future.read_unchecked() {
                if let Err(err) = result {
                    tracing::error!("Failed to fetch orders: {}", err);
                }
                orders.set(result.clone().into());
            }
        });
    }

    rsx! {
        match orders() {
            Cache::Fetched(items) if items.is_empty() => rsx! {
                p { class: "text-center opacity-70", "No orders yet." }
            },
            Cache::Fetched(items) => rsx! {
                div {
                    class: "overflow-x-auto",
                    table {
                        class: "table",
                        thead {
                            tr {
                                th { "Listing" }
                                th { "Amount" }
                                th { "Status" }
                                th { "Date" }
                                th {}
                            }
                        }
                        tbody {
                            for order in items {
                                OrderRow { key: "{order.id}", order, refetch_trigger }
                            }
                        }
                    }
                }
            },
            Cache::Error(err) => rsx! { p { class: "text-error", "{err}" } },
            _ => rsx! { span { class: "loading loading-spinner self-center" } },
        }
    }
}

#[component]
fn OrderRow(order: OrderDto, mut refetch_trigger: Signal<u32>) -> Element {
    let id = order.id;
    let (badge_class, badge_label) = status_badge(order.status);
    // Amounts are stored in paise
    let amount = format_price(order.amount / 100);
    let date = order.created_at.format("%Y-%m-%d %H:%M").to_string();

    let on_cancel = move |_| {
        #[cfg(feature = "web")]
        spawn(async move {
            match cancel_order(id).await {
                Ok(_) => refetch_trigger.set(refetch_trigger() + 1),
                Err(err) => tracing::error!("Failed to cancel order {}: {}", id, err),
            }
        });
    };

    let on_delete = move |_| {
        #[cfg(feature = "web")]
        spawn(async move {
            match delete_order(id).await {
                Ok(()) => refetch_trigger.set(refetch_trigger() + 1),
                Err(err) => tracing::error!("Failed to delete order {}: {}", id, err),
            }
        });
    };

    rsx! {
        tr {
            td {
                Link {
                    to: Route::ListingPage { id: order.listing_id },
                    class: "link",
                    "#{order.listing_id}"
                }
            }
            td { "{amount}" }
            td { span { class: "{badge_class}", "{badge_label}" } }
            td { "{date}" }
            td {
                class: "flex gap-2",
                if order.status == OrderStatus::Pending {
                    button { class: "btn btn-xs", onclick: on_cancel, "Cancel" }
                }
                button { class: "btn btn-xs btn-ghost text-error", onclick: on_delete, "Delete" }
            }
        }
    }
}
