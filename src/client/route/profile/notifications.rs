use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::{
    client::{model::cache::Cache, router::Route},
    model::notification::NotificationDto,
};

#[cfg(feature = "web")]
use crate::client::api::notification::{
    delete_notification, get_notifications, mark_notification_read,
};

#[component]
pub fn NotificationsTab() -> Element {
    #[allow(unused_mut)]
    let mut notifications = use_signal(|| Cache::<Vec<NotificationDto>>::Loading);
    let refetch_trigger = use_signal(|| 0u32);

    #[cfg(feature = "web")]
    {
        let future = use_resource(move || async move {
            let _ = refetch_trigger();
            get_notifications().await
        });

        use_effect(move || {
            if let Some(result) = &*future.read_unchecked() {
                if let Err(err) = result {
                    tracing::error!("Failed to fetch notifications: {}", err);
                }
                notifications.set(result.clone().into());
            }
        });
    }

    rsx! {
        match notifications() {
            Cache::Fetched(items) if items.is_empty() => rsx! {
                p { class: "text-center opacity-70", "You're all caught up." }
            },
            Cache::Fetched(items) => rsx! {
                ul {
                    class: "flex flex-col gap-2",
                    for notification in items {
                        NotificationItem { key: "{notification.id}", notification, refetch_trigger }
                    }
                }
            },
            Cache::Error(err) => rsx! { p { class: "text-error", "{err}" } },
            _ => rsx! { span { class: "loading loading-spinner self-center" } },
        }
    }
}

#[component]
fn NotificationItem(notification: NotificationDto, mut refetch_trigger: Signal<u32>) -> Element {
    let id = notification.id;
    let date = notification.created_at.format("%Y-%m-%d %H:%M").to_string();

    let on_read = move |_| {
        #[cfg(feature = "web")]
        spawn(async move {
            match mark_notification_read(id).await {
                Ok(_) => refetch_trigger.set(refetch_trigger() + 1),
                Err(err) => tracing::error!("Failed to mark notification {} read: {}", id, err),
            }
        });
    };

    let on_delete = move |_| {
        #[cfg(feature = "web")]
        spawn(async move {
            match delete_notification(id).await {
                Ok(()) => refetch_trigger.set(refetch_trigger() + 1),
                Err(err) => tracing::error!("Failed to delete notification {}: {}", id, err),
            }
        });
    };

    rsx! {
        li {
            class: if notification.read { "card bg-base-100 border border-base-300" } else { "card bg-base-200 border border-primary" },
            div {
                class: "card-body p-4 gap-2",
                p { class: "whitespace-pre-wrap", "{notification.message}" }
                div {
                    class: "flex flex-wrap gap-3 items-center text-sm opacity-80",
                    span { "{date}" }
                    if let Some(listing_id) = notification.listing_id {
                        Link { to: Route::ListingPage { id: listing_id }, class: "link", "View listing" }
                    }
                    if !notification.read {
                        button { class: "btn btn-xs", onclick: on_read, "Mark read" }
                    }
                    button { class: "btn btn-xs btn-ghost text-error", onclick: on_delete, "Delete" }
                }
            }
        }
    }
}
