use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::{
    client::{
        component::{page::ErrorPage, Page},
        constant::SITE_NAME,
        model::cache::Cache,
    },
    model::user::UserDto,
};

#[cfg(feature = "web")]
use crate::client::api::admin::{get_seller_requests, review_seller_request};

#[component]
pub fn SellerRequests() -> Element {
    #[allow(unused_mut)]
    let mut requests = use_signal(|| Cache::<Vec<UserDto>>::Loading);
    let refetch_trigger = use_signal(|| 0u32);

    #[cfg(feature = "web")]
    {
        let future = use_resource(move || async move {
            let _ = refetch_trigger();
            get_seller_requests().await
        });

        use_effect(move || {
            if let Some(result) = &*future.read_unchecked() {
                if let Err(err) = result {
                    tracing::error!("Failed to fetch seller requests: {}", err);
                }
                requests.set(result.clone().into());
            }
        });
    }

    rsx! {
        Title { "Seller requests | {SITE_NAME}" }
        if let Some(err) = requests().error().cloned() {
            ErrorPage { status: err.status, message: err.message }
        } else {
            Page {
                class: "flex flex-col items-center",
                div {
                    class: "w-full max-w-4xl flex flex-col gap-6",
                    h1 { class: "text-2xl font-bold", "Seller requests" }
                    match requests() {
                        Cache::Fetched(users) if users.is_empty() => rsx! {
                            p { class: "opacity-70", "No pending requests." }
                        },
                        Cache::Fetched(users) => rsx! {
                            div {
                                class: "overflow-x-auto",
                                table {
                                    class: "table",
                                    thead {
                                        tr {
                                            th { "User" }
                                            th { "Email" }
                                            th { "Member since" }
                                            th {}
                                        }
                                    }
                                    tbody {
                                        for user in users {
                                            RequestRow { key: "{user.id}", user, refetch_trigger }
                                        }
                                    }
                                }
                            }
                        },
                        _ => rsx! { span { class: "loading loading-spinner self-center" } },
                    }
                }
            }
        }
    }
}

#[component]
fn RequestRow(user: UserDto, mut refetch_trigger: Signal<u32>) -> Element {
    let id = user.id;
    #[allow(unused_mut)]
    let mut processing = use_signal(|| false);
    let joined = user.created_at.format("%Y-%m-%d").to_string();

    let mut review = move |approve: bool| {
        #[cfg(feature = "web")]
        spawn(async move {
            processing.set(true);
            match review_seller_request(id, approve).await {
                Ok(_) => refetch_trigger.set(refetch_trigger() + 1),
                Err(err) => tracing::error!("Failed to review seller request {}: {}", id, err),
            }
            processing.set(false);
        });
        #[cfg(not(feature = "web"))]
        let _ = approve;
    };

    rsx! {
        tr {
            td {
                div {
                    class: "flex items-center gap-3",
                    div {
                        class: "avatar",
                        div { class: "w-8 rounded-full", img { src: "{user.avatar}", alt: "{user.username}" } }
                    }
                    "{user.username}"
                }
            }
            td { "{user.email}" }
            td { "{joined}" }
            td {
                class: "flex gap-2",
                button {
                    class: "btn btn-sm btn-success",
                    disabled: processing(),
                    onclick: move |_| review(true),
                    "Approve"
                }
                button {
                    class: "btn btn-sm btn-error btn-outline",
                    disabled: processing(),
                    onclick: move |_| review(false),
                    "Reject"
                }
            }
        }
    }
}
