mod account;
mod listings;
mod notifications;
mod orders;
mod saved;

use dioxus::prelude::*;

use crate::client::{component::Page, constant::SITE_NAME};

use account::AccountTab;
use listings::ListingsTab;
use notifications::NotificationsTab;
use orders::OrdersTab;
use saved::SavedTab;

#[derive(Clone, Copy, PartialEq)]
enum ProfileTab {
    Account,
    Listings,
    Saved,
    Orders,
    Notifications,
}

impl ProfileTab {
    const ALL: [ProfileTab; 5] = [
        ProfileTab::Account,
        ProfileTab::Listings,
        ProfileTab::Saved,
        ProfileTab::Orders,
        ProfileTab::Notifications,
    ];

    fn label(&self) -> &'static str {
        match self {
            ProfileTab::Account => "Account",
            ProfileTab::Listings => "My listings",
            ProfileTab::Saved => "Saved",
            ProfileTab::Orders => "Orders",
            ProfileTab::Notifications => "Notifications",
        }
    }
}

#[component]
pub fn Profile() -> Element {
    let mut active = use_signal(|| ProfileTab::Account);

    rsx! {
        Title { "Profile | {SITE_NAME}" }
        Page {
            class: "flex flex-col items-center",
            div {
                class: "w-full max-w-4xl flex flex-col gap-6",
                div {
                    role: "tablist",
                    class: "tabs tabs-border overflow-x-auto",
                    for tab in ProfileTab::ALL {
                        button {
                            key: "{tab.label()}",
                            role: "tab",
                            class: if active() == tab { "tab tab-active" } else { "tab" },
                            onclick: move |_| active.set(tab),
                            "{tab.label()}"
                        }
                    }
                }
                match active() {
                    ProfileTab::Account => rsx!(AccountTab {}),
                    ProfileTab::Listings => rsx!(ListingsTab {}),
                    ProfileTab::Saved => rsx!(SavedTab {}),
                    ProfileTab::Orders => rsx!(OrdersTab {}),
                    ProfileTab::Notifications => rsx!(NotificationsTab {}),
                }
            }
        }
    }
}
