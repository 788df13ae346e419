use dioxus::prelude::*;

use super::Modal;

/// Modal asking the user to confirm a destructive action.
///
/// The modal cannot be dismissed while `is_processing` is set.
#[component]
pub fn ConfirmationModal(
    show: Signal<bool>,
    title: String,
    message: String,
    confirm_text: String,
    is_processing: bool,
    on_confirm: EventHandler<()>,
) -> Element {
    rsx!(
        Modal {
            show,
            title,
            locked: is_processing,
            p { class: "mb-2", "{message}" }
            div {
                class: "modal-action",
                button {
                    r#type: "button",
                    class: "btn",
                    onclick: move |_| show.set(false),
                    disabled: is_processing,
                    "Cancel"
                }
                button {
                    r#type: "button",
                    class: "btn btn-error",
                    onclick: move |_| on_confirm.call(()),
                    disabled: is_processing,
                    if is_processing {
                        span { class: "loading loading-spinner loading-sm mr-2" }
                    }
                    "{confirm_text}"
                }
            }
        }
    )
}
