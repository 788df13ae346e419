pub mod confirmation_modal;

use dioxus::prelude::*;

pub use confirmation_modal::ConfirmationModal;

/// Dialog overlay toggled by `show`.
///
/// While `locked` is set the dialog ignores Escape, the backdrop and the close button,
/// so an in-flight request can't be abandoned halfway.
#[component]
pub fn Modal(show: Signal<bool>, title: String, locked: bool, children: Element) -> Element {
    let mut dismiss = move || {
        if !locked {
            show.set(false);
        }
    };

    #[cfg(feature = "web")]
    use_effect(move || {
        if show() {
            document::eval(r#"document.getElementById('oasis-modal')?.focus()"#);
        }
    });

    if !show() {
        return rsx!();
    }

    rsx!(
        div {
            id: "oasis-modal",
            class: "modal modal-open",
            tabindex: "-1",
            onkeydown: move |evt| {
                if evt.key() == Key::Escape {
                    dismiss();
                }
            },
            div {
                class: "modal-box max-w-md",
                div {
                    class: "flex items-start justify-between gap-4 mb-3",
                    h3 { class: "text-lg font-semibold", "{title}" }
                    button {
                        r#type: "button",
                        class: "btn btn-ghost btn-sm btn-square",
                        disabled: locked,
                        onclick: move |_| dismiss(),
                        "✕"
                    }
                }
                {children}
            }
            div {
                class: "modal-backdrop bg-black/40",
                onclick: move |_| dismiss(),
            }
        }
    )
}
