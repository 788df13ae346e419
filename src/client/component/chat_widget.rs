use dioxus::prelude::*;
use dioxus_free_icons::{
    icons::fa_solid_icons::{FaPaperPlane, FaRobot, FaXmark},
    Icon,
};
use pulldown_cmark::{html, Event, Options, Parser};

use crate::model::ai::{ChatMessageDto, ChatRole};

#[cfg(feature = "web")]
use crate::client::api::ai::chat;

/// Conversation turns sent with each request; older turns are dropped.
const HISTORY_WINDOW: usize = 20;

const GREETING: &str = "Hi! I can help you find a home, explain listing details, or walk you through buying and renting on OasisSpace.";

/// Renders an assistant reply as HTML. Raw HTML in the reply is emitted as escaped text.
fn render_markdown(text: &str) -> String {
    let parser = Parser::new_ext(text, Options::empty()).map(|event| match event {
        Event::Html(raw) => Event::Text(raw),
        other => other,
    });
    let mut html_output = String::new();
    html::push_html(&mut html_output, parser);
    html_output
}

/// Floating assistant available on every page.
///
/// The conversation lives only in this component; the server is stateless and receives
/// the recent history with every message.
#[component]
pub fn ChatWidget() -> Element {
    let mut open = use_signal(|| false);
    let mut messages = use_signal(Vec::<ChatMessageDto>::new);
    let mut draft = use_signal(String::new);
    let mut sending = use_signal(|| false);
    let mut error = use_signal(|| None::<String>);

    let mut send = move || {
        let content = draft().trim().to_string();
        if content.is_empty() || sending() {
            return;
        }

        messages.write().push(ChatMessageDto {
            role: ChatRole::User,
            content,
        });
        draft.set(String::new());
        error.set(None);

        #[cfg(feature = "web")]
        {
            sending.set(true);
            let history = messages();
            let start = history.len().saturating_sub(HISTORY_WINDOW);
            let history = history[start..].to_vec();

            spawn(async move {
                match chat(history).await {
                    Ok(reply) => messages.write().push(ChatMessageDto {
                        role: ChatRole::Assistant,
                        content: reply,
                    }),
                    Err(err) => error.set(Some(err.message)),
                }
                sending.set(false);
            });
        }
    };

    rsx!(
        div {
            class: "fixed bottom-4 right-4 z-30 flex flex-col items-end gap-2",
            if open() {
                div {
                    class: "card bg-base-100 border border-base-300 shadow-xl w-80 sm:w-96 h-[28rem]",
                    div {
                        class: "flex justify-between items-center p-3 border-b border-base-300",
                        p { class: "font-bold", "OasisSpace assistant" }
                        button {
                            class: "btn btn-sm btn-circle btn-ghost",
                            onclick: move |_| open.set(false),
                            Icon { width: 14, height: 14, icon: FaXmark }
                        }
                    }
                    div {
                        class: "flex-1 overflow-y-auto p-3 flex flex-col gap-2",
                        div {
                            class: "chat chat-start",
                            div { class: "chat-bubble", "{GREETING}" }
                        }
                        for (i, message) in messages().into_iter().enumerate() {
                            if message.role == ChatRole::User {
                                div {
                                    key: "{i}",
                                    class: "chat chat-end",
                                    div { class: "chat-bubble chat-bubble-primary whitespace-pre-wrap", "{message.content}" }
                                }
                            } else {
                                div {
                                    key: "{i}",
                                    class: "chat chat-start",
                                    div {
                                        class: "chat-bubble prose prose-sm",
                                        dangerous_inner_html: "{render_markdown(&message.content)}"
                                    }
                                }
                            }
                        }
                        if sending() {
                            div {
                                class: "chat chat-start",
                                div { class: "chat-bubble", span { class: "loading loading-dots loading-sm" } }
                            }
                        }
                        if let Some(err) = error() {
                            p { class: "text-error text-sm", "{err}" }
                        }
                    }
                    form {
                        class: "join p-3 border-t border-base-300",
                        onsubmit: move |evt| {
                            evt.prevent_default();
                            send();
                        },
                        input {
                            class: "input input-bordered join-item flex-1",
                            placeholder: "Ask about a home...",
                            value: "{draft}",
                            disabled: sending(),
                            oninput: move |evt| draft.set(evt.value()),
                        }
                        button {
                            r#type: "submit",
                            class: "btn btn-primary join-item",
                            disabled: sending(),
                            Icon { width: 14, height: 14, icon: FaPaperPlane }
                        }
                    }
                }
            }
            button {
                class: "btn btn-primary btn-circle btn-lg shadow-lg",
                onclick: move |_| open.set(!open()),
                Icon { width: 24, height: 24, icon: FaRobot }
            }
        }
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn markdown_reply_renders_as_html() {
        let html = render_markdown("**Two** bedrooms");

        assert!(html.contains("<strong>Two</strong>"));
    }

    #[test]
    fn raw_html_in_reply_is_escaped_as_text() {
        let html = render_markdown("<script>alert(1)</script>");

        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }
}
