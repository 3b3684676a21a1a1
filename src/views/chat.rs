use crate::assistant::{PORTFOLIO_TABLE, SUGGESTED_QUESTIONS, WELCOME_MESSAGE, typing_delay};
use crate::types::{ChatMessage, Role};
use dioxus::events::Key;
use dioxus::prelude::*;
use time::{OffsetDateTime, UtcOffset, format_description::FormatItem, macros::format_description};

const MESSAGE_TIME_FORMAT: &[FormatItem<'static>] =
    format_description!("[hour repr:12 padding:zero]:[minute padding:zero] [period case:upper]");

/// Sends are serialized: whitespace-only input and sends racing a pending
/// reply are both dropped.
fn accepts_send(text: &str, reply_pending: bool) -> bool {
    !text.trim().is_empty() && !reply_pending
}

fn format_message_timestamp(timestamp: OffsetDateTime) -> Option<String> {
    let mut datetime = timestamp;
    if let Ok(offset) = UtcOffset::current_local_offset() {
        datetime = datetime.to_offset(offset);
    }
    datetime.format(MESSAGE_TIME_FORMAT).ok()
}

#[component]
pub fn ChatSection() -> Element {
    let messages = use_signal(|| vec![ChatMessage::new(Role::Assistant, WELCOME_MESSAGE)]);
    let mut input = use_signal(String::new);
    let is_typing = use_signal(|| false);
    let pending_reply = use_signal(|| Option::<Task>::None);

    // A reply scheduled for a torn-down session must never land.
    use_drop(move || {
        let mut pending_reply = pending_reply;
        if let Some(task) = pending_reply.take() {
            task.cancel();
        }
    });

    let mut send_message = {
        let mut messages = messages;
        let mut input_signal = input;
        let mut is_typing = is_typing;
        let mut pending_reply = pending_reply;
        move |text: String| {
            if !accepts_send(&text, is_typing()) {
                return;
            }
            let trimmed = text.trim();

            messages.with_mut(|msgs| msgs.push(ChatMessage::new(Role::User, trimmed)));
            input_signal.set(String::new());
            is_typing.set(true);

            // The reply is matched against the original input, not the
            // conversation.
            let prompt = trimmed.to_string();
            let task = spawn(async move {
                tokio::time::sleep(typing_delay()).await;
                let reply = PORTFOLIO_TABLE.respond(&prompt);
                messages.with_mut(|msgs| msgs.push(ChatMessage::new(Role::Assistant, reply)));
                is_typing.set(false);
                pending_reply.set(None);
            });
            pending_reply.set(Some(task));
        }
    };

    let messages_snapshot = messages();

    rsx! {
        section { id: "ai-chat", class: "section",
            div { class: "section-heading",
                h2 { class: "section-title neon-text", "Ask My AI Assistant" }
                p { class: "section-subtitle",
                    "Get instant answers about my skills, experience, and projects"
                }
            }

            div { class: "card glass chat-card",
                div { class: "chat-card-header",
                    div { class: "avatar assistant", "AI" }
                    span { class: "strong", "AI Assistant" }
                    span { class: "badge badge-secondary online-badge", "✦ Online" }
                }

                div { class: "chat-list",
                    for msg in messages_snapshot.iter() {
                        div {
                            key: "{msg.id}",
                            class: format_args!("message-row {}", match msg.role { Role::User => "user", Role::Assistant => "assistant" }),
                            div {
                                class: format_args!("avatar {}", match msg.role { Role::User => "user", Role::Assistant => "assistant" }),
                                {match msg.role { Role::User => "You", Role::Assistant => "AI" }}
                            }
                            div { class: "message-stack",
                                div {
                                    class: format_args!("bubble {}", match msg.role { Role::User => "user", Role::Assistant => "assistant" }),
                                    "{msg.content}"
                                }
                                if let Some(ts) = format_message_timestamp(msg.created_at) {
                                    span { class: "message-timestamp", "{ts}" }
                                }
                            }
                        }
                    }
                    if is_typing() {
                        div { class: "message-row assistant",
                            div { class: "avatar assistant", "AI" }
                            div { class: "bubble assistant typing-indicator",
                                span { class: "typing-dot" }
                                span { class: "typing-dot" }
                                span { class: "typing-dot" }
                            }
                        }
                    }
                }

                div { class: "chat-suggestions",
                    p { class: "text-muted", "Suggested questions:" }
                    div { class: "badge-row",
                        for question in SUGGESTED_QUESTIONS.iter().copied() {
                            button {
                                class: "btn btn-outline glass suggestion-chip",
                                r#type: "button",
                                onclick: move |_| input.set(question.to_string()),
                                "{question}"
                            }
                        }
                    }
                }

                div { class: "composer",
                    input {
                        class: "composer-input",
                        r#type: "text",
                        placeholder: "Ask me anything about Aman...",
                        value: "{input}",
                        oninput: move |ev| input.set(ev.value()),
                        onkeydown: move |ev| {
                            if ev.key() == Key::Enter {
                                ev.prevent_default();
                                let text = input();
                                send_message(text);
                            }
                        },
                    }
                    button {
                        class: "btn btn-primary neon-glow",
                        r#type: "button",
                        disabled: is_typing() || input().trim().is_empty(),
                        onclick: move |_| {
                            let text = input();
                            send_message(text);
                        },
                        "Send"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_input_is_not_sent() {
        assert!(!accepts_send("", false));
        assert!(!accepts_send("   \t", false));
    }

    #[test]
    fn send_waits_for_pending_reply() {
        assert!(accepts_send("hello", false));
        assert!(!accepts_send("hello", true));
    }
}
