//! Shopping assistant chat window.
//!
//! Submitting starts a streamed turn through `net::chat`; the turn's cancel
//! handle is parked in `cancel_slot` so closing the window stops the read
//! loop and keeps whatever text already arrived.

use leptos::prelude::*;

use crate::config::ClientConfig;
use crate::net::chat::{CancelHandle, cancel_pair, start_turn};
use crate::state::chat::{ChatMessage, ChatRole, ChatState};
use crate::util::markdown::render_markdown_html;

#[component]
pub fn ChatModal(on_close: Callback<()>, cancel_slot: StoredValue<Option<CancelHandle>>) -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();
    let config = expect_context::<ClientConfig>();
    let input = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let text = input.get_untracked();
        let (handle, signal) = cancel_pair();
        if start_turn(config, chat, &text, signal) {
            input.set(String::new());
            cancel_slot.set_value(Some(handle));
        }
    };

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            on_close.run(());
        }
    };

    let messages = move || chat.with(|c| c.messages.clone());
    let loading = move || chat.with(|c| c.loading);
    let waiting_for_first_token = move || chat.with(|c| c.loading && c.in_flight().is_none());

    view! {
        <div class="chat-modal" on:keydown=on_keydown>
            <div class="chat-modal__header">
                <div class="chat-modal__avatar">"✓"</div>
                <div>
                    <p class="chat-modal__title">"Nike Assistant"</p>
                    <p class="chat-modal__status">"Online"</p>
                </div>
                <button class="chat-modal__close" aria-label="Close chat" on:click=move |_| on_close.run(())>
                    "✕"
                </button>
            </div>
            <div class="chat-modal__messages">
                <For
                    each=messages
                    key=|m| (m.id.clone(), m.content.len(), m.streaming)
                    children=|m| view! { <ChatBubble message=m/> }
                />
                <Show when=waiting_for_first_token>
                    <div class="chat-bubble chat-bubble--assistant chat-bubble--typing">
                        <span></span>
                        <span></span>
                        <span></span>
                    </div>
                </Show>
            </div>
            <form class="chat-modal__form" on:submit=on_submit>
                <input
                    class="chat-modal__input"
                    type="text"
                    placeholder="Ask about our shoes..."
                    prop:value=move || input.get()
                    on:input=move |ev| input.set(event_target_value(&ev))
                />
                <button
                    class="chat-modal__send"
                    type="submit"
                    aria-label="Send"
                    disabled=move || loading() || input.with(|v| v.trim().is_empty())
                >
                    "➤"
                </button>
            </form>
        </div>
    }
}

#[component]
fn ChatBubble(message: ChatMessage) -> impl IntoView {
    match message.role {
        ChatRole::User => view! {
            <div class="chat-bubble chat-bubble--user">{message.content}</div>
        }
        .into_any(),
        ChatRole::Assistant => {
            let rendered = render_markdown_html(&message.content);
            view! {
                <div
                    class="chat-bubble chat-bubble--assistant chat-bubble__markdown"
                    class:is-streaming=message.streaming
                    inner_html=rendered
                ></div>
            }
            .into_any()
        }
    }
}
