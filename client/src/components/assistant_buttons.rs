//! Floating chat and voice buttons plus the panels they open.

use leptos::prelude::*;

use crate::components::{chat_modal::ChatModal, voice_modal::VoiceModal};
use crate::net::chat::CancelHandle;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Panel {
    Closed,
    Chat,
    Voice,
}

#[component]
pub fn AssistantButtons() -> impl IntoView {
    let panel = RwSignal::new(Panel::Closed);
    let cancel_slot = StoredValue::new(None::<CancelHandle>);

    // Closing the chat stops a reply that is still streaming.
    let close = Callback::new(move |()| {
        cancel_slot.update_value(|slot| {
            if let Some(handle) = slot.take() {
                handle.cancel();
            }
        });
        panel.set(Panel::Closed);
    });
    let toggle = move |target: Panel| {
        if panel.get_untracked() == target {
            close.run(());
        } else {
            if panel.get_untracked() == Panel::Chat {
                close.run(());
            }
            panel.set(target);
        }
    };

    view! {
        <Show when=move || panel.get() != Panel::Closed>
            <div class="assistant-backdrop" on:click=move |_| close.run(())></div>
        </Show>
        <Show when=move || panel.get() == Panel::Chat>
            <ChatModal on_close=close cancel_slot/>
        </Show>
        <Show when=move || panel.get() == Panel::Voice>
            <VoiceModal on_close=close/>
        </Show>
        <div class="assistant-buttons">
            <button
                class="assistant-buttons__btn"
                class:is-active=move || panel.get() == Panel::Voice
                aria-label="Voice Assistant"
                on:click=move |_| toggle(Panel::Voice)
            >
                "🎤"
            </button>
            <button
                class="assistant-buttons__btn assistant-buttons__btn--primary"
                class:is-active=move || panel.get() == Panel::Chat
                aria-label="Chat Assistant"
                on:click=move |_| toggle(Panel::Chat)
            >
                "💬"
            </button>
        </div>
    }
}
