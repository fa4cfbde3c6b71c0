//! Voice assistant panel: fetches a signed session URL and shows its status.

use leptos::prelude::*;

use crate::config::ClientConfig;
use crate::state::voice::{VoiceState, VoiceStatus};

#[component]
pub fn VoiceModal(on_close: Callback<()>) -> impl IntoView {
    let voice = expect_context::<RwSignal<VoiceState>>();
    let config = expect_context::<ClientConfig>();

    let on_mic = move |_| {
        if matches!(voice.with_untracked(|v| v.status.clone()), VoiceStatus::Ready { .. }) {
            voice.update(VoiceState::reset);
            return;
        }
        let mut ticket = None;
        voice.update(|v| ticket = v.begin_request());
        let Some(ticket) = ticket else {
            return;
        };

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = crate::net::api::fetch_voice_token(config.voice_token_url)
                .await
                .map_err(|e| e.to_string());
            if let Err(message) = &result {
                leptos::logging::warn!("voice token unavailable: {message}");
            }
            voice.update(|v| {
                v.resolve(ticket, result);
            });
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = config;
            voice.update(|v| {
                v.resolve(ticket, Err("Voice is only available in the browser".to_owned()));
            });
        }
    };

    let close = move |_| on_close.run(());
    // However the panel goes away, a pending token must not revive it.
    on_cleanup(move || {
        voice.update_untracked(VoiceState::reset);
    });

    let listening = move || voice.with(|v| matches!(v.status, VoiceStatus::Ready { .. }));
    let status_class = move || match voice.with(|v| v.status.clone()) {
        VoiceStatus::Idle => "voice-modal__status",
        VoiceStatus::Requesting => "voice-modal__status is-pending",
        VoiceStatus::Ready { .. } => "voice-modal__status is-ready",
        VoiceStatus::Unavailable { .. } => "voice-modal__status is-error",
    };

    view! {
        <div class="voice-modal">
            <button class="voice-modal__close" aria-label="Close voice assistant" on:click=close>"✕"</button>
            <h3>"Voice Assistant"</h3>
            <p class=status_class>{move || voice.with(|v| v.caption().to_owned())}</p>
            <div class="voice-modal__visualizer" class:is-listening=listening>
                <button
                    class="voice-modal__mic"
                    class:is-listening=listening
                    aria-label=move || if listening() { "Stop" } else { "Start speaking" }
                    disabled=move || voice.with(VoiceState::is_requesting)
                    on:click=on_mic
                >
                    {move || if listening() { "■" } else { "🎤" }}
                </button>
            </div>
            <p class="voice-modal__footnote">"Powered by ElevenLabs Conversational AI"</p>
        </div>
    }
}
