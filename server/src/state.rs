//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. Each
//! optional integration is `None` when it is not configured, and the matching
//! route answers 503.

use std::sync::Arc;

use crate::config::ServerConfig;
use crate::llm::OpenAiClient;
use crate::services::voice::VoiceClient;

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum; all inner fields are Arc-wrapped.
#[derive(Clone, Default)]
pub struct AppState {
    pub llm: Option<Arc<OpenAiClient>>,
    pub voice: Option<Arc<VoiceClient>>,
    pub publishable_key: Option<Arc<str>>,
    /// System prompt sent ahead of every chat; built once at start-up.
    pub system_prompt: Arc<str>,
}

impl AppState {
    /// Build clients for every configured integration. A client that fails to
    /// build is logged and left disabled.
    #[must_use]
    pub fn from_config(config: ServerConfig) -> Self {
        let llm = config.llm.and_then(|cfg| match OpenAiClient::new(cfg) {
            Ok(client) => {
                tracing::info!(model = client.model(), "LLM client initialized");
                Some(Arc::new(client))
            }
            Err(e) => {
                tracing::warn!(error = %e, "LLM client build failed; chat disabled");
                None
            }
        });
        let voice = config.voice.and_then(|cfg| match VoiceClient::new(cfg) {
            Ok(client) => {
                tracing::info!("voice token client initialized");
                Some(Arc::new(client))
            }
            Err(e) => {
                tracing::warn!(error = %e, "voice client build failed; voice disabled");
                None
            }
        });
        Self {
            llm,
            voice,
            publishable_key: config.publishable_key.map(Arc::from),
            system_prompt: Arc::from(crate::llm::prompt::system_prompt()),
        }
    }
}
