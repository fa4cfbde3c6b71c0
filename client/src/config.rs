//! Build-time client configuration.
//!
//! Endpoints and the publishable key are baked into the bundle through
//! `option_env!` so the hydrate build and the SSR build agree without a
//! runtime config fetch.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_CHAT_URL: &str = "/api/chat";
pub const DEFAULT_VOICE_TOKEN_URL: &str = "/api/voice/token";

/// Endpoints and credentials the browser uses to reach the backend.
///
/// Provided once from `App` via `provide_context`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    pub chat_url: &'static str,
    pub voice_token_url: &'static str,
    pub publishable_key: &'static str,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::from_build_env()
    }
}

impl ClientConfig {
    /// Resolve from `STOREFRONT_CHAT_URL`, `STOREFRONT_VOICE_TOKEN_URL` and
    /// `STOREFRONT_PUBLISHABLE_KEY` as seen by the compiler.
    #[must_use]
    pub fn from_build_env() -> Self {
        Self::resolve(
            option_env!("STOREFRONT_CHAT_URL"),
            option_env!("STOREFRONT_VOICE_TOKEN_URL"),
            option_env!("STOREFRONT_PUBLISHABLE_KEY"),
        )
    }

    fn resolve(
        chat_url: Option<&'static str>,
        voice_token_url: Option<&'static str>,
        publishable_key: Option<&'static str>,
    ) -> Self {
        Self {
            chat_url: non_empty(chat_url).unwrap_or(DEFAULT_CHAT_URL),
            voice_token_url: non_empty(voice_token_url).unwrap_or(DEFAULT_VOICE_TOKEN_URL),
            publishable_key: publishable_key.map_or("", str::trim),
        }
    }

    /// Value for the `Authorization` header of chat requests.
    #[must_use]
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.publishable_key)
    }
}

fn non_empty(value: Option<&'static str>) -> Option<&'static str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
