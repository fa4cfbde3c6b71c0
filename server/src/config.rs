//! Server configuration parsed from environment variables.
//!
//! DESIGN
//! ======
//! Only the listen port is required to be valid. The chat proxy and the voice
//! token endpoint are optional integrations: when their settings are missing
//! or malformed they are switched off with a warning and their routes answer
//! 503, so a bare checkout still serves the storefront.
//!
//! Parsing goes through a lookup function so tests never touch the process
//! environment.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use crate::llm::config::LlmConfig;
use crate::services::voice::VoiceConfig;

pub const DEFAULT_PORT: u16 = 3000;
pub const PUBLISHABLE_KEY_ENV: &str = "STOREFRONT_PUBLISHABLE_KEY";

/// Errors produced while reading configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid PORT: {0}")]
    InvalidPort(String),

    #[error("invalid number in {var}: {value}")]
    InvalidNumber { var: String, value: String },

    #[error("missing required env var {var}")]
    MissingKey { var: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    /// When set, chat requests must present exactly this bearer token.
    pub publishable_key: Option<String>,
    pub llm: Option<LlmConfig>,
    pub voice: Option<VoiceConfig>,
}

impl ServerConfig {
    /// Read `.env` (if present) and then the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidPort`] if `PORT` is set but not a port.
    pub fn from_env() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidPort`] if `PORT` is set but not a port.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = match non_empty(&lookup, "PORT") {
            Some(raw) => raw.parse::<u16>().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };
        let publishable_key = non_empty(&lookup, PUBLISHABLE_KEY_ENV);

        let llm = match LlmConfig::from_lookup(&lookup) {
            Ok(cfg) => Some(cfg),
            Err(e) => {
                tracing::warn!(error = %e, "chat proxy not configured; /api/chat disabled");
                None
            }
        };
        let voice = match VoiceConfig::from_lookup(&lookup) {
            Ok(cfg) => Some(cfg),
            Err(e) => {
                tracing::warn!(error = %e, "voice not configured; /api/voice/token disabled");
                None
            }
        };

        Ok(Self { port, publishable_key, llm, voice })
    }
}

/// Trimmed value of `key`, treating blank values as unset.
pub(crate) fn non_empty(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<String> {
    lookup(key)
        .map(|v| v.trim().to_owned())
        .filter(|v| !v.is_empty())
}

/// Parse an optional numeric setting, falling back to `default` when unset.
pub(crate) fn parse_u64(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: u64,
) -> Result<u64, ConfigError> {
    match non_empty(lookup, key) {
        Some(raw) => raw
            .parse::<u64>()
            .map_err(|_| ConfigError::InvalidNumber { var: key.to_owned(), value: raw }),
        None => Ok(default),
    }
}

/// A required setting.
pub(crate) fn required(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Result<String, ConfigError> {
    non_empty(lookup, key).ok_or_else(|| ConfigError::MissingKey { var: key.to_owned() })
}
