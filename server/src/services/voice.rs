//! ElevenLabs conversation token service.
//!
//! Exchanges the server-held API key for a short-lived signed WebSocket URL
//! that the browser can open directly. The key itself never leaves the
//! server.

use std::time::Duration;

use serde::Deserialize;

use crate::config::{ConfigError, non_empty, required};

pub const DEFAULT_ELEVENLABS_BASE_URL: &str = "https://api.elevenlabs.io";
pub(crate) const SIGNED_URL_PATH: &str = "/v1/convai/conversation/get-signed-url";
const REQUEST_TIMEOUT_SECS: u64 = 15;

#[derive(Debug, thiserror::Error)]
pub enum VoiceError {
    #[error("voice integration not configured")]
    Unconfigured,

    #[error("voice upstream request failed: {0}")]
    Request(String),

    #[error("voice upstream returned status {status}")]
    Status { status: u16, body: String },

    #[error("voice upstream response missing signed_url")]
    MissingSignedUrl,

    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoiceConfig {
    pub api_key: String,
    pub agent_id: String,
    pub base_url: String,
}

impl VoiceConfig {
    /// Read `ELEVENLABS_API_KEY`, `ELEVENLABS_AGENT_ID` and the optional
    /// `ELEVENLABS_BASE_URL`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingKey`] if either credential is missing.
    pub fn from_lookup(lookup: &impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let api_key = required(lookup, "ELEVENLABS_API_KEY")?;
        let agent_id = required(lookup, "ELEVENLABS_AGENT_ID")?;
        let base_url = non_empty(lookup, "ELEVENLABS_BASE_URL")
            .unwrap_or_else(|| DEFAULT_ELEVENLABS_BASE_URL.to_owned())
            .trim_end_matches('/')
            .to_owned();
        Ok(Self { api_key, agent_id, base_url })
    }
}

#[derive(Deserialize)]
struct SignedUrlBody {
    signed_url: Option<String>,
}

pub struct VoiceClient {
    http: reqwest::Client,
    config: VoiceConfig,
}

impl VoiceClient {
    /// # Errors
    ///
    /// Returns [`VoiceError::HttpClientBuild`] if the HTTP client cannot be built.
    pub fn new(config: VoiceConfig) -> Result<Self, VoiceError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| VoiceError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, config })
    }

    /// Ask ElevenLabs for a signed conversation URL for the configured agent.
    ///
    /// # Errors
    ///
    /// Returns [`VoiceError`] when the request fails, the status is not a
    /// success, or the body carries no `signed_url`.
    pub async fn signed_url(&self) -> Result<String, VoiceError> {
        let url = format!("{}{SIGNED_URL_PATH}", self.config.base_url);
        let response = self
            .http
            .get(url)
            .query(&[("agent_id", self.config.agent_id.as_str())])
            .header("xi-api-key", &self.config.api_key)
            .send()
            .await
            .map_err(|e| VoiceError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(VoiceError::Status { status: status.as_u16(), body });
        }
        let body: SignedUrlBody = response
            .json()
            .await
            .map_err(|e| VoiceError::Request(e.to_string()))?;
        body.signed_url
            .filter(|u| !u.is_empty())
            .ok_or(VoiceError::MissingSignedUrl)
    }
}

#[cfg(test)]
#[path = "voice_test.rs"]
mod voice_test;
