//! Streaming client for an OpenAI-compatible `chat/completions` endpoint.
//!
//! The assistant proxy does not interpret the reply: it opens the upstream
//! stream, checks the status, and hands the response back so the route can
//! pipe its bytes to the browser unchanged.

use std::time::Duration;

use client::net::types::WireMessage;

use super::config::LlmConfig;
use super::types::{CcMessage, CcStreamRequest, LlmError};

pub struct OpenAiClient {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
    model: String,
}

impl OpenAiClient {
    /// # Errors
    ///
    /// Returns [`LlmError::HttpClientBuild`] if the HTTP client cannot be built.
    pub fn new(config: LlmConfig) -> Result<Self, LlmError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeouts.request_secs))
            .connect_timeout(Duration::from_secs(config.timeouts.connect_secs))
            .build()
            .map_err(|e| LlmError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, api_key: config.api_key, base_url: config.openai_base_url, model: config.model })
    }

    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Start a streamed completion for `messages`, prefixed with `system`.
    ///
    /// # Errors
    ///
    /// Returns [`LlmError::ApiRequest`] if the request cannot be sent and
    /// [`LlmError::ApiResponse`] for a non-success status.
    pub async fn stream_chat(&self, system: &str, messages: &[WireMessage]) -> Result<reqwest::Response, LlmError> {
        let body = CcStreamRequest { model: &self.model, stream: true, messages: build_messages(system, messages) };
        let url = format!("{}/chat/completions", self.base_url);
        let response = self
            .http
            .post(url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| LlmError::ApiRequest(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(LlmError::ApiResponse { status: status.as_u16(), body });
        }
        Ok(response)
    }
}

pub(crate) fn build_messages<'a>(system: &'a str, messages: &'a [WireMessage]) -> Vec<CcMessage<'a>> {
    let mut out = Vec::with_capacity(messages.len() + 1);
    if !system.trim().is_empty() {
        out.push(CcMessage { role: "system", content: system });
    }
    out.extend(messages.iter().map(CcMessage::from));
    out
}

#[cfg(test)]
#[path = "openai_test.rs"]
mod tests;
