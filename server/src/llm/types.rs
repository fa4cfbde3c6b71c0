//! LLM wire types and errors.

use serde::Serialize;

use client::net::types::WireMessage;

// =============================================================================
// ERROR
// =============================================================================

/// Errors produced by LLM client operations.
#[derive(Debug, thiserror::Error)]
pub enum LlmError {
    /// The HTTP request to the LLM provider failed.
    #[error("API request failed: {0}")]
    ApiRequest(String),

    /// The LLM provider returned a non-success HTTP status.
    #[error("API response error: status {status}")]
    ApiResponse { status: u16, body: String },

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),
}

// =============================================================================
// CHAT COMPLETIONS
// =============================================================================

/// One entry of the upstream `messages` array. Unlike [`WireMessage`] this
/// also admits the `system` role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CcMessage<'a> {
    pub role: &'static str,
    pub content: &'a str,
}

impl<'a> From<&'a WireMessage> for CcMessage<'a> {
    fn from(m: &'a WireMessage) -> Self {
        let role = match m.role {
            client::state::chat::ChatRole::User => "user",
            client::state::chat::ChatRole::Assistant => "assistant",
        };
        Self { role, content: &m.content }
    }
}

/// Body of a streaming `POST {base}/chat/completions`.
#[derive(Debug, Serialize)]
pub struct CcStreamRequest<'a> {
    pub model: &'a str,
    pub stream: bool,
    pub messages: Vec<CcMessage<'a>>,
}

#[cfg(test)]
#[path = "types_test.rs"]
mod tests;
