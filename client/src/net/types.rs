//! Shared wire DTOs for the client/server boundary.
//!
//! DESIGN
//! ======
//! The server links this crate with the `ssr` feature and deserializes the
//! same types, so the chat and voice payload schema lives in one place.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

use crate::state::chat::ChatRole;

/// One message in the chat request body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WireMessage {
    pub role: ChatRole,
    pub content: String,
}

/// Body of `POST /api/chat`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub messages: Vec<WireMessage>,
}

/// Body returned by the voice token endpoint.
///
/// Exactly one of the fields is set: `signed_url` on success, `error` otherwise.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoiceTokenResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signed_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl VoiceTokenResponse {
    #[must_use]
    pub fn signed(url: impl Into<String>) -> Self {
        Self { signed_url: Some(url.into()), error: None }
    }

    #[must_use]
    pub fn failed(message: impl Into<String>) -> Self {
        Self { signed_url: None, error: Some(message.into()) }
    }
}
