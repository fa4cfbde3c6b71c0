//! REST helpers for the voice assistant.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning an error since the token is only
//! meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get a typed `Result` so the voice modal can show "unavailable"
//! instead of failing hydration.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::VoiceTokenResponse;

/// Why a voice session could not be prepared.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VoiceTokenError {
    #[error("voice token request failed: {0}")]
    Request(String),
    #[error("voice assistant is not configured")]
    Unconfigured,
    #[error("{0}")]
    Upstream(String),
    #[error("voice token response was malformed")]
    Malformed,
    #[error("voice is only available in the browser")]
    Unavailable,
}

/// Turn a decoded token body and its HTTP status into a signed URL.
#[cfg(any(test, feature = "hydrate"))]
fn interpret_token_response(status: u16, body: Option<VoiceTokenResponse>) -> Result<String, VoiceTokenError> {
    if status == 503 {
        return Err(VoiceTokenError::Unconfigured);
    }
    let body = body.ok_or(VoiceTokenError::Malformed)?;
    if let Some(message) = body.error {
        return Err(VoiceTokenError::Upstream(message));
    }
    match body.signed_url {
        Some(url) if (200..300).contains(&status) && !url.is_empty() => Ok(url),
        _ if (200..300).contains(&status) => Err(VoiceTokenError::Malformed),
        _ => Err(VoiceTokenError::Upstream(format!("voice token request failed: {status}"))),
    }
}

/// Fetch a signed conversation URL via `POST {voice_token_url}`.
///
/// # Errors
///
/// Returns [`VoiceTokenError`] when the request fails, the backend reports it
/// is unconfigured, or the body carries an error or no URL.
pub async fn fetch_voice_token(url: &str) -> Result<String, VoiceTokenError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(url)
            .send()
            .await
            .map_err(|e| VoiceTokenError::Request(e.to_string()))?;
        let status = resp.status();
        let body = resp.json::<VoiceTokenResponse>().await.ok();
        interpret_token_response(status, body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = url;
        Err(VoiceTokenError::Unavailable)
    }
}
