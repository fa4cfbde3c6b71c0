//! `POST|GET /api/voice/token`: signed URL for a voice conversation.

#[cfg(test)]
#[path = "voice_test.rs"]
mod voice_test;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use client::net::types::VoiceTokenResponse;

use crate::state::AppState;

pub const NOT_CONFIGURED: &str = "ElevenLabs integration not configured";
pub const TOKEN_FAILED: &str = "Failed to get conversation token";

pub async fn token(State(state): State<AppState>) -> Response {
    let Some(voice) = state.voice.as_ref() else {
        tracing::info!("voice token requested but voice is not configured");
        return (StatusCode::SERVICE_UNAVAILABLE, Json(VoiceTokenResponse::failed(NOT_CONFIGURED))).into_response();
    };
    match voice.signed_url().await {
        Ok(url) => {
            tracing::info!("voice signed url issued");
            Json(VoiceTokenResponse::signed(url)).into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "voice token request failed");
            (StatusCode::INTERNAL_SERVER_ERROR, Json(VoiceTokenResponse::failed(TOKEN_FAILED))).into_response()
        }
    }
}
