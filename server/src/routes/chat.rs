//! `POST /api/chat`: authenticated proxy to the upstream chat model.
//!
//! The upstream `text/event-stream` body is piped to the caller byte for byte;
//! the browser decodes the `data:` events itself.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use axum::body::Body;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::header::{AUTHORIZATION, CACHE_CONTROL, CONTENT_TYPE};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Json, Response};
use client::net::types::ChatRequest;

use super::error_response;
use crate::state::AppState;

/// Why a bearer check failed. Logged, never returned to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum BearerRejection {
    Missing,
    Malformed,
    Mismatch,
}

/// Require `Authorization: Bearer <token>`; when `expected` is set the token
/// must equal it.
pub(crate) fn check_bearer(headers: &HeaderMap, expected: Option<&str>) -> Result<(), BearerRejection> {
    let raw = headers
        .get(AUTHORIZATION)
        .ok_or(BearerRejection::Missing)?
        .to_str()
        .map_err(|_| BearerRejection::Malformed)?;
    let token = raw
        .strip_prefix("Bearer ")
        .ok_or(BearerRejection::Malformed)?
        .trim();
    match expected {
        Some(key) if token != key => Err(BearerRejection::Mismatch),
        _ => Ok(()),
    }
}

pub async fn chat(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Result<Json<ChatRequest>, JsonRejection>,
) -> Response {
    if let Err(reason) = check_bearer(&headers, state.publishable_key.as_deref()) {
        tracing::info!(?reason, "chat request rejected");
        return error_response(StatusCode::UNAUTHORIZED, "Unauthorized");
    }
    let request = match body {
        Ok(Json(request)) => request,
        Err(e) => {
            tracing::info!(error = %e, "chat request body rejected");
            return error_response(StatusCode::BAD_REQUEST, "Invalid request body");
        }
    };
    if request.messages.is_empty() {
        return error_response(StatusCode::BAD_REQUEST, "messages must not be empty");
    }
    let Some(llm) = state.llm.as_ref() else {
        return error_response(StatusCode::SERVICE_UNAVAILABLE, "Chat assistant not configured");
    };

    match llm.stream_chat(&state.system_prompt, &request.messages).await {
        Ok(upstream) => {
            tracing::info!(messages = request.messages.len(), model = llm.model(), "chat stream opened");
            (
                [(CONTENT_TYPE, "text/event-stream"), (CACHE_CONTROL, "no-cache")],
                Body::from_stream(upstream.bytes_stream()),
            )
                .into_response()
        }
        Err(e) => {
            tracing::warn!(error = %e, "chat upstream failed");
            error_response(StatusCode::BAD_GATEWAY, "Chat upstream failed")
        }
    }
}
