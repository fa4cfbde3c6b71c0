//! Streaming chat client for `POST /api/chat`.
//!
//! Client-side (hydrate): `gloo-net` sends the request and the response body
//! is read through a `ReadableStreamDefaultReader`, one chunk at a time, into
//! a [`ChatStreamAssembler`]. Server-side (SSR): the request is never made.
//!
//! CANCELLATION
//! ============
//! Each turn owns a [`CancelHandle`]. Firing it makes the read loop cancel the
//! body reader and return [`StreamEnd::Cancelled`]; dropping it without firing
//! leaves the stream running to completion.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use leptos::prelude::*;

#[cfg(any(test, feature = "hydrate"))]
use super::types::ChatRequest;
use crate::config::ClientConfig;
use crate::state::chat::ChatState;

/// Failures that replace the reply with the fixed apology.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChatStreamError {
    #[error("chat request failed: {0}")]
    Request(String),
    #[error("chat backend returned status {0}")]
    Status(u16),
    #[error("chat response has no body")]
    MissingBody,
    #[error("chat stream read failed: {0}")]
    Read(String),
    #[error("chat is only available in the browser")]
    Unavailable,
}

/// How a stream that did not fail came to an end.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StreamEnd {
    /// The transport reported end of body.
    Completed,
    /// The shopper closed the chat while the reply was streaming.
    Cancelled,
}

/// Sender half of a turn's cancel signal.
pub struct CancelHandle {
    #[cfg(feature = "hydrate")]
    sender: futures::channel::oneshot::Sender<()>,
}

impl CancelHandle {
    /// Ask the read loop to stop. No-op once the stream is over.
    pub fn cancel(self) {
        #[cfg(feature = "hydrate")]
        {
            let _ = self.sender.send(());
        }
    }
}

/// Receiver half of a turn's cancel signal.
pub struct CancelSignal {
    #[cfg(feature = "hydrate")]
    receiver: futures::channel::oneshot::Receiver<()>,
}

/// Create a linked cancel handle and signal for one turn.
#[must_use]
pub fn cancel_pair() -> (CancelHandle, CancelSignal) {
    #[cfg(feature = "hydrate")]
    {
        let (sender, receiver) = futures::channel::oneshot::channel();
        (CancelHandle { sender }, CancelSignal { receiver })
    }
    #[cfg(not(feature = "hydrate"))]
    {
        (CancelHandle {}, CancelSignal {})
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn request_body(chat: &ChatState) -> ChatRequest {
    ChatRequest { messages: chat.request_history() }
}

/// Send the conversation in `chat` and stream the reply into it.
///
/// The in-flight assistant message is updated as fragments arrive. The caller
/// closes the turn with [`ChatState::finish_turn`].
///
/// # Errors
///
/// Returns [`ChatStreamError`] when the request cannot be sent, the backend
/// answers with a non-success status or without a body, or a read fails.
pub async fn stream_reply(
    config: ClientConfig,
    chat: RwSignal<ChatState>,
    cancel: CancelSignal,
) -> Result<StreamEnd, ChatStreamError> {
    #[cfg(feature = "hydrate")]
    {
        use futures::{FutureExt, pin_mut, select};
        use wasm_bindgen::JsCast;
        use wasm_bindgen_futures::JsFuture;

        use super::chat_stream::ChatStreamAssembler;

        let body = chat.with_untracked(request_body);
        let resp = gloo_net::http::Request::post(config.chat_url)
            .header("Authorization", &config.bearer())
            .json(&body)
            .map_err(|e| ChatStreamError::Request(e.to_string()))?
            .send()
            .await
            .map_err(|e| ChatStreamError::Request(e.to_string()))?;
        if !resp.ok() {
            return Err(ChatStreamError::Status(resp.status()));
        }
        let stream = resp.body().ok_or(ChatStreamError::MissingBody)?;
        let reader: web_sys::ReadableStreamDefaultReader = stream
            .get_reader()
            .dyn_into()
            .map_err(|_| ChatStreamError::MissingBody)?;

        let mut assembler = ChatStreamAssembler::new();
        let mut cancel = cancel.receiver.fuse();
        loop {
            let read = JsFuture::from(reader.read()).fuse();
            pin_mut!(read);
            let result = loop {
                select! {
                    signal = cancel => {
                        // A dropped handle is not a cancel request.
                        if signal.is_ok() {
                            let _ = reader.cancel();
                            let text = assembler.finish();
                            leptos::logging::log!("chat stream cancelled after {} chars", text.len());
                            return Ok(StreamEnd::Cancelled);
                        }
                    },
                    result = read => break result,
                }
            };
            let chunk = result.map_err(|e| ChatStreamError::Read(format!("{e:?}")))?;
            match read_chunk(&chunk) {
                ReadChunk::Done => break,
                ReadChunk::Bytes(bytes) => chat.update(|c| {
                    assembler.push_chunk(&bytes, c);
                }),
            }
        }
        assembler.finish();
        Ok(StreamEnd::Completed)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, chat, cancel);
        Err(ChatStreamError::Unavailable)
    }
}

#[cfg(feature = "hydrate")]
enum ReadChunk {
    Done,
    Bytes(Vec<u8>),
}

/// Unpack a `ReadableStreamDefaultReader.read()` result.
#[cfg(feature = "hydrate")]
fn read_chunk(result: &wasm_bindgen::JsValue) -> ReadChunk {
    let done = js_sys::Reflect::get(result, &"done".into())
        .ok()
        .and_then(|v| v.as_bool())
        .unwrap_or(true);
    if done {
        return ReadChunk::Done;
    }
    match js_sys::Reflect::get(result, &"value".into()) {
        Ok(value) if !value.is_undefined() => ReadChunk::Bytes(js_sys::Uint8Array::new(&value).to_vec()),
        _ => ReadChunk::Bytes(Vec::new()),
    }
}

/// Run one chat turn end to end: record the input, stream the reply, and
/// close the turn with the apology on failure.
///
/// Returns `false` without doing anything when the input is blank or a reply
/// is already loading.
pub fn start_turn(
    config: ClientConfig,
    chat: RwSignal<ChatState>,
    input: &str,
    cancel: CancelSignal,
) -> bool {
    let mut started = false;
    chat.update(|c| started = c.begin_turn(input).is_some());
    if !started {
        return false;
    }
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let outcome = stream_reply(config, chat, cancel).await;
        if let Err(err) = &outcome {
            leptos::logging::warn!("chat turn failed: {err}");
        }
        chat.update(|c| c.finish_turn(outcome.is_err()));
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, cancel);
        chat.update(|c| c.finish_turn(true));
    }
    true
}
