//! Incremental assembler for the chat backend's `data:` event stream.
//!
//! SYSTEM CONTEXT
//! ==============
//! The transport hands over byte chunks whose boundaries fall anywhere: in the
//! middle of a line, a JSON payload, or a multi-byte UTF-8 sequence. The
//! assembler decodes them with a streaming UTF-8 decoder, keeps the trailing
//! partial line pending, and turns each complete `data: {...}` line carrying
//! `choices[0].delta.content` into an update of the in-flight assistant
//! message.
//!
//! ERROR HANDLING
//! ==============
//! Unknown or comment lines are skipped. A `data:` line whose JSON does not
//! parse is pushed back and retried on the next chunk, at most
//! [`MAX_REBUFFER_ATTEMPTS`] times, then dropped with a warning.

#[cfg(test)]
#[path = "chat_stream_test.rs"]
mod chat_stream_test;

use encoding_rs::{CoderResult, Decoder, UTF_8};

use crate::state::chat::ChatState;

/// Prefix of a payload line.
pub const DATA_PREFIX: &str = "data: ";
/// Payload that marks the end of a batch.
pub const DONE_SENTINEL: &str = "[DONE]";
/// Consecutive parse failures tolerated for the line at the buffer front.
pub const MAX_REBUFFER_ATTEMPTS: u32 = 3;

/// What one chunk did.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ChunkSummary {
    /// Delta fragments applied to the conversation.
    pub fragments: usize,
    /// A `[DONE]` line ended this chunk's line loop.
    pub done: bool,
    /// A malformed line was pushed back to wait for more bytes.
    pub rebuffered: bool,
}

enum Line<'a> {
    Skip,
    Done,
    Fragment(String),
    Malformed(&'a str),
}

/// Streaming decoder state for one assistant reply.
pub struct ChatStreamAssembler {
    decoder: Decoder,
    pending: String,
    assistant_text: String,
    rebuffer_attempts: u32,
}

impl Default for ChatStreamAssembler {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatStreamAssembler {
    #[must_use]
    pub fn new() -> Self {
        Self {
            decoder: UTF_8.new_decoder(),
            pending: String::new(),
            assistant_text: String::new(),
            rebuffer_attempts: 0,
        }
    }

    /// Text accumulated from every fragment so far.
    #[must_use]
    pub fn assistant_text(&self) -> &str {
        &self.assistant_text
    }

    /// Decoded text still waiting for a newline (or a retry).
    #[must_use]
    pub fn pending(&self) -> &str {
        &self.pending
    }

    /// Feed one transport chunk and apply every complete line to `chat`.
    pub fn push_chunk(&mut self, chunk: &[u8], chat: &mut ChatState) -> ChunkSummary {
        self.decode(chunk);

        let mut summary = ChunkSummary::default();
        while let Some(newline) = self.pending.find('\n') {
            let raw: String = self.pending.drain(..=newline).collect();
            let line = raw[..raw.len() - 1]
                .strip_suffix('\r')
                .unwrap_or(&raw[..raw.len() - 1]);

            match classify(line) {
                Line::Skip => {}
                Line::Done => {
                    summary.done = true;
                    break;
                }
                Line::Fragment(fragment) => {
                    self.rebuffer_attempts = 0;
                    if fragment.is_empty() {
                        continue;
                    }
                    self.assistant_text.push_str(&fragment);
                    chat.apply_assistant_text(&self.assistant_text);
                    summary.fragments += 1;
                }
                Line::Malformed(line) => {
                    if self.rebuffer_attempts >= MAX_REBUFFER_ATTEMPTS {
                        leptos::logging::warn!(
                            "chat stream: dropping unparseable line after {} retries: {}",
                            self.rebuffer_attempts,
                            line
                        );
                        self.rebuffer_attempts = 0;
                        continue;
                    }
                    self.rebuffer_attempts += 1;
                    self.pending.insert(0, '\n');
                    self.pending.insert_str(0, line);
                    summary.rebuffered = true;
                    break;
                }
            }
        }
        summary
    }

    /// End of transport. Discards whatever partial data is left and returns
    /// the full assistant text.
    pub fn finish(mut self) -> String {
        let mut tail = String::with_capacity(16);
        let _ = self.decoder.decode_to_string(&[], &mut tail, true);
        self.pending.push_str(&tail);
        if !self.pending.trim().is_empty() {
            leptos::logging::log!("chat stream: discarding {} unterminated bytes", self.pending.len());
        }
        self.assistant_text
    }

    fn decode(&mut self, mut chunk: &[u8]) {
        loop {
            let needed = self
                .decoder
                .max_utf8_buffer_length(chunk.len())
                .unwrap_or(chunk.len() * 3 + 4);
            self.pending.reserve(needed);
            let (result, read, _) = self.decoder.decode_to_string(chunk, &mut self.pending, false);
            chunk = &chunk[read..];
            if matches!(result, CoderResult::InputEmpty) {
                break;
            }
        }
    }
}

fn classify(line: &str) -> Line<'_> {
    if line.trim().is_empty() || line.starts_with(':') {
        return Line::Skip;
    }
    let Some(payload) = line.strip_prefix(DATA_PREFIX) else {
        return Line::Skip;
    };
    let payload = payload.trim();
    if payload == DONE_SENTINEL {
        return Line::Done;
    }
    match serde_json::from_str::<serde_json::Value>(payload) {
        Ok(value) => Line::Fragment(delta_content(&value).unwrap_or_default().to_owned()),
        Err(_) => Line::Malformed(line),
    }
}

/// `choices[0].delta.content`, when present and a string.
pub fn delta_content(value: &serde_json::Value) -> Option<&str> {
    value
        .pointer("/choices/0/delta/content")
        .and_then(serde_json::Value::as_str)
}
