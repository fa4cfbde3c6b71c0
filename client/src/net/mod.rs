//! Networking modules for the chat and voice backends.
//!
//! SYSTEM CONTEXT
//! ==============
//! `chat` drives the streaming chat request, `chat_stream` turns its raw
//! bytes into conversation updates, `api` handles the voice token call, and
//! `types` defines the wire schema shared with the server.

pub mod api;
pub mod chat;
pub mod chat_stream;
pub mod types;
