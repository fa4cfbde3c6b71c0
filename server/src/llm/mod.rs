//! LLM: upstream chat-completions access for the shopping assistant.
//!
//! DESIGN
//! ======
//! Configuration comes from environment variables. The client only opens the
//! streamed completion; interpreting the `data:` events is left to the
//! browser.

pub mod config;
pub mod openai;
pub mod prompt;
pub mod types;

pub use openai::OpenAiClient;
pub use types::LlmError;
