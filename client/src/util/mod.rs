//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pure formatting and parsing helpers kept out of components so they can be
//! tested natively.

pub mod color;
pub mod markdown;
pub mod money;
