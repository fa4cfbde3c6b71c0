//! Shared client state stores.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each store is a plain struct built once in `App` and provided through
//! Leptos context as an `RwSignal`. Methods hold the business rules so they
//! can be tested without a reactive runtime.

pub mod cart;
pub mod chat;
pub mod checkout;
pub mod ui;
pub mod voice;
