//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render storefront chrome and overlays while reading/writing
//! shared stores from Leptos context providers.

pub mod assistant_buttons;
pub mod cart_drawer;
pub mod chat_modal;
pub mod navbar;
pub mod product_card;
pub mod product_grid;
pub mod quick_view_modal;
pub mod search_overlay;
pub mod selection_picker;
pub mod voice_modal;
