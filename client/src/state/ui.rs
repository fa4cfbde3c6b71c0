//! Local UI overlay state (search panel, quick-view modal).
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns out of domain state (`cart`, `chat`)
//! so overlays can evolve independently of what the shopper is buying.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use crate::catalog::Product;

/// Search and quick-view overlay state.
///
/// Provided once from `App` as `RwSignal<UiState>`.
#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub is_search_open: bool,
    /// Raw search input. Filtering happens in the search overlay.
    pub search_query: String,
    pub is_quick_view_open: bool,
    /// Product being previewed, borrowed from the static catalog.
    pub quick_view_product: Option<&'static Product>,
}

impl UiState {
    pub fn open_search(&mut self) {
        self.is_search_open = true;
    }

    /// Close the search panel. Closing always clears the query.
    pub fn close_search(&mut self) {
        self.is_search_open = false;
        self.search_query.clear();
    }

    /// Flip search visibility. The query survives a toggle.
    pub fn toggle_search(&mut self) {
        self.is_search_open = !self.is_search_open;
    }

    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
    }

    pub fn open_quick_view(&mut self, product: &'static Product) {
        self.is_quick_view_open = true;
        self.quick_view_product = Some(product);
    }

    pub fn close_quick_view(&mut self) {
        self.is_quick_view_open = false;
        self.quick_view_product = None;
    }
}
