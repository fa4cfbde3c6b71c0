//! Shopping cart line items and cart-drawer visibility.
//!
//! DESIGN
//! ======
//! Lines are keyed by (product id, size, color), not by product id alone, so
//! the same shoe in two sizes is two lines. Totals are always recomputed from
//! the lines; nothing derived is cached on the state.

#[cfg(test)]
#[path = "cart_test.rs"]
mod cart_test;

use crate::catalog::{Product, ShoeSize};
use crate::util::money::Money;

/// One cart line: a product snapshot plus the shopper's selection.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CartLineItem {
    pub product: Product,
    pub quantity: u32,
    pub selected_size: ShoeSize,
    pub selected_color: String,
}

impl CartLineItem {
    fn matches(&self, id: &str, size: ShoeSize, color: &str) -> bool {
        self.product.id == id && self.selected_size == size && self.selected_color == color
    }

    /// Price of this line (unit price times quantity).
    #[must_use]
    pub fn line_total(&self) -> Money {
        self.product.price.times(self.quantity)
    }
}

/// Cart contents and whether the cart drawer is open.
///
/// Provided once from `App` as `RwSignal<CartState>`.
#[derive(Clone, Debug, Default)]
pub struct CartState {
    pub items: Vec<CartLineItem>,
    pub is_open: bool,
}

impl CartState {
    /// Add one unit of `product` in the given selection and open the drawer.
    ///
    /// Size and color are trusted; the picker UI only offers valid ones.
    pub fn add_item(&mut self, product: &Product, size: ShoeSize, color: &str) {
        if let Some(line) = self
            .items
            .iter_mut()
            .find(|line| line.matches(product.id, size, color))
        {
            line.quantity = line.quantity.saturating_add(1);
        } else {
            self.items.push(CartLineItem {
                product: *product,
                quantity: 1,
                selected_size: size,
                selected_color: color.to_owned(),
            });
        }
        self.is_open = true;
    }

    /// Remove the matching line. Absent lines are ignored.
    pub fn remove_item(&mut self, id: &str, size: ShoeSize, color: &str) {
        self.items.retain(|line| !line.matches(id, size, color));
    }

    /// Set a line's quantity. Anything below 1 removes the line.
    pub fn update_quantity(&mut self, id: &str, size: ShoeSize, color: &str, quantity: i64) {
        if quantity < 1 {
            self.remove_item(id, size, color);
            return;
        }
        let quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
        if let Some(line) = self
            .items
            .iter_mut()
            .find(|line| line.matches(id, size, color))
        {
            line.quantity = quantity;
        }
    }

    /// Drop every line. Drawer visibility is left alone.
    pub fn clear_cart(&mut self) {
        self.items.clear();
    }

    pub fn toggle_cart(&mut self) {
        self.is_open = !self.is_open;
    }

    pub fn open_cart(&mut self) {
        self.is_open = true;
    }

    pub fn close_cart(&mut self) {
        self.is_open = false;
    }

    /// Sum of quantities across all lines.
    #[must_use]
    pub fn total_items(&self) -> u64 {
        self.items.iter().map(|line| u64::from(line.quantity)).sum()
    }

    /// Sum of price times quantity across all lines.
    #[must_use]
    pub fn total_price(&self) -> Money {
        self.items.iter().map(CartLineItem::line_total).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
