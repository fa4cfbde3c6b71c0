//! Size and color pickers shared by the quick-view modal and product page.

#[cfg(test)]
#[path = "selection_picker_test.rs"]
mod selection_picker_test;

use leptos::prelude::*;

use crate::catalog::{Product, ShoeSize};
use crate::util::color::swatch_needs_outline;

/// The shopper's in-progress choice for one product.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ProductSelection {
    pub size: Option<ShoeSize>,
    pub color: Option<&'static str>,
}

impl ProductSelection {
    /// Both parts chosen and offered by `product`.
    pub fn ready(&self, product: &Product) -> Option<(ShoeSize, &'static str)> {
        let size = self.size.filter(|s| product.sizes.contains(s))?;
        let color = self.color.filter(|c| product.colors.contains(c))?;
        Some((size, color))
    }

    /// Label for the add-to-cart button.
    pub fn prompt(&self) -> &'static str {
        match (self.size, self.color) {
            (None, None) => "Select Size & Color",
            (None, Some(_)) => "Select a Size",
            (Some(_), None) => "Select a Color",
            (Some(_), Some(_)) => "Add to Cart",
        }
    }
}

#[component]
pub fn ColorPicker(product: &'static Product, selection: RwSignal<ProductSelection>) -> impl IntoView {
    view! {
        <div class="picker">
            <p class="picker__label">"Color"</p>
            <div class="picker__swatches">
                {product
                    .colors
                    .iter()
                    .map(|&color| {
                        let chosen = move || selection.with(|s| s.color == Some(color));
                        view! {
                            <button
                                class="swatch"
                                class:is-light=swatch_needs_outline(color)
                                class:is-selected=chosen
                                style:background-color=color
                                aria-label=color
                                on:click=move |_| selection.update(|s| s.color = Some(color))
                            ></button>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
pub fn SizePicker(product: &'static Product, selection: RwSignal<ProductSelection>) -> impl IntoView {
    view! {
        <div class="picker">
            <p class="picker__label">"Size (US)"</p>
            <div class="picker__sizes">
                {product
                    .sizes
                    .iter()
                    .map(|&size| {
                        let chosen = move || selection.with(|s| s.size == Some(size));
                        view! {
                            <button
                                class="picker__size"
                                class:is-selected=chosen
                                on:click=move |_| selection.update(|s| s.size = Some(size))
                            >
                                {size.to_string()}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
