//! Category-filtered product grid on the home page.

use leptos::prelude::*;

use crate::catalog::{ALL_CATEGORY, CATEGORIES, filter_by_category};
use crate::components::product_card::ProductCard;

#[component]
pub fn ProductGrid() -> impl IntoView {
    let category = RwSignal::new(ALL_CATEGORY);
    let visible = move || filter_by_category(category.get());

    view! {
        <section id="products" class="product-grid">
            <div class="product-grid__header">
                <h2>"Featured Collection"</h2>
                <p>
                    "Discover our latest drops and timeless classics, designed for athletes and style seekers alike."
                </p>
            </div>
            <div class="product-grid__filters" role="tablist">
                {CATEGORIES
                    .iter()
                    .map(|&name| {
                        view! {
                            <button
                                class="chip"
                                class:is-selected=move || category.get() == name
                                on:click=move |_| category.set(name)
                            >
                                {name}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
            <div class="product-grid__items">
                <For
                    each=visible
                    key=|product| product.id
                    children=|product| view! { <ProductCard product/> }
                />
            </div>
            <Show when=move || visible().is_empty()>
                <p class="product-grid__empty">"No products in this category yet."</p>
            </Show>
        </section>
    }
}
