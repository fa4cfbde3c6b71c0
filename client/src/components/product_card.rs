//! Product tile used in the home grid.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::catalog::Product;
use crate::state::ui::UiState;
use crate::util::color::swatch_needs_outline;

/// Swatches shown on a tile before the rest are hidden.
const TILE_SWATCHES: usize = 4;

#[component]
pub fn ProductCard(product: &'static Product) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let href = format!("/product/{}", product.id);

    view! {
        <article class="product-card">
            <A href=href.clone() attr:class="product-card__media">
                <img src=product.image alt=product.name loading="lazy"/>
            </A>
            <button
                class="product-card__quick-view"
                on:click=move |_| ui.update(|u| u.open_quick_view(product))
            >
                "Quick View"
            </button>
            <div class="product-card__body">
                <p class="product-card__category">{product.category}</p>
                <A href=href attr:class="product-card__name">{product.name}</A>
                <div class="product-card__footer">
                    <span class="product-card__price">{product.price.to_string()}</span>
                    <span class="product-card__swatches">
                        {product
                            .colors
                            .iter()
                            .take(TILE_SWATCHES)
                            .map(|&color| {
                                view! {
                                    <span
                                        class="swatch swatch--small"
                                        class:is-light=swatch_needs_outline(color)
                                        style:background-color=color
                                    ></span>
                                }
                            })
                            .collect_view()}
                    </span>
                </div>
            </div>
        </article>
    }
}
