//! Product page with size/color selection and a wishlist toggle.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;

use crate::catalog::{Product, find_product};
use crate::components::navbar::Navbar;
use crate::components::selection_picker::{ColorPicker, ProductSelection, SizePicker};
use crate::pages::not_found::NotFoundPage;
use crate::state::cart::CartState;

#[component]
pub fn ProductDetailPage() -> impl IntoView {
    let params = use_params_map();
    let product = move || params.with(|p| p.get("id").and_then(|id| find_product(&id)));

    view! {
        {move || match product() {
            Some(product) => view! { <ProductDetail product/> }.into_any(),
            None => view! { <NotFoundPage/> }.into_any(),
        }}
    }
}

#[component]
fn ProductDetail(product: &'static Product) -> impl IntoView {
    let cart = expect_context::<RwSignal<CartState>>();
    let selection = RwSignal::new(ProductSelection::default());
    let wishlisted = RwSignal::new(false);

    let add = move |_| {
        if let Some((size, color)) = selection.with(|s| s.ready(product)) {
            cart.update(|c| c.add_item(product, size, color));
        }
    };

    view! {
        <Navbar/>
        <main class="product-detail">
            <A href="/" attr:class="product-detail__back">"← Back to products"</A>
            <div class="product-detail__layout">
                <div class="product-detail__media">
                    <img src=product.image alt=product.name/>
                </div>
                <div class="product-detail__info">
                    <p class="product-detail__category">{product.category}</p>
                    <h1>{product.name}</h1>
                    <p class="product-detail__price">{product.price.to_string()}</p>
                    <p class="product-detail__description">{product.description}</p>
                    <ColorPicker product selection/>
                    <SizePicker product selection/>
                    <div class="product-detail__actions">
                        <button
                            class="btn btn--primary"
                            disabled=move || selection.with(|s| s.ready(product).is_none())
                            on:click=add
                        >
                            {move || selection.with(ProductSelection::prompt)}
                        </button>
                        <button
                            class="btn product-detail__wishlist"
                            class:is-selected=move || wishlisted.get()
                            aria-label="Wishlist"
                            on:click=move |_| wishlisted.update(|w| *w = !*w)
                        >
                            {move || if wishlisted.get() { "♥" } else { "♡" }}
                        </button>
                    </div>
                    <ul class="product-detail__facts">
                        <li>"Free shipping on all orders"</li>
                        <li>"Shown: " {product.colors.first().copied().unwrap_or("Multi-color")}</li>
                        <li>"Style: " {product.category}</li>
                    </ul>
                </div>
            </div>
        </main>
    }
}
