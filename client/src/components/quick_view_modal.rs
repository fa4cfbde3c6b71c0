//! Modal preview of one product with inline add-to-cart.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::catalog::Product;
use crate::components::selection_picker::{ColorPicker, ProductSelection, SizePicker};
use crate::state::{cart::CartState, ui::UiState};

#[component]
pub fn QuickViewModal() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    let product = move || ui.with(|u| u.quick_view_product.filter(|_| u.is_quick_view_open));

    view! {
        {move || product().map(|product| view! { <QuickViewDialog product/> })}
    }
}

#[component]
fn QuickViewDialog(product: &'static Product) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let cart = expect_context::<RwSignal<CartState>>();
    let selection = RwSignal::new(ProductSelection::default());

    let close = move |_| ui.update(UiState::close_quick_view);
    let add = move |_| {
        let Some((size, color)) = selection.with(|s| s.ready(product)) else {
            return;
        };
        cart.update(|c| c.add_item(product, size, color));
        selection.set(ProductSelection::default());
        ui.update(UiState::close_quick_view);
    };

    view! {
        <div class="dialog-backdrop" on:click=close>
            <div class="dialog dialog--quick-view" on:click=move |ev| ev.stop_propagation()>
                <button class="dialog__close" aria-label="Close" on:click=close>"✕"</button>
                <img class="dialog__image" src=product.image alt=product.name/>
                <div class="dialog__body">
                    <p class="dialog__eyebrow">{product.category}</p>
                    <h2>{product.name}</h2>
                    <p class="dialog__price">{product.price.to_string()}</p>
                    <p class="dialog__description">{product.description}</p>
                    <ColorPicker product selection/>
                    <SizePicker product selection/>
                    <div class="dialog__actions">
                        <button
                            class="btn btn--primary"
                            disabled=move || selection.with(|s| s.ready(product).is_none())
                            on:click=add
                        >
                            {move || selection.with(ProductSelection::prompt)}
                        </button>
                        <A href=format!("/product/{}", product.id) attr:class="btn" on:click=close>
                            "View Details"
                        </A>
                    </div>
                </div>
            </div>
        </div>
    }
}
