//! Slide-in cart drawer with per-line quantity controls.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::state::cart::{CartLineItem, CartState};
use crate::util::color::swatch_needs_outline;

#[component]
pub fn CartDrawer() -> impl IntoView {
    let cart = expect_context::<RwSignal<CartState>>();

    let close = move |_| cart.update(CartState::close_cart);
    let lines = move || cart.with(|c| c.items.clone());

    view! {
        <Show when=move || cart.with(|c| c.is_open)>
            <div class="drawer-backdrop" on:click=close></div>
            <aside class="drawer">
                <div class="drawer__header">
                    <h2>"Your Cart"</h2>
                    <button class="drawer__close" aria-label="Close cart" on:click=close>"✕"</button>
                </div>
                <Show
                    when=move || !cart.with(CartState::is_empty)
                    fallback=|| {
                        view! {
                            <div class="drawer__empty">
                                <p class="drawer__empty-title">"Your cart is empty"</p>
                                <p class="drawer__empty-hint">"Add some items to get started"</p>
                            </div>
                        }
                    }
                >
                    <ul class="drawer__lines">
                        <For
                            each=lines
                            key=|line| (line.product.id, line.selected_size, line.selected_color.clone(), line.quantity)
                            children=move |line| view! { <CartLine line/> }
                        />
                    </ul>
                    <div class="drawer__footer">
                        <div class="drawer__subtotal">
                            <span>"Subtotal"</span>
                            <span>{move || cart.with(CartState::total_price).to_string()}</span>
                        </div>
                        <A href="/checkout" attr:class="btn btn--primary drawer__checkout" on:click=close>
                            "Checkout"
                        </A>
                    </div>
                </Show>
            </aside>
        </Show>
    }
}

#[component]
fn CartLine(line: CartLineItem) -> impl IntoView {
    let cart = expect_context::<RwSignal<CartState>>();
    let id = line.product.id;
    let size = line.selected_size;
    let color = line.selected_color.clone();
    let quantity = i64::from(line.quantity);

    let set_quantity = {
        let color = color.clone();
        move |q: i64| {
            let color = color.clone();
            cart.update(move |c| c.update_quantity(id, size, &color, q));
        }
    };
    let dec = {
        let set_quantity = set_quantity.clone();
        move |_| set_quantity(quantity - 1)
    };
    let inc = move |_| set_quantity(quantity + 1);
    let remove = {
        let color = color.clone();
        move |_| cart.update(|c| c.remove_item(id, size, &color))
    };

    view! {
        <li class="drawer__line">
            <img class="drawer__thumb" src=line.product.image alt=line.product.name/>
            <div class="drawer__line-body">
                <p class="drawer__line-name">{line.product.name}</p>
                <p class="drawer__line-meta">
                    "Size " {size.to_string()}
                    <span
                        class="swatch swatch--small"
                        class:is-light=swatch_needs_outline(&color)
                        style:background-color=color.clone()
                    ></span>
                </p>
                <div class="drawer__qty">
                    <button class="drawer__qty-btn" aria-label="Decrease quantity" on:click=dec>"−"</button>
                    <span>{line.quantity}</span>
                    <button class="drawer__qty-btn" aria-label="Increase quantity" on:click=inc>"+"</button>
                </div>
            </div>
            <div class="drawer__line-side">
                <span class="drawer__line-price">{line.line_total().to_string()}</span>
                <button class="drawer__remove" on:click=remove>"Remove"</button>
            </div>
        </li>
    }
}
