//! Fixed top navigation bar with search and cart triggers.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::state::{cart::CartState, ui::UiState};

const NAV_LINKS: &[(&str, &str)] = &[
    ("Home", "/"),
    ("Products", "/#products"),
    ("Technology", "/#technology"),
    ("Contact", "/#contact"),
];

#[component]
pub fn Navbar() -> impl IntoView {
    let cart = expect_context::<RwSignal<CartState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let menu_open = RwSignal::new(false);

    let badge = move || cart.with(CartState::total_items);

    view! {
        <header class="navbar">
            <nav class="navbar__inner">
                <A href="/" attr:class="navbar__logo">"NIKE"</A>
                <ul class="navbar__links">
                    {NAV_LINKS
                        .iter()
                        .map(|(name, href)| view! { <li><a href=*href>{*name}</a></li> })
                        .collect_view()}
                </ul>
                <div class="navbar__actions">
                    <button
                        class="navbar__icon"
                        aria-label="Search"
                        on:click=move |_| ui.update(UiState::toggle_search)
                    >
                        "⌕"
                    </button>
                    <button
                        class="navbar__icon navbar__cart"
                        aria-label="Cart"
                        on:click=move |_| cart.update(CartState::toggle_cart)
                    >
                        "🛍"
                        <Show when=move || { badge() > 0 }>
                            <span class="navbar__badge">{badge}</span>
                        </Show>
                    </button>
                    <button
                        class="navbar__icon navbar__menu-toggle"
                        aria-label="Menu"
                        on:click=move |_| menu_open.update(|open| *open = !*open)
                    >
                        {move || if menu_open.get() { "✕" } else { "☰" }}
                    </button>
                </div>
            </nav>
            <Show when=move || menu_open.get()>
                <ul class="navbar__mobile">
                    {NAV_LINKS
                        .iter()
                        .map(|(name, href)| {
                            view! {
                                <li>
                                    <a href=*href on:click=move |_| menu_open.set(false)>
                                        {*name}
                                    </a>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </Show>
        </header>
    }
}
