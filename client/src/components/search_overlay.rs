//! Full-screen product search with live results.
//!
//! Escape closes the overlay and clears the query. While the query is empty
//! the popular searches are offered instead of results.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::catalog::{SEARCH_SUGGESTIONS, search};
use crate::state::ui::UiState;

#[component]
pub fn SearchOverlay() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    let handle = window_event_listener(leptos::ev::keydown, move |ev| {
        if ev.key() == "Escape" && ui.with_untracked(|u| u.is_search_open) {
            ev.prevent_default();
            ui.update(UiState::close_search);
        }
    });
    on_cleanup(move || handle.remove());

    view! {
        <Show when=move || ui.with(|u| u.is_search_open)>
            <SearchPanel/>
        </Show>
    }
}

#[component]
fn SearchPanel() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let navigate = use_navigate();

    let query = move || ui.with(|u| u.search_query.clone());
    let results = move || {
        let q = query();
        if q.trim().is_empty() { Vec::new() } else { search(q.trim()) }
    };

    let open_product = move |id: &'static str| {
        ui.update(UiState::close_search);
        navigate(&format!("/product/{id}"), Default::default());
    };

    view! {
        <div class="search-overlay">
            <div class="search-overlay__bar">
                <input
                    class="search-overlay__input"
                    type="search"
                    placeholder="Search products..."
                    autofocus=true
                    prop:value=query
                    on:input=move |ev| ui.update(|u| u.set_search_query(event_target_value(&ev)))
                />
                <button
                    class="search-overlay__close"
                    aria-label="Close search"
                    on:click=move |_| ui.update(UiState::close_search)
                >
                    "✕"
                </button>
            </div>
            <Show
                when=move || !query().trim().is_empty()
                fallback=move || {
                    view! {
                        <div class="search-overlay__suggestions">
                            <p class="search-overlay__heading">"Popular Searches"</p>
                            {SEARCH_SUGGESTIONS
                                .iter()
                                .map(|&term| {
                                    view! {
                                        <button
                                            class="chip"
                                            on:click=move |_| ui.update(|u| u.set_search_query(term))
                                        >
                                            {term}
                                        </button>
                                    }
                                })
                                .collect_view()}
                        </div>
                    }
                }
            >
                {
                    let open_product = open_product.clone();
                    move || {
                        let found = results();
                        if found.is_empty() {
                            return view! { <p class="search-overlay__empty">"No products found"</p> }.into_any();
                        }
                        found
                            .into_iter()
                            .map(|product| {
                                let open_product = open_product.clone();
                                view! {
                                    <button class="search-result" on:click=move |_| open_product(product.id)>
                                        <img src=product.image alt=product.name/>
                                        <span class="search-result__name">{product.name}</span>
                                        <span class="search-result__price">{product.price.to_string()}</span>
                                    </button>
                                }
                            })
                            .collect_view()
                            .into_any()
                    }
                }
            </Show>
        </div>
    }
}
