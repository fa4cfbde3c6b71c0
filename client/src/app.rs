//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::{
    assistant_buttons::AssistantButtons, cart_drawer::CartDrawer, quick_view_modal::QuickViewModal,
    search_overlay::SearchOverlay,
};
use crate::config::ClientConfig;
use crate::pages::{checkout::CheckoutPage, home::HomePage, not_found::NotFoundPage, product_detail::ProductDetailPage};
use crate::state::{cart::CartState, chat::ChatState, ui::UiState, voice::VoiceState};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Builds every store once and provides it to the tree; overlays are mounted
/// here so they survive route changes.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let cart = RwSignal::new(CartState::default());
    let ui = RwSignal::new(UiState::default());
    let chat = RwSignal::new(ChatState::default());
    let voice = RwSignal::new(VoiceState::default());

    provide_context(cart);
    provide_context(ui);
    provide_context(chat);
    provide_context(voice);
    provide_context(ClientConfig::from_build_env());

    view! {
        <Stylesheet id="leptos" href="/pkg/storefront.css"/>
        <Title text="Nike Store"/>

        <Router>
            <Routes fallback=NotFoundPage>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=(StaticSegment("product"), ParamSegment("id")) view=ProductDetailPage/>
                <Route path=StaticSegment("checkout") view=CheckoutPage/>
            </Routes>
            <CartDrawer/>
            <SearchOverlay/>
            <QuickViewModal/>
            <AssistantButtons/>
        </Router>
    }
}
