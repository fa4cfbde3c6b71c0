//! Fallback for unknown routes.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

use crate::components::navbar::Navbar;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    let location = use_location();
    Effect::new(move |_| {
        leptos::logging::warn!("404: no route for {}", location.pathname.get());
    });

    view! {
        <Navbar/>
        <main class="not-found">
            <h1>"404"</h1>
            <p>"The page you're looking for doesn't exist or has been moved."</p>
            <A href="/" attr:class="btn btn--primary">"Back to Home"</A>
        </main>
    }
}
