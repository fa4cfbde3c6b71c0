//! Landing page: hero, feature strip, and the product grid.

use leptos::prelude::*;

use crate::components::{navbar::Navbar, product_grid::ProductGrid};

const FEATURES: &[(&str, &str)] = &[
    ("Air Cushioning", "Responsive Air units absorb impact mile after mile."),
    ("Flyknit Uppers", "Engineered yarns that hug the foot without the weight."),
    ("Grip Traction", "Multi-surface rubber patterns for every court and trail."),
];

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Navbar/>
        <main class="home">
            <section class="hero">
                <div class="hero__copy">
                    <p class="hero__eyebrow">"New Season"</p>
                    <h1>"Just Do It."</h1>
                    <p class="hero__lede">
                        "Engineered for speed, built for comfort. Find the pair that moves with you."
                    </p>
                    <a class="btn btn--primary" href="#products">"Shop Now"</a>
                </div>
                <img class="hero__image" src="/assets/shoe-airmax-1.png" alt="Nike Air Max Pulse"/>
            </section>
            <section id="technology" class="features">
                {FEATURES
                    .iter()
                    .map(|(title, body)| {
                        view! {
                            <div class="features__item">
                                <h3>{*title}</h3>
                                <p>{*body}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </section>
            <ProductGrid/>
        </main>
        <footer id="contact" class="footer">
            <p>"© Nike Store demo. Prices in USD."</p>
        </footer>
    }
}
