//! Hero Section Component

use leptos::prelude::*;

use crate::scroll::scroll_to_anchor;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section class="hero" id="home">
            <div class="container">
                <h1>"Quality Painting, Pure Results"</h1>
                <p class="hero-subtitle">
                    "Interior, exterior and commercial painting for homes and businesses across the region."
                </p>
                <div class="hero-actions">
                    <a
                        href="#contact"
                        class="btn btn-primary"
                        on:click=move |ev| scroll_to_anchor(ev, "#contact")
                    >
                        "Get a Free Quote"
                    </a>
                    <a
                        href="#portfolio"
                        class="btn btn-outline"
                        on:click=move |ev| scroll_to_anchor(ev, "#portfolio")
                    >
                        "See Our Work"
                    </a>
                </div>
            </div>
        </section>
    }
}
