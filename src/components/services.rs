//! Services Section Component
//!
//! Static cards describing what the company paints.

use leptos::prelude::*;

/// Service cards: (title, blurb)
const SERVICES: &[(&str, &str)] = &[
    (
        "Interior Painting",
        "Walls, ceilings, trim and cabinets finished with clean lines and durable coats.",
    ),
    (
        "Exterior Painting",
        "Siding, stucco, fences and decks prepped and painted to stand up to the weather.",
    ),
    (
        "Commercial Painting",
        "Offices and storefronts painted on your schedule with minimal disruption.",
    ),
];

#[component]
pub fn Services() -> impl IntoView {
    view! {
        <section class="services" id="services">
            <div class="container">
                <h2>"Our Services"</h2>
                <div class="services-grid">
                    {SERVICES.iter().map(|(title, blurb)| view! {
                        <div class="service-card">
                            <h3>{*title}</h3>
                            <p>{*blurb}</p>
                        </div>
                    }).collect_view()}
                </div>
            </div>
        </section>
    }
}
