//! Testimonials Section Component
//!
//! Loads customer testimonials from data/testimonials.json; an
//! unavailable or empty document renders the placeholder instead.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::fetch;
use crate::models::{Section, Testimonial};

const COMING_SOON: &str = "Customer testimonials coming soon!";

#[component]
pub fn TestimonialsSection() -> impl IntoView {
    let (section, set_section) = signal(Section::<Testimonial>::Loading);

    // One-shot load on mount
    Effect::new(move |_| {
        spawn_local(async move {
            let result = fetch::load_testimonials().await;
            if result.is_err() {
                web_sys::console::log_1(
                    &"Testimonials data not found, showing placeholder".into(),
                );
            }
            set_section.set(Section::from_result(result));
        });
    });

    view! {
        <section class="testimonials" id="testimonials">
            <div class="container">
                <h2>"What Our Customers Say"</h2>
                <div class="testimonials-grid" id="testimonials-grid">
                    {move || match section.get() {
                        Section::Loading => ().into_any(),
                        Section::Unavailable => view! {
                            <div class="testimonials-empty"><p>{COMING_SOON}</p></div>
                        }
                        .into_any(),
                        Section::Ready(entries) => entries.into_iter().map(|t| view! {
                            <div class="testimonial-card">
                                <p>{t.text}</p>
                                <div class="testimonial-author">{t.author}</div>
                                {t.location.map(|loc| view! {
                                    <div class="testimonial-location">{loc}</div>
                                })}
                            </div>
                        }).collect_view().into_any(),
                    }}
                </div>
            </div>
        </section>
    }
}
