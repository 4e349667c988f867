//! Pure Color Painting Site App
//!
//! Top-level page layout: header, hero, services, portfolio,
//! testimonials, contact and footer sections.

use leptos::prelude::*;

use crate::context::SiteContext;
use crate::filter::ALL;
use crate::components::{
    ContactSection, Footer, Header, Hero, PortfolioSection, Services, TestimonialsSection,
};

#[component]
pub fn App() -> impl IntoView {
    // State
    let active_filter = signal(String::from(ALL));
    let portfolio_epoch = signal(0u32);

    // Provide context to all children
    provide_context(SiteContext::new(active_filter, portfolio_epoch));

    view! {
        <Header />

        <main>
            <Hero />
            <Services />
            <PortfolioSection />
            <TestimonialsSection />
            <ContactSection />
        </main>

        <Footer />
    }
}
