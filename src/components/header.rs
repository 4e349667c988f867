//! Site Header Component
//!
//! Fixed header with logo, nav links and the mobile menu toggle.

use leptos::prelude::*;

use crate::scroll::scroll_to_anchor;

/// Nav links: (fragment, label)
const NAV_LINKS: &[(&str, &str)] = &[
    ("#home", "Home"),
    ("#services", "Services"),
    ("#portfolio", "Portfolio"),
    ("#testimonials", "Testimonials"),
    ("#contact", "Contact"),
];

#[component]
pub fn Header() -> impl IntoView {
    let (menu_open, set_menu_open) = signal(false);

    let toggle_menu = move |_| set_menu_open.update(|open| *open = !*open);

    view! {
        <header class="site-header">
            <div class="container header-inner">
                <a
                    href="#home"
                    class="logo"
                    on:click=move |ev| scroll_to_anchor(ev, "#home")
                >
                    "Pure Color Painting"
                </a>

                <button
                    class=move || if menu_open.get() { "mobile-menu-btn active" } else { "mobile-menu-btn" }
                    aria-label="Toggle navigation"
                    on:click=toggle_menu
                >
                    <span></span>
                    <span></span>
                    <span></span>
                </button>

                <nav class=move || if menu_open.get() { "nav active" } else { "nav" }>
                    {NAV_LINKS.iter().map(|(href, label)| {
                        let target = *href;
                        view! {
                            <a
                                href=target
                                on:click=move |ev| {
                                    // Any nav link closes the mobile menu
                                    set_menu_open.set(false);
                                    scroll_to_anchor(ev, target);
                                }
                            >
                                {*label}
                            </a>
                        }
                    }).collect_view()}
                </nav>
            </div>
        </header>
    }
}
