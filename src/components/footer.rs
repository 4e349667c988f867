//! Site Footer Component

use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    let year = js_sys::Date::new_0().get_full_year();

    view! {
        <footer class="site-footer">
            <div class="container">
                <p>
                    "© " <span id="current-year">{year}</span> " Pure Color Painting. All rights reserved."
                </p>
            </div>
        </footer>
    }
}
