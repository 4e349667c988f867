//! Filter Bar Component
//!
//! Category buttons above the portfolio grid; exactly one carries the
//! active marker at a time.

use leptos::prelude::*;

use crate::context::SiteContext;
use crate::filter::{categories, ALL};
use crate::models::{PortfolioItem, Section};

#[component]
pub fn FilterBar(section: ReadSignal<Section<PortfolioItem>>) -> impl IntoView {
    let ctx = use_context::<SiteContext>().expect("SiteContext should be provided");

    // "All" plus every category observed in the loaded snapshot
    let filters = move || {
        let mut keys = vec![ALL.to_string()];
        if let Section::Ready(items) = section.get() {
            keys.extend(categories(&items));
        }
        keys
    };

    view! {
        <div class="portfolio-filters">
            {move || filters().into_iter().map(|key| {
                let label = if key == ALL { "All".to_string() } else { title_case(&key) };
                let data_key = key.clone();
                let apply_key = key.clone();
                let is_active = {
                    let key = key.clone();
                    move || ctx.active_filter.get() == key
                };
                view! {
                    <button
                        class=move || if is_active() { "filter-btn active" } else { "filter-btn" }
                        data-filter=data_key
                        on:click=move |_| ctx.apply_filter(apply_key.clone())
                    >
                        {label}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}

/// "interior" -> "Interior"
fn title_case(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("interior"), "Interior");
        assert_eq!(title_case(""), "");
    }
}
