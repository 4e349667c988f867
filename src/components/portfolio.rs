//! Portfolio Section Component
//!
//! Loads portfolio items from data/portfolio.json and renders them as a
//! filterable card grid. Missing or empty data falls back to a
//! placeholder instead of an error.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::FilterBar;
use crate::context::SiteContext;
use crate::fetch;
use crate::filter::filter_items;
use crate::models::{PortfolioItem, Section};

const COMING_SOON: &str = "Portfolio coming soon! Check back for photos of our recent projects.";
const NO_MATCHES: &str = "No projects found in this category.";

#[component]
pub fn PortfolioSection() -> impl IntoView {
    let ctx = use_context::<SiteContext>().expect("SiteContext should be provided");

    let (section, set_section) = signal(Section::<PortfolioItem>::Loading);

    // Fetch on mount, and again whenever a filter click bumps the epoch.
    // A response that lands after a newer request started is stale and
    // gets dropped.
    Effect::new(move |_| {
        let epoch = ctx.portfolio_epoch.get();
        spawn_local(async move {
            let result = fetch::load_portfolio().await;
            if ctx.portfolio_epoch.get_untracked() != epoch {
                web_sys::console::log_1(
                    &format!("[PORTFOLIO] Dropping stale response for epoch {}", epoch).into(),
                );
                return;
            }
            match result {
                Ok(items) => set_section.set(Section::from_result(Ok(items))),
                Err(_) if epoch == 0 => {
                    web_sys::console::log_1(&"Portfolio data not found, showing placeholder".into());
                    set_section.set(Section::Unavailable);
                }
                Err(err) => {
                    // Filter refresh failed: keep whatever is on screen
                    web_sys::console::warn_1(&format!("Could not filter portfolio: {}", err).into());
                }
            }
        });
    });

    view! {
        <section class="portfolio" id="portfolio">
            <div class="container">
                <h2>"Our Work"</h2>

                <FilterBar section=section />

                <div class="portfolio-grid" id="portfolio-grid">
                    {move || match section.get() {
                        Section::Loading => ().into_any(),
                        Section::Unavailable => view! {
                            <div class="portfolio-empty"><p>{COMING_SOON}</p></div>
                        }
                        .into_any(),
                        Section::Ready(items) => {
                            let visible = filter_items(&items, &ctx.active_filter.get());
                            if visible.is_empty() {
                                view! {
                                    <div class="portfolio-empty"><p>{NO_MATCHES}</p></div>
                                }
                                .into_any()
                            } else {
                                visible.into_iter().map(|item| {
                                    let alt = item.title.clone();
                                    view! {
                                        <div class="portfolio-item" data-category=item.category>
                                            <img src=item.image alt=alt loading="lazy" />
                                            <div class="overlay">
                                                <h4>{item.title}</h4>
                                                {item.description.map(|d| view! { <p>{d}</p> })}
                                            </div>
                                        </div>
                                    }
                                }).collect_view().into_any()
                            }
                        }
                    }}
                </div>
            </div>
        </section>
    }
}
