//! Site Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct SiteContext {
    /// Active portfolio filter ("all" or a category) - read
    pub active_filter: ReadSignal<String>,
    /// Active portfolio filter - write
    set_active_filter: WriteSignal<String>,
    /// Portfolio fetch epoch; bumping it re-fetches the resource - read
    pub portfolio_epoch: ReadSignal<u32>,
    /// Portfolio fetch epoch - write
    set_portfolio_epoch: WriteSignal<u32>,
}

impl SiteContext {
    pub fn new(
        active_filter: (ReadSignal<String>, WriteSignal<String>),
        portfolio_epoch: (ReadSignal<u32>, WriteSignal<u32>),
    ) -> Self {
        Self {
            active_filter: active_filter.0,
            set_active_filter: active_filter.1,
            portfolio_epoch: portfolio_epoch.0,
            set_portfolio_epoch: portfolio_epoch.1,
        }
    }

    /// Activate a filter: remember the category and trigger a fresh
    /// fetch of the portfolio resource. Responses from earlier epochs
    /// are dropped by the loader.
    pub fn apply_filter(&self, category: String) {
        self.set_active_filter.set(category);
        self.set_portfolio_epoch.update(|v| *v += 1);
    }
}
