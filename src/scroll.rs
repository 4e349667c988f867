//! Smooth Scrolling
//!
//! In-page anchor navigation with a fixed-header offset.

use web_sys::{MouseEvent, ScrollBehavior, ScrollToOptions};

/// Height of the fixed site header in px
const HEADER_OFFSET: f64 = 80.0;

/// Intercept an anchor click and smooth-scroll to its in-page target.
/// `href` is a fragment selector like `"#contact"`; unknown targets are
/// ignored.
pub fn scroll_to_anchor(ev: MouseEvent, href: &str) {
    ev.prevent_default();

    if let Some(window) = web_sys::window() {
        if let Some(document) = window.document() {
            if let Ok(Some(target)) = document.query_selector(href) {
                let rect = target.get_bounding_client_rect();
                let page_offset = window.page_y_offset().unwrap_or(0.0);

                let options = ScrollToOptions::new();
                options.set_top(rect.top() + page_offset - HEADER_OFFSET);
                options.set_behavior(ScrollBehavior::Smooth);
                window.scroll_to_with_scroll_to_options(&options);
            }
        }
    }
}
