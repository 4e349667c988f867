//! Resource Loading
//!
//! Frontend bindings to the static JSON resources, fetched over
//! `window.fetch`.

use serde::de::DeserializeOwned;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::Response;

use crate::models::{PortfolioDoc, PortfolioItem, Testimonial, TestimonialDoc};

pub const PORTFOLIO_URL: &str = "data/portfolio.json";
pub const TESTIMONIALS_URL: &str = "data/testimonials.json";

/// Fetch a relative URL and deserialize its JSON body. Network errors,
/// non-2xx statuses and malformed bodies all collapse into one error kind.
async fn fetch_json<T: DeserializeOwned>(url: &str) -> Result<T, String> {
    let window = web_sys::window().ok_or("no window")?;
    let response = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(|e| format!("{:?}", e))?;
    let response: Response = response
        .dyn_into()
        .map_err(|_| "fetch did not yield a Response".to_string())?;
    if !response.ok() {
        return Err(format!("HTTP {}", response.status()));
    }
    let body = JsFuture::from(response.json().map_err(|e| format!("{:?}", e))?)
        .await
        .map_err(|e| format!("{:?}", e))?;
    serde_wasm_bindgen::from_value(body).map_err(|e| e.to_string())
}

pub async fn load_portfolio() -> Result<Vec<PortfolioItem>, String> {
    let doc: PortfolioDoc = fetch_json(PORTFOLIO_URL).await?;
    Ok(doc.items)
}

pub async fn load_testimonials() -> Result<Vec<Testimonial>, String> {
    let doc: TestimonialDoc = fetch_json(TESTIMONIALS_URL).await?;
    Ok(doc.testimonials)
}
