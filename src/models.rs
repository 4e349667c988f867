//! Site Data Models
//!
//! Data structures matching the JSON resources under `data/`.

use serde::{Deserialize, Serialize};

/// One portfolio project (matches entries in data/portfolio.json)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioItem {
    pub title: String,
    pub image: String,
    pub category: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// Wrapper document for data/portfolio.json
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioDoc {
    pub items: Vec<PortfolioItem>,
}

/// One customer testimonial (matches entries in data/testimonials.json)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Testimonial {
    pub text: String,
    pub author: String,
    #[serde(default)]
    pub location: Option<String>,
}

/// Wrapper document for data/testimonials.json
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestimonialDoc {
    pub testimonials: Vec<Testimonial>,
}

/// Load state of a remote content section
#[derive(Debug, Clone, PartialEq)]
pub enum Section<T> {
    /// Fetch still in flight, nothing rendered yet
    Loading,
    /// Non-empty snapshot, in source order
    Ready(Vec<T>),
    /// Fetch failed or the document held no entries
    Unavailable,
}

impl<T> Section<T> {
    /// Collapse a loader result into a render state. Errors and empty
    /// documents both fall back to the section placeholder.
    pub fn from_result(result: Result<Vec<T>, String>) -> Self {
        match result {
            Ok(entries) if !entries.is_empty() => Section::Ready(entries),
            _ => Section::Unavailable,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_result_keeps_order_and_count() {
        let section = Section::from_result(Ok(vec!["a", "b", "c"]));
        assert_eq!(section, Section::Ready(vec!["a", "b", "c"]));
    }

    #[test]
    fn test_from_result_empty_is_unavailable() {
        let section: Section<&str> = Section::from_result(Ok(vec![]));
        assert_eq!(section, Section::Unavailable);
    }

    #[test]
    fn test_from_result_error_is_unavailable() {
        let section: Section<&str> = Section::from_result(Err("HTTP 404".to_string()));
        assert_eq!(section, Section::Unavailable);
    }

    #[test]
    fn test_portfolio_item_description_optional() {
        let json = r#"{"title":"Fence","image":"b.jpg","category":"exterior"}"#;
        let item: PortfolioItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.title, "Fence");
        assert_eq!(item.description, None);
    }

    #[test]
    fn test_portfolio_doc_requires_items_field() {
        let json = r#"{"projects":[]}"#;
        assert!(serde_json::from_str::<PortfolioDoc>(json).is_err());
    }

    #[test]
    fn test_testimonial_location_optional() {
        let json = r#"{"testimonials":[{"text":"Great work","author":"Dana"}]}"#;
        let doc: TestimonialDoc = serde_json::from_str(json).unwrap();
        assert_eq!(doc.testimonials.len(), 1);
        assert_eq!(doc.testimonials[0].location, None);
    }
}
