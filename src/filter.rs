//! Portfolio Filtering
//!
//! Pure helpers behind the category filter bar.

use crate::models::PortfolioItem;

/// Filter key that disables filtering
pub const ALL: &str = "all";

/// Exact-match category filter; [`ALL`] passes everything through.
/// Source order is preserved.
pub fn filter_items(items: &[PortfolioItem], category: &str) -> Vec<PortfolioItem> {
    items
        .iter()
        .filter(|item| category == ALL || item.category == category)
        .cloned()
        .collect()
}

/// Distinct categories in first-seen order, for building the filter bar.
pub fn categories(items: &[PortfolioItem]) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for item in items {
        if !seen.contains(&item.category) {
            seen.push(item.category.clone());
        }
    }
    seen
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_item(title: &str, image: &str, category: &str) -> PortfolioItem {
        PortfolioItem {
            title: title.to_string(),
            image: image.to_string(),
            category: category.to_string(),
            description: None,
        }
    }

    #[test]
    fn test_all_passes_everything_through() {
        let items = vec![
            make_item("Kitchen", "a.jpg", "interior"),
            make_item("Fence", "b.jpg", "exterior"),
            make_item("Office", "c.jpg", "commercial"),
        ];

        let visible = filter_items(&items, ALL);

        assert_eq!(visible, items);
    }

    #[test]
    fn test_exact_match_single_item() {
        let items = vec![
            make_item("Kitchen", "a.jpg", "interior"),
            make_item("Fence", "b.jpg", "exterior"),
        ];

        let visible = filter_items(&items, "exterior");

        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].title, "Fence");
    }

    #[test]
    fn test_match_preserves_source_order() {
        let items = vec![
            make_item("Bedroom", "a.jpg", "interior"),
            make_item("Fence", "b.jpg", "exterior"),
            make_item("Kitchen", "c.jpg", "interior"),
            make_item("Hallway", "d.jpg", "interior"),
        ];

        let visible = filter_items(&items, "interior");

        let titles: Vec<&str> = visible.iter().map(|i| i.title.as_str()).collect();
        assert_eq!(titles, vec!["Bedroom", "Kitchen", "Hallway"]);
        assert!(visible.iter().all(|i| i.category == "interior"));
    }

    #[test]
    fn test_no_matches_yields_empty() {
        let items = vec![make_item("Kitchen", "a.jpg", "interior")];

        assert!(filter_items(&items, "exterior").is_empty());
    }

    #[test]
    fn test_categories_first_seen_order_no_duplicates() {
        let items = vec![
            make_item("Kitchen", "a.jpg", "interior"),
            make_item("Fence", "b.jpg", "exterior"),
            make_item("Bedroom", "c.jpg", "interior"),
        ];

        assert_eq!(categories(&items), vec!["interior", "exterior"]);
    }
}
