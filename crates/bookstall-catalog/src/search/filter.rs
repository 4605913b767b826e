//! The filter engine.
//!
//! A linear scan re-evaluated from scratch on every state change. This
//! is fine for a catalog of tens of books; it does not scale to large
//! catalogs and would need an index before being reused at that size.

use crate::catalog::{Book, Catalog};
use crate::search::FilterState;

/// Compute the visible subset of the catalog.
///
/// A book is included iff both clauses hold:
///
/// - the query is empty, or is a case-insensitive substring of the
///   title, the description, or any tag;
/// - the active-tag set is empty, or the book carries at least one
///   active tag.
///
/// Pure and order-preserving: the result is a subset of the catalog in
/// catalog order, never relevance-ranked.
pub fn filter<'a>(catalog: &'a Catalog, state: &FilterState) -> Vec<&'a Book> {
    let visible: Vec<&Book> = catalog
        .books()
        .iter()
        .filter(|book| book.matches_query(state.query()) && matches_tags(book, state))
        .collect();
    tracing::trace!(
        query = state.query(),
        active_tags = state.active_tags().len(),
        total = catalog.len(),
        visible = visible.len(),
        "filter pass"
    );
    visible
}

fn matches_tags(book: &Book, state: &FilterState) -> bool {
    if !state.has_active_tags() {
        return true;
    }
    state.active_tags().iter().any(|tag| book.has_tag(tag))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CatalogDocument;
    use crate::price::Price;
    use crate::slug::BookSlug;

    fn book(title: &str, tags: &[&str]) -> Book {
        Book {
            slug: BookSlug::new(title.to_lowercase().replace(' ', "-")),
            title: title.to_string(),
            subtitle: String::new(),
            description: String::new(),
            long_description: None,
            price: Price::from_cents(999),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            cover_image: String::new(),
            sample_pdf: String::new(),
            purchase_link: String::new(),
            details: None,
            testimonials: Vec::new(),
            featured: false,
        }
    }

    fn example_catalog() -> Catalog {
        Catalog::from_document(CatalogDocument {
            books: vec![
                book("Zero Day", &["hacking", "true-crime"]),
                book("Firewall", &["hacking"]),
            ],
            tags: None,
        })
    }

    fn titles<'a>(books: &[&'a Book]) -> Vec<&'a str> {
        books.iter().map(|b| b.title.as_str()).collect()
    }

    #[test]
    fn test_empty_state_returns_entire_catalog() {
        let catalog = example_catalog();
        let result = filter(&catalog, &FilterState::new());
        assert_eq!(titles(&result), ["Zero Day", "Firewall"]);
    }

    #[test]
    fn test_query_matches_title() {
        let catalog = example_catalog();
        let state = FilterState::new().with_query("fire");
        assert_eq!(titles(&filter(&catalog, &state)), ["Firewall"]);
    }

    #[test]
    fn test_tag_selection_alone() {
        let catalog = example_catalog();
        let state = FilterState::new().with_tag_toggled("true-crime");
        assert_eq!(titles(&filter(&catalog, &state)), ["Zero Day"]);
    }

    #[test]
    fn test_query_and_tags_compose_with_and() {
        let catalog = example_catalog();

        // "fire" matches only Firewall, which carries the active tag.
        let state = FilterState::new()
            .with_query("fire")
            .with_tag_toggled("hacking");
        assert_eq!(titles(&filter(&catalog, &state)), ["Firewall"]);

        // "fire" matches only Firewall, which lacks the active tag.
        let state = FilterState::new()
            .with_query("fire")
            .with_tag_toggled("true-crime");
        assert!(filter(&catalog, &state).is_empty());
    }

    #[test]
    fn test_multiple_tags_compose_with_or() {
        let catalog = example_catalog();
        let state = FilterState::new()
            .with_tag_toggled("true-crime")
            .with_tag_toggled("hacking");
        assert_eq!(titles(&filter(&catalog, &state)), ["Zero Day", "Firewall"]);
    }

    #[test]
    fn test_result_is_ordered_subset() {
        let catalog = example_catalog();
        let state = FilterState::new().with_tag_toggled("hacking");
        let result = filter(&catalog, &state);

        let mut catalog_order = catalog.books().iter();
        for found in &result {
            assert!(catalog_order.any(|b| b == *found));
        }
    }

    #[test]
    fn test_filter_is_pure() {
        let catalog = example_catalog();
        let state = FilterState::new().with_query("zero");
        let first = titles(&filter(&catalog, &state));
        let second = titles(&filter(&catalog, &state));
        assert_eq!(first, second);
    }

    #[test]
    fn test_no_match_returns_empty() {
        let catalog = example_catalog();
        let state = FilterState::new().with_query("cryptography");
        assert!(filter(&catalog, &state).is_empty());
    }
}
