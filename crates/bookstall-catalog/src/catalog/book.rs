//! Book and testimonial types.

use crate::price::Price;
use crate::slug::BookSlug;
use serde::{Deserialize, Serialize};

/// A book in the catalog.
///
/// Immutable after load. Field names follow the catalog document's
/// camelCase wire format.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    /// Unique URL-friendly identifier.
    pub slug: BookSlug,
    /// Book title.
    pub title: String,
    /// Subtitle shown in promotional layouts.
    pub subtitle: String,
    /// Short description for listings.
    pub description: String,
    /// Full description for the detail screen; listings fall back to the
    /// short description when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub long_description: Option<String>,
    /// Price, a plain decimal number on the wire.
    pub price: Price,
    /// Topical tags used for filtering, in display order.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Cover image reference.
    pub cover_image: String,
    /// Sample document reference.
    pub sample_pdf: String,
    /// External purchase link; checkout is entirely delegated.
    #[serde(rename = "stripeLink")]
    pub purchase_link: String,
    /// Structured detail attributes for the detail screen.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<BookDetails>,
    /// Reader testimonials.
    #[serde(default)]
    pub testimonials: Vec<Testimonial>,
    /// Promoted on the landing view.
    #[serde(default)]
    pub featured: bool,
}

impl Book {
    /// Check whether a normalized (lower-cased, trimmed) query matches
    /// this book's title, description, or any of its tags. Literal
    /// substring only; an empty query matches everything.
    pub fn matches_query(&self, query: &str) -> bool {
        if query.is_empty() {
            return true;
        }
        self.title.to_lowercase().contains(query)
            || self.description.to_lowercase().contains(query)
            || self.tags.iter().any(|tag| tag.to_lowercase().contains(query))
    }

    /// Check whether this book carries the given tag.
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Check whether at least one reader testimonial exists.
    pub fn has_testimonials(&self) -> bool {
        !self.testimonials.is_empty()
    }
}

/// Structured detail attributes. Every field is optional; the detail
/// projection supplies documented fallbacks.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct BookDetails {
    /// Page count.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pages: Option<u32>,
    /// Delivery formats (e.g., "PDF, EPUB").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    /// Last-updated date, an opaque display string.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated: Option<String>,
    /// Language of the text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

/// A reader testimonial. The owning book's title is attached at
/// aggregation time, not stored here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Testimonial {
    /// Free-text body.
    pub text: String,
    /// Author name.
    pub author: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn book(title: &str, description: &str, tags: &[&str]) -> Book {
        Book {
            slug: BookSlug::new(title.to_lowercase().replace(' ', "-")),
            title: title.to_string(),
            subtitle: String::new(),
            description: description.to_string(),
            long_description: None,
            price: Price::from_cents(1999),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            cover_image: "covers/test.jpg".to_string(),
            sample_pdf: "samples/test.pdf".to_string(),
            purchase_link: "https://buy.example/test".to_string(),
            details: None,
            testimonials: Vec::new(),
            featured: false,
        }
    }

    #[test]
    fn test_query_matches_title_case_insensitive() {
        let b = book("Zero Day", "tracking an exploit", &["hacking"]);
        assert!(b.matches_query("zero"));
        assert!(b.matches_query("day"));
        assert!(!b.matches_query("firewall"));
    }

    #[test]
    fn test_query_matches_description_and_tags() {
        let b = book("Zero Day", "tracking an exploit", &["True-Crime"]);
        assert!(b.matches_query("exploit"));
        assert!(b.matches_query("true-crime"));
    }

    #[test]
    fn test_empty_query_matches_everything() {
        let b = book("Zero Day", "tracking an exploit", &[]);
        assert!(b.matches_query(""));
    }

    #[test]
    fn test_book_wire_format() {
        let json = r#"{
            "slug": "zero-day",
            "title": "Zero Day",
            "subtitle": "Anatomy of a Breach",
            "description": "Tracking an exploit from disclosure to takedown.",
            "longDescription": "The full story.",
            "price": 29.99,
            "tags": ["hacking", "true-crime"],
            "coverImage": "covers/zero-day.jpg",
            "samplePdf": "samples/zero-day.pdf",
            "stripeLink": "https://buy.example/zero-day",
            "details": {"pages": 312, "language": "English"},
            "featured": true
        }"#;

        let b: Book = serde_json::from_str(json).unwrap();
        assert_eq!(b.slug.as_str(), "zero-day");
        assert_eq!(b.price.cents(), 2999);
        assert_eq!(b.long_description.as_deref(), Some("The full story."));
        assert_eq!(b.purchase_link, "https://buy.example/zero-day");
        assert_eq!(b.details.as_ref().unwrap().pages, Some(312));
        assert_eq!(b.details.as_ref().unwrap().format, None);
        assert!(b.featured);
        assert!(b.testimonials.is_empty());
    }

    #[test]
    fn test_book_optional_fields_default() {
        let json = r#"{
            "slug": "firewall",
            "title": "Firewall",
            "subtitle": "Holding the Line",
            "description": "Defense in depth.",
            "price": 19.99,
            "coverImage": "covers/firewall.jpg",
            "samplePdf": "samples/firewall.pdf",
            "stripeLink": "https://buy.example/firewall"
        }"#;

        let b: Book = serde_json::from_str(json).unwrap();
        assert!(b.tags.is_empty());
        assert!(b.details.is_none());
        assert!(!b.featured);
        assert!(!b.has_testimonials());
    }
}
