//! Detail screen projection with documented fallbacks.

use crate::catalog::{Book, Testimonial};

/// Fallback for unknown page count and last-updated date.
pub const UNKNOWN_FIELD: &str = "N/A";

/// Fallback for an unspecified delivery format.
pub const DEFAULT_FORMAT: &str = "PDF, EPUB, MOBI";

/// Fallback for an unspecified language.
pub const DEFAULT_LANGUAGE: &str = "English";

/// A fully-resolved book for the detail screen. Every attribute is
/// already display-ready; missing structured fields carry their
/// documented fallbacks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailView {
    pub slug: String,
    pub title: String,
    pub subtitle: String,
    /// Long description, falling back to the short one.
    pub description: String,
    /// Two-decimal display string, symbol prefixed.
    pub price: String,
    pub tags: Vec<String>,
    pub cover_image: String,
    pub sample_href: String,
    pub purchase_href: String,
    pub pages: String,
    pub format: String,
    pub updated: String,
    pub language: String,
    /// Rendered only when at least one exists.
    pub testimonials: Vec<Testimonial>,
}

impl DetailView {
    /// Project a resolved book into the detail layout.
    pub fn from_book(book: &Book) -> Self {
        let details = book.details.clone().unwrap_or_default();
        Self {
            slug: book.slug.as_str().to_string(),
            title: book.title.clone(),
            subtitle: book.subtitle.clone(),
            description: book
                .long_description
                .clone()
                .unwrap_or_else(|| book.description.clone()),
            price: book.price.display(),
            tags: book.tags.clone(),
            cover_image: book.cover_image.clone(),
            sample_href: book.sample_pdf.clone(),
            purchase_href: book.purchase_link.clone(),
            pages: details
                .pages
                .map(|p| p.to_string())
                .unwrap_or_else(|| UNKNOWN_FIELD.to_string()),
            format: details.format.unwrap_or_else(|| DEFAULT_FORMAT.to_string()),
            updated: details.updated.unwrap_or_else(|| UNKNOWN_FIELD.to_string()),
            language: details
                .language
                .unwrap_or_else(|| DEFAULT_LANGUAGE.to_string()),
            testimonials: book.testimonials.clone(),
        }
    }

    /// Check whether the testimonials section should render.
    pub fn has_testimonials(&self) -> bool {
        !self.testimonials.is_empty()
    }
}

/// Page title and social-preview inputs for the metadata-tagging
/// collaborator on the detail screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageMetadata {
    pub title: String,
    pub description: String,
    pub cover_image: String,
}

impl PageMetadata {
    /// Extract the three fields the metadata collaborator consumes.
    pub fn from_book(book: &Book) -> Self {
        Self {
            title: book.title.clone(),
            description: book.description.clone(),
            cover_image: book.cover_image.clone(),
        }
    }
}
