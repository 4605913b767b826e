//! Featured book projection for the landing view.

use crate::catalog::{Book, Catalog};

/// Promotional layout inputs for the featured book.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeaturedView {
    pub slug: String,
    pub title: String,
    pub subtitle: String,
    pub description: String,
    /// Two-decimal display string, symbol prefixed.
    pub price: String,
    pub tags: Vec<String>,
    pub cover_image: String,
    pub sample_href: String,
    pub purchase_href: String,
}

impl FeaturedView {
    /// Project the first flagged book, else the first book in the
    /// catalog. `None` only for an empty catalog.
    pub fn from_catalog(catalog: &Catalog) -> Option<Self> {
        catalog.featured().map(Self::from_book)
    }

    /// Project a single book into the promotional layout.
    pub fn from_book(book: &Book) -> Self {
        Self {
            slug: book.slug.as_str().to_string(),
            title: book.title.clone(),
            subtitle: book.subtitle.clone(),
            description: book.description.clone(),
            price: book.price.display(),
            tags: book.tags.clone(),
            cover_image: book.cover_image.clone(),
            sample_href: book.sample_pdf.clone(),
            purchase_href: book.purchase_link.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CatalogDocument;
    use crate::price::Price;
    use crate::slug::BookSlug;

    fn book(slug: &str, featured: bool) -> Book {
        Book {
            slug: BookSlug::new(slug),
            title: slug.to_string(),
            subtitle: "subtitle".to_string(),
            description: "description".to_string(),
            long_description: None,
            price: Price::from_cents(2450),
            tags: vec!["hacking".to_string()],
            cover_image: format!("covers/{}.jpg", slug),
            sample_pdf: format!("samples/{}.pdf", slug),
            purchase_link: format!("https://buy.example/{}", slug),
            details: None,
            testimonials: Vec::new(),
            featured,
        }
    }

    #[test]
    fn test_featured_flag_wins() {
        let catalog = Catalog::from_document(CatalogDocument {
            books: vec![book("first", false), book("second", true)],
            tags: None,
        });
        let view = FeaturedView::from_catalog(&catalog).unwrap();
        assert_eq!(view.slug, "second");
    }

    #[test]
    fn test_no_flag_falls_back_to_first() {
        let catalog = Catalog::from_document(CatalogDocument {
            books: vec![book("first", false), book("second", false)],
            tags: None,
        });
        let view = FeaturedView::from_catalog(&catalog).unwrap();
        assert_eq!(view.slug, "first");
    }

    #[test]
    fn test_price_formatted_for_display() {
        let view = FeaturedView::from_book(&book("first", true));
        assert_eq!(view.price, "$24.50");
    }
}
