//! The loaded catalog: ordered books plus the tag universe.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::catalog::Book;
use crate::error::CatalogError;

/// Wire format of the catalog document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogDocument {
    /// Item records, in display order.
    pub books: Vec<Book>,
    /// Explicit tag universe; derived from the books when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

/// The full set of sellable books, loaded exactly once per page view and
/// immutable thereafter.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    books: Vec<Book>,
    tags: Vec<String>,
}

impl Catalog {
    /// Parse a catalog from its JSON source. A parse failure discards
    /// the entire load attempt.
    pub fn from_json(source: &str) -> Result<Self, CatalogError> {
        let doc: CatalogDocument = serde_json::from_str(source)?;
        Ok(Self::from_document(doc))
    }

    /// Build a catalog from an already-parsed document, deriving the tag
    /// set when the document does not supply one. Tags are computed here,
    /// once, never per filter pass.
    pub fn from_document(doc: CatalogDocument) -> Self {
        let tags = match doc.tags {
            Some(tags) => tags,
            None => derive_tags(&doc.books),
        };
        tracing::debug!(books = doc.books.len(), tags = tags.len(), "catalog loaded");
        Self {
            books: doc.books,
            tags,
        }
    }

    /// The books, in display order.
    pub fn books(&self) -> &[Book] {
        &self.books
    }

    /// The tag universe, in first-seen order.
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Number of books in the catalog.
    pub fn len(&self) -> usize {
        self.books.len()
    }

    /// Check if the catalog holds no books.
    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// The book promoted on the landing view: the first book flagged
    /// featured, else the first book.
    pub fn featured(&self) -> Option<&Book> {
        self.books
            .iter()
            .find(|b| b.featured)
            .or_else(|| self.books.first())
    }

    /// Look up a book by slug.
    pub fn get(&self, slug: &str) -> Option<&Book> {
        self.books.iter().find(|b| b.slug.as_str() == slug)
    }
}

/// Union of all books' tags, deduplicated, first-seen order.
fn derive_tags(books: &[Book]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut tags = Vec::new();
    for book in books {
        for tag in &book.tags {
            if seen.insert(tag.clone()) {
                tags.push(tag.clone());
            }
        }
    }
    tags
}
