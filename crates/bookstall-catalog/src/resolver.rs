//! Detail resolver: navigation identifier to catalog book.

use crate::catalog::{Book, Catalog};
use crate::error::CatalogError;

/// Locate the book named by the navigation context.
///
/// `slug` is the identifier read from the current URL's query string,
/// `None` when the URL carries none. An absent or unmatched identifier
/// yields a not-found error; the caller's policy is to redirect to the
/// store screen.
pub fn resolve<'a>(catalog: &'a Catalog, slug: Option<&str>) -> Result<&'a Book, CatalogError> {
    let slug = slug
        .filter(|s| !s.is_empty())
        .ok_or(CatalogError::MissingIdentifier)?;

    catalog.get(slug).ok_or_else(|| {
        tracing::warn!(slug, "detail request for unknown book");
        CatalogError::BookNotFound(slug.to_string())
    })
}
