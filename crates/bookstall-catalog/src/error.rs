//! Catalog error types.

use thiserror::Error;

/// Errors that can occur while loading or resolving the catalog.
///
/// All variants are terminal for the current view: a load failure is
/// rendered as a static error state, and a resolution failure sends the
/// visitor back to the store screen. Nothing is retried.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// Catalog document could not be fetched.
    #[error("Failed to load catalog: HTTP {status} for {path}")]
    Load { status: u16, path: String },

    /// Catalog document could not be parsed. The whole load attempt is
    /// discarded; there is no partial-catalog recovery.
    #[error("Failed to parse catalog: {0}")]
    Parse(String),

    /// No book matches the requested slug.
    #[error("Book not found: {0}")]
    BookNotFound(String),

    /// The navigation context carried no book identifier.
    #[error("No book identifier in the current URL")]
    MissingIdentifier,
}

impl CatalogError {
    /// True when the error should redirect to the store screen rather
    /// than render an error state.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            CatalogError::BookNotFound(_) | CatalogError::MissingIdentifier
        )
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(e: serde_json::Error) -> Self {
        CatalogError::Parse(e.to_string())
    }
}
