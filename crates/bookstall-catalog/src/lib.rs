//! Catalog domain types and logic for the Bookstall storefront.
//!
//! This crate is the framework-agnostic core of the storefront:
//!
//! - **Catalog**: Books, testimonials, the loaded catalog and its tag set
//! - **Search**: Filter state and the filter engine
//! - **View**: Pure projections consumed by the presentation layer
//! - **Resolver**: Slug-to-book resolution for the detail screen
//!
//! The presentation layer (DOM, markup, styling) is an external
//! collaborator: nothing in this crate touches the browser, which keeps
//! every piece unit-testable on any target.
//!
//! # Example
//!
//! ```rust,ignore
//! use bookstall_catalog::prelude::*;
//!
//! let catalog = Catalog::from_json(source)?;
//!
//! let state = FilterState::new()
//!     .with_query("forensics")
//!     .with_tag_toggled("hacking");
//!
//! for book in filter(&catalog, &state) {
//!     println!("{} - {}", book.title, book.price.display());
//! }
//! ```

pub mod catalog;
pub mod error;
pub mod price;
pub mod resolver;
pub mod search;
pub mod slug;
pub mod view;

pub use catalog::Catalog;
pub use error::CatalogError;
pub use price::Price;
pub use slug::BookSlug;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CatalogError;
    pub use crate::price::Price;
    pub use crate::slug::BookSlug;

    // Catalog
    pub use crate::catalog::{Book, BookDetails, Catalog, CatalogDocument, Testimonial};

    // Search
    pub use crate::search::{filter, FilterState, SEARCH_DEBOUNCE};

    // View
    pub use crate::view::{
        BookCardView, DetailView, FeaturedView, GridView, PageMetadata, TestimonialCard,
        TestimonialWall, TESTIMONIAL_LIMIT,
    };

    // Resolver
    pub use crate::resolver::resolve;
}
