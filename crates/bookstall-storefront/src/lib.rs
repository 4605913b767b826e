//! Bookstall Storefront
//!
//! A client-side rendered Leptos application over the
//! `bookstall-catalog` core:
//!
//! - Store screen: featured book, debounced search, tag filters,
//!   book grid, testimonial wall
//! - Detail screen: one book with extended attributes and page metadata
//!
//! There is no server component; the catalog is a static JSON document
//! fetched from the page's origin, and checkout is delegated to
//! external purchase links.

mod app;
mod fetch;
mod pages;

pub use app::App;
