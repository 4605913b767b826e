//! View projections consumed by the presentation layer.
//!
//! Each projection is a pure function of catalog data that yields a
//! structured description of one screen section. The presentation layer
//! translates these into its visual tree and is responsible for
//! inserting every text field as a text node, so structural characters
//! in source data cannot break layout.

mod detail;
mod featured;
mod grid;
mod testimonials;

pub use detail::{DetailView, PageMetadata, DEFAULT_FORMAT, DEFAULT_LANGUAGE, UNKNOWN_FIELD};
pub use featured::FeaturedView;
pub use grid::{BookCardView, GridView, EMPTY_GRID_HEADING, EMPTY_GRID_HINT};
pub use testimonials::{
    TestimonialCard, TestimonialWall, EMPTY_TESTIMONIALS, TESTIMONIAL_LIMIT,
};
