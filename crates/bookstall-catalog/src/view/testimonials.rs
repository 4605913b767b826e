//! Aggregated testimonial projection for the landing view.

use crate::catalog::Catalog;

/// Maximum number of testimonial cards on the landing view.
pub const TESTIMONIAL_LIMIT: usize = 6;

/// Empty-state message when no book has a testimonial.
pub const EMPTY_TESTIMONIALS: &str = "No testimonials yet. Be the first to review!";

/// One testimonial, tagged with its source book's title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestimonialCard {
    pub text: String,
    pub author: String,
    pub book_title: String,
}

/// The landing view's testimonial section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TestimonialWall {
    Cards(Vec<TestimonialCard>),
    Empty,
}

impl TestimonialWall {
    /// Collect every testimonial from every book in catalog order,
    /// truncated to [`TESTIMONIAL_LIMIT`].
    pub fn from_catalog(catalog: &Catalog) -> Self {
        let cards: Vec<TestimonialCard> = catalog
            .books()
            .iter()
            .flat_map(|book| {
                book.testimonials.iter().map(|t| TestimonialCard {
                    text: t.text.clone(),
                    author: t.author.clone(),
                    book_title: book.title.clone(),
                })
            })
            .take(TESTIMONIAL_LIMIT)
            .collect();

        if cards.is_empty() {
            TestimonialWall::Empty
        } else {
            TestimonialWall::Cards(cards)
        }
    }
}
