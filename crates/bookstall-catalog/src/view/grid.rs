//! Book grid projection.

use crate::catalog::Book;

/// Heading of the empty state shown when filtering leaves nothing.
pub const EMPTY_GRID_HEADING: &str = "No books found";

/// Hint line of the empty state.
pub const EMPTY_GRID_HINT: &str = "Try adjusting your search or filters";

/// A single card in the book grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookCardView {
    pub slug: String,
    pub title: String,
    pub description: String,
    /// Two-decimal display string, symbol prefixed.
    pub price: String,
    pub tags: Vec<String>,
    pub cover_image: String,
    pub sample_href: String,
    pub purchase_href: String,
}

impl BookCardView {
    /// Project a single book into a grid card.
    pub fn from_book(book: &Book) -> Self {
        Self {
            slug: book.slug.as_str().to_string(),
            title: book.title.clone(),
            description: book.description.clone(),
            price: book.price.display(),
            tags: book.tags.clone(),
            cover_image: book.cover_image.clone(),
            sample_href: book.sample_pdf.clone(),
            purchase_href: book.purchase_link.clone(),
        }
    }
}

/// The grid projection: cards, or an explicit empty state with a
/// clear-filters action. An empty filtered list never renders as a bare
/// empty container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridView {
    Cards(Vec<BookCardView>),
    Empty,
}

impl GridView {
    /// Project a filtered book list, preserving its order.
    pub fn from_books<'a, I>(books: I) -> Self
    where
        I: IntoIterator<Item = &'a Book>,
    {
        let cards: Vec<BookCardView> = books.into_iter().map(BookCardView::from_book).collect();
        if cards.is_empty() {
            GridView::Empty
        } else {
            GridView::Cards(cards)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::price::Price;
    use crate::slug::BookSlug;

    fn book(slug: &str) -> Book {
        Book {
            slug: BookSlug::new(slug),
            title: slug.to_string(),
            subtitle: String::new(),
            description: "description".to_string(),
            long_description: None,
            price: Price::from_cents(1999),
            tags: Vec::new(),
            cover_image: String::new(),
            sample_pdf: String::new(),
            purchase_link: String::new(),
            details: None,
            testimonials: Vec::new(),
            featured: false,
        }
    }

    #[test]
    fn test_empty_list_projects_empty_state() {
        assert_eq!(GridView::from_books([]), GridView::Empty);
    }

    #[test]
    fn test_cards_preserve_order() {
        let books = vec![book("a"), book("b"), book("c")];
        match GridView::from_books(&books) {
            GridView::Cards(cards) => {
                let slugs: Vec<&str> = cards.iter().map(|c| c.slug.as_str()).collect();
                assert_eq!(slugs, ["a", "b", "c"]);
            }
            GridView::Empty => panic!("expected cards"),
        }
    }
}
