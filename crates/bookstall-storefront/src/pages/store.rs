//! Store screen: featured book, search, tag filters, grid, testimonials.

use bookstall_catalog::prelude::*;
use bookstall_catalog::view::{EMPTY_GRID_HEADING, EMPTY_GRID_HINT, EMPTY_TESTIMONIALS};
use leptos::leptos_dom::helpers::{event_target_value, set_timeout_with_handle, TimeoutHandle};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::fetch::{fetch_catalog, CATALOG_PATH};

/// Store screen. Loads the catalog once per page view, then hands it to
/// the interactive storefront.
#[component]
pub fn StorePage() -> impl IntoView {
    let catalog = RwSignal::new(None::<Result<Catalog, CatalogError>>);
    spawn_local(async move {
        catalog.set(Some(fetch_catalog(CATALOG_PATH).await));
    });

    view! {
        {move || match catalog.get() {
            None => view! { <StoreSkeleton/> }.into_any(),
            Some(Err(_)) => view! { <LoadErrorState/> }.into_any(),
            Some(Ok(catalog)) => view! { <Store catalog/> }.into_any(),
        }}
    }
}

/// Interactive storefront over a loaded catalog. Owns the filter state;
/// the engine re-runs whenever it changes.
#[component]
fn Store(catalog: Catalog) -> impl IntoView {
    let featured = FeaturedView::from_catalog(&catalog);
    let tags = catalog.tags().to_vec();
    let wall = TestimonialWall::from_catalog(&catalog);

    let catalog = StoredValue::new(catalog);
    let state = RwSignal::new(FilterState::new());
    // Echo of what the visitor typed; the filter query updates debounced.
    let raw_query = RwSignal::new(String::new());
    let pending = StoredValue::new_local(None::<TimeoutHandle>);

    let visible = Memo::new(move |_| {
        state.with(|s| {
            catalog.with_value(|c| filter(c, s).into_iter().cloned().collect::<Vec<Book>>())
        })
    });

    let on_clear = Callback::new(move |_| {
        if let Some(handle) = pending.get_value() {
            handle.clear();
        }
        pending.set_value(None);
        raw_query.set(String::new());
        state.set(state.get_untracked().cleared());
    });

    view! {
        {featured.map(|featured| view! { <FeaturedBook featured/> })}

        <section class="store" id="books">
            <h2>"All Books"</h2>
            <div class="search-bar">
                <input
                    type="search"
                    placeholder="Search books..."
                    prop:value=move || raw_query.get()
                    // One handler, debounced; SEARCH_DEBOUNCE is the quiet period.
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        raw_query.set(value.clone());
                        if let Some(handle) = pending.get_value() {
                            handle.clear();
                        }
                        pending.set_value(
                            set_timeout_with_handle(
                                move || state.set(state.get_untracked().with_query(&value)),
                                SEARCH_DEBOUNCE,
                            )
                            .ok(),
                        );
                    }
                />
            </div>
            <TagFilters tags state/>
            <BookGrid books=visible on_clear/>
        </section>

        <TestimonialSection wall/>
    }
}

#[component]
fn FeaturedBook(featured: FeaturedView) -> impl IntoView {
    let detail_href = format!("/book?slug={}", featured.slug);

    view! {
        <section class="featured-book">
            <div class="featured-book-cover">
                <img src=featured.cover_image alt=featured.title.clone() loading="lazy"/>
            </div>
            <div class="featured-book-info">
                <h3>{featured.title}</h3>
                <p class="featured-book-subtitle">{featured.subtitle}</p>
                <p class="featured-book-description">{featured.description}</p>
                <div class="featured-book-price">{featured.price}</div>
                <div class="featured-book-tags">
                    {featured
                        .tags
                        .into_iter()
                        .map(|tag| view! { <span class="tag">{tag}</span> })
                        .collect::<Vec<_>>()}
                </div>
                <div class="featured-book-buttons">
                    <a href=featured.sample_href target="_blank" class="btn btn-secondary">"Read Sample"</a>
                    <a href=featured.purchase_href target="_blank" class="btn btn-primary">"Buy Now"</a>
                    <a href=detail_href class="btn btn-secondary">"Learn More"</a>
                </div>
            </div>
        </section>
    }
}

/// Tag filter chips. "All Books" clears the selection; each tag chip
/// toggles independently.
#[component]
fn TagFilters(tags: Vec<String>, state: RwSignal<FilterState>) -> impl IntoView {
    view! {
        <div class="tag-filters">
            <button
                class="tag-filter"
                class:active=move || !state.with(|s| s.has_active_tags())
                on:click=move |_| state.set(state.get_untracked().with_tags_cleared())
            >
                "All Books"
            </button>
            {tags
                .into_iter()
                .map(|tag| {
                    let label = tag.clone();
                    let toggled = tag.clone();
                    view! {
                        <button
                            class="tag-filter"
                            class:active=move || state.with(|s| s.is_tag_active(&tag))
                            on:click=move |_| {
                                state.set(state.get_untracked().with_tag_toggled(&toggled))
                            }
                        >
                            {label}
                        </button>
                    }
                })
                .collect::<Vec<_>>()}
        </div>
    }
}

#[component]
fn BookGrid(books: Memo<Vec<Book>>, on_clear: Callback<()>) -> impl IntoView {
    view! {
        <div class="books-grid">
            {move || {
                let list = books.get();
                match GridView::from_books(&list) {
                    GridView::Empty => view! { <EmptyGrid on_clear/> }.into_any(),
                    GridView::Cards(cards) => cards
                        .into_iter()
                        .map(|card| view! { <BookCard card/> })
                        .collect_view()
                        .into_any(),
                }
            }}
        </div>
    }
}

#[component]
fn BookCard(card: BookCardView) -> impl IntoView {
    let detail_href = format!("/book?slug={}", card.slug);

    view! {
        <div class="book-card">
            <img src=card.cover_image alt=card.title.clone() class="book-card-cover" loading="lazy"/>
            <div class="book-card-content">
                <h3 class="book-card-title">{card.title}</h3>
                <p class="book-card-description">{card.description}</p>
                <div class="book-card-price">{card.price}</div>
                <div class="book-card-tags">
                    {card
                        .tags
                        .into_iter()
                        .map(|tag| view! { <span class="tag">{tag}</span> })
                        .collect::<Vec<_>>()}
                </div>
                <div class="book-card-actions">
                    <a href=card.sample_href target="_blank" class="btn btn-secondary btn-small">"Read Sample"</a>
                    <a href=card.purchase_href target="_blank" class="btn btn-primary btn-small">"Buy Now"</a>
                    <a href=detail_href class="btn btn-secondary btn-small">"Details"</a>
                </div>
            </div>
        </div>
    }
}

/// Empty state when filtering leaves nothing; never a bare container.
#[component]
fn EmptyGrid(on_clear: Callback<()>) -> impl IntoView {
    view! {
        <div class="no-results">
            <h3>{EMPTY_GRID_HEADING}</h3>
            <p>{EMPTY_GRID_HINT}</p>
            <button class="btn btn-secondary" on:click=move |_| on_clear.run(())>
                "Clear Filters"
            </button>
        </div>
    }
}

#[component]
fn TestimonialSection(wall: TestimonialWall) -> impl IntoView {
    view! {
        <section class="testimonials" id="testimonials">
            <h2>"What Readers Say"</h2>
            <div class="testimonials-grid">
                {match wall {
                    TestimonialWall::Empty => view! {
                        <div class="no-testimonials">
                            <p>{EMPTY_TESTIMONIALS}</p>
                        </div>
                    }
                    .into_any(),
                    TestimonialWall::Cards(cards) => cards
                        .into_iter()
                        .map(|card| view! {
                            <div class="testimonial-card">
                                <p class="testimonial-text">"\u{201c}" {card.text} "\u{201d}"</p>
                                <div class="testimonial-author">
                                    <strong>{card.author}</strong>
                                    <small>"Reader of \"" {card.book_title} "\""</small>
                                </div>
                            </div>
                        })
                        .collect_view()
                        .into_any(),
                }}
            </div>
        </section>
    }
}

/// Loading placeholder shown while the catalog fetch is in flight.
#[component]
fn StoreSkeleton() -> impl IntoView {
    view! {
        <div class="books-grid">
            <CardSkeleton/>
            <CardSkeleton/>
            <CardSkeleton/>
            <CardSkeleton/>
        </div>
    }
}

#[component]
fn CardSkeleton() -> impl IntoView {
    view! {
        <div class="book-card skeleton">
            <div class="skeleton-block cover"></div>
            <div class="skeleton-block line"></div>
            <div class="skeleton-block line short"></div>
        </div>
    }
}

/// Inert error state; the load is never retried automatically.
#[component]
fn LoadErrorState() -> impl IntoView {
    view! {
        <div class="load-error">
            <p>"Error loading books. Please try again later."</p>
        </div>
    }
}
