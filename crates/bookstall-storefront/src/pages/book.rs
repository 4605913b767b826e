//! Book detail screen.

use bookstall_catalog::prelude::*;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_meta::{Meta, Title};
use leptos_router::components::Redirect;
use leptos_router::hooks::use_query_map;

use crate::fetch::{fetch_catalog, CATALOG_PATH};

/// Detail screen. Resolves the `slug` query parameter against a fresh
/// catalog load; an absent or unknown identifier redirects to the store
/// screen.
#[component]
pub fn BookPage() -> impl IntoView {
    let catalog = RwSignal::new(None::<Result<Catalog, CatalogError>>);
    spawn_local(async move {
        catalog.set(Some(fetch_catalog(CATALOG_PATH).await));
    });

    let query = use_query_map();

    view! {
        {move || match catalog.get() {
            None => view! { <DetailSkeleton/> }.into_any(),
            Some(Err(_)) => view! { <DetailErrorState/> }.into_any(),
            Some(Ok(catalog)) => {
                let slug = query.with(|q| q.get("slug"));
                match resolve(&catalog, slug.as_deref()) {
                    Ok(book) => {
                        let detail = DetailView::from_book(book);
                        let meta = PageMetadata::from_book(book);
                        view! { <BookDetail detail meta/> }.into_any()
                    }
                    Err(_) => view! { <Redirect path="/"/> }.into_any(),
                }
            }
        }}
    }
}

#[component]
fn BookDetail(detail: DetailView, meta: PageMetadata) -> impl IntoView {
    let DetailView {
        slug: _,
        title,
        subtitle,
        description,
        price,
        tags,
        cover_image,
        sample_href,
        purchase_href,
        pages,
        format,
        updated,
        language,
        testimonials,
    } = detail;

    view! {
        <Title text=format!("{} - Bookstall Books", meta.title)/>
        <Meta name="description" content=meta.description.clone()/>
        <Meta property="og:title" content=meta.title/>
        <Meta property="og:description" content=meta.description/>
        <Meta property="og:image" content=meta.cover_image/>

        <div class="book-detail">
            <div class="book-detail-cover">
                <img src=cover_image alt=title.clone() loading="lazy"/>
            </div>
            <div class="book-detail-info">
                <h1>{title}</h1>
                <p class="page-subtitle">{subtitle}</p>

                <div class="book-detail-description">
                    <h3>"Description"</h3>
                    <p>{description}</p>
                </div>

                <div class="book-detail-meta">
                    <MetaItem label="Pages" value=pages/>
                    <MetaItem label="Format" value=format/>
                    <MetaItem label="Last Updated" value=updated/>
                    <MetaItem label="Language" value=language/>
                </div>

                <div class="book-detail-tags">
                    <h3>"Topics Covered"</h3>
                    <div class="tags">
                        {tags
                            .into_iter()
                            .map(|tag| view! { <span class="tag">{tag}</span> })
                            .collect::<Vec<_>>()}
                    </div>
                </div>

                <div class="book-detail-price">
                    <h2>{price}</h2>
                    <p>"One-time payment, lifetime updates"</p>
                </div>

                <div class="book-detail-buttons">
                    <a href=sample_href target="_blank" class="btn btn-secondary">"Read Sample PDF"</a>
                    <a href=purchase_href target="_blank" class="btn btn-primary">"Buy Now"</a>
                </div>
            </div>
        </div>

        {(!testimonials.is_empty()).then(|| view! {
            <div class="testimonials-section">
                <h2>"What Readers Say"</h2>
                <div class="testimonials-grid">
                    {testimonials
                        .into_iter()
                        .map(|t| view! {
                            <div class="testimonial-card">
                                <p class="testimonial-text">"\u{201c}" {t.text} "\u{201d}"</p>
                                <div class="testimonial-author">{t.author}</div>
                            </div>
                        })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        })}

        <div class="back-link">
            <a href="/" class="btn btn-secondary">"\u{2190} Back to All Books"</a>
        </div>
    }
}

#[component]
fn MetaItem(label: &'static str, value: String) -> impl IntoView {
    view! {
        <div class="meta-item">
            <span class="meta-label">{label}</span>
            <span class="meta-value">{value}</span>
        </div>
    }
}

/// Loading placeholder shown while the catalog fetch is in flight.
#[component]
fn DetailSkeleton() -> impl IntoView {
    view! {
        <div class="book-detail skeleton">
            <div class="skeleton-block cover tall"></div>
            <div>
                <div class="skeleton-block line"></div>
                <div class="skeleton-block line short"></div>
                <div class="skeleton-block paragraph"></div>
            </div>
        </div>
    }
}

/// Inert error state; the load is never retried automatically.
#[component]
fn DetailErrorState() -> impl IntoView {
    view! {
        <div class="load-error">
            <h2>"Error Loading Book"</h2>
            <p>"Please try again later."</p>
            <a href="/" class="btn btn-primary">"Back to Store"</a>
        </div>
    }
}
