//! Application shell: router, layout, navigation.

use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Meta, Stylesheet, Title};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::pages::{BookPage, StorePage};

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let fallback = || view! { <NotFound/> }.into_view();

    view! {
        <Stylesheet id="bookstall" href="/style/main.css"/>
        <Meta name="description" content="Bookstall - true stories from the front lines of cybercrime"/>
        <Title text="Bookstall Books"/>

        <Router>
            <Header/>
            <main>
                <Routes fallback>
                    <Route path=path!("") view=StorePage/>
                    <Route path=path!("/book") view=BookPage/>
                    <Route path=path!("/*any") view=NotFound/>
                </Routes>
            </main>
            <Footer/>
        </Router>
    }
}

/// Site header with the mobile menu toggle. The menu closes when a link
/// is followed.
#[component]
fn Header() -> impl IntoView {
    let (menu_open, set_menu_open) = signal(false);
    let close = move |_: leptos::ev::MouseEvent| set_menu_open.set(false);

    view! {
        <header>
            <a href="/" class="logo">"Bookstall"</a>
            <button
                class="mobile-menu-btn"
                aria-label="Toggle navigation"
                on:click=move |_| set_menu_open.update(|open| *open = !*open)
            >
                {move || if menu_open.get() { "\u{2715}" } else { "\u{2630}" }}
            </button>
            <nav class="nav-links" class:active=move || menu_open.get()>
                <a href="/" on:click=close>"Books"</a>
                <a href="/#testimonials" on:click=close>"Testimonials"</a>
            </nav>
        </header>
    }
}

#[component]
fn Footer() -> impl IntoView {
    view! {
        <footer>
            <p>"Bookstall - field guides for cybercrime fighters"</p>
        </footer>
    }
}

/// Fallback for unknown routes.
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="not-found">
            <h1>"404"</h1>
            <p>"Page not found"</p>
            <a href="/">"Back to the store"</a>
        </div>
    }
}
