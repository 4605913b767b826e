//! Catalog fetch over the browser fetch API.

use bookstall_catalog::{Catalog, CatalogError};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::Response;

/// Relative path of the catalog document, resolved from the page's
/// origin.
pub const CATALOG_PATH: &str = "/data/books.json";

/// Fetch and parse the catalog document. One invocation per page view;
/// no retry, no cache. Any failure surfaces as a [`CatalogError`] for
/// the screen to render as an inert error state.
pub async fn fetch_catalog(path: &str) -> Result<Catalog, CatalogError> {
    let window = web_sys::window().ok_or_else(|| load_error(0, path))?;

    let value = JsFuture::from(window.fetch_with_str(path))
        .await
        .map_err(|_| load_error(0, path))?;
    let response: Response = value.dyn_into().map_err(|_| load_error(0, path))?;

    if !response.ok() {
        return Err(load_error(response.status(), path));
    }

    let text = JsFuture::from(response.text().map_err(|_| load_error(response.status(), path))?)
        .await
        .map_err(|_| load_error(response.status(), path))?;
    let source = text
        .as_string()
        .ok_or_else(|| load_error(response.status(), path))?;

    Catalog::from_json(&source)
}

// Status 0 marks a failure before any HTTP response arrived.
fn load_error(status: u16, path: &str) -> CatalogError {
    CatalogError::Load {
        status,
        path: path.to_string(),
    }
}
