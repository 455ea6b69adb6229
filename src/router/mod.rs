// ============================================================================
// ROUTER - Path → página
// ============================================================================

pub mod click;
pub mod navigator;

pub use click::{classify_click, ClickIntent, ClickSnapshot};
pub use navigator::{handle_navigation, NavigationSource};

use crate::models::ProductId;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Route {
    Home,
    Catalog,
    Cart,
    Product(ProductId),
    NotFound,
}

impl Route {
    /// `/`, la ruta base (con o sin `/` final) → Home. Query y fragmento se ignoran
    pub fn from_path(path: &str, base_path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let base = base_path.trim_end_matches('/');

        if path.is_empty() || path == "/" || path == base_path || (!base.is_empty() && path == base) {
            return Route::Home;
        }

        match path.trim_end_matches('/') {
            "/catalog" => Route::Catalog,
            "/cart" => Route::Cart,
            other => match other.strip_prefix("/product/") {
                Some(id) => id.parse().map(Route::Product).unwrap_or(Route::NotFound),
                None => Route::NotFound,
            },
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Catalog => "/catalog".to_string(),
            Route::Cart => "/cart".to_string(),
            Route::Product(id) => format!("/product/{}", id),
            Route::NotFound => "/404".to_string(),
        }
    }
}

/// Path de un link ya resuelto por el navegador si es del mismo origen.
/// Query y fragmento no forman parte de la ruta
pub fn internal_path(resolved_href: &str, origin: &str) -> Option<String> {
    if origin.is_empty() || origin == "null" {
        return None;
    }
    let rest = resolved_href.strip_prefix(origin)?;
    if !(rest.is_empty() || rest.starts_with(['/', '?', '#'])) {
        return None;
    }
    match rest.split(['?', '#']).next().unwrap_or_default() {
        "" => Some("/".to_string()),
        path => Some(path.to_string()),
    }
}
