// ============================================================================
// SEARCH VIEW - Overlay de búsqueda y resultados
// ============================================================================

use crate::models::Product;
use crate::utils::escape_html;
use crate::views::product_card::{display_price, render_image};

pub const SEARCH_OVERLAY_ID: &str = "search-overlay";
pub const SEARCH_INPUT_ID: &str = "search-input";
pub const SEARCH_RESULTS_ID: &str = "search-results";

pub fn render_search_overlay() -> String {
    format!(
        r#"<div class="search-close"><button data-action="close-search">×</button></div><h2>SEARCH</h2><input type="text" id="{SEARCH_INPUT_ID}" placeholder="ENTER SEARCH TERM..." autocomplete="off"><div id="{SEARCH_RESULTS_ID}"></div>"#
    )
}

/// Consulta vacía → sin resultados (contenedor vacío)
pub fn render_search_results(query: &str, results: &[Product], currency: &str) -> String {
    if query.trim().is_empty() {
        return String::new();
    }
    let cards: String = results
        .iter()
        .map(|p| {
            format!(
                r#"<div class="search-result" data-action="open-product" data-product-id="{id}"><div class="search-result-image">{image}</div><div class="search-result-brand">{brand}</div><div class="search-result-name">{name}</div><div class="search-result-price">{price}{currency}</div></div>"#,
                id = p.id,
                image = render_image(p.main_image_url.as_deref(), &p.name),
                brand = escape_html(p.brand_or_default()),
                name = escape_html(&p.name),
                price = escape_html(&display_price(Some(&p.formatted_price), p.price)),
                currency = escape_html(currency),
            )
        })
        .collect();
    format!(r#"<div class="search-grid">{}</div>"#, cards)
}
