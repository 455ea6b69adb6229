// ============================================================================
// CATALOG VIEW
// ============================================================================

use crate::models::Product;
use crate::views::product_card::render_product_grid;

pub fn render_catalog(products: &[Product], currency: &str) -> String {
    format!(
        r#"<div class="catalog-page"><div class="catalog-inner"><h1 class="balenciaga-heading">CATALOG</h1><p class="text-muted">{} items available</p>{}</div></div>"#,
        products.len(),
        render_product_grid(products, currency),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_catalog_still_renders_grid() {
        let html = render_catalog(&[], "₽");
        assert!(html.contains("0 items available"));
        assert!(html.contains(r#"<div class="product-grid"></div>"#));
    }

    #[test]
    fn counts_every_product() {
        let products: Vec<_> = (1..=3).map(|id| Product::sample(id, "P", 1.0)).collect();
        let html = render_catalog(&products, "₽");
        assert!(html.contains("3 items available"));
        assert_eq!(html.matches(r#"data-action="open-product""#).count(), 3);
    }
}
