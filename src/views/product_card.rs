// ============================================================================
// PRODUCT CARD VIEW - Tarjeta de producto (grid de catálogo, colección, búsqueda)
// ============================================================================

use crate::models::Product;
use crate::utils::{escape_html, format_amount};

/// Precio para mostrar: el formateado del backend o, si falta, el numérico
pub fn display_price(formatted: Option<&str>, raw: f64) -> String {
    match formatted {
        Some(s) if !s.trim().is_empty() => s.to_string(),
        _ => format_amount(raw),
    }
}

pub fn render_price(product: &Product, currency: &str) -> String {
    let regular = escape_html(&display_price(Some(&product.formatted_price), product.price));
    match product.discount_price {
        Some(discount) => {
            let discounted = escape_html(&display_price(product.formatted_discount_price.as_deref(), discount));
            format!(
                r#"<span class="original-price">{regular}{currency}</span> <span class="current-price">{discounted}{currency}</span>"#,
                currency = escape_html(currency),
            )
        }
        None => format!(
            r#"<span class="current-price">{regular}{currency}</span>"#,
            currency = escape_html(currency),
        ),
    }
}

fn discount_badge(percent: Option<u32>) -> String {
    match percent {
        Some(percent) if percent > 0 => format!(r#"<div class="discount-badge">-{}%</div>"#, percent),
        _ => String::new(),
    }
}

/// Tarjetas: basta con `discount_percent`, el backend no siempre manda el precio rebajado
pub fn render_card_discount_badge(product: &Product) -> String {
    discount_badge(product.discount_percent)
}

/// Página de producto: el badge acompaña al precio rebajado
pub fn render_discount_badge(product: &Product) -> String {
    if product.discount_price.is_none() {
        return String::new();
    }
    discount_badge(product.discount_percent)
}

pub fn render_image(url: Option<&str>, alt: &str) -> String {
    match url {
        Some(src) if !src.is_empty() => format!(
            r#"<img src="{}" alt="{}" loading="lazy">"#,
            escape_html(src),
            escape_html(alt)
        ),
        _ => String::new(),
    }
}

/// Tarjeta clicable → `/product/<id>`
pub fn render_product_card(product: &Product, currency: &str) -> String {
    format!(
        r#"<div class="product-card fade-in" data-action="open-product" data-product-id="{id}">{badge}<div class="product-image">{image}</div><div class="product-info"><div class="product-brand">{brand}</div><div class="product-name">{name}</div><div class="product-price">{price}</div></div></div>"#,
        id = product.id,
        badge = render_card_discount_badge(product),
        image = render_image(product.main_image_url.as_deref(), &product.name),
        brand = escape_html(product.brand_or_default()),
        name = escape_html(&product.name),
        price = render_price(product, currency),
    )
}

pub fn render_product_grid(products: &[Product], currency: &str) -> String {
    let cards: String = products.iter().map(|p| render_product_card(p, currency)).collect();
    format!(r#"<div class="product-grid">{}</div>"#, cards)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn discounted_card_strikes_the_original_price() {
        let mut product = Product::sample(3, "Runner", 1000.0);
        product.discount_price = Some(800.0);
        product.discount_percent = Some(20);
        product.formatted_price = "1 000".to_string();
        product.formatted_discount_price = Some("800".to_string());

        let html = render_product_card(&product, "₽");
        assert!(html.contains(r#"data-product-id="3""#));
        assert!(html.contains("-20%"));
        assert!(html.contains(r#"<span class="original-price">1 000₽</span>"#));
        assert!(html.contains("800₽"));
        assert!(html.contains("STONE"));
    }

    #[test]
    fn card_badge_needs_only_the_percent() {
        let product: Product = serde_json::from_str(
            r#"{"id":5,"name":"Slide","price":900,"price_formatted":"900","discount_percent":20}"#,
        )
        .unwrap();
        assert!(render_product_card(&product, "₽").contains(r#"<div class="discount-badge">-20%</div>"#));
        assert_eq!(render_discount_badge(&product), "");

        let mut plain = product.clone();
        plain.discount_percent = Some(0);
        assert!(!render_product_card(&plain, "₽").contains("discount-badge"));
    }

    #[test]
    fn untrusted_fields_are_escaped() {
        let mut product = Product::sample(1, "<script>x</script>", 10.0);
        product.brand = Some("\"Evil\"".to_string());
        product.main_image_url = Some("x\" onerror=\"alert(1)".to_string());

        let html = render_product_card(&product, "₽");
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("&quot;Evil&quot;"));
        assert!(!html.contains("onerror=\"alert"));
    }

    #[test]
    fn missing_formatted_price_falls_back_to_number() {
        let mut product = Product::sample(1, "A", 2500.0);
        product.formatted_price.clear();
        assert!(render_price(&product, "₽").contains("2,500₽"));
    }
}
