// ============================================================================
// PRODUCT PAGE VIEW - Detalle, stock, carrito y favoritos
// ============================================================================

use crate::models::Product;
use crate::utils::escape_html;
use crate::views::product_card::{render_discount_badge, render_image, render_price};

const PRODUCT_DESCRIPTION: &str = "Premium sneakers from our latest collection. \
    Crafted with attention to detail and using the finest materials.";

fn render_stock(product: &Product) -> String {
    if product.in_stock() {
        format!(
            r#"<div class="stock in-stock">✓ In stock ({} available)</div>"#,
            product.quantity_available
        )
    } else {
        r#"<div class="stock out-of-stock">✗ Out of stock</div>"#.to_string()
    }
}

pub fn render_product_page(product: &Product, is_favorite: bool, currency: &str) -> String {
    let disabled = if product.in_stock() { "" } else { " disabled" };
    let favorite_label = if is_favorite {
        "♥ REMOVE FROM FAVORITES"
    } else {
        "♡ ADD TO FAVORITES"
    };

    format!(
        r#"<div class="product-page"><div class="product-layout"><div class="product-images">{image}</div><div class="product-details"><div class="product-brand">{brand}</div><h1 class="product-title">{name}</h1><div class="product-pricing">{price} {badge}</div>{stock}<div class="product-actions"><button class="btn-add-to-cart" data-action="add-to-cart" data-product-id="{id}"{disabled}>ADD TO CART</button><button class="btn-favorite" data-action="toggle-favorite" data-product-id="{id}">{favorite_label}</button></div><div class="product-description"><h3>Description</h3><p>{description}</p></div></div></div></div>"#,
        id = product.id,
        image = render_image(product.main_image_url.as_deref(), &product.name),
        brand = escape_html(product.brand_or_default()),
        name = escape_html(&product.name),
        price = render_price(product, currency),
        badge = render_discount_badge(product),
        stock = render_stock(product),
        description = PRODUCT_DESCRIPTION,
    )
}

pub fn render_product_not_found() -> String {
    r#"<div class="product-not-found"><p>Product not found</p></div>"#.to_string()
}
