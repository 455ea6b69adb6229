// ============================================================================
// CART PAGE VIEW
// ============================================================================

use crate::models::{Cart, CartItem};
use crate::utils::{escape_html, format_amount, DEFAULT_BRAND};
use crate::views::product_card::render_image;

fn render_empty_cart() -> String {
    r#"<div class="cart-empty"><h1>CART</h1><p>Your cart is empty</p><a href="/catalog" class="btn-shop-now">SHOP NOW</a></div>"#.to_string()
}

fn render_cart_item(item: &CartItem, currency: &str) -> String {
    let brand = item.brand.as_deref().filter(|b| !b.is_empty()).unwrap_or(DEFAULT_BRAND);
    format!(
        r#"<div class="cart-item" data-product-id="{id}"><div class="cart-item-image">{image}</div><div class="cart-item-info"><div class="cart-item-brand">{brand}</div><div class="cart-item-name">{name}</div><div class="cart-item-controls"><div class="quantity"><button data-action="cart-decrease" data-product-id="{id}">−</button><span class="quantity-value">{quantity}</span><button data-action="cart-increase" data-product-id="{id}">+</button></div><div class="cart-item-total">{line_total}{currency}</div></div></div><button class="cart-item-remove" data-action="cart-remove" data-product-id="{id}">×</button></div>"#,
        id = item.id,
        image = render_image(item.image_url.as_deref(), &item.name),
        brand = escape_html(brand),
        name = escape_html(&item.name),
        quantity = item.quantity,
        line_total = format_amount(item.line_total()),
        currency = escape_html(currency),
    )
}

pub fn render_cart_page(cart: &Cart, currency: &str) -> String {
    if cart.is_empty() {
        return render_empty_cart();
    }
    let items: String = cart.items().iter().map(|i| render_cart_item(i, currency)).collect();
    format!(
        r#"<div class="cart-page"><h1>CART</h1><div class="cart-items">{items}</div><div class="cart-summary"><div class="cart-total"><span>TOTAL</span><span>{total}{currency}</span></div><button class="btn-checkout" data-action="checkout">PROCEED TO CHECKOUT</button></div></div>"#,
        total = format_amount(cart.total()),
        currency = escape_html(currency),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Product;

    #[test]
    fn empty_cart_links_to_catalog() {
        let html = render_cart_page(&Cart::new(), "₽");
        assert!(html.contains("Your cart is empty"));
        assert!(html.contains(r#"href="/catalog""#));
        assert!(!html.contains("PROCEED TO CHECKOUT"));
    }

    #[test]
    fn rows_show_quantity_controls_and_totals() {
        let mut cart = Cart::new();
        cart.add(&Product::sample(1, "Runner", 1200.0), 2);
        cart.add(&Product::sample(2, "Slide", 300.0), 1);

        let html = render_cart_page(&cart, "₽");
        assert_eq!(html.matches(r#"class="cart-item""#).count(), 2);
        assert!(html.contains(r#"data-action="cart-increase" data-product-id="1""#));
        assert!(html.contains(r#"data-action="cart-remove" data-product-id="2""#));
        assert!(html.contains("2,400₽"));
        assert!(html.contains("<span>2,700₽</span>"));
        assert!(html.contains(r#"data-action="checkout""#));
    }
}
