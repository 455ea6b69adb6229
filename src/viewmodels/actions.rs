// ============================================================================
// UI ACTIONS - `data-action` de los botones → operaciones del store
// ============================================================================

use crate::models::ProductId;
use crate::router::{handle_navigation, NavigationSource, Route};
use crate::state::AppContext;
use crate::viewmodels::checkout;
use crate::views;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UiAction {
    OpenProduct(ProductId),
    AddToCart(ProductId),
    ToggleFavorite(ProductId),
    CartIncrease(ProductId),
    CartDecrease(ProductId),
    CartRemove(ProductId),
    Checkout,
    CloseSearch,
}

impl UiAction {
    /// `data-action` + `data-product-id` opcional
    pub fn parse(action: &str, product_id: Option<&str>) -> Option<Self> {
        let id = || product_id.and_then(|id| id.trim().parse::<ProductId>().ok());
        match action {
            "open-product" => id().map(UiAction::OpenProduct),
            "add-to-cart" => id().map(UiAction::AddToCart),
            "toggle-favorite" => id().map(UiAction::ToggleFavorite),
            "cart-increase" => id().map(UiAction::CartIncrease),
            "cart-decrease" => id().map(UiAction::CartDecrease),
            "cart-remove" => id().map(UiAction::CartRemove),
            "checkout" => Some(UiAction::Checkout),
            "close-search" => Some(UiAction::CloseSearch),
            _ => None,
        }
    }
}

fn rerender_cart(ctx: &AppContext) {
    ctx.surface.render_page(&views::render_cart_page(&ctx.store.cart(), &ctx.config.currency_symbol));
}

fn change_quantity(ctx: &AppContext, id: ProductId, delta: i64) {
    let Some(current) = ctx.store.cart().item(id).map(|i| i64::from(i.quantity)) else {
        return;
    };
    ctx.store.update_quantity(id, current + delta);
    rerender_cart(ctx);
}

pub async fn dispatch_action(ctx: &AppContext, action: UiAction) {
    log::debug!("👆 [ACTION] {:?}", action);
    match action {
        UiAction::OpenProduct(id) => {
            ctx.surface.close_search();
            handle_navigation(ctx, &Route::Product(id).path(), NavigationSource::Programmatic).await;
        }
        UiAction::AddToCart(id) => match ctx.catalog.product(id) {
            Some(product) => ctx.store.add_to_cart(&product, 1),
            None => log::warn!("⚠️ [ACTION] Producto {} no está en el catálogo", id),
        },
        UiAction::ToggleFavorite(id) => {
            let is_favorite = ctx.store.toggle_favorite(id);
            if let Some(product) = ctx.catalog.product(id) {
                ctx.surface.render_page(&views::render_product_page(
                    &product,
                    is_favorite,
                    &ctx.config.currency_symbol,
                ));
            }
        }
        UiAction::CartIncrease(id) => change_quantity(ctx, id, 1),
        UiAction::CartDecrease(id) => change_quantity(ctx, id, -1),
        UiAction::CartRemove(id) => {
            ctx.store.remove_from_cart(id);
            rerender_cart(ctx);
        }
        UiAction::Checkout => {
            checkout(ctx).await;
        }
        UiAction::CloseSearch => ctx.surface.close_search(),
    }
}

/// Resultados para la consulta actual del overlay
pub fn search_products(ctx: &AppContext, query: &str) -> String {
    let results = ctx.catalog.search(query);
    views::render_search_results(query, &results, &ctx.config.currency_symbol)
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use crate::models::{CatalogSnapshot, Product};
    use crate::test_support::{test_context, MockTransport};

    fn seeded() -> (AppContext, std::rc::Rc<crate::test_support::RecordingSurface>) {
        let (ctx, surface) = test_context(MockTransport::new());
        let mut runner = Product::sample(1, "Runner", 100.0);
        runner.brand = Some("Balenciaga".to_string());
        ctx.catalog.replace(CatalogSnapshot {
            products: vec![runner, Product::sample(2, "Slide", 50.0)],
            ..CatalogSnapshot::default()
        });
        (ctx, surface)
    }

    #[test]
    fn parses_actions_with_ids() {
        assert_eq!(UiAction::parse("add-to-cart", Some("7")), Some(UiAction::AddToCart(7)));
        assert_eq!(UiAction::parse("checkout", None), Some(UiAction::Checkout));
        assert_eq!(UiAction::parse("close-search", None), Some(UiAction::CloseSearch));
        assert_eq!(UiAction::parse("add-to-cart", Some("x")), None);
        assert_eq!(UiAction::parse("cart-remove", None), None);
        assert_eq!(UiAction::parse("explode", Some("1")), None);
    }

    #[test]
    fn quantity_buttons_never_go_below_one() {
        let (ctx, surface) = seeded();
        block_on(dispatch_action(&ctx, UiAction::AddToCart(1)));
        block_on(dispatch_action(&ctx, UiAction::CartIncrease(1)));
        assert_eq!(ctx.store.cart_count(), 2);
        block_on(dispatch_action(&ctx, UiAction::CartDecrease(1)));
        block_on(dispatch_action(&ctx, UiAction::CartDecrease(1)));
        assert_eq!(ctx.store.cart_count(), 1);
        assert!(surface.last_page().unwrap().contains("cart-item"));

        block_on(dispatch_action(&ctx, UiAction::CartRemove(1)));
        assert!(surface.last_page().unwrap().contains("Your cart is empty"));
    }

    #[test]
    fn favorite_toggle_rerenders_product_page() {
        let (ctx, surface) = seeded();
        block_on(dispatch_action(&ctx, UiAction::ToggleFavorite(2)));
        assert!(ctx.store.is_favorite(2));
        assert!(surface.last_page().unwrap().contains("♥ REMOVE FROM FAVORITES"));
    }

    #[test]
    fn search_filters_by_name_or_brand() {
        let (ctx, _surface) = seeded();
        let html = search_products(&ctx, "balen");
        assert!(html.contains(r#"data-product-id="1""#));
        assert!(!html.contains(r#"data-product-id="2""#));
        assert_eq!(search_products(&ctx, ""), "");
    }
}
