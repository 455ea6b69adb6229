// ============================================================================
// CHECKOUT VIEWMODEL - Host (sendData) o fallback HTTP
// ============================================================================

use crate::bridge::Handoff;
use crate::models::{CheckoutRequest, OrderPayload};
use crate::router::{handle_navigation, NavigationSource};
use crate::state::AppContext;

pub const MSG_CART_EMPTY: &str = "Your cart is empty";
pub const MSG_PROCESSING: &str = "Processing your order...";
pub const MSG_ORDER_PLACED: &str = "Order placed successfully!";
pub const MSG_CHECKOUT_FAILED: &str = "Checkout failed. Please try again.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CheckoutOutcome {
    /// Carrito vacío: no se hizo ninguna llamada
    EmptyCart,
    /// Pedido entregado al host; la respuesta llega por el bot
    HandedToHost,
    /// Backend confirmó el pedido; carrito vaciado
    Completed,
    /// El carrito queda intacto
    Failed,
}

/// Entrega al host si está disponible. `false` → usar HTTP
fn hand_off_to_host(ctx: &AppContext) -> bool {
    if !ctx.bridge.is_ready() {
        return false;
    }
    let cart = ctx.store.cart();
    let user_id = ctx.store.user_info().id;
    let payload = OrderPayload::create_order(&cart, Some(user_id));
    let json = match serde_json::to_string(&payload) {
        Ok(json) => json,
        Err(e) => {
            log::error!("❌ [CHECKOUT] Error serializando pedido: {}", e);
            return false;
        }
    };
    ctx.bridge.submit_order(&json) == Handoff::Delivered
}

pub async fn checkout(ctx: &AppContext) -> CheckoutOutcome {
    if ctx.store.cart().is_empty() {
        ctx.surface.notify(MSG_CART_EMPTY);
        return CheckoutOutcome::EmptyCart;
    }

    if hand_off_to_host(ctx) {
        log::info!("📱 [CHECKOUT] Pedido enviado al host");
        ctx.surface.notify(MSG_PROCESSING);
        return CheckoutOutcome::HandedToHost;
    }

    let cart = ctx.store.cart();
    let user = ctx.store.user_info();
    let request = CheckoutRequest { cart: &cart, user: &user };
    log::info!("💳 [CHECKOUT] POST checkout: {} items, total {}", cart.items().len(), cart.total());

    match ctx.gateway.post_checkout(&request).await {
        Ok(()) => {
            log::info!("✅ [CHECKOUT] Pedido confirmado");
            ctx.surface.notify(MSG_ORDER_PLACED);
            ctx.store.clear_cart();
            handle_navigation(ctx, "/", NavigationSource::Programmatic).await;
            CheckoutOutcome::Completed
        }
        Err(e) => {
            log::error!("❌ [CHECKOUT] Falló: {}", e);
            ctx.surface.notify(MSG_CHECKOUT_FAILED);
            CheckoutOutcome::Failed
        }
    }
}
