// ============================================================================
// PAGE VIEWMODEL - Carga de datos por ruta → HTML de la página
// ============================================================================
// Devuelve el HTML; el navigator decide si se aplica (generación vigente)
// ============================================================================

use crate::error::StoreResult;
use crate::models::Widget;
use crate::router::Route;
use crate::state::AppContext;
use crate::views::{self, WidgetContext};

async fn load_home(ctx: &AppContext) -> String {
    // Los widgets se piden en cada visita; el catálogo solo si falta
    let widgets = match ctx.gateway.fetch_widgets().await {
        Some(widgets) if !widgets.is_empty() => widgets,
        _ => {
            log::warn!("⚠️ [PAGE] Sin widgets, usando hero por defecto");
            views::fallback_widgets()
        }
    };
    if widgets.iter().any(|w| matches!(w, Widget::Collection { .. })) {
        ctx.ensure_catalog().await;
    }
    let snapshot = ctx.catalog.snapshot();
    let widget_ctx = WidgetContext {
        featured: snapshot.featured(ctx.config.featured_products_limit),
        currency: &ctx.config.currency_symbol,
    };
    views::render_home(&widgets, &widget_ctx)
}

async fn load_catalog(ctx: &AppContext) -> String {
    ctx.ensure_catalog().await;
    let snapshot = ctx.catalog.snapshot();
    views::render_catalog(&snapshot.products, &ctx.config.currency_symbol)
}

async fn load_product(ctx: &AppContext, id: crate::models::ProductId) -> String {
    ctx.ensure_catalog().await;
    match ctx.catalog.product(id) {
        Some(product) => {
            views::render_product_page(&product, ctx.store.is_favorite(id), &ctx.config.currency_symbol)
        }
        None => {
            log::warn!("⚠️ [PAGE] Producto {} no encontrado", id);
            views::render_product_not_found()
        }
    }
}

pub async fn load_page(ctx: &AppContext, route: &Route) -> StoreResult<String> {
    log::debug!("📄 [PAGE] Cargando {:?}", route);
    let html = match route {
        Route::Home => load_home(ctx).await,
        Route::Catalog => load_catalog(ctx).await,
        Route::Cart => views::render_cart_page(&ctx.store.cart(), &ctx.config.currency_symbol),
        Route::Product(id) => load_product(ctx, *id).await,
        Route::NotFound => views::render_not_found(),
    };
    Ok(html)
}
