// ============================================================================
// NAVIGATOR - Historial + placeholder + carga + commit si sigue vigente
// ============================================================================

use crate::router::Route;
use crate::state::AppContext;
use crate::viewmodels::load_page;
use crate::views;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavigationSource {
    /// Click en un link interno
    Link,
    /// Llamada desde código (checkout, tarjetas, API exportada)
    Programmatic,
    /// Atrás/adelante del navegador: no se empuja historial
    History,
}

/// Devuelve `true` si el HTML cargado llegó a aplicarse
pub async fn handle_navigation(ctx: &AppContext, path: &str, source: NavigationSource) -> bool {
    let token = ctx.navigation.begin();
    let route = Route::from_path(path, &ctx.config.base_path);
    log::info!("🧭 [ROUTER] {} → {:?} ({:?})", path, route, source);

    if source != NavigationSource::History {
        ctx.surface.push_history(path);
    }
    ctx.surface.render_page(&views::render_loading());

    let html = match load_page(ctx, &route).await {
        Ok(html) => html,
        Err(e) => {
            log::error!("❌ [ROUTER] Error cargando {}: {}", path, e);
            views::render_page_error()
        }
    };

    if !ctx.navigation.is_current(token) {
        log::debug!("⏭️ [ROUTER] Navegación a {} descartada (hay una más reciente)", path);
        return false;
    }
    ctx.surface.render_page(&html);
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use std::rc::Rc;
    use crate::state::NavigationTracker;
    use crate::test_support::{test_app, test_context, MockTransport, RecordingBridge};
    use crate::utils::PRODUCTS_ENDPOINT;

    #[test]
    fn loading_placeholder_precedes_the_page() {
        let (ctx, surface) = test_context(MockTransport::new());
        assert!(block_on(handle_navigation(&ctx, "/cart", NavigationSource::Link)));
        let pages = surface.pages();
        assert_eq!(pages.len(), 2);
        assert!(pages[0].contains("loading-page"));
        assert!(pages[1].contains("Your cart is empty"));
        assert_eq!(surface.history(), vec!["/cart".to_string()]);
    }

    #[test]
    fn back_forward_does_not_push_history() {
        let (ctx, surface) = test_context(MockTransport::new());
        block_on(handle_navigation(&ctx, "/unknown", NavigationSource::History));
        assert!(surface.history().is_empty());
        assert!(surface.last_page().unwrap().contains("Page not found"));
    }

    #[test]
    fn stale_navigation_is_discarded() {
        let tracker: Rc<std::cell::RefCell<Option<NavigationTracker>>> = Rc::default();
        let hook_tracker = tracker.clone();
        // Mientras el catálogo está en vuelo empieza otra navegación
        let transport = MockTransport::new()
            .respond(PRODUCTS_ENDPOINT, 200, r#"{"success":true,"products":[]}"#)
            .with_hook(move |_| {
                if let Some(t) = hook_tracker.borrow().as_ref() {
                    t.begin();
                }
            });
        let app = test_app(transport, RecordingBridge::absent());
        *tracker.borrow_mut() = Some(app.ctx.navigation.clone());

        let committed = block_on(handle_navigation(&app.ctx, "/catalog", NavigationSource::Link));
        assert!(!committed);
        let pages = app.surface.pages();
        assert_eq!(pages.len(), 1);
        assert!(!pages[0].contains("CATALOG"));
    }
}
