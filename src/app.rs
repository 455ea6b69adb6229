// ============================================================================
// APP - Arranque, listeners globales y puente con el router
// ============================================================================

use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, HtmlAnchorElement, HtmlInputElement, MouseEvent};
use crate::bridge::select_bridge;
use crate::config::CONFIG;
use crate::dom::{closest_with_attribute, current_pathname, document, on_click, on_input, on_popstate, window, DomSurface, PageSurface};
use crate::error::{StoreError, StoreResult};
use crate::router::click::LinkTarget;
use crate::router::{classify_click, handle_navigation, ClickIntent, ClickSnapshot, NavigationSource};
use crate::services::GlooTransport;
use crate::state::AppContext;
use crate::utils::storage::{KeyValueStore, LocalStorageStore, MemoryStore};
use crate::viewmodels::{checkout, dispatch_action, search_products};
use crate::views::search::SEARCH_INPUT_ID;

pub struct App {
    ctx: AppContext,
}

fn select_storage() -> Rc<dyn KeyValueStore> {
    if LocalStorageStore::is_available() {
        Rc::new(LocalStorageStore)
    } else {
        log::warn!("⚠️ [APP] localStorage no disponible, usando memoria");
        Rc::new(MemoryStore::new())
    }
}

/// Navegación en segundo plano (el placeholder sale antes del fetch)
fn spawn_navigation(ctx: &AppContext, path: String, source: NavigationSource) {
    let ctx = ctx.clone();
    spawn_local(async move {
        handle_navigation(&ctx, &path, source).await;
    });
}

fn location_origin() -> String {
    window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_default()
}

/// Lee el DOM alrededor del target y ejecuta la decisión de `classify_click`
fn handle_click(ctx: &AppContext, event: &MouseEvent) {
    let Some(target) = event.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
        return;
    };

    let action_el = closest_with_attribute(&target, "data-action");
    let action = action_el.as_ref().and_then(|el| el.get_attribute("data-action"));
    let product_id = action_el.as_ref().and_then(|el| el.get_attribute("data-product-id"));
    let anchor = target
        .closest("a[href]")
        .ok()
        .flatten()
        .and_then(|a| a.dyn_into::<HtmlAnchorElement>().ok());
    let resolved_href = anchor.as_ref().map(|a| a.href());

    let snapshot = ClickSnapshot {
        action: action.as_deref(),
        product_id: product_id.as_deref(),
        in_nav_cart: target.closest(".nav-cart").ok().flatten().is_some(),
        in_nav_search: target.closest(".nav-search").ok().flatten().is_some(),
        link: resolved_href.as_deref().map(|href| LinkTarget {
            resolved_href: href,
            new_tab: anchor.as_ref().is_some_and(|a| a.target() == "_blank"),
        }),
        modified: event.ctrl_key() || event.meta_key() || event.shift_key(),
    };

    match classify_click(&snapshot, &location_origin()) {
        ClickIntent::Action(action) => {
            event.prevent_default();
            let ctx = ctx.clone();
            spawn_local(async move { dispatch_action(&ctx, action).await });
        }
        ClickIntent::UnknownAction(action) => log::warn!("⚠️ [APP] data-action desconocida: {}", action),
        ClickIntent::OpenCart => {
            event.prevent_default();
            spawn_navigation(ctx, "/cart".to_string(), NavigationSource::Link);
        }
        ClickIntent::OpenSearch => {
            event.prevent_default();
            ctx.surface.open_search();
        }
        ClickIntent::FollowLink(path) => {
            event.prevent_default();
            ctx.surface.close_search();
            spawn_navigation(ctx, path, NavigationSource::Link);
        }
        ClickIntent::Passthrough => {}
    }
}

impl App {
    pub fn new() -> StoreResult<Self> {
        let config = CONFIG.clone();
        let surface: Rc<dyn PageSurface> = Rc::new(DomSurface::new(config.notification_duration_ms));
        let ctx = AppContext::new(
            config,
            select_storage(),
            Rc::new(GlooTransport),
            select_bridge(),
            surface,
        );
        log::info!("🛒 [APP] Carrito inicial: {} unidades", ctx.store.cart_count());
        Ok(Self { ctx })
    }

    pub fn context(&self) -> &AppContext {
        &self.ctx
    }

    /// Host, badge, listeners y primera página
    pub fn start(&self) -> StoreResult<()> {
        if self.ctx.bridge.initialize() {
            log::info!("📱 [APP] Host inicializado");
        }
        let cart = self.ctx.store.cart();
        self.ctx.surface.refresh_cart_badge(cart.item_count());
        self.ctx.bridge.update_cart(&cart, &self.ctx.config.currency_symbol);

        self.install_listeners()?;

        // Primera carga: catálogo completo y la ruta actual (sin pushState)
        let ctx = self.ctx.clone();
        spawn_local(async move {
            ctx.ensure_catalog().await;
            handle_navigation(&ctx, &current_pathname(), NavigationSource::History).await;
        });
        Ok(())
    }

    fn install_listeners(&self) -> StoreResult<()> {
        let doc = document().ok_or_else(|| StoreError::Dom("No document".to_string()))?;
        let win = window().ok_or_else(|| StoreError::Dom("No window".to_string()))?;

        let ctx = self.ctx.clone();
        on_click(&doc, move |event| handle_click(&ctx, &event))?;

        let ctx = self.ctx.clone();
        on_input(&doc, move |event| {
            let Some(input) = event.target().and_then(|t| t.dyn_into::<HtmlInputElement>().ok()) else {
                return;
            };
            if input.id() == SEARCH_INPUT_ID {
                ctx.surface.show_search_results(&search_products(&ctx, &input.value()));
            }
        })?;

        let ctx = self.ctx.clone();
        on_popstate(&win, move |_| {
            spawn_navigation(&ctx, current_pathname(), NavigationSource::History);
        })?;

        log::info!("👂 [APP] Listeners globales registrados");
        Ok(())
    }

    pub fn navigate(&self, path: &str) {
        spawn_navigation(&self.ctx, path.to_string(), NavigationSource::Programmatic);
    }

    pub fn checkout(&self) {
        let ctx = self.ctx.clone();
        spawn_local(async move {
            checkout(&ctx).await;
        });
    }
}
