// ============================================================================
// PAGE SURFACE - Donde terminan los renders y avisos
// ============================================================================
// Viewmodels y store solo conocen el trait; DomSurface escribe en el DOM
// ============================================================================

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsValue;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;
use crate::dom::{body, document, get_element_by_id, query_all, set_display, window, ElementBuilder};
use crate::error::{StoreError, StoreResult};
use crate::utils::{escape_html, PAGE_CONTAINER_ID};
use crate::views::search::{render_search_overlay, SEARCH_INPUT_ID, SEARCH_OVERLAY_ID, SEARCH_RESULTS_ID};

const NOTIFICATION_STYLES_ID: &str = "notification-styles";
const NOTIFICATION_EXIT_MS: u32 = 300;
const NOTIFICATION_STYLES: &str = "\
@keyframes slideUp { from { transform: translate(-50%, 100%); opacity: 0; } to { transform: translate(-50%, 0); opacity: 1; } }\n\
@keyframes slideDown { from { transform: translate(-50%, 0); opacity: 1; } to { transform: translate(-50%, 100%); opacity: 0; } }";

pub trait PageSurface {
    /// Reemplaza el contenido de la página actual
    fn render_page(&self, html: &str);

    /// Actualiza todos los indicadores `.cart-count`
    fn refresh_cart_badge(&self, count: u32);

    /// Toast temporal
    fn notify(&self, message: &str);

    fn push_history(&self, path: &str);

    fn open_search(&self) {}

    fn close_search(&self) {}

    fn show_search_results(&self, _html: &str) {}
}

pub struct DomSurface {
    notification_ms: u32,
}

impl DomSurface {
    pub fn new(notification_ms: u32) -> Self {
        Self { notification_ms }
    }

    fn try_render_page(&self, html: &str) -> StoreResult<()> {
        let container = get_element_by_id(PAGE_CONTAINER_ID)
            .ok_or_else(|| StoreError::Dom(format!("#{} no existe", PAGE_CONTAINER_ID)))?;
        container.set_inner_html(html);
        if let Some(window) = window() {
            window.scroll_to_with_x_and_y(0.0, 0.0);
        }
        Ok(())
    }

    fn ensure_notification_styles(&self) -> StoreResult<()> {
        if get_element_by_id(NOTIFICATION_STYLES_ID).is_some() {
            return Ok(());
        }
        let head = document()
            .and_then(|d| d.head())
            .ok_or_else(|| StoreError::Dom("No <head>".to_string()))?;
        ElementBuilder::new("style")?
            .id(NOTIFICATION_STYLES_ID)
            .text(NOTIFICATION_STYLES)
            .append_to(&head)?;
        Ok(())
    }

    fn try_notify(&self, message: &str) -> StoreResult<()> {
        self.ensure_notification_styles()?;
        let body = body().ok_or_else(|| StoreError::Dom("No <body>".to_string()))?;
        let toast = ElementBuilder::new("div")?
            .class("stone-notification")
            .html(&format!(
                r#"<div class="stone-notification-inner" style="position: fixed; bottom: 24px; left: 50%; transform: translateX(-50%); z-index: 9999; animation: slideUp 0.3s ease;">{}</div>"#,
                escape_html(message)
            ))
            .append_to(&body)?;

        Timeout::new(self.notification_ms, move || {
            if let Some(inner) = toast.first_element_child().and_then(|e| e.dyn_into::<HtmlElement>().ok()) {
                let _ = inner.style().set_property("animation", "slideDown 0.3s ease");
            }
            Timeout::new(NOTIFICATION_EXIT_MS, move || toast.remove()).forget();
        })
        .forget();
        Ok(())
    }

    fn try_open_search(&self) -> StoreResult<()> {
        if get_element_by_id(SEARCH_OVERLAY_ID).is_some() {
            return Ok(());
        }
        let body = body().ok_or_else(|| StoreError::Dom("No <body>".to_string()))?;
        ElementBuilder::new("div")?
            .id(SEARCH_OVERLAY_ID)
            .class("search-overlay")
            .html(&render_search_overlay())
            .append_to(&body)?;
        if let Some(input) = get_element_by_id(SEARCH_INPUT_ID).and_then(|e| e.dyn_into::<HtmlElement>().ok()) {
            input.focus()?;
        }
        Ok(())
    }
}

impl PageSurface for DomSurface {
    fn render_page(&self, html: &str) {
        if let Err(e) = self.try_render_page(html) {
            log::error!("❌ [DOM] {}", e);
        }
    }

    fn refresh_cart_badge(&self, count: u32) {
        match query_all(".cart-count") {
            Ok(badges) => {
                for badge in badges {
                    badge.set_text_content(Some(&count.to_string()));
                    set_display(&badge, count > 0, "inline");
                }
            }
            Err(e) => log::error!("❌ [DOM] Badge del carrito: {}", e),
        }
    }

    fn notify(&self, message: &str) {
        if let Err(e) = self.try_notify(message) {
            log::error!("❌ [DOM] Notificación '{}': {}", message, e);
        }
    }

    fn push_history(&self, path: &str) {
        let pushed = window()
            .ok_or_else(|| JsValue::from_str("No window"))
            .and_then(|w| w.history())
            .and_then(|h| h.push_state_with_url(&JsValue::NULL, "", Some(path)));
        if let Err(e) = pushed {
            log::error!("❌ [DOM] pushState {}: {:?}", path, e);
        }
    }

    fn open_search(&self) {
        if let Err(e) = self.try_open_search() {
            log::error!("❌ [DOM] Overlay de búsqueda: {}", e);
        }
    }

    fn close_search(&self) {
        if let Some(overlay) = get_element_by_id(SEARCH_OVERLAY_ID) {
            overlay.remove();
        }
    }

    fn show_search_results(&self, html: &str) {
        if let Some(results) = get_element_by_id(SEARCH_RESULTS_ID) {
            results.set_inner_html(html);
        }
    }
}
