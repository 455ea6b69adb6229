// ============================================================================
// HOST BRIDGE - Integración opcional con el host de la mini-app
// ============================================================================
// Store y checkout llaman siempre al trait; sin host se usa NoopBridge
// ============================================================================

#[cfg(target_arch = "wasm32")]
pub mod telegram;

use std::rc::Rc;
use crate::models::{Cart, User};
use crate::utils::format_amount;

/// Resultado de entregar un pedido al host
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Handoff {
    /// El host recibió el pedido y se encarga del resto
    Delivered,
    /// No hay host: usar el checkout HTTP
    Unsupported,
}

/// Superficie consumida del host. Todos los métodos son opcionales
pub trait HostBridge {
    /// `true` si el host está presente e inicializado
    fn is_ready(&self) -> bool {
        false
    }

    /// expand + ready + tema + botones. Devuelve `true` si quedó inicializado
    fn initialize(&self) -> bool {
        false
    }

    fn expand(&self) {}

    fn ready(&self) {}

    fn current_user(&self) -> Option<User> {
        None
    }

    /// `initData` crudo (firmado por el host)
    fn init_payload(&self) -> Option<String> {
        None
    }

    fn on_theme_changed(&self, _callback: Box<dyn Fn(String)>) {}

    fn on_back_button(&self, _callback: Box<dyn Fn()>) {}

    fn set_main_button_text(&self, _text: &str) {}

    fn show_main_button(&self) {}

    fn hide_main_button(&self) {}

    /// Envía un payload arbitrario al host; devuelve `false` si no pudo
    fn send_data(&self, _data: &str) -> bool {
        false
    }

    fn show_alert(&self, _message: &str) {}

    fn show_confirm(&self, _message: &str, _callback: Box<dyn Fn(bool)>) {}

    fn close(&self) {}

    /// Botón principal según el carrito: total cuando hay items, oculto si vacío
    fn update_cart(&self, cart: &Cart, currency: &str) {
        if cart.is_empty() {
            self.hide_main_button();
        } else {
            self.set_main_button_text(&format!("CHECKOUT ({}{})", format_amount(cart.total()), currency));
            self.show_main_button();
        }
    }

    /// Entrega del pedido ya serializado (fire-and-forget)
    fn submit_order(&self, order_json: &str) -> Handoff {
        if self.is_ready() && self.send_data(order_json) {
            Handoff::Delivered
        } else {
            Handoff::Unsupported
        }
    }
}

/// Sin host: todo es no-op y el checkout cae al endpoint HTTP
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopBridge;

impl HostBridge for NoopBridge {}

/// Elige la implementación al arrancar
pub fn select_bridge() -> Rc<dyn HostBridge> {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(bridge) = telegram::TelegramBridge::detect() {
            log::info!("📱 [BRIDGE] Telegram WebApp detectado");
            return Rc::new(bridge);
        }
    }
    log::warn!("⚠️ [BRIDGE] Telegram WebApp SDK no cargado, usando NoopBridge");
    Rc::new(NoopBridge)
}
