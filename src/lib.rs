// ============================================================================
// STONE STORE - Cliente de la mini-app (RUST PURO + WASM)
// ============================================================================
// - Views: funciones puras datos → HTML
// - ViewModels: carga de páginas, acciones y checkout
// - Services: SOLO comunicación HTTP
// - State: carrito/favoritos persistidos + catálogo en memoria (Rc<RefCell>)
// - Bridge: host de la mini-app (Telegram WebApp) detrás de un trait
// ============================================================================

pub mod config;
pub mod error;
pub mod models;
pub mod utils;
pub mod bridge;
pub mod services;
pub mod state;
pub mod router;
pub mod views;
pub mod viewmodels;
pub mod dom;
pub mod app;

#[cfg(test)]
mod test_support;

use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use crate::app::App;
use crate::config::CONFIG;

// Instancia global de la app (solo en la frontera wasm)
thread_local! {
    static APP: RefCell<Option<App>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::new(CONFIG.log_level()));
    log::info!("🚀 Stone Store WebApp - Rust + WASM");

    let app = App::new().map_err(|e| JsValue::from_str(&e.to_string()))?;
    app.start().map_err(|e| JsValue::from_str(&e.to_string()))?;

    APP.with(|cell| {
        *cell.borrow_mut() = Some(app);
    });
    Ok(())
}

fn with_app(f: impl FnOnce(&App)) {
    APP.with(|cell| match cell.borrow().as_ref() {
        Some(app) => f(app),
        None => log::warn!("⚠️ [MAIN] App no está inicializada"),
    });
}

/// Navegación programática (llamable desde JavaScript)
#[wasm_bindgen]
pub fn navigate_to(path: String) {
    with_app(|app| app.navigate(&path));
}

#[wasm_bindgen]
pub fn checkout() {
    with_app(|app| app.checkout());
}

#[wasm_bindgen]
pub fn cart_count() -> u32 {
    let mut count = 0;
    with_app(|app| count = app.context().store.cart_count());
    count
}
