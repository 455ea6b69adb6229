// ============================================================================
// TELEGRAM WEBAPP FFI - window.Telegram.WebApp
// ============================================================================
// Wrappers de la API JS del host + TelegramBridge
// ============================================================================

use std::cell::{Cell, RefCell};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use crate::bridge::HostBridge;
use crate::models::User;
use crate::models::api::MainButtonPayload;

#[wasm_bindgen]
extern "C" {
    pub type WebApp;

    #[wasm_bindgen(method)]
    fn expand(this: &WebApp);

    #[wasm_bindgen(method)]
    fn ready(this: &WebApp);

    #[wasm_bindgen(method)]
    fn close(this: &WebApp);

    #[wasm_bindgen(method, getter)]
    fn platform(this: &WebApp) -> Option<String>;

    #[wasm_bindgen(method, getter, js_name = colorScheme)]
    fn color_scheme(this: &WebApp) -> Option<String>;

    #[wasm_bindgen(method, getter, js_name = initData)]
    fn init_data(this: &WebApp) -> Option<String>;

    #[wasm_bindgen(method, getter, js_name = initDataUnsafe)]
    fn init_data_unsafe(this: &WebApp) -> JsValue;

    #[wasm_bindgen(method, js_name = onEvent)]
    fn on_event(this: &WebApp, event: &str, callback: &js_sys::Function);

    #[wasm_bindgen(method, catch, js_name = sendData)]
    fn send_data(this: &WebApp, data: &str) -> Result<(), JsValue>;

    #[wasm_bindgen(method, getter, js_name = MainButton)]
    fn main_button(this: &WebApp) -> Option<HostButton>;

    #[wasm_bindgen(method, getter, js_name = BackButton)]
    fn back_button(this: &WebApp) -> Option<HostButton>;

    pub type HostButton;

    #[wasm_bindgen(method)]
    fn show(this: &HostButton);

    #[wasm_bindgen(method)]
    fn hide(this: &HostButton);

    #[wasm_bindgen(method, js_name = setText)]
    fn set_text(this: &HostButton, text: &str);

    #[wasm_bindgen(method, js_name = setParams)]
    fn set_params(this: &HostButton, params: &JsValue);

    #[wasm_bindgen(method, js_name = onClick)]
    fn on_click(this: &HostButton, callback: &js_sys::Function);
}

/// Lee `window.Telegram.WebApp` sin lanzar si no existe
fn lookup_web_app() -> Option<WebApp> {
    let window = web_sys::window()?;
    let telegram = js_sys::Reflect::get(&window, &JsValue::from_str("Telegram")).ok()?;
    if telegram.is_undefined() || telegram.is_null() {
        return None;
    }
    let web_app = js_sys::Reflect::get(&telegram, &JsValue::from_str("WebApp")).ok()?;
    if web_app.is_undefined() || web_app.is_null() {
        return None;
    }
    Some(web_app.unchecked_into::<WebApp>())
}

/// Comprueba si el objeto JS tiene un método con ese nombre
fn has_method(target: &JsValue, name: &str) -> bool {
    js_sys::Reflect::get(target, &JsValue::from_str(name))
        .map(|v| v.is_function())
        .unwrap_or(false)
}

fn set_document_theme(theme: &str) {
    if let Some(root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    {
        let _ = root.set_attribute("data-theme", theme);
    }
}

pub struct TelegramBridge {
    web_app: WebApp,
    initialized: Cell<bool>,
    user: RefCell<Option<User>>,
    init_data: RefCell<Option<String>>,
}

impl TelegramBridge {
    pub fn detect() -> Option<Self> {
        lookup_web_app().map(|web_app| Self {
            web_app,
            initialized: Cell::new(false),
            user: RefCell::new(None),
            init_data: RefCell::new(None),
        })
    }

    fn read_user(&self) -> Option<User> {
        let unsafe_data = self.web_app.init_data_unsafe();
        let user = js_sys::Reflect::get(&unsafe_data, &JsValue::from_str("user")).ok()?;
        if user.is_undefined() || user.is_null() {
            return None;
        }
        let json: String = js_sys::JSON::stringify(&user).ok()?.into();
        serde_json::from_str(&json)
            .map_err(|e| log::warn!("⚠️ [BRIDGE] Usuario del host ilegible: {}", e))
            .ok()
    }

    fn setup_theme(&self) {
        let theme = self.web_app.color_scheme().unwrap_or_else(|| "dark".to_string());
        set_document_theme(&theme);
        self.on_theme_changed(Box::new(|theme| set_document_theme(&theme)));
    }

    fn setup_back_button(&self) {
        self.on_back_button(Box::new(|| {
            if let Some(history) = web_sys::window().and_then(|w| w.history().ok()) {
                let _ = history.back();
            }
        }));
        if let Some(button) = self.web_app.back_button() {
            button.show();
        }
    }

    fn setup_main_button(&self) {
        let Some(button) = self.web_app.main_button() else {
            return;
        };
        button.set_text("CHECKOUT");

        let params = js_sys::Object::new();
        let _ = js_sys::Reflect::set(&params, &"color".into(), &"#FFFFFF".into());
        let _ = js_sys::Reflect::set(&params, &"text_color".into(), &"#000000".into());
        button.set_params(&params);

        let web_app = self.web_app.clone();
        let closure = Closure::wrap(Box::new(move || {
            match serde_json::to_string(&MainButtonPayload::checkout()) {
                Ok(json) => {
                    if let Err(e) = web_app.send_data(&json) {
                        log::error!("❌ [BRIDGE] sendData falló: {:?}", e);
                    }
                }
                Err(e) => log::error!("❌ [BRIDGE] Error serializando payload: {}", e),
            }
        }) as Box<dyn FnMut()>);
        button.on_click(closure.as_ref().unchecked_ref());
        // El botón vive lo mismo que la app
        closure.forget();
    }
}

impl HostBridge for TelegramBridge {
    fn is_ready(&self) -> bool {
        self.initialized.get()
    }

    fn initialize(&self) -> bool {
        if self.initialized.get() {
            return true;
        }

        self.expand();
        self.ready();
        self.setup_theme();

        *self.user.borrow_mut() = self.read_user();
        *self.init_data.borrow_mut() = self.web_app.init_data();

        self.setup_back_button();
        self.setup_main_button();

        self.initialized.set(true);
        log::info!(
            "✅ [BRIDGE] Telegram WebApp inicializado: platform={:?} colorScheme={:?} user={:?}",
            self.web_app.platform(),
            self.web_app.color_scheme(),
            self.user.borrow().as_ref().map(|u| u.id_string())
        );
        true
    }

    fn expand(&self) {
        self.web_app.expand();
    }

    fn ready(&self) {
        self.web_app.ready();
    }

    fn current_user(&self) -> Option<User> {
        self.user.borrow().clone()
    }

    fn init_payload(&self) -> Option<String> {
        self.init_data.borrow().clone()
    }

    fn on_theme_changed(&self, callback: Box<dyn Fn(String)>) {
        let web_app = self.web_app.clone();
        let closure = Closure::wrap(Box::new(move || {
            callback(web_app.color_scheme().unwrap_or_else(|| "dark".to_string()));
        }) as Box<dyn FnMut()>);
        self.web_app.on_event("themeChanged", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn on_back_button(&self, callback: Box<dyn Fn()>) {
        if let Some(button) = self.web_app.back_button() {
            let closure = Closure::wrap(Box::new(move || callback()) as Box<dyn FnMut()>);
            button.on_click(closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn set_main_button_text(&self, text: &str) {
        if let Some(button) = self.web_app.main_button() {
            button.set_text(text);
        }
    }

    fn show_main_button(&self) {
        if let Some(button) = self.web_app.main_button() {
            button.show();
        }
    }

    fn hide_main_button(&self) {
        if let Some(button) = self.web_app.main_button() {
            button.hide();
        }
    }

    fn send_data(&self, data: &str) -> bool {
        match self.web_app.send_data(data) {
            Ok(()) => true,
            Err(e) => {
                log::error!("❌ [BRIDGE] sendData falló: {:?}", e);
                false
            }
        }
    }

    fn show_alert(&self, message: &str) {
        if has_method(&self.web_app, "showAlert") {
            let _ = js_sys::Reflect::get(&self.web_app, &"showAlert".into())
                .map(|f| f.unchecked_into::<js_sys::Function>())
                .and_then(|f| f.call1(&self.web_app, &JsValue::from_str(message)));
        } else if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }

    fn show_confirm(&self, message: &str, callback: Box<dyn Fn(bool)>) {
        if has_method(&self.web_app, "showConfirm") {
            let closure = Closure::wrap(Box::new(move |ok: JsValue| {
                callback(ok.as_bool().unwrap_or(false));
            }) as Box<dyn FnMut(JsValue)>);
            let _ = js_sys::Reflect::get(&self.web_app, &"showConfirm".into())
                .map(|f| f.unchecked_into::<js_sys::Function>())
                .and_then(|f| f.call2(&self.web_app, &JsValue::from_str(message), closure.as_ref()));
            closure.forget();
        } else if let Some(window) = web_sys::window() {
            callback(window.confirm_with_message(message).unwrap_or(false));
        }
    }

    fn close(&self) {
        if has_method(&self.web_app, "close") {
            self.web_app.close();
        }
    }
}
