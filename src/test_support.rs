// Fakes en memoria para los tests nativos (transporte, host, superficie)

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;
use futures::future::LocalBoxFuture;
use crate::bridge::HostBridge;
use crate::config::AppConfig;
use crate::dom::PageSurface;
use crate::error::{StoreError, StoreResult};
use crate::models::User;
use crate::services::{HttpResponse, HttpTransport};
use crate::state::AppContext;
use crate::utils::storage::MemoryStore;

/// Respuestas fijas por URL; URL sin respuesta = fallo de red
#[derive(Default)]
pub struct MockTransport {
    responses: HashMap<String, (u16, String)>,
    calls: RefCell<Vec<String>>,
    bodies: RefCell<Vec<String>>,
    hook: Option<Box<dyn Fn(&str)>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(mut self, url: &str, status: u16, body: &str) -> Self {
        self.responses.insert(url.to_string(), (status, body.to_string()));
        self
    }

    /// Se ejecuta dentro de cada request, antes de responder
    pub fn with_hook(mut self, hook: impl Fn(&str) + 'static) -> Self {
        self.hook = Some(Box::new(hook));
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    pub fn last_body(&self) -> Option<String> {
        self.bodies.borrow().last().cloned()
    }

    fn answer(&self, method: &str, url: &str) -> StoreResult<HttpResponse> {
        self.calls.borrow_mut().push(format!("{} {}", method, url));
        if let Some(hook) = &self.hook {
            hook(url);
        }
        self.responses
            .get(url)
            .map(|(status, body)| HttpResponse { status: *status, body: body.clone() })
            .ok_or_else(|| StoreError::Network(format!("no route to {}", url)))
    }
}

impl HttpTransport for MockTransport {
    fn get<'a>(&'a self, url: &'a str) -> LocalBoxFuture<'a, StoreResult<HttpResponse>> {
        Box::pin(async move { self.answer("GET", url) })
    }

    fn post_json<'a>(&'a self, url: &'a str, body: String) -> LocalBoxFuture<'a, StoreResult<HttpResponse>> {
        Box::pin(async move {
            self.bodies.borrow_mut().push(body);
            self.answer("POST", url)
        })
    }
}

/// Host simulado que registra todo lo que recibe
#[derive(Default)]
pub struct RecordingBridge {
    ready: bool,
    user: Option<User>,
    sent: RefCell<Vec<String>>,
    main_button_text: RefCell<Option<String>>,
    main_button_visible: Cell<bool>,
}

impl RecordingBridge {
    pub fn ready() -> Self {
        Self { ready: true, ..Self::default() }
    }

    pub fn absent() -> Self {
        Self::default()
    }

    pub fn with_user(mut self, user: User) -> Self {
        self.user = Some(user);
        self
    }

    pub fn sent(&self) -> Vec<String> {
        self.sent.borrow().clone()
    }

    pub fn main_button_text(&self) -> Option<String> {
        self.main_button_text.borrow().clone()
    }

    pub fn main_button_visible(&self) -> bool {
        self.main_button_visible.get()
    }
}

impl HostBridge for RecordingBridge {
    fn is_ready(&self) -> bool {
        self.ready
    }

    fn initialize(&self) -> bool {
        self.ready
    }

    fn current_user(&self) -> Option<User> {
        self.user.clone()
    }

    fn set_main_button_text(&self, text: &str) {
        *self.main_button_text.borrow_mut() = Some(text.to_string());
    }

    fn show_main_button(&self) {
        self.main_button_visible.set(true);
    }

    fn hide_main_button(&self) {
        self.main_button_visible.set(false);
    }

    fn send_data(&self, data: &str) -> bool {
        if !self.ready {
            return false;
        }
        self.sent.borrow_mut().push(data.to_string());
        true
    }
}

/// Superficie de página en memoria
#[derive(Default)]
pub struct RecordingSurface {
    pages: RefCell<Vec<String>>,
    badges: RefCell<Vec<u32>>,
    notifications: RefCell<Vec<String>>,
    history: RefCell<Vec<String>>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pages(&self) -> Vec<String> {
        self.pages.borrow().clone()
    }

    pub fn last_page(&self) -> Option<String> {
        self.pages.borrow().last().cloned()
    }

    pub fn last_badge(&self) -> Option<u32> {
        self.badges.borrow().last().copied()
    }

    pub fn notifications(&self) -> Vec<String> {
        self.notifications.borrow().clone()
    }

    pub fn history(&self) -> Vec<String> {
        self.history.borrow().clone()
    }
}

impl PageSurface for RecordingSurface {
    fn render_page(&self, html: &str) {
        self.pages.borrow_mut().push(html.to_string());
    }

    fn refresh_cart_badge(&self, count: u32) {
        self.badges.borrow_mut().push(count);
    }

    fn notify(&self, message: &str) {
        self.notifications.borrow_mut().push(message.to_string());
    }

    fn push_history(&self, path: &str) {
        self.history.borrow_mut().push(path.to_string());
    }
}

/// Contexto completo sobre fakes en memoria
pub struct TestApp {
    pub ctx: AppContext,
    pub transport: Rc<MockTransport>,
    pub bridge: Rc<RecordingBridge>,
    pub surface: Rc<RecordingSurface>,
    pub storage: Rc<MemoryStore>,
}

pub fn test_app(transport: MockTransport, bridge: RecordingBridge) -> TestApp {
    let transport = Rc::new(transport);
    let bridge = Rc::new(bridge);
    let surface = Rc::new(RecordingSurface::new());
    let storage = Rc::new(MemoryStore::new());
    let ctx = AppContext::new(
        AppConfig::default(),
        storage.clone(),
        transport.clone(),
        bridge.clone(),
        surface.clone(),
    );
    TestApp { ctx, transport, bridge, surface, storage }
}

/// Sin host: solo transporte + superficie
pub fn test_context(transport: MockTransport) -> (AppContext, Rc<RecordingSurface>) {
    let app = test_app(transport, RecordingBridge::absent());
    (app.ctx, app.surface)
}
