// ============================================================================
// CLIENT STORE - Carrito, favoritos e identidad persistidos
// ============================================================================
// Toda mutación: recalcula total → persiste → badge → host. Los fallos de
// storage se registran y el estado en memoria sigue siendo válido
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;
use crate::bridge::HostBridge;
use crate::dom::PageSurface;
use crate::models::{Cart, FavoritesSet, Product, ProductId, User};
use crate::utils::storage::{load_json, save_json, KeyValueStore};
use crate::utils::{CART_STORAGE_KEY, FAVORITES_STORAGE_KEY, USER_STORAGE_KEY};

#[derive(Clone)]
pub struct ClientStore {
    storage: Rc<dyn KeyValueStore>,
    bridge: Rc<dyn HostBridge>,
    surface: Rc<dyn PageSurface>,
    currency: String,
    pub cart: Rc<RefCell<Cart>>,
    pub favorites: Rc<RefCell<FavoritesSet>>,
}

impl ClientStore {
    /// Crea el store y carga el estado persistido
    pub fn new(
        storage: Rc<dyn KeyValueStore>,
        bridge: Rc<dyn HostBridge>,
        surface: Rc<dyn PageSurface>,
        currency: &str,
    ) -> Self {
        let store = Self {
            storage,
            bridge,
            surface,
            currency: currency.to_string(),
            cart: Rc::new(RefCell::new(Cart::new())),
            favorites: Rc::new(RefCell::new(FavoritesSet::new())),
        };
        *store.cart.borrow_mut() = store.load_cart();
        *store.favorites.borrow_mut() = store.load_favorites();
        store
    }

    // ========================================================================
    // CARRITO
    // ========================================================================

    /// Vacío si no hay nada guardado; un JSON inválido se borra del storage
    pub fn load_cart(&self) -> Cart {
        match load_json::<Cart>(self.storage.as_ref(), CART_STORAGE_KEY) {
            Ok(Some(cart)) => {
                log::info!("🛒 [CART] Carrito cargado: {} items, total {}", cart.items().len(), cart.total());
                cart
            }
            Ok(None) => Cart::new(),
            Err(e) => {
                log::warn!("⚠️ [CART] Carrito persistido descartado: {}", e);
                if let Err(e) = self.storage.remove(CART_STORAGE_KEY) {
                    log::error!("❌ [CART] No se pudo borrar el carrito corrupto: {}", e);
                }
                Cart::new()
            }
        }
    }

    pub fn save_cart(&self) {
        let cart = self.cart.borrow();
        if let Err(e) = save_json(self.storage.as_ref(), CART_STORAGE_KEY, &*cart) {
            log::error!("❌ [CART] Error guardando carrito: {}", e);
        }
        self.surface.refresh_cart_badge(cart.item_count());
        self.bridge.update_cart(&cart, &self.currency);
    }

    pub fn add_to_cart(&self, product: &Product, quantity: u32) {
        self.cart.borrow_mut().add(product, quantity);
        log::info!("🛒 [CART] +{} x {} (id={})", quantity.max(1), product.name, product.id);
        self.save_cart();
        self.surface.notify(&format!("Added to cart: {}", product.name));
    }

    pub fn remove_from_cart(&self, product_id: ProductId) {
        if self.cart.borrow_mut().remove(product_id) {
            log::info!("🗑️ [CART] Producto {} eliminado", product_id);
            self.save_cart();
        }
    }

    /// Cantidades < 1 se fuerzan a 1
    pub fn update_quantity(&self, product_id: ProductId, quantity: i64) {
        if self.cart.borrow_mut().set_quantity(product_id, quantity) {
            self.save_cart();
        }
    }

    pub fn clear_cart(&self) {
        self.cart.borrow_mut().clear();
        log::info!("🧹 [CART] Carrito vaciado");
        self.save_cart();
    }

    pub fn cart(&self) -> Cart {
        self.cart.borrow().clone()
    }

    pub fn cart_count(&self) -> u32 {
        self.cart.borrow().item_count()
    }

    // ========================================================================
    // FAVORITOS
    // ========================================================================

    pub fn load_favorites(&self) -> FavoritesSet {
        match load_json::<FavoritesSet>(self.storage.as_ref(), FAVORITES_STORAGE_KEY) {
            Ok(favorites) => favorites.unwrap_or_default(),
            Err(e) => {
                log::warn!("⚠️ [FAVORITES] Favoritos persistidos descartados: {}", e);
                FavoritesSet::new()
            }
        }
    }

    pub fn save_favorites(&self) {
        if let Err(e) = save_json(self.storage.as_ref(), FAVORITES_STORAGE_KEY, &*self.favorites.borrow()) {
            log::error!("❌ [FAVORITES] Error guardando favoritos: {}", e);
        }
    }

    /// Devuelve la pertenencia resultante
    pub fn toggle_favorite(&self, product_id: ProductId) -> bool {
        let now_favorite = {
            let mut favorites = self.favorites.borrow_mut();
            if favorites.remove(&product_id) {
                false
            } else {
                favorites.insert(product_id);
                true
            }
        };
        log::info!("♥ [FAVORITES] {} → {}", product_id, now_favorite);
        self.save_favorites();
        now_favorite
    }

    pub fn is_favorite(&self, product_id: ProductId) -> bool {
        self.favorites.borrow().contains(&product_id)
    }

    // ========================================================================
    // USUARIO
    // ========================================================================

    /// Usuario del host; si no, el invitado persistido; si no, uno nuevo
    pub fn user_info(&self) -> User {
        if let Some(user) = self.bridge.current_user() {
            return user;
        }
        match load_json::<User>(self.storage.as_ref(), USER_STORAGE_KEY) {
            Ok(Some(user)) => return user,
            Ok(None) => {}
            Err(e) => log::warn!("⚠️ [USER] Invitado persistido ilegible: {}", e),
        }
        let guest = User::guest();
        log::info!("👤 [USER] Invitado creado: {}", guest.id_string());
        if let Err(e) = save_json(self.storage.as_ref(), USER_STORAGE_KEY, &guest) {
            log::error!("❌ [USER] Error guardando invitado: {}", e);
        }
        guest
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use crate::test_support::{RecordingBridge, RecordingSurface};
    use crate::utils::storage::MemoryStore;

    struct Harness {
        storage: Rc<MemoryStore>,
        bridge: Rc<RecordingBridge>,
        surface: Rc<RecordingSurface>,
        store: ClientStore,
    }

    fn harness_with(storage: MemoryStore, bridge: RecordingBridge) -> Harness {
        let storage = Rc::new(storage);
        let bridge = Rc::new(bridge);
        let surface = Rc::new(RecordingSurface::new());
        let store = ClientStore::new(storage.clone(), bridge.clone(), surface.clone(), "₽");
        Harness { storage, bridge, surface, store }
    }

    fn harness() -> Harness {
        harness_with(MemoryStore::new(), RecordingBridge::absent())
    }

    #[test]
    fn malformed_persisted_cart_loads_empty() {
        let h = harness_with(
            MemoryStore::new().with_entry(CART_STORAGE_KEY, "{\"items\": [oops"),
            RecordingBridge::absent(),
        );
        let cart = h.store.cart();
        assert!(cart.is_empty());
        assert_eq!(cart.total(), 0.0);
        assert_eq!(h.storage.raw(CART_STORAGE_KEY), None);
    }

    #[test]
    fn add_to_cart_persists_notifies_and_refreshes_badge() {
        let h = harness();
        let mut product = Product::sample(1, "Runner", 1000.0);
        product.discount_price = Some(800.0);
        product.quantity_available = 0;

        h.store.add_to_cart(&product, 2);

        assert_eq!(h.store.cart().total(), 1600.0);
        assert_eq!(h.surface.notifications(), vec!["Added to cart: Runner".to_string()]);
        assert_eq!(h.surface.last_badge(), Some(2));

        let persisted: serde_json::Value =
            serde_json::from_str(&h.storage.raw(CART_STORAGE_KEY).unwrap()).unwrap();
        assert_eq!(persisted["items"][0]["price"], 800.0);
        assert_eq!(persisted["items"][0]["quantity"], 2);
        assert_eq!(persisted["total"], 1600.0);
    }

    #[test]
    fn cart_changes_reach_the_host_main_button() {
        let h = harness_with(MemoryStore::new(), RecordingBridge::ready());
        h.store.add_to_cart(&Product::sample(1, "A", 1500.0), 1);
        assert_eq!(h.bridge.main_button_text().as_deref(), Some("CHECKOUT (1,500₽)"));
        assert!(h.bridge.main_button_visible());

        h.store.clear_cart();
        assert!(!h.bridge.main_button_visible());
    }

    #[test]
    fn cart_survives_a_reload() {
        let h = harness();
        h.store.add_to_cart(&Product::sample(4, "D", 20.0), 3);
        h.store.update_quantity(4, 0);

        let reloaded = ClientStore::new(h.storage.clone(), h.bridge.clone(), h.surface.clone(), "₽");
        assert_eq!(reloaded.cart().item(4).map(|i| i.quantity), Some(1));
        assert_eq!(reloaded.cart_count(), 1);
    }

    #[test]
    fn remove_missing_id_does_not_persist() {
        let h = harness();
        h.store.remove_from_cart(77);
        assert!(h.storage.raw(CART_STORAGE_KEY).is_none());
    }

    #[test]
    fn storage_failure_keeps_in_memory_state() {
        let h = harness_with(MemoryStore::read_only(), RecordingBridge::absent());
        h.store.add_to_cart(&Product::sample(1, "A", 10.0), 1);
        assert_eq!(h.store.cart().total(), 10.0);
        assert_eq!(h.store.cart_count(), 1);
        assert!(h.store.toggle_favorite(1));
    }

    #[test]
    fn toggle_favorite_twice_restores_membership() {
        let h = harness();
        assert!(!h.store.is_favorite(9));
        assert!(h.store.toggle_favorite(9));
        assert_eq!(h.storage.raw(FAVORITES_STORAGE_KEY).as_deref(), Some("[9]"));
        assert!(!h.store.toggle_favorite(9));
        assert!(!h.store.is_favorite(9));
        assert_eq!(h.storage.raw(FAVORITES_STORAGE_KEY).as_deref(), Some("[]"));
    }

    #[test]
    fn guest_identity_is_created_once() {
        let h = harness();
        let first = h.store.user_info();
        assert!(first.is_guest());
        assert_eq!(h.store.user_info(), first);
        assert!(h.storage.raw(USER_STORAGE_KEY).is_some());
    }

    #[test]
    fn host_user_takes_precedence() {
        let host_user: User = serde_json::from_str(r#"{"id": 42, "first_name": "Ana"}"#).unwrap();
        let h = harness_with(MemoryStore::new(), RecordingBridge::ready().with_user(host_user.clone()));
        assert_eq!(h.store.user_info(), host_user);
        assert!(h.storage.raw(USER_STORAGE_KEY).is_none());
    }
}
