// ============================================================================
// APP CONTEXT - Dependencias compartidas de la aplicación
// ============================================================================
// Se construye una vez al arrancar y se pasa a los loaders de página y al
// checkout; clonar es barato (todo son Rc)
// ============================================================================

use std::rc::Rc;
use crate::bridge::HostBridge;
use crate::config::AppConfig;
use crate::dom::PageSurface;
use crate::services::{CatalogGateway, HttpTransport};
use crate::state::{CatalogState, ClientStore, NavigationTracker};
use crate::utils::storage::KeyValueStore;

#[derive(Clone)]
pub struct AppContext {
    pub config: Rc<AppConfig>,
    pub store: ClientStore,
    pub catalog: CatalogState,
    pub gateway: CatalogGateway,
    pub bridge: Rc<dyn HostBridge>,
    pub surface: Rc<dyn PageSurface>,
    pub navigation: NavigationTracker,
}

impl AppContext {
    pub fn new(
        config: AppConfig,
        storage: Rc<dyn KeyValueStore>,
        transport: Rc<dyn HttpTransport>,
        bridge: Rc<dyn HostBridge>,
        surface: Rc<dyn PageSurface>,
    ) -> Self {
        let config = Rc::new(config);
        let store = ClientStore::new(storage, bridge.clone(), surface.clone(), &config.currency_symbol);
        Self {
            gateway: CatalogGateway::new(transport, config.clone()),
            catalog: CatalogState::new(),
            navigation: NavigationTracker::new(),
            store,
            bridge,
            surface,
            config,
        }
    }

    /// Carga el catálogo si no está en memoria. Un fallo deja el estado como estaba
    pub async fn ensure_catalog(&self) {
        if self.catalog.is_loaded() {
            return;
        }
        if let Some(snapshot) = self.gateway.fetch_catalog().await {
            self.catalog.replace(snapshot);
        }
    }
}
