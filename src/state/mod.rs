// ============================================================================
// STATE MODULE - Estado compartido con Rc<RefCell>
// ============================================================================

pub mod client_store;
pub mod catalog_state;
pub mod navigation;
pub mod app_state;

pub use client_store::ClientStore;
pub use catalog_state::CatalogState;
pub use navigation::{NavigationToken, NavigationTracker};
pub use app_state::AppContext;
