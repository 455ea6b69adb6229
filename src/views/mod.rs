// ============================================================================
// VIEWS - Funciones puras: datos → HTML (todo texto externo se escapa)
// ============================================================================

pub mod product_card;
pub mod widgets;
pub mod catalog;
pub mod product_page;
pub mod cart_page;
pub mod search;
pub mod status;

pub use product_card::{render_product_card, render_product_grid};
pub use widgets::{fallback_widgets, render_home, render_widget, WidgetContext};
pub use catalog::render_catalog;
pub use product_page::{render_product_not_found, render_product_page};
pub use cart_page::render_cart_page;
pub use search::{render_search_overlay, render_search_results};
pub use status::{render_loading, render_not_found, render_page_error};
