/// Claves de localStorage (compatibles con el cliente web original)
pub const CART_STORAGE_KEY: &str = "stone_cart";
pub const FAVORITES_STORAGE_KEY: &str = "stone_favorites";
pub const USER_STORAGE_KEY: &str = "stone_user";

/// Endpoints del backend
pub const PRODUCTS_ENDPOINT: &str = "/api/products";
pub const WIDGETS_ENDPOINT: &str = "/api/widgets";
pub const CHECKOUT_ENDPOINT: &str = "/api/checkout";

/// Contenedor donde se monta cada página
pub const PAGE_CONTAINER_ID: &str = "page-content";

/// Marca por defecto cuando el producto no tiene
pub const DEFAULT_BRAND: &str = "STONE";

pub const GUEST_ID_PREFIX: &str = "guest_";
pub const GUEST_ID_LENGTH: usize = 9;
