pub mod product;
pub mod cart;
pub mod widget;
pub mod user;
pub mod api;
pub mod catalog;

pub use product::{Product, ProductId};
pub use cart::{Cart, CartItem};
pub use widget::{MarqueeStyle, Widget, WidgetDescriptor};
pub use user::User;
pub use catalog::CatalogSnapshot;
pub use api::{CheckoutRequest, CheckoutResponse, OrderPayload, ProductsResponse, WidgetsResponse};

use std::collections::BTreeSet;

/// Ids favoritos; se persiste como array JSON
pub type FavoritesSet = BTreeSet<ProductId>;
