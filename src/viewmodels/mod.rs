pub mod page_viewmodel;
pub mod checkout_viewmodel;
pub mod actions;

pub use page_viewmodel::load_page;
pub use checkout_viewmodel::{checkout, CheckoutOutcome};
pub use actions::{dispatch_action, search_products, UiAction};
