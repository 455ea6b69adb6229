// Utils compartidos

pub mod constants;
pub mod storage;
pub mod html;
pub mod format;

pub use constants::*;
pub use html::escape_html;
pub use format::format_amount;
