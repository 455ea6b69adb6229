pub mod http;
pub mod catalog_gateway;

pub use http::{GlooTransport, HttpResponse, HttpTransport};
pub use catalog_gateway::CatalogGateway;
