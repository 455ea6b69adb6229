// ============================================================================
// CATALOG GATEWAY - Productos, widgets y checkout contra el backend
// ============================================================================
// Los fetch de lectura nunca propagan errores: se registran y el llamador
// conserva el estado que tenía (sin retry ni backoff)
// ============================================================================

use std::rc::Rc;
use serde::de::DeserializeOwned;
use crate::config::AppConfig;
use crate::error::{StoreError, StoreResult};
use crate::models::{CatalogSnapshot, CheckoutRequest, CheckoutResponse, ProductsResponse, Widget, WidgetsResponse};
use crate::services::http::{HttpResponse, HttpTransport};
use crate::utils::{CHECKOUT_ENDPOINT, PRODUCTS_ENDPOINT, WIDGETS_ENDPOINT};

#[derive(Clone)]
pub struct CatalogGateway {
    transport: Rc<dyn HttpTransport>,
    config: Rc<AppConfig>,
}

fn parse_ok<T: DeserializeOwned>(response: HttpResponse) -> StoreResult<T> {
    if !response.ok() {
        return Err(StoreError::HttpStatus { status: response.status });
    }
    Ok(serde_json::from_str(&response.body)?)
}

impl CatalogGateway {
    pub fn new(transport: Rc<dyn HttpTransport>, config: Rc<AppConfig>) -> Self {
        Self { transport, config }
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> StoreResult<T> {
        let url = self.config.api_url(path);
        let response = self.transport.get(&url).await?;
        parse_ok(response)
    }

    async fn try_fetch_catalog(&self) -> StoreResult<CatalogSnapshot> {
        let response: ProductsResponse = self.get_json(PRODUCTS_ENDPOINT).await?;
        if !response.success {
            return Err(StoreError::Application(
                response.error.unwrap_or_else(|| "success=false".to_string()),
            ));
        }
        Ok(CatalogSnapshot::from(response))
    }

    async fn try_fetch_widgets(&self) -> StoreResult<Vec<Widget>> {
        let response: WidgetsResponse = self.get_json(WIDGETS_ENDPOINT).await?;
        if !response.success {
            return Err(StoreError::Application(
                response.error.unwrap_or_else(|| "success=false".to_string()),
            ));
        }
        Ok(response.widgets)
    }

    /// Productos + categorías + marcas. `None` ante cualquier fallo
    pub async fn fetch_catalog(&self) -> Option<CatalogSnapshot> {
        match self.try_fetch_catalog().await {
            Ok(snapshot) => {
                log::info!(
                    "🌐 [CATALOG] {} productos, {} categorías, {} marcas",
                    snapshot.products.len(),
                    snapshot.categories.len(),
                    snapshot.brands.len()
                );
                Some(snapshot)
            }
            Err(e) => {
                log::error!("❌ [CATALOG] Error cargando productos: {}", e);
                None
            }
        }
    }

    /// Widgets de la home en el orden del servidor. `None` ante cualquier fallo
    pub async fn fetch_widgets(&self) -> Option<Vec<Widget>> {
        match self.try_fetch_widgets().await {
            Ok(widgets) => {
                log::info!("🧩 [CATALOG] {} widgets recibidos", widgets.len());
                Some(widgets)
            }
            Err(e) => {
                log::error!("❌ [CATALOG] Error cargando widgets: {}", e);
                None
            }
        }
    }

    /// POST `/api/checkout`. `Ok` solo si el backend responde `success=true`
    pub async fn post_checkout(&self, request: &CheckoutRequest<'_>) -> StoreResult<()> {
        let url = self.config.api_url(CHECKOUT_ENDPOINT);
        let body = serde_json::to_string(request)?;
        let response = self.transport.post_json(&url, body).await?;
        let result: CheckoutResponse = parse_ok(response)?;
        if result.success {
            Ok(())
        } else {
            Err(StoreError::Application(
                result.error.unwrap_or_else(|| "success=false".to_string()),
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use crate::models::{Cart, User};
    use crate::test_support::MockTransport;

    fn gateway(transport: Rc<MockTransport>) -> CatalogGateway {
        CatalogGateway::new(transport, Rc::new(AppConfig::default()))
    }

    #[test]
    fn catalog_success_keeps_categories_and_brands() {
        let transport = Rc::new(MockTransport::new().respond(
            PRODUCTS_ENDPOINT,
            200,
            r#"{"success":true,"products":[{"id":1,"name":"A","price":10}],"categories":[{"id":1}],"brands":["STONE"]}"#,
        ));
        let snapshot = block_on(gateway(transport.clone()).fetch_catalog()).unwrap();
        assert_eq!(snapshot.products.len(), 1);
        assert_eq!(snapshot.categories.len(), 1);
        assert_eq!(snapshot.brands, vec![serde_json::json!("STONE")]);
        assert_eq!(transport.call_count(), 1);
    }

    #[test]
    fn every_failure_kind_is_swallowed() {
        let cases = [
            MockTransport::new().respond(PRODUCTS_ENDPOINT, 500, "Internal Server Error"),
            MockTransport::new().respond(PRODUCTS_ENDPOINT, 200, r#"{"success":false,"error":"db down"}"#),
            MockTransport::new().respond(PRODUCTS_ENDPOINT, 200, "<html>"),
            MockTransport::new(),
        ];
        for transport in cases {
            let transport = Rc::new(transport);
            assert!(block_on(gateway(transport.clone()).fetch_catalog()).is_none());
            // Un solo intento, sin reintentos
            assert_eq!(transport.call_count(), 1);
        }
    }

    #[test]
    fn classifies_errors_internally() {
        let transport = Rc::new(MockTransport::new().respond(PRODUCTS_ENDPOINT, 503, ""));
        let err = block_on(gateway(transport).try_fetch_catalog()).unwrap_err();
        assert_eq!(err, StoreError::HttpStatus { status: 503 });

        let transport = Rc::new(MockTransport::new().respond(WIDGETS_ENDPOINT, 200, r#"{"success":false}"#));
        let err = block_on(gateway(transport).try_fetch_widgets()).unwrap_err();
        assert!(matches!(err, StoreError::Application(_)));

        let err = block_on(gateway(Rc::new(MockTransport::new())).try_fetch_widgets()).unwrap_err();
        assert!(matches!(err, StoreError::Network(_)));
    }

    #[test]
    fn widgets_keep_server_order() {
        let transport = Rc::new(MockTransport::new().respond(
            WIDGETS_ENDPOINT,
            200,
            r#"{"success":true,"widgets":[{"widget_type":"info"},{"widget_type":"hero"}]}"#,
        ));
        let widgets = block_on(gateway(transport).fetch_widgets()).unwrap();
        assert!(matches!(widgets[0], Widget::Info { .. }));
        assert!(matches!(widgets[1], Widget::Hero { .. }));
    }

    #[test]
    fn checkout_posts_cart_and_user() {
        let transport = Rc::new(MockTransport::new().respond(CHECKOUT_ENDPOINT, 200, r#"{"success":true}"#));
        let cart = Cart::new();
        let user = User::guest();
        let request = CheckoutRequest { cart: &cart, user: &user };
        assert!(block_on(gateway(transport.clone()).post_checkout(&request)).is_ok());

        let posted = transport.last_body().unwrap();
        let value: serde_json::Value = serde_json::from_str(&posted).unwrap();
        assert_eq!(value["user"]["first_name"], "Guest");
        assert_eq!(value["cart"]["total"], 0.0);
    }
}
