// Contratos JSON del backend y del host

use serde::{Deserialize, Serialize};
use crate::models::{Cart, Product, User, Widget};

#[derive(Debug, Deserialize)]
pub struct ProductsResponse {
    pub success: bool,
    #[serde(default)]
    pub products: Vec<Product>,
    #[serde(default)]
    pub categories: Vec<serde_json::Value>,
    #[serde(default)]
    pub brands: Vec<serde_json::Value>,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct WidgetsResponse {
    pub success: bool,
    #[serde(default, deserialize_with = "valid_widgets")]
    pub widgets: Vec<Widget>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Cada widget por separado: una entrada ilegible no tumba la lista
fn valid_widgets<'de, D>(deserializer: D) -> Result<Vec<Widget>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let entries = match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::Array(entries) => entries,
        _ => return Ok(Vec::new()),
    };
    Ok(entries
        .into_iter()
        .filter_map(|entry| {
            Widget::deserialize(entry)
                .map_err(|e| log::warn!("⚠️ [WIDGETS] Widget descartado: {}", e))
                .ok()
        })
        .collect())
}

#[derive(Debug, Serialize)]
pub struct CheckoutRequest<'a> {
    pub cart: &'a Cart,
    pub user: &'a User,
}

#[derive(Debug, Deserialize)]
pub struct CheckoutResponse {
    pub success: bool,
    #[serde(default)]
    pub error: Option<String>,
}

/// Mensaje `sendData` para checkout dentro del host
#[derive(Debug, Serialize)]
pub struct OrderPayload<'a> {
    pub action: &'static str,
    pub cart: &'a Cart,
    pub user: Option<serde_json::Value>,
    pub timestamp: i64,
}

impl<'a> OrderPayload<'a> {
    pub fn create_order(cart: &'a Cart, user: Option<serde_json::Value>) -> Self {
        Self {
            action: "create_order",
            cart,
            user,
            timestamp: chrono::Utc::now().timestamp_millis(),
        }
    }
}

/// Mensaje `sendData` del botón principal del host
#[derive(Debug, Serialize)]
pub struct MainButtonPayload {
    pub action: &'static str,
    pub timestamp: i64,
}

impl MainButtonPayload {
    pub fn checkout() -> Self {
        Self {
            action: "checkout",
            timestamp: chrono::Utc::now().timestamp_millis(),
        }
    }
}
