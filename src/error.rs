// ============================================================================
// ERRORES - Tipo de error unificado del cliente
// ============================================================================
// Los límites fail-soft (store, gateway, app) registran estos errores y
// degradan a un estado vacío; nunca llegan al usuario como excepción
// ============================================================================

use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum StoreError {
    /// Fallo de transporte (fetch rechazado, sin red)
    #[error("Network error: {0}")]
    Network(String),

    /// Respuesta HTTP no exitosa
    #[error("HTTP {status}")]
    HttpStatus { status: u16 },

    /// Respuesta bien formada con `success = false`
    #[error("Application error: {0}")]
    Application(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("DOM error: {0}")]
    Dom(String),
}

impl From<serde_json::Error> for StoreError {
    fn from(e: serde_json::Error) -> Self {
        StoreError::Parse(e.to_string())
    }
}

impl From<JsValue> for StoreError {
    fn from(e: JsValue) -> Self {
        StoreError::Dom(format!("{:?}", e))
    }
}

pub type StoreResult<T> = Result<T, StoreError>;
