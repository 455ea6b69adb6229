use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Prefijo para `/api/...`; vacío = mismo origen
    pub api_base_url: String,
    /// Ruta base bajo la que se sirve la mini-app
    pub base_path: String,
    pub currency_symbol: String,
    pub notification_duration_ms: u32,
    pub featured_products_limit: usize,
    pub enable_logging: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: String::new(),
            base_path: "/webapp/".to_string(),
            currency_symbol: "₽".to_string(),
            notification_duration_ms: 3000,
            featured_products_limit: 4,
            enable_logging: true,
        }
    }
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            api_base_url: option_env!("API_BASE_URL")
                .map(|s| s.trim_end_matches('/').to_string())
                .unwrap_or(defaults.api_base_url),
            base_path: option_env!("BASE_PATH")
                .map(|s| s.to_string())
                .unwrap_or(defaults.base_path),
            currency_symbol: option_env!("CURRENCY_SYMBOL")
                .map(|s| s.to_string())
                .unwrap_or(defaults.currency_symbol),
            notification_duration_ms: option_env!("NOTIFICATION_DURATION_MS")
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.notification_duration_ms),
            featured_products_limit: option_env!("FEATURED_PRODUCTS_LIMIT")
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.featured_products_limit),
            enable_logging: option_env!("ENABLE_LOGGING")
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.enable_logging),
        }
    }

    /// URL completa de un endpoint del backend
    pub fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.api_base_url, path)
    }

    pub fn log_level(&self) -> log::Level {
        if self.enable_logging {
            log::Level::Debug
        } else {
            log::Level::Warn
        }
    }
}

// Configuración global estática
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_url_joins_base_and_path() {
        let config = AppConfig {
            api_base_url: "https://shop.example".to_string(),
            ..AppConfig::default()
        };
        assert_eq!(config.api_url("/api/products"), "https://shop.example/api/products");
        assert_eq!(AppConfig::default().api_url("/api/widgets"), "/api/widgets");
    }
}
