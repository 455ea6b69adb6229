use serde::{Deserialize, Serialize};
use crate::utils::DEFAULT_BRAND;

pub type ProductId = i64;

/// Producto tal como lo devuelve `/api/products` (solo lectura)
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub brand: Option<String>,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub discount_price: Option<f64>,
    #[serde(default)]
    pub discount_percent: Option<u32>,
    #[serde(default, rename = "price_formatted")]
    pub formatted_price: String,
    #[serde(default, rename = "discount_price_formatted")]
    pub formatted_discount_price: Option<String>,
    #[serde(default, rename = "main_image")]
    pub main_image_url: Option<String>,
    #[serde(default, rename = "quantity")]
    pub quantity_available: i64,
}

impl Product {
    /// Precio efectivo: el de descuento si existe
    pub fn effective_price(&self) -> f64 {
        self.discount_price.unwrap_or(self.price)
    }

    pub fn brand_or_default(&self) -> &str {
        match self.brand.as_deref() {
            Some(brand) if !brand.is_empty() => brand,
            _ => DEFAULT_BRAND,
        }
    }

    pub fn in_stock(&self) -> bool {
        self.quantity_available > 0
    }

    /// Coincidencia de búsqueda (nombre o marca, sin distinguir mayúsculas)
    pub fn matches_query(&self, query: &str) -> bool {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return false;
        }
        self.name.to_lowercase().contains(&query)
            || self
                .brand
                .as_deref()
                .is_some_and(|b| b.to_lowercase().contains(&query))
    }

    #[cfg(test)]
    pub fn sample(id: ProductId, name: &str, price: f64) -> Self {
        Self {
            id,
            name: name.to_string(),
            brand: None,
            price,
            discount_price: None,
            discount_percent: None,
            formatted_price: format!("{:.0}", price),
            formatted_discount_price: None,
            main_image_url: None,
            quantity_available: 10,
        }
    }
}
