use crate::models::{Product, ProductId, ProductsResponse};

/// Datos de catálogo cargados en memoria (una escritura por carga completa)
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CatalogSnapshot {
    pub products: Vec<Product>,
    /// Opacos: se conservan tal cual los manda el backend
    pub categories: Vec<serde_json::Value>,
    pub brands: Vec<serde_json::Value>,
}

impl CatalogSnapshot {
    pub fn product(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Primeros `limit` productos (destacados de la colección)
    pub fn featured(&self, limit: usize) -> &[Product] {
        &self.products[..self.products.len().min(limit)]
    }

    pub fn search(&self, query: &str) -> Vec<&Product> {
        self.products.iter().filter(|p| p.matches_query(query)).collect()
    }
}

impl From<ProductsResponse> for CatalogSnapshot {
    fn from(response: ProductsResponse) -> Self {
        Self {
            products: response.products,
            categories: response.categories,
            brands: response.brands,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn featured_is_capped_by_limit_and_length() {
        let snapshot = CatalogSnapshot {
            products: (1..=6).map(|id| Product::sample(id, "P", 1.0)).collect(),
            ..CatalogSnapshot::default()
        };
        assert_eq!(snapshot.featured(4).len(), 4);
        assert_eq!(snapshot.featured(10).len(), 6);
        assert!(CatalogSnapshot::default().featured(4).is_empty());
        assert_eq!(snapshot.product(3).map(|p| p.id), Some(3));
        assert!(snapshot.product(42).is_none());
    }
}
