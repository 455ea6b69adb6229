use serde::{Deserialize, Serialize};
use crate::models::product::{Product, ProductId};

/// Línea del carrito. Nombres JSON compatibles con el `stone_cart` existente
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    pub id: ProductId,
    #[serde(default)]
    pub name: String,
    #[serde(rename = "price")]
    pub unit_price: f64,
    #[serde(default, rename = "originalPrice")]
    pub original_price: f64,
    #[serde(default, rename = "image")]
    pub image_url: Option<String>,
    pub quantity: u32,
    #[serde(default)]
    pub brand: Option<String>,
}

impl CartItem {
    pub fn from_product(product: &Product, quantity: u32) -> Self {
        Self {
            id: product.id,
            name: product.name.clone(),
            unit_price: product.effective_price(),
            original_price: product.price,
            image_url: product.main_image_url.clone(),
            quantity: quantity.max(1),
            brand: product.brand.clone(),
        }
    }

    pub fn line_total(&self) -> f64 {
        self.unit_price * f64::from(self.quantity)
    }
}

/// Carrito: `total` solo se modifica vía `recompute_total`
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "StoredCart")]
pub struct Cart {
    items: Vec<CartItem>,
    total: f64,
}

/// Forma persistida: el total guardado se ignora y se recalcula
#[derive(Deserialize)]
struct StoredCart {
    #[serde(default)]
    items: Vec<CartItem>,
}

impl From<StoredCart> for Cart {
    fn from(stored: StoredCart) -> Self {
        let mut cart = Cart::default();
        for mut item in stored.items {
            item.quantity = item.quantity.max(1);
            // Una sola línea por producto aunque el JSON venga duplicado
            match cart.items.iter_mut().find(|i| i.id == item.id) {
                Some(existing) => existing.quantity = existing.quantity.saturating_add(item.quantity),
                None => cart.items.push(item),
            }
        }
        cart.recompute_total();
        cart
    }
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn total(&self) -> f64 {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn item(&self, id: ProductId) -> Option<&CartItem> {
        self.items.iter().find(|i| i.id == id)
    }

    /// Unidades totales (badge del header)
    pub fn item_count(&self) -> u32 {
        self.items.iter().map(|i| i.quantity).fold(0, u32::saturating_add)
    }

    /// Suma `quantity` si el producto ya está; si no, agrega una línea nueva
    pub fn add(&mut self, product: &Product, quantity: u32) {
        let quantity = quantity.max(1);
        match self.items.iter_mut().find(|i| i.id == product.id) {
            Some(item) => item.quantity = item.quantity.saturating_add(quantity),
            None => self.items.push(CartItem::from_product(product, quantity)),
        }
        self.recompute_total();
    }

    /// Devuelve `true` si había una línea con ese id
    pub fn remove(&mut self, id: ProductId) -> bool {
        let before = self.items.len();
        self.items.retain(|i| i.id != id);
        self.recompute_total();
        self.items.len() != before
    }

    /// Cantidades < 1 se fuerzan a 1. Devuelve `false` si el id no está
    pub fn set_quantity(&mut self, id: ProductId, quantity: i64) -> bool {
        let Some(item) = self.items.iter_mut().find(|i| i.id == id) else {
            return false;
        };
        item.quantity = u32::try_from(quantity.max(1)).unwrap_or(u32::MAX);
        self.recompute_total();
        true
    }

    pub fn clear(&mut self) {
        self.items.clear();
        self.recompute_total();
    }

    fn recompute_total(&mut self) {
        self.total = self.items.iter().map(CartItem::line_total).sum();
    }
}
