// ============================================================================
// CATALOG STATE - Productos en memoria (una escritura por carga completa)
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;
use crate::models::{CatalogSnapshot, Product, ProductId};

#[derive(Clone, Default)]
pub struct CatalogState {
    snapshot: Rc<RefCell<Option<CatalogSnapshot>>>,
}

impl CatalogState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_loaded(&self) -> bool {
        self.snapshot.borrow().is_some()
    }

    pub fn replace(&self, snapshot: CatalogSnapshot) {
        *self.snapshot.borrow_mut() = Some(snapshot);
    }

    /// Copia del snapshot actual (vacío si aún no se cargó)
    pub fn snapshot(&self) -> CatalogSnapshot {
        self.snapshot.borrow().clone().unwrap_or_default()
    }

    pub fn product(&self, id: ProductId) -> Option<Product> {
        self.snapshot.borrow().as_ref()?.product(id).cloned()
    }

    pub fn search(&self, query: &str) -> Vec<Product> {
        match self.snapshot.borrow().as_ref() {
            Some(snapshot) => snapshot.search(query).into_iter().cloned().collect(),
            None => Vec::new(),
        }
    }
}
