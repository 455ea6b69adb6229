// ============================================================================
// STORAGE - Almacenamiento clave/valor (localStorage o memoria)
// ============================================================================

use std::cell::RefCell;
use std::collections::HashMap;
use gloo_storage::{LocalStorage, Storage};
use serde::{Serialize, de::DeserializeOwned};
use crate::error::{StoreError, StoreResult};

/// Almacenamiento durable de strings por clave
pub trait KeyValueStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>>;
    fn set(&self, key: &str, value: &str) -> StoreResult<()>;
    fn remove(&self, key: &str) -> StoreResult<()>;
}

/// Guarda un valor serializado como JSON
pub fn save_json<T: Serialize>(store: &dyn KeyValueStore, key: &str, value: &T) -> StoreResult<()> {
    let json = serde_json::to_string(value)?;
    store.set(key, &json)
}

/// Carga y deserializa un valor; `Ok(None)` si la clave no existe
pub fn load_json<T: DeserializeOwned>(store: &dyn KeyValueStore, key: &str) -> StoreResult<Option<T>> {
    match store.get(key)? {
        Some(json) => Ok(Some(serde_json::from_str(&json)?)),
        None => Ok(None),
    }
}

/// `window.localStorage` vía gloo-storage
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorageStore;

impl LocalStorageStore {
    /// Verifica que localStorage sea accesible (modo privado, iframes sandbox...)
    pub fn is_available() -> bool {
        web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
            .is_some()
    }
}

impl KeyValueStore for LocalStorageStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        LocalStorage::raw()
            .get_item(key)
            .map_err(|_| StoreError::Storage("Error leyendo localStorage".to_string()))
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        LocalStorage::raw()
            .set_item(key, value)
            .map_err(|_| StoreError::Storage("Error guardando en localStorage".to_string()))
    }

    fn remove(&self, key: &str) -> StoreResult<()> {
        LocalStorage::delete(key);
        Ok(())
    }
}

/// Almacenamiento en memoria: fallback sin localStorage y para tests
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
    fail_writes: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store cuyas escrituras siempre fallan (cuota excedida)
    pub fn read_only() -> Self {
        Self {
            entries: RefCell::new(HashMap::new()),
            fail_writes: true,
        }
    }

    pub fn with_entry(self, key: &str, value: &str) -> Self {
        self.entries.borrow_mut().insert(key.to_string(), value.to_string());
        self
    }

    pub fn raw(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        if self.fail_writes {
            return Err(StoreError::Storage("QuotaExceededError".to_string()));
        }
        self.entries.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> StoreResult<()> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}
