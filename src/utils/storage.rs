use std::cell::RefCell;
use std::collections::HashMap;

use serde::{de::DeserializeOwned, Serialize};

use crate::error::StorageError;

/// Almacenamiento clave-valor persistente (localStorage en el navegador).
///
/// Los valores son strings; quien necesite estructuras usa `save_json` /
/// `load_json`.
pub trait KeyValueStorage {
    fn get_item(&self, key: &str) -> Option<String>;
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove_item(&self, key: &str) -> Result<(), StorageError>;
}

/// Almacenamiento en memoria: tests y navegadores sin localStorage
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: RefCell<HashMap<String, String>>,
    read_only: bool,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rechaza toda escritura, como un localStorage lleno o deshabilitado
    pub fn read_only() -> Self {
        Self {
            entries: RefCell::new(HashMap::new()),
            read_only: true,
        }
    }

    pub fn with_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            entries: RefCell::new(
                entries.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
            ),
            read_only: false,
        }
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.borrow().contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.read_only {
            return Err(StorageError::Write {
                key: key.to_string(),
                reason: "quota exceeded".to_string(),
            });
        }
        self.entries.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

/// Storage que puede no existir (localStorage deshabilitado o bloqueado):
/// las lecturas salen vacías y las escrituras fallan con `Unavailable`
impl<S: KeyValueStorage> KeyValueStorage for Option<S> {
    fn get_item(&self, key: &str) -> Option<String> {
        self.as_ref()?.get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.as_ref().ok_or(StorageError::Unavailable)?.set_item(key, value)
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        self.as_ref().ok_or(StorageError::Unavailable)?.remove_item(key)
    }
}

pub fn save_json<T: Serialize>(
    storage: &dyn KeyValueStorage,
    key: &str,
    value: &T,
) -> Result<(), StorageError> {
    let json = serde_json::to_string(value).map_err(|e| StorageError::Serialize {
        key: key.to_string(),
        reason: e.to_string(),
    })?;
    storage.set_item(key, &json)
}

/// `None` si la clave no existe o el JSON guardado no es parseable
pub fn load_json<T: DeserializeOwned>(storage: &dyn KeyValueStorage, key: &str) -> Option<T> {
    let json = storage.get_item(key)?;
    match serde_json::from_str(&json) {
        Ok(value) => Some(value),
        Err(e) => {
            log::warn!("⚠️ Valor corrupto en storage '{}': {}", key, e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_json_ignores_garbage() {
        let storage = MemoryStorage::with_entries([("userInfo", "{not json")]);
        let value: Option<HashMap<String, String>> = load_json(&storage, "userInfo");
        assert!(value.is_none());
    }

    #[test]
    fn save_then_load_json() {
        let storage = MemoryStorage::new();
        let mut map = HashMap::new();
        map.insert("role".to_string(), "DOCTOR".to_string());
        save_json(&storage, "userInfo", &map).unwrap();
        let loaded: HashMap<String, String> = load_json(&storage, "userInfo").unwrap();
        assert_eq!(loaded.get("role").map(String::as_str), Some("DOCTOR"));
    }

    #[test]
    fn read_only_storage_rejects_writes() {
        let storage = MemoryStorage::read_only();
        let err = storage.set_item("token", "abc").unwrap_err();
        assert!(matches!(err, StorageError::Write { .. }));
        assert!(storage.is_empty());
    }

    #[test]
    fn missing_storage_reads_empty_and_rejects_writes() {
        let storage: Option<MemoryStorage> = None;
        assert_eq!(storage.get_item("token"), None);
        assert_eq!(storage.set_item("token", "abc"), Err(StorageError::Unavailable));
        assert_eq!(storage.remove_item("token"), Err(StorageError::Unavailable));

        let present = Some(MemoryStorage::new());
        present.set_item("token", "abc").unwrap();
        assert_eq!(present.get_item("token").as_deref(), Some("abc"));
    }
}
