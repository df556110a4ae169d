//! Key-Value Storage
//!
//! Abstract slot storage. The browser implementation wraps
//! `window.localStorage`; tests use the in-memory one.

/// Errors from the storage primitive
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    #[error("local storage is not available")]
    Unavailable,
    #[error("storage call failed: {0}")]
    Js(String),
}

/// Synchronous string slots keyed by name
pub trait KeyValueStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError>;

    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// `window.localStorage`, looked up on every call
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn slot() -> Result<web_sys::Storage, StorageError> {
        let window = web_sys::window().ok_or(StorageError::Unavailable)?;
        window
            .local_storage()
            .map_err(|e| StorageError::Js(format!("{:?}", e)))?
            .ok_or(StorageError::Unavailable)
    }
}

impl KeyValueStorage for BrowserStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        Self::slot()?
            .get_item(key)
            .map_err(|e| StorageError::Js(format!("{:?}", e)))
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        Self::slot()?
            .set_item(key, value)
            .map_err(|e| StorageError::Js(format!("{:?}", e)))
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        Self::slot()?
            .remove_item(key)
            .map_err(|e| StorageError::Js(format!("{:?}", e)))
    }
}

#[cfg(test)]
pub(crate) use memory::MemoryStorage;

#[cfg(test)]
mod memory {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::rc::Rc;

    /// Shared in-memory slots; clones see the same data, like a page reload
    /// seeing the same `localStorage`.
    #[derive(Debug, Clone, Default)]
    pub struct MemoryStorage {
        slots: Rc<RefCell<HashMap<String, String>>>,
        fail_writes: bool,
    }

    impl MemoryStorage {
        pub fn with(key: &str, value: &str) -> Self {
            let storage = Self::default();
            storage.slots.borrow_mut().insert(key.to_string(), value.to_string());
            storage
        }

        /// Storage whose writes always fail, like a full quota
        pub fn failing() -> Self {
            Self { fail_writes: true, ..Self::default() }
        }

        pub fn get(&self, key: &str) -> Option<String> {
            self.slots.borrow().get(key).cloned()
        }
    }

    impl KeyValueStorage for MemoryStorage {
        fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
            Ok(self.get(key))
        }

        fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
            if self.fail_writes {
                return Err(StorageError::Js("QuotaExceededError".to_string()));
            }
            self.slots.borrow_mut().insert(key.to_string(), value.to_string());
            Ok(())
        }

        fn remove(&self, key: &str) -> Result<(), StorageError> {
            self.slots.borrow_mut().remove(key);
            Ok(())
        }
    }
}
