//! Favorites Store
//!
//! Ordered, id-unique collection of saved properties, persisted as a JSON
//! array in a single storage slot. The slot is read once in [`FavoritesStore::load`]
//! and rewritten after every mutation that changes the collection.

use std::collections::HashSet;

use serde_json::Value;

use crate::models::Property;
use crate::storage::{KeyValueStorage, StorageError};

/// Why a persisted favorites slot was discarded
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error("favorites slot is not valid JSON: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("favorites slot holds a {0}, expected a list")]
    NotAList(&'static str),
}

/// Outcome of parsing a favorites slot
#[derive(Debug, Default, PartialEq)]
pub struct Restored {
    pub entries: Vec<Property>,
    /// Invalid or duplicate entries skipped
    pub dropped: usize,
}

/// Parse and validate a persisted favorites slot.
///
/// Fails only when the slot as a whole is unusable; bad entries inside a
/// well-formed list are skipped and counted.
pub fn parse_favorites(raw: &str) -> Result<Restored, LoadError> {
    let parsed: Value = serde_json::from_str(raw)?;
    let Value::Array(records) = parsed else {
        return Err(LoadError::NotAList(json_kind(&parsed)));
    };

    let mut restored = Restored::default();
    let mut seen = HashSet::new();
    for record in &records {
        match Property::from_record(record) {
            Ok(property) if seen.insert(property.id.clone()) => restored.entries.push(property),
            Ok(property) => {
                log::debug!("[FAVORITES] Skipping duplicate entry {}", property.id);
                restored.dropped += 1;
            }
            Err(e) => {
                log::debug!("[FAVORITES] Skipping invalid entry: {}", e);
                restored.dropped += 1;
            }
        }
    }
    Ok(restored)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "list",
        Value::Object(_) => "object",
    }
}

/// Saved properties backed by a storage slot
#[derive(Debug)]
pub struct FavoritesStore<S> {
    entries: Vec<Property>,
    storage: S,
    key: String,
}

impl<S: KeyValueStorage> FavoritesStore<S> {
    /// Empty store; nothing is read from storage
    pub fn new(storage: S, key: impl Into<String>) -> Self {
        Self {
            entries: Vec::new(),
            storage,
            key: key.into(),
        }
    }

    /// Restore from the storage slot.
    /// An unusable slot is cleared and the store starts empty.
    pub fn load(storage: S, key: impl Into<String>) -> Self {
        let mut store = Self::new(storage, key);
        match store.read_slot() {
            Ok(restored) => {
                if restored.dropped > 0 {
                    log::warn!("[FAVORITES] Dropped {} invalid saved entries", restored.dropped);
                }
                log::info!("[FAVORITES] Restored {} favorites", restored.entries.len());
                store.entries = restored.entries;
            }
            Err(LoadError::Storage(e)) => {
                log::warn!("[FAVORITES] Could not read saved favorites: {}", e);
            }
            Err(e) => {
                log::warn!("[FAVORITES] Discarding saved favorites: {}", e);
                if let Err(e) = store.storage.remove(&store.key) {
                    log::error!("[FAVORITES] Could not clear favorites slot: {}", e);
                }
            }
        }
        store
    }

    fn read_slot(&self) -> Result<Restored, LoadError> {
        match self.storage.read(&self.key)? {
            Some(raw) => parse_favorites(&raw),
            None => Ok(Restored::default()),
        }
    }

    /// Write the whole collection to the slot
    pub fn save(&self) -> Result<(), StorageError> {
        let json = serde_json::to_string(&self.entries)
            .map_err(|e| StorageError::Js(e.to_string()))?;
        self.storage.write(&self.key, &json)
    }

    fn persist(&self) {
        if let Err(e) = self.save() {
            log::error!("[FAVORITES] Error saving favorites: {}", e);
        }
    }

    /// Add a property. Returns false if it is invalid or already saved.
    pub fn add(&mut self, property: Property) -> bool {
        if let Err(e) = property.validate() {
            log::error!("[FAVORITES] Invalid property data: {}", e);
            return false;
        }
        if self.is_favorite(&property.id) {
            return false;
        }
        self.entries.push(property);
        self.persist();
        true
    }

    /// Add an untyped record, e.g. one read back from a drop payload
    pub fn add_record(&mut self, record: &Value) -> bool {
        match Property::from_record(record) {
            Ok(property) => self.add(property),
            Err(e) => {
                log::error!("[FAVORITES] Invalid property data: {}", e);
                false
            }
        }
    }

    pub fn remove(&mut self, id: &str) {
        let before = self.entries.len();
        self.entries.retain(|fav| fav.id != id);
        if self.entries.len() != before {
            self.persist();
        }
    }

    pub fn is_favorite(&self, id: &str) -> bool {
        self.entries.iter().any(|fav| fav.id == id)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.persist();
    }

    pub fn entries(&self) -> &[Property] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
