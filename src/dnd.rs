//! Favorites Drag-and-Drop Bridge
//!
//! Connects drop payloads to the favorites store. One attempt per drop;
//! bad payloads are logged and the drop is abandoned.

use leptos_dragdrop::{read_id, read_record, DataCarrier, Draggable};

use crate::favorites::FavoritesStore;
use crate::models::Property;
use crate::security::sanitize_input;
use crate::storage::KeyValueStorage;

impl Draggable for Property {
    fn drag_id(&self) -> String {
        self.id.clone()
    }

    fn drag_label_html(&self) -> Option<String> {
        Some(format!(
            "<strong>{}</strong>: {}",
            self.property_type,
            sanitize_input(&self.location)
        ))
    }
}

/// Drop on the favorites list: remove the dragged id.
/// Returns true when a favorite was removed.
pub fn drop_to_remove<C, S>(carrier: &C, favorites: &mut FavoritesStore<S>) -> bool
where
    C: DataCarrier + ?Sized,
    S: KeyValueStorage,
{
    match read_id(carrier) {
        Ok(id) => {
            let was_favorite = favorites.is_favorite(&id);
            favorites.remove(&id);
            log::info!("[DND] Drop to remove: id={}, removed={}", id, was_favorite);
            was_favorite
        }
        Err(e) => {
            log::warn!("[DND] Ignoring drop: {}", e);
            false
        }
    }
}

/// Drop on the add zone: decode the structured payload and add it
pub fn drop_to_add<C, S>(carrier: &C, favorites: &mut FavoritesStore<S>) -> bool
where
    C: DataCarrier + ?Sized,
    S: KeyValueStorage,
{
    match read_record(carrier) {
        Ok(record) => {
            let added = favorites.add_record(&record);
            log::info!("[DND] Drop to add: added={}", added);
            added
        }
        Err(e) => {
            log::error!("[DND] Error parsing dropped property data: {}", e);
            false
        }
    }
}
