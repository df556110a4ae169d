//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;
use leptos_dragdrop::{create_dnd_signals, DndSignals};

use crate::config::AppConfig;
use crate::dnd;
use crate::favorites::FavoritesStore;
use crate::models::Property;
use crate::storage::BrowserStorage;

pub type Favorites = FavoritesStore<BrowserStorage>;

/// Which screen is shown
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Page {
    Search,
    /// Detail view for a listing id
    Property(String),
}

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Saved properties, restored from local storage at start-up
    pub favorites: RwSignal<Favorites>,
    /// Current screen
    pub page: RwSignal<Page>,
    /// Shared drag state for cards and drop targets
    pub dnd: DndSignals,
    pub config: StoredValue<AppConfig>,
}

impl AppContext {
    pub fn new(config: AppConfig) -> Self {
        let favorites = FavoritesStore::load(BrowserStorage, config.favorites_key.clone());
        Self {
            favorites: RwSignal::new(favorites),
            page: RwSignal::new(Page::Search),
            dnd: create_dnd_signals(),
            config: StoredValue::new(config),
        }
    }

    pub fn add_favorite(&self, property: Property) -> bool {
        let mut added = false;
        self.favorites.update(|favs| added = favs.add(property));
        added
    }

    pub fn remove_favorite(&self, id: &str) {
        self.favorites.update(|favs| favs.remove(id));
    }

    pub fn is_favorite(&self, id: &str) -> bool {
        self.favorites.with(|favs| favs.is_favorite(id))
    }

    /// Star button behaviour
    pub fn toggle_favorite(&self, property: &Property) {
        if self.favorites.with_untracked(|favs| favs.is_favorite(&property.id)) {
            self.remove_favorite(&property.id);
        } else {
            self.add_favorite(property.clone());
        }
    }

    pub fn clear_favorites(&self) {
        self.favorites.update(|favs| favs.clear());
    }

    pub fn drop_to_add(&self, transfer: &web_sys::DataTransfer) {
        self.favorites.update(|favs| {
            dnd::drop_to_add(transfer, favs);
        });
    }

    pub fn drop_to_remove(&self, transfer: &web_sys::DataTransfer) {
        self.favorites.update(|favs| {
            dnd::drop_to_remove(transfer, favs);
        });
    }

    pub fn open_property(&self, id: String) {
        self.page.set(Page::Property(id));
    }

    pub fn back_to_search(&self) {
        self.page.set(Page::Search);
    }
}
