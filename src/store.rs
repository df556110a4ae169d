//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::filter::{filter, Criteria};
use crate::models::Property;

/// Catalog and search state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Every listing in the bundled catalog
    pub catalog: Vec<Property>,
    /// Listings matching the last submitted search
    pub results: Vec<Property>,
    /// True once a search has been submitted and not cleared
    pub is_searching: bool,
    /// True until the catalog has been loaded
    pub loading: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            loading: true,
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Install the loaded catalog and leave the loading state
pub fn store_set_catalog(store: &AppStore, catalog: Vec<Property>) {
    store.catalog().set(catalog);
    store.loading().set(false);
}

/// Run a search over the catalog
pub fn store_apply_search(store: &AppStore, criteria: &Criteria) {
    let results = filter(&store.catalog().get_untracked(), criteria);
    log::info!("[SEARCH] {} listings match", results.len());
    store.results().set(results);
    store.is_searching().set(true);
}

/// Drop search results and show the whole catalog again
pub fn store_clear_search(store: &AppStore) {
    store.results().write().clear();
    store.is_searching().set(false);
}

/// Listings currently on screen
pub fn store_visible(store: &AppStore) -> Vec<Property> {
    if store.is_searching().get() {
        store.results().get()
    } else {
        store.catalog().get()
    }
}
