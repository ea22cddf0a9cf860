//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use std::collections::HashSet;

use leptos::prelude::*;
use reactive_stores::Store;
use crate::models::{FeedItem, FilterKey};
use crate::storage;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Current feed snapshot
    pub feed_items: Vec<FeedItem>,
    /// Starred item ids (may include ids no longer in the feed)
    pub starred_ids: HashSet<String>,
    /// The single active filter
    pub active_filter: FilterKey,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
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

/// Replace the whole feed snapshot
pub fn store_replace_feed(store: &AppStore, feed_items: Vec<FeedItem>) {
    store.feed_items().set(feed_items);
}

/// Set the active filter
pub fn store_set_filter(store: &AppStore, filter: FilterKey) {
    store.active_filter().set(filter);
}

/// Star or unstar an item, then persist the set
pub fn store_toggle_star(store: &AppStore, item_id: &str) {
    let starred = store.starred_ids();
    {
        let mut ids = starred.write();
        if !ids.remove(item_id) {
            ids.insert(item_id.to_string());
        }
    }
    if let Err(e) = starred.with_untracked(storage::save_starred) {
        web_sys::console::error_1(&format!("[STORE] Failed to save starred: {}", e).into());
    }
}
