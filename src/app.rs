//! TodayBar Frontend App
//!
//! Hosts the filter bar above the feed it narrows.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{FeedList, TodayBar};
use crate::feed;
use crate::models::FilterKey;
use crate::storage;
use crate::store::{store_replace_feed, store_set_filter, AppState, AppStateStoreFields, AppStore};

#[component]
pub fn App() -> impl IntoView {
    let store: AppStore = Store::new(AppState::new());
    provide_context(store);

    // Load feed and starred ids on mount
    match feed::load_feed() {
        Ok(loaded) => {
            for skipped in &loaded.skipped {
                web_sys::console::warn_1(&format!("[APP] Skipped feed {}", skipped).into());
            }
            web_sys::console::log_1(&format!("[APP] Loaded {} feed items", loaded.items.len()).into());
            store_replace_feed(&store, loaded.items);
        }
        Err(e) => web_sys::console::error_1(&format!("[APP] Failed to load feed: {}", e).into()),
    }
    match storage::load_starred() {
        Ok(ids) => store.starred_ids().set(ids),
        Err(e) => web_sys::console::error_1(&format!("[APP] Failed to load starred: {}", e).into()),
    }

    let feed_items = Signal::derive(move || store.feed_items().get());
    let starred_ids = Signal::derive(move || store.starred_ids().get());
    let active_filter = Signal::derive(move || store.active_filter().get());

    let on_filter_change = Callback::new(move |filter: FilterKey| {
        web_sys::console::log_1(&format!("[APP] Filter -> {}", filter.as_str()).into());
        store_set_filter(&store, filter);
    });

    view! {
        <div class="app-layout">
            <TodayBar
                feed_items=feed_items
                starred_ids=starred_ids
                active_filter=active_filter
                on_filter_change=on_filter_change
            />
            <main class="main-content">
                <FeedList />
            </main>
        </div>
    }
}
