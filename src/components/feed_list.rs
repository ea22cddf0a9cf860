//! Feed List Component
//!
//! Feed cards narrowed by the active filter, each with a star toggle.

use leptos::prelude::*;
use crate::feed::filter_feed;
use crate::models::{FeedItem, FeedItemType};
use crate::store::{store_toggle_star, use_app_store, AppStateStoreFields};

fn type_icon(item_type: FeedItemType) -> &'static str {
    match item_type {
        FeedItemType::Guest => "bi bi-chat-dots",
        FeedItemType::Task => "bi bi-check-square",
        FeedItemType::System => "bi bi-lightning",
        FeedItemType::Other => "bi bi-dot",
    }
}

/// Feed list for the current filter
#[component]
pub fn FeedList() -> impl IntoView {
    let store = use_app_store();

    let visible = Memo::new(move |_| {
        let filter = store.active_filter().get();
        store.feed_items().with(|items| {
            store.starred_ids().with(|starred| filter_feed(items, starred, filter))
        })
    });

    view! {
        <div class="feed-list">
            <Show
                when=move || !visible.with(|items| items.is_empty())
                fallback=|| view! { <div class="feed-empty">"Nothing here right now"</div> }
            >
                <For
                    each=move || visible.get()
                    key=|item| item.id.clone()
                    children=move |item| view! { <FeedCard item=item /> }
                />
            </Show>
        </div>
    }
}

/// Single feed card
#[component]
fn FeedCard(item: FeedItem) -> impl IntoView {
    let store = use_app_store();
    let id = item.id.clone();
    let star_id = id.clone();
    let is_starred = move || store.starred_ids().with(|ids| ids.contains(&id));
    let card_class = if item.is_open_task() { "feed-card open-task" } else { "feed-card" };

    view! {
        <div class=card_class>
            <i class={type_icon(item.item_type)}></i>
            <div class="feed-card-content">
                {item.title.map(|title| view! { <div class="feed-card-title">{title}</div> })}
                {item.body.map(|body| view! { <div class="feed-card-body">{body}</div> })}
            </div>
            <button
                class="star-btn"
                on:click=move |ev| {
                    ev.stop_propagation();
                    store_toggle_star(&store, &star_id);
                }
            >
                <i class=move || if is_starred() { "bi bi-star-fill" } else { "bi bi-star" }></i>
            </button>
        </div>
    }
}
