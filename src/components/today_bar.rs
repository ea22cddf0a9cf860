//! TodayBar Component
//!
//! Horizontal row of filter chips with badge counts.

use std::collections::HashSet;

use leptos::prelude::*;
use crate::metrics::{compute_metrics, toggle_filter};
use crate::models::{FeedItem, FilterKey};

/// Guests and starred use the muted badge, the rest the alert badge
fn badge_class(filter_key: FilterKey) -> &'static str {
    match filter_key {
        FilterKey::Guests | FilterKey::Starred => "badge rounded-pill bg-secondary",
        _ => "badge rounded-pill bg-danger",
    }
}

/// Filter chip bar
///
/// # Arguments
/// * `feed_items` - Current feed snapshot
/// * `starred_ids` - Starred item ids, stale ids are ignored
/// * `active_filter` - Highlighted chip
/// * `on_filter_change` - Called with the toggled filter on click
#[component]
pub fn TodayBar(
    #[prop(into)] feed_items: Signal<Vec<FeedItem>>,
    #[prop(into)] starred_ids: Signal<HashSet<String>>,
    #[prop(into)] active_filter: Signal<FilterKey>,
    #[prop(into)] on_filter_change: Callback<FilterKey>,
) -> impl IntoView {
    let metrics = Memo::new(move |_| {
        let active = active_filter.get();
        feed_items.with(|items| starred_ids.with(|starred| compute_metrics(items, Some(starred), active)))
    });

    view! {
        <div class="today-bar">
            <div class="today-bar-fade"></div>
            <div class="today-bar-fade-bottom"></div>
            {move || metrics.get().into_iter().map(|metric| {
                let filter_key = metric.filter_key;
                let chip_class = if metric.active {
                    "metric-item rounded-pill active"
                } else {
                    "metric-item rounded-pill"
                };
                let title = match &metric.detail {
                    Some(detail) => format!("{} ({})", metric.label, detail),
                    None => metric.label.to_string(),
                };
                view! {
                    <div
                        class=chip_class
                        title=title
                        on:click=move |_| {
                            on_filter_change.run(toggle_filter(active_filter.get_untracked(), filter_key));
                        }
                    >
                        <i class={format!("bi {}", metric.icon)}></i>
                        {metric.badge.map(|count| view! {
                            <span class={badge_class(filter_key)}>{count}</span>
                        })}
                    </div>
                }
            }).collect_view()}
        </div>
    }
}
