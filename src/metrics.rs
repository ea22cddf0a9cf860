//! Filter Summary
//!
//! Badge counts for the TodayBar chips and the filter toggle.

use std::collections::HashSet;

use crate::models::{FeedItem, FeedItemType, FilterKey};

/// One filter chip as shown in the TodayBar
#[derive(Debug, Clone, PartialEq)]
pub struct MetricDescriptor {
    pub key: &'static str,
    pub filter_key: FilterKey,
    pub label: &'static str,
    /// Bootstrap icon class
    pub icon: &'static str,
    /// Never `Some(0)`
    pub badge: Option<u32>,
    /// Secondary text, "active/total" on the tasks chip
    pub detail: Option<String>,
    /// Chip matches the active filter
    pub active: bool,
}

/// Raw counts behind the descriptors
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FeedCounts {
    /// Guest messages with a thread
    pub active_conversations: u32,
    /// Tasks not completed
    pub task_active: u32,
    pub task_total: u32,
    /// Starred ids that still exist in the feed
    pub starred: u32,
}

pub fn feed_counts(feed_items: &[FeedItem], starred_ids: Option<&HashSet<String>>) -> FeedCounts {
    let count = |pred: fn(&FeedItem) -> bool| feed_items.iter().filter(|&item| pred(item)).count() as u32;

    let starred = match starred_ids {
        Some(starred) if !starred.is_empty() => {
            let current: HashSet<&str> = feed_items.iter().map(|item| item.id.as_str()).collect();
            starred.iter().filter(|id| current.contains(id.as_str())).count() as u32
        }
        _ => 0,
    };

    FeedCounts {
        active_conversations: count(FeedItem::is_active_conversation),
        task_active: count(FeedItem::is_open_task),
        task_total: count(|item| item.item_type == FeedItemType::Task),
        starred,
    }
}

fn badge(count: u32) -> Option<u32> {
    (count > 0).then_some(count)
}

/// Build the four chips in fixed order: guests, service, system, starred.
pub fn compute_metrics(
    feed_items: &[FeedItem],
    starred_ids: Option<&HashSet<String>>,
    active_filter: FilterKey,
) -> [MetricDescriptor; 4] {
    let counts = feed_counts(feed_items, starred_ids);

    let chip = |filter_key: FilterKey, label, icon, badge, detail| MetricDescriptor {
        key: filter_key.as_str(),
        filter_key,
        label,
        icon,
        badge,
        detail,
        active: filter_key == active_filter,
    };

    [
        chip(FilterKey::Guests, "Messages", "bi-chat-dots", badge(counts.active_conversations), None),
        chip(
            FilterKey::Service,
            "Tasks",
            "bi-check-square",
            badge(counts.task_active),
            Some(format!("{}/{}", counts.task_active, counts.task_total)),
        ),
        // Countdown lives on the system message card, no badge here
        chip(FilterKey::System, "System", "bi-lightning", None, None),
        chip(FilterKey::Starred, "Starred", "bi-star", badge(counts.starred), None),
    ]
}

/// Clicking the active chip clears the filter.
pub fn toggle_filter(current: FilterKey, clicked: FilterKey) -> FilterKey {
    if clicked == current {
        FilterKey::All
    } else {
        clicked
    }
}
