//! Feed Loading and Filtering
//!
//! Parses the bundled feed and narrows it by the active filter.

use std::collections::HashSet;

use crate::models::{FeedItem, FeedItemType, FilterKey};

const FEED_FIXTURE: &str = include_str!("../assets/feed.json");

/// Parsed feed plus the entries that could not be decoded
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedFeed {
    pub items: Vec<FeedItem>,
    /// One message per skipped entry
    pub skipped: Vec<String>,
}

/// Decode each entry on its own so a bad entry only drops itself.
/// Fails only when the document is not a JSON array.
pub fn parse_feed(json: &str) -> Result<ParsedFeed, String> {
    let entries: Vec<serde_json::Value> = serde_json::from_str(json).map_err(|e| e.to_string())?;

    let mut parsed = ParsedFeed::default();
    for (index, entry) in entries.into_iter().enumerate() {
        match serde_json::from_value::<FeedItem>(entry) {
            Ok(item) => parsed.items.push(item),
            Err(e) => parsed.skipped.push(format!("entry {}: {}", index, e)),
        }
    }
    Ok(parsed)
}

/// Load the feed bundled at compile time
pub fn load_feed() -> Result<ParsedFeed, String> {
    parse_feed(FEED_FIXTURE)
}

/// Items visible under `filter`, in feed order
pub fn filter_feed(feed_items: &[FeedItem], starred_ids: &HashSet<String>, filter: FilterKey) -> Vec<FeedItem> {
    let matches = |item: &FeedItem| match filter {
        FilterKey::All => true,
        FilterKey::Guests => item.item_type == FeedItemType::Guest,
        FilterKey::Service => item.item_type == FeedItemType::Task,
        FilterKey::System => item.item_type == FeedItemType::System,
        FilterKey::Starred => starred_ids.contains(&item.id),
    };

    feed_items.iter().filter(|&item| matches(item)).cloned().collect()
}
