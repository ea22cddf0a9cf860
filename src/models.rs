//! Frontend Models
//!
//! Feed data structures and the filter key shared by the bar and the feed list.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};

/// Kind of feed item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum FeedItemType {
    /// Guest message
    Guest,
    /// Service task
    Task,
    /// System notice
    System,
    /// Anything else (unknown or missing type)
    #[default]
    #[serde(other)]
    Other,
}

/// Task status, only `Completed` is significant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    Completed,
    Open,
    #[serde(other)]
    Other,
}

/// Null or wrongly typed values fall back to the field default
fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).unwrap_or_default())
}

/// A single feed entry (owned by the store, read-only for the bar)
///
/// Only `id` is required, every other field degrades to absent.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedItem {
    pub id: String,
    #[serde(rename = "type", default, deserialize_with = "lenient")]
    pub item_type: FeedItemType,
    #[serde(default, deserialize_with = "lenient")]
    pub thread_id: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub status: Option<TaskStatus>,
    #[serde(default, deserialize_with = "lenient")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub body: Option<String>,
}

impl FeedItem {
    #[cfg(test)]
    pub fn new(id: &str, item_type: FeedItemType) -> Self {
        Self {
            id: id.to_string(),
            item_type,
            thread_id: None,
            status: None,
            title: None,
            body: None,
        }
    }

    /// Guest message that has replies
    pub fn is_active_conversation(&self) -> bool {
        self.item_type == FeedItemType::Guest
            && self.thread_id.as_deref().is_some_and(|t| !t.is_empty())
    }

    /// Task not yet completed (missing status counts as open)
    pub fn is_open_task(&self) -> bool {
        self.item_type == FeedItemType::Task && self.status != Some(TaskStatus::Completed)
    }
}

/// The globally active feed filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum FilterKey {
    #[default]
    All,
    Guests,
    Service,
    System,
    Starred,
}

impl FilterKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            FilterKey::All => "all",
            FilterKey::Guests => "guests",
            FilterKey::Service => "service",
            FilterKey::System => "system",
            FilterKey::Starred => "starred",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feed_item_deserialize_camel_case() {
        let item: FeedItem = serde_json::from_str(
            r#"{"id":"x","type":"guest","threadId":"t1","title":"Late checkout?"}"#,
        )
        .unwrap();
        assert_eq!(item.item_type, FeedItemType::Guest);
        assert_eq!(item.thread_id.as_deref(), Some("t1"));
        assert_eq!(item.title.as_deref(), Some("Late checkout?"));
        assert!(item.is_active_conversation());
    }

    #[test]
    fn test_unknown_and_missing_fields() {
        let item: FeedItem = serde_json::from_str(r#"{"id":"1","type":"weather","status":"snoozed"}"#).unwrap();
        assert_eq!(item.item_type, FeedItemType::Other);
        assert_eq!(item.status, Some(TaskStatus::Other));

        let bare: FeedItem = serde_json::from_str(r#"{"id":"2"}"#).unwrap();
        assert_eq!(bare.item_type, FeedItemType::Other);
        assert!(bare.thread_id.is_none());
        assert!(bare.status.is_none());
    }

    #[test]
    fn test_null_and_mistyped_fields() {
        let item: FeedItem = serde_json::from_str(
            r#"{"id":"x","type":null,"threadId":7,"status":["completed"],"title":false}"#,
        )
        .unwrap();
        assert_eq!(item.item_type, FeedItemType::Other);
        assert!(item.thread_id.is_none());
        assert!(item.status.is_none());
        assert!(item.title.is_none());

        let guest: FeedItem = serde_json::from_str(r#"{"id":"g","type":"guest","threadId":{"id":1}}"#).unwrap();
        assert_eq!(guest.item_type, FeedItemType::Guest);
        assert!(!guest.is_active_conversation());
    }

    #[test]
    fn test_empty_thread_id_is_not_a_conversation() {
        let mut item = FeedItem::new("g", FeedItemType::Guest);
        item.thread_id = Some(String::new());
        assert!(!item.is_active_conversation());
    }

    #[test]
    fn test_open_task() {
        let mut task = FeedItem::new("t", FeedItemType::Task);
        assert!(task.is_open_task());
        task.status = Some(TaskStatus::Completed);
        assert!(!task.is_open_task());
        assert!(!FeedItem::new("s", FeedItemType::System).is_open_task());
    }

    #[test]
    fn test_filter_key_str() {
        assert_eq!(FilterKey::Service.as_str(), "service");
        let parsed: FilterKey = serde_json::from_str(r#""starred""#).unwrap();
        assert_eq!(parsed, FilterKey::Starred);
        assert_eq!(serde_json::to_string(&FilterKey::Guests).unwrap(), r#""guests""#);
    }
}
