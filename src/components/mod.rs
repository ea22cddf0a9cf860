//! UI Components
//!
//! Leptos components for the filter bar and the feed.

mod today_bar;
mod feed_list;

pub use today_bar::TodayBar;
pub use feed_list::FeedList;
