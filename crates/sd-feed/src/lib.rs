//! # sd-feed
//!
//! The presentation-facing state layer: the swiping feed and the profile
//! detail page, each driving the sd-core use cases.

pub mod detail;
pub mod feed;

pub use detail::DetailController;
pub use feed::{FeedController, FeedDependencies, FeedSettings, DEFAULT_PAGE_SIZE, DEFAULT_REFILL_THRESHOLD};
