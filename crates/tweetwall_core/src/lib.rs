//! Core data types for the TweetWall step engine.
//!
//! These are the items that flow from the ingestion source through the data
//! providers into the steps: tweets, their authors, and their media.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod media;
mod query;
mod tweet;
mod user;

pub use media::{MediaEntry, MediaEntryBuilder, MediaKind, MediaSize, PhotoSize};
pub use query::TweetQuery;
pub use tweet::{Tweet, TweetBuilder};
pub use user::{TweetUser, TweetUserBuilder};
