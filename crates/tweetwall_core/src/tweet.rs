//! Tweet type.

use crate::{MediaEntry, TweetUser};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tweetwall_error::BuilderError;

/// A single item of the live stream.
///
/// A retweet carries the original tweet in `retweeted_tweet`; the wall
/// displays the original, never the retweet wrapper.
///
/// # Examples
///
/// ```
/// use tweetwall_core::{TweetBuilder, TweetUserBuilder};
///
/// let user = TweetUserBuilder::default()
///     .id(1u64)
///     .screen_name("svennb")
///     .name("Sven")
///     .build()
///     .unwrap();
/// let tweet = TweetBuilder::default()
///     .id(42u64)
///     .text("Hello #devoxx")
///     .user(user)
///     .build()
///     .unwrap();
///
/// assert!(!tweet.is_retweet());
/// assert_eq!(*tweet.id(), 42);
/// ```
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    derive_builder::Builder,
    derive_getters::Getters,
)]
#[builder(setter(into), build_fn(error = "BuilderError"))]
pub struct Tweet {
    /// Platform tweet id
    id: u64,
    /// Tweet text
    text: String,
    /// When the tweet was created
    #[builder(default = "Utc::now()")]
    #[serde(default = "Utc::now")]
    created_at: DateTime<Utc>,
    /// Author
    user: TweetUser,
    /// The original when this tweet is a retweet
    #[builder(default)]
    #[serde(default)]
    retweeted_tweet: Option<Box<Tweet>>,
    /// Attached media
    #[builder(default)]
    #[serde(default)]
    media_entries: Vec<MediaEntry>,
}

impl Tweet {
    /// Whether this tweet reshares another one.
    pub fn is_retweet(&self) -> bool {
        self.retweeted_tweet.is_some()
    }

    /// The reshared original, if any.
    pub fn retweeted(&self) -> Option<&Tweet> {
        self.retweeted_tweet.as_deref()
    }

    /// Consume a retweet and return its original, or the tweet itself.
    pub fn into_original(self) -> Tweet {
        match self.retweeted_tweet {
            Some(original) => *original,
            None => self,
        }
    }

    /// First still-image attachment, if any.
    pub fn first_photo(&self) -> Option<&MediaEntry> {
        self.media_entries.iter().find(|m| m.is_photo())
    }
}
