//! Delivery counter provider.

use crate::NewTweetAware;
use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};
use tweetwall_core::Tweet;
use tweetwall_error::ProviderResult;

const PROVIDER_NAME: &str = "TweetCountDataProvider";

/// Counts every live tweet delivered to the wall.
#[derive(Debug, Default)]
pub struct TweetCountProvider {
    total: AtomicU64,
    last_received: Mutex<Option<DateTime<Utc>>>,
}

impl TweetCountProvider {
    /// Create a counter at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Tweets delivered so far.
    pub fn total(&self) -> u64 {
        self.total.load(Ordering::Relaxed)
    }

    /// When the last tweet arrived.
    pub fn last_received(&self) -> Option<DateTime<Utc>> {
        *self.last_received.lock()
    }
}

impl NewTweetAware for TweetCountProvider {
    fn name(&self) -> &str {
        PROVIDER_NAME
    }

    fn process_new_tweet(&self, _tweet: &Tweet) -> ProviderResult<()> {
        self.total.fetch_add(1, Ordering::Relaxed);
        *self.last_received.lock() = Some(Utc::now());
        Ok(())
    }
}
