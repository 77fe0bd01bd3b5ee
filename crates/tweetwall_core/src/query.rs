//! Historical search query.

use serde::{Deserialize, Serialize};

/// A one-time historical query against the ingestion source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
pub struct TweetQuery {
    /// Filter string understood by the source (e.g. a hashtag)
    query: String,
    /// Maximum number of items to return
    count: usize,
}

impl TweetQuery {
    /// Create a query for up to `count` items matching `query`.
    pub fn new(query: impl Into<String>, count: usize) -> Self {
        Self {
            query: query.into(),
            count,
        }
    }
}
