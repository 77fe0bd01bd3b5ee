//! Historical query sources.

use async_trait::async_trait;
use tweetwall_core::{Tweet, TweetQuery};
use tweetwall_error::{SourceError, SourceErrorKind, SourceResult};

/// Answers the one-time historical query used to seed providers.
#[async_trait]
pub trait TweetSource: Send + Sync {
    /// Return up to `query.count()` tweets matching the query, oldest first.
    async fn search(&self, query: &TweetQuery) -> SourceResult<Vec<Tweet>>;
}

/// Source backed by a fixed list of tweets.
///
/// The query matches case-insensitively against the tweet text; an empty
/// query matches everything.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTweetSource {
    history: Vec<Tweet>,
    failure: Option<String>,
}

impl InMemoryTweetSource {
    /// Source answering from `history`.
    pub fn new(history: Vec<Tweet>) -> Self {
        Self {
            history,
            failure: None,
        }
    }

    /// Source whose every query fails with `message`.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            history: Vec::new(),
            failure: Some(message.into()),
        }
    }
}

#[async_trait]
impl TweetSource for InMemoryTweetSource {
    #[tracing::instrument(skip(self), fields(query = %query.query(), count = query.count()))]
    async fn search(&self, query: &TweetQuery) -> SourceResult<Vec<Tweet>> {
        if let Some(message) = &self.failure {
            return Err(SourceError::new(SourceErrorKind::Query {
                query: query.query().clone(),
                message: message.clone(),
            }));
        }

        let needle = query.query().to_lowercase();
        let found: Vec<Tweet> = self
            .history
            .iter()
            .filter(|t| needle.is_empty() || t.text().to_lowercase().contains(&needle))
            .take(*query.count())
            .cloned()
            .collect();

        tracing::debug!(found = found.len(), "Historical query answered");
        Ok(found)
    }
}
