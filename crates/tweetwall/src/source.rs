//! File-backed historical source.

use async_trait::async_trait;
use std::path::Path;
use tweetwall_core::{Tweet, TweetQuery};
use tweetwall_error::{JsonError, SourceError, SourceErrorKind, SourceResult, TweetwallResult};
use tweetwall_provider::{InMemoryTweetSource, TweetSource};

/// Answers the historical query from a JSON array of tweets on disk.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    inner: InMemoryTweetSource,
    len: usize,
}

impl JsonFileSource {
    /// Load the history file.
    ///
    /// # Errors
    ///
    /// Fails if the file cannot be read or is not a JSON array of tweets.
    pub fn load(path: impl AsRef<Path>) -> TweetwallResult<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| {
            SourceError::new(SourceErrorKind::Query {
                query: path.display().to_string(),
                message: e.to_string(),
            })
        })?;
        Ok(Self::from_json(&contents)?)
    }

    /// Parse history from JSON text.
    ///
    /// # Errors
    ///
    /// Fails if the text is not a JSON array of tweets.
    pub fn from_json(contents: &str) -> Result<Self, JsonError> {
        let history: Vec<Tweet> = serde_json::from_str(contents)?;

        tracing::info!(tweets = history.len(), "History loaded");
        Ok(Self {
            len: history.len(),
            inner: InMemoryTweetSource::new(history),
        })
    }

    /// Number of tweets in the file.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the file held no tweets.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

/// Decode one line of the live stream.
///
/// Blank lines yield `None`.
///
/// # Errors
///
/// Fails with [`SourceErrorKind::Malformed`] if the line is not a tweet.
pub fn parse_live_line(line: &str) -> SourceResult<Option<Tweet>> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }
    serde_json::from_str(line)
        .map(Some)
        .map_err(|e| SourceError::new(SourceErrorKind::Malformed(e.to_string())))
}

#[async_trait]
impl TweetSource for JsonFileSource {
    async fn search(&self, query: &TweetQuery) -> SourceResult<Vec<Tweet>> {
        self.inner.search(query).await
    }
}
