//! Bounded window of the most recent tweets.

use crate::{NewTweetAware, TweetSource, latest_image_url};
use derive_getters::Getters;
use parking_lot::{Mutex, RwLock};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, VecDeque};
use tweetwall_core::{Tweet, TweetQuery};
use tweetwall_error::{
    ConfigError, ConfigErrorKind, ProviderError, ProviderErrorKind, ProviderResult,
    TweetwallResult,
};

const PROVIDER_NAME: &str = "TweetStreamDataProvider";

/// Raw provider settings as they appear in configuration.
///
/// Numbers are signed here; [`TweetStreamConfig::try_from`] rejects
/// negatives by setting name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TweetStreamSettings {
    /// Number of tweets requested from the historical query at startup.
    #[serde(default = "default_history_size")]
    pub history_size: i64,
    /// Number of tweets kept in the window.
    #[serde(default = "default_max_tweets")]
    pub max_tweets: i64,
    /// Followers an author needs for a tweet to be considered.
    #[serde(default)]
    pub min_followers_count: i64,
    /// Screen names blocked from the wall. Parsed but not applied yet.
    #[serde(default)]
    pub blocked_screen_names: BTreeSet<String>,
}

fn default_history_size() -> i64 {
    25
}

fn default_max_tweets() -> i64 {
    4
}

impl Default for TweetStreamSettings {
    fn default() -> Self {
        Self {
            history_size: default_history_size(),
            max_tweets: default_max_tweets(),
            min_followers_count: 0,
            blocked_screen_names: BTreeSet::new(),
        }
    }
}

/// Validated configuration of a [`TweetStreamProvider`].
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct TweetStreamConfig {
    history_size: usize,
    max_tweets: usize,
    min_followers_count: u64,
    blocked_screen_names: BTreeSet<String>,
}

impl TweetStreamConfig {
    /// Create a configuration from already non-negative values.
    pub fn new(history_size: usize, max_tweets: usize, min_followers_count: u64) -> Self {
        Self {
            history_size,
            max_tweets,
            min_followers_count,
            blocked_screen_names: BTreeSet::new(),
        }
    }

    /// Set the blocked screen names.
    pub fn with_blocked_screen_names(mut self, names: impl IntoIterator<Item = String>) -> Self {
        self.blocked_screen_names = names.into_iter().collect();
        self
    }
}

impl Default for TweetStreamConfig {
    fn default() -> Self {
        Self::new(25, 4, 0)
    }
}

fn non_negative(setting: &str, value: i64) -> Result<u64, ConfigError> {
    u64::try_from(value).map_err(|_| {
        ConfigError::new(ConfigErrorKind::NegativeSetting {
            component: PROVIDER_NAME.to_string(),
            setting: setting.to_string(),
            value,
        })
    })
}

fn as_usize(setting: &str, value: u64) -> Result<usize, ConfigError> {
    usize::try_from(value).map_err(|_| {
        ConfigError::new(ConfigErrorKind::InvalidSetting {
            component: PROVIDER_NAME.to_string(),
            setting: setting.to_string(),
            reason: format!("{} does not fit in memory", value),
        })
    })
}

impl TryFrom<TweetStreamSettings> for TweetStreamConfig {
    type Error = ConfigError;

    fn try_from(settings: TweetStreamSettings) -> Result<Self, Self::Error> {
        let history_size = as_usize(
            "historySize",
            non_negative("historySize", settings.history_size)?,
        )?;
        let max_tweets = as_usize("maxTweets", non_negative("maxTweets", settings.max_tweets)?)?;
        let min_followers_count = non_negative("minFollowersCount", settings.min_followers_count)?;

        Ok(Self {
            history_size,
            max_tweets,
            min_followers_count,
            blocked_screen_names: settings.blocked_screen_names,
        })
    }
}

/// What happened to an ingested tweet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IngestOutcome {
    /// The tweet (or the original of a retweet) now leads the window.
    Inserted {
        /// Id of the inserted tweet
        id: u64,
        /// Ids pushed out of the back of the window
        evicted: Vec<u64>,
    },
    /// The author has too few followers.
    Filtered,
    /// A retweet whose original is already in the window.
    DuplicateReshare,
}

struct Insertion {
    outcome: IngestOutcome,
    image: Option<String>,
}

impl Insertion {
    fn skipped(outcome: IngestOutcome) -> Self {
        Self {
            outcome,
            image: None,
        }
    }
}

/// Applies the insertion policy to a buffer the caller holds exclusively.
///
/// Image derivation runs before the buffer is touched, so a data error
/// leaves the buffer unchanged.
fn insert(
    config: &TweetStreamConfig,
    buffer: &mut VecDeque<Tweet>,
    tweet: Tweet,
) -> ProviderResult<Insertion> {
    // Inclusive: an author with exactly the minimum is admitted.
    if *tweet.user().followers_count() < config.min_followers_count {
        tracing::debug!(
            tweet_id = tweet.id(),
            followers = tweet.user().followers_count(),
            min_followers = config.min_followers_count,
            "Tweet filtered by follower threshold"
        );
        return Ok(Insertion::skipped(IngestOutcome::Filtered));
    }

    let candidate = if tweet.is_retweet() {
        let original = tweet.into_original();
        if buffer.iter().any(|t| t.id() == original.id()) {
            tracing::debug!(original_id = original.id(), "Original already shown, retweet dropped");
            return Ok(Insertion::skipped(IngestOutcome::DuplicateReshare));
        }
        original
    } else {
        tweet
    };

    let image = latest_image_url(&candidate)?;
    let id = *candidate.id();
    buffer.push_front(candidate);

    let mut evicted = Vec::new();
    while buffer.len() > config.max_tweets {
        if let Some(old) = buffer.pop_back() {
            evicted.push(*old.id());
        }
    }

    Ok(Insertion {
        outcome: IngestOutcome::Inserted { id, evicted },
        image,
    })
}

/// Provides an always current window of tweets.
///
/// Writers (`seed`, `ingest`) and readers (`snapshot`) share one read-write
/// lock over the window. The latest derived image lives in its own slot,
/// written inside the writer's critical section and replaced as a whole, so
/// reading it never touches the window lock.
///
/// # Example
///
/// ```
/// use tweetwall_core::{TweetBuilder, TweetUserBuilder};
/// use tweetwall_provider::{TweetStreamConfig, TweetStreamProvider};
///
/// let provider = TweetStreamProvider::new(TweetStreamConfig::new(25, 2, 0));
/// for id in 1..=3u64 {
///     let user = TweetUserBuilder::default().id(id).screen_name("u").name("u").build().unwrap();
///     let tweet = TweetBuilder::default().id(id).text("t").user(user).build().unwrap();
///     provider.ingest(tweet).unwrap();
/// }
///
/// let ids: Vec<u64> = provider.snapshot().iter().map(|t| *t.id()).collect();
/// assert_eq!(ids, vec![3, 2]);
/// ```
#[derive(Debug)]
pub struct TweetStreamProvider {
    config: TweetStreamConfig,
    tweets: RwLock<VecDeque<Tweet>>,
    latest_image: Mutex<Option<String>>,
}

impl TweetStreamProvider {
    /// Create an empty, unseeded provider.
    pub fn new(config: TweetStreamConfig) -> Self {
        if !config.blocked_screen_names.is_empty() {
            // TODO: drop tweets from blocked authors once the filter position is settled
            tracing::warn!(
                blocked = config.blocked_screen_names.len(),
                "blockedScreenNames is configured but not applied to ingested tweets"
            );
        }

        tracing::info!(
            history_size = config.history_size,
            max_tweets = config.max_tweets,
            min_followers = config.min_followers_count,
            "Initialize tweet stream provider"
        );

        Self {
            tweets: RwLock::new(VecDeque::new()),
            latest_image: Mutex::new(None),
            config,
        }
    }

    /// Create a provider and seed it from the historical query.
    ///
    /// # Errors
    ///
    /// Fails if the source query fails or the history contains an item that
    /// cannot be processed; no provider is returned in either case.
    #[tracing::instrument(skip(config, source), fields(query = %query))]
    pub async fn create(
        config: TweetStreamConfig,
        query: &str,
        source: &dyn TweetSource,
    ) -> TweetwallResult<Self> {
        let provider = Self::new(config);

        tracing::info!("Reinit the history");
        let history = source
            .search(&TweetQuery::new(query, provider.config.history_size))
            .await?;
        let inserted = provider.seed(history)?;

        tracing::info!(inserted, "Tweet stream provider seeded");
        Ok(provider)
    }

    /// Validated configuration.
    pub fn config(&self) -> &TweetStreamConfig {
        &self.config
    }

    /// Insert a batch of historical tweets in order.
    ///
    /// The write lock is held for the whole batch. The batch is applied to a
    /// staged copy and committed only if every item succeeds, so readers see
    /// either none or all of the seed.
    ///
    /// Returns the number of tweets inserted.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderErrorKind::SeedFailed`] if any item fails; the
    /// window and latest image are left as they were.
    #[tracing::instrument(skip(self, history))]
    pub fn seed(&self, history: impl IntoIterator<Item = Tweet>) -> ProviderResult<usize> {
        let mut tweets = self.tweets.write();
        let mut staged = tweets.clone();
        let mut staged_image = None;
        let mut inserted = 0;

        for tweet in history {
            let tweet_id = *tweet.id();
            let insertion = insert(&self.config, &mut staged, tweet).map_err(|e| {
                tracing::error!(tweet_id, error = %e, "Seed aborted");
                ProviderError::new(ProviderErrorKind::SeedFailed {
                    provider: PROVIDER_NAME.to_string(),
                    message: e.kind().to_string(),
                })
            })?;

            if matches!(insertion.outcome, IngestOutcome::Inserted { .. }) {
                inserted += 1;
            }
            if insertion.image.is_some() {
                staged_image = insertion.image;
            }
        }

        *tweets = staged;
        if staged_image.is_some() {
            *self.latest_image.lock() = staged_image;
        }

        tracing::debug!(inserted, window = tweets.len(), "Seed committed");
        Ok(inserted)
    }

    /// Apply one live tweet.
    ///
    /// Follower filter, retweet de-duplication, insertion at the front and
    /// eviction from the back all happen under one write lock acquisition.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderErrorKind::UnknownMediaSize`] when the tweet's photo
    /// reports an unknown size key; the tweet is not inserted.
    #[tracing::instrument(skip(self, tweet), fields(tweet_id = tweet.id()))]
    pub fn ingest(&self, tweet: Tweet) -> ProviderResult<IngestOutcome> {
        tracing::debug!("Add tweet");
        let mut tweets = self.tweets.write();
        let insertion = insert(&self.config, &mut tweets, tweet)?;

        if insertion.image.is_some() {
            *self.latest_image.lock() = insertion.image;
        }

        Ok(insertion.outcome)
    }

    /// Point-in-time copy of the window, newest first.
    pub fn snapshot(&self) -> Vec<Tweet> {
        self.tweets.read().iter().cloned().collect()
    }

    /// The most recently derived image URL, if any tweet carried one.
    pub fn latest_image(&self) -> Option<String> {
        self.latest_image.lock().clone()
    }

    /// Number of tweets currently in the window.
    pub fn len(&self) -> usize {
        self.tweets.read().len()
    }

    /// Whether the window is empty.
    pub fn is_empty(&self) -> bool {
        self.tweets.read().is_empty()
    }
}

impl NewTweetAware for TweetStreamProvider {
    fn name(&self) -> &str {
        PROVIDER_NAME
    }

    fn process_new_tweet(&self, tweet: &Tweet) -> ProviderResult<()> {
        tracing::info!("New tweet received");
        self.ingest(tweet.clone()).map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tweetwall_core::{TweetBuilder, TweetUserBuilder};

    fn tweet(id: u64, followers: u64) -> Tweet {
        let user = TweetUserBuilder::default()
            .id(id)
            .screen_name(format!("user{}", id))
            .name("User")
            .followers_count(followers)
            .build()
            .unwrap();
        TweetBuilder::default()
            .id(id)
            .text(format!("tweet {}", id))
            .user(user)
            .build()
            .unwrap()
    }

    #[test]
    fn test_settings_defaults() {
        let settings: TweetStreamSettings = toml::from_str("").unwrap();
        assert_eq!(settings, TweetStreamSettings::default());

        let config = TweetStreamConfig::try_from(settings).unwrap();
        assert_eq!(*config.history_size(), 25);
        assert_eq!(*config.max_tweets(), 4);
        assert_eq!(*config.min_followers_count(), 0);
        assert!(config.blocked_screen_names().is_empty());
    }

    #[test]
    fn test_negative_settings_rejected_by_name() {
        for (setting, settings) in [
            (
                "historySize",
                TweetStreamSettings {
                    history_size: -1,
                    ..Default::default()
                },
            ),
            (
                "maxTweets",
                TweetStreamSettings {
                    max_tweets: -4,
                    ..Default::default()
                },
            ),
            (
                "minFollowersCount",
                TweetStreamSettings {
                    min_followers_count: -10,
                    ..Default::default()
                },
            ),
        ] {
            let err = TweetStreamConfig::try_from(settings).unwrap_err();
            match err.kind() {
                ConfigErrorKind::NegativeSetting {
                    component,
                    setting: name,
                    ..
                } => {
                    assert_eq!(component, PROVIDER_NAME);
                    assert_eq!(name, setting);
                }
                other => panic!("unexpected error kind: {other}"),
            }
        }
    }

    #[test]
    fn test_zero_window_keeps_nothing() {
        let provider = TweetStreamProvider::new(TweetStreamConfig::new(0, 0, 0));
        let outcome = provider.ingest(tweet(1, 5)).unwrap();

        assert_eq!(
            outcome,
            IngestOutcome::Inserted {
                id: 1,
                evicted: vec![1]
            }
        );
        assert!(provider.is_empty());
    }

    #[test]
    fn test_threshold_is_inclusive() {
        let provider = TweetStreamProvider::new(TweetStreamConfig::new(0, 4, 100));

        assert_eq!(provider.ingest(tweet(1, 99)).unwrap(), IngestOutcome::Filtered);
        assert!(matches!(
            provider.ingest(tweet(2, 100)).unwrap(),
            IngestOutcome::Inserted { id: 2, .. }
        ));
        assert_eq!(provider.len(), 1);
    }
}
