//! Provider traits and the closed provider set.

use crate::{ProviderKind, TweetCountProvider, TweetStreamProvider};
use std::sync::Arc;
use tweetwall_core::Tweet;
use tweetwall_error::ProviderResult;

/// A provider that wants every live tweet delivered to it.
pub trait NewTweetAware: Send + Sync {
    /// Provider name used in logs.
    fn name(&self) -> &str;

    /// Apply one live tweet.
    fn process_new_tweet(&self, tweet: &Tweet) -> ProviderResult<()>;
}

/// Typed lookup of a concrete provider out of a [`DataProvider`].
///
/// Implemented by every concrete provider so that
/// [`ProviderRegistry::get`](crate::ProviderRegistry::get) can return it with
/// its own type, without downcasting.
pub trait Capability: Send + Sync + Sized + 'static {
    /// Registry key of this provider.
    const KIND: ProviderKind;

    /// Borrow the provider if `provider` is this capability.
    fn from_provider(provider: &DataProvider) -> Option<&Arc<Self>>;
}

/// A registered provider instance.
#[derive(Debug, Clone)]
pub enum DataProvider {
    /// Bounded window of recent tweets
    TweetStream(Arc<TweetStreamProvider>),
    /// Running count of delivered tweets
    TweetCount(Arc<TweetCountProvider>),
}

impl DataProvider {
    /// Capability tag of the wrapped provider.
    pub fn kind(&self) -> ProviderKind {
        match self {
            Self::TweetStream(_) => ProviderKind::TweetStream,
            Self::TweetCount(_) => ProviderKind::TweetCount,
        }
    }

    /// The wrapped provider as a live tweet consumer, if it is one.
    pub fn new_tweet_aware(&self) -> Option<Arc<dyn NewTweetAware>> {
        match self {
            Self::TweetStream(p) => Some(p.clone() as Arc<dyn NewTweetAware>),
            Self::TweetCount(p) => Some(p.clone() as Arc<dyn NewTweetAware>),
        }
    }
}

impl From<Arc<TweetStreamProvider>> for DataProvider {
    fn from(provider: Arc<TweetStreamProvider>) -> Self {
        Self::TweetStream(provider)
    }
}

impl From<Arc<TweetCountProvider>> for DataProvider {
    fn from(provider: Arc<TweetCountProvider>) -> Self {
        Self::TweetCount(provider)
    }
}

impl Capability for TweetStreamProvider {
    const KIND: ProviderKind = ProviderKind::TweetStream;

    fn from_provider(provider: &DataProvider) -> Option<&Arc<Self>> {
        match provider {
            DataProvider::TweetStream(p) => Some(p),
            _ => None,
        }
    }
}

impl Capability for TweetCountProvider {
    const KIND: ProviderKind = ProviderKind::TweetCount;

    fn from_provider(provider: &DataProvider) -> Option<&Arc<Self>> {
        match provider {
            DataProvider::TweetCount(p) => Some(p),
            _ => None,
        }
    }
}
