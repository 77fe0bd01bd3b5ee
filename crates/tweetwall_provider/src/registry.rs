//! Per-run provider registry.

use crate::{Capability, DataProvider, NewTweetAware, ProviderKind};
use std::collections::HashMap;
use std::sync::Arc;
use tweetwall_error::{
    ConfigError, ConfigErrorKind, ProviderError, ProviderErrorKind, ProviderResult,
};

/// Registry of the providers available to one run.
///
/// Holds at most one provider per [`ProviderKind`]. The registry is built
/// before the engine starts and only read afterwards, so it is shared behind
/// an `Arc` without a lock.
#[derive(Debug, Clone, Default)]
pub struct ProviderRegistry {
    providers: HashMap<ProviderKind, DataProvider>,
}

impl ProviderRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a provider under its capability.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigErrorKind::DuplicateProvider`] if a provider of the
    /// same capability is already registered.
    pub fn register(&mut self, provider: DataProvider) -> Result<(), ConfigError> {
        let kind = provider.kind();
        if self.providers.contains_key(&kind) {
            return Err(ConfigError::new(ConfigErrorKind::DuplicateProvider(
                kind.to_string(),
            )));
        }

        tracing::debug!(kind = %kind, "Registered data provider");
        self.providers.insert(kind, provider);
        Ok(())
    }

    /// Look up a provider by its concrete type.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderErrorKind::NotConfigured`] if no provider of this
    /// capability was registered.
    pub fn get<T: Capability>(&self) -> ProviderResult<Arc<T>> {
        self.providers
            .get(&T::KIND)
            .and_then(T::from_provider)
            .cloned()
            .ok_or_else(|| {
                ProviderError::new(ProviderErrorKind::NotConfigured(T::KIND.to_string()))
            })
    }

    /// Look up a provider by capability tag.
    pub fn get_kind(&self, kind: ProviderKind) -> Option<&DataProvider> {
        self.providers.get(&kind)
    }

    /// Every registered provider that consumes live tweets.
    pub fn new_tweet_aware(&self) -> Vec<Arc<dyn NewTweetAware>> {
        let mut kinds = self.kinds();
        kinds.sort();
        kinds
            .into_iter()
            .filter_map(|kind| self.providers.get(&kind))
            .filter_map(DataProvider::new_tweet_aware)
            .collect()
    }

    /// Registered capability tags.
    pub fn kinds(&self) -> Vec<ProviderKind> {
        self.providers.keys().copied().collect()
    }

    /// Number of registered providers.
    pub fn len(&self) -> usize {
        self.providers.len()
    }

    /// Whether no provider is registered.
    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }
}
