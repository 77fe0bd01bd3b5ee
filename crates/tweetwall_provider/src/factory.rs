//! Provider factories keyed by configured provider name.

use crate::{
    DataProvider, ProviderRegistry, TweetCountProvider, TweetSource, TweetStreamConfig,
    TweetStreamProvider, TweetStreamSettings,
};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use tweetwall_error::{ConfigError, ConfigErrorKind, TweetwallResult};

/// One `[[stepengine.dataProviders]]` entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataProviderSetting {
    /// Name the provider factory is registered under
    pub data_provider_class_name: String,
    /// Provider-specific settings
    #[serde(default)]
    pub config: toml::Table,
}

impl DataProviderSetting {
    /// Setting for `name` with an empty config table.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            data_provider_class_name: name.into(),
            config: toml::Table::new(),
        }
    }

    /// Attach a config table.
    pub fn with_config(mut self, config: toml::Table) -> Self {
        self.config = config;
        self
    }

    /// Deserialize the config table into a typed settings struct.
    ///
    /// # Errors
    ///
    /// Returns a TOML parse error naming the provider when the table does not
    /// match `T`.
    pub fn config_as<T: serde::de::DeserializeOwned>(&self) -> Result<T, ConfigError> {
        toml::Value::Table(self.config.clone())
            .try_into()
            .map_err(|e: toml::de::Error| {
                ConfigError::new(ConfigErrorKind::TomlParse(format!(
                    "{}: {}",
                    self.data_provider_class_name, e
                )))
            })
    }
}

/// Run-level inputs every factory may need.
#[derive(Clone, Copy)]
pub struct FactoryContext<'a> {
    /// Historical query string
    pub query: &'a str,
    /// Source answering the historical query
    pub source: &'a dyn TweetSource,
}

/// Builds one kind of provider from its configuration entry.
#[async_trait]
pub trait ProviderFactory: Send + Sync {
    /// Name used in `dataProviderClassName`.
    fn name(&self) -> &str;

    /// Build and, where applicable, seed the provider.
    async fn create(
        &self,
        setting: &DataProviderSetting,
        ctx: FactoryContext<'_>,
    ) -> TweetwallResult<DataProvider>;
}

/// Factory for [`TweetStreamProvider`].
#[derive(Debug, Clone, Copy, Default)]
pub struct TweetStreamFactory;

#[async_trait]
impl ProviderFactory for TweetStreamFactory {
    fn name(&self) -> &str {
        "TweetStreamDataProvider"
    }

    async fn create(
        &self,
        setting: &DataProviderSetting,
        ctx: FactoryContext<'_>,
    ) -> TweetwallResult<DataProvider> {
        let settings: TweetStreamSettings = setting.config_as()?;
        let config = TweetStreamConfig::try_from(settings)?;
        let provider = TweetStreamProvider::create(config, ctx.query, ctx.source).await?;
        Ok(Arc::new(provider).into())
    }
}

/// Factory for [`TweetCountProvider`].
#[derive(Debug, Clone, Copy, Default)]
pub struct TweetCountFactory;

#[async_trait]
impl ProviderFactory for TweetCountFactory {
    fn name(&self) -> &str {
        "TweetCountDataProvider"
    }

    async fn create(
        &self,
        _setting: &DataProviderSetting,
        _ctx: FactoryContext<'_>,
    ) -> TweetwallResult<DataProvider> {
        Ok(Arc::new(TweetCountProvider::new()).into())
    }
}

/// Registry of provider factories.
#[derive(Default)]
pub struct ProviderFactoryRegistry {
    factories: HashMap<String, Arc<dyn ProviderFactory>>,
}

impl ProviderFactoryRegistry {
    /// Create an empty factory registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with every built-in provider factory.
    pub fn with_builtin() -> Self {
        let mut registry = Self::new();
        registry.register(Arc::new(TweetStreamFactory));
        registry.register(Arc::new(TweetCountFactory));
        registry
    }

    /// Register a factory under its name, replacing any previous one.
    pub fn register(&mut self, factory: Arc<dyn ProviderFactory>) {
        let name = factory.name().to_string();
        tracing::debug!(factory = %name, "Registering provider factory");
        self.factories.insert(name, factory);
    }

    /// Look up a factory by name.
    pub fn get(&self, name: &str) -> Option<Arc<dyn ProviderFactory>> {
        self.factories.get(name).cloned()
    }

    /// Names of all registered factories.
    pub fn list(&self) -> Vec<String> {
        let mut names: Vec<String> = self.factories.keys().cloned().collect();
        names.sort();
        names
    }

    /// Build the run's provider registry from configuration.
    ///
    /// Providers are created in configuration order. The first failure aborts
    /// the whole build.
    ///
    /// # Errors
    ///
    /// Fails on an unknown provider name, invalid settings, a failed seed, or
    /// two entries for the same capability.
    #[tracing::instrument(skip(self, settings, ctx), fields(providers = settings.len()))]
    pub async fn create_all(
        &self,
        settings: &[DataProviderSetting],
        ctx: FactoryContext<'_>,
    ) -> TweetwallResult<ProviderRegistry> {
        let mut registry = ProviderRegistry::new();

        for setting in settings {
            let name = &setting.data_provider_class_name;
            let factory = self.get(name).ok_or_else(|| {
                ConfigError::new(ConfigErrorKind::UnknownProvider(name.clone()))
            })?;

            tracing::info!(provider = %name, "Creating data provider");
            let provider = factory.create(setting, ctx).await?;
            registry.register(provider)?;
        }

        Ok(registry)
    }
}

impl std::fmt::Debug for ProviderFactoryRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderFactoryRegistry")
            .field("factories", &self.list())
            .finish()
    }
}
