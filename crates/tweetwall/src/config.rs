//! Wall configuration file.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tweetwall_error::{ConfigError, ConfigErrorKind};
use tweetwall_stepengine::StepEngineSettings;

/// The `[tweetwall]` section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct WallSettings {
    /// Historical query used to seed providers (e.g. a hashtag)
    #[serde(default)]
    query: String,
    /// Title shown with the wall
    #[serde(default)]
    title: Option<String>,
}

impl WallSettings {
    /// Settings for `query` without a title.
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            title: None,
        }
    }
}

/// Complete `tweetwall.toml`.
///
/// # Example
///
/// ```
/// use tweetwall::TweetwallConfig;
///
/// let config = TweetwallConfig::from_toml(r##"
///     [tweetwall]
///     query = "#devoxx"
///
///     [[stepengine.steps]]
///     step = "NextTweet"
///
///     [[stepengine.dataProviders]]
///     dataProviderClassName = "TweetStreamDataProvider"
/// "##).unwrap();
///
/// assert_eq!(config.tweetwall().query(), "#devoxx");
/// assert_eq!(config.stepengine().steps.len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Getters)]
pub struct TweetwallConfig {
    /// Wall-level settings
    #[serde(default)]
    tweetwall: WallSettings,
    /// Steps and providers
    #[serde(default)]
    stepengine: StepEngineSettings,
}

impl TweetwallConfig {
    /// Assemble a configuration in code.
    pub fn new(tweetwall: WallSettings, stepengine: StepEngineSettings) -> Self {
        Self {
            tweetwall,
            stepengine,
        }
    }

    /// Parse configuration text.
    ///
    /// # Errors
    ///
    /// Returns a TOML parse error describing the offending line.
    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(contents)?)
    }

    /// Read and parse a configuration file.
    ///
    /// # Errors
    ///
    /// Fails if the file cannot be read or parsed.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| {
            ConfigError::new(ConfigErrorKind::FileRead {
                path: path.display().to_string(),
                message: e.to_string(),
            })
        })?;

        let config = Self::from_toml(&contents)?;
        tracing::info!(
            path = %path.display(),
            steps = config.stepengine.steps.len(),
            providers = config.stepengine.data_providers.len(),
            "Configuration loaded"
        );
        Ok(config)
    }
}
