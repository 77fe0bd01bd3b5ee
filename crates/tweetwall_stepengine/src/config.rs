//! Step engine configuration.

use serde::{Deserialize, Serialize};
use tweetwall_error::{ConfigError, ConfigErrorKind};
use tweetwall_provider::DataProviderSetting;

/// The `[stepengine]` section.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StepEngineSettings {
    /// Ordered step list
    #[serde(default)]
    pub steps: Vec<StepSetting>,
    /// Providers to create before the run starts
    #[serde(default)]
    pub data_providers: Vec<DataProviderSetting>,
}

/// One `[[stepengine.steps]]` entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StepSetting {
    /// Name the step factory is registered under
    pub step: String,
    /// Step-specific settings
    #[serde(default)]
    pub config: toml::Table,
}

impl StepSetting {
    /// Setting for `step` with an empty config table.
    pub fn new(step: impl Into<String>) -> Self {
        Self {
            step: step.into(),
            config: toml::Table::new(),
        }
    }

    /// Attach a config table.
    pub fn with_config(mut self, config: toml::Table) -> Self {
        self.config = config;
        self
    }

    /// Read a non-negative millisecond setting, falling back to `default`.
    ///
    /// # Errors
    ///
    /// Fails if the value is not an integer or is negative.
    pub fn millis(&self, key: &str, default: u64) -> Result<u64, ConfigError> {
        match self.config.get(key) {
            None => Ok(default),
            Some(toml::Value::Integer(value)) => u64::try_from(*value).map_err(|_| {
                ConfigError::new(ConfigErrorKind::NegativeSetting {
                    component: self.step.clone(),
                    setting: key.to_string(),
                    value: *value,
                })
            }),
            Some(other) => Err(ConfigError::new(ConfigErrorKind::InvalidSetting {
                component: self.step.clone(),
                setting: key.to_string(),
                reason: format!("expected milliseconds, got {}", other.type_str()),
            })),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_section() {
        let settings: StepEngineSettings = toml::from_str(
            r#"
            [[steps]]
            step = "NextTweet"

            [[steps]]
            step = "ShowTweet"
            config = { durationMillis = 8000 }

            [[dataProviders]]
            dataProviderClassName = "TweetStreamDataProvider"
            "#,
        )
        .unwrap();

        assert_eq!(settings.steps.len(), 2);
        assert_eq!(settings.steps[1].millis("durationMillis", 5000).unwrap(), 8000);
        assert_eq!(settings.steps[0].millis("durationMillis", 5000).unwrap(), 5000);
        assert_eq!(
            settings.data_providers[0].data_provider_class_name,
            "TweetStreamDataProvider"
        );
    }

    #[test]
    fn test_negative_millis_rejected() {
        let mut config = toml::Table::new();
        config.insert("durationMillis".into(), toml::Value::Integer(-5));
        let setting = StepSetting::new("Pause").with_config(config);

        let err = setting.millis("durationMillis", 1000).unwrap_err();
        assert!(matches!(err.kind(), ConfigErrorKind::NegativeSetting { value: -5, .. }));
    }
}
