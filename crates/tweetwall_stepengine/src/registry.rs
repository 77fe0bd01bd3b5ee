//! Step factories keyed by configured step name.

use crate::{NextTweetStep, PauseStep, ShowLatestImageStep, ShowTweetStep, Step, StepSetting};
use std::collections::HashMap;
use std::sync::Arc;
use tweetwall_error::{ConfigError, ConfigErrorKind};

/// Builds a step from its configuration entry.
pub type StepFactory = fn(&StepSetting) -> Result<Arc<dyn Step>, ConfigError>;

fn next_tweet(_setting: &StepSetting) -> Result<Arc<dyn Step>, ConfigError> {
    Ok(Arc::new(NextTweetStep))
}

fn show_tweet(setting: &StepSetting) -> Result<Arc<dyn Step>, ConfigError> {
    Ok(Arc::new(ShowTweetStep::from_setting(setting)?))
}

fn show_latest_image(setting: &StepSetting) -> Result<Arc<dyn Step>, ConfigError> {
    Ok(Arc::new(ShowLatestImageStep::from_setting(setting)?))
}

fn pause(setting: &StepSetting) -> Result<Arc<dyn Step>, ConfigError> {
    Ok(Arc::new(PauseStep::from_setting(setting)?))
}

/// Registry of step factories.
///
/// # Example
///
/// ```
/// use tweetwall_stepengine::{StepRegistry, StepSetting};
///
/// let registry = StepRegistry::with_builtin();
/// let steps = registry
///     .build(&[StepSetting::new("NextTweet"), StepSetting::new("ShowTweet")])
///     .unwrap();
/// assert_eq!(steps.len(), 2);
/// assert!(registry.build(&[]).is_err());
/// ```
#[derive(Clone, Default)]
pub struct StepRegistry {
    factories: HashMap<String, StepFactory>,
}

impl StepRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with every built-in step.
    pub fn with_builtin() -> Self {
        let mut registry = Self::new();
        registry.register(NextTweetStep::NAME, next_tweet);
        registry.register(ShowTweetStep::NAME, show_tweet);
        registry.register(ShowLatestImageStep::NAME, show_latest_image);
        registry.register(PauseStep::NAME, pause);
        registry
    }

    /// Register a factory, replacing any previous one with the same name.
    pub fn register(&mut self, name: impl Into<String>, factory: StepFactory) {
        let name = name.into();
        tracing::debug!(step = %name, "Registering step factory");
        self.factories.insert(name, factory);
    }

    /// Whether a factory is registered under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.factories.contains_key(name)
    }

    /// Names of all registered steps.
    pub fn list(&self) -> Vec<String> {
        let mut names: Vec<String> = self.factories.keys().cloned().collect();
        names.sort();
        names
    }

    /// Resolve the configured step list, in order.
    ///
    /// # Errors
    ///
    /// Fails on an empty list, an unknown step name, or invalid step settings.
    pub fn build(&self, settings: &[StepSetting]) -> Result<Vec<Arc<dyn Step>>, ConfigError> {
        if settings.is_empty() {
            return Err(ConfigError::new(ConfigErrorKind::EmptyStepList));
        }

        settings
            .iter()
            .map(|setting| {
                let factory = self.factories.get(&setting.step).ok_or_else(|| {
                    ConfigError::new(ConfigErrorKind::UnknownStep(setting.step.clone()))
                })?;
                factory(setting)
            })
            .collect()
    }
}

impl std::fmt::Debug for StepRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StepRegistry")
            .field("steps", &self.list())
            .finish()
    }
}
