//! Shared per-run machine context.

use crate::{DisplaySink, LogDisplay, ProceedSignal};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value as JsonValue;
use std::collections::HashMap;
use std::sync::Arc;
use tweetwall_error::{ProviderResult, StepError, StepErrorKind, StepResult};
use tweetwall_provider::{Capability, ProviderRegistry};

/// State shared by every step of one run.
///
/// Key/value access belongs to the engine's task; steps receive the context
/// by `&mut` while they execute. Providers and the proceed signal are shared
/// handles and may be used from other tasks.
pub struct MachineContext {
    values: HashMap<String, JsonValue>,
    providers: Arc<ProviderRegistry>,
    proceed: ProceedSignal,
    display: Arc<dyn DisplaySink>,
}

impl MachineContext {
    /// Context over `providers`, rendering through [`LogDisplay`].
    pub fn new(providers: Arc<ProviderRegistry>) -> Self {
        Self::with_display(providers, Arc::new(LogDisplay::default()))
    }

    /// Context over `providers`, rendering through `display`.
    pub fn with_display(providers: Arc<ProviderRegistry>, display: Arc<dyn DisplaySink>) -> Self {
        Self {
            values: HashMap::new(),
            providers,
            proceed: ProceedSignal::new(),
            display,
        }
    }

    /// Get a stored value.
    ///
    /// # Errors
    ///
    /// Returns [`StepErrorKind::KeyNotFound`] if the key was never set.
    pub fn get(&self, key: &str) -> StepResult<&JsonValue> {
        self.values
            .get(key)
            .ok_or_else(|| StepError::new(StepErrorKind::KeyNotFound(key.to_string())))
    }

    /// Get a stored value decoded as `T`.
    ///
    /// # Errors
    ///
    /// Fails if the key is missing or the value does not decode as `T`.
    pub fn get_as<T: DeserializeOwned>(&self, key: &str) -> StepResult<T> {
        let value = self.get(key)?;
        serde_json::from_value(value.clone()).map_err(|e| {
            StepError::new(StepErrorKind::TypeMismatch {
                key: key.to_string(),
                expected: std::any::type_name::<T>().to_string(),
                message: e.to_string(),
            })
        })
    }

    /// Store a value, replacing any previous one.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<JsonValue>) {
        let key = key.into();
        tracing::debug!(key = %key, "Setting context value");
        self.values.insert(key, value.into());
    }

    /// Store a serializable value.
    ///
    /// # Errors
    ///
    /// Fails if `value` cannot be represented as JSON.
    pub fn set_as<T: Serialize>(&mut self, key: impl Into<String>, value: &T) -> StepResult<()> {
        let key = key.into();
        let json = serde_json::to_value(value).map_err(|e| {
            StepError::new(StepErrorKind::TypeMismatch {
                key: key.clone(),
                expected: std::any::type_name::<T>().to_string(),
                message: e.to_string(),
            })
        })?;
        self.set(key, json);
        Ok(())
    }

    /// Remove a value, returning it if it was set.
    pub fn remove(&mut self, key: &str) -> Option<JsonValue> {
        tracing::debug!(key = %key, "Removing context value");
        self.values.remove(key)
    }

    /// Whether a value is stored under `key`.
    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Look up a provider by type.
    ///
    /// # Errors
    ///
    /// Fails with a "not configured" error if the run has no such provider.
    pub fn provider<T: Capability>(&self) -> ProviderResult<Arc<T>> {
        self.providers.get::<T>()
    }

    /// End the current step's window early.
    pub fn proceed(&self) {
        tracing::debug!("Proceed requested");
        self.proceed.signal();
    }

    /// A handle that can end the current window from another task.
    pub fn proceed_handle(&self) -> ProceedSignal {
        self.proceed.clone()
    }

    /// The rendering sink.
    pub fn display(&self) -> &Arc<dyn DisplaySink> {
        &self.display
    }

    /// The run's providers.
    pub fn providers(&self) -> &Arc<ProviderRegistry> {
        &self.providers
    }
}

impl std::fmt::Debug for MachineContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut keys: Vec<&String> = self.values.keys().collect();
        keys.sort();
        f.debug_struct("MachineContext")
            .field("keys", &keys)
            .field("providers", &self.providers.kinds())
            .field("proceed", &self.proceed.is_set())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tweetwall_error::ProviderErrorKind;
    use tweetwall_provider::TweetStreamProvider;

    fn context() -> MachineContext {
        MachineContext::new(Arc::new(ProviderRegistry::new()))
    }

    #[test]
    fn test_values() {
        let mut ctx = context();

        ctx.set("title", "Devoxx");
        assert_eq!(ctx.get("title").unwrap(), &json!("Devoxx"));
        assert!(ctx.contains_key("title"));

        assert_eq!(ctx.remove("title"), Some(json!("Devoxx")));
        assert!(!ctx.contains_key("title"));

        let err = ctx.get("title").unwrap_err();
        assert_eq!(err.kind(), &StepErrorKind::KeyNotFound("title".to_string()));
    }

    #[test]
    fn test_get_as_reports_mismatch_by_key() {
        let mut ctx = context();
        ctx.set("index", json!("three"));

        let err = ctx.get_as::<usize>("index").unwrap_err();
        match err.kind() {
            StepErrorKind::TypeMismatch { key, expected, .. } => {
                assert_eq!(key, "index");
                assert_eq!(expected, "usize");
            }
            other => panic!("unexpected error kind: {other}"),
        }

        ctx.set_as("index", &3usize).unwrap();
        assert_eq!(ctx.get_as::<usize>("index").unwrap(), 3);
    }

    #[test]
    fn test_unregistered_provider_not_configured() {
        let ctx = context();
        let err = ctx.provider::<TweetStreamProvider>().unwrap_err();
        assert!(matches!(err.kind(), ProviderErrorKind::NotConfigured(_)));
    }

    #[test]
    fn test_proceed_is_idempotent() {
        let ctx = context();
        let handle = ctx.proceed_handle();

        ctx.proceed();
        handle.signal();

        assert!(handle.take());
        assert!(!handle.take());
    }
}
