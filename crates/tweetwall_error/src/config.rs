//! Configuration error types.

/// Specific configuration error conditions.
///
/// Every variant names the component and setting at fault so a failed
/// startup can be traced back to a single line of configuration.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum ConfigErrorKind {
    /// A numeric setting was negative
    #[display("property '{setting}' of {component} must not be a negative number (got {value})")]
    NegativeSetting {
        /// Component owning the setting (e.g. a provider name)
        component: String,
        /// Setting name as it appears in configuration
        setting: String,
        /// The rejected value
        value: i64,
    },
    /// A setting had a value that could not be used
    #[display("property '{setting}' of {component} is invalid: {reason}")]
    InvalidSetting {
        /// Component owning the setting
        component: String,
        /// Setting name as it appears in configuration
        setting: String,
        /// Why the value was rejected
        reason: String,
    },
    /// The step list resolved to nothing
    #[display("Step list cannot be empty")]
    EmptyStepList,
    /// No step factory registered under this name
    #[display("Unknown step: {}", _0)]
    UnknownStep(String),
    /// No provider factory registered under this name
    #[display("Unknown data provider: {}", _0)]
    UnknownProvider(String),
    /// A second provider was registered for an already registered capability
    #[display("Data provider already registered for capability {}", _0)]
    DuplicateProvider(String),
    /// Configuration file could not be read
    #[display("Failed to read {path}: {message}")]
    FileRead {
        /// Path of the configuration file
        path: String,
        /// Underlying I/O message
        message: String,
    },
    /// Configuration file could not be parsed
    #[display("Failed to parse TOML: {}", _0)]
    TomlParse(String),
}

/// Configuration error with source location.
///
/// # Examples
///
/// ```
/// use tweetwall_error::{ConfigError, ConfigErrorKind};
///
/// let err = ConfigError::new(ConfigErrorKind::NegativeSetting {
///     component: "TweetStreamDataProvider".to_string(),
///     setting: "maxTweets".to_string(),
///     value: -1,
/// });
/// assert!(err.to_string().contains("maxTweets"));
/// assert!(err.to_string().contains("TweetStreamDataProvider"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Configuration Error: {} at line {} in {}", kind, line, file)]
pub struct ConfigError {
    /// The specific error condition
    pub kind: ConfigErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl ConfigError {
    /// Create a new ConfigError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ConfigErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Get the error kind.
    pub fn kind(&self) -> &ConfigErrorKind {
        &self.kind
    }
}

#[cfg(feature = "toml")]
impl From<toml::de::Error> for ConfigError {
    #[track_caller]
    fn from(e: toml::de::Error) -> Self {
        Self::new(ConfigErrorKind::TomlParse(e.to_string()))
    }
}
