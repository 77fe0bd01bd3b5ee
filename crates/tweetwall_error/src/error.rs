//! Top-level error wrapper types.

use crate::{BuilderError, ConfigError, JsonError, ProviderError, SourceError, StepError};

/// Every error a TweetWall run can end with.
///
/// # Examples
///
/// ```
/// use tweetwall_error::{SourceError, SourceErrorKind, TweetwallError};
///
/// let source_err = SourceError::new(SourceErrorKind::Disconnected("eof".into()));
/// let err: TweetwallError = source_err.into();
/// assert!(format!("{}", err).contains("Stream disconnected"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum TweetwallErrorKind {
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Data provider error
    #[from(ProviderError)]
    Provider(ProviderError),
    /// Ingestion source error
    #[from(SourceError)]
    Source(SourceError),
    /// Step or context error
    #[from(StepError)]
    Step(StepError),
    /// Builder error
    #[from(BuilderError)]
    Builder(BuilderError),
    /// JSON serialization/deserialization error
    #[from(JsonError)]
    Json(JsonError),
}

/// TweetWall error with kind discrimination.
///
/// # Examples
///
/// ```
/// use tweetwall_error::{ConfigError, ConfigErrorKind, TweetwallErrorKind, TweetwallResult};
///
/// fn might_fail() -> TweetwallResult<()> {
///     Err(ConfigError::new(ConfigErrorKind::UnknownStep("Wordle".into())))?
/// }
///
/// let err = might_fail().unwrap_err();
/// assert!(matches!(err.kind(), TweetwallErrorKind::Config(_)));
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("TweetWall Error: {}", _0)]
pub struct TweetwallError(Box<TweetwallErrorKind>);

impl TweetwallError {
    /// Create a new error from a kind.
    pub fn new(kind: TweetwallErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &TweetwallErrorKind {
        &self.0
    }
}

impl<T> From<T> for TweetwallError
where
    T: Into<TweetwallErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for TweetWall operations.
pub type TweetwallResult<T> = std::result::Result<T, TweetwallError>;
