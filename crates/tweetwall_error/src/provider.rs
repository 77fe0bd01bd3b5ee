//! Data provider error types.

/// Specific error conditions raised by data providers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum ProviderErrorKind {
    /// No provider registered for the requested capability
    #[display("Data provider not configured: {}", _0)]
    NotConfigured(String),
    /// Media entry carried a size key outside the known set
    #[display("Unrecognized media size key {key} for {media_url}")]
    UnknownMediaSize {
        /// Media URL of the offending entry
        media_url: String,
        /// The unrecognized size key
        key: u32,
    },
    /// Seeding from the historical query failed
    #[display("Seeding {provider} failed: {message}")]
    SeedFailed {
        /// Provider being seeded
        provider: String,
        /// What went wrong
        message: String,
    },
}

/// Data provider error with location tracking.
///
/// # Examples
///
/// ```
/// use tweetwall_error::{ProviderError, ProviderErrorKind};
///
/// let err = ProviderError::new(ProviderErrorKind::NotConfigured("tweet_stream".into()));
/// assert!(err.to_string().contains("not configured"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Provider Error: {} at line {} in {}", kind, line, file)]
pub struct ProviderError {
    /// The specific error condition
    pub kind: ProviderErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl ProviderError {
    /// Create a new ProviderError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ProviderErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Get the error kind.
    pub fn kind(&self) -> &ProviderErrorKind {
        &self.kind
    }
}

/// Result type for provider operations.
pub type ProviderResult<T> = Result<T, ProviderError>;
