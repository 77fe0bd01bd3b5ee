//! Step and shared context error types.

/// Specific error conditions raised while running steps.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum StepErrorKind {
    /// Context key was never set
    #[display("Context key not found: {}", _0)]
    KeyNotFound(String),
    /// Context value could not be decoded as the requested type
    #[display("Context key '{key}' does not hold a {expected}: {message}")]
    TypeMismatch {
        /// Context key
        key: String,
        /// Requested type name
        expected: String,
        /// Decoder message
        message: String,
    },
    /// A step's own work failed
    #[display("{}", _0)]
    Execution(String),
    /// A step failed inside the engine; the run is stopped
    #[display("Step '{step}' at index {index} failed: {message}")]
    Failed {
        /// Step name
        step: String,
        /// Position in the step list
        index: usize,
        /// Underlying failure
        message: String,
    },
}

/// Step error with location tracking.
///
/// # Examples
///
/// ```
/// use tweetwall_error::{StepError, StepErrorKind};
///
/// let err = StepError::new(StepErrorKind::KeyNotFound("current_tweet".into()));
/// assert!(err.to_string().contains("current_tweet"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Step Error: {} at line {} in {}", kind, line, file)]
pub struct StepError {
    /// The specific error condition
    pub kind: StepErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl StepError {
    /// Create a new StepError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: StepErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Get the error kind.
    pub fn kind(&self) -> &StepErrorKind {
        &self.kind
    }
}

impl From<crate::ProviderError> for StepError {
    #[track_caller]
    fn from(e: crate::ProviderError) -> Self {
        Self::new(StepErrorKind::Execution(e.to_string()))
    }
}

/// Result type for step operations.
pub type StepResult<T> = Result<T, StepError>;
