//! Ingestion source error types.

/// Failures reported by the external ingestion source.
///
/// These are transient by nature; retrying is the source's business.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum SourceErrorKind {
    /// The historical query failed
    #[display("Query '{query}' failed: {message}")]
    Query {
        /// Query string that was sent
        query: String,
        /// Underlying failure
        message: String,
    },
    /// The live stream went away
    #[display("Stream disconnected: {}", _0)]
    Disconnected(String),
    /// An item could not be decoded
    #[display("Malformed item: {}", _0)]
    Malformed(String),
}

/// Ingestion source error with location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Source Error: {} at line {} in {}", kind, line, file)]
pub struct SourceError {
    /// The specific error condition
    pub kind: SourceErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl SourceError {
    /// Create a new SourceError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: SourceErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Get the error kind.
    pub fn kind(&self) -> &SourceErrorKind {
        &self.kind
    }
}

/// Result type for ingestion source operations.
pub type SourceResult<T> = Result<T, SourceError>;
