//! Error types for the TweetWall step engine.
//!
//! This crate provides the error types shared by every TweetWall crate.
//!
//! # Error Hierarchy
//!
//! Errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - Constructors use `#[track_caller]` for automatic location capture
//!
//! The taxonomy mirrors how failures are handled at runtime:
//! - [`ConfigError`]: bad settings, missing registrations, empty step lists; fail fast
//! - [`ProviderError`]: data errors on the ingest path and provider lookups
//! - [`SourceError`]: transient failures of the ingestion source, never retried here
//! - [`StepError`]: context access failures and fatal step execution failures
//!
//! # Examples
//!
//! ```
//! use tweetwall_error::{ConfigError, ConfigErrorKind, TweetwallResult};
//!
//! fn load() -> TweetwallResult<()> {
//!     Err(ConfigError::new(ConfigErrorKind::EmptyStepList))?
//! }
//!
//! assert!(load().is_err());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod builder;
mod config;
mod error;
mod json;
mod provider;
mod source;
mod step;

pub use builder::{BuilderError, BuilderErrorKind};
pub use config::{ConfigError, ConfigErrorKind};
pub use error::{TweetwallError, TweetwallErrorKind, TweetwallResult};
pub use json::JsonError;
pub use provider::{ProviderError, ProviderErrorKind, ProviderResult};
pub use source::{SourceError, SourceErrorKind, SourceResult};
pub use step::{StepError, StepErrorKind, StepResult};
