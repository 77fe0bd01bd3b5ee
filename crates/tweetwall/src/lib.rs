//! TweetWall: a step engine presenting a live tweet stream.
//!
//! This crate ties the workspace together: it reads the wall configuration,
//! builds the providers and steps it names, and runs the engine beside the
//! stream pump until stopped.
//!
//! # Quick Start
//!
//! ```no_run
//! use tweetwall::{TweetWall, TweetwallConfig};
//! use tweetwall_provider::InMemoryTweetSource;
//!
//! # async fn example() -> tweetwall::TweetwallResult<()> {
//! let config = TweetwallConfig::from_file("tweetwall.toml")?;
//! let source = InMemoryTweetSource::default();
//! let wall = TweetWall::build(config, &source).await?;
//!
//! let stop = wall.stop_handle();
//! tokio::spawn(async move {
//!     tokio::signal::ctrl_c().await.ok();
//!     stop.stop();
//! });
//!
//! let summary = wall.run().await?;
//! println!("{} windows shown", summary.run.windows);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod observability;
mod source;
mod wall;

pub use config::{TweetwallConfig, WallSettings};
pub use observability::{ObservabilityConfig, init_observability, init_observability_with_config};
pub use source::{JsonFileSource, parse_live_line};
pub use wall::{TweetWall, WallSummary};

pub use tweetwall_core::{Tweet, TweetQuery, TweetUser};
pub use tweetwall_error::{TweetwallError, TweetwallErrorKind, TweetwallResult};
pub use tweetwall_provider::{
    InMemoryTweetSource, ProviderFactoryRegistry, ProviderRegistry, PumpReport, TweetSource,
    TweetStreamProvider,
};
pub use tweetwall_stepengine::{
    DisplaySink, LogDisplay, MachineContext, RunSummary, Step, StepEngine, StepRegistry,
    StopHandle,
};
