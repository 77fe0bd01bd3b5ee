//! Data providers for the TweetWall step engine.
//!
//! Providers own live data that steps read while the wall is running. Each
//! provider guards its own state; steps reach them only through a
//! [`ProviderRegistry`] owned by the run.
//!
//! # Architecture
//!
//! - **Capabilities**: [`ProviderKind`] is the closed set of provider tags; a
//!   registry holds at most one provider per tag
//! - **Providers**: [`TweetStreamProvider`] keeps a bounded newest-first window
//!   of tweets, [`TweetCountProvider`] counts deliveries
//! - **Factories**: [`ProviderFactoryRegistry`] maps configured provider names
//!   to factories and builds the run's registry before the wall starts
//! - **Ingestion**: [`TweetSource`] answers the historical query used for
//!   seeding; [`StreamPump`] fans live tweets out to every
//!   [`NewTweetAware`] provider
//!
//! # Example
//!
//! ```
//! use tweetwall_provider::{ProviderRegistry, TweetStreamConfig, TweetStreamProvider};
//! use std::sync::Arc;
//!
//! let provider = TweetStreamProvider::new(TweetStreamConfig::default());
//! let mut registry = ProviderRegistry::new();
//! registry.register(Arc::new(provider).into()).unwrap();
//!
//! let stream = registry.get::<TweetStreamProvider>().unwrap();
//! assert!(stream.snapshot().is_empty());
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod factory;
mod kind;
mod media;
mod provider;
mod pump;
mod registry;
mod source;
mod tweet_count;
mod tweet_stream;

pub use factory::{
    DataProviderSetting, FactoryContext, ProviderFactory, ProviderFactoryRegistry,
    TweetCountFactory, TweetStreamFactory,
};
pub use kind::ProviderKind;
pub use media::latest_image_url;
pub use provider::{Capability, DataProvider, NewTweetAware};
pub use pump::{PumpReport, StreamPump};
pub use registry::ProviderRegistry;
pub use source::{InMemoryTweetSource, TweetSource};
pub use tweet_count::TweetCountProvider;
pub use tweet_stream::{IngestOutcome, TweetStreamConfig, TweetStreamProvider, TweetStreamSettings};
