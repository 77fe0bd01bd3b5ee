//! Step engine for the TweetWall.
//!
//! A wall is an ordered list of [`Step`]s run in a loop. Each step does its
//! work once per pass and then holds the screen for its preferred duration,
//! unless it signals [`MachineContext::proceed`] to move on early.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use std::time::Duration;
//! use tweetwall_provider::ProviderRegistry;
//! use tweetwall_stepengine::{MachineContext, PauseStep, Step, StepEngine, StopHandle, WindowEnd};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let steps: Vec<Arc<dyn Step>> = vec![Arc::new(PauseStep::new(Duration::ZERO))];
//! let mut engine = StepEngine::new(steps).unwrap();
//! let mut ctx = MachineContext::new(Arc::new(ProviderRegistry::new()));
//! let stop = StopHandle::new();
//!
//! let report = engine.advance(&mut ctx, &stop).await.unwrap();
//! assert_eq!(report.end, WindowEnd::Immediate);
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod context;
mod display;
mod engine;
mod registry;
mod signal;
mod step;
mod steps;

pub use config::{StepEngineSettings, StepSetting};
pub use context::MachineContext;
pub use display::{DisplaySink, LogDisplay, RecordingDisplay, Rendered};
pub use engine::{RunSummary, StepEngine, StopHandle, WindowEnd, WindowReport};
pub use registry::{StepFactory, StepRegistry};
pub use signal::ProceedSignal;
pub use step::Step;
pub use steps::{
    CURRENT_TWEET_KEY, NEXT_TWEET_INDEX_KEY, NextTweetStep, PauseStep, ShowLatestImageStep,
    ShowTweetStep,
};
