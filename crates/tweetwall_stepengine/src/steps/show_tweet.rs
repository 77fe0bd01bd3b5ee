//! Show the selected tweet.

use crate::{CURRENT_TWEET_KEY, MachineContext, Step, StepSetting};
use async_trait::async_trait;
use std::time::Duration;
use tweetwall_core::Tweet;
use tweetwall_error::{ConfigError, StepResult};

/// Renders the tweet chosen by [`NextTweetStep`](crate::NextTweetStep) and
/// holds it on screen.
#[derive(Debug, Clone, Copy)]
pub struct ShowTweetStep {
    duration: Duration,
}

impl ShowTweetStep {
    /// Configured step name.
    pub const NAME: &'static str = "ShowTweet";

    const DEFAULT_MILLIS: u64 = 5000;

    /// Step holding each tweet for `duration`.
    pub fn new(duration: Duration) -> Self {
        Self { duration }
    }

    /// Build from a step entry (`durationMillis`, default 5000).
    pub fn from_setting(setting: &StepSetting) -> Result<Self, ConfigError> {
        let millis = setting.millis("durationMillis", Self::DEFAULT_MILLIS)?;
        Ok(Self::new(Duration::from_millis(millis)))
    }
}

impl Default for ShowTweetStep {
    fn default() -> Self {
        Self::new(Duration::from_millis(Self::DEFAULT_MILLIS))
    }
}

#[async_trait]
impl Step for ShowTweetStep {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn preferred_duration(&self, _ctx: &MachineContext) -> Duration {
        self.duration
    }

    async fn execute(&self, ctx: &mut MachineContext) -> StepResult<()> {
        if !ctx.contains_key(CURRENT_TWEET_KEY) {
            tracing::debug!("Nothing selected, skipping");
            ctx.proceed();
            return Ok(());
        }

        let tweet: Tweet = ctx.get_as(CURRENT_TWEET_KEY)?;
        ctx.display().show_tweet(&tweet);
        Ok(())
    }
}
