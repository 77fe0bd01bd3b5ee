//! Tweet rotation.

use crate::{MachineContext, Step};
use async_trait::async_trait;
use std::time::Duration;
use tweetwall_error::StepResult;
use tweetwall_provider::TweetStreamProvider;

/// Context key holding the tweet selected for display.
pub const CURRENT_TWEET_KEY: &str = "current_tweet";

/// Context key holding the rotation cursor.
pub const NEXT_TWEET_INDEX_KEY: &str = "next_tweet.index";

/// Selects the next tweet of the window for display.
///
/// Rotates through a snapshot of the tweet stream, wrapping around, and
/// stores the pick under [`CURRENT_TWEET_KEY`]. When the window is empty the
/// key is removed so display steps skip themselves.
#[derive(Debug, Clone, Copy, Default)]
pub struct NextTweetStep;

impl NextTweetStep {
    /// Configured step name.
    pub const NAME: &'static str = "NextTweet";
}

#[async_trait]
impl Step for NextTweetStep {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn preferred_duration(&self, _ctx: &MachineContext) -> Duration {
        Duration::ZERO
    }

    async fn execute(&self, ctx: &mut MachineContext) -> StepResult<()> {
        let tweets = ctx.provider::<TweetStreamProvider>()?.snapshot();

        if tweets.is_empty() {
            tracing::debug!("No tweets to show");
            ctx.remove(CURRENT_TWEET_KEY);
        } else {
            let cursor = if ctx.contains_key(NEXT_TWEET_INDEX_KEY) {
                ctx.get_as::<usize>(NEXT_TWEET_INDEX_KEY)?
            } else {
                0
            };
            // Wrap when the window changed size since the last pass
            let index = cursor % tweets.len();

            tracing::debug!(
                index,
                window = tweets.len(),
                tweet_id = tweets[index].id(),
                "Next tweet selected"
            );
            ctx.set_as(CURRENT_TWEET_KEY, &tweets[index])?;
            ctx.set_as(NEXT_TWEET_INDEX_KEY, &((index + 1) % tweets.len()))?;
        }

        ctx.proceed();
        Ok(())
    }
}
