//! Show the most recent image.

use crate::{MachineContext, Step, StepSetting};
use async_trait::async_trait;
use std::time::Duration;
use tweetwall_error::{ConfigError, StepResult};
use tweetwall_provider::TweetStreamProvider;

/// Renders the tweet stream's latest image and holds it on screen.
#[derive(Debug, Clone, Copy)]
pub struct ShowLatestImageStep {
    duration: Duration,
}

impl ShowLatestImageStep {
    /// Configured step name.
    pub const NAME: &'static str = "ShowLatestImage";

    const DEFAULT_MILLIS: u64 = 5000;

    /// Step holding the image for `duration`.
    pub fn new(duration: Duration) -> Self {
        Self { duration }
    }

    /// Build from a step entry (`durationMillis`, default 5000).
    pub fn from_setting(setting: &StepSetting) -> Result<Self, ConfigError> {
        let millis = setting.millis("durationMillis", Self::DEFAULT_MILLIS)?;
        Ok(Self::new(Duration::from_millis(millis)))
    }
}

impl Default for ShowLatestImageStep {
    fn default() -> Self {
        Self::new(Duration::from_millis(Self::DEFAULT_MILLIS))
    }
}

#[async_trait]
impl Step for ShowLatestImageStep {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn preferred_duration(&self, _ctx: &MachineContext) -> Duration {
        self.duration
    }

    async fn execute(&self, ctx: &mut MachineContext) -> StepResult<()> {
        match ctx.provider::<TweetStreamProvider>()?.latest_image() {
            Some(url) => ctx.display().show_image(&url),
            None => {
                tracing::debug!("No image yet, skipping");
                ctx.proceed();
            }
        }
        Ok(())
    }
}
