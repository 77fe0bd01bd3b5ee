//! Blank pause between items.

use crate::{MachineContext, Step, StepSetting};
use async_trait::async_trait;
use std::time::Duration;
use tweetwall_error::{ConfigError, StepResult};

/// Clears the display and waits.
#[derive(Debug, Clone, Copy)]
pub struct PauseStep {
    duration: Duration,
}

impl PauseStep {
    /// Configured step name.
    pub const NAME: &'static str = "Pause";

    const DEFAULT_MILLIS: u64 = 1000;

    /// Pause for `duration`.
    pub fn new(duration: Duration) -> Self {
        Self { duration }
    }

    /// Build from a step entry (`durationMillis`, default 1000).
    pub fn from_setting(setting: &StepSetting) -> Result<Self, ConfigError> {
        let millis = setting.millis("durationMillis", Self::DEFAULT_MILLIS)?;
        Ok(Self::new(Duration::from_millis(millis)))
    }
}

#[async_trait]
impl Step for PauseStep {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn preferred_duration(&self, _ctx: &MachineContext) -> Duration {
        self.duration
    }

    async fn execute(&self, ctx: &mut MachineContext) -> StepResult<()> {
        ctx.display().clear();
        Ok(())
    }
}
