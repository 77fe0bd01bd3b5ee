//! The step trait.

use crate::MachineContext;
use async_trait::async_trait;
use std::time::Duration;
use tweetwall_error::StepResult;

/// A unit of scheduled work with a preferred display duration.
///
/// The same instance runs on every pass through the step list, so a step
/// keeps no per-pass state of its own; anything that must survive between
/// passes goes into the [`MachineContext`].
#[async_trait]
pub trait Step: Send + Sync {
    /// Stable name used in logs and error reports.
    fn name(&self) -> &str;

    /// How long the engine holds on this step after `execute`.
    ///
    /// `Duration::ZERO` advances immediately.
    fn preferred_duration(&self, ctx: &MachineContext) -> Duration;

    /// Do the step's work once.
    ///
    /// The step may call [`MachineContext::proceed`] (or raise a cloned
    /// [`ProceedSignal`](crate::ProceedSignal) later) to end its window early.
    async fn execute(&self, ctx: &mut MachineContext) -> StepResult<()>;
}
