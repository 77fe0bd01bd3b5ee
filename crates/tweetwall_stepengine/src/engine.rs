//! The scheduling loop.

use crate::{MachineContext, Step};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tweetwall_error::{ConfigError, ConfigErrorKind, StepError, StepErrorKind, StepResult};

/// How a step's display window ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum WindowEnd {
    /// The step asked for no display time
    Immediate,
    /// The preferred duration ran out
    Elapsed,
    /// The step signalled proceed before the duration ran out
    Proceeded,
    /// A stop was requested while waiting
    Stopped,
}

/// Outcome of one display window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowReport {
    /// Position of the step in the list
    pub index: usize,
    /// Step name
    pub step: String,
    /// Duration the step asked for
    pub preferred: Duration,
    /// How the window ended
    pub end: WindowEnd,
}

/// Totals of a finished run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Windows completed
    pub windows: u64,
    /// Full passes over the step list
    pub cycles: u64,
}

/// Requests cooperative shutdown of a run.
///
/// The engine checks for a stop between windows and also while waiting out
/// a window; a step that is executing always finishes first.
#[derive(Debug, Clone)]
pub struct StopHandle {
    sender: Arc<watch::Sender<bool>>,
}

impl StopHandle {
    /// Create a handle in the running state.
    pub fn new() -> Self {
        let (sender, _) = watch::channel(false);
        Self {
            sender: Arc::new(sender),
        }
    }

    /// Request a stop. Repeated calls are no-ops.
    pub fn stop(&self) {
        tracing::info!("Stop requested");
        self.sender.send_replace(true);
    }

    /// Whether a stop was requested.
    pub fn is_stopped(&self) -> bool {
        *self.sender.borrow()
    }

    /// Receiver that observes the stop request, for tasks running beside the
    /// engine.
    pub fn subscribe(&self) -> watch::Receiver<bool> {
        self.sender.subscribe()
    }
}

impl Default for StopHandle {
    fn default() -> Self {
        Self::new()
    }
}

async fn stop_requested(mut stop: watch::Receiver<bool>) {
    if stop.wait_for(|stopped| *stopped).await.is_err() {
        // Sender gone without a stop; nothing can stop us any more
        std::future::pending::<()>().await;
    }
}

/// Runs an ordered list of steps in a loop.
pub struct StepEngine {
    steps: Vec<Arc<dyn Step>>,
    cursor: usize,
}

impl StepEngine {
    /// Create an engine starting at the first step.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigErrorKind::EmptyStepList`] for an empty list.
    pub fn new(steps: Vec<Arc<dyn Step>>) -> Result<Self, ConfigError> {
        if steps.is_empty() {
            return Err(ConfigError::new(ConfigErrorKind::EmptyStepList));
        }

        tracing::info!(steps = steps.len(), "Step engine created");
        Ok(Self { steps, cursor: 0 })
    }

    /// Number of steps.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Always false; an engine cannot be built without steps.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Index of the step the next window will run.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Step names in order.
    pub fn step_names(&self) -> Vec<String> {
        self.steps.iter().map(|s| s.name().to_string()).collect()
    }

    /// Run exactly one window: execute the current step, wait out its
    /// window, and move the cursor to the next step.
    ///
    /// # Errors
    ///
    /// Returns [`StepErrorKind::Failed`] naming the step and its index if
    /// `execute` fails. The cursor does not move in that case.
    pub async fn advance(
        &mut self,
        ctx: &mut MachineContext,
        stop: &StopHandle,
    ) -> StepResult<WindowReport> {
        let index = self.cursor;
        let step = Arc::clone(&self.steps[index]);
        let name = step.name().to_string();
        let preferred = step.preferred_duration(ctx);

        let signal = ctx.proceed_handle();
        signal.clear();

        tracing::debug!(step = %name, index, "Executing step");
        step.execute(ctx).await.map_err(|e| {
            tracing::error!(step = %name, index, error = %e, "Step failed");
            StepError::new(StepErrorKind::Failed {
                step: name.clone(),
                index,
                message: e.kind().to_string(),
            })
        })?;

        let end = if preferred.is_zero() {
            WindowEnd::Immediate
        } else {
            tokio::select! {
                _ = tokio::time::sleep(preferred) => WindowEnd::Elapsed,
                _ = signal.wait() => WindowEnd::Proceeded,
                _ = stop_requested(stop.subscribe()) => WindowEnd::Stopped,
            }
        };

        self.cursor = (index + 1) % self.steps.len();

        tracing::info!(
            step = %name,
            index,
            preferred_ms = preferred.as_millis() as u64,
            end = %end,
            "Window complete"
        );

        Ok(WindowReport {
            index,
            step: name,
            preferred,
            end,
        })
    }

    /// Loop over the steps until `stop` is requested.
    ///
    /// # Errors
    ///
    /// The first step failure ends the run and is returned.
    #[tracing::instrument(skip_all, fields(steps = self.steps.len()))]
    pub async fn run(
        &mut self,
        ctx: &mut MachineContext,
        stop: &StopHandle,
    ) -> StepResult<RunSummary> {
        let mut summary = RunSummary::default();
        let last = self.steps.len() - 1;

        tracing::info!("Step engine running");
        while !stop.is_stopped() {
            let report = self.advance(ctx, stop).await?;
            summary.windows += 1;
            if report.index == last {
                summary.cycles += 1;
            }
            match report.end {
                WindowEnd::Stopped => break,
                // Give the stop request and other tasks a chance between
                // back-to-back immediate windows
                WindowEnd::Immediate => tokio::task::yield_now().await,
                WindowEnd::Elapsed | WindowEnd::Proceeded => {}
            }
        }

        tracing::info!(
            windows = summary.windows,
            cycles = summary.cycles,
            "Step engine stopped"
        );
        Ok(summary)
    }
}

impl std::fmt::Debug for StepEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StepEngine")
            .field("steps", &self.step_names())
            .field("cursor", &self.cursor)
            .finish()
    }
}
