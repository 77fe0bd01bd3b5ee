//! Wiring of one wall run.

use crate::{TweetwallConfig, WallSettings};
use std::sync::Arc;
use tokio::sync::mpsc;
use tweetwall_core::Tweet;
use tweetwall_error::TweetwallResult;
use tweetwall_provider::{
    FactoryContext, ProviderFactoryRegistry, ProviderRegistry, PumpReport, StreamPump,
    TweetSource,
};
use tweetwall_stepengine::{
    DisplaySink, LogDisplay, MachineContext, RunSummary, StepEngine, StepRegistry, StopHandle,
};

const FEED_CAPACITY: usize = 1024;

/// Totals of a finished wall run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WallSummary {
    /// Step engine totals
    pub run: RunSummary,
    /// Stream pump totals
    pub pump: PumpReport,
}

/// A fully built wall, ready to run.
///
/// Owns the run's context, providers and engine. Live tweets are fed through
/// [`TweetWall::feed`]; the run ends when [`StopHandle::stop`] is called or a
/// step fails.
pub struct TweetWall {
    settings: WallSettings,
    engine: StepEngine,
    context: MachineContext,
    pump: StreamPump,
    feed: mpsc::Sender<Tweet>,
    stop: StopHandle,
}

impl TweetWall {
    /// Build a wall with the built-in steps and providers, rendering through
    /// [`LogDisplay`].
    ///
    /// # Errors
    ///
    /// Fails on any configuration error or if seeding a provider fails.
    pub async fn build(config: TweetwallConfig, source: &dyn TweetSource) -> TweetwallResult<Self> {
        let display = Arc::new(LogDisplay::new(config.tweetwall().title().clone()));
        Self::build_with(
            config,
            source,
            &ProviderFactoryRegistry::with_builtin(),
            &StepRegistry::with_builtin(),
            display,
        )
        .await
    }

    /// Build a wall from explicit registries and display.
    ///
    /// Steps are resolved before any provider is created, so a bad step list
    /// fails without querying the source.
    ///
    /// # Errors
    ///
    /// Fails on any configuration error or if seeding a provider fails.
    #[tracing::instrument(skip_all, fields(query = %config.tweetwall().query()))]
    pub async fn build_with(
        config: TweetwallConfig,
        source: &dyn TweetSource,
        provider_factories: &ProviderFactoryRegistry,
        step_registry: &StepRegistry,
        display: Arc<dyn DisplaySink>,
    ) -> TweetwallResult<Self> {
        let steps = step_registry.build(&config.stepengine().steps)?;
        let engine = StepEngine::new(steps)?;

        let ctx = FactoryContext {
            query: config.tweetwall().query(),
            source,
        };
        let providers = Arc::new(
            provider_factories
                .create_all(&config.stepengine().data_providers, ctx)
                .await?,
        );

        let (feed, pump) = StreamPump::channel(FEED_CAPACITY, &providers);
        let context = MachineContext::with_display(Arc::clone(&providers), display);

        tracing::info!(
            steps = ?engine.step_names(),
            providers = providers.len(),
            "Wall built"
        );

        Ok(Self {
            settings: config.tweetwall().clone(),
            engine,
            context,
            pump,
            feed,
            stop: StopHandle::new(),
        })
    }

    /// Sender for live tweets. The pump runs until every sender is dropped
    /// or the wall is stopped.
    pub fn feed(&self) -> mpsc::Sender<Tweet> {
        self.feed.clone()
    }

    /// Handle that stops the run.
    pub fn stop_handle(&self) -> StopHandle {
        self.stop.clone()
    }

    /// The run's providers.
    pub fn providers(&self) -> &Arc<ProviderRegistry> {
        self.context.providers()
    }

    /// Configured step names, in order.
    pub fn step_names(&self) -> Vec<String> {
        self.engine.step_names()
    }

    /// Wall-level settings.
    pub fn settings(&self) -> &WallSettings {
        &self.settings
    }

    /// Run the engine and the stream pump until stopped.
    ///
    /// # Errors
    ///
    /// Returns the step failure that ended the run. The pump is stopped in
    /// either case.
    pub async fn run(self) -> TweetwallResult<WallSummary> {
        let Self {
            mut engine,
            mut context,
            pump,
            feed,
            stop,
            ..
        } = self;
        // Only outside senders keep the stream open
        drop(feed);

        let pump_task = tokio::spawn(pump.run(stop.subscribe()));

        let result = engine.run(&mut context, &stop).await;
        stop.stop();

        let pump = pump_task.await.unwrap_or_else(|e| {
            tracing::error!(error = %e, "Stream pump task failed");
            PumpReport::default()
        });

        let run = result?;
        Ok(WallSummary { run, pump })
    }
}

impl std::fmt::Debug for TweetWall {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TweetWall")
            .field("settings", &self.settings)
            .field("engine", &self.engine)
            .field("stopped", &self.stop.is_stopped())
            .finish()
    }
}
