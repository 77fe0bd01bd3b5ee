//! Live stream fan-out.

use crate::{NewTweetAware, ProviderRegistry};
use std::sync::Arc;
use tokio::sync::{mpsc, watch};
use tweetwall_core::Tweet;

/// Totals of one pump run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PumpReport {
    /// Tweets taken off the channel
    pub received: u64,
    /// Provider deliveries that returned an error
    pub failed: u64,
}

/// Delivers live tweets to every [`NewTweetAware`] provider.
///
/// Runs on its own task, concurrently with the step engine. Each tweet is
/// handed to the providers in registry order; a provider error is logged and
/// counted but does not stop delivery.
pub struct StreamPump {
    receiver: mpsc::Receiver<Tweet>,
    consumers: Vec<Arc<dyn NewTweetAware>>,
}

impl StreamPump {
    /// Pump reading from `receiver` into the consumers of `registry`.
    pub fn new(receiver: mpsc::Receiver<Tweet>, registry: &ProviderRegistry) -> Self {
        Self {
            receiver,
            consumers: registry.new_tweet_aware(),
        }
    }

    /// Create a bounded channel and the pump draining it.
    pub fn channel(capacity: usize, registry: &ProviderRegistry) -> (mpsc::Sender<Tweet>, Self) {
        let (tx, rx) = mpsc::channel(capacity.max(1));
        (tx, Self::new(rx, registry))
    }

    /// Number of providers receiving tweets.
    pub fn consumer_count(&self) -> usize {
        self.consumers.len()
    }

    /// Deliver tweets until every sender is dropped or `stop` flips to true.
    #[tracing::instrument(skip_all, fields(consumers = self.consumers.len()))]
    pub async fn run(mut self, mut stop: watch::Receiver<bool>) -> PumpReport {
        let mut report = PumpReport::default();
        let mut watching = true;

        tracing::info!("Stream pump started");
        loop {
            if *stop.borrow() {
                tracing::info!("Stop requested, stream pump exiting");
                break;
            }

            let tweet = tokio::select! {
                tweet = self.receiver.recv() => tweet,
                changed = stop.changed(), if watching => {
                    if changed.is_err() {
                        // Stop sender gone; keep draining until the stream closes
                        watching = false;
                    }
                    continue;
                }
            };

            let Some(tweet) = tweet else {
                tracing::info!("Stream closed");
                break;
            };

            report.received += 1;
            for consumer in &self.consumers {
                if let Err(e) = consumer.process_new_tweet(&tweet) {
                    report.failed += 1;
                    tracing::error!(
                        provider = consumer.name(),
                        tweet_id = tweet.id(),
                        error = %e,
                        "Provider rejected tweet"
                    );
                }
            }
        }

        tracing::info!(
            received = report.received,
            failed = report.failed,
            "Stream pump stopped"
        );
        report
    }
}

impl std::fmt::Debug for StreamPump {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names: Vec<&str> = self.consumers.iter().map(|c| c.name()).collect();
        f.debug_struct("StreamPump")
            .field("consumers", &names)
            .finish()
    }
}
