//! Stream pump delivery tests.

use std::sync::Arc;
use tokio::sync::watch;
use tweetwall_core::{MediaEntryBuilder, MediaKind, MediaSize, Tweet, TweetBuilder, TweetUserBuilder};
use tweetwall_provider::{
    ProviderRegistry, PumpReport, StreamPump, TweetCountProvider, TweetStreamConfig,
    TweetStreamProvider,
};

fn tweet(id: u64) -> Tweet {
    let user = TweetUserBuilder::default()
        .id(id)
        .screen_name("attendee")
        .name("Attendee")
        .build()
        .expect("Valid user");
    TweetBuilder::default()
        .id(id)
        .text("live")
        .user(user)
        .build()
        .expect("Valid tweet")
}

fn registry() -> (ProviderRegistry, Arc<TweetStreamProvider>, Arc<TweetCountProvider>) {
    let stream = Arc::new(TweetStreamProvider::new(TweetStreamConfig::new(0, 4, 0)));
    let count = Arc::new(TweetCountProvider::new());
    let mut registry = ProviderRegistry::new();
    registry.register(Arc::clone(&stream).into()).unwrap();
    registry.register(Arc::clone(&count).into()).unwrap();
    (registry, stream, count)
}

#[tokio::test]
async fn test_pump_delivers_to_every_consumer() {
    let (registry, stream, count) = registry();
    let (tx, pump) = StreamPump::channel(8, &registry);
    let (_stop_tx, stop_rx) = watch::channel(false);
    assert_eq!(pump.consumer_count(), 2);

    let handle = tokio::spawn(pump.run(stop_rx));
    for id in 1..=3 {
        tx.send(tweet(id)).await.unwrap();
    }
    drop(tx);

    let report = handle.await.unwrap();
    assert_eq!(report, PumpReport { received: 3, failed: 0 });
    assert_eq!(count.total(), 3);
    let ids: Vec<u64> = stream.snapshot().iter().map(|t| *t.id()).collect();
    assert_eq!(ids, vec![3, 2, 1]);
}

#[tokio::test]
async fn test_pump_survives_provider_error() {
    let (registry, stream, count) = registry();
    let (tx, pump) = StreamPump::channel(8, &registry);
    let (_stop_tx, stop_rx) = watch::channel(false);
    let handle = tokio::spawn(pump.run(stop_rx));

    let photo = MediaEntryBuilder::default()
        .id(5u64)
        .kind(MediaKind::Photo)
        .media_url("https://pbs.example/bad.jpg")
        .sizes([(42, MediaSize { width: 1, height: 1 })])
        .build()
        .unwrap();
    let base = tweet(5);
    let bad = TweetBuilder::default()
        .id(5u64)
        .text("bad media")
        .user(base.user().clone())
        .media_entries(vec![photo])
        .build()
        .unwrap();

    tx.send(bad).await.unwrap();
    tx.send(tweet(6)).await.unwrap();
    drop(tx);

    let report = handle.await.unwrap();
    assert_eq!(report.received, 2);
    assert_eq!(report.failed, 1);
    assert_eq!(count.total(), 2);
    assert_eq!(stream.len(), 1);
}

#[tokio::test]
async fn test_pump_stops_on_signal() {
    let (registry, _stream, _count) = registry();
    let (tx, pump) = StreamPump::channel(8, &registry);
    let (stop_tx, stop_rx) = watch::channel(false);
    let handle = tokio::spawn(pump.run(stop_rx));

    stop_tx.send(true).unwrap();

    let report = handle.await.unwrap();
    assert_eq!(report.received, 0);
    // The pump exited on the signal alone and dropped its receiver
    assert!(tx.is_closed());
}
