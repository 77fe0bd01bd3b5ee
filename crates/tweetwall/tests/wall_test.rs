//! End-to-end wall runs on a paused clock.

use std::sync::Arc;
use std::time::Duration;
use tweetwall::{
    InMemoryTweetSource, ProviderFactoryRegistry, StepRegistry, Tweet, TweetStreamProvider,
    TweetWall, TweetwallConfig, TweetwallErrorKind,
};
use tweetwall_core::{TweetBuilder, TweetUserBuilder};
use tweetwall_error::ConfigErrorKind;
use tweetwall_provider::TweetCountProvider;
use tweetwall_stepengine::{RecordingDisplay, Rendered};

const CONFIG: &str = r##"
[tweetwall]
query = "#jfokus"
title = "Jfokus"

[[stepengine.steps]]
step = "NextTweet"

[[stepengine.steps]]
step = "ShowTweet"
config = { durationMillis = 100 }

[[stepengine.dataProviders]]
dataProviderClassName = "TweetStreamDataProvider"
config = { maxTweets = 2 }

[[stepengine.dataProviders]]
dataProviderClassName = "TweetCountDataProvider"
"##;

fn tweet(id: u64) -> Tweet {
    let user = TweetUserBuilder::default()
        .id(id)
        .screen_name("dev")
        .name("Dev")
        .build()
        .expect("Valid user");
    TweetBuilder::default()
        .id(id)
        .text(format!("#jfokus {}", id))
        .user(user)
        .build()
        .expect("Valid tweet")
}

#[tokio::test(start_paused = true)]
async fn test_wall_runs_until_stopped() {
    let config = TweetwallConfig::from_toml(CONFIG).unwrap();
    let source = InMemoryTweetSource::new(vec![tweet(1), tweet(2)]);
    let display = Arc::new(RecordingDisplay::new());

    let wall = TweetWall::build_with(
        config,
        &source,
        &ProviderFactoryRegistry::with_builtin(),
        &StepRegistry::with_builtin(),
        display.clone(),
    )
    .await
    .unwrap();
    assert_eq!(wall.step_names(), vec!["NextTweet", "ShowTweet"]);
    assert_eq!(wall.settings().title().as_deref(), Some("Jfokus"));

    let providers = Arc::clone(wall.providers());
    let feed = wall.feed();
    feed.send(tweet(3)).await.unwrap();
    drop(feed);

    let stop = wall.stop_handle();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(350)).await;
        stop.stop();
    });

    let summary = wall.run().await.unwrap();

    assert!(summary.run.cycles >= 3);
    assert_eq!(summary.pump.received, 1);
    assert_eq!(summary.pump.failed, 0);

    let stream = providers.get::<TweetStreamProvider>().unwrap();
    let ids: Vec<u64> = stream.snapshot().iter().map(|t| *t.id()).collect();
    assert_eq!(ids, vec![3, 2]);
    assert_eq!(providers.get::<TweetCountProvider>().unwrap().total(), 1);

    let rendered = display.rendered();
    assert!(rendered.len() >= 3);
    assert!(rendered.iter().all(|r| matches!(r, Rendered::Tweet(_))));
}

#[tokio::test]
async fn test_bad_step_list_fails_before_querying() {
    let config = TweetwallConfig::from_toml(
        r##"
        [tweetwall]
        query = "#jfokus"

        [[stepengine.steps]]
        step = "Fireworks"

        [[stepengine.dataProviders]]
        dataProviderClassName = "TweetStreamDataProvider"
        "##,
    )
    .unwrap();
    let source = InMemoryTweetSource::failing("must not be queried");

    let err = TweetWall::build(config, &source).await.unwrap_err();

    match err.kind() {
        TweetwallErrorKind::Config(e) => {
            assert_eq!(e.kind(), &ConfigErrorKind::UnknownStep("Fireworks".to_string()))
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn test_empty_step_list_fails() {
    let config = TweetwallConfig::from_toml("[tweetwall]\nquery = \"#jfokus\"\n").unwrap();
    let source = InMemoryTweetSource::default();

    let err = TweetWall::build(config, &source).await.unwrap_err();

    assert!(matches!(
        err.kind(),
        TweetwallErrorKind::Config(e) if e.kind() == &ConfigErrorKind::EmptyStepList
    ));
}

#[tokio::test]
async fn test_history_failure_fails_build() {
    let config = TweetwallConfig::from_toml(CONFIG).unwrap();
    let source = InMemoryTweetSource::failing("search unavailable");

    let err = TweetWall::build(config, &source).await.unwrap_err();

    assert!(matches!(err.kind(), TweetwallErrorKind::Source(_)));
}
