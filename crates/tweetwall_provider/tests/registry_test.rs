//! Provider registry and factory tests.

use std::sync::Arc;
use tweetwall_core::{Tweet, TweetBuilder, TweetUserBuilder};
use tweetwall_error::{ConfigErrorKind, ProviderErrorKind, TweetwallErrorKind};
use tweetwall_provider::{
    DataProviderSetting, FactoryContext, InMemoryTweetSource, ProviderFactoryRegistry,
    ProviderKind, ProviderRegistry, TweetCountProvider, TweetStreamConfig, TweetStreamProvider,
};

fn tweet(id: u64) -> Tweet {
    let user = TweetUserBuilder::default()
        .id(id)
        .screen_name("speaker")
        .name("Speaker")
        .followers_count(10u64)
        .build()
        .expect("Valid user");
    TweetBuilder::default()
        .id(id)
        .text("Great talk #javaone")
        .user(user)
        .build()
        .expect("Valid tweet")
}

#[test]
fn test_missing_provider_reports_not_configured() {
    let registry = ProviderRegistry::new();

    let err = registry.get::<TweetStreamProvider>().unwrap_err();
    assert_eq!(
        err.kind(),
        &ProviderErrorKind::NotConfigured("tweet_stream".to_string())
    );
}

#[test]
fn test_duplicate_capability_rejected() {
    let mut registry = ProviderRegistry::new();
    registry
        .register(Arc::new(TweetCountProvider::new()).into())
        .unwrap();

    let err = registry
        .register(Arc::new(TweetCountProvider::new()).into())
        .unwrap_err();

    assert!(matches!(err.kind(), ConfigErrorKind::DuplicateProvider(_)));
    assert_eq!(registry.len(), 1);
}

#[test]
fn test_typed_lookup_returns_same_instance() {
    let stream = Arc::new(TweetStreamProvider::new(TweetStreamConfig::default()));
    let mut registry = ProviderRegistry::new();
    registry.register(Arc::clone(&stream).into()).unwrap();
    registry
        .register(Arc::new(TweetCountProvider::new()).into())
        .unwrap();

    let found = registry.get::<TweetStreamProvider>().unwrap();
    assert!(Arc::ptr_eq(&stream, &found));
    assert_eq!(registry.new_tweet_aware().len(), 2);
    assert_eq!(
        registry.get_kind(ProviderKind::TweetCount).map(|p| p.kind()),
        Some(ProviderKind::TweetCount)
    );
}

#[tokio::test]
async fn test_create_all_builds_and_seeds() {
    let source = InMemoryTweetSource::new(vec![tweet(1), tweet(2)]);
    let settings: Vec<DataProviderSetting> = vec![
        toml::from_str(
            r#"
            dataProviderClassName = "TweetStreamDataProvider"
            config = { maxTweets = 1 }
            "#,
        )
        .unwrap(),
        DataProviderSetting::new("TweetCountDataProvider"),
    ];
    let ctx = FactoryContext {
        query: "#javaone",
        source: &source,
    };

    let registry = ProviderFactoryRegistry::with_builtin()
        .create_all(&settings, ctx)
        .await
        .unwrap();

    let stream = registry.get::<TweetStreamProvider>().unwrap();
    let ids: Vec<u64> = stream.snapshot().iter().map(|t| *t.id()).collect();
    assert_eq!(ids, vec![2]);
    assert_eq!(registry.get::<TweetCountProvider>().unwrap().total(), 0);
}

#[tokio::test]
async fn test_create_all_rejects_unknown_provider() {
    let source = InMemoryTweetSource::default();
    let settings = vec![DataProviderSetting::new("WeatherDataProvider")];
    let ctx = FactoryContext {
        query: "",
        source: &source,
    };

    let err = ProviderFactoryRegistry::with_builtin()
        .create_all(&settings, ctx)
        .await
        .unwrap_err();

    match err.kind() {
        TweetwallErrorKind::Config(e) => assert_eq!(
            e.kind(),
            &ConfigErrorKind::UnknownProvider("WeatherDataProvider".to_string())
        ),
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn test_create_all_rejects_negative_setting() {
    let source = InMemoryTweetSource::default();
    let mut config = toml::Table::new();
    config.insert("maxTweets".into(), toml::Value::Integer(-1));
    let settings = vec![DataProviderSetting::new("TweetStreamDataProvider").with_config(config)];
    let ctx = FactoryContext {
        query: "",
        source: &source,
    };

    let err = ProviderFactoryRegistry::with_builtin()
        .create_all(&settings, ctx)
        .await
        .unwrap_err();

    let message = err.to_string();
    assert!(message.contains("maxTweets"));
    assert!(message.contains("TweetStreamDataProvider"));
}
