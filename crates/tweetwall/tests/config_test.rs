//! Configuration and history file tests.

use tweetwall::{JsonFileSource, TweetQuery, TweetSource, TweetwallConfig, parse_live_line};
use tweetwall_error::{ConfigErrorKind, SourceErrorKind};

#[test]
fn test_missing_file_reports_path() {
    let err = TweetwallConfig::from_file("/nonexistent/tweetwall.toml").unwrap_err();

    match err.kind() {
        ConfigErrorKind::FileRead { path, .. } => assert!(path.contains("tweetwall.toml")),
        other => panic!("unexpected error kind: {other}"),
    }
}

#[test]
fn test_invalid_toml_rejected() {
    let err = TweetwallConfig::from_toml("[tweetwall\nquery = ").unwrap_err();
    assert!(matches!(err.kind(), ConfigErrorKind::TomlParse(_)));
}

#[test]
fn test_sample_config_parses() {
    let contents = include_str!("../../../tweetwall.toml");
    let config = TweetwallConfig::from_toml(contents).unwrap();

    assert!(!config.tweetwall().query().is_empty());
    assert!(!config.stepengine().steps.is_empty());
    assert!(!config.stepengine().data_providers.is_empty());
}

#[tokio::test]
async fn test_history_file_answers_query() {
    let source = JsonFileSource::from_json(
        r##"[
            {"id": 1, "text": "Keynote #devoxx", "user": {"id": 10, "screen_name": "a", "name": "A"}},
            {"id": 2, "text": "Lunch", "user": {"id": 11, "screen_name": "b", "name": "B"}},
            {"id": 3, "text": "#Devoxx day two", "user": {"id": 12, "screen_name": "c", "name": "C", "followers_count": 40}}
        ]"##,
    )
    .unwrap();
    assert_eq!(source.len(), 3);

    let found = source.search(&TweetQuery::new("#devoxx", 25)).await.unwrap();
    let ids: Vec<u64> = found.iter().map(|t| *t.id()).collect();
    assert_eq!(ids, vec![1, 3]);
}

#[test]
fn test_malformed_history_rejected() {
    let err = JsonFileSource::from_json(r#"{"id": 1}"#).unwrap_err();
    assert!(err.message.contains("expected a sequence"));
}

#[test]
fn test_live_line_parsed() {
    let tweet = parse_live_line(
        r#"{"id": 7, "text": "Live #devoxx", "user": {"id": 10, "screen_name": "a", "name": "A"}}"#,
    )
    .unwrap()
    .expect("Tweet on line");
    assert_eq!(*tweet.id(), 7);
}

#[test]
fn test_blank_live_line_skipped() {
    assert!(parse_live_line("   ").unwrap().is_none());
}

#[test]
fn test_malformed_live_line_reported() {
    let err = parse_live_line(r#"{"id": "seven"}"#).unwrap_err();
    assert!(matches!(err.kind(), SourceErrorKind::Malformed(_)));
}
