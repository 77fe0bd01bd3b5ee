//! Tests for tweet model types.

use tweetwall_core::{MediaEntryBuilder, MediaKind, Tweet, TweetBuilder, TweetUserBuilder};

fn user(screen_name: &str, followers: u64) -> tweetwall_core::TweetUser {
    TweetUserBuilder::default()
        .id(1u64)
        .screen_name(screen_name)
        .name(screen_name)
        .followers_count(followers)
        .build()
        .expect("valid user")
}

#[test]
fn test_retweet_unwraps_to_original() {
    let original = TweetBuilder::default()
        .id(1u64)
        .text("original")
        .user(user("author", 10))
        .build()
        .expect("valid tweet");

    let retweet = TweetBuilder::default()
        .id(2u64)
        .text("RT original")
        .user(user("fan", 3))
        .retweeted_tweet(Some(Box::new(original.clone())))
        .build()
        .expect("valid tweet");

    assert!(retweet.is_retweet());
    assert_eq!(retweet.retweeted(), Some(&original));
    assert_eq!(retweet.into_original(), original);
}

#[test]
fn test_first_photo_skips_video() {
    let video = MediaEntryBuilder::default()
        .id(1u64)
        .kind(MediaKind::Video)
        .media_url("https://video.example/1.mp4")
        .build()
        .expect("valid media");
    let photo = MediaEntryBuilder::default()
        .id(2u64)
        .kind(MediaKind::Photo)
        .media_url("https://pbs.example/2.jpg")
        .build()
        .expect("valid media");

    let tweet = TweetBuilder::default()
        .id(3u64)
        .text("look")
        .user(user("photographer", 50))
        .media_entries(vec![video, photo])
        .build()
        .expect("valid tweet");

    let first = tweet.first_photo().expect("photo present");
    assert_eq!(first.media_url(), "https://pbs.example/2.jpg");
}

#[test]
fn test_tweet_deserializes_from_stream_json() {
    let json = r#"{
        "id": 99,
        "text": "streamed",
        "created_at": "2024-10-07T09:00:00Z",
        "user": { "id": 5, "screen_name": "devoxx", "name": "Devoxx", "followers_count": 4000 },
        "media_entries": [
            { "id": 1, "kind": "photo", "media_url": "https://pbs.example/x.jpg",
              "sizes": { "0": { "width": 150, "height": 150 }, "2": { "width": 800, "height": 600 } } }
        ]
    }"#;

    let tweet: Tweet = serde_json::from_str(json).expect("valid json");
    assert_eq!(*tweet.id(), 99);
    assert_eq!(*tweet.user().followers_count(), 4000);
    assert_eq!(tweet.first_photo().and_then(|m| m.largest_size_key()), Some(2));
    assert!(!tweet.is_retweet());
}
