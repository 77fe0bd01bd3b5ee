//! Rendering sinks.

use parking_lot::Mutex;
use tweetwall_core::Tweet;

/// Where steps render what they read from the context.
///
/// Sinks never touch the context; they only show values handed to them.
pub trait DisplaySink: Send + Sync {
    /// Show a tweet.
    fn show_tweet(&self, tweet: &Tweet);

    /// Show an image by URL.
    fn show_image(&self, url: &str);

    /// Remove whatever is shown.
    fn clear(&self);
}

/// Sink that renders through `tracing`.
#[derive(Debug, Clone, Default)]
pub struct LogDisplay {
    title: Option<String>,
}

impl LogDisplay {
    /// Create a sink, optionally tagging every line with the wall title.
    pub fn new(title: Option<String>) -> Self {
        Self { title }
    }

    fn title(&self) -> &str {
        self.title.as_deref().unwrap_or("tweetwall")
    }
}

impl DisplaySink for LogDisplay {
    fn show_tweet(&self, tweet: &Tweet) {
        tracing::info!(
            wall = self.title(),
            tweet_id = tweet.id(),
            author = %tweet.user().screen_name(),
            text = %tweet.text(),
            "Showing tweet"
        );
    }

    fn show_image(&self, url: &str) {
        tracing::info!(wall = self.title(), url, "Showing image");
    }

    fn clear(&self) {
        tracing::debug!(wall = self.title(), "Display cleared");
    }
}

/// A single rendering recorded by [`RecordingDisplay`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rendered {
    /// A tweet, by id
    Tweet(u64),
    /// An image, by URL
    Image(String),
    /// The display was cleared
    Clear,
}

/// Sink that keeps every rendering in memory, for tests.
#[derive(Debug, Default)]
pub struct RecordingDisplay {
    rendered: Mutex<Vec<Rendered>>,
}

impl RecordingDisplay {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything rendered so far, oldest first.
    pub fn rendered(&self) -> Vec<Rendered> {
        self.rendered.lock().clone()
    }
}

impl DisplaySink for RecordingDisplay {
    fn show_tweet(&self, tweet: &Tweet) {
        self.rendered.lock().push(Rendered::Tweet(*tweet.id()));
    }

    fn show_image(&self, url: &str) {
        self.rendered.lock().push(Rendered::Image(url.to_string()));
    }

    fn clear(&self) {
        self.rendered.lock().push(Rendered::Clear);
    }
}
