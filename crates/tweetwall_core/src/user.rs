//! Tweet author type.

use serde::{Deserialize, Serialize};
use tweetwall_error::BuilderError;

/// The author of a tweet.
///
/// # Examples
///
/// ```
/// use tweetwall_core::TweetUserBuilder;
///
/// let user = TweetUserBuilder::default()
///     .id(7u64)
///     .screen_name("johanvos")
///     .name("Johan Vos")
///     .followers_count(1200u64)
///     .build()
///     .unwrap();
/// assert_eq!(*user.followers_count(), 1200);
/// ```
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    derive_builder::Builder,
    derive_getters::Getters,
)]
#[builder(setter(into), build_fn(error = "BuilderError"))]
pub struct TweetUser {
    /// Platform user id
    id: u64,
    /// Handle without the leading `@`
    screen_name: String,
    /// Display name
    name: String,
    /// Number of followers at the time the tweet was seen
    #[builder(default)]
    #[serde(default)]
    followers_count: u64,
    /// Avatar URL
    #[builder(default)]
    #[serde(default)]
    profile_image_url: Option<String>,
}
