//! Built-in steps.

mod next_tweet;
mod pause;
mod show_latest_image;
mod show_tweet;

pub use next_tweet::{CURRENT_TWEET_KEY, NEXT_TWEET_INDEX_KEY, NextTweetStep};
pub use pause::PauseStep;
pub use show_latest_image::ShowLatestImageStep;
pub use show_tweet::ShowTweetStep;
