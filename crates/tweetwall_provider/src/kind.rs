//! Provider capability tags.

use serde::{Deserialize, Serialize};

/// The closed set of provider capabilities a run can register.
///
/// Registries are keyed by this tag, so there is exactly one provider per
/// capability in a run.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ProviderKind {
    /// Bounded window of recent tweets
    TweetStream,
    /// Running count of delivered tweets
    TweetCount,
}
