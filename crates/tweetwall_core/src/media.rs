//! Media attachments carried by tweets.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tweetwall_error::BuilderError;

/// Kind of a media attachment.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum MediaKind {
    /// Still image
    Photo,
    /// Video clip
    Video,
    /// Looping animation
    AnimatedGif,
}

/// Pixel dimensions of one available rendition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaSize {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
}

/// Fixed-size photo renditions, keyed by the numeric size key the platform
/// reports for each media entry.
///
/// # Examples
///
/// ```
/// use tweetwall_core::PhotoSize;
///
/// assert_eq!(PhotoSize::from_key(2), Some(PhotoSize::Medium));
/// assert_eq!(PhotoSize::Large.suffix(), ":large");
/// assert_eq!(PhotoSize::from_key(9), None);
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::Display,
    strum::EnumIter,
)]
#[strum(serialize_all = "lowercase")]
pub enum PhotoSize {
    /// Size key 0
    Thumb,
    /// Size key 1
    Small,
    /// Size key 2
    Medium,
    /// Size key 3
    Large,
}

impl PhotoSize {
    /// Map a platform size key to a rendition, `None` for unknown keys.
    pub fn from_key(key: u32) -> Option<Self> {
        match key {
            0 => Some(Self::Thumb),
            1 => Some(Self::Small),
            2 => Some(Self::Medium),
            3 => Some(Self::Large),
            _ => None,
        }
    }

    /// The platform size key for this rendition.
    pub fn key(self) -> u32 {
        match self {
            Self::Thumb => 0,
            Self::Small => 1,
            Self::Medium => 2,
            Self::Large => 3,
        }
    }

    /// URL suffix selecting this rendition.
    pub fn suffix(self) -> String {
        format!(":{}", self)
    }
}

/// A media attachment of a tweet.
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
#[builder(setter(into), build_fn(error = "BuilderError", validate = "Self::validate"))]
pub struct MediaEntry {
    /// Platform media id
    id: u64,
    /// Attachment kind
    kind: MediaKind,
    /// Base URL; renditions are selected by suffix
    media_url: String,
    /// Available renditions keyed by size key
    #[builder(default)]
    #[serde(default)]
    sizes: BTreeMap<u32, MediaSize>,
}

impl MediaEntryBuilder {
    fn validate(&self) -> Result<(), String> {
        match &self.media_url {
            Some(url) if url.trim().is_empty() => Err("media_url must not be empty".to_string()),
            _ => Ok(()),
        }
    }
}

impl MediaEntry {
    /// Whether this entry is a still image.
    pub fn is_photo(&self) -> bool {
        self.kind == MediaKind::Photo
    }

    /// The largest size key available, if any.
    pub fn largest_size_key(&self) -> Option<u32> {
        self.sizes.keys().next_back().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_photo_size_keys_round_trip() {
        for size in PhotoSize::iter() {
            assert_eq!(PhotoSize::from_key(size.key()), Some(size));
        }
    }

    #[test]
    fn test_largest_size_key() {
        let mut sizes = BTreeMap::new();
        sizes.insert(1, MediaSize { width: 340, height: 200 });
        sizes.insert(3, MediaSize { width: 1024, height: 600 });
        sizes.insert(0, MediaSize { width: 150, height: 150 });

        let entry = MediaEntryBuilder::default()
            .id(1u64)
            .kind(MediaKind::Photo)
            .media_url("https://pbs.example/media/abc.jpg")
            .sizes(sizes)
            .build()
            .unwrap();

        assert_eq!(entry.largest_size_key(), Some(3));
        assert!(entry.is_photo());
    }

    #[test]
    fn test_empty_media_url_rejected() {
        let err = MediaEntryBuilder::default()
            .id(1u64)
            .kind(MediaKind::Video)
            .media_url("  ")
            .build()
            .unwrap_err();

        assert!(err.to_string().contains("media_url"));
    }

    #[test]
    fn test_missing_field_named() {
        let err = MediaEntryBuilder::default()
            .id(1u64)
            .media_url("https://pbs.example/v.mp4")
            .build()
            .unwrap_err();

        assert_eq!(
            err.kind(),
            &tweetwall_error::BuilderErrorKind::MissingField("kind".to_string())
        );
    }
}
