//! Media URL derivation.

use tweetwall_core::{PhotoSize, Tweet};
use tweetwall_error::{ProviderError, ProviderErrorKind, ProviderResult};

/// Derive the displayable image URL of a tweet.
///
/// Takes the first photo attachment, picks its largest size key and appends
/// the matching rendition suffix. Returns `Ok(None)` when the tweet has no
/// photo or the photo lists no sizes.
///
/// # Errors
///
/// Returns [`ProviderErrorKind::UnknownMediaSize`] when the largest size key
/// is not one of the known renditions.
///
/// # Examples
///
/// ```
/// use tweetwall_core::{MediaEntryBuilder, MediaKind, MediaSize, TweetBuilder, TweetUserBuilder};
/// use tweetwall_provider::latest_image_url;
///
/// let photo = MediaEntryBuilder::default()
///     .id(1u64)
///     .kind(MediaKind::Photo)
///     .media_url("https://pbs.example/a.jpg")
///     .sizes([(0, MediaSize { width: 150, height: 150 }), (1, MediaSize { width: 340, height: 255 })])
///     .build()
///     .unwrap();
/// let user = TweetUserBuilder::default().id(1u64).screen_name("a").name("a").build().unwrap();
/// let tweet = TweetBuilder::default()
///     .id(1u64)
///     .text("pic")
///     .user(user)
///     .media_entries(vec![photo])
///     .build()
///     .unwrap();
///
/// assert_eq!(latest_image_url(&tweet).unwrap().as_deref(), Some("https://pbs.example/a.jpg:small"));
/// ```
pub fn latest_image_url(tweet: &Tweet) -> ProviderResult<Option<String>> {
    let Some(photo) = tweet.first_photo() else {
        return Ok(None);
    };
    let Some(key) = photo.largest_size_key() else {
        tracing::debug!(media_url = %photo.media_url(), "Photo without sizes, no image derived");
        return Ok(None);
    };

    let size = PhotoSize::from_key(key).ok_or_else(|| {
        ProviderError::new(ProviderErrorKind::UnknownMediaSize {
            media_url: photo.media_url().clone(),
            key,
        })
    })?;

    Ok(Some(format!("{}{}", photo.media_url(), size.suffix())))
}
