//! Insertion of the tracked parameter carrying a content identifier.

use url::Url;

use super::{strip_content_id, CONTENT_ID_PARAM};
use crate::error::Error;

/// Sets the tracked parameter on `url` to `content_id`.
///
/// Any existing occurrence is removed first, so this is a true
/// replace-or-add and safe to call on URLs that already carry an
/// identifier. A blank `content_id` leaves `url` untouched.
pub fn set_content_id(url: &str, content_id: &str) -> Result<String, Error> {
    if content_id.trim().is_empty() {
        // No valid identifier: keep the original URL.
        return Ok(url.to_string());
    }

    let stripped = strip_content_id(url)?;
    let mut parsed = Url::parse(&stripped)?;
    parsed
        .query_pairs_mut()
        .append_pair(CONTENT_ID_PARAM, content_id);
    Ok(parsed.into())
}
