//! Removal of the tracked parameter from a URL's query string.

use url::Url;

use super::CONTENT_ID_PARAM;
use crate::error::Error;

/// Rebuilds `url`'s query without any occurrence of the tracked parameter.
///
/// Every other parameter keeps its relative order, including repeated keys
/// with multiple values. A query left empty is dropped entirely.
pub fn strip_content_id(url: &str) -> Result<String, Error> {
    let mut parsed = Url::parse(url)?;
    let kept: Vec<(String, String)> = parsed
        .query_pairs()
        .filter(|(name, _)| *name != CONTENT_ID_PARAM)
        .map(|(name, value)| (name.into_owned(), value.into_owned()))
        .collect();

    if kept.is_empty() {
        parsed.set_query(None);
    } else {
        let mut serializer = parsed.query_pairs_mut();
        serializer.clear();
        for (name, value) in &kept {
            serializer.append_pair(name, value);
        }
    }
    Ok(parsed.into())
}
