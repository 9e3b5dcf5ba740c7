//! Content-identifier extraction from a raw launch payload.

use crate::manifest::ExtractionConfig;

/// Returns the first capture group of the first pattern match in `raw`, or
/// an empty string when the pattern matches nowhere.
///
/// An empty result means "no identifier found" and leaves the navigation
/// URL unchanged downstream.
pub fn extract_id(raw: &str, config: &ExtractionConfig) -> String {
    match config.pattern.captures(raw) {
        Some(caps) => caps
            .get(1)
            .map(|m| m.as_str().to_string())
            .unwrap_or_default(),
        None => {
            tracing::debug!("deep-link pattern found no match in payload");
            String::new()
        }
    }
}
