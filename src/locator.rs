//! Locating the raw deep-link payload inside a launch event.

use crate::event::LaunchEvent;
use crate::manifest::{ExtractionConfig, PayloadSource};

/// Pulls the raw payload string out of `event` according to the configured
/// payload source. Blank (empty or whitespace-only) payloads count as absent.
pub fn locate(event: &LaunchEvent, config: &ExtractionConfig) -> Option<String> {
    let raw = match config.source {
        PayloadSource::Uri => event.data_uri.clone(),
        PayloadSource::Extra => event.extras.get(&config.extra_key).cloned(),
    };
    match raw {
        Some(value) if !value.trim().is_empty() => Some(value),
        Some(_) => {
            tracing::debug!("launch payload is blank");
            None
        }
        None => {
            tracing::debug!("launch event carries no payload");
            None
        }
    }
}
