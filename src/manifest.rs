//! Application manifest: the read-only metadata store supplying deep-link
//! extraction settings.
//!
//! The manifest is a small TOML file (by default under
//! `~/.config/dlr/manifest.toml`). App authors must supply
//! `deep_link_regex`; its absence is a configuration error, never a silent
//! default.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Error;

/// Where the launcher places the content identifier for this build.
/// Resolved once from configuration, not probed per event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PayloadSource {
    /// Identifier is embedded in the event's primary data URI.
    #[default]
    Uri,
    /// Identifier is carried in a named extra field.
    Extra,
}

/// Raw manifest entries, as deserialized from `manifest.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Manifest {
    /// Regular expression whose first capture group isolates the content id.
    #[serde(default)]
    pub deep_link_regex: Option<String>,
    /// Where the launcher places the identifier.
    #[serde(default)]
    pub payload_source: PayloadSource,
    /// Extra-field key used when `payload_source = "extra"`.
    #[serde(default = "default_extra_payload_key")]
    pub extra_payload_key: String,
}

fn default_extra_payload_key() -> String {
    "videoId".to_string()
}

impl Default for Manifest {
    fn default() -> Self {
        Self {
            deep_link_regex: None,
            payload_source: PayloadSource::Uri,
            extra_payload_key: default_extra_payload_key(),
        }
    }
}

/// Default manifest location under the XDG config dir.
pub fn manifest_path() -> Result<PathBuf, Error> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("dlr")
        .map_err(|e| Error::Configuration(format!("resolve XDG config dir: {e}")))?;
    xdg_dirs
        .place_config_file("manifest.toml")
        .map_err(|e| Error::Configuration(format!("place manifest file: {e}")))
}

/// Load manifest entries from disk.
pub fn load(path: &Path) -> Result<Manifest, Error> {
    let data = fs::read_to_string(path)
        .map_err(|e| Error::Configuration(format!("read manifest {}: {e}", path.display())))?;
    toml::from_str(&data)
        .map_err(|e| Error::Configuration(format!("parse manifest {}: {e}", path.display())))
}

/// Compiled extraction settings, resolved at most once per resolver and
/// cached for the life of the process.
#[derive(Debug, Clone)]
pub struct ExtractionConfig {
    /// Compiled pattern; its first capture group is the content identifier.
    pub pattern: Regex,
    pub source: PayloadSource,
    pub extra_key: String,
}

impl ExtractionConfig {
    /// Compiles the manifest's extraction entries.
    ///
    /// Fails if `deep_link_regex` is unset or blank, does not compile, or
    /// contains no capture group to isolate the identifier.
    pub fn resolve(manifest: &Manifest) -> Result<Self, Error> {
        let raw = manifest
            .deep_link_regex
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .ok_or_else(|| {
                Error::Extraction("deep_link_regex is not set in the manifest".to_string())
            })?;
        let pattern = Regex::new(raw)
            .map_err(|e| Error::Extraction(format!("deep_link_regex {raw:?} does not compile: {e}")))?;
        if pattern.captures_len() < 2 {
            return Err(Error::Extraction(format!(
                "deep_link_regex {raw:?} has no capture group"
            )));
        }
        Ok(Self {
            pattern,
            source: manifest.payload_source,
            extra_key: manifest.extra_payload_key.clone(),
        })
    }
}
