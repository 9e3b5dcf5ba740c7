//! Lifecycle orchestration: deep-link pipeline wired to the web-view host.
//!
//! The resolver owns the staged navigation URL and runs the
//! locate → extract → reconcile pipeline on activation and on resume events.
//! Every pipeline failure is logged and degrades to "keep the previous URL";
//! a broken deep link must never stop the web application from loading.

use std::path::{Path, PathBuf};

use crate::error::Error;
use crate::event::{LaunchAction, LaunchEvent};
use crate::extract;
use crate::locator;
use crate::manifest::{self, ExtractionConfig};
use crate::query;

/// Opaque navigation sink for the hosted web application.
///
/// The resolver never inspects what the view renders; it only stages URLs
/// and asks for a reload when the resolved URL actually changed.
pub trait WebViewSink {
    /// URL currently loaded, or `None` if the view has never navigated.
    fn current_url(&self) -> Option<String>;

    /// Instructs the view to navigate. Reloads the web application.
    fn load_url(&mut self, url: &str);
}

/// Rewrites the staged navigation URL from launch events and reconciles it
/// when new events arrive while the app is already running.
pub struct DeepLinkResolver<S: WebViewSink> {
    sink: S,
    manifest_path: PathBuf,
    /// The staged (or currently loaded) navigation URL. Replaced wholesale
    /// by each pipeline run, never mutated in place.
    launch_url: String,
    /// Extraction settings, resolved from the manifest on first use.
    config: Option<ExtractionConfig>,
}

impl<S: WebViewSink> DeepLinkResolver<S> {
    /// `base_launch_url` is the host-configured URL the web view would load
    /// with no deep link; `manifest_path` points at the extraction metadata.
    pub fn new(sink: S, base_launch_url: impl Into<String>, manifest_path: impl AsRef<Path>) -> Self {
        Self {
            sink,
            manifest_path: manifest_path.as_ref().to_path_buf(),
            launch_url: base_launch_url.into(),
            config: None,
        }
    }

    /// Resolver using the default XDG manifest location.
    pub fn with_default_manifest(sink: S, base_launch_url: impl Into<String>) -> Result<Self, Error> {
        let path = manifest::manifest_path()?;
        Ok(Self::new(sink, base_launch_url, path))
    }

    /// The URL the web view should currently be showing.
    pub fn launch_url(&self) -> &str {
        &self.launch_url
    }

    /// Initial activation. If the view has not loaded anything yet, runs the
    /// pipeline against the base launch URL and stages the result; returns
    /// the URL the host should load. Repeated activation is a no-op.
    pub fn on_activate(&mut self, event: &LaunchEvent) -> &str {
        if let Some(url) = self.sink.current_url() {
            if !is_blank(&url) {
                tracing::debug!(%url, "web view is already loaded");
                return &self.launch_url;
            }
        }

        let base = self.launch_url.clone();
        match self.resolve_candidate(event, &base) {
            Ok(Some(url)) => self.launch_url = url,
            Ok(None) => {}
            Err(err) => {
                tracing::error!(error = %err, "deep-link pipeline failed; keeping launch url");
            }
        }
        tracing::debug!(url = %self.launch_url, "loading web view with url");
        &self.launch_url
    }

    /// Launch event received while the app is already running. Recomputes the
    /// deep-link URL and reloads the web view only when it actually changed.
    pub fn on_resume_with_event(&mut self, event: &LaunchEvent) {
        let original = self.launch_url.clone();
        let baseline = match query::strip_content_id(&original) {
            Ok(stripped) => stripped,
            Err(err) => {
                tracing::error!(error = %err, url = %original, "current url is not parseable; keeping it");
                return;
            }
        };

        let candidate = match self.resolve_candidate(event, &baseline) {
            Ok(Some(url)) => url,
            Ok(None) => {
                tracing::debug!("resume event carries no deep link; keeping current url");
                return;
            }
            Err(err) => {
                tracing::error!(error = %err, "deep-link pipeline failed; keeping current url");
                return;
            }
        };

        // Content comparison against the original, unstripped URL.
        if candidate == original {
            tracing::info!(url = %original, "resume event did not change url");
            return;
        }

        tracing::info!(url = %candidate, "resume event changed url; reloading web view");
        self.launch_url = candidate;
        self.sink.load_url(&self.launch_url);
    }

    /// Runs locate → extract → reconcile for one event against `base`.
    /// `Ok(None)` means the event is ineligible for deep linking.
    fn resolve_candidate(
        &mut self,
        event: &LaunchEvent,
        base: &str,
    ) -> Result<Option<String>, Error> {
        let config = self.config()?;

        let raw = match locator::locate(event, &config) {
            Some(raw) => raw,
            None => return Ok(None),
        };
        if event.action != LaunchAction::View {
            tracing::debug!(action = ?event.action, "launch action is not view; ignoring payload");
            return Ok(None);
        }

        let id = extract::extract_id(&raw, &config);
        query::set_content_id(base, &id).map(Some)
    }

    /// Extraction settings, loaded from the manifest on first use and cached
    /// for the life of the resolver. Cloning is cheap; the compiled pattern
    /// is reference-counted.
    fn config(&mut self) -> Result<ExtractionConfig, Error> {
        if let Some(config) = &self.config {
            return Ok(config.clone());
        }
        let manifest = manifest::load(&self.manifest_path)?;
        let config = ExtractionConfig::resolve(&manifest)?;
        self.config = Some(config.clone());
        Ok(config)
    }
}

/// True if the string is empty or whitespace-only.
fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct FakeWebView {
        current: Option<String>,
        loads: Vec<String>,
    }

    impl WebViewSink for FakeWebView {
        fn current_url(&self) -> Option<String> {
            self.current.clone()
        }

        fn load_url(&mut self, url: &str) {
            self.loads.push(url.to_string());
        }
    }

    #[test]
    fn is_blank_matches_whitespace_only() {
        assert!(is_blank(""));
        assert!(is_blank("  \t"));
        assert!(!is_blank("x"));
    }

    #[test]
    fn activate_skips_pipeline_when_view_already_loaded() {
        let sink = FakeWebView {
            current: Some("https://app.example/somewhere".to_string()),
            loads: Vec::new(),
        };
        // Nonexistent manifest: the pipeline would fail if it ran at all.
        let mut resolver =
            DeepLinkResolver::new(sink, "https://app.example/", "/nonexistent/manifest.toml");
        let event = LaunchEvent::view_with_uri("watch?videoId='abc123'");
        assert_eq!(resolver.on_activate(&event), "https://app.example/");
    }

    #[test]
    fn missing_manifest_keeps_launch_url_and_never_navigates() {
        let mut resolver = DeepLinkResolver::new(
            FakeWebView::default(),
            "https://app.example/",
            "/nonexistent/manifest.toml",
        );
        let event = LaunchEvent::view_with_uri("watch?videoId='abc123'");
        assert_eq!(resolver.on_activate(&event), "https://app.example/");
        resolver.on_resume_with_event(&event);
        assert_eq!(resolver.launch_url(), "https://app.example/");
    }
}
