//! Error taxonomy for the deep-link pipeline.
//!
//! Every variant is caught at the resolver boundary and converted into
//! "keep the previous URL, perform no navigation". Nothing here is fatal
//! to the hosting process.

/// Errors that can abort a single pipeline run.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Manifest metadata could not be read or parsed.
    #[error("configuration: {0}")]
    Configuration(String),

    /// Deep-link regex missing, malformed, or without a capture group.
    #[error("extraction: {0}")]
    Extraction(String),

    /// URL handed to the reconciler is not parseable.
    #[error("url syntax: {0}")]
    UrlSyntax(#[from] url::ParseError),
}
