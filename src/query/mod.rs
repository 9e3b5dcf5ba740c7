//! Tracked query-parameter reconciliation on navigation URLs.
//!
//! The content identifier travels to the web application in a single
//! reserved query parameter. These operations keep that parameter consistent
//! while leaving every other part of the URL alone.

mod append;
mod strip;

pub use append::set_content_id;
pub use strip::strip_content_id;

/// Reserved query parameter carrying the resolved content identifier.
/// Must not collide with application-defined parameters.
pub const CONTENT_ID_PARAM: &str = "amazonLauncherIntegrationContentId";
