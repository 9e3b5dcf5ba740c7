//! DLR: deep-link resolution for launcher-integrated web-view applications.
//!
//! Rewrites the hosted web app's navigation URL to carry a content identifier
//! extracted from OS launch events, and reconciles that identifier when new
//! events arrive while the app is already running.

pub mod error;
pub mod logging;
pub mod manifest;

pub mod event;
pub mod extract;
pub mod locator;
pub mod query;
pub mod resolver;
