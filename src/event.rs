//! Launch events delivered by the host platform.
//!
//! One event is produced per activation or resumption; the event carries an
//! action tag, optionally a data URI, and optionally named string extras.

use std::collections::HashMap;

/// Action tag on a launch event. Only `View` is eligible for deep linking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaunchAction {
    /// The launcher asked to view specific content.
    View,
    /// Plain start from the home screen.
    Main,
}

/// One OS-delivered launch or resume notification. Immutable; consumed once.
#[derive(Debug, Clone)]
pub struct LaunchEvent {
    pub action: LaunchAction,
    /// Primary data URI, when the launcher encodes the payload in URI form.
    pub data_uri: Option<String>,
    /// Named string payloads attached to the event.
    pub extras: HashMap<String, String>,
}

impl LaunchEvent {
    /// Event with the given action and no payload.
    pub fn bare(action: LaunchAction) -> Self {
        Self {
            action,
            data_uri: None,
            extras: HashMap::new(),
        }
    }

    /// View-action event carrying a data URI.
    pub fn view_with_uri(uri: impl Into<String>) -> Self {
        Self {
            action: LaunchAction::View,
            data_uri: Some(uri.into()),
            extras: HashMap::new(),
        }
    }

    /// View-action event carrying a single named extra.
    pub fn view_with_extra(key: impl Into<String>, value: impl Into<String>) -> Self {
        let mut extras = HashMap::new();
        extras.insert(key.into(), value.into());
        Self {
            action: LaunchAction::View,
            data_uri: None,
            extras,
        }
    }
}
