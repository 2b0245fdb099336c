//! Share target identity.

use serde::{Deserialize, Serialize};

/// The identity a non-link share is granted to.
///
/// The identifier is the opaque string supplied by the sharee-resolution
/// layer; this crate never interprets it. Link shares carry no target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShareTarget {
    /// Opaque identifier of the user, group, or remote user.
    pub identifier: String,
    /// Human-readable name for presentation.
    pub display_name: String,
}

impl ShareTarget {
    /// Create a target; the display name falls back to the identifier.
    pub fn new(identifier: impl Into<String>, display_name: Option<String>) -> Self {
        let identifier = identifier.into();
        let display_name = display_name.unwrap_or_else(|| identifier.clone());
        Self {
            identifier,
            display_name,
        }
    }
}
