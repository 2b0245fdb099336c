//! Share-related events.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Events published on completion of share operations.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ShareEvent {
    /// A user, group, or remote share was created.
    Created {
        /// The share ID.
        id: String,
        /// The shared resource path.
        path: String,
        /// The share kind (user, group, remote).
        kind: String,
    },
    /// A link share was created.
    LinkCreated {
        /// The share ID.
        id: String,
        /// The shared resource path.
        path: String,
        /// The public access URL.
        url: String,
    },
    /// The server requires a password before it will create a link
    /// share on this path.
    LinkPasswordRequired {
        /// The path of the rejected create.
        path: String,
    },
    /// All shares on a path were fetched.
    Fetched {
        /// The listed path.
        path: String,
        /// Number of shares returned.
        count: usize,
    },
    /// A share's permission set was confirmed by the server.
    PermissionsSet {
        /// The share ID.
        id: String,
        /// The confirmed permission bits.
        permissions: u32,
    },
    /// A link share's password was set or cleared.
    PasswordSet {
        /// The share ID.
        id: String,
        /// Whether a password now guards the link.
        protected: bool,
    },
    /// A link share's expiration date was set or cleared.
    ExpireDateSet {
        /// The share ID.
        id: String,
        /// The confirmed expiration date, if any.
        expire_date: Option<NaiveDate>,
    },
    /// A link share's public-upload flag was toggled.
    PublicUploadSet {
        /// The share ID.
        id: String,
        /// Whether uploads through the link are now allowed.
        enabled: bool,
    },
    /// A share was deleted on the server.
    Deleted {
        /// The share ID.
        id: String,
    },
}
