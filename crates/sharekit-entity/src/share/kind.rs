//! Share kind enumeration.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The kind of grant a share represents.
///
/// Wire codes are fixed by the sharing API and must stay in sync with
/// the sharee-resolution layer: User 0, Group 1, Link 3, Remote 6.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShareKind {
    /// Granted to a single user.
    User,
    /// Granted to a group.
    Group,
    /// Granted to anyone holding the link.
    Link,
    /// Granted to a user on a federated remote server.
    Remote,
}

impl ShareKind {
    /// The numeric wire code of this kind.
    pub fn code(&self) -> i64 {
        match self {
            Self::User => 0,
            Self::Group => 1,
            Self::Link => 3,
            Self::Remote => 6,
        }
    }

    /// Decode a numeric wire code.
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(Self::User),
            1 => Some(Self::Group),
            3 => Some(Self::Link),
            6 => Some(Self::Remote),
            _ => None,
        }
    }

    /// The kind as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Group => "group",
            Self::Link => "link",
            Self::Remote => "remote",
        }
    }
}

impl fmt::Display for ShareKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
