//! Decoded share records returned by the server.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer};

use sharekit_core::{ShareError, ShareResult};

/// One share record as decoded from a response payload.
///
/// Only `id`, `path`, `share_type`, and `permissions` are mandatory.
/// Link-specific fields default to "not password protected" / "no
/// expiration" when absent, so records from servers that omit them
/// still decode.
#[derive(Debug, Clone, Deserialize)]
pub struct ShareRecord {
    /// Server-assigned share ID.
    #[serde(deserialize_with = "id_from_string_or_number")]
    pub id: String,
    /// The shared resource path.
    pub path: String,
    /// Numeric share kind code.
    pub share_type: i64,
    /// Permission bits.
    pub permissions: i64,
    /// Target identifier, for user/group/remote shares.
    #[serde(default)]
    pub share_with: Option<String>,
    /// Target display name.
    #[serde(default)]
    pub share_with_name: Option<String>,
    /// Public access URL, for link shares.
    #[serde(default)]
    pub url: Option<String>,
    /// Whether a password guards the link.
    #[serde(default)]
    pub password_protected: Option<bool>,
    /// Expiration date string, for link shares.
    #[serde(default)]
    pub expiration: Option<String>,
    /// Whether uploads through the link are allowed.
    #[serde(default)]
    pub public_upload: Option<bool>,
}

impl ShareRecord {
    /// Decode one record from a response payload value.
    pub fn from_value(value: &serde_json::Value) -> ShareResult<Self> {
        let record: Self = serde_json::from_value(value.clone())
            .map_err(|e| ShareError::malformed(format!("invalid share record: {e}")))?;
        if record.id.is_empty() {
            return Err(ShareError::malformed("share record has an empty id"));
        }
        Ok(record)
    }

    /// Parse the expiration field into a date.
    ///
    /// The server formats expirations as `YYYY-MM-DD`, sometimes with a
    /// trailing time component; an absent or empty field means the
    /// share never expires.
    pub fn expire_date(&self) -> ShareResult<Option<NaiveDate>> {
        let Some(raw) = self.expiration.as_deref().filter(|raw| !raw.is_empty()) else {
            return Ok(None);
        };
        let date_part = raw.get(..10).unwrap_or(raw);
        NaiveDate::parse_from_str(date_part, "%Y-%m-%d")
            .map(Some)
            .map_err(|_| ShareError::malformed(format!("invalid expiration date: '{raw}'")))
    }

    /// Whether a password guards the link; absent means unprotected.
    pub fn is_password_protected(&self) -> bool {
        self.password_protected.unwrap_or(false)
    }

    /// Whether uploads through the link are allowed; absent means no.
    pub fn allows_public_upload(&self) -> bool {
        self.public_upload.unwrap_or(false)
    }
}

/// Servers have returned share ids both as JSON numbers and as strings.
fn id_from_string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(i64),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Text(text) => text,
        Raw::Number(number) => number.to_string(),
    })
}
