//! Share permission bit-set.

use bitflags::bitflags;

use sharekit_core::{ShareError, ShareResult};

bitflags! {
    /// The rights a grant confers.
    ///
    /// `DEFAULT` is a sentinel distinct from every real bit: it asks
    /// the server to apply its default permission set instead of an
    /// explicit one. A server-confirmed value never contains it.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct SharePermissions: u32 {
        const READ = 1;
        const UPDATE = 2;
        const CREATE = 4;
        const DELETE = 8;
        const SHARE = 16;
        const DEFAULT = 1 << 30;
    }
}

impl SharePermissions {
    /// Every real permission bit (the sentinel excluded).
    pub fn all_rights() -> Self {
        Self::READ | Self::UPDATE | Self::CREATE | Self::DELETE | Self::SHARE
    }

    /// Whether this is the "let the server decide" sentinel.
    pub fn is_default(&self) -> bool {
        self.contains(Self::DEFAULT)
    }

    /// Whether this is a permission set a client may request: at least
    /// one real bit, nothing outside the five real bits.
    pub fn is_valid_grant(&self) -> bool {
        !self.is_empty() && Self::all_rights().contains(*self)
    }

    /// Decode a server-confirmed bit value; bits outside the five real
    /// flags are rejected.
    pub fn from_server_bits(bits: i64) -> ShareResult<Self> {
        u32::try_from(bits)
            .ok()
            .and_then(Self::from_bits)
            .filter(|permissions| Self::all_rights().contains(*permissions))
            .ok_or_else(|| ShareError::malformed(format!("invalid permission bits: {bits}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_grants() {
        assert!(SharePermissions::READ.is_valid_grant());
        assert!(SharePermissions::all_rights().is_valid_grant());
        assert!(
            (SharePermissions::READ | SharePermissions::SHARE).is_valid_grant()
        );
    }

    #[test]
    fn test_sentinel_and_empty_are_not_grants() {
        assert!(!SharePermissions::DEFAULT.is_valid_grant());
        assert!(!SharePermissions::empty().is_valid_grant());
        assert!(
            !(SharePermissions::READ | SharePermissions::DEFAULT).is_valid_grant()
        );
    }

    #[test]
    fn test_server_bits_decoding() {
        assert_eq!(
            SharePermissions::from_server_bits(31).unwrap(),
            SharePermissions::all_rights()
        );
        assert_eq!(
            SharePermissions::from_server_bits(3).unwrap(),
            SharePermissions::READ | SharePermissions::UPDATE
        );
    }

    #[test]
    fn test_unknown_server_bits_rejected() {
        assert!(SharePermissions::from_server_bits(32).is_err());
        assert!(SharePermissions::from_server_bits(1 << 30).is_err());
        assert!(SharePermissions::from_server_bits(-1).is_err());
    }
}
