//! Share domain models.

pub mod kind;
pub mod permissions;
pub mod record;
pub mod target;

pub use kind::ShareKind;
pub use permissions::SharePermissions;
pub use record::ShareRecord;
pub use target::ShareTarget;
