//! Convenience result type alias for ShareKit.

use crate::error::ShareError;

/// A specialized `Result` type for ShareKit operations.
///
/// This is defined as a convenience so that every crate does not need to
/// write `Result<T, ShareError>` explicitly.
pub type ShareResult<T> = Result<T, ShareError>;
