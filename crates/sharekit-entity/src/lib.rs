//! # sharekit-entity
//!
//! Passive typed models for ShareKit: share kinds, the permission
//! bit-set, share-target identities, and decoded server records.
//! Live entities with behavior are built on top of these in
//! `sharekit-client`.

pub mod share;

pub use share::{ShareKind, SharePermissions, ShareRecord, ShareTarget};
