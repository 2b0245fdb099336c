//! Trait seams implemented outside the core crate.

pub mod transport;

pub use transport::{ApiMethod, ApiRequest, ShareTransport};
