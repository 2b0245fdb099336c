//! # sharekit-client
//!
//! Live share entities and the orchestrating [`ShareManager`].
//!
//! The manager is the sole constructor of [`Share`] and [`LinkShare`]
//! instances and the only interaction point with the remote sharing
//! API for creation and listing; entity-level mutations dispatch their
//! own requests. Every operation is an `async fn` resolving to exactly
//! one success or error outcome, and successful completions are also
//! published on the manager's event bus for passive listeners.
//!
//! ```no_run
//! # async fn demo() -> sharekit_core::ShareResult<()> {
//! use std::sync::Arc;
//!
//! use sharekit_client::ShareManager;
//! use sharekit_core::Account;
//!
//! let account = Arc::new(Account::new(
//!     "https://files.example.com",
//!     Some("token".to_string()),
//! ));
//! let manager = ShareManager::new(account)?;
//!
//! let link = manager.create_link_share("/reports/q3.pdf", "").await?;
//! println!("share it: {}", link.url());
//! # Ok(())
//! # }
//! ```

pub mod link_share;
pub mod manager;
pub mod share;
pub mod transport;

pub use link_share::LinkShare;
pub use manager::{ShareItem, ShareManager};
pub use share::Share;
pub use transport::HttpTransport;
