//! Shared test support: a scripted transport and record builders.
#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::{Value, json};

use sharekit_client::{Share, ShareManager};
use sharekit_core::account::Account;
use sharekit_core::traits::{ApiRequest, ShareTransport};
use sharekit_core::{ShareError, ShareResult};
use sharekit_entity::{ShareKind, SharePermissions};

/// Transport double that replays scripted responses in order and
/// records every dispatched request.
#[derive(Debug, Default)]
pub struct MockTransport {
    responses: Mutex<VecDeque<ShareResult<Value>>>,
    requests: Mutex<Vec<ApiRequest>>,
}

impl MockTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Script the next response as a success payload.
    pub fn push_ok(&self, data: Value) {
        self.responses.lock().unwrap().push_back(Ok(data));
    }

    /// Script the next response as an error.
    pub fn push_err(&self, err: ShareError) {
        self.responses.lock().unwrap().push_back(Err(err));
    }

    /// Every request dispatched so far, in order.
    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl ShareTransport for MockTransport {
    async fn dispatch(&self, _account: &Account, request: ApiRequest) -> ShareResult<Value> {
        self.requests.lock().unwrap().push(request);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(ShareError::transport("no scripted response left")))
    }
}

pub fn account() -> Arc<Account> {
    Arc::new(Account::new(
        "https://files.example.com",
        Some("test-token".to_string()),
    ))
}

pub fn manager(transport: Arc<MockTransport>) -> ShareManager {
    ShareManager::with_transport(account(), transport)
}

/// A user-share record with the given permission bits.
pub fn user_record(id: &str, path: &str, permissions: i64) -> Value {
    json!({
        "id": id,
        "path": path,
        "share_type": ShareKind::User.code(),
        "permissions": permissions,
        "share_with": "alice",
        "share_with_name": "Alice A.",
    })
}

/// A group-share record.
pub fn group_record(id: &str, path: &str, permissions: i64) -> Value {
    json!({
        "id": id,
        "path": path,
        "share_type": ShareKind::Group.code(),
        "permissions": permissions,
        "share_with": "engineering",
    })
}

/// A link-share record without password or expiration.
pub fn link_record(id: &str, path: &str) -> Value {
    json!({
        "id": id,
        "path": path,
        "share_type": ShareKind::Link.code(),
        "permissions": 1,
        "url": format!("https://files.example.com/s/{id}"),
    })
}

/// Create a user share entity through the manager, the only component
/// allowed to construct one.
pub async fn user_share(manager: &ShareManager, transport: &Arc<MockTransport>) -> Arc<Share> {
    transport.push_ok(user_record("7", "/docs", 31));
    manager
        .create_share("/docs", ShareKind::User, "alice", SharePermissions::DEFAULT)
        .await
        .unwrap()
}

/// Create a link share entity through the manager.
pub async fn link_share(
    manager: &ShareManager,
    transport: &Arc<MockTransport>,
) -> Arc<sharekit_client::LinkShare> {
    transport.push_ok(link_record("9", "/docs"));
    manager.create_link_share("/docs", "").await.unwrap()
}
