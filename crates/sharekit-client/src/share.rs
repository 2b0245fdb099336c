//! The base share entity.

use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::info;

use sharekit_core::account::Account;
use sharekit_core::events::{EventBus, ShareEvent};
use sharekit_core::traits::{ApiRequest, ShareTransport};
use sharekit_core::{ShareError, ShareResult};
use sharekit_entity::{ShareKind, SharePermissions, ShareTarget};

/// One access grant on a remote resource.
///
/// Instances are created only by [`ShareManager`](crate::ShareManager)
/// from parsed server responses and are shared by reference among
/// their holders; a confirmed mutation is visible through every holder,
/// and no holder may assume exclusive mutation rights. Fields hold the
/// last server-confirmed state: a mutation updates them only after the
/// server acknowledges it, and a failed request leaves them untouched.
#[derive(Debug)]
pub struct Share {
    account: Arc<Account>,
    transport: Arc<dyn ShareTransport>,
    events: EventBus,
    id: String,
    path: String,
    kind: ShareKind,
    share_with: Option<Arc<ShareTarget>>,
    permissions: RwLock<SharePermissions>,
}

impl Share {
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new(
        account: Arc<Account>,
        transport: Arc<dyn ShareTransport>,
        events: EventBus,
        id: String,
        path: String,
        kind: ShareKind,
        permissions: SharePermissions,
        share_with: Option<Arc<ShareTarget>>,
    ) -> Self {
        Self {
            account,
            transport,
            events,
            id,
            path,
            kind,
            share_with,
            permissions: RwLock::new(permissions),
        }
    }

    /// The account the share is defined on.
    pub fn account(&self) -> &Arc<Account> {
        &self.account
    }

    /// The server-assigned share ID.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The shared resource path.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// The kind of grant.
    pub fn kind(&self) -> ShareKind {
        self.kind
    }

    /// The target identity; always `None` for link shares.
    pub fn share_with(&self) -> Option<&Arc<ShareTarget>> {
        self.share_with.as_ref()
    }

    /// The last server-confirmed permission set.
    pub async fn permissions(&self) -> SharePermissions {
        *self.permissions.read().await
    }

    /// Update the permission set of this share.
    ///
    /// Dispatches one update request scoped to this share's ID. On
    /// success the confirmed value is stored and a `PermissionsSet`
    /// event is published; on failure the in-memory value is unchanged.
    pub async fn set_permissions(&self, permissions: SharePermissions) -> ShareResult<()> {
        if !permissions.is_valid_grant() {
            return Err(ShareError::validation(format!(
                "invalid permission set: {permissions:?}"
            )));
        }

        let request = ApiRequest::put(format!("shares/{}", self.id))
            .param("permissions", permissions.bits());
        self.transport.dispatch(&self.account, request).await?;

        *self.permissions.write().await = permissions;
        self.events.publish(ShareEvent::PermissionsSet {
            id: self.id.clone(),
            permissions: permissions.bits(),
        });
        info!(share_id = %self.id, permissions = permissions.bits(), "Share permissions updated");
        Ok(())
    }

    /// Revoke this grant on the server.
    ///
    /// The local instance is otherwise unchanged; holders drop their
    /// references once the `Deleted` event fires.
    pub async fn delete(&self) -> ShareResult<()> {
        let request = ApiRequest::delete(format!("shares/{}", self.id));
        self.transport.dispatch(&self.account, request).await?;

        self.events.publish(ShareEvent::Deleted {
            id: self.id.clone(),
        });
        info!(share_id = %self.id, "Share deleted");
        Ok(())
    }

    pub(crate) fn transport(&self) -> &Arc<dyn ShareTransport> {
        &self.transport
    }

    pub(crate) fn events(&self) -> &EventBus {
        &self.events
    }
}
