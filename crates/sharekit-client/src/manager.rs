//! Share creation, listing, and response parsing.

use std::sync::Arc;

use tokio::sync::broadcast;
use tracing::info;

use sharekit_core::account::Account;
use sharekit_core::config::ClientConfig;
use sharekit_core::events::{EventBus, EventEnvelope, ShareEvent};
use sharekit_core::traits::{ApiRequest, ShareTransport};
use sharekit_core::{ShareError, ShareResult};
use sharekit_entity::{ShareKind, SharePermissions, ShareRecord, ShareTarget};

use crate::link_share::LinkShare;
use crate::share::Share;
use crate::transport::HttpTransport;

/// One fetched share, sub-typed by its record's share-type code.
#[derive(Debug, Clone)]
pub enum ShareItem {
    /// A user, group, or remote share.
    Share(Arc<Share>),
    /// A public link share.
    Link(Arc<LinkShare>),
}

impl ShareItem {
    /// The kind of the underlying share.
    pub fn kind(&self) -> ShareKind {
        match self {
            Self::Share(share) => share.kind(),
            Self::Link(_) => ShareKind::Link,
        }
    }

    /// The server-assigned share ID.
    pub fn id(&self) -> &str {
        match self {
            Self::Share(share) => share.id(),
            Self::Link(link) => link.id(),
        }
    }

    /// The underlying base share, if this is not a link.
    pub fn as_share(&self) -> Option<&Arc<Share>> {
        match self {
            Self::Share(share) => Some(share),
            Self::Link(_) => None,
        }
    }

    /// The underlying link share, if this is one.
    pub fn as_link(&self) -> Option<&Arc<LinkShare>> {
        match self {
            Self::Share(_) => None,
            Self::Link(link) => Some(link),
        }
    }
}

/// Creates, lists, and parses shares.
///
/// The manager abstracts away from the sharing API: it is the only
/// component that constructs [`Share`] and [`LinkShare`] instances, and
/// all share creation and listing goes through it. Each operation
/// dispatches one asynchronous request whose parameters live in the
/// dispatching call frame, so concurrent operations never share
/// correlation state; no ordering holds between independently
/// dispatched requests.
#[derive(Debug, Clone)]
pub struct ShareManager {
    account: Arc<Account>,
    transport: Arc<dyn ShareTransport>,
    events: EventBus,
}

impl ShareManager {
    /// Create a manager over the default HTTP transport.
    pub fn new(account: Arc<Account>) -> ShareResult<Self> {
        let transport = Arc::new(HttpTransport::new()?);
        Ok(Self::with_transport(account, transport))
    }

    /// Create a manager over a caller-supplied transport.
    pub fn with_transport(account: Arc<Account>, transport: Arc<dyn ShareTransport>) -> Self {
        Self {
            account,
            transport,
            events: EventBus::default(),
        }
    }

    /// Build the account, transport, and event bus from configuration.
    pub fn from_config(config: &ClientConfig) -> ShareResult<Self> {
        let account = Arc::new(Account::from_config(config));
        let transport = Arc::new(HttpTransport::from_config(&config.http)?);
        Ok(Self {
            account,
            transport,
            events: EventBus::new(config.events.channel_buffer_size),
        })
    }

    /// The account this manager operates on.
    pub fn account(&self) -> &Arc<Account> {
        &self.account
    }

    /// Subscribe to completion events from this manager and from every
    /// entity it creates.
    pub fn subscribe(&self) -> broadcast::Receiver<EventEnvelope> {
        self.events.subscribe()
    }

    /// Create a public link share on `path`.
    ///
    /// The password is included when non-empty. Older servers reject a
    /// passwordless link share with a plain 403; that signature is
    /// resurfaced as a `PasswordRequired` error (and the matching
    /// event) so the caller can prompt for a password and retry instead
    /// of dead-ending on a generic failure. A 403 on a create that
    /// carried a password stays a generic server error.
    pub async fn create_link_share(
        &self,
        path: &str,
        password: &str,
    ) -> ShareResult<Arc<LinkShare>> {
        let mut request = ApiRequest::post("shares")
            .param("path", path)
            .param("share_type", ShareKind::Link.code());
        if !password.is_empty() {
            request = request.param("password", password);
        }

        let data = match self.transport.dispatch(&self.account, request).await {
            Ok(data) => data,
            Err(err) if password.is_empty() && err.code == Some(403) => {
                self.events.publish(ShareEvent::LinkPasswordRequired {
                    path: path.to_string(),
                });
                return Err(ShareError::password_required(
                    "the server requires a password for link shares",
                ));
            }
            Err(err) => return Err(err),
        };

        let record = ShareRecord::from_value(&data)?;
        let link = self.parse_link_share(&record)?;
        self.events.publish(ShareEvent::LinkCreated {
            id: link.id().to_string(),
            path: path.to_string(),
            url: link.url().to_string(),
        });
        info!(share_id = %link.id(), path = %path, "Link share created");
        Ok(link)
    }

    /// Create a user, group, or remote share on `path`.
    ///
    /// `kind` must not be [`ShareKind::Link`]; link shares go through
    /// [`create_link_share`](Self::create_link_share). A
    /// [`SharePermissions::DEFAULT`] argument omits the permissions
    /// parameter so the server applies its default set.
    pub async fn create_share(
        &self,
        path: &str,
        kind: ShareKind,
        share_with: &str,
        permissions: SharePermissions,
    ) -> ShareResult<Arc<Share>> {
        if kind == ShareKind::Link {
            return Err(ShareError::validation(
                "link shares are created with create_link_share",
            ));
        }
        if !permissions.is_default() && !permissions.is_valid_grant() {
            return Err(ShareError::validation(format!(
                "invalid permission set: {permissions:?}"
            )));
        }

        let mut request = ApiRequest::post("shares")
            .param("path", path)
            .param("share_type", kind.code())
            .param("share_with", share_with);
        if !permissions.is_default() {
            request = request.param("permissions", permissions.bits());
        }

        let data = self.transport.dispatch(&self.account, request).await?;
        let record = ShareRecord::from_value(&data)?;
        let share = self.parse_share(&record)?;
        self.events.publish(ShareEvent::Created {
            id: share.id().to_string(),
            path: path.to_string(),
            kind: kind.as_str().to_string(),
        });
        info!(share_id = %share.id(), path = %path, kind = %kind, "Share created");
        Ok(share)
    }

    /// Fetch every share on `path`, preserving server order.
    ///
    /// An empty result is success with an empty sequence.
    pub async fn fetch_shares(&self, path: &str) -> ShareResult<Vec<ShareItem>> {
        let request = ApiRequest::get("shares").param("path", path);
        let data = self.transport.dispatch(&self.account, request).await?;

        let records = data
            .as_array()
            .ok_or_else(|| ShareError::malformed("share list payload is not an array"))?;

        let mut items = Vec::with_capacity(records.len());
        for value in records {
            let record = ShareRecord::from_value(value)?;
            let item = if record.share_type == ShareKind::Link.code() {
                ShareItem::Link(self.parse_link_share(&record)?)
            } else {
                ShareItem::Share(self.parse_share(&record)?)
            };
            items.push(item);
        }

        self.events.publish(ShareEvent::Fetched {
            path: path.to_string(),
            count: items.len(),
        });
        info!(path = %path, count = items.len(), "Shares fetched");
        Ok(items)
    }

    /// Build a [`Share`] from a decoded record.
    fn parse_share(&self, record: &ShareRecord) -> ShareResult<Arc<Share>> {
        let kind = ShareKind::from_code(record.share_type).ok_or_else(|| {
            ShareError::malformed(format!("unknown share type code: {}", record.share_type))
        })?;
        let permissions = SharePermissions::from_server_bits(record.permissions)?;
        let share_with = record.share_with.as_ref().map(|identifier| {
            Arc::new(ShareTarget::new(
                identifier.clone(),
                record.share_with_name.clone(),
            ))
        });

        Ok(Arc::new(Share::new(
            self.account.clone(),
            self.transport.clone(),
            self.events.clone(),
            record.id.clone(),
            record.path.clone(),
            kind,
            permissions,
            share_with,
        )))
    }

    /// Build a [`LinkShare`] from a decoded record.
    fn parse_link_share(&self, record: &ShareRecord) -> ShareResult<Arc<LinkShare>> {
        if record.share_type != ShareKind::Link.code() {
            return Err(ShareError::malformed(format!(
                "expected a link share record, got share type code {}",
                record.share_type
            )));
        }
        let permissions = SharePermissions::from_server_bits(record.permissions)?;
        let url = record
            .url
            .clone()
            .ok_or_else(|| ShareError::malformed("link share record has no url"))?;
        let expire_date = record.expire_date()?;

        // Link shares have no target identity.
        let share = Share::new(
            self.account.clone(),
            self.transport.clone(),
            self.events.clone(),
            record.id.clone(),
            record.path.clone(),
            ShareKind::Link,
            permissions,
            None,
        );

        Ok(Arc::new(LinkShare::new(
            share,
            url,
            record.is_password_protected(),
            expire_date,
            record.allows_public_upload(),
        )))
    }
}
