//! The public link share entity.

use chrono::NaiveDate;
use tokio::sync::RwLock;
use tracing::info;

use sharekit_core::ShareResult;
use sharekit_core::events::ShareEvent;
use sharekit_core::traits::ApiRequest;

use crate::share::Share;

/// Link-specific state confirmed by the server.
#[derive(Debug, Clone)]
struct LinkState {
    password_protected: bool,
    expire_date: Option<NaiveDate>,
    public_upload: bool,
}

/// A share whose target is anyone holding the link.
///
/// Wraps the common [`Share`] core and adds the link-only fields and
/// operations. The share kind is always [`ShareKind::Link`] and there
/// is no target identity. Mutations follow the same confirm-then-update
/// contract as the base entity.
///
/// [`ShareKind::Link`]: sharekit_entity::ShareKind::Link
#[derive(Debug)]
pub struct LinkShare {
    share: Share,
    url: String,
    state: RwLock<LinkState>,
}

impl LinkShare {
    pub(crate) fn new(
        share: Share,
        url: String,
        password_protected: bool,
        expire_date: Option<NaiveDate>,
        public_upload: bool,
    ) -> Self {
        Self {
            share,
            url,
            state: RwLock::new(LinkState {
                password_protected,
                expire_date,
                public_upload,
            }),
        }
    }

    /// The common share core.
    pub fn share(&self) -> &Share {
        &self.share
    }

    /// The server-assigned share ID.
    pub fn id(&self) -> &str {
        self.share.id()
    }

    /// The public access URL.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Whether a password currently guards the link.
    pub async fn is_password_set(&self) -> bool {
        self.state.read().await.password_protected
    }

    /// The expiration date; `None` means the link never expires.
    pub async fn expire_date(&self) -> Option<NaiveDate> {
        self.state.read().await.expire_date
    }

    /// Whether uploads through the link are allowed.
    pub async fn public_upload(&self) -> bool {
        self.state.read().await.public_upload
    }

    /// Toggle whether uploads through the link are allowed.
    ///
    /// Only meaningful for folder shares; the server validates the
    /// resource type.
    pub async fn set_public_upload(&self, enabled: bool) -> ShareResult<()> {
        let request = ApiRequest::put(format!("shares/{}", self.share.id()))
            .param("public_upload", enabled);
        self.share
            .transport()
            .dispatch(self.share.account(), request)
            .await?;

        self.state.write().await.public_upload = enabled;
        self.share.events().publish(ShareEvent::PublicUploadSet {
            id: self.share.id().to_string(),
            enabled,
        });
        info!(share_id = %self.share.id(), enabled, "Link share public upload updated");
        Ok(())
    }

    /// Set or clear (empty string) the link's password.
    pub async fn set_password(&self, password: &str) -> ShareResult<()> {
        let request = ApiRequest::put(format!("shares/{}", self.share.id()))
            .param("password", password);
        self.share
            .transport()
            .dispatch(self.share.account(), request)
            .await?;

        let protected = !password.is_empty();
        self.state.write().await.password_protected = protected;
        self.share.events().publish(ShareEvent::PasswordSet {
            id: self.share.id().to_string(),
            protected,
        });
        info!(share_id = %self.share.id(), protected, "Link share password updated");
        Ok(())
    }

    /// Set or clear the expiration date.
    pub async fn set_expire_date(&self, date: Option<NaiveDate>) -> ShareResult<()> {
        let wire = date
            .map(|date| date.format("%Y-%m-%d").to_string())
            .unwrap_or_default();
        let request = ApiRequest::put(format!("shares/{}", self.share.id()))
            .param("expire_date", wire);
        self.share
            .transport()
            .dispatch(self.share.account(), request)
            .await?;

        self.state.write().await.expire_date = date;
        self.share.events().publish(ShareEvent::ExpireDateSet {
            id: self.share.id().to_string(),
            expire_date: date,
        });
        info!(share_id = %self.share.id(), expire_date = ?date, "Link share expiration updated");
        Ok(())
    }
}
