//! Integration tests for link-share mutations.

mod support;

use chrono::NaiveDate;
use serde_json::{Value, json};
use sharekit_core::ShareError;
use sharekit_core::error::ErrorKind;
use sharekit_core::events::ShareEvent;
use sharekit_entity::ShareKind;

#[tokio::test]
async fn test_set_password_sets_and_clears_flag() {
    let transport = support::MockTransport::new();
    let manager = support::manager(transport.clone());
    let link = support::link_share(&manager, &transport).await;
    assert!(!link.is_password_set().await);

    transport.push_ok(Value::Null);
    link.set_password("hunter2").await.unwrap();
    assert!(link.is_password_set().await);

    transport.push_ok(Value::Null);
    link.set_password("").await.unwrap();
    assert!(!link.is_password_set().await);
}

#[tokio::test]
async fn test_set_expire_date_formats_wire_date() {
    let transport = support::MockTransport::new();
    let manager = support::manager(transport.clone());
    let link = support::link_share(&manager, &transport).await;

    let date = NaiveDate::from_ymd_opt(2026, 9, 1).unwrap();
    transport.push_ok(Value::Null);
    link.set_expire_date(Some(date)).await.unwrap();
    assert_eq!(link.expire_date().await, Some(date));

    let sent = transport.requests();
    let update = sent.last().unwrap();
    assert_eq!(update.endpoint, "shares/9");
    assert_eq!(update.params.get("expire_date"), Some(&json!("2026-09-01")));
}

#[tokio::test]
async fn test_clear_expire_date_sends_empty_value() {
    let transport = support::MockTransport::new();
    let manager = support::manager(transport.clone());
    let link = support::link_share(&manager, &transport).await;

    transport.push_ok(Value::Null);
    link.set_expire_date(Some(NaiveDate::from_ymd_opt(2026, 9, 1).unwrap()))
        .await
        .unwrap();
    transport.push_ok(Value::Null);
    link.set_expire_date(None).await.unwrap();

    assert_eq!(link.expire_date().await, None);
    let sent = transport.requests();
    assert_eq!(sent.last().unwrap().params.get("expire_date"), Some(&json!("")));
}

#[tokio::test]
async fn test_set_public_upload_toggles_and_publishes() {
    let transport = support::MockTransport::new();
    let manager = support::manager(transport.clone());
    let link = support::link_share(&manager, &transport).await;
    let mut events = manager.subscribe();

    transport.push_ok(Value::Null);
    link.set_public_upload(true).await.unwrap();
    assert!(link.public_upload().await);

    let envelope = events.try_recv().unwrap();
    assert!(matches!(
        envelope.event,
        ShareEvent::PublicUploadSet { enabled: true, .. }
    ));
}

#[tokio::test]
async fn test_failed_mutation_leaves_link_state_unchanged() {
    let transport = support::MockTransport::new();
    let manager = support::manager(transport.clone());
    let link = support::link_share(&manager, &transport).await;

    transport.push_err(ShareError::server(400, "expiration too far out"));
    let err = link
        .set_expire_date(Some(NaiveDate::from_ymd_opt(2199, 1, 1).unwrap()))
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::Server);
    assert_eq!(link.expire_date().await, None);
    assert!(!link.is_password_set().await);
}

#[tokio::test]
async fn test_link_share_has_no_target_identity() {
    let transport = support::MockTransport::new();
    let manager = support::manager(transport.clone());
    let link = support::link_share(&manager, &transport).await;

    assert_eq!(link.share().kind(), ShareKind::Link);
    assert!(link.share().share_with().is_none());
}
