//! Integration tests for network failures and the session lifecycle.

#![allow(clippy::unwrap_used)]

use chrono::TimeDelta;
use order_desk_client::{AuthError, Compatibility, OrderDesk, SubmitError};
use order_desk_core::Notification;
use order_desk_integration_tests::MockApi;

async fn logged_in_desk(api: &MockApi, compatibility: Compatibility) -> OrderDesk {
    let mut desk = api.desk(compatibility);
    desk.set_email("a@b.com");
    desk.set_password("x");
    desk.login().await.unwrap();
    desk
}

// =============================================================================
// Transport Failures
// =============================================================================

#[tokio::test]
async fn test_login_transport_failure_is_silent_by_default() {
    let mut api = MockApi::start().await.unwrap();
    let mut desk = api.desk(Compatibility::default());
    api.shutdown().await;
    desk.set_email("a@b.com");

    let result = desk.login().await;

    assert!(matches!(result, Err(AuthError::Transport(_))));
    assert!(!desk.is_authenticated());
    assert!(desk.notification_log().is_empty());
}

#[tokio::test]
async fn test_login_transport_failure_surfaced_when_enabled() {
    let mut api = MockApi::start().await.unwrap();
    let mut desk = api.desk(Compatibility::corrected());
    api.shutdown().await;

    let _ = desk.login().await;

    let notification = desk.notification_log().last().unwrap();
    assert_eq!(notification.title, Notification::LOGIN_FAILED);
    assert!(notification.description.is_some());
}

#[tokio::test]
async fn test_submit_transport_failure_preserves_state() {
    let mut api = MockApi::start().await.unwrap();
    let mut desk = logged_in_desk(&api, Compatibility::default()).await;
    desk.set_customer_name("Ada");
    desk.set_product_name("Widget");
    desk.set_quantity(3);
    desk.add_item();
    api.shutdown().await;

    let result = desk.submit_order().await;

    assert!(matches!(result, Err(SubmitError::Transport(_))));
    assert!(desk.is_authenticated());
    assert!(desk.orders().is_empty());
    assert_eq!(desk.pending_items().len(), 1);
    assert_eq!(desk.customer().customer_name, "Ada");
    // Only the login notification.
    assert_eq!(desk.notification_log().len(), 1);
}

#[tokio::test]
async fn test_submit_transport_failure_surfaced_when_enabled() {
    let mut api = MockApi::start().await.unwrap();
    let mut desk = logged_in_desk(&api, Compatibility::corrected()).await;
    api.shutdown().await;

    let _ = desk.submit_order().await;

    let notification = desk.notification_log().last().unwrap();
    assert_eq!(notification.title, Notification::ORDER_CREATION_FAILED);
}

// =============================================================================
// Session Lifecycle
// =============================================================================

#[tokio::test]
async fn test_session_is_one_way_by_default() {
    let api = MockApi::start().await.unwrap();
    let mut desk = logged_in_desk(&api, Compatibility::default()).await;

    assert!(matches!(desk.logout(), Err(AuthError::LogoutDisabled)));
    assert!(desk.is_authenticated());
}

#[tokio::test]
async fn test_logout_returns_to_login_view() {
    let api = MockApi::start().await.unwrap();
    let mut desk = logged_in_desk(&api, Compatibility::corrected()).await;
    desk.submit_order().await.unwrap();

    desk.logout().unwrap();

    assert!(!desk.is_authenticated());
    assert!(desk.orders().is_empty());
    assert_eq!(desk.email(), "");

    // A new login starts a fresh session.
    desk.login().await.unwrap();
    assert!(desk.is_authenticated());
    assert_eq!(api.requests_to("/login").len(), 2);
}

// =============================================================================
// Notifications
// =============================================================================

#[tokio::test]
async fn test_notifications_expire() {
    let api = MockApi::start().await.unwrap();
    let mut desk = logged_in_desk(&api, Compatibility::default()).await;
    let raised_at = desk.notification_log().first().unwrap().raised_at;

    assert_eq!(desk.notifications(raised_at).count(), 1);

    let later = raised_at + TimeDelta::milliseconds(3001);
    assert_eq!(desk.notifications(later).count(), 0);
    assert_eq!(desk.prune_notifications(later), 1);
    assert!(desk.notification_log().is_empty());
}

#[tokio::test]
async fn test_notification_can_be_closed() {
    let api = MockApi::start().await.unwrap();
    let mut desk = logged_in_desk(&api, Compatibility::default()).await;
    let id = desk.notification_log().first().unwrap().id;

    assert!(desk.dismiss_notification(id));
    assert!(desk.notification_log().is_empty());
}
