//! The order desk state container.
//!
//! [`OrderDesk`] owns every piece of state the order-entry view shows: the
//! login form, the session, the order form and pending items, the order
//! history and the notification queue. A view holds `&mut OrderDesk` and
//! drives it only through setters and actions; each action updates state and
//! raises notifications.
//!
//! # Failure surfaces
//!
//! | Failure | Logged | Notification |
//! |---------|--------|--------------|
//! | Login rejected | `warn` | "Login Failed" with the server message |
//! | Order rejected | `warn` | "Order Creation Failed" |
//! | Transport failure | `error` | none, unless silent transport failures are off |

use chrono::{DateTime, Utc};
use order_desk_core::{
    Credentials, CustomerDetails, LineItem, Notification, NotificationId, Order, SessionState,
};
use rust_decimal::Decimal;
use tracing::{error, instrument, warn};

use crate::api::ApiClient;
use crate::builder::{ItemDraft, OrderBuilder};
use crate::config::{ClientConfig, Compatibility, ConfigError};
use crate::error::{AuthError, SubmitError};
use crate::notifications::NotificationQueue;
use crate::session::SessionManager;

/// State container for one order-entry view.
#[derive(Debug)]
pub struct OrderDesk {
    api: ApiClient,
    compatibility: Compatibility,
    login_form: Credentials,
    session: SessionManager,
    builder: OrderBuilder,
    orders: Vec<Order>,
    notifications: NotificationQueue,
}

impl OrderDesk {
    /// Create an anonymous desk from configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the API endpoints cannot be resolved.
    pub fn new(config: &ClientConfig) -> Result<Self, ConfigError> {
        let api = ApiClient::new(config.api_url.clone())?;

        Ok(Self {
            api,
            compatibility: config.compatibility,
            login_form: Credentials::new("", ""),
            session: SessionManager::new(),
            builder: OrderBuilder::new(),
            orders: Vec::new(),
            notifications: NotificationQueue::new(config.notification_duration),
        })
    }

    // =========================================================================
    // Login form
    // =========================================================================

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.login_form.email = email.into();
    }

    pub fn set_password(&mut self, password: impl Into<String>) {
        self.login_form = Credentials::new(std::mem::take(&mut self.login_form.email), password);
    }

    #[must_use]
    pub fn email(&self) -> &str {
        &self.login_form.email
    }

    /// Log in with the current login form.
    ///
    /// On success the password is discarded, the token captured and a
    /// "Login Successful" notification raised. A rejection raises "Login
    /// Failed" with the server's message. A transport failure is logged and,
    /// with silent transport failures on, raises nothing.
    ///
    /// # Errors
    ///
    /// Returns the [`AuthError`] of the failed attempt.
    #[instrument(skip(self), fields(email = %self.login_form.email))]
    pub async fn login(&mut self) -> Result<(), AuthError> {
        match self.session.login(&self.api, &self.login_form).await {
            Ok(_) => {
                self.set_password("");
                self.notifications
                    .push(Notification::success(Notification::LOGIN_SUCCESSFUL));
                Ok(())
            }
            Err(err) if err.is_transport() => {
                error!(error = %err, "Login error");
                self.notify_transport_failure(Notification::LOGIN_FAILED, &err);
                Err(err)
            }
            Err(AuthError::Rejected { status, message }) => {
                warn!(%status, ?message, "Login rejected");
                self.notifications
                    .push(Notification::error(Notification::LOGIN_FAILED, message.clone()));
                Err(AuthError::Rejected { status, message })
            }
            Err(err) => {
                warn!(error = %err, "Login refused");
                Err(err)
            }
        }
    }

    /// End the session, returning the desk to its freshly started state.
    ///
    /// The login form, order form, pending items and order history are all
    /// discarded; notifications are kept.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::LogoutDisabled` while one-way sessions are on.
    pub fn logout(&mut self) -> Result<(), AuthError> {
        if self.compatibility.one_way_session {
            warn!("Logout requested but sessions are one-way");
            return Err(AuthError::LogoutDisabled);
        }

        self.session.reset();
        self.login_form = Credentials::new("", "");
        self.builder = OrderBuilder::new();
        self.orders.clear();
        Ok(())
    }

    // =========================================================================
    // Order form
    // =========================================================================

    pub fn set_customer_name(&mut self, name: impl Into<String>) {
        self.builder.set_customer_name(name);
    }

    pub fn set_customer_email(&mut self, email: impl Into<String>) {
        self.builder.set_customer_email(email);
    }

    pub fn set_product_name(&mut self, name: impl Into<String>) {
        self.builder.set_product_name(name);
    }

    pub const fn set_quantity(&mut self, quantity: i64) {
        self.builder.set_quantity(quantity);
    }

    pub const fn set_price(&mut self, price: Decimal) {
        self.builder.set_price(price);
    }

    pub fn set_quantity_input(&mut self, input: &str) {
        self.builder.set_quantity_input(input);
    }

    pub fn set_price_input(&mut self, input: &str) {
        self.builder.set_price_input(input);
    }

    /// Add the drafted item to the pending buffer and reset the draft.
    pub fn add_item(&mut self) -> LineItem {
        self.builder.add_item()
    }

    /// Submit the order form and pending items.
    ///
    /// On success the order is appended to the history, the customer fields
    /// and pending buffer are cleared and "Order Created" is raised. A
    /// rejection raises "Order Creation Failed" and keeps every field. A
    /// transport failure is logged and keeps every field.
    ///
    /// # Errors
    ///
    /// Returns `SubmitError::NotAuthenticated` without sending anything while
    /// anonymous, otherwise the [`SubmitError`] of the failed attempt.
    #[instrument(skip(self), fields(items = self.builder.pending_items().len()))]
    pub async fn submit_order(&mut self) -> Result<Order, SubmitError> {
        let Some(session) = self.session.session().cloned() else {
            warn!("Order submission attempted without a session");
            return Err(SubmitError::NotAuthenticated);
        };

        match self.builder.submit(&self.api, &session).await {
            Ok(order) => {
                self.orders.push(order.clone());
                self.notifications
                    .push(Notification::success(Notification::ORDER_CREATED));
                Ok(order)
            }
            Err(err) if err.is_transport() => {
                error!(error = %err, "Create order error");
                self.notify_transport_failure(Notification::ORDER_CREATION_FAILED, &err);
                Err(err)
            }
            Err(err) => {
                if let SubmitError::Rejected { status } = &err {
                    warn!(%status, "Order rejected");
                    self.notifications
                        .push(Notification::error(Notification::ORDER_CREATION_FAILED, None));
                }
                Err(err)
            }
        }
    }

    // =========================================================================
    // Notifications
    // =========================================================================

    /// Notifications still visible at `now`.
    pub fn notifications(&self, now: DateTime<Utc>) -> impl Iterator<Item = &Notification> {
        self.notifications.active(now)
    }

    /// Every notification held, including expired ones.
    #[must_use]
    pub fn notification_log(&self) -> &[Notification] {
        self.notifications.all()
    }

    pub fn dismiss_notification(&mut self, id: NotificationId) -> bool {
        self.notifications.dismiss(id)
    }

    pub fn prune_notifications(&mut self, now: DateTime<Utc>) -> usize {
        self.notifications.prune(now)
    }

    fn notify_transport_failure(&mut self, title: &str, err: &dyn std::error::Error) {
        if self.compatibility.silent_transport_failures {
            return;
        }
        self.notifications
            .push(Notification::error(title, Some(err.to_string())));
    }

    // =========================================================================
    // Read accessors
    // =========================================================================

    #[must_use]
    pub const fn session(&self) -> &SessionState {
        self.session.state()
    }

    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    #[must_use]
    pub const fn customer(&self) -> &CustomerDetails {
        self.builder.customer()
    }

    #[must_use]
    pub const fn item_draft(&self) -> &ItemDraft {
        self.builder.draft()
    }

    #[must_use]
    pub fn pending_items(&self) -> &[LineItem] {
        self.builder.pending_items()
    }

    /// Orders accepted by the server during this session, oldest first.
    #[must_use]
    pub fn orders(&self) -> &[Order] {
        &self.orders
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::str::FromStr;

    use url::Url;

    use super::*;

    /// A desk pointed at a port nothing listens on.
    fn unreachable_desk(compatibility: Compatibility) -> OrderDesk {
        let mut config = ClientConfig::new(Url::parse("http://127.0.0.1:9").unwrap());
        config.compatibility = compatibility;
        OrderDesk::new(&config).unwrap()
    }

    #[test]
    fn test_add_item_resets_draft() {
        let mut desk = unreachable_desk(Compatibility::default());
        desk.set_product_name("Widget");
        desk.set_quantity(3);
        desk.set_price(Decimal::from_str("9.99").unwrap());

        desk.add_item();

        assert_eq!(
            desk.pending_items(),
            &[LineItem::new("Widget", 3, Decimal::from_str("9.99").unwrap())]
        );
        assert_eq!(desk.item_draft(), &ItemDraft::default());
    }

    #[tokio::test]
    async fn test_submit_requires_session() {
        let mut desk = unreachable_desk(Compatibility::default());
        desk.set_customer_name("Ada");
        desk.add_item();

        let result = desk.submit_order().await;

        assert!(matches!(result, Err(SubmitError::NotAuthenticated)));
        assert_eq!(desk.pending_items().len(), 1);
        assert_eq!(desk.customer().customer_name, "Ada");
        assert!(desk.orders().is_empty());
    }

    #[tokio::test]
    async fn test_silent_transport_failure() {
        let mut desk = unreachable_desk(Compatibility::default());
        desk.set_email("a@b.com");
        desk.set_password("x");

        let result = desk.login().await;

        assert!(matches!(result, Err(AuthError::Transport(_))));
        assert!(!desk.is_authenticated());
        assert!(desk.notification_log().is_empty());
        assert_eq!(desk.email(), "a@b.com");
    }

    #[tokio::test]
    async fn test_surfaced_transport_failure() {
        let mut desk = unreachable_desk(Compatibility::corrected());
        desk.set_email("a@b.com");

        let result = desk.login().await;

        assert!(result.is_err());
        let latest = desk.notification_log().last().unwrap();
        assert_eq!(latest.title, Notification::LOGIN_FAILED);
        assert!(latest.description.is_some());
    }

    #[test]
    fn test_logout_disabled_by_default() {
        let mut desk = unreachable_desk(Compatibility::default());
        assert!(matches!(desk.logout(), Err(AuthError::LogoutDisabled)));
    }

    #[test]
    fn test_logout_resets_forms() {
        let mut desk = unreachable_desk(Compatibility::corrected());
        desk.set_email("a@b.com");
        desk.set_customer_name("Ada");
        desk.add_item();

        desk.logout().unwrap();

        assert_eq!(desk.email(), "");
        assert!(desk.customer().is_empty());
        assert!(desk.pending_items().is_empty());
        assert!(!desk.is_authenticated());
    }

    #[test]
    fn test_dismiss_notification() {
        let mut desk = unreachable_desk(Compatibility::default());
        let id = desk
            .notifications
            .push(Notification::success(Notification::ORDER_CREATED));

        assert!(desk.dismiss_notification(id));
        assert!(desk.notification_log().is_empty());
    }
}
