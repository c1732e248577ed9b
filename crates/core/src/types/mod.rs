//! Core types for Order Desk.
//!
//! This module provides type-safe wrappers for the order-entry domain.

pub mod credential;
pub mod line_item;
pub mod notification;
pub mod order;
pub mod price;
pub mod session;

pub use credential::Credentials;
pub use line_item::{LineItem, LineItemSpecError};
pub use notification::{Notification, NotificationId, NotificationStatus};
pub use order::{CustomerDetails, Order};
pub use price::Price;
pub use session::{Session, SessionState};
