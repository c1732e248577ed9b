//! Order Desk Client - HTTP client and view state for order entry.
//!
//! A user logs in, builds an order from customer fields and line items, and
//! submits it to a remote API. Accepted orders are kept in a client-local
//! history that is never re-fetched.
//!
//! # Architecture
//!
//! - [`OrderDesk`] is the single state container a view drives
//! - [`SessionManager`] gates order submission behind a successful login
//! - [`OrderBuilder`] holds the order form and the pending item buffer
//! - [`api::ApiClient`] performs the `POST /login` and `POST /orders` calls
//!
//! All state is owned by one `OrderDesk` and mutated through `&mut self`, so
//! no locking is involved and only one request is ever in flight.
//!
//! # Example
//!
//! ```rust,no_run
//! use order_desk_client::{ClientConfig, OrderDesk};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ClientConfig::from_env()?;
//! let mut desk = OrderDesk::new(&config)?;
//!
//! desk.set_email("a@b.com");
//! desk.set_password("x");
//! desk.login().await?;
//!
//! desk.set_customer_name("Ada");
//! desk.set_customer_email("ada@example.com");
//! desk.set_product_name("Widget");
//! desk.set_quantity_input("3");
//! desk.set_price_input("9.99");
//! desk.add_item();
//!
//! desk.submit_order().await?;
//! assert_eq!(desk.orders().len(), 1);
//! # Ok(())
//! # }
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod api;
pub mod builder;
pub mod config;
pub mod desk;
pub mod error;
pub mod notifications;
pub mod session;

pub use builder::{ItemDraft, OrderBuilder};
pub use config::{ClientConfig, Compatibility, ConfigError};
pub use desk::OrderDesk;
pub use error::{AuthError, SubmitError};
pub use notifications::NotificationQueue;
pub use session::SessionManager;
