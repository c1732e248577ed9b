//! Order Desk Core - Shared domain types.
//!
//! This crate provides the types shared by all Order Desk components:
//! - `client` - HTTP API client and the `OrderDesk` state container
//! - `cli` - Terminal view for logging in and entering orders
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O and no
//! HTTP clients. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Credentials, sessions, line items, orders, prices and notifications
//! - [`input`] - Coercion of free-form numeric form input

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod input;
pub mod types;

pub use types::*;
