//! Order API over HTTP.
//!
//! This module provides:
//! - [`ApiClient`] for the `POST /login` and `POST /orders` endpoints
//! - [`ApiError`] distinguishing server rejections from transport failures
//!
//! # Endpoints
//!
//! | Endpoint | Body | Success | Failure |
//! |----------|------|---------|---------|
//! | `POST /login` | `{email, password}` | `{accessToken}` | `{error}` |
//! | `POST /orders` | `{customerName, customerEmail, items}` + bearer token | status only | status only |

mod client;
mod error;
mod types;

pub use client::ApiClient;
pub use error::ApiError;
pub use types::{LoginErrorResponse, LoginResponse};
