//! Integration tests for Order Desk.
//!
//! Tests drive a real [`OrderDesk`] against [`MockApi`], an in-process axum
//! server bound to an ephemeral port on `127.0.0.1`. The mock answers
//! `POST /login` and `POST /orders` with configurable responses and records
//! every request it receives.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p order-desk-integration-tests
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use order_desk_client::Compatibility;
//! use order_desk_integration_tests::MockApi;
//!
//! # async fn run() -> std::io::Result<()> {
//! let api = MockApi::start().await?;
//! let mut desk = api.desk(Compatibility::default());
//! desk.set_email("a@b.com");
//! desk.set_password("x");
//! assert!(desk.login().await.is_ok());
//! # Ok(())
//! # }
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::net::SocketAddr;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use axum::Router;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use order_desk_client::{ClientConfig, Compatibility, OrderDesk};
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use url::Url;

/// Access token the mock hands out by default.
pub const DEFAULT_TOKEN: &str = "tok123";

// =============================================================================
// Canned responses
// =============================================================================

/// A status and raw body the mock replies with.
#[derive(Debug, Clone)]
pub struct MockResponse {
    pub status: StatusCode,
    pub body: String,
}

impl MockResponse {
    /// A JSON reply.
    #[must_use]
    pub fn json(status: StatusCode, body: &serde_json::Value) -> Self {
        Self {
            status,
            body: body.to_string(),
        }
    }

    /// A reply whose body is sent verbatim, JSON or not.
    #[must_use]
    pub fn raw(status: StatusCode, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// A successful login carrying `token`.
    #[must_use]
    pub fn token(token: &str) -> Self {
        Self::json(StatusCode::OK, &serde_json::json!({ "accessToken": token }))
    }

    /// A failed login carrying an `error` message.
    #[must_use]
    pub fn login_error(status: StatusCode, message: &str) -> Self {
        Self::json(status, &serde_json::json!({ "error": message }))
    }

    /// A status with an empty JSON object body.
    #[must_use]
    pub fn status(status: StatusCode) -> Self {
        Self::json(status, &serde_json::json!({}))
    }
}

impl IntoResponse for MockResponse {
    fn into_response(self) -> Response {
        (
            self.status,
            [(header::CONTENT_TYPE, "application/json")],
            self.body,
        )
            .into_response()
    }
}

// =============================================================================
// Recorded requests
// =============================================================================

/// A request the mock received.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub path: &'static str,
    pub authorization: Option<String>,
    pub body: serde_json::Value,
}

#[derive(Debug)]
struct MockState {
    login: Mutex<MockResponse>,
    orders: Mutex<MockResponse>,
    requests: Mutex<Vec<RecordedRequest>>,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl MockState {
    fn record(&self, path: &'static str, headers: &HeaderMap, body: &str) {
        let authorization = headers
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned);
        let body = serde_json::from_str(body).unwrap_or(serde_json::Value::Null);

        tracing::debug!(path, ?authorization, "Mock request received");
        lock(&self.requests).push(RecordedRequest {
            path,
            authorization,
            body,
        });
    }
}

async fn login_handler(
    State(state): State<Arc<MockState>>,
    headers: HeaderMap,
    body: String,
) -> MockResponse {
    state.record("/login", &headers, &body);
    lock(&state.login).clone()
}

async fn orders_handler(
    State(state): State<Arc<MockState>>,
    headers: HeaderMap,
    body: String,
) -> MockResponse {
    state.record("/orders", &headers, &body);
    lock(&state.orders).clone()
}

// =============================================================================
// Mock server
// =============================================================================

/// In-process stand-in for the order API.
///
/// By default logins succeed with [`DEFAULT_TOKEN`] and orders are accepted
/// with `201 Created`.
#[derive(Debug)]
pub struct MockApi {
    addr: SocketAddr,
    state: Arc<MockState>,
    shutdown: Option<oneshot::Sender<()>>,
    server: Option<JoinHandle<()>>,
}

impl MockApi {
    /// Bind to an ephemeral port and start serving.
    ///
    /// # Errors
    ///
    /// Returns the I/O error if the listener cannot be bound.
    pub async fn start() -> std::io::Result<Self> {
        let state = Arc::new(MockState {
            login: Mutex::new(MockResponse::token(DEFAULT_TOKEN)),
            orders: Mutex::new(MockResponse::status(StatusCode::CREATED)),
            requests: Mutex::new(Vec::new()),
        });

        let app = Router::new()
            .route("/login", post(login_handler))
            .route("/orders", post(orders_handler))
            .with_state(Arc::clone(&state));

        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let (shutdown, signal) = oneshot::channel::<()>();

        let server = tokio::spawn(async move {
            let result = axum::serve(listener, app)
                .with_graceful_shutdown(async {
                    let _ = signal.await;
                })
                .await;
            if let Err(e) = result {
                tracing::error!(error = %e, "Mock API server failed");
            }
        });

        tracing::debug!(%addr, "Mock API listening");
        Ok(Self {
            addr,
            state,
            shutdown: Some(shutdown),
            server: Some(server),
        })
    }

    /// Base URL of the mock.
    ///
    /// # Panics
    ///
    /// Never; a socket address always forms a valid URL.
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn url(&self) -> Url {
        Url::parse(&format!("http://{}", self.addr)).expect("socket address is a valid URL")
    }

    /// Client configuration pointed at the mock.
    #[must_use]
    pub fn config(&self, compatibility: Compatibility) -> ClientConfig {
        let mut config = ClientConfig::new(self.url());
        config.compatibility = compatibility;
        config
    }

    /// A fresh desk pointed at the mock.
    ///
    /// # Panics
    ///
    /// Panics if the mock's URL cannot be turned into endpoints.
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn desk(&self, compatibility: Compatibility) -> OrderDesk {
        OrderDesk::new(&self.config(compatibility)).expect("mock URL resolves to endpoints")
    }

    /// Reply to subsequent logins with `response`.
    pub fn set_login_response(&self, response: MockResponse) {
        *lock(&self.state.login) = response;
    }

    /// Reply to subsequent order submissions with `response`.
    pub fn set_orders_response(&self, response: MockResponse) {
        *lock(&self.state.orders) = response;
    }

    /// Every request received so far, oldest first.
    #[must_use]
    pub fn requests(&self) -> Vec<RecordedRequest> {
        lock(&self.state.requests).clone()
    }

    /// Requests received on `path`, oldest first.
    #[must_use]
    pub fn requests_to(&self, path: &str) -> Vec<RecordedRequest> {
        lock(&self.state.requests)
            .iter()
            .filter(|r| r.path == path)
            .cloned()
            .collect()
    }

    /// Stop serving and close the listener.
    ///
    /// Requests made afterwards fail to connect.
    pub async fn shutdown(&mut self) {
        if let Some(shutdown) = self.shutdown.take() {
            let _ = shutdown.send(());
        }
        if let Some(server) = self.server.take() {
            let _ = server.await;
        }
    }
}

impl Drop for MockApi {
    fn drop(&mut self) {
        if let Some(server) = &self.server {
            server.abort();
        }
    }
}
