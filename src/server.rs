//! Mock GitHub API server.
//!
//! Provides an axum-based HTTP server answering from the configured
//! handlers.

use axum::routing::get;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use url::Url;

use crate::endpoint::ENTERPRISE_PREFIX;
use crate::error::Result;
use crate::options::MockBackendOption;
use crate::registry::Registry;
use crate::violation::{report, Violation, ViolationLog};

/// Path of the built-in health check.
pub const HEALTH_PATH: &str = "/__ghmock/health";

const USER_AGENT: &str = concat!("ghmock/", env!("CARGO_PKG_VERSION"));

/// Assembles a mock server from configuration options.
///
/// Options are applied in the order they are added; when two options bind
/// the same endpoint, the later one wins.
///
/// # Example
///
/// ```no_run
/// use ghmock::endpoints::GET_USERS_BY_USERNAME;
/// use ghmock::{with_request_match, MockBackend};
/// use serde_json::json;
///
/// # async fn example() -> ghmock::Result<()> {
/// let server = MockBackend::new()
///     .with(with_request_match(
///         GET_USERS_BY_USERNAME,
///         [json!({"login": "octocat"})],
///     ))
///     .start()
///     .await?;
///
/// let user: serde_json::Value = server
///     .client()
///     .get(format!("{}/users/octocat", server.url()))
///     .send()
///     .await?
///     .json()
///     .await?;
/// assert_eq!(user["login"], "octocat");
///
/// server.shutdown().await;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Default)]
pub struct MockBackend {
    registry: Registry,
}

impl MockBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one option.
    #[must_use]
    pub fn with(mut self, option: MockBackendOption) -> Self {
        option.apply(&mut self.registry);
        self
    }

    /// Apply options in order.
    #[must_use]
    pub fn with_options(self, options: impl IntoIterator<Item = MockBackendOption>) -> Self {
        options.into_iter().fold(self, Self::with)
    }

    /// The bindings configured so far.
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Start serving on a random local port.
    ///
    /// # Errors
    ///
    /// Returns an error if no local port can be bound or the HTTP client
    /// cannot be built.
    pub async fn start(self) -> Result<MockServer> {
        let violations = ViolationLog::default();
        let app = self
            .registry
            .into_router(violations.clone())
            .route(HEALTH_PATH, get(health_check));

        // Bind to a random available port
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;

        let url = format!("http://{addr}");
        let base_url = Url::parse(&format!("{url}/"))?;
        let enterprise_url =
            base_url.join(&format!("{}/", ENTERPRISE_PREFIX.trim_start_matches('/')))?;
        let client = reqwest::Client::builder().user_agent(USER_AGENT).build()?;

        let handle = tokio::spawn(async move {
            if let Err(e) = axum::serve(listener, app).await {
                tracing::error!(error = %e, "mock server stopped");
            }
        });

        tracing::debug!(%url, "mock server listening");

        Ok(MockServer {
            url,
            base_url,
            enterprise_url,
            client,
            handle,
            violations,
        })
    }
}

/// A running mock GitHub API.
///
/// Requests that misuse a canned handler (one response too many, a page
/// that does not exist) are answered with `500` and recorded. Dropping the
/// server with recorded violations panics, failing the test that caused
/// them.
pub struct MockServer {
    /// The URL where the server is listening, without a trailing slash.
    url: String,
    base_url: Url,
    enterprise_url: Url,
    client: reqwest::Client,
    /// Handle to the server task.
    handle: JoinHandle<()>,
    violations: ViolationLog,
}

impl MockServer {
    /// Start a mock server with the given options.
    ///
    /// # Panics
    ///
    /// Panics if the server cannot be started.
    pub async fn start(options: impl IntoIterator<Item = MockBackendOption>) -> Self {
        MockBackend::new()
            .with_options(options)
            .start()
            .await
            .expect("Failed to start mock server")
    }

    /// The base URL of the server, e.g. `http://127.0.0.1:41234`.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// The base URL with a trailing slash, ready for [`Url::join`].
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// The base URL a GitHub Enterprise client would use (`.../api/v3/`).
    pub fn enterprise_url(&self) -> &Url {
        &self.enterprise_url
    }

    /// An HTTP client for talking to this server.
    ///
    /// This is cheaply cloneable; clones share one connection pool.
    pub fn client(&self) -> reqwest::Client {
        self.client.clone()
    }

    /// Violations recorded so far.
    pub fn violations(&self) -> Vec<Violation> {
        self.violations.snapshot()
    }

    /// Remove and return recorded violations.
    ///
    /// Use this to assert on a violation a test provokes on purpose.
    pub fn take_violations(&self) -> Vec<Violation> {
        self.violations.take()
    }

    /// Panic if any violation was recorded.
    ///
    /// # Panics
    ///
    /// Panics with every recorded violation.
    pub fn verify(&self) {
        let violations = self.violations.take();
        if !violations.is_empty() {
            panic!("{}", report(&violations));
        }
    }

    /// Stop the server, then verify it.
    ///
    /// # Panics
    ///
    /// Panics if any violation was recorded.
    pub async fn shutdown(mut self) {
        self.handle.abort();
        let _ = (&mut self.handle).await;
        self.verify();
    }
}

impl std::fmt::Debug for MockServer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MockServer")
            .field("url", &self.url)
            .finish_non_exhaustive()
    }
}

impl Drop for MockServer {
    fn drop(&mut self) {
        self.handle.abort();

        if std::thread::panicking() {
            return;
        }
        let violations = self.violations.take();
        if !violations.is_empty() {
            panic!("{}", report(&violations));
        }
    }
}

/// Health check endpoint.
async fn health_check() -> &'static str {
    "ok"
}
