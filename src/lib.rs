//! Deterministic HTTP test doubles for GitHub REST API clients.
//!
//! Declare which endpoints a test touches and what they answer with, and
//! get back a running HTTP server plus a client bound to it. The code under
//! test builds real requests, serializes them and sends them over a real
//! socket; only the GitHub side is canned.
//!
//! # Quick Start
//!
//! ```no_run
//! use ghmock::endpoints::{GET_ORGS_REPOS_BY_ORG, GET_USERS_BY_USERNAME};
//! use ghmock::{with_request_match, with_request_match_pages, MockServer};
//! use serde_json::json;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let server = MockServer::start([
//!         // Served once each, in order
//!         with_request_match(
//!             GET_USERS_BY_USERNAME,
//!             [json!({"login": "octocat"}), json!({"login": "hubot"})],
//!         ),
//!         // Selected by ?page=N, any order, any number of times
//!         with_request_match_pages(
//!             GET_ORGS_REPOS_BY_ORG,
//!             [json!([{"name": "a"}, {"name": "b"}]), json!([{"name": "c"}])],
//!         ),
//!     ])
//!     .await;
//!
//!     let client = server.client();
//!     let user: serde_json::Value = client
//!         .get(server.base_url().join("users/octocat")?)
//!         .send()
//!         .await?
//!         .json()
//!         .await?;
//!     println!("{}", user["login"]);
//!
//!     server.shutdown().await;
//!     Ok(())
//! }
//! ```
//!
//! # Handlers
//!
//! - [`with_request_match_handler`] - any closure over [`MockRequest`]
//! - [`with_request_match`] - FIFO: each response served exactly once
//! - [`with_request_match_pages`] - pages picked by the 1-based `page`
//!   query parameter, with GitHub-style `Link` headers
//!
//! The `*_enterprise` variants mount the endpoint under `/api/v3`, the way
//! GitHub Enterprise Server exposes the API.
//!
//! # Usage violations
//!
//! Asking a FIFO handler for more responses than it holds, or a paginated
//! handler for a page it does not have, is a bug in the test. The server
//! answers `500`, records the violation, and panics when the
//! [`MockServer`] is verified, shut down or dropped.

#[cfg(feature = "codegen")]
pub mod cli;
pub mod codegen;
mod endpoint;
pub mod endpoints;
mod error;
mod handler;
mod marshal;
mod options;
mod registry;
mod server;
mod violation;

// Re-export core types
pub use endpoint::{EndpointPattern, ENTERPRISE_PREFIX};
pub use error::{MockError, Result};
pub use handler::{
    FifoResponseHandler, MockRequest, MockResponse, PaginatedResponseHandler, ResponseHandler,
    UsageViolation, PAGE_PARAM,
};
pub use marshal::{marshal, must_marshal};
pub use registry::{Registry, VIOLATION_HEADER};
pub use server::{MockBackend, MockServer, HEALTH_PATH};
pub use violation::Violation;

// Re-export configuration options
pub use options::{
    with_request_match, with_request_match_bytes, with_request_match_bytes_enterprise,
    with_request_match_enterprise, with_request_match_handler, with_request_match_pages,
    with_request_match_pages_enterprise, MockBackendOption,
};
