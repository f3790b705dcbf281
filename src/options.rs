//! Configuration options for a mock backend.
//!
//! Each option binds one endpoint to one handler. Options are applied in
//! order, so when two options name the same endpoint the later one wins.

use std::fmt;
use std::sync::Arc;

use axum::body::Bytes;
use serde::Serialize;

use crate::endpoint::EndpointPattern;
use crate::handler::{FifoResponseHandler, PaginatedResponseHandler, ResponseHandler};
use crate::marshal::marshal;
use crate::registry::Registry;

/// One registration to perform against a [`Registry`].
pub enum MockBackendOption {
    /// Answer with a caller-supplied handler.
    Handler {
        endpoint: EndpointPattern,
        handler: Arc<dyn ResponseHandler>,
    },
    /// Serve these payloads once each, in order.
    Responses {
        endpoint: EndpointPattern,
        responses: Vec<Bytes>,
    },
    /// Serve the page selected by `?page=N` (1-based).
    Pages {
        endpoint: EndpointPattern,
        pages: Vec<Bytes>,
    },
}

impl MockBackendOption {
    /// The endpoint this option binds.
    pub fn endpoint(&self) -> &EndpointPattern {
        match self {
            Self::Handler { endpoint, .. }
            | Self::Responses { endpoint, .. }
            | Self::Pages { endpoint, .. } => endpoint,
        }
    }

    /// Register this option's handler.
    pub fn apply(self, registry: &mut Registry) {
        match self {
            Self::Handler { endpoint, handler } => registry.register_shared(endpoint, handler),
            Self::Responses {
                endpoint,
                responses,
            } => registry.register(endpoint, FifoResponseHandler::new(responses)),
            Self::Pages { endpoint, pages } => {
                registry.register(endpoint, PaginatedResponseHandler::new(pages))
            }
        }
    }
}

impl fmt::Debug for MockBackendOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Handler { endpoint, .. } => f
                .debug_struct("Handler")
                .field("endpoint", endpoint)
                .finish_non_exhaustive(),
            Self::Responses {
                endpoint,
                responses,
            } => f
                .debug_struct("Responses")
                .field("endpoint", endpoint)
                .field("responses", &responses.len())
                .finish(),
            Self::Pages { endpoint, pages } => f
                .debug_struct("Pages")
                .field("endpoint", endpoint)
                .field("pages", &pages.len())
                .finish(),
        }
    }
}

/// Answer `ep` with a custom handler.
///
/// Use this when a test needs to look at request headers or bodies, or
/// answer with something other than `200 OK`.
///
/// # Example
///
/// ```
/// use axum::http::StatusCode;
/// use ghmock::endpoints::POST_REPOS_ISSUES_BY_OWNER_BY_REPO;
/// use ghmock::{with_request_match_handler, MockRequest, MockResponse};
///
/// let option = with_request_match_handler(
///     POST_REPOS_ISSUES_BY_OWNER_BY_REPO,
///     |_: &MockRequest| MockResponse::new(StatusCode::UNPROCESSABLE_ENTITY),
/// );
/// ```
pub fn with_request_match_handler(
    ep: EndpointPattern,
    handler: impl ResponseHandler,
) -> MockBackendOption {
    MockBackendOption::Handler {
        endpoint: ep,
        handler: Arc::new(handler),
    }
}

/// Serve each value once, in order, as JSON.
///
/// Once every response has been used, further requests are a usage
/// violation and fail the test.
///
/// # Panics
///
/// Panics if a value cannot be serialized to JSON.
///
/// # Example
///
/// ```
/// use ghmock::endpoints::GET_USERS_BY_USERNAME;
/// use ghmock::with_request_match;
/// use serde_json::json;
///
/// let option = with_request_match(
///     GET_USERS_BY_USERNAME,
///     [json!({"login": "octocat"}), json!({"login": "hubot"})],
/// );
/// ```
pub fn with_request_match<T: Serialize>(
    ep: EndpointPattern,
    responses: impl IntoIterator<Item = T>,
) -> MockBackendOption {
    let responses = serialize_all(&ep, responses);
    MockBackendOption::Responses {
        endpoint: ep,
        responses,
    }
}

/// Like [`with_request_match`], for payloads that are already serialized.
///
/// The bytes are served unchanged.
pub fn with_request_match_bytes<B: Into<Bytes>>(
    ep: EndpointPattern,
    responses: impl IntoIterator<Item = B>,
) -> MockBackendOption {
    MockBackendOption::Responses {
        endpoint: ep,
        responses: responses.into_iter().map(Into::into).collect(),
    }
}

/// Same as [`with_request_match`] but for GitHub Enterprise.
pub fn with_request_match_enterprise<T: Serialize>(
    ep: EndpointPattern,
    responses: impl IntoIterator<Item = T>,
) -> MockBackendOption {
    with_request_match(ep.enterprise(), responses)
}

/// Same as [`with_request_match_bytes`] but for GitHub Enterprise.
pub fn with_request_match_bytes_enterprise<B: Into<Bytes>>(
    ep: EndpointPattern,
    responses: impl IntoIterator<Item = B>,
) -> MockBackendOption {
    with_request_match_bytes(ep.enterprise(), responses)
}

/// Serve pages selected by the `page` query parameter.
///
/// Pages are 1-based and can be requested in any order, as many times as
/// needed. A request without `page` gets the first page.
///
/// # Panics
///
/// Panics if a page cannot be serialized to JSON.
///
/// # Example
///
/// ```
/// use ghmock::endpoints::GET_ORGS_REPOS_BY_ORG;
/// use ghmock::with_request_match_pages;
/// use serde_json::json;
///
/// let option = with_request_match_pages(
///     GET_ORGS_REPOS_BY_ORG,
///     [
///         json!([{"name": "repo-A"}, {"name": "repo-B"}]),
///         json!([{"name": "repo-C"}, {"name": "repo-D"}]),
///     ],
/// );
/// ```
pub fn with_request_match_pages<T: Serialize>(
    ep: EndpointPattern,
    pages: impl IntoIterator<Item = T>,
) -> MockBackendOption {
    let pages = serialize_all(&ep, pages);
    MockBackendOption::Pages {
        endpoint: ep,
        pages,
    }
}

/// Same as [`with_request_match_pages`] but for GitHub Enterprise.
pub fn with_request_match_pages_enterprise<T: Serialize>(
    ep: EndpointPattern,
    pages: impl IntoIterator<Item = T>,
) -> MockBackendOption {
    with_request_match_pages(ep.enterprise(), pages)
}

fn serialize_all<T: Serialize>(
    ep: &EndpointPattern,
    values: impl IntoIterator<Item = T>,
) -> Vec<Bytes> {
    values
        .into_iter()
        .enumerate()
        .map(|(i, value)| match marshal(&value) {
            Ok(bytes) => bytes,
            Err(e) => panic!(
                "ghmock: cannot serialize canned response #{} for {ep}: {e}",
                i + 1
            ),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::endpoints::{GET_ORGS_REPOS_BY_ORG, GET_USERS_BY_USERNAME};
    use crate::handler::{MockRequest, MockResponse};
    use serde_json::json;
    use std::collections::HashMap;

    #[test]
    fn test_with_request_match_serializes_values() {
        let option = with_request_match(
            GET_USERS_BY_USERNAME,
            [json!({"login": "a"}), json!({"login": "b"})],
        );

        match option {
            MockBackendOption::Responses {
                endpoint,
                responses,
            } => {
                assert_eq!(endpoint, GET_USERS_BY_USERNAME);
                assert_eq!(
                    responses,
                    vec![
                        Bytes::from_static(br#"{"login":"a"}"#),
                        Bytes::from_static(br#"{"login":"b"}"#),
                    ]
                );
            }
            other => panic!("Expected Responses option, got {other:?}"),
        }
    }

    #[test]
    fn test_with_request_match_bytes_passes_through() {
        let option = with_request_match_bytes(GET_USERS_BY_USERNAME, [&b"not json"[..]]);

        match option {
            MockBackendOption::Responses { responses, .. } => {
                assert_eq!(responses, vec![Bytes::from_static(b"not json")]);
            }
            other => panic!("Expected Responses option, got {other:?}"),
        }
    }

    #[test]
    fn test_enterprise_variants_prefix_endpoint() {
        let fifo = with_request_match_enterprise(GET_ORGS_REPOS_BY_ORG, [json!([])]);
        let pages = with_request_match_pages_enterprise(GET_ORGS_REPOS_BY_ORG, [json!([])]);
        let bytes = with_request_match_bytes_enterprise(GET_ORGS_REPOS_BY_ORG, [Bytes::new()]);

        for option in [fifo, pages, bytes] {
            assert_eq!(option.endpoint().method(), "GET");
            assert_eq!(option.endpoint().pattern(), "/api/v3/orgs/{org}/repos");
        }
    }

    #[test]
    fn test_apply_registers_in_order() {
        let mut registry = Registry::new();

        with_request_match(GET_USERS_BY_USERNAME, [json!({})]).apply(&mut registry);
        with_request_match_handler(GET_USERS_BY_USERNAME, |_: &MockRequest| {
            MockResponse::ok("")
        })
        .apply(&mut registry);
        with_request_match_pages(GET_ORGS_REPOS_BY_ORG, [json!([])]).apply(&mut registry);

        assert_eq!(registry.len(), 2);
    }

    #[test]
    #[should_panic(expected = "cannot serialize canned response #2 for GET /users/{username}")]
    fn test_unserializable_value_panics_at_setup() {
        let mut bad: HashMap<(u8, u8), u8> = HashMap::new();
        bad.insert((1, 2), 3);

        let _ = with_request_match(GET_USERS_BY_USERNAME, [HashMap::new(), bad]);
    }
}
