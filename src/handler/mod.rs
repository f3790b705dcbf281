//! Response handlers: given a matched request, produce a response.
//!
//! Three strategies ship with the crate:
//!
//! - any closure `Fn(&MockRequest) -> MockResponse` (full control)
//! - [`FifoResponseHandler`] serves each canned payload once, in order
//! - [`PaginatedResponseHandler`] serves the page picked by `?page=N`

mod fifo;
mod paginated;

use axum::body::Bytes;
use axum::http::header::{IntoHeaderName, CONTENT_TYPE};
use axum::http::{HeaderMap, HeaderValue, Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

use crate::error::Result;
use crate::marshal::marshal;

pub use fifo::FifoResponseHandler;
pub use paginated::{PaginatedResponseHandler, PAGE_PARAM};

pub(crate) const JSON_CONTENT_TYPE: &str = "application/json; charset=utf-8";

/// Misuse of a canned handler detected while serving.
///
/// These are test-authoring bugs, not conditions a test is expected to
/// handle. The server records them and fails the test; see
/// [`MockServer::verify`](crate::MockServer::verify).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UsageViolation {
    /// A FIFO handler was matched after every response had been served.
    #[error("all {served} canned responses were already served")]
    Exhausted { served: usize },

    /// A paginated handler was asked for a page it does not have.
    #[error("page {page} requested but only pages 1..={pages} are configured")]
    PageOutOfRange { page: i64, pages: usize },
}

/// Something that can answer a matched request.
///
/// Closures taking a [`MockRequest`] and returning a [`MockResponse`]
/// implement this trait, which is the escape hatch for tests that need to
/// inspect headers or bodies, or answer with a non-200 status.
///
/// # Example
///
/// ```
/// use ghmock::{MockRequest, MockResponse, ResponseHandler};
/// use axum::http::StatusCode;
///
/// let handler = |req: &MockRequest| {
///     if req.header("authorization").is_none() {
///         return MockResponse::new(StatusCode::UNAUTHORIZED);
///     }
///     MockResponse::ok(r#"{"login":"octocat"}"#)
/// };
///
/// fn assert_handler<H: ResponseHandler>(_: &H) {}
/// assert_handler(&handler);
/// ```
pub trait ResponseHandler: Send + Sync + 'static {
    /// Produce the response for a matched request, updating any internal state.
    fn respond(&self, request: &MockRequest) -> core::result::Result<MockResponse, UsageViolation>;
}

impl<F> ResponseHandler for F
where
    F: Fn(&MockRequest) -> MockResponse + Send + Sync + 'static,
{
    fn respond(&self, request: &MockRequest) -> core::result::Result<MockResponse, UsageViolation> {
        Ok(self(request))
    }
}

/// An incoming request, with its body already read.
#[derive(Debug, Clone)]
pub struct MockRequest {
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
}

impl MockRequest {
    /// Assemble a request from its parts.
    pub fn new(method: Method, uri: Uri, headers: HeaderMap, body: impl Into<Bytes>) -> Self {
        Self {
            method,
            uri,
            headers,
            body: body.into(),
        }
    }

    /// Read the body of an axum request.
    pub(crate) async fn from_axum(
        request: axum::extract::Request,
    ) -> core::result::Result<Self, axum::Error> {
        let (parts, body) = request.into_parts();
        let body = axum::body::to_bytes(body, usize::MAX).await?;
        Ok(Self::new(parts.method, parts.uri, parts.headers, body))
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn uri(&self) -> &Uri {
        &self.uri
    }

    pub fn path(&self) -> &str {
        self.uri.path()
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    pub fn body(&self) -> &Bytes {
        &self.body
    }

    /// A header value, if present and valid UTF-8.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    /// All decoded query pairs, in request order.
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        url::form_urlencoded::parse(self.uri.query().unwrap_or_default().as_bytes())
            .into_owned()
            .collect()
    }

    /// The first value of a query parameter.
    pub fn query_param(&self, name: &str) -> Option<String> {
        self.query_pairs()
            .into_iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value)
    }

    /// Decode the query string into a typed struct.
    ///
    /// # Errors
    ///
    /// Returns an error if the query string does not fit `T`.
    pub fn query<T: DeserializeOwned>(&self) -> Result<T> {
        Ok(serde_qs::from_str(self.uri.query().unwrap_or_default())?)
    }

    /// Decode the body as JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the body is not valid JSON for `T`.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        Ok(serde_json::from_slice(&self.body)?)
    }
}

/// The response a handler produces.
#[derive(Debug, Clone)]
pub struct MockResponse {
    status: StatusCode,
    headers: HeaderMap,
    body: Bytes,
}

impl MockResponse {
    /// An empty response with the given status.
    pub fn new(status: StatusCode) -> Self {
        Self {
            status,
            headers: HeaderMap::new(),
            body: Bytes::new(),
        }
    }

    /// A `200 OK` response with the given body.
    pub fn ok(body: impl Into<Bytes>) -> Self {
        Self::new(StatusCode::OK).with_body(body)
    }

    /// A `200 OK` JSON response.
    ///
    /// # Errors
    ///
    /// Returns an error if the value cannot be serialized.
    pub fn json<T: Serialize + ?Sized>(value: &T) -> Result<Self> {
        Ok(Self::ok(marshal(value)?)
            .with_header(CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE)))
    }

    #[must_use]
    pub fn with_status(mut self, status: StatusCode) -> Self {
        self.status = status;
        self
    }

    /// Set a header, replacing any previous value.
    #[must_use]
    pub fn with_header<K: IntoHeaderName>(mut self, name: K, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }

    #[must_use]
    pub fn with_body(mut self, body: impl Into<Bytes>) -> Self {
        self.body = body.into();
        self
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    pub fn body(&self) -> &Bytes {
        &self.body
    }
}

impl IntoResponse for MockResponse {
    fn into_response(self) -> Response {
        (self.status, self.headers, self.body).into_response()
    }
}

#[cfg(test)]
pub(crate) fn get(uri: &str) -> MockRequest {
    MockRequest::new(
        Method::GET,
        uri.parse().expect("valid test uri"),
        HeaderMap::new(),
        Bytes::new(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[test]
    fn test_closure_is_a_handler() {
        let handler = |req: &MockRequest| MockResponse::ok(req.path().to_string());

        let response = handler.respond(&get("/users/octocat")).unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(&response.body()[..], b"/users/octocat");
    }

    #[test]
    fn test_query_param_decodes_values() {
        let req = get("/search/issues?q=is%3Aopen+label%3Abug&page=3");

        assert_eq!(req.query_param("q").as_deref(), Some("is:open label:bug"));
        assert_eq!(req.query_param("page").as_deref(), Some("3"));
        assert_eq!(req.query_param("per_page"), None);
    }

    #[test]
    fn test_typed_query() {
        #[derive(Deserialize)]
        struct ListQuery {
            page: u32,
            per_page: Option<u32>,
        }

        let query: ListQuery = get("/user/repos?page=2&per_page=50").query().unwrap();
        assert_eq!(query.page, 2);
        assert_eq!(query.per_page, Some(50));
    }

    #[test]
    fn test_json_body() {
        let req = MockRequest::new(
            Method::POST,
            "/user/repos".parse().unwrap(),
            HeaderMap::new(),
            r#"{"name":"hello-world"}"#,
        );

        let body: serde_json::Value = req.json().unwrap();
        assert_eq!(body["name"], "hello-world");
    }

    #[test]
    fn test_json_response_sets_content_type() {
        let response = MockResponse::json(&serde_json::json!({"id": 1})).unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[CONTENT_TYPE], JSON_CONTENT_TYPE);
        assert_eq!(&response.body()[..], br#"{"id":1}"#);
    }

    #[test]
    fn test_violation_messages() {
        let exhausted = UsageViolation::Exhausted { served: 2 };
        assert_eq!(
            exhausted.to_string(),
            "all 2 canned responses were already served"
        );

        let out_of_range = UsageViolation::PageOutOfRange { page: 3, pages: 2 };
        assert_eq!(
            out_of_range.to_string(),
            "page 3 requested but only pages 1..=2 are configured"
        );
    }
}
