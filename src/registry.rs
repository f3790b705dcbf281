//! Endpoint to handler bindings, and dispatch of incoming requests.

use std::collections::BTreeMap;
use std::sync::Arc;

use axum::extract::Request;
use axum::http::header::ALLOW;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::any;
use axum::Router;

use crate::endpoint::EndpointPattern;
use crate::handler::{MockRequest, ResponseHandler};
use crate::violation::{Violation, ViolationLog};

/// Header set on responses to requests that caused a usage violation.
pub const VIOLATION_HEADER: &str = "x-ghmock-violation";

#[derive(Clone)]
struct Binding {
    endpoint: EndpointPattern,
    handler: Arc<dyn ResponseHandler>,
}

/// Method name to binding, for one route path.
type MethodTable = BTreeMap<String, Binding>;

/// Bindings from endpoints to the handlers answering them.
///
/// Registering an endpoint whose method and path template are already
/// bound replaces the earlier handler. Templates that only differ in
/// placeholder names (`/users/{username}` and `/users/{user}`) count as
/// the same path.
#[derive(Default)]
pub struct Registry {
    routes: BTreeMap<String, MethodTable>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `endpoint` to `handler`, replacing any earlier binding.
    pub fn register(&mut self, endpoint: EndpointPattern, handler: impl ResponseHandler) {
        self.register_shared(endpoint, Arc::new(handler));
    }

    /// Bind `endpoint` to a handler the caller keeps a reference to.
    pub fn register_shared(
        &mut self,
        endpoint: EndpointPattern,
        handler: Arc<dyn ResponseHandler>,
    ) {
        let methods = self.routes.entry(endpoint.route_path()).or_default();
        let binding = Binding {
            endpoint: endpoint.clone(),
            handler,
        };

        match methods.insert(endpoint.method().to_string(), binding) {
            Some(previous) => {
                tracing::debug!(%endpoint, previous = %previous.endpoint, "replaced handler");
            }
            None => tracing::debug!(%endpoint, "registered handler"),
        }
    }

    /// Number of bound endpoints.
    pub fn len(&self) -> usize {
        self.routes.values().map(BTreeMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// The bound endpoints, ordered by path then method.
    pub fn endpoints(&self) -> Vec<&EndpointPattern> {
        self.routes
            .values()
            .flat_map(|methods| methods.values().map(|b| &b.endpoint))
            .collect()
    }

    /// Build the axum router serving every binding.
    pub(crate) fn into_router(self, violations: ViolationLog) -> Router {
        let mut router = Router::new();

        for (path, methods) in self.routes {
            let methods = Arc::new(methods);
            let violations = violations.clone();
            router = router.route(
                &path,
                any(move |request: Request| dispatch(methods.clone(), violations.clone(), request)),
            );
        }

        router
    }
}

impl std::fmt::Debug for Registry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registry")
            .field("endpoints", &self.endpoints())
            .finish()
    }
}

async fn dispatch(
    methods: Arc<MethodTable>,
    violations: ViolationLog,
    request: Request,
) -> Response {
    let Some(binding) = methods.get(request.method().as_str()) else {
        let allow = methods.keys().cloned().collect::<Vec<_>>().join(", ");
        return (StatusCode::METHOD_NOT_ALLOWED, [(ALLOW, allow)]).into_response();
    };

    let request = match MockRequest::from_axum(request).await {
        Ok(request) => request,
        Err(e) => {
            return (
                StatusCode::BAD_REQUEST,
                format!("failed to read request body: {e}"),
            )
                .into_response()
        }
    };

    tracing::debug!(endpoint = %binding.endpoint, uri = %request.uri(), "dispatching request");

    match binding.handler.respond(&request) {
        Ok(response) => response.into_response(),
        Err(kind) => {
            let violation = Violation {
                endpoint: binding.endpoint.clone(),
                method: request.method().clone(),
                uri: request.uri().to_string(),
                kind,
            };
            tracing::error!(%violation, "mock usage violation");

            let body = violation.to_string();
            violations.record(violation);

            (
                StatusCode::INTERNAL_SERVER_ERROR,
                [(VIOLATION_HEADER, "1")],
                body,
            )
                .into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::endpoints::{GET_ORGS_REPOS_BY_ORG, GET_USERS_BY_USERNAME, PATCH_USER};
    use crate::handler::{FifoResponseHandler, MockResponse};
    use axum::body::{Body, Bytes};
    use axum::http::Method;
    use tower::ServiceExt;

    async fn call(router: &Router, method: Method, uri: &str) -> (StatusCode, Response) {
        let request = axum::http::Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap();
        let response = router.clone().oneshot(request).await.unwrap();
        (response.status(), response)
    }

    async fn text(response: Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_last_registration_wins() {
        let mut registry = Registry::new();
        registry.register(GET_USERS_BY_USERNAME, |_: &MockRequest| MockResponse::ok("first"));
        registry.register(GET_USERS_BY_USERNAME, |_: &MockRequest| MockResponse::ok("second"));

        assert_eq!(registry.len(), 1);
        assert_eq!(registry.endpoints(), vec![&GET_USERS_BY_USERNAME]);

        let router = registry.into_router(ViolationLog::default());
        let (_, response) = call(&router, Method::GET, "/users/octocat").await;
        assert_eq!(text(response).await, "second");
    }

    #[test]
    fn test_placeholder_names_do_not_matter() {
        let mut registry = Registry::new();
        registry.register(GET_USERS_BY_USERNAME, |_: &MockRequest| MockResponse::ok("a"));
        registry.register(
            EndpointPattern::new("GET", "/users/{user}"),
            |_: &MockRequest| MockResponse::ok("b"),
        );

        assert_eq!(registry.len(), 1);
    }

    #[tokio::test]
    async fn test_dispatch_by_method_and_path() {
        let mut registry = Registry::new();
        registry.register(GET_USERS_BY_USERNAME, |req: &MockRequest| {
            MockResponse::ok(format!("user at {}", req.path()))
        });
        registry.register(GET_ORGS_REPOS_BY_ORG, |_: &MockRequest| MockResponse::ok("repos"));
        let router = registry.into_router(ViolationLog::default());

        let (status, response) = call(&router, Method::GET, "/users/octocat").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(text(response).await, "user at /users/octocat");

        let (status, response) = call(&router, Method::GET, "/orgs/github/repos").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(text(response).await, "repos");
    }

    #[tokio::test]
    async fn test_unknown_path_and_method() {
        let mut registry = Registry::new();
        registry.register(PATCH_USER, |_: &MockRequest| MockResponse::ok("patched"));
        let router = registry.into_router(ViolationLog::default());

        let (status, _) = call(&router, Method::GET, "/users/octocat").await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, response) = call(&router, Method::GET, "/user").await;
        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(response.headers()[ALLOW], "PATCH");
    }

    #[tokio::test]
    async fn test_violation_is_recorded_and_answered_with_500() {
        let mut registry = Registry::new();
        registry.register(
            GET_USERS_BY_USERNAME,
            FifoResponseHandler::new([Bytes::from_static(b"{}")]),
        );
        let violations = ViolationLog::default();
        let router = registry.into_router(violations.clone());

        let (status, _) = call(&router, Method::GET, "/users/octocat").await;
        assert_eq!(status, StatusCode::OK);

        let (status, response) = call(&router, Method::GET, "/users/octocat").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(response.headers()[VIOLATION_HEADER], "1");
        assert!(text(response).await.contains("all 1 canned responses were already served"));

        let recorded = violations.take();
        assert_eq!(recorded.len(), 1);
        assert_eq!(recorded[0].endpoint, GET_USERS_BY_USERNAME);
        assert_eq!(recorded[0].uri, "/users/octocat");
    }
}
