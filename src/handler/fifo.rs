//! FIFO handler: each canned response is served exactly once, in order.

use std::sync::atomic::{AtomicUsize, Ordering};

use axum::body::Bytes;
use axum::http::header::CONTENT_TYPE;
use axum::http::HeaderValue;

use super::{MockRequest, MockResponse, ResponseHandler, UsageViolation, JSON_CONTENT_TYPE};

/// Serves pre-serialized responses in order, one per matched request.
///
/// The cursor is advanced with a single atomic `fetch_add`, so concurrent
/// requests each receive a distinct response. Once every response has been
/// served, further matches are a [`UsageViolation::Exhausted`].
#[derive(Debug)]
pub struct FifoResponseHandler {
    responses: Vec<Bytes>,
    cursor: AtomicUsize,
}

impl FifoResponseHandler {
    pub fn new(responses: impl IntoIterator<Item = Bytes>) -> Self {
        Self {
            responses: responses.into_iter().collect(),
            cursor: AtomicUsize::new(0),
        }
    }

    /// Number of configured responses.
    pub fn len(&self) -> usize {
        self.responses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.responses.is_empty()
    }

    /// Number of responses handed out so far.
    pub fn served(&self) -> usize {
        self.cursor.load(Ordering::SeqCst).min(self.responses.len())
    }

    /// Number of responses still queued.
    pub fn remaining(&self) -> usize {
        self.responses.len() - self.served()
    }
}

impl ResponseHandler for FifoResponseHandler {
    fn respond(&self, _request: &MockRequest) -> Result<MockResponse, UsageViolation> {
        let index = self.cursor.fetch_add(1, Ordering::SeqCst);

        let body = self.responses.get(index).ok_or(UsageViolation::Exhausted {
            served: self.responses.len(),
        })?;

        Ok(MockResponse::ok(body.clone())
            .with_header(CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handler::get;
    use std::collections::HashSet;
    use std::sync::Arc;

    fn payloads(n: usize) -> Vec<Bytes> {
        (0..n).map(|i| Bytes::from(format!("{{\"id\":{i}}}"))).collect()
    }

    #[test]
    fn test_serves_in_order_then_exhausts() {
        let handler = FifoResponseHandler::new(payloads(3));
        let req = get("/users/octocat");

        for i in 0..3 {
            let response = handler.respond(&req).unwrap();
            assert_eq!(response.body(), &Bytes::from(format!("{{\"id\":{i}}}")));
        }

        assert_eq!(handler.remaining(), 0);
        assert_eq!(
            handler.respond(&req).unwrap_err(),
            UsageViolation::Exhausted { served: 3 }
        );
        // Stays exhausted
        assert!(handler.respond(&req).is_err());
        assert_eq!(handler.served(), 3);
    }

    #[test]
    fn test_empty_handler_is_exhausted_immediately() {
        let handler = FifoResponseHandler::new(Vec::new());

        assert!(handler.is_empty());
        assert_eq!(
            handler.respond(&get("/")).unwrap_err(),
            UsageViolation::Exhausted { served: 0 }
        );
    }

    #[test]
    fn test_concurrent_requests_each_get_one_response() {
        let handler = Arc::new(FifoResponseHandler::new(payloads(64)));

        let threads: Vec<_> = (0..8)
            .map(|_| {
                let handler = handler.clone();
                std::thread::spawn(move || {
                    let req = get("/user/repos");
                    (0..8)
                        .map(|_| handler.respond(&req).unwrap().body().clone())
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        let served: Vec<Bytes> = threads
            .into_iter()
            .flat_map(|t| t.join().unwrap())
            .collect();
        let unique: HashSet<_> = served.iter().collect();

        assert_eq!(served.len(), 64);
        assert_eq!(unique.len(), 64);
        assert_eq!(handler.remaining(), 0);
    }
}
