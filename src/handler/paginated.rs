//! Paginated handler: serves the page selected by the `page` query parameter.

use std::sync::atomic::{AtomicU64, Ordering};

use axum::body::Bytes;
use axum::http::header::{CONTENT_TYPE, LINK};
use axum::http::HeaderValue;
use url::Url;

use super::{MockRequest, MockResponse, ResponseHandler, UsageViolation, JSON_CONTENT_TYPE};

/// Query parameter that selects a page.
pub const PAGE_PARAM: &str = "page";

/// Serves one of several pages, selected by `?page=N`.
///
/// Pages are 1-based. A missing or non-numeric `page` selects page 1;
/// `page=0` or anything past the last page is a
/// [`UsageViolation::PageOutOfRange`]. Pages can be fetched in any order
/// and as often as needed.
///
/// Responses carry a GitHub-style `Link` header (`prev`, `next`, `last`,
/// `first`) so clients that follow pagination links can walk every page.
#[derive(Debug)]
pub struct PaginatedResponseHandler {
    pages: Vec<Bytes>,
    hits: AtomicU64,
}

impl PaginatedResponseHandler {
    pub fn new(pages: impl IntoIterator<Item = Bytes>) -> Self {
        Self {
            pages: pages.into_iter().collect(),
            hits: AtomicU64::new(0),
        }
    }

    /// Number of configured pages.
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Number of requests this handler has answered, including rejected ones.
    pub fn hits(&self) -> u64 {
        self.hits.load(Ordering::Relaxed)
    }
}

impl ResponseHandler for PaginatedResponseHandler {
    fn respond(&self, request: &MockRequest) -> Result<MockResponse, UsageViolation> {
        self.hits.fetch_add(1, Ordering::Relaxed);

        let page = requested_page(request);
        let body = usize::try_from(page)
            .ok()
            .and_then(|p| p.checked_sub(1))
            .and_then(|index| self.pages.get(index))
            .ok_or(UsageViolation::PageOutOfRange {
                page,
                pages: self.pages.len(),
            })?;

        let mut response = MockResponse::ok(body.clone())
            .with_header(CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE));

        // page is within 1..=len here
        if let Some(link) = link_header(request, page as usize, self.pages.len()) {
            response = response.with_header(LINK, link);
        }

        Ok(response)
    }
}

fn requested_page(request: &MockRequest) -> i64 {
    request
        .query_param(PAGE_PARAM)
        .and_then(|value| value.trim().parse().ok())
        .unwrap_or(1)
}

/// Build the `Link` header for `page` out of `last` pages.
///
/// Returns `None` when there is nothing to link to.
fn link_header(request: &MockRequest, page: usize, last: usize) -> Option<HeaderValue> {
    if last <= 1 {
        return None;
    }

    let host = request.header("host").unwrap_or("localhost");
    let base = Url::parse(&format!("http://{host}{}", request.path())).ok()?;
    let others: Vec<(String, String)> = request
        .query_pairs()
        .into_iter()
        .filter(|(key, _)| key != PAGE_PARAM)
        .collect();

    let page_url = |target: usize| {
        let mut url = base.clone();
        url.query_pairs_mut()
            .extend_pairs(others.iter())
            .append_pair(PAGE_PARAM, &target.to_string());
        url
    };

    let mut links = Vec::new();
    if page > 1 {
        links.push(format!("<{}>; rel=\"prev\"", page_url(page - 1)));
    }
    if page < last {
        links.push(format!("<{}>; rel=\"next\"", page_url(page + 1)));
        links.push(format!("<{}>; rel=\"last\"", page_url(last)));
    }
    if page > 1 {
        links.push(format!("<{}>; rel=\"first\"", page_url(1)));
    }

    HeaderValue::from_str(&links.join(", ")).ok()
}
