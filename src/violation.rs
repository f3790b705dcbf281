//! Record of usage violations observed while serving.

use std::fmt;
use std::sync::{Arc, Mutex, PoisonError};

use axum::http::Method;

use crate::endpoint::EndpointPattern;
use crate::handler::UsageViolation;

/// A request that hit a handler in a way the test did not set up for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// The registered endpoint the request was routed to.
    pub endpoint: EndpointPattern,
    /// Method of the offending request.
    pub method: Method,
    /// Path and query of the offending request.
    pub uri: String,
    /// What went wrong.
    pub kind: UsageViolation,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let uri = urlencoding::decode(&self.uri).unwrap_or(self.uri.as_str().into());
        write!(
            f,
            "{} {} (matched {}): {}",
            self.method, uri, self.endpoint, self.kind
        )
    }
}

/// Violations shared between the server task and the [`MockServer`](crate::MockServer) handle.
#[derive(Debug, Clone, Default)]
pub(crate) struct ViolationLog(Arc<Mutex<Vec<Violation>>>);

impl ViolationLog {
    pub(crate) fn record(&self, violation: Violation) {
        self.0
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(violation);
    }

    pub(crate) fn snapshot(&self) -> Vec<Violation> {
        self.0
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub(crate) fn take(&self) -> Vec<Violation> {
        std::mem::take(&mut *self.0.lock().unwrap_or_else(PoisonError::into_inner))
    }
}

/// Render violations as one diagnostic message.
pub(crate) fn report(violations: &[Violation]) -> String {
    let mut message = format!(
        "ghmock: {} usage violation(s) while serving canned responses:",
        violations.len()
    );
    for violation in violations {
        message.push_str("\n  - ");
        message.push_str(&violation.to_string());
    }
    message
}
