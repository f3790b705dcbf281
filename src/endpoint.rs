//! Endpoint identity: an HTTP method plus a URL path template.

use std::borrow::Cow;
use std::fmt;

/// Mount point GitHub Enterprise Server serves the REST API under.
pub const ENTERPRISE_PREFIX: &str = "/api/v3";

/// One API operation, identified by its HTTP method and path template.
///
/// Path templates use `{name}` placeholders, e.g. `/users/{username}`.
/// The catalog in [`crate::endpoints`] holds one constant per operation of
/// the GitHub REST API; ad-hoc patterns can be built with
/// [`EndpointPattern::from_parts`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EndpointPattern {
    method: Cow<'static, str>,
    pattern: Cow<'static, str>,
}

impl EndpointPattern {
    /// Create a pattern from static strings.
    ///
    /// The method must already be upper-case; this is what generated
    /// catalog constants use.
    pub const fn new(method: &'static str, pattern: &'static str) -> Self {
        Self {
            method: Cow::Borrowed(method),
            pattern: Cow::Borrowed(pattern),
        }
    }

    /// Create a pattern from owned parts. The method is upper-cased.
    pub fn from_parts(method: impl Into<String>, pattern: impl Into<String>) -> Self {
        Self {
            method: Cow::Owned(method.into().to_ascii_uppercase()),
            pattern: Cow::Owned(pattern.into()),
        }
    }

    /// The HTTP method, upper-case.
    pub fn method(&self) -> &str {
        &self.method
    }

    /// The path template.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// The same operation mounted under [`ENTERPRISE_PREFIX`].
    ///
    /// ```
    /// use ghmock::endpoints::GET_ORGS_REPOS_BY_ORG;
    ///
    /// let ep = GET_ORGS_REPOS_BY_ORG.enterprise();
    /// assert_eq!(ep.pattern(), "/api/v3/orgs/{org}/repos");
    /// assert_eq!(GET_ORGS_REPOS_BY_ORG.pattern(), "/orgs/{org}/repos");
    /// ```
    #[must_use]
    pub fn enterprise(&self) -> Self {
        Self {
            method: self.method.clone(),
            pattern: Cow::Owned(format!("{ENTERPRISE_PREFIX}{}", self.pattern)),
        }
    }

    /// The path in axum's route syntax.
    ///
    /// Placeholders are renamed by position (`:p0`, `:p1`, ...). Handlers
    /// never extract path parameters, and positional names keep two
    /// templates that only differ in placeholder names from colliding in
    /// the router. A missing leading `/` is added.
    pub(crate) fn route_path(&self) -> String {
        let mut index = 0;
        let pattern: &str = &self.pattern;
        let pattern = pattern.strip_prefix('/').unwrap_or(pattern);
        let segments: Vec<String> = std::iter::once("")
            .chain(pattern.split('/'))
            .map(|segment| {
                if segment.starts_with('{') && segment.ends_with('}') {
                    let name = format!(":p{index}");
                    index += 1;
                    name
                } else {
                    segment.to_string()
                }
            })
            .collect();
        segments.join("/")
    }
}

impl fmt::Display for EndpointPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.method, self.pattern)
    }
}
