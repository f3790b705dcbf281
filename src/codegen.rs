//! Generation of the endpoint catalog from GitHub's OpenAPI description.
//!
//! This runs offline through the `ghmock-gen` binary; the mock server never
//! calls into it. The output is [`crate::endpoints`].

use std::collections::HashSet;
use std::fmt::Write as _;

use axum::body::Bytes;
use serde_json::Value;

use crate::endpoint::EndpointPattern;
use crate::error::{MockError, Result};

/// Where GitHub publishes the OpenAPI description of its REST API.
pub const GITHUB_OPENAPI_DEFINITION_URL: &str = "https://github.com/github/rest-api-description/blob/main/descriptions/api.github.com/api.github.com.json?raw=true";

/// Where the generated catalog is written, relative to the crate root.
pub const DEFAULT_OUTPUT_PATH: &str = "src/endpoints.rs";

/// First lines of every generated catalog.
pub const OUTPUT_FILE_HEADER: &str =
    "// Code generated by ghmock-gen; DO NOT EDIT.\n\nuse crate::endpoint::EndpointPattern;\n";

/// Keys of an OpenAPI path item that name operations.
const HTTP_METHODS: [&str; 8] = [
    "get", "put", "post", "delete", "options", "head", "patch", "trace",
];

/// One operation found in the API description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrapeResult {
    /// HTTP method, upper-case.
    pub method: String,
    /// Path template, e.g. `/users/{username}`.
    pub pattern: String,
}

impl From<&EndpointPattern> for ScrapeResult {
    fn from(ep: &EndpointPattern) -> Self {
        Self {
            method: ep.method().to_string(),
            pattern: ep.pattern().to_string(),
        }
    }
}

/// The generated catalog source and what went into it.
#[derive(Debug, Clone, Default)]
pub struct Rendered {
    /// Rust source of the catalog module.
    pub source: String,
    /// Emitted constants, as `(name, operation)`.
    pub constants: Vec<(String, ScrapeResult)>,
    /// Operations dropped because their name was already taken.
    pub skipped: Vec<ScrapeResult>,
}

/// Download the API description.
///
/// # Errors
///
/// Returns an error if the request fails or the server answers with a
/// non-success status.
pub async fn fetch_api_definition(client: &reqwest::Client, url: &str) -> Result<Bytes> {
    tracing::debug!(%url, "fetching api definition");

    let response = client.get(url).send().await?.error_for_status()?;
    Ok(response.bytes().await?)
}

/// List every `(method, path)` operation in an OpenAPI document.
///
/// Path item keys that are not HTTP methods (`parameters`, `summary`, ...)
/// are ignored. Results are sorted by path, then by method key.
///
/// # Errors
///
/// Returns an error if the document is not JSON or has no `paths` object.
pub fn parse_api_definition(definition: &[u8]) -> Result<Vec<ScrapeResult>> {
    let document: Value = serde_json::from_slice(definition)?;
    let paths = document
        .get("paths")
        .and_then(Value::as_object)
        .ok_or_else(|| MockError::Schema("missing `paths` object".to_string()))?;

    let mut results = Vec::new();
    for (pattern, item) in paths {
        let Some(operations) = item.as_object() else {
            tracing::warn!(%pattern, "skipping path item that is not an object");
            continue;
        };

        for key in operations.keys() {
            let method = key.to_ascii_lowercase();
            if !HTTP_METHODS.contains(&method.as_str()) {
                continue;
            }
            results.push(ScrapeResult {
                method: method.to_ascii_uppercase(),
                pattern: pattern.clone(),
            });
        }
    }

    Ok(results)
}

/// Name of the constant generated for an operation.
///
/// The method comes first, then every literal path segment, then `BY_<NAME>`
/// for every placeholder, in path order. Hyphens and underscores separate
/// words.
///
/// ```
/// use ghmock::codegen::{const_name, ScrapeResult};
///
/// let op = ScrapeResult {
///     method: "GET".into(),
///     pattern: "/repos/{owner}/{repo}/pulls".into(),
/// };
/// assert_eq!(const_name(&op), "GET_REPOS_PULLS_BY_OWNER_BY_REPO");
/// ```
pub fn const_name(result: &ScrapeResult) -> String {
    let mut words = vec![result.method.to_ascii_uppercase()];

    if result.pattern == "/" {
        words.push("SLASH".to_string());
        return words.join("_");
    }

    let pattern = result.pattern.replace('-', "/");
    let (placeholders, literals): (Vec<&str>, Vec<&str>) = pattern
        .split('/')
        .filter(|segment| !segment.is_empty())
        .partition(|segment| segment.starts_with('{'));

    for literal in literals {
        words.extend(split_words(literal));
    }
    for placeholder in placeholders {
        words.push("BY".to_string());
        words.extend(split_words(placeholder));
    }

    words.join("_")
}

fn split_words(segment: &str) -> impl Iterator<Item = String> + '_ {
    segment
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|word| !word.is_empty())
        .map(str::to_ascii_uppercase)
}

/// Render the catalog module for a list of operations.
///
/// Operations whose constant name was already emitted are skipped; the
/// first one wins.
pub fn render(results: &[ScrapeResult]) -> Rendered {
    let mut rendered = Rendered {
        source: OUTPUT_FILE_HEADER.to_string(),
        ..Default::default()
    };
    let mut seen = HashSet::new();

    for result in results {
        let name = const_name(result);
        if !seen.insert(name.clone()) {
            tracing::warn!(
                %name,
                method = %result.method,
                pattern = %result.pattern,
                "duplicate constant name, skipping"
            );
            rendered.skipped.push(result.clone());
            continue;
        }

        tracing::debug!(%name, pattern = %result.pattern, "writing");
        let _ = write!(
            rendered.source,
            "\npub const {name}: EndpointPattern = EndpointPattern::new({:?}, {:?});\n",
            result.method, result.pattern
        );
        rendered.constants.push((name, result.clone()));
    }

    rendered
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::endpoints;

    fn op(method: &str, pattern: &str) -> ScrapeResult {
        ScrapeResult {
            method: method.to_string(),
            pattern: pattern.to_string(),
        }
    }

    #[test]
    fn test_const_name_examples() {
        assert_eq!(const_name(&op("GET", "/")), "GET_SLASH");
        assert_eq!(const_name(&op("get", "/users/{username}")), "GET_USERS_BY_USERNAME");
        assert_eq!(
            const_name(&op("PUT", "/orgs/{org}/actions/secrets/{secret_name}")),
            "PUT_ORGS_ACTIONS_SECRETS_BY_ORG_BY_SECRET_NAME"
        );
        assert_eq!(
            const_name(&op("GET", "/orgs/{org}/actions/runner-groups")),
            "GET_ORGS_ACTIONS_RUNNER_GROUPS_BY_ORG"
        );
        assert_eq!(const_name(&op("GET", "/rate_limit")), "GET_RATE_LIMIT");
    }

    #[test]
    fn test_checked_in_catalog_matches_naming() {
        let cases = [
            (endpoints::GET_SLASH, "GET_SLASH"),
            (endpoints::GET_USERS_BY_USERNAME, "GET_USERS_BY_USERNAME"),
            (endpoints::GET_ORGS_REPOS_BY_ORG, "GET_ORGS_REPOS_BY_ORG"),
            (
                endpoints::GET_REPOS_PULLS_BY_OWNER_BY_REPO_BY_PULL_NUMBER,
                "GET_REPOS_PULLS_BY_OWNER_BY_REPO_BY_PULL_NUMBER",
            ),
            (
                endpoints::POST_REPOS_ACTIONS_WORKFLOWS_DISPATCHES_BY_OWNER_BY_REPO_BY_WORKFLOW_ID,
                "POST_REPOS_ACTIONS_WORKFLOWS_DISPATCHES_BY_OWNER_BY_REPO_BY_WORKFLOW_ID",
            ),
        ];

        for (ep, name) in cases {
            assert_eq!(const_name(&ScrapeResult::from(&ep)), name);
        }
    }

    #[test]
    fn test_parse_keeps_only_operations() {
        let definition = br#"{
            "openapi": "3.0.3",
            "paths": {
                "/users/{username}": {
                    "parameters": [],
                    "get": {"operationId": "users/get-by-username"}
                },
                "/gists/{gist_id}": {
                    "summary": "A gist",
                    "get": {},
                    "patch": {},
                    "delete": {}
                }
            }
        }"#;

        let results = parse_api_definition(definition).unwrap();

        assert_eq!(
            results,
            vec![
                op("DELETE", "/gists/{gist_id}"),
                op("GET", "/gists/{gist_id}"),
                op("PATCH", "/gists/{gist_id}"),
                op("GET", "/users/{username}"),
            ]
        );
    }

    #[test]
    fn test_parse_requires_paths() {
        let err = parse_api_definition(br#"{"openapi": "3.0.3"}"#).unwrap_err();
        assert!(matches!(err, MockError::Schema(_)));

        let err = parse_api_definition(b"not json").unwrap_err();
        assert!(matches!(err, MockError::Serialization(_)));
    }

    #[test]
    fn test_render_emits_constants() {
        let rendered = render(&[op("GET", "/users/{username}"), op("GET", "/")]);

        assert!(rendered.source.starts_with(OUTPUT_FILE_HEADER));
        assert!(rendered.source.contains(
            "pub const GET_USERS_BY_USERNAME: EndpointPattern = \
             EndpointPattern::new(\"GET\", \"/users/{username}\");"
        ));
        assert!(rendered
            .source
            .contains(r#"GET_SLASH: EndpointPattern = EndpointPattern::new("GET", "/");"#));
        assert_eq!(rendered.constants.len(), 2);
        assert!(rendered.skipped.is_empty());
    }

    #[test]
    fn test_render_skips_duplicate_names() {
        // Hyphens and slashes both separate words
        let rendered = render(&[op("GET", "/a/b-c"), op("GET", "/a/b/c")]);

        assert_eq!(rendered.constants.len(), 1);
        assert_eq!(rendered.constants[0].1, op("GET", "/a/b-c"));
        assert_eq!(rendered.skipped, vec![op("GET", "/a/b/c")]);
        assert_eq!(rendered.source.matches("pub const GET_A_B_C").count(), 1);
    }
}
