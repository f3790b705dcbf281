//! Basic example: drive a tiny GitHub client against canned responses.
//!
//! Run with:
//! ```
//! RUST_LOG=ghmock=debug cargo run --example basic
//! ```

use ghmock::endpoints::{GET_ORGS_REPOS_BY_ORG, GET_USERS_BY_USERNAME, POST_USER_REPOS};
use ghmock::{
    with_request_match, with_request_match_handler, with_request_match_pages, MockBackend,
    MockRequest, MockResponse,
};
use reqwest::header::LINK;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use url::Url;

#[derive(Debug, Serialize, Deserialize)]
struct User {
    login: String,
    id: u64,
}

#[derive(Debug, Serialize, Deserialize)]
struct Repository {
    name: String,
    private: bool,
}

/// The code under test: a minimal client that only knows a base URL.
struct GitHub {
    http: reqwest::Client,
    base_url: Url,
}

impl GitHub {
    async fn user(&self, login: &str) -> ghmock::Result<User> {
        let url = self.base_url.join(&format!("users/{login}"))?;
        Ok(self.http.get(url).send().await?.error_for_status()?.json().await?)
    }

    /// Follow `Link: rel="next"` until the last page.
    async fn org_repos(&self, org: &str) -> ghmock::Result<Vec<Repository>> {
        let mut next = Some(self.base_url.join(&format!("orgs/{org}/repos?per_page=2"))?);
        let mut repos = Vec::new();

        while let Some(url) = next.take() {
            let response = self.http.get(url).send().await?.error_for_status()?;
            next = response
                .headers()
                .get(LINK)
                .and_then(|v| v.to_str().ok())
                .and_then(next_link)
                .map(|link| Url::parse(&link))
                .transpose()?;
            repos.extend(response.json::<Vec<Repository>>().await?);
        }

        Ok(repos)
    }

    async fn create_repo(&self, name: &str) -> ghmock::Result<StatusCode> {
        let url = self.base_url.join("user/repos")?;
        let body = serde_json::json!({ "name": name });
        Ok(self.http.post(url).json(&body).send().await?.status())
    }
}

fn next_link(header: &str) -> Option<String> {
    header.split(',').find_map(|part| {
        let (target, rel) = part.split_once(';')?;
        (rel.trim() == r#"rel="next""#)
            .then(|| target.trim().trim_start_matches('<').trim_end_matches('>').to_string())
    })
}

#[tokio::main]
async fn main() -> ghmock::Result<()> {
    // Initialize tracing for debugging (optional)
    tracing_subscriber::fmt::init();

    println!("Starting mock GitHub...");
    let server = MockBackend::new()
        .with(with_request_match(
            GET_USERS_BY_USERNAME,
            [User {
                login: "octocat".to_string(),
                id: 583231,
            }],
        ))
        .with(with_request_match_pages(
            GET_ORGS_REPOS_BY_ORG,
            [
                vec![
                    Repository { name: "linguist".to_string(), private: false },
                    Repository { name: "octokit.rb".to_string(), private: false },
                ],
                vec![Repository { name: "internal".to_string(), private: true }],
            ],
        ))
        .with(with_request_match_handler(POST_USER_REPOS, |req: &MockRequest| {
            match req.json::<serde_json::Value>() {
                Ok(body) if body["name"].is_string() => MockResponse::new(StatusCode::CREATED),
                _ => MockResponse::new(StatusCode::UNPROCESSABLE_ENTITY),
            }
        }))
        .start()
        .await?;
    println!("Listening on: {}", server.url());

    let github = GitHub {
        http: server.client(),
        base_url: server.base_url().clone(),
    };

    println!("\n--- Getting User ---");
    let user = github.user("octocat").await?;
    println!("  {} ({})", user.login, user.id);

    println!("\n--- Listing Org Repositories ---");
    for repo in github.org_repos("github").await? {
        let visibility = if repo.private { "private" } else { "public" };
        println!("  - {} ({})", repo.name, visibility);
    }

    println!("\n--- Creating Repository ---");
    println!("  status: {}", github.create_repo("hello-world").await?);

    server.shutdown().await;
    println!("\nDone!");
    Ok(())
}
