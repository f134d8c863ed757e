use crate::error::{Result, StarWatchError};
use crate::link;
use crate::types::GitHubRepo;
use reqwest::{Client, Response};
use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, warn};
use url::Url;

const API_BASE_URL: &str = "https://api.github.com";
const PER_PAGE: u32 = 100;
const MAX_RETRIES: u32 = 3;

pub struct GitHubClient {
    client: Client,
    base_url: String,
}

impl GitHubClient {
    pub fn new() -> Result<Self> {
        Self::with_base_url(API_BASE_URL)
    }

    /// Client against a non-default API base URL, used by tests to point at
    /// a local mock endpoint.
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .user_agent("GitHub Stars Watcher/0.1.0")
            .timeout(Duration::from_secs(30))
            .build()?;

        Ok(GitHubClient {
            client,
            base_url: base_url.into(),
        })
    }

    async fn make_request(&self, url: &str) -> Result<Response> {
        let mut retries = 0;

        loop {
            let response = self
                .client
                .get(url)
                .header("Accept", "application/vnd.github.v3+json")
                .send()
                .await?;

            match response.status() {
                reqwest::StatusCode::OK => return Ok(response),
                reqwest::StatusCode::NOT_FOUND => {
                    return Err(StarWatchError::NotFound(format!(
                        "Resource not found: {}",
                        url
                    )));
                }
                status if status.is_server_error() && retries < MAX_RETRIES => {
                    warn!("Server error ({}). Retrying in 2 seconds...", status);
                    sleep(Duration::from_secs(2)).await;
                    retries += 1;
                }
                status => {
                    let error_text = response.text().await.unwrap_or_default();
                    return Err(StarWatchError::Api(format!(
                        "API request failed with status {}: {}",
                        status, error_text
                    )));
                }
            }
        }
    }

    /// Fetch every repository owned by `username`, following `Link` header
    /// pagination until the last page.
    ///
    /// Any failure aborts the whole fetch; a partial listing is never
    /// returned. An empty listing is a success.
    pub async fn list_user_repos(&self, username: &str) -> Result<Vec<GitHubRepo>> {
        let first_page = Url::parse_with_params(
            &format!("{}/users/{}/repos", self.base_url, username),
            &[("per_page", PER_PAGE.to_string())],
        )
        .map_err(|e| StarWatchError::Api(format!("Invalid request URL: {}", e)))?;

        let mut repos = Vec::new();
        let mut next_url = Some(String::from(first_page));

        while let Some(url) = next_url.take() {
            let response = self.make_request(&url).await?;

            next_url = response
                .headers()
                .get(reqwest::header::LINK)
                .and_then(|h| h.to_str().ok())
                .and_then(link::next_url);

            let body = response.text().await?;
            let page: Vec<GitHubRepo> = serde_json::from_str(&body)?;

            debug!(
                page_repos = page.len(),
                has_next = next_url.is_some(),
                "Fetched repository page"
            );

            repos.extend(page);
        }

        Ok(repos)
    }
}
