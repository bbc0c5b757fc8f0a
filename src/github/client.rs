//! GitHub API client implementation

use crate::config::Config;
use crate::core::{XswebError, XswebResult};
use crate::di::traits::CommitProvider;
use crate::github::types::{GitHubRepo, RepoCommit, RepoId};
use async_trait::async_trait;
use reqwest::{header, Client as HttpClient};
use std::sync::Arc;
use std::time::{Duration, SystemTime, UNIX_EPOCH};
use tokio::sync::Mutex;

/// GitHub API client
pub struct GitHubClient {
    http_client: HttpClient,
    api_url: String,
    per_page: u32,
    rate_limiter: Arc<RateLimiter>,
}

/// Rate limiter for GitHub API
struct RateLimiter {
    remaining: Mutex<u64>,
    reset_time: Mutex<SystemTime>,
}

impl GitHubClient {
    /// Create a new GitHub client
    pub fn new(config: &Config) -> XswebResult<Self> {
        let token = std::env::var("GITHUB_TOKEN")
            .ok()
            .or_else(|| config.github_token.clone());

        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::USER_AGENT,
            header::HeaderValue::from_static("xsweb-site-renderer"),
        );
        headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static("application/vnd.github.v3+json"),
        );

        if let Some(ref token) = token {
            headers.insert(
                header::AUTHORIZATION,
                header::HeaderValue::from_str(&format!("token {}", token))
                    .map_err(|e| XswebError::Config(format!("Invalid GitHub token: {}", e)))?,
            );
        }

        let http_client = HttpClient::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| XswebError::GitHub(format!("Failed to create HTTP client: {}", e)))?;

        // Unauthenticated requests get 60/hour, authenticated 5000/hour.
        let has_token = token.is_some();
        Ok(Self {
            http_client,
            api_url: config.github_api_url.clone(),
            per_page: config.commits_per_page,
            rate_limiter: Arc::new(RateLimiter {
                remaining: Mutex::new(if has_token { 5000 } else { 60 }),
                reset_time: Mutex::new(SystemTime::now() + Duration::from_secs(3600)),
            }),
        })
    }

    /// List the most recent commits on the default branch
    pub async fn list_commits(&self, repo: &RepoId) -> XswebResult<Vec<RepoCommit>> {
        let url = format!(
            "{}/repos/{}/{}/commits?per_page={}",
            self.api_url, repo.owner, repo.name, self.per_page
        );
        self.api_get(&url).await
    }

    /// Get repository information
    pub async fn get_repo(&self, repo: &RepoId) -> XswebResult<GitHubRepo> {
        let url = format!("{}/repos/{}/{}", self.api_url, repo.owner, repo.name);
        self.api_get(&url).await
    }

    /// Make an API request and handle rate limiting
    async fn api_request(&self, url: &str) -> XswebResult<reqwest::Response> {
        self.check_rate_limit().await?;

        tracing::debug!(url, "GitHub API request");

        let response = self
            .http_client
            .get(url)
            .send()
            .await
            .map_err(|e| XswebError::GitHub(format!("GitHub API request failed: {}", e)))?;

        self.update_rate_limit(&response).await;

        let status = response.status();
        if status == reqwest::StatusCode::FORBIDDEN && self.remaining().await == 0 {
            return Err(XswebError::RateLimited(
                "quota exhausted for this client".to_string(),
            ));
        }

        if !status.is_success() {
            return Err(XswebError::GitHub(format!(
                "GitHub API error: HTTP {}",
                status
            )));
        }

        Ok(response)
    }

    /// Make an API GET request and parse JSON response
    async fn api_get<T: serde::de::DeserializeOwned>(&self, url: &str) -> XswebResult<T> {
        let response = self.api_request(url).await?;

        response
            .json()
            .await
            .map_err(|e| XswebError::GitHub(format!("Failed to parse API response: {}", e)))
    }

    async fn remaining(&self) -> u64 {
        *self.rate_limiter.remaining.lock().await
    }

    /// Fail fast when the quota is known to be exhausted and the reset
    /// time has not passed yet.
    async fn check_rate_limit(&self) -> XswebResult<()> {
        let remaining = *self.rate_limiter.remaining.lock().await;
        if remaining == 0 {
            let reset = *self.rate_limiter.reset_time.lock().await;
            if SystemTime::now() < reset {
                let secs = reset
                    .duration_since(SystemTime::now())
                    .map(|d| d.as_secs())
                    .unwrap_or(0);
                return Err(XswebError::RateLimited(format!(
                    "quota exhausted, resets in {}s",
                    secs
                )));
            }
        }
        Ok(())
    }

    /// Update rate limit tracking from response headers
    async fn update_rate_limit(&self, response: &reqwest::Response) {
        if let Some(remaining) = response
            .headers()
            .get("x-ratelimit-remaining")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.parse::<u64>().ok())
        {
            if remaining < 10 {
                tracing::warn!(remaining, "GitHub API rate limit running low");
            }
            *self.rate_limiter.remaining.lock().await = remaining;
        }

        if let Some(reset) = response
            .headers()
            .get("x-ratelimit-reset")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.parse::<u64>().ok())
        {
            *self.rate_limiter.reset_time.lock().await = UNIX_EPOCH + Duration::from_secs(reset);
        }
    }
}

#[async_trait]
impl CommitProvider for GitHubClient {
    async fn list_commits(&self, repo: &RepoId) -> XswebResult<Vec<RepoCommit>> {
        self.list_commits(repo).await
    }
}
