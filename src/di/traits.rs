//! Trait definitions for dependency injection

use crate::core::XswebResult;
use crate::github::types::{RepoCommit, RepoId};
use async_trait::async_trait;

/// Trait for configuration access
///
/// Provides read-only access to application configuration.
/// Implementations should be thread-safe (Send + Sync).
pub trait ConfigProvider: Send + Sync {
    /// Get the GitHub API base URL
    fn github_api_url(&self) -> &str;

    /// Get the configured GitHub API token, if any
    fn github_token(&self) -> Option<&str>;

    /// Get the HTTP request timeout in seconds
    fn request_timeout_secs(&self) -> u64;

    /// Get the number of commits shown in embedded commit lists
    fn commits_per_page(&self) -> u32;
}

/// Trait for internal navigation link resolution
///
/// Resolves a registered page path and a display label to anchor markup.
/// Unregistered paths are an error; no fallback link is produced.
pub trait MenuProvider: Send + Sync {
    fn page_link(&self, path: &str, label: &str) -> XswebResult<String>;
}

/// Trait for fetching recent commits of a repository
///
/// Implementations query a source-hosting provider and return structured
/// commit records; pages turn the records into markup themselves.
#[async_trait]
pub trait CommitProvider: Send + Sync {
    async fn list_commits(&self, repo: &RepoId) -> XswebResult<Vec<RepoCommit>>;
}
