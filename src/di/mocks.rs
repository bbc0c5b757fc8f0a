//! Mock implementations of service traits for testing

use super::traits::{CommitProvider, ConfigProvider, MenuProvider};
use crate::core::{XswebError, XswebResult};
use crate::github::types::{RepoCommit, RepoId};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

/// Mock configuration provider for testing
#[derive(Clone)]
pub struct MockConfigProvider {
    pub github_api_url: String,
    pub github_token: Option<String>,
    pub request_timeout_secs: u64,
    pub commits_per_page: u32,
}

impl Default for MockConfigProvider {
    fn default() -> Self {
        Self {
            github_api_url: "https://api.github.com".to_string(),
            github_token: None,
            request_timeout_secs: 30,
            commits_per_page: 10,
        }
    }
}

impl ConfigProvider for MockConfigProvider {
    fn github_api_url(&self) -> &str {
        &self.github_api_url
    }

    fn github_token(&self) -> Option<&str> {
        self.github_token.as_deref()
    }

    fn request_timeout_secs(&self) -> u64 {
        self.request_timeout_secs
    }

    fn commits_per_page(&self) -> u32 {
        self.commits_per_page
    }
}

/// Mock menu provider for testing
///
/// Returns canned links from a fixed table, or a forced error when
/// `fail_with` is set.
///
/// # Example
///
/// ```
/// use xsweb::di::mocks::MockMenuProvider;
/// use xsweb::di::MenuProvider;
///
/// let mut menu = MockMenuProvider::new();
/// menu.add_link("/docs", "<a href=\"/docs\">docs</a>");
///
/// assert!(menu.page_link("/docs", "docs").is_ok());
/// assert!(menu.page_link("/missing", "x").is_err());
/// ```
#[derive(Default)]
pub struct MockMenuProvider {
    links: HashMap<String, String>,
    fail_with: Option<String>,
}

impl MockMenuProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a canned link for a path
    pub fn add_link(&mut self, path: impl Into<String>, markup: impl Into<String>) {
        self.links.insert(path.into(), markup.into());
    }

    /// Make every resolution fail with the given message
    pub fn fail_with(&mut self, message: impl Into<String>) {
        self.fail_with = Some(message.into());
    }
}

impl MenuProvider for MockMenuProvider {
    fn page_link(&self, path: &str, _label: &str) -> XswebResult<String> {
        if let Some(ref message) = self.fail_with {
            return Err(XswebError::Menu(message.clone()));
        }
        self.links
            .get(path)
            .cloned()
            .ok_or_else(|| XswebError::Menu(format!("no page registered for path '{}'", path)))
    }
}

/// Mock commit provider for testing
///
/// Serves canned commit lists keyed by repository, or a forced error when
/// `fail_with` is set. Records how many times it was queried.
#[derive(Default)]
pub struct MockCommitProvider {
    commits: Mutex<HashMap<RepoId, Vec<RepoCommit>>>,
    fail_with: Option<String>,
    calls: Mutex<u32>,
}

impl MockCommitProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a canned commit list for a repository
    pub fn add_commits(&self, repo: RepoId, commits: Vec<RepoCommit>) {
        self.commits.lock().unwrap().insert(repo, commits);
    }

    /// Make every fetch fail with the given message
    pub fn fail_with(&mut self, message: impl Into<String>) {
        self.fail_with = Some(message.into());
    }

    /// Number of times `list_commits` was called
    pub fn call_count(&self) -> u32 {
        *self.calls.lock().unwrap()
    }
}

#[async_trait]
impl CommitProvider for MockCommitProvider {
    async fn list_commits(&self, repo: &RepoId) -> XswebResult<Vec<RepoCommit>> {
        *self.calls.lock().unwrap() += 1;

        if let Some(ref message) = self.fail_with {
            return Err(XswebError::GitHub(message.clone()));
        }
        self.commits
            .lock()
            .unwrap()
            .get(repo)
            .cloned()
            .ok_or_else(|| XswebError::GitHub(format!("no commits registered for {}", repo)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_commit_provider_counts_calls() {
        let provider = MockCommitProvider::new();
        let repo = RepoId::new("macmade", "XSFoundation");
        provider.add_commits(repo.clone(), vec![]);

        provider.list_commits(&repo).await.unwrap();
        provider.list_commits(&repo).await.unwrap();
        assert_eq!(provider.call_count(), 2);
    }

    #[tokio::test]
    async fn test_mock_commit_provider_forced_failure() {
        let mut provider = MockCommitProvider::new();
        provider.fail_with("boom");

        let err = provider
            .list_commits(&RepoId::new("a", "b"))
            .await
            .unwrap_err();
        assert!(matches!(err, XswebError::GitHub(_)));
    }

    #[test]
    fn test_mock_menu_provider_forced_failure() {
        let mut menu = MockMenuProvider::new();
        menu.add_link("/docs", "<a>docs</a>");
        menu.fail_with("menu down");

        assert!(menu.page_link("/docs", "docs").is_err());
    }
}
