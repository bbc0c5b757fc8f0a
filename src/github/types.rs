//! GitHub API type definitions

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identifies a repository by its owner and name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RepoId {
    pub owner: String,
    pub name: String,
}

impl RepoId {
    pub fn new(owner: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            name: name.into(),
        }
    }

    /// Public repository page on github.com.
    pub fn html_url(&self) -> String {
        format!("https://github.com/{}/{}", self.owner, self.name)
    }
}

impl std::fmt::Display for RepoId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

/// One entry from the commit-listing API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepoCommit {
    pub sha: String,
    pub html_url: String,
    pub commit: CommitDetail,
}

impl RepoCommit {
    /// Abbreviated sha, as shown in commit links.
    pub fn short_sha(&self) -> &str {
        &self.sha[..self.sha.len().min(7)]
    }

    /// First line of the commit message.
    pub fn summary(&self) -> &str {
        self.commit.message.lines().next().unwrap_or_default()
    }
}

/// Commit metadata nested under the `commit` key.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommitDetail {
    pub message: String,
    pub author: CommitSignature,
}

/// Author or committer signature.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommitSignature {
    pub name: String,
    pub date: DateTime<Utc>,
}

/// GitHub repository information
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GitHubRepo {
    pub name: String,
    pub full_name: String,
    pub default_branch: String,
    pub description: Option<String>,
    pub html_url: String,
}
