use crate::core::{XswebError, XswebResult};
use crate::di::ConfigProvider;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// GitHub API base URL
    #[serde(default = "default_github_api_url")]
    pub github_api_url: String,

    /// GitHub API token (the GITHUB_TOKEN environment variable takes
    /// precedence over this value)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github_token: Option<String>,

    /// HTTP request timeout in seconds
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// Number of commits shown on pages embedding a commit list
    /// (GitHub caps this at 100)
    #[serde(default = "default_commits_per_page")]
    pub commits_per_page: u32,
}

fn default_github_api_url() -> String {
    "https://api.github.com".to_string()
}

fn default_request_timeout_secs() -> u64 {
    30
}

fn default_commits_per_page() -> u32 {
    10
}

impl Default for Config {
    fn default() -> Self {
        Self {
            github_api_url: default_github_api_url(),
            github_token: None,
            request_timeout_secs: default_request_timeout_secs(),
            commits_per_page: default_commits_per_page(),
        }
    }
}

impl Config {
    /// Load config from the platform config directory, creating a default
    /// file if it doesn't exist
    ///
    /// Config locations:
    /// - Windows: %APPDATA%\xsweb\config.yaml
    /// - Linux: ~/.config/xsweb/config.yaml
    /// - macOS: ~/Library/Application Support/xsweb/config.yaml
    pub fn load() -> XswebResult<Self> {
        let config_path = Self::config_file()?;

        if !config_path.exists() {
            let config = Self::default();
            config.save()?;
            return Ok(config);
        }

        let content = fs::read_to_string(&config_path)?;
        let config: Config = serde_yaml::from_str(&content)
            .map_err(|e| XswebError::Config(format!("Failed to parse config: {}", e)))?;

        Ok(config)
    }

    /// Save config to the platform config directory
    pub fn save(&self) -> XswebResult<()> {
        let config_path = Self::config_file()?;

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = serde_yaml::to_string(self)?;
        fs::write(&config_path, content)?;

        Ok(())
    }

    fn config_file() -> XswebResult<PathBuf> {
        let dir = dirs::config_dir()
            .ok_or_else(|| XswebError::Config("Could not determine config directory".to_string()))?;
        Ok(dir.join("xsweb").join("config.yaml"))
    }
}

impl ConfigProvider for Config {
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
