use thiserror::Error;

pub type XswebResult<T> = Result<T, XswebError>;

#[derive(Error, Debug)]
pub enum XswebError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("GitHub API error: {0}")]
    GitHub(String),

    /// The GitHub API rate limit is exhausted. Carries the reset time
    /// when the response headers provided one.
    #[error("GitHub API rate limited: {0}")]
    RateLimited(String),

    #[error("Menu error: {0}")]
    Menu(String),

    #[error("Page error: {0}")]
    Page(String),
}
