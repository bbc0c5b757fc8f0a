//! Service container for dependency injection

use super::traits::{CommitProvider, ConfigProvider, MenuProvider};
use crate::config::Config;
use crate::core::XswebResult;
use crate::github::GitHubClient;
use crate::menu::Menu;
use std::sync::Arc;

/// Service container for dependency injection
///
/// Holds the collaborators a page render needs and exposes them as trait
/// objects, so tests can swap in stub implementations. The `Arc<dyn Trait>`
/// indirection costs one vtable lookup per call, which is noise next to the
/// network round-trip the commit provider makes.
///
/// # Example (Production)
///
/// ```no_run
/// use xsweb::di::ServiceContainer;
///
/// # fn example() -> xsweb::core::XswebResult<()> {
/// let container = ServiceContainer::new()?;
/// # Ok(())
/// # }
/// ```
///
/// # Example (Testing)
///
/// ```
/// use xsweb::di::{mocks::*, ServiceContainer};
/// use std::sync::Arc;
///
/// let container = ServiceContainer::with_providers(
///     Arc::new(MockConfigProvider::default()),
///     Arc::new(MockMenuProvider::new()),
///     Arc::new(MockCommitProvider::new()),
/// );
/// ```
#[derive(Clone)]
pub struct ServiceContainer {
    pub config: Arc<dyn ConfigProvider>,
    pub menu: Arc<dyn MenuProvider>,
    pub commits: Arc<dyn CommitProvider>,
}

impl ServiceContainer {
    /// Create a new service container with production implementations
    ///
    /// Loads the config from disk, builds the site menu, and initializes
    /// the GitHub HTTP client.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file cannot be loaded or created, or
    /// if the HTTP client cannot be built.
    pub fn new() -> XswebResult<Self> {
        let config = Config::load()?;
        let github = GitHubClient::new(&config)?;

        Ok(Self {
            config: Arc::new(config),
            menu: Arc::new(Menu::with_default_pages()),
            commits: Arc::new(github),
        })
    }

    /// Create a service container with custom provider implementations
    ///
    /// This is primarily useful for testing, where you can inject stub
    /// implementations of each service.
    pub fn with_providers(
        config: Arc<dyn ConfigProvider>,
        menu: Arc<dyn MenuProvider>,
        commits: Arc<dyn CommitProvider>,
    ) -> Self {
        Self {
            config,
            menu,
            commits,
        }
    }
}
